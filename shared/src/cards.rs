//! Card types carried inside snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SnapshotError;

pub const NUM_RANKS: u8 = 13;
pub const NUM_SUITS: u8 = 4;
pub const DECK_SIZE: usize = (NUM_RANKS * NUM_SUITS) as usize;

/// Card rank, ordered from Two (lowest) to Ace.
///
/// On the wire a rank is its short symbol: "2".."9", "T", "J", "Q", "K", "A".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two = 0,
    #[serde(rename = "3")]
    Three = 1,
    #[serde(rename = "4")]
    Four = 2,
    #[serde(rename = "5")]
    Five = 3,
    #[serde(rename = "6")]
    Six = 4,
    #[serde(rename = "7")]
    Seven = 5,
    #[serde(rename = "8")]
    Eight = 6,
    #[serde(rename = "9")]
    Nine = 7,
    #[serde(rename = "T", alias = "10")]
    Ten = 8,
    #[serde(rename = "J")]
    Jack = 9,
    #[serde(rename = "Q")]
    Queen = 10,
    #[serde(rename = "K")]
    King = 11,
    #[serde(rename = "A")]
    Ace = 12,
}

impl Rank {
    pub const ALL: [Rank; NUM_RANKS as usize] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Convert from the compact rank index (0=Two, ..., 12=Ace).
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Short symbol used on the wire and in card strings.
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn from_symbol(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "10" => Some(Rank::Ten),
            sym => Self::ALL.into_iter().find(|r| r.symbol() == sym),
        }
    }
}

/// Card suit. Serialized as its lowercase English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; NUM_SUITS as usize] =
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Convert from the compact suit index (0=Clubs, 1=Diamonds, 2=Hearts, 3=Spades).
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Get the suit as a character (♣, ♦, ♥, ♠)
    pub fn icon(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Some(Suit::Clubs),
            'd' | '♦' => Some(Suit::Diamonds),
            'h' | '♥' => Some(Suit::Hearts),
            's' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// A playing card, serialized as `{"rank": "A", "suit": "spades"}`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Build a card from its compact index `suit * 13 + rank`.
    pub fn from_index(index: u8) -> Result<Self, SnapshotError> {
        let rank = Rank::from_u8(index % NUM_RANKS);
        let suit = Suit::from_u8(index / NUM_RANKS);
        match (rank, suit) {
            (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
            _ => Err(SnapshotError::InvalidCardIndex(index)),
        }
    }

    /// Compact index in `0..52`.
    pub fn index(self) -> u8 {
        (self.suit as u8) * NUM_RANKS + (self.rank as u8)
    }

    /// All 52 cards in index order.
    pub fn deck() -> Vec<Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card { rank, suit }))
            .collect()
    }

    /// Check if this is a red suit (hearts or diamonds)
    pub fn is_red(self) -> bool {
        matches!(self.suit, Suit::Hearts | Suit::Diamonds)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.icon())
    }
}

/// Parses "As", "Th", "10d" or "K♥".
impl FromStr for Card {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || SnapshotError::InvalidCard(s.to_string());
        let suit_char = s.chars().last().ok_or_else(invalid)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        let suit = Suit::from_char(suit_char).ok_or_else(invalid)?;
        let rank = Rank::from_symbol(rank_part).ok_or_else(invalid)?;
        Ok(Card { rank, suit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_deck_order() {
        let deck = Card::deck();
        assert_eq!(deck.len(), DECK_SIZE);
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.index() as usize, i);
            assert_eq!(Card::from_index(i as u8).unwrap(), *card);
        }
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        assert!(matches!(
            Card::from_index(52),
            Err(SnapshotError::InvalidCardIndex(52))
        ));
    }

    #[test]
    fn parse_short_forms() {
        assert_eq!(
            "As".parse::<Card>().unwrap(),
            Card::new(Rank::Ace, Suit::Spades)
        );
        assert_eq!(
            "Th".parse::<Card>().unwrap(),
            Card::new(Rank::Ten, Suit::Hearts)
        );
        assert_eq!(
            "10d".parse::<Card>().unwrap(),
            Card::new(Rank::Ten, Suit::Diamonds)
        );
        assert_eq!(
            "K♥".parse::<Card>().unwrap(),
            Card::new(Rank::King, Suit::Hearts)
        );
        assert!("".parse::<Card>().is_err());
        assert!("Zs".parse::<Card>().is_err());
        assert!("Ax".parse::<Card>().is_err());
    }

    #[test]
    fn display_uses_suit_icon() {
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).to_string(), "T♣");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
    }

    #[test]
    fn wire_format_uses_symbols() {
        let card = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(
            serde_json::to_string(&card).unwrap(),
            r#"{"rank":"A","suit":"spades"}"#
        );
        let ten: Card = serde_json::from_str(r#"{"rank":"10","suit":"hearts"}"#).unwrap();
        assert_eq!(ten, Card::new(Rank::Ten, Suit::Hearts));
    }

    #[test]
    fn red_suits() {
        assert!(Card::new(Rank::Two, Suit::Hearts).is_red());
        assert!(Card::new(Rank::Two, Suit::Diamonds).is_red());
        assert!(!Card::new(Rank::Two, Suit::Clubs).is_red());
    }
}
