//! Public per-player state carried inside a table snapshot.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::cards::Card;
use crate::codec::null_as_default;
use crate::error::SnapshotError;

/// Number of hole cards dealt to each player.
pub const HOLE_CARDS: usize = 2;

/// One player's publicly visible state at a point in time within a hand.
///
/// Built fresh for every broadcast and dropped once sent. `cards` is only
/// meaningful to a viewer when `showing_cards` is set or when the snapshot
/// was produced for the player holding them; see [`PlayerSnapshot::redacted`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    /// Display name.
    pub nick: String,
    /// Avatar image reference, usually a path or URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo: String,
    /// Chips behind, not counting the current bet.
    pub chips: u64,
    /// Chips wagered in the current betting round.
    #[serde(default)]
    pub actual_bet: u64,
    /// Whether the hand has been turned face up (showdown).
    #[serde(default)]
    pub showing_cards: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cards: Vec<Card>,
}

impl PlayerSnapshot {
    pub fn new(nick: impl Into<String>, photo: impl Into<String>, chips: u64) -> Self {
        Self {
            nick: nick.into(),
            photo: photo.into(),
            chips,
            actual_bet: 0,
            showing_cards: false,
            cards: Vec::new(),
        }
    }

    pub fn with_bet(mut self, amount: u64) -> Self {
        self.actual_bet = amount;
        self
    }

    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.cards = cards.into_iter().collect();
        self
    }

    /// Mark the hand as turned face up.
    pub fn showing(mut self) -> Self {
        self.showing_cards = true;
        self
    }

    /// Copy suitable for anyone but the card holder: hidden hands lose their cards.
    pub fn redacted(&self) -> Self {
        let mut out = self.clone();
        if !out.showing_cards {
            out.cards.clear();
        }
        out
    }

    /// Chips behind plus chips in front.
    pub fn committed(&self) -> u64 {
        self.chips.saturating_add(self.actual_bet)
    }

    pub fn validate(&self) -> Result<(), SnapshotError> {
        let count = self.cards.len();
        if count != 0 && count != HOLE_CARDS {
            return Err(SnapshotError::HoleCardCount {
                nick: self.nick.clone(),
                count,
                expected: HOLE_CARDS,
            });
        }
        let mut seen = HashSet::with_capacity(count);
        for card in &self.cards {
            if !seen.insert(*card) {
                return Err(SnapshotError::DuplicateCard(*card));
            }
        }
        Ok(())
    }
}
