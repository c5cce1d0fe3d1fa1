//! Wire-level behaviour of the player record.

use anyhow::Result;
use holdem_shared::{from_json, to_json, Card, PlayerSnapshot, Rank, Suit};

fn roundtrip(p: &PlayerSnapshot) -> Result<PlayerSnapshot> {
    let text = to_json(p)?;
    Ok(from_json(&text)?)
}

#[test]
fn alice_hidden_hand_roundtrips() -> Result<()> {
    let alice = PlayerSnapshot::new("alice", "/img/1.png", 1000).with_bet(50);
    assert_eq!(roundtrip(&alice)?, alice);
    Ok(())
}

#[test]
fn bob_shown_hand_roundtrips() -> Result<()> {
    let bob = PlayerSnapshot::new("bob", "", 0)
        .with_cards([
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
        ])
        .showing();
    assert_eq!(roundtrip(&bob)?, bob);

    let text = to_json(&bob)?;
    assert_eq!(
        text,
        r#"{"nick":"bob","photo":"","chips":0,"actualBet":0,"showingCards":true,"cards":[{"rank":"A","suit":"spades"},{"rank":"K","suit":"hearts"}]}"#
    );
    Ok(())
}

#[test]
fn all_zero_boundary_roundtrips() -> Result<()> {
    let empty = PlayerSnapshot::new("", "", 0);
    assert_eq!(roundtrip(&empty)?, empty);

    let max = PlayerSnapshot::new("whale", "https://cdn/avatar", u64::MAX).with_bet(u64::MAX);
    assert_eq!(roundtrip(&max)?, max);
    Ok(())
}

#[test]
fn decodes_foreign_json() -> Result<()> {
    let p: PlayerSnapshot = from_json(
        r#"{"nick":"bob","photo":"","chips":0,"actualBet":0,"showingCards":true,
            "cards":[{"rank":"A","suit":"spades"},{"rank":"K","suit":"hearts"}]}"#,
    )?;
    assert_eq!(p.cards[0], "As".parse::<Card>()?);
    assert_eq!(p.cards[1], "Kh".parse::<Card>()?);
    assert!(p.showing_cards);
    Ok(())
}

#[test]
fn missing_optional_fields_take_defaults() -> Result<()> {
    let p: PlayerSnapshot = from_json(r#"{"nick":"carol","chips":20}"#)?;
    assert_eq!(p, PlayerSnapshot::new("carol", "", 20));
    Ok(())
}

#[test]
fn negative_chips_are_rejected() {
    let res = from_json::<PlayerSnapshot>(
        r#"{"nick":"x","photo":"","chips":-1,"actualBet":0,"showingCards":false,"cards":[]}"#,
    );
    assert!(res.is_err());
}

#[test]
fn unknown_rank_is_rejected() {
    let res = from_json::<PlayerSnapshot>(
        r#"{"nick":"x","photo":"","chips":1,"actualBet":0,"showingCards":true,"cards":[{"rank":"1","suit":"spades"}]}"#,
    );
    assert!(res.is_err());
}
