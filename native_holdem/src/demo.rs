//! Random table snapshots for trying out clients and the `show` command.

use anyhow::{bail, Context, Result};
use holdem_shared::{Card, PlayerSnapshot, RoundStep, TableSnapshot, DECK_SIZE, HOLE_CARDS};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

pub const STARTING_CHIPS: u64 = 1000;
pub const SMALL_BLIND: u64 = 5;
pub const BIG_BLIND: u64 = 10;

/// Deal an omniscient snapshot: `players` seated from seat 0, everyone's
/// hole cards filled in, board cards matching `step`. Redact it with
/// [`TableSnapshot::for_viewer`] before handing it to anyone.
pub fn deal_table<R: Rng + ?Sized>(
    seats: usize,
    players: usize,
    step: RoundStep,
    rng: &mut R,
) -> Result<TableSnapshot> {
    if players > seats {
        bail!("{} players do not fit at a table of {} seats", players, seats);
    }
    let needed = players * HOLE_CARDS + step.visible_board_cards();
    if step.is_dealt() && needed > DECK_SIZE {
        bail!(
            "dealing {} players at {:?} needs {} cards, the deck has {}",
            players,
            step,
            needed,
            DECK_SIZE
        );
    }

    let mut deck = Card::deck();
    deck.shuffle(rng);
    let mut deck = VecDeque::from(deck);

    let mut gs = TableSnapshot::new(seats);
    for seat in 0..players {
        let mut p = PlayerSnapshot::new(
            format!("Player {}", seat + 1),
            format!("/img/{}.png", seat + 1),
            STARTING_CHIPS,
        );
        if step.is_dealt() {
            let hole: Vec<Card> = deck.drain(..HOLE_CARDS).collect();
            p = p.with_cards(hole);
            if step >= RoundStep::Showdown {
                p = p.showing();
            }
        }
        gs.seat(seat, p)
            .with_context(|| format!("seating demo player at {}", seat))?;
    }

    if step.is_dealt() && players > 1 {
        gs.dealer_position = Some(0);
        post_blinds(&mut gs, players);
        if step <= RoundStep::River {
            // first to act: left of the big blind preflop, left of the dealer after
            let first = if step == RoundStep::PreFlop {
                if players == 2 { 0 } else { 3 % players }
            } else {
                1 % players
            };
            gs.waiting_for = Some(first);
        }
    }

    gs.community_cards = deck.drain(..step.visible_board_cards()).collect();
    gs.round_step = step;

    tracing::debug!(seats, players, step = ?step, pot = gs.pot, "dealt demo table");
    Ok(gs)
}

/// Heads-up the dealer posts the small blind; otherwise the two seats after it do.
fn post_blinds(gs: &mut TableSnapshot, players: usize) {
    let (sb, bb) = if players == 2 { (0, 1) } else { (1, 2) };
    for (seat, amount) in [(sb, SMALL_BLIND), (bb, BIG_BLIND)] {
        if let Some(p) = gs.players[seat].as_mut() {
            let posted = amount.min(p.chips);
            p.chips -= posted;
            p.actual_bet = posted;
            gs.pot += posted;
        }
    }
}
