//! The table-wide snapshot message that carries every seated player.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::cards::Card;
use crate::codec::{null_as_default, optional_seat};
use crate::error::SnapshotError;
use crate::player::PlayerSnapshot;

/// Seats at a full ring table.
pub const MAX_SEATS: usize = 10;

/// How far the current hand has progressed. Travels as an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RoundStep {
    /// No hand in progress.
    #[default]
    Waiting = 0,
    PreFlop = 1,
    Flop = 2,
    Turn = 3,
    River = 4,
    Showdown = 5,
    /// Pots awarded, waiting for the next hand.
    Results = 6,
}

impl RoundStep {
    /// Number of community cards on the board at this step.
    pub fn visible_board_cards(self) -> usize {
        match self {
            RoundStep::Waiting | RoundStep::PreFlop => 0,
            RoundStep::Flop => 3,
            RoundStep::Turn => 4,
            RoundStep::River | RoundStep::Showdown | RoundStep::Results => 5,
        }
    }

    /// Whether hole cards have been dealt.
    pub fn is_dealt(self) -> bool {
        self >= RoundStep::PreFlop
    }
}

impl TryFrom<u8> for RoundStep {
    type Error = SnapshotError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => RoundStep::Waiting,
            1 => RoundStep::PreFlop,
            2 => RoundStep::Flop,
            3 => RoundStep::Turn,
            4 => RoundStep::River,
            5 => RoundStep::Showdown,
            6 => RoundStep::Results,
            other => return Err(SnapshotError::InvalidRoundStep(other)),
        })
    }
}

impl From<RoundStep> for u8 {
    fn from(step: RoundStep) -> Self {
        step as u8
    }
}

/// Point-in-time view of a whole table, as broadcast to one viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot {
    #[serde(default, with = "optional_seat")]
    pub dealer_position: Option<usize>,
    #[serde(default)]
    pub pot: u64,
    /// Seat of the player this snapshot was produced for, if seated.
    #[serde(default, with = "optional_seat")]
    pub my_position: Option<usize>,
    #[serde(default)]
    pub round_step: RoundStep,
    #[serde(default, deserialize_with = "null_as_default")]
    pub community_cards: Vec<Card>,
    /// One entry per seat; `None` for an empty seat.
    pub players: Vec<Option<PlayerSnapshot>>,
    /// Seat whose decision the table is waiting on.
    #[serde(default, with = "optional_seat")]
    pub waiting_for: Option<usize>,
}

impl Default for TableSnapshot {
    fn default() -> Self {
        Self::new(MAX_SEATS)
    }
}

impl TableSnapshot {
    pub fn new(seats: usize) -> Self {
        Self {
            dealer_position: None,
            pot: 0,
            my_position: None,
            round_step: RoundStep::Waiting,
            community_cards: Vec::new(),
            players: vec![None; seats],
            waiting_for: None,
        }
    }

    pub fn seats(&self) -> usize {
        self.players.len()
    }

    /// Place `player` at `position`, replacing whoever sat there.
    pub fn seat(&mut self, position: usize, player: PlayerSnapshot) -> Result<(), SnapshotError> {
        let seats = self.seats();
        let slot = self
            .players
            .get_mut(position)
            .ok_or(SnapshotError::SeatOutOfRange { seat: position, seats })?;
        *slot = Some(player);
        Ok(())
    }

    pub fn player(&self, position: usize) -> Option<&PlayerSnapshot> {
        self.players.get(position).and_then(Option::as_ref)
    }

    /// Occupied seats in seat order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &PlayerSnapshot)> {
        self.players
            .iter()
            .enumerate()
            .filter_map(|(seat, p)| p.as_ref().map(|p| (seat, p)))
    }

    /// Copy of this snapshot as `viewer` may see it: every other seat's
    /// hidden hand is cleared. `None` produces a spectator view; a viewer
    /// seat beyond the table is rejected.
    pub fn for_viewer(&self, viewer: Option<usize>) -> Result<Self, SnapshotError> {
        if let Some(seat) = viewer {
            let seats = self.seats();
            if seat >= seats {
                return Err(SnapshotError::SeatOutOfRange { seat, seats });
            }
        }
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, p)| {
                p.as_ref().map(|p| {
                    if Some(seat) == viewer {
                        p.clone()
                    } else {
                        p.redacted()
                    }
                })
            })
            .collect();
        Ok(Self {
            players,
            my_position: viewer,
            ..self.clone()
        })
    }

    pub fn validate(&self) -> Result<(), SnapshotError> {
        let seats = self.seats();
        for seat in [self.dealer_position, self.my_position, self.waiting_for]
            .into_iter()
            .flatten()
        {
            if seat >= seats {
                return Err(SnapshotError::SeatOutOfRange { seat, seats });
            }
        }
        if let Some(seat) = self.waiting_for {
            if self.player(seat).is_none() {
                return Err(SnapshotError::EmptySeat(seat));
            }
        }

        let max = self.round_step.visible_board_cards();
        if self.community_cards.len() > max {
            return Err(SnapshotError::BoardTooLarge {
                count: self.community_cards.len(),
                step: self.round_step,
                max,
            });
        }

        let mut seen = HashSet::new();
        for card in &self.community_cards {
            if !seen.insert(*card) {
                return Err(SnapshotError::DuplicateCard(*card));
            }
        }
        for (_, player) in self.occupied() {
            player.validate()?;
            for card in &player.cards {
                if !seen.insert(*card) {
                    return Err(SnapshotError::DuplicateCard(*card));
                }
            }
        }
        Ok(())
    }
}
