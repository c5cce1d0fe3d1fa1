//! Shared wire types for Texas Hold'em table snapshots.
//!
//! A server builds one [`TableSnapshot`] per hand event, redacts it for each
//! viewer with [`TableSnapshot::for_viewer`] and ships it as JSON. Clients
//! decode it and fold it into a [`TableView`].

pub mod cards;
pub mod codec;
pub mod error;
pub mod player;
pub mod table;
pub mod view;

pub use cards::{Card, Rank, Suit, DECK_SIZE};
pub use codec::{from_json, from_slice, to_json, to_json_pretty};
pub use error::SnapshotError;
pub use player::{PlayerSnapshot, HOLE_CARDS};
pub use table::{RoundStep, TableSnapshot, MAX_SEATS};
pub use view::{SeatView, TableView, BOARD_SLOTS, DECISION_SECONDS};
