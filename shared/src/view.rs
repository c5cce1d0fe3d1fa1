//! Client-side table state rebuilt from received snapshots.

use crate::cards::Card;
use crate::player::HOLE_CARDS;
use crate::table::{RoundStep, TableSnapshot};

/// Community card slots on the board.
pub const BOARD_SLOTS: usize = 5;

/// Seconds shown on the decision timer of the seat being waited on.
pub const DECISION_SECONDS: u32 = 30;

/// What a client draws for one occupied seat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeatView {
    pub name: String,
    pub image: String,
    pub chips: u64,
    pub actual_bet: u64,
    /// Hole cards; `None` entries are card backs whose face is unknown.
    pub cards: Vec<Option<Card>>,
    pub upside_down: bool,
    /// Remaining decision time in seconds, for the seat being waited on.
    pub time_rest: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub seats: Vec<Option<SeatView>>,
    pub board: [Option<Card>; BOARD_SLOTS],
    pub pot: u64,
    pub dealt: bool,
    pub dealer_position: Option<usize>,
    pub my_position: Option<usize>,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new(crate::table::MAX_SEATS)
    }
}

impl TableView {
    pub fn new(seats: usize) -> Self {
        Self {
            seats: vec![None; seats],
            board: [None; BOARD_SLOTS],
            pot: 0,
            dealt: false,
            dealer_position: None,
            my_position: None,
        }
    }

    pub fn seat(&self, position: usize) -> Option<&SeatView> {
        self.seats.get(position).and_then(Option::as_ref)
    }

    /// Fold a freshly received snapshot into the view.
    ///
    /// A zero pot and a missing viewer seat leave the previous values alone,
    /// and seats that are empty in the snapshot keep whatever was drawn there.
    pub fn apply_snapshot(&mut self, snapshot: &TableSnapshot) {
        self.dealer_position = snapshot.dealer_position;
        if snapshot.pot > 0 {
            self.pot = snapshot.pot;
        }
        if let Some(position) = snapshot.my_position {
            self.my_position = Some(position);
        }
        if snapshot.round_step.is_dealt() {
            self.dealt = true;
            self.board = [None; BOARD_SLOTS];
        }

        if snapshot.players.len() > self.seats.len() {
            self.seats.resize(snapshot.players.len(), None);
        }
        for (position, player) in snapshot.occupied() {
            let mut seat = SeatView {
                name: player.nick.clone(),
                image: player.photo.clone(),
                chips: player.chips,
                actual_bet: player.actual_bet,
                ..SeatView::default()
            };
            if self.dealt {
                seat.cards = if player.cards.is_empty() {
                    vec![None; HOLE_CARDS]
                } else {
                    player.cards.iter().copied().map(Some).collect()
                };
                seat.upside_down =
                    snapshot.round_step <= RoundStep::Showdown && !player.showing_cards;
            }
            self.seats[position] = Some(seat);
        }

        let visible = snapshot.round_step.visible_board_cards();
        for (slot, card) in self
            .board
            .iter_mut()
            .zip(snapshot.community_cards.iter())
            .take(visible)
        {
            *slot = Some(*card);
        }

        if let Some(seat) = snapshot
            .waiting_for
            .and_then(|position| self.seats.get_mut(position))
            .and_then(Option::as_mut)
        {
            seat.time_rest = Some(DECISION_SECONDS);
        }
    }

    /// Pull every bet into the pot area at the end of a street.
    pub fn clear_bets(&mut self) {
        for seat in self.seats.iter_mut().flatten() {
            seat.actual_bet = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerSnapshot;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn flop_snapshot() -> TableSnapshot {
        let mut t = TableSnapshot::new(3);
        t.seat(0, PlayerSnapshot::new("me", "/a.png", 900).with_bet(20).with_cards([card("Qs"), card("Qd")]))
            .unwrap();
        t.seat(1, PlayerSnapshot::new("other", "/b.png", 800).with_bet(20))
            .unwrap();
        t.round_step = RoundStep::Flop;
        t.community_cards = vec![card("2c"), card("7h"), card("9s")];
        t.pot = 60;
        t.dealer_position = Some(1);
        t.my_position = Some(0);
        t.waiting_for = Some(1);
        t
    }

    #[test]
    fn waiting_table_is_not_dealt() {
        let mut view = TableView::new(3);
        let mut t = TableSnapshot::new(3);
        t.seat(2, PlayerSnapshot::new("early", "", 500)).unwrap();
        view.apply_snapshot(&t);
        assert!(!view.dealt);
        let seat = view.seat(2).unwrap();
        assert_eq!(seat.name, "early");
        assert!(seat.cards.is_empty());
        assert!(!seat.upside_down);
    }

    #[test]
    fn flop_fills_three_slots_and_placeholders() {
        let mut view = TableView::new(3);
        view.apply_snapshot(&flop_snapshot());

        assert!(view.dealt);
        assert_eq!(view.pot, 60);
        assert_eq!(view.my_position, Some(0));
        assert_eq!(view.dealer_position, Some(1));
        assert_eq!(
            view.board,
            [Some(card("2c")), Some(card("7h")), Some(card("9s")), None, None]
        );

        let me = view.seat(0).unwrap();
        assert_eq!(me.cards, vec![Some(card("Qs")), Some(card("Qd"))]);
        assert!(me.upside_down);

        let other = view.seat(1).unwrap();
        assert_eq!(other.cards, vec![None, None]);
        assert!(other.upside_down);
        assert_eq!(other.time_rest, Some(DECISION_SECONDS));
        assert_eq!(me.time_rest, None);
    }

    #[test]
    fn zero_pot_keeps_previous_pot() {
        let mut view = TableView::new(3);
        view.apply_snapshot(&flop_snapshot());
        let mut next = flop_snapshot();
        next.pot = 0;
        next.my_position = None;
        view.apply_snapshot(&next);
        assert_eq!(view.pot, 60);
        assert_eq!(view.my_position, Some(0));
    }

    #[test]
    fn shown_cards_face_up_and_results_face_up() {
        let mut t = flop_snapshot();
        t.round_step = RoundStep::Showdown;
        t.community_cards.extend([card("Jd"), card("3c")]);
        t.players[1] = t.players[1]
            .take()
            .map(|p| p.with_cards([card("Ah"), card("Kh")]).showing());
        let mut view = TableView::new(3);
        view.apply_snapshot(&t);
        assert!(!view.seat(1).unwrap().upside_down);
        assert!(view.seat(0).unwrap().upside_down);
        assert!(view.board.iter().all(Option::is_some));

        t.round_step = RoundStep::Results;
        view.apply_snapshot(&t);
        assert!(!view.seat(0).unwrap().upside_down);
    }

    #[test]
    fn clear_bets_zeroes_every_seat() {
        let mut view = TableView::new(3);
        view.apply_snapshot(&flop_snapshot());
        view.clear_bets();
        assert!(view.seats.iter().flatten().all(|s| s.actual_bet == 0));
    }

    #[test]
    fn null_and_empty_hands_draw_the_same() {
        let wire = crate::codec::to_json(&flop_snapshot()).unwrap();
        assert_eq!(wire.matches(r#""cards":[]"#).count(), 1);
        let with_null = wire.replace(r#""cards":[]"#, r#""cards":null"#);

        let mut from_empty = TableView::new(3);
        from_empty.apply_snapshot(&crate::codec::from_json(&wire).unwrap());
        let mut from_null = TableView::new(3);
        from_null.apply_snapshot(&crate::codec::from_json(&with_null).unwrap());

        assert_eq!(from_null.seat(1).unwrap().cards, vec![None, None]);
        assert_eq!(from_null.seat(1), from_empty.seat(1));
    }

    #[test]
    fn larger_snapshot_grows_the_view() {
        let mut view = TableView::new(2);
        let mut t = TableSnapshot::new(4);
        t.seat(3, PlayerSnapshot::new("late", "", 1)).unwrap();
        view.apply_snapshot(&t);
        assert_eq!(view.seats.len(), 4);
        assert!(view.seat(3).is_some());
    }
}
