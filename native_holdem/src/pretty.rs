use holdem_shared::{Card, PlayerSnapshot, RoundStep, TableSnapshot};
use owo_colors::OwoColorize;

pub fn format_card(c: Card, color: bool) -> String {
    let text = c.to_string();
    if color && c.is_red() {
        text.red().to_string()
    } else {
        text
    }
}

pub fn format_cards(cards: &[Card], color: bool) -> String {
    cards
        .iter()
        .map(|&c| format_card(c, color))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_hole(p: &PlayerSnapshot, color: bool) -> String {
    if p.cards.is_empty() {
        "[?? ??]".to_string()
    } else {
        let shown = format!("[{}]", format_cards(&p.cards, color));
        if p.showing_cards && color {
            shown.bold().to_string()
        } else {
            shown
        }
    }
}

pub fn format_player_line(gs: &TableSnapshot, seat: usize, p: &PlayerSnapshot, color: bool) -> String {
    let name = if gs.my_position == Some(seat) {
        if color {
            format!("{}{}", p.nick.bold(), " (You)".bold())
        } else {
            format!("{} (You)", p.nick)
        }
    } else {
        p.nick.clone()
    };
    let dealer = if gs.dealer_position == Some(seat) {
        if color {
            " (D)".yellow().to_string()
        } else {
            " (D)".to_string()
        }
    } else {
        String::new()
    };
    let to_act = if gs.waiting_for == Some(seat) {
        if color {
            format!("{} (to act)", " ●".green())
        } else {
            " * (to act)".to_string()
        }
    } else {
        String::new()
    };
    let hole = if gs.round_step.is_dealt() {
        format!("  {}", format_hole(p, color))
    } else {
        String::new()
    };
    format!(
        "  #{} {}{}  stack={} bet={}{}{}",
        seat, name, dealer, p.chips, p.actual_bet, hole, to_act
    )
}

fn step_name(step: RoundStep) -> &'static str {
    match step {
        RoundStep::Waiting => "Waiting",
        RoundStep::PreFlop => "Pre-flop",
        RoundStep::Flop => "Flop",
        RoundStep::Turn => "Turn",
        RoundStep::River => "River",
        RoundStep::Showdown => "Showdown",
        RoundStep::Results => "Results",
    }
}

pub fn format_table_human(gs: &TableSnapshot, color: bool) -> String {
    let mut out = String::new();

    let stage = step_name(gs.round_step);
    let stage_s = if color {
        stage.bold().blue().to_string()
    } else {
        stage.to_string()
    };
    let pot_s = if color {
        format!("{} {}", "Pot:".bold().yellow(), gs.pot)
    } else {
        format!("Pot: {}", gs.pot)
    };
    out.push_str(&format!("{}  |  {}\n", stage_s, pot_s));

    if !gs.community_cards.is_empty() {
        out.push_str(&format!("Board: [{}]\n", format_cards(&gs.community_cards, color)));
    }

    out.push_str(&format!("Players ({}/{} seats):\n", gs.occupied().count(), gs.seats()));
    for (seat, p) in gs.occupied() {
        out.push_str(&format_player_line(gs, seat, p, color));
        out.push('\n');
    }
    out
}
