//! Bet-sizing and edge heuristics derived from the true count.
//!
//! These are the display-side rules of thumb used by the trainer's
//! recommendation panel. They are deliberately simple linear models, not
//! a simulation-grade edge calculator.

use crate::options::TableOptions;

/// House edge against a basic-strategy player at a neutral count.
pub const BASE_HOUSE_EDGE: f64 = 0.005;

/// Edge gained per point of true count.
pub const EDGE_PER_TRUE_COUNT: f64 = 0.005;

/// Estimated player edge at the given true count. Negative values mean
/// the house still holds the edge.
#[must_use]
pub fn player_edge(true_count: f64) -> f64 {
    -BASE_HOUSE_EDGE + true_count * EDGE_PER_TRUE_COUNT
}

/// Bet ramp in table-minimum units: 1-2-4-6-8 spread keyed off the true
/// count.
#[must_use]
pub fn bet_units(true_count: f64) -> u32 {
    if true_count >= 4.0 {
        8
    } else if true_count >= 3.0 {
        6
    } else if true_count >= 2.0 {
        4
    } else if true_count >= 1.0 {
        2
    } else {
        1
    }
}

/// Recommended bet: the ramped spread, capped by the table maximum and by
/// 5% of the current bankroll.
#[must_use]
pub fn recommended_bet(true_count: f64, options: &TableOptions, bankroll: usize) -> usize {
    let units = bet_units(true_count) as usize;
    let ramped = options.min_bet * units;
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "f64 has sufficient precision for bankroll amounts"
    )]
    let bankroll_cap = (bankroll as f64 * 0.05).round() as usize;
    ramped.min(options.max_bet).min(bankroll_cap)
}
