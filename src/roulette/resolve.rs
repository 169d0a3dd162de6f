//! Spin resolution: deciding each placed bet against the winning pocket.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BetError;

use super::bets::{BetCategory, BetLedger};
use super::pocket::Pocket;

/// Result of one placed bet after a spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetResult {
    /// The bet's category.
    pub category: BetCategory,
    /// The bet's key, for keyed categories.
    pub key: Option<String>,
    /// The stake.
    pub amount: usize,
    /// Whether the winning pocket was covered.
    pub won: bool,
    /// Amount returned to the player: stake plus winnings on a win, zero
    /// on a loss.
    pub returned: usize,
}

/// Result of resolving every bet on the layout against one spin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinResolution {
    /// The winning pocket.
    pub pocket: Pocket,
    /// Sum of all stakes.
    pub total_wagered: usize,
    /// Sum of all returned amounts (winning stakes included).
    pub total_winnings: usize,
    /// Winnings minus wager. Returned amounts already include the stake,
    /// so the full wager is subtracted, not just the losing part.
    pub net_result: i64,
    /// Per-bet breakdown.
    pub per_bet: Vec<BetResult>,
}

/// Parses a dash-separated key into pockets, e.g. `"17-20"` or
/// `"1-2-3"`.
fn parse_key_pockets(key: &str) -> Result<Vec<Pocket>, BetError> {
    key.split('-')
        .map(|token| {
            token
                .parse()
                .map_err(|_| BetError::MalformedKey(key.to_owned()))
        })
        .collect()
}

/// Whether the winning pocket is covered by a bet.
fn bet_wins(
    winning: Pocket,
    category: BetCategory,
    key: Option<&str>,
) -> Result<bool, BetError> {
    let won = match category {
        BetCategory::Straight
        | BetCategory::Split
        | BetCategory::Street
        | BetCategory::Corner
        | BetCategory::Line => {
            let key = key.ok_or_else(|| BetError::MalformedKey(String::new()))?;
            parse_key_pockets(key)?.contains(&winning)
        }
        BetCategory::Column => {
            let key = key.ok_or_else(|| BetError::MalformedKey(String::new()))?;
            let column: u8 = key
                .parse()
                .ok()
                .filter(|c| (1..=3).contains(c))
                .ok_or_else(|| BetError::MalformedKey(key.to_owned()))?;
            winning.column() == Some(column)
        }
        BetCategory::Dozen => {
            let key = key.ok_or_else(|| BetError::MalformedKey(String::new()))?;
            let dozen: u8 = key
                .parse()
                .ok()
                .filter(|d| (1..=3).contains(d))
                .ok_or_else(|| BetError::MalformedKey(key.to_owned()))?;
            winning.dozen() == Some(dozen)
        }
        BetCategory::FirstFour => {
            matches!(
                winning,
                Pocket::Zero | Pocket::Number(1) | Pocket::Number(2) | Pocket::Number(3)
            )
        }
        BetCategory::TopLine => {
            matches!(
                winning,
                Pocket::Zero
                    | Pocket::DoubleZero
                    | Pocket::Number(1)
                    | Pocket::Number(2)
                    | Pocket::Number(3)
            )
        }
        BetCategory::Red => winning.is_red(),
        BetCategory::Black => winning.is_black(),
        BetCategory::Even => winning.is_even(),
        BetCategory::Odd => winning.is_odd(),
        BetCategory::Low => winning.is_low(),
        BetCategory::High => winning.is_high(),
    };
    Ok(won)
}

/// Resolves every bet in the ledger against the winning pocket.
///
/// A winning bet returns `amount × (ratio + 1)` — the stake comes back
/// with the winnings. A losing bet forfeits its stake. The net result is
/// total winnings minus total wagered.
///
/// # Errors
///
/// Returns [`BetError::MalformedKey`] when a keyed bet carries a key the
/// resolver cannot interpret. Key legality beyond parseability (e.g.
/// whether two numbers are really adjacent for a split) is the table
/// layout's responsibility, not the resolver's.
pub fn resolve(winning: Pocket, ledger: &BetLedger) -> Result<SpinResolution, BetError> {
    let mut per_bet = Vec::new();
    let mut total_wagered: usize = 0;
    let mut total_winnings: usize = 0;

    for (category, key, amount) in ledger.iter() {
        total_wagered += amount;
        let won = bet_wins(winning, category, key)?;
        let returned = if won {
            amount * (category.payout_ratio() + 1)
        } else {
            0
        };
        total_winnings += returned;
        per_bet.push(BetResult {
            category,
            key: key.map(str::to_owned),
            amount,
            won,
            returned,
        });
    }

    #[expect(clippy::cast_possible_wrap, reason = "wager totals fit in i64")]
    let net_result = total_winnings as i64 - total_wagered as i64;
    debug!(
        pocket = %winning,
        wagered = total_wagered,
        winnings = total_winnings,
        net = net_result,
        "spin resolved"
    );

    Ok(SpinResolution {
        pocket: winning,
        total_wagered,
        total_winnings,
        net_result,
        per_bet,
    })
}
