//! The bet ledger: placed bets per category, validated against table
//! limits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::pocket::Pocket;

/// A bet category on the layout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum BetCategory {
    /// One number.
    Straight,
    /// Two adjacent numbers.
    Split,
    /// A row of three.
    Street,
    /// A block of four.
    Corner,
    /// Two adjacent streets (six numbers).
    Line,
    /// A layout column of twelve.
    Column,
    /// A dozen (1-12, 13-24, 25-36).
    Dozen,
    /// European only: 0-1-2-3.
    FirstFour,
    /// American only: 0-00-1-2-3.
    TopLine,
    /// The eighteen red numbers.
    Red,
    /// The eighteen black numbers.
    Black,
    /// Even numbers.
    Even,
    /// Odd numbers.
    Odd,
    /// 1-18.
    Low,
    /// 19-36.
    High,
}

impl BetCategory {
    /// Every category, layout order.
    pub const ALL: [Self; 15] = [
        Self::Straight,
        Self::Split,
        Self::Street,
        Self::Corner,
        Self::Line,
        Self::Column,
        Self::Dozen,
        Self::FirstFour,
        Self::TopLine,
        Self::Red,
        Self::Black,
        Self::Even,
        Self::Odd,
        Self::Low,
        Self::High,
    ];

    /// Whether the category is a whole-category bet (one scalar stake,
    /// no key). Keyed categories address a specific combination on the
    /// layout.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::FirstFour
                | Self::TopLine
                | Self::Red
                | Self::Black
                | Self::Even
                | Self::Odd
                | Self::Low
                | Self::High
        )
    }

    /// Payout ratio, X to 1.
    #[must_use]
    pub const fn payout_ratio(self) -> usize {
        match self {
            Self::Straight => 35,
            Self::Split => 17,
            Self::Street => 11,
            Self::Corner | Self::FirstFour => 8,
            Self::TopLine => 6,
            Self::Line => 5,
            Self::Column | Self::Dozen => 2,
            Self::Red | Self::Black | Self::Even | Self::Odd | Self::Low | Self::High => 1,
        }
    }

    /// Number of pockets the bet covers on a full layout.
    #[must_use]
    pub const fn coverage(self) -> usize {
        match self {
            Self::Straight => 1,
            Self::Split => 2,
            Self::Street => 3,
            Self::Corner | Self::FirstFour => 4,
            Self::TopLine => 5,
            Self::Line => 6,
            Self::Column | Self::Dozen => 12,
            Self::Red | Self::Black | Self::Even | Self::Odd | Self::Low | Self::High => 18,
        }
    }
}

/// Stakes placed within one category: a single scalar for whole-category
/// bets, a keyed map for combination bets. The tag makes the two shapes
/// impossible to mix up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Placement {
    /// Whole-category stake.
    Scalar(usize),
    /// Stakes keyed by layout combination, e.g. `"17"`, `"17-20"`,
    /// `"1-2-3"`. Absent key means zero.
    Keyed(BTreeMap<String, usize>),
}

/// Which table limit a bet violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViolationKind {
    /// Below the table minimum.
    BelowMinimum,
    /// Above the table maximum.
    AboveMaximum,
}

/// One limit violation found by [`BetLedger::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitViolation {
    /// The offending category.
    pub category: BetCategory,
    /// The offending key, for keyed categories.
    pub key: Option<String>,
    /// The stake that broke the limit.
    pub amount: usize,
    /// Which limit was broken.
    pub kind: ViolationKind,
}

/// All bets currently on the layout.
///
/// The ledger stores stakes only. It does not know the bankroll, and it
/// does not check that a key names a legal combination — the table
/// layout that produced the key is responsible for that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetLedger {
    slots: BTreeMap<BetCategory, Placement>,
}

impl BetLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stake. Accumulates on top of any existing stake for the
    /// same spot; never overwrites.
    ///
    /// Returns `false` without placing anything when the amount is zero,
    /// or when a keyed category is addressed without a key. The key is
    /// ignored for scalar categories.
    pub fn place(&mut self, category: BetCategory, key: Option<&str>, amount: usize) -> bool {
        if amount == 0 {
            return false;
        }

        if category.is_scalar() {
            let slot = self
                .slots
                .entry(category)
                .or_insert(Placement::Scalar(0));
            if let Placement::Scalar(total) = slot {
                *total += amount;
            }
            true
        } else if let Some(key) = key {
            let slot = self
                .slots
                .entry(category)
                .or_insert_with(|| Placement::Keyed(BTreeMap::new()));
            if let Placement::Keyed(stakes) = slot {
                *stakes.entry(key.to_owned()).or_insert(0) += amount;
            }
            true
        } else {
            false
        }
    }

    /// Removes up to `amount` from a stake, clamping at zero. Keyed
    /// entries that reach zero are pruned entirely.
    ///
    /// Returns `false` when the amount is zero or there is nothing at
    /// that spot.
    pub fn remove(&mut self, category: BetCategory, key: Option<&str>, amount: usize) -> bool {
        if amount == 0 {
            return false;
        }

        let (removed, prune_slot) = match self.slots.get_mut(&category) {
            Some(Placement::Scalar(total)) => {
                *total = total.saturating_sub(amount);
                (true, *total == 0)
            }
            Some(Placement::Keyed(stakes)) => {
                let Some(key) = key else { return false };
                let Some(stake) = stakes.get_mut(key) else {
                    return false;
                };
                *stake = stake.saturating_sub(amount);
                if *stake == 0 {
                    stakes.remove(key);
                }
                (true, stakes.is_empty())
            }
            None => (false, false),
        };
        if prune_slot {
            self.slots.remove(&category);
        }
        removed
    }

    /// Removes a spot entirely.
    pub fn clear_bet(&mut self, category: BetCategory, key: Option<&str>) {
        if category.is_scalar() {
            self.slots.remove(&category);
            return;
        }
        let mut prune_slot = false;
        if let (Some(Placement::Keyed(stakes)), Some(key)) =
            (self.slots.get_mut(&category), key)
        {
            stakes.remove(key);
            prune_slot = stakes.is_empty();
        }
        if prune_slot {
            self.slots.remove(&category);
        }
    }

    /// Removes every bet.
    pub fn clear_all(&mut self) {
        self.slots.clear();
    }

    /// The stake at a spot; zero when nothing is placed there.
    #[must_use]
    pub fn amount(&self, category: BetCategory, key: Option<&str>) -> usize {
        match self.slots.get(&category) {
            Some(Placement::Scalar(total)) => *total,
            Some(Placement::Keyed(stakes)) => key
                .and_then(|key| stakes.get(key))
                .copied()
                .unwrap_or(0),
            None => 0,
        }
    }

    /// Sum of every stake on the layout.
    #[must_use]
    pub fn total_wagered(&self) -> usize {
        self.slots
            .values()
            .map(|placement| match placement {
                Placement::Scalar(total) => *total,
                Placement::Keyed(stakes) => stakes.values().sum(),
            })
            .sum()
    }

    /// Whether any stake is on the layout.
    #[must_use]
    pub fn has_bets(&self) -> bool {
        self.total_wagered() > 0
    }

    /// Number of distinct spots bet per category.
    #[must_use]
    pub fn bet_counts(&self) -> BTreeMap<BetCategory, usize> {
        self.slots
            .iter()
            .map(|(category, placement)| {
                let count = match placement {
                    Placement::Scalar(_) => 1,
                    Placement::Keyed(stakes) => stakes.len(),
                };
                (*category, count)
            })
            .collect()
    }

    /// Pockets carrying straight bets, for table and wheel highlighting.
    /// Keys that do not parse as pockets are skipped.
    #[must_use]
    pub fn straight_bet_pockets(&self) -> Vec<Pocket> {
        match self.slots.get(&BetCategory::Straight) {
            Some(Placement::Keyed(stakes)) => stakes
                .keys()
                .filter_map(|key| key.parse().ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Flattens the ledger into `(category, key, amount)` rows for the
    /// resolver.
    pub fn iter(&self) -> impl Iterator<Item = (BetCategory, Option<&str>, usize)> {
        self.slots.iter().flat_map(|(category, placement)| {
            let rows: Vec<(BetCategory, Option<&str>, usize)> = match placement {
                Placement::Scalar(total) => vec![(*category, None, *total)],
                Placement::Keyed(stakes) => stakes
                    .iter()
                    .map(|(key, amount)| (*category, Some(key.as_str()), *amount))
                    .collect(),
            };
            rows
        })
    }

    /// Checks every individual stake against the table limits and
    /// returns all violations, not just the first.
    #[must_use]
    pub fn validate(&self, min_bet: usize, max_bet: usize) -> Vec<LimitViolation> {
        let mut violations = Vec::new();
        for (category, key, amount) in self.iter() {
            let kind = if amount < min_bet {
                Some(ViolationKind::BelowMinimum)
            } else if amount > max_bet {
                Some(ViolationKind::AboveMaximum)
            } else {
                None
            };
            if let Some(kind) = kind {
                violations.push(LimitViolation {
                    category,
                    key: key.map(str::to_owned),
                    amount,
                    kind,
                });
            }
        }
        violations
    }
}
