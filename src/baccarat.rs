//! Baccarat side-bet counting and EV aids.
//!
//! Baccarat tracking differs from the blackjack shoe in two ways: every
//! rank keeps its own four-per-deck depletion (the ten group has no
//! special bucket because 10/J/Q/K are all worth zero), and three count
//! systems run side by side — the main-bet count and the Dragon 7 and
//! Panda 8 side-bet counts. The egalité probabilities and base EVs are
//! static data inputs taken as given, not derived.

use serde::{Deserialize, Serialize};

use crate::card::{CARDS_PER_DECK, RANKS, Rank};
use crate::error::{DealError, UndoError};

/// Decks in a standard baccarat shoe.
pub const BACCARAT_DECKS: u8 = 8;

/// Main-bet count tags, indexed in [`RANKS`] order (ace first).
pub const MAIN_BET_TAGS: [i32; 13] = [1, 1, 1, 1, -1, -1, -1, -1, 0, 0, 0, 0, 0];

/// Dragon 7 side-bet count tags, indexed in [`RANKS`] order.
pub const DRAGON7_TAGS: [i32; 13] = [0, 0, 0, -1, -1, -1, -1, 2, 2, 0, 0, 0, 0];

/// Panda 8 side-bet count tags, indexed in [`RANKS`] order.
pub const PANDA8_TAGS: [i32; 13] = [1, 1, 1, -2, -2, -2, -1, -1, -2, 1, 1, 1, 1];

/// Eight-deck base probability of each egalité (tied total 0 through 9).
pub const EGALITE_BASE_PROB: [f64; 10] = [
    0.00575, 0.00376, 0.00355, 0.00432, 0.00712, 0.00816, 0.01836, 0.02082, 0.01018, 0.00986,
];

/// Standard egalité payouts, X to 1, for tied totals 0 through 9.
pub const DEFAULT_EGALITE_PAYOUTS: [u32; 10] = [150, 215, 225, 200, 120, 110, 45, 45, 80, 80];

/// Eight-deck base EVs of the flat bets and side bets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseEv {
    /// Banker bet.
    pub banker: f64,
    /// Player bet.
    pub player: f64,
    /// Tie bet.
    pub tie: f64,
    /// Dragon 7 side bet.
    pub dragon7: f64,
    /// Panda 8 side bet.
    pub panda8: f64,
}

/// Eight-deck base EVs.
pub const BASE_EV: BaseEv = BaseEv {
    banker: -0.0106,
    player: -0.0124,
    tie: -0.1436,
    dragon7: -0.0761,
    panda8: -0.1019,
};

const fn rank_index(rank: Rank) -> usize {
    match rank {
        Rank::Ace => 0,
        Rank::Two => 1,
        Rank::Three => 2,
        Rank::Four => 3,
        Rank::Five => 4,
        Rank::Six => 5,
        Rank::Seven => 6,
        Rank::Eight => 7,
        Rank::Nine => 8,
        Rank::Ten => 9,
        Rank::Jack => 10,
        Rank::Queen => 11,
        Rank::King => 12,
    }
}

/// Per-shoe tracker for the baccarat counts and egalité EVs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EgaliteCounter {
    decks: u8,
    dealt: [u32; 13],
    cards_dealt: u32,
    main: i32,
    dragon7: i32,
    panda8: i32,
    payouts: [u32; 10],
}

impl Default for EgaliteCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl EgaliteCounter {
    /// Creates a tracker for a standard eight-deck shoe with the
    /// standard payouts.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_decks(BACCARAT_DECKS)
    }

    /// Creates a tracker for a shoe of the given size.
    #[must_use]
    pub const fn with_decks(decks: u8) -> Self {
        Self {
            decks,
            dealt: [0; 13],
            cards_dealt: 0,
            main: 0,
            dragon7: 0,
            panda8: 0,
            payouts: DEFAULT_EGALITE_PAYOUTS,
        }
    }

    /// Accounts for one dealt card across all three count systems.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DepletedRank`] when all copies of the rank
    /// are already out.
    pub fn deal(&mut self, rank: Rank) -> Result<(), DealError> {
        let index = rank_index(rank);
        if self.dealt[index] >= u32::from(self.decks) * 4 {
            return Err(DealError::DepletedRank(rank));
        }
        self.dealt[index] += 1;
        self.cards_dealt += 1;
        self.main += MAIN_BET_TAGS[index];
        self.dragon7 += DRAGON7_TAGS[index];
        self.panda8 += PANDA8_TAGS[index];
        Ok(())
    }

    /// Exact inverse of [`deal`](Self::deal).
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::EmptyHistory`] when no card of the rank is
    /// out.
    pub fn undo(&mut self, rank: Rank) -> Result<(), UndoError> {
        let index = rank_index(rank);
        if self.dealt[index] == 0 {
            return Err(UndoError::EmptyHistory);
        }
        self.dealt[index] -= 1;
        self.cards_dealt -= 1;
        self.main -= MAIN_BET_TAGS[index];
        self.dragon7 -= DRAGON7_TAGS[index];
        self.panda8 -= PANDA8_TAGS[index];
        Ok(())
    }

    /// Resets depletion and all counts for a new shoe. Payout overrides
    /// persist.
    pub fn reset(&mut self) {
        self.dealt = [0; 13];
        self.cards_dealt = 0;
        self.main = 0;
        self.dragon7 = 0;
        self.panda8 = 0;
    }

    /// Cards seen since the last reset.
    #[must_use]
    pub const fn cards_dealt(&self) -> u32 {
        self.cards_dealt
    }

    /// Copies of a rank still in the shoe.
    #[must_use]
    pub const fn remaining(&self, rank: Rank) -> u32 {
        self.decks as u32 * 4 - self.dealt[rank_index(rank)]
    }

    /// Estimated decks remaining.
    #[must_use]
    pub fn decks_remaining(&self) -> f64 {
        f64::from(u32::from(self.decks) * CARDS_PER_DECK - self.cards_dealt)
            / f64::from(CARDS_PER_DECK)
    }

    /// Main-bet running count.
    #[must_use]
    pub const fn main_count(&self) -> i32 {
        self.main
    }

    /// Dragon 7 running count.
    #[must_use]
    pub const fn dragon7_count(&self) -> i32 {
        self.dragon7
    }

    /// Panda 8 running count.
    #[must_use]
    pub const fn panda8_count(&self) -> i32 {
        self.panda8
    }

    /// Dragon 7 true count, decks remaining floored at half a deck.
    #[must_use]
    pub fn dragon7_true_count(&self) -> f64 {
        f64::from(self.dragon7) / self.decks_remaining().max(0.5)
    }

    /// Panda 8 true count, decks remaining floored at half a deck.
    #[must_use]
    pub fn panda8_true_count(&self) -> f64 {
        f64::from(self.panda8) / self.decks_remaining().max(0.5)
    }

    /// The posted payout for an egalité, X to 1.
    #[must_use]
    pub fn payout(&self, tied_total: u8) -> Option<u32> {
        self.payouts.get(usize::from(tied_total)).copied()
    }

    /// Overrides the posted payout for an egalité. Returns `false` for a
    /// tied total outside 0-9.
    pub fn set_payout(&mut self, tied_total: u8, payout: u32) -> bool {
        match self.payouts.get_mut(usize::from(tied_total)) {
            Some(slot) => {
                *slot = payout;
                true
            }
            None => false,
        }
    }

    /// Probability of the given egalité. Taken straight from the
    /// eight-deck base table; per-rank depletion adjustment is beyond
    /// this trainer.
    #[must_use]
    pub fn probability(&self, tied_total: u8) -> Option<f64> {
        EGALITE_BASE_PROB.get(usize::from(tied_total)).copied()
    }

    /// Expected value of one unit on the given egalité at the posted
    /// payout: `p × (payout + 1) − 1`.
    #[must_use]
    pub fn ev(&self, tied_total: u8) -> Option<f64> {
        let probability = self.probability(tied_total)?;
        let payout = f64::from(self.payout(tied_total)?);
        Some(probability * (payout + 1.0) - 1.0)
    }

    /// The egalités with positive EV at the posted payouts, best first.
    #[must_use]
    pub fn positive_ev(&self) -> Vec<(u8, f64)> {
        let mut positive: Vec<(u8, f64)> = (0u8..10)
            .filter_map(|tied_total| {
                self.ev(tied_total)
                    .filter(|ev| *ev > 0.0)
                    .map(|ev| (tied_total, ev))
            })
            .collect();
        positive.sort_by(|a, b| b.1.total_cmp(&a.1));
        positive
    }
}

/// Sum of a tag table over one full deck (four copies of each rank).
/// Zero for a balanced system.
#[must_use]
pub fn per_deck_tag_sum(tags: &[i32; 13]) -> i32 {
    RANKS
        .iter()
        .map(|&rank| tags[rank_index(rank)] * 4)
        .sum()
}
