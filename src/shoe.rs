//! Shoe depletion and running/true count tracking.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::card::{CARDS_PER_DECK, Rank};
use crate::error::{DealError, UndoError};

/// Depletion buckets: one per rank ace through nine, plus the shared ten
/// group.
const BUCKETS: usize = 10;

/// Tracks cards seen since the last shoe reset: per-rank depletion, total
/// cards dealt, and the Hi-Lo running count.
///
/// The shoe never holds an actual card list. It models a physical shoe at
/// another player's table: the trainer reports ranks as they are seen and
/// the shoe accounts for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shoe {
    decks: u8,
    dealt: [u32; BUCKETS],
    cards_dealt: u32,
    running: i32,
}

/// A point-in-time view of the count state, cheap to hand to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountSnapshot {
    /// Signed Hi-Lo running count.
    pub running: i32,
    /// Cards seen since the last shoe reset.
    pub cards_dealt: u32,
    /// Estimated decks left in the shoe.
    pub decks_remaining: f64,
    /// Running count normalized by decks remaining.
    pub true_count: f64,
    /// Fraction of the shoe already dealt, in `[0, 1]`.
    pub penetration: f64,
}

impl Shoe {
    /// Creates a fresh shoe with the given number of decks.
    #[must_use]
    pub const fn new(decks: u8) -> Self {
        Self {
            decks,
            dealt: [0; BUCKETS],
            cards_dealt: 0,
            running: 0,
        }
    }

    /// Number of decks the shoe started with.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Total cards in a full shoe.
    #[must_use]
    pub const fn total_cards(&self) -> u32 {
        self.decks as u32 * CARDS_PER_DECK
    }

    /// Accounts for one dealt card of the given rank.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DepletedRank`] when the rank's bucket is
    /// already exhausted.
    pub fn deal(&mut self, rank: Rank) -> Result<(), DealError> {
        if self.remaining(rank) == 0 {
            return Err(DealError::DepletedRank(rank));
        }

        self.dealt[rank.bucket()] += 1;
        self.cards_dealt += 1;
        self.running += rank.hi_lo();
        trace!(rank = %rank, running = self.running, "card counted");
        Ok(())
    }

    /// Exact inverse of [`deal`](Self::deal).
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::EmptyHistory`] when no card of that rank can
    /// be un-dealt. Callers are expected to drive this from a recorded
    /// deal history, in which case it cannot fail.
    pub fn undo(&mut self, rank: Rank) -> Result<(), UndoError> {
        if self.cards_dealt == 0 || self.dealt[rank.bucket()] == 0 {
            return Err(UndoError::EmptyHistory);
        }

        self.dealt[rank.bucket()] -= 1;
        self.cards_dealt -= 1;
        self.running -= rank.hi_lo();
        trace!(rank = %rank, running = self.running, "card uncounted");
        Ok(())
    }

    /// Cards of the rank's bucket already dealt.
    #[must_use]
    pub const fn dealt(&self, rank: Rank) -> u32 {
        self.dealt[rank.bucket()]
    }

    /// Cards of the rank's bucket still in the shoe.
    #[must_use]
    pub const fn remaining(&self, rank: Rank) -> u32 {
        self.decks as u32 * rank.bucket_copies_per_deck() - self.dealt[rank.bucket()]
    }

    /// Total cards seen since the last reset.
    #[must_use]
    pub const fn cards_dealt(&self) -> u32 {
        self.cards_dealt
    }

    /// Signed Hi-Lo running count of all cards seen.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running
    }

    /// Estimated decks remaining.
    #[must_use]
    pub fn decks_remaining(&self) -> f64 {
        f64::from(self.total_cards() - self.cards_dealt) / f64::from(CARDS_PER_DECK)
    }

    /// True count: running count divided by decks remaining, with decks
    /// remaining floored at half a deck. The floor keeps the ratio from
    /// blowing up at the back of the shoe and matches the trainer's
    /// display convention; it is not a rigorous depletion model.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        f64::from(self.running) / self.decks_remaining().max(0.5)
    }

    /// Fraction of the shoe already dealt, in `[0, 1]`.
    #[must_use]
    pub fn penetration(&self) -> f64 {
        f64::from(self.cards_dealt) / f64::from(self.total_cards())
    }

    /// Snapshot of the count state for display.
    #[must_use]
    pub fn snapshot(&self) -> CountSnapshot {
        CountSnapshot {
            running: self.running,
            cards_dealt: self.cards_dealt,
            decks_remaining: self.decks_remaining(),
            true_count: self.true_count(),
            penetration: self.penetration(),
        }
    }

    /// Resets depletion and count for a new shoe.
    pub fn reset(&mut self) {
        self.dealt = [0; BUCKETS];
        self.cards_dealt = 0;
        self.running = 0;
    }
}
