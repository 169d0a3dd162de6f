//! Seat state.

use serde::{Deserialize, Serialize};

use crate::hand::{Hand, HandValue};

/// Occupancy of a table seat. The trainer distinguishes the user's own
/// seats from other players' so bankroll tracking only follows "mine".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// Nobody is sitting here; the seat is skipped entirely.
    #[default]
    Empty,
    /// Another player's seat: cards are tracked for the count.
    Occupied,
    /// One of the user's seats.
    Mine,
}

/// A table seat: occupancy, the hand, per-round flags and the bet riding
/// on the hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Occupancy status.
    pub status: SeatStatus,
    /// The seat's hand.
    pub hand: Hand,
    /// Seat has stood.
    pub is_standing: bool,
    /// Seat has busted.
    pub is_busted: bool,
    /// Seat doubled down; the next card ends the hand.
    pub is_doubling: bool,
    /// Bet riding on the hand.
    pub bet: usize,
}

/// Per-round seat flags, captured in the deal history so undo can restore
/// them exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SeatFlags {
    pub standing: bool,
    pub busted: bool,
    pub doubling: bool,
}

impl Seat {
    /// Creates an empty seat.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the seat is dealt into the round at all.
    #[must_use]
    pub const fn in_round(&self) -> bool {
        !matches!(self.status, SeatStatus::Empty)
    }

    /// Whether the seat can still act this round.
    #[must_use]
    pub const fn can_act(&self) -> bool {
        !self.is_standing && !self.is_busted
    }

    /// Evaluates the seat's hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        self.hand.value()
    }

    /// Clears the hand and per-round flags; occupancy and bet persist.
    pub fn reset_round(&mut self) {
        self.hand.clear();
        self.is_standing = false;
        self.is_busted = false;
        self.is_doubling = false;
    }

    pub(crate) const fn flags(&self) -> SeatFlags {
        SeatFlags {
            standing: self.is_standing,
            busted: self.is_busted,
            doubling: self.is_doubling,
        }
    }

    pub(crate) const fn restore_flags(&mut self, flags: SeatFlags) {
        self.is_standing = flags.standing;
        self.is_busted = flags.busted;
        self.is_doubling = flags.doubling;
    }
}
