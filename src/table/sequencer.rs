//! Deal-order state machine.
//!
//! A round moves through `Dealing → PlayerTurn → DealerTurn → Resolution`.
//! The dealing phase itself walks ordered sub-phases that mirror a real
//! multi-seat pitch: every active seat's first card, the dealer's first
//! card (hole card under American dealing, upcard under European), every
//! active seat's second card, and — American only — the dealer's upcard.

use serde::{Deserialize, Serialize};

use crate::options::DealerStyle;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Initial cards are being pitched in table order.
    Dealing,
    /// Seats act, rightmost first.
    PlayerTurn,
    /// Cards accumulate on the dealer's hand until the dealer-done signal.
    DealerTurn,
    /// Round is settled; terminal until a new round starts.
    Resolution,
}

/// Where the next dealt card lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealTarget {
    /// A seat, by table index.
    Seat(usize),
    /// The dealer's face-down hole card.
    DealerHole,
    /// A face-up dealer card.
    DealerUp,
}

/// Sub-phase of the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DealStep {
    SeatsFirst,
    DealerFirst,
    SeatsSecond,
    DealerSecond,
}

/// Compact sequencer state. Copied into the deal history so undo can
/// restore position exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Sequencer {
    pub(crate) phase: RoundPhase,
    pub(crate) step: DealStep,
    pub(crate) pos: usize,
    pub(crate) deal_index: usize,
    /// Index into the active-seat list during the player turn.
    pub(crate) current: usize,
}

impl Sequencer {
    /// Sequencer for a table with no round in progress.
    pub(crate) const fn idle() -> Self {
        Self {
            phase: RoundPhase::Resolution,
            step: DealStep::SeatsFirst,
            pos: 0,
            deal_index: 0,
            current: 0,
        }
    }

    /// Sequencer at the start of a fresh round.
    pub(crate) const fn new_round() -> Self {
        Self {
            phase: RoundPhase::Dealing,
            step: DealStep::SeatsFirst,
            pos: 0,
            deal_index: 0,
            current: 0,
        }
    }

    fn step_len(step: DealStep, active_len: usize, style: DealerStyle) -> usize {
        match step {
            DealStep::SeatsFirst | DealStep::SeatsSecond => active_len,
            DealStep::DealerFirst => 1,
            DealStep::DealerSecond => match style {
                DealerStyle::American => 1,
                DealerStyle::European => 0,
            },
        }
    }

    /// Target of the next card during the dealing phase.
    pub(crate) fn dealing_target(
        &self,
        active: &[usize],
        style: DealerStyle,
    ) -> Option<DealTarget> {
        if self.phase != RoundPhase::Dealing {
            return None;
        }
        match self.step {
            DealStep::SeatsFirst | DealStep::SeatsSecond => {
                active.get(self.pos).copied().map(DealTarget::Seat)
            }
            DealStep::DealerFirst => Some(match style {
                DealerStyle::American => DealTarget::DealerHole,
                DealerStyle::European => DealTarget::DealerUp,
            }),
            DealStep::DealerSecond => Some(DealTarget::DealerUp),
        }
    }

    /// Advances past the card just dealt. Returns `true` once the initial
    /// deal is complete.
    pub(crate) fn advance_dealing(&mut self, active_len: usize, style: DealerStyle) -> bool {
        self.pos += 1;
        self.skip_exhausted_steps(active_len, style)
    }

    /// Skips sub-phases with nothing left to deal (including zero-length
    /// ones, such as the dealer's second card under European style).
    /// Returns `true` once the initial deal is complete.
    pub(crate) fn skip_exhausted_steps(
        &mut self,
        active_len: usize,
        style: DealerStyle,
    ) -> bool {
        while self.pos >= Self::step_len(self.step, active_len, style) {
            self.pos = 0;
            self.step = match self.step {
                DealStep::SeatsFirst => DealStep::DealerFirst,
                DealStep::DealerFirst => DealStep::SeatsSecond,
                DealStep::SeatsSecond => DealStep::DealerSecond,
                DealStep::DealerSecond => return true,
            };
        }
        false
    }
}
