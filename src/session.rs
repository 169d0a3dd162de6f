//! Session bookkeeping and the summary export shape.
//!
//! The engine supplies the summary fields on demand; the caller owns the
//! clock, the file dialog and every other piece of I/O.

use serde::{Deserialize, Serialize};

use crate::options::TableOptions;
use crate::shoe::Shoe;
use crate::table::SeatStatus;

/// Outcome of a seat's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandOutcome {
    /// Seat beat the dealer.
    Win,
    /// Seat lost to the dealer.
    Lose,
    /// Tie.
    Push,
    /// Seat had a natural.
    Blackjack,
}

/// Advisory result for one seat after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRoundResult {
    /// Display seat number, 1-based.
    pub seat: usize,
    /// Occupancy of the seat.
    pub status: SeatStatus,
    /// Bet riding on the hand.
    pub bet: usize,
    /// Outcome against the dealer.
    pub outcome: HandOutcome,
    /// The seat's final total.
    pub seat_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
}

/// A played hand as recorded in the session log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandRecord {
    /// Display seat number, 1-based.
    pub seat: usize,
    /// Bet riding on the hand.
    pub bet: usize,
    /// Outcome against the dealer.
    pub outcome: HandOutcome,
    /// The seat's final total.
    pub seat_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
}

impl From<SeatRoundResult> for HandRecord {
    fn from(result: SeatRoundResult) -> Self {
        Self {
            seat: result.seat,
            bet: result.bet,
            outcome: result.outcome,
            seat_total: result.seat_total,
            dealer_total: result.dealer_total,
        }
    }
}

/// Running session state: bankroll and the hand log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    starting_bankroll: usize,
    bankroll: usize,
    hands: Vec<HandRecord>,
}

impl Session {
    /// Starts a session with the given buy-in.
    #[must_use]
    pub const fn new(starting_bankroll: usize) -> Self {
        Self {
            starting_bankroll,
            bankroll: starting_bankroll,
            hands: Vec::new(),
        }
    }

    /// The buy-in the session started with.
    #[must_use]
    pub const fn starting_bankroll(&self) -> usize {
        self.starting_bankroll
    }

    /// Current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Sets the current bankroll after the user settles a round.
    pub const fn set_bankroll(&mut self, bankroll: usize) {
        self.bankroll = bankroll;
    }

    /// Profit (positive) or loss (negative) so far.
    #[must_use]
    pub fn profit_loss(&self) -> i64 {
        #[expect(clippy::cast_possible_wrap, reason = "bankrolls fit in i64")]
        let net = self.bankroll as i64 - self.starting_bankroll as i64;
        net
    }

    /// Appends a hand to the session log.
    pub fn record_hand(&mut self, hand: HandRecord) {
        self.hands.push(hand);
    }

    /// Hands played so far.
    #[must_use]
    pub fn hands(&self) -> &[HandRecord] {
        &self.hands
    }

    /// Builds the export summary. The caller supplies the wall-clock
    /// date and the session duration in milliseconds.
    #[must_use]
    pub fn summary(
        &self,
        date: impl Into<String>,
        duration_ms: u64,
        options: &TableOptions,
        shoe: &Shoe,
    ) -> SessionSummary {
        SessionSummary {
            metadata: SummaryMetadata {
                date: date.into(),
                duration: duration_ms,
                config: options.clone(),
            },
            financial: FinancialSummary {
                starting_bankroll: self.starting_bankroll,
                ending_bankroll: self.bankroll,
                profit_loss: self.profit_loss(),
            },
            counting: CountingSummary {
                cards_dealt: shoe.cards_dealt(),
                final_running_count: shoe.running_count(),
            },
            hands: self.hands.clone(),
        }
    }
}

/// Session metadata block of the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetadata {
    /// ISO-8601 date supplied by the caller.
    pub date: String,
    /// Session duration in milliseconds.
    pub duration: u64,
    /// Table configuration in effect.
    pub config: TableOptions,
}

/// Financial block of the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    /// Buy-in.
    pub starting_bankroll: usize,
    /// Bankroll at export time.
    pub ending_bankroll: usize,
    /// Ending minus starting bankroll.
    pub profit_loss: i64,
}

/// Counting block of the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountingSummary {
    /// Cards seen over the session's current shoe.
    pub cards_dealt: u32,
    /// Running count at export time.
    pub final_running_count: i32,
}

/// The session-summary export shape. Serialize with
/// [`to_json`](Self::to_json) and hand the string to the shell for
/// download or storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Date, duration and configuration.
    pub metadata: SummaryMetadata,
    /// Bankroll results.
    pub financial: FinancialSummary,
    /// Count statistics.
    pub counting: CountingSummary,
    /// Per-hand log.
    pub hands: Vec<HandRecord>,
}

impl SessionSummary {
    /// Renders the summary as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns any `serde_json` serialization error.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
