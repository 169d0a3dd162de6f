//! Core engine for browser-based casino-game trainers.
//!
//! The crate provides the shared game-state and resolution machinery
//! behind a blackjack shoe-counting [`Table`], a [`roulette`] simulator
//! with a full bet ledger and resolver, and [`baccarat`] side-bet
//! counting aids. Presentation shells own all rendering, animation and
//! I/O; they feed events in and read state back out.
//!
//! # Example
//!
//! ```
//! use croupier::{Rank, SeatStatus, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default().with_decks(6));
//! table.set_seat_status(0, SeatStatus::Occupied);
//! table.set_seat_status(4, SeatStatus::Mine);
//! table.start_new_round();
//!
//! let outcome = table.deal_card(Rank::Five)?;
//! assert_eq!(outcome.count.running, 1);
//!
//! table.undo_last_card()?;
//! assert_eq!(table.shoe().running_count(), 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod baccarat;
pub mod card;
pub mod count;
pub mod error;
pub mod hand;
pub mod options;
pub mod roulette;
pub mod session;
pub mod shoe;
pub mod table;

// Re-export main types
pub use card::{CARDS_PER_DECK, ParseRankError, RANKS, Rank};
pub use error::{ActionError, BetError, DealError, SpinError, UndoError};
pub use hand::{DealerHand, Hand, HandValue, evaluate};
pub use options::{DealerRule, DealerStyle, TableOptions};
pub use roulette::{
    BetCategory, BetLedger, Pocket, RouletteGame, RouletteOptions, SpinResolution, Variant,
    Wheel, resolve,
};
pub use session::{HandOutcome, HandRecord, SeatRoundResult, Session, SessionSummary};
pub use shoe::{CountSnapshot, Shoe};
pub use table::{
    DealOutcome, DealTarget, PlayerAction, RoundPhase, Seat, SeatStatus, Table, UndoOutcome,
};
