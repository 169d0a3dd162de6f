//! Error types for engine operations.

use thiserror::Error;

use crate::card::Rank;

/// Errors that can occur when a dealt card is reported to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Every copy of this rank's depletion bucket has already been dealt.
    /// Input layers should disable the rank, but the engine rejects it
    /// regardless.
    #[error("no copies of rank {0} remain in the shoe")]
    DepletedRank(Rank),
    /// The round has been resolved; start a new round before dealing.
    #[error("round is over; no cards can be dealt")]
    RoundOver,
}

/// Errors that can occur when undoing a dealt card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UndoError {
    /// No cards have been dealt since the last shoe reset.
    #[error("nothing to undo")]
    EmptyHistory,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Player actions are only accepted during the player-turn phase.
    #[error("invalid game phase for this action")]
    InvalidPhase,
    /// The seat is not the one currently acting.
    #[error("not this seat's turn")]
    NotSeatsTurn,
    /// The seat index does not exist at this table.
    #[error("no such seat")]
    NoSuchSeat,
    /// The seat has already stood or busted.
    #[error("seat has already finished its hand")]
    SeatFinished,
    /// Doubling is only allowed on the first two cards.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Splitting is not supported by this trainer.
    #[error("split is not supported")]
    SplitUnsupported,
}

/// Errors that can occur when placing, restoring, or resolving bets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BetError {
    /// The bets would exceed the available bankroll.
    #[error("insufficient bankroll for this bet")]
    InsufficientBankroll,
    /// A keyed bet carries a key the resolver cannot interpret.
    #[error("malformed bet key: {0}")]
    MalformedKey(String),
}

/// Errors that can occur when spinning the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpinError {
    /// No bets are on the table.
    #[error("no bets placed")]
    NoBets,
    /// A placed bet could not be resolved.
    #[error(transparent)]
    Bet(#[from] BetError),
}
