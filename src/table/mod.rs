//! Trainer table: seats, dealer hand, shoe and the deal-order state
//! machine, with exact undo of every dealt card.

use tracing::debug;

use crate::card::Rank;
use crate::error::{DealError, UndoError};
use crate::hand::{DealerHand, HandValue};
use crate::options::TableOptions;
use crate::session::{HandOutcome, SeatRoundResult};
use crate::shoe::{CountSnapshot, Shoe};

mod actions;
mod seat;
mod sequencer;

pub use actions::PlayerAction;
pub use seat::{Seat, SeatStatus};
pub use sequencer::{DealTarget, RoundPhase};

use seat::SeatFlags;
use sequencer::Sequencer;

/// One entry of the deal history. Captures everything a dealt card can
/// change besides the card itself, so undo restores the table exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DealRecord {
    rank: Rank,
    target: DealTarget,
    seq_before: Sequencer,
    seat_flags_before: Option<(usize, SeatFlags)>,
    hole_revealed_before: bool,
}

/// State returned to the caller after a card is dealt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DealOutcome {
    /// The rank that was dealt.
    pub rank: Rank,
    /// Where the card landed.
    pub target: DealTarget,
    /// Phase after the card was applied.
    pub phase: RoundPhase,
    /// Count state after the card was counted.
    pub count: CountSnapshot,
    /// Evaluation of the hand the card landed on.
    pub hand: HandValue,
}

/// State returned to the caller after an undo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UndoOutcome {
    /// The rank that was taken back.
    pub rank: Rank,
    /// The hand it was removed from.
    pub target: DealTarget,
    /// Phase after the undo.
    pub phase: RoundPhase,
    /// Count state after the undo.
    pub count: CountSnapshot,
}

/// A multi-seat trainer table.
///
/// The table owns the shoe, the seats and the dealer hand, and routes
/// every reported card through the deal-order state machine. Counting
/// and sequencing always move together: a card that cannot be counted is
/// rejected before any hand or phase changes, and an accepted card
/// updates both before the call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    options: TableOptions,
    seats: Vec<Seat>,
    dealer: DealerHand,
    shoe: Shoe,
    seq: Sequencer,
    /// Seat indices dealt into the current round, ascending.
    active: Vec<usize>,
    history: Vec<DealRecord>,
}

impl Table {
    /// Creates a table with a fresh shoe and all seats empty. No round is
    /// in progress until [`start_new_round`](Self::start_new_round).
    #[must_use]
    pub fn new(options: TableOptions) -> Self {
        let seats = (0..options.seats).map(|_| Seat::new()).collect();
        let shoe = Shoe::new(options.decks);
        Self {
            options,
            seats,
            dealer: DealerHand::new(),
            shoe,
            seq: Sequencer::idle(),
            active: Vec::new(),
            history: Vec::new(),
        }
    }

    /// The table configuration.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Current round phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.seq.phase
    }

    /// The shoe and count state.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// The dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// All seats in table order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// A seat by index.
    #[must_use]
    pub fn seat(&self, index: usize) -> Option<&Seat> {
        self.seats.get(index)
    }

    /// Seat indices dealt into the current round, ascending.
    #[must_use]
    pub fn active_seats(&self) -> &[usize] {
        &self.active
    }

    /// The seat whose turn it is, if the round is in the player phase.
    #[must_use]
    pub fn current_seat(&self) -> Option<usize> {
        (self.seq.phase == RoundPhase::PlayerTurn).then(|| self.active[self.seq.current])
    }

    /// Cards dealt so far this round.
    #[must_use]
    pub const fn cards_this_round(&self) -> usize {
        self.seq.deal_index
    }

    /// Where the next reported card will land, or `None` when the round
    /// is over.
    #[must_use]
    pub fn deal_target(&self) -> Option<DealTarget> {
        match self.seq.phase {
            RoundPhase::Dealing => self
                .seq
                .dealing_target(&self.active, self.options.dealer_style),
            RoundPhase::PlayerTurn => self.current_seat().map(DealTarget::Seat),
            RoundPhase::DealerTurn => Some(DealTarget::DealerUp),
            RoundPhase::Resolution => None,
        }
    }

    /// Sets a seat's occupancy. Takes effect when the next round starts.
    ///
    /// Returns `false` when the index does not exist.
    pub fn set_seat_status(&mut self, index: usize, status: SeatStatus) -> bool {
        match self.seats.get_mut(index) {
            Some(seat) => {
                seat.status = status;
                true
            }
            None => false,
        }
    }

    /// Sets the bet riding on a seat's hand.
    ///
    /// Returns `false` when the index does not exist.
    pub fn set_bet(&mut self, index: usize, bet: usize) -> bool {
        match self.seats.get_mut(index) {
            Some(seat) => {
                seat.bet = bet;
                true
            }
            None => false,
        }
    }

    /// Starts a new round: clears hands, per-round seat flags and the
    /// sequencer, recomputes the active-seat list, and empties the undo
    /// history. The running count and shoe depletion carry over.
    pub fn start_new_round(&mut self) {
        for seat in &mut self.seats {
            seat.reset_round();
        }
        self.dealer.clear();
        self.active = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, seat)| seat.in_round())
            .map(|(index, _)| index)
            .collect();
        self.history.clear();
        self.seq = Sequencer::new_round();
        if self
            .seq
            .skip_exhausted_steps(self.active.len(), self.options.dealer_style)
        {
            self.enter_player_turn();
        }
        debug!(active = ?self.active, "new round");
    }

    /// Starts a new shoe: a new round plus a full count and depletion
    /// reset.
    pub fn start_new_shoe(&mut self) {
        self.shoe.reset();
        self.start_new_round();
        debug!(decks = self.shoe.decks(), "new shoe");
    }

    /// Reports a dealt card. The card is counted, routed to the hand the
    /// sequencer designates, and the phase advances — all in one step.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DepletedRank`] when no copies of the rank
    /// remain, and [`DealError::RoundOver`] during resolution. On error
    /// nothing changes.
    pub fn deal_card(&mut self, rank: Rank) -> Result<DealOutcome, DealError> {
        let target = match self.seq.phase {
            RoundPhase::Dealing => self
                .seq
                .dealing_target(&self.active, self.options.dealer_style)
                .ok_or(DealError::RoundOver)?,
            RoundPhase::PlayerTurn => DealTarget::Seat(self.active[self.seq.current]),
            RoundPhase::DealerTurn => DealTarget::DealerUp,
            RoundPhase::Resolution => return Err(DealError::RoundOver),
        };

        let seat_flags_before = match target {
            DealTarget::Seat(index) => Some((index, self.seats[index].flags())),
            DealTarget::DealerHole | DealTarget::DealerUp => None,
        };
        let record = DealRecord {
            rank,
            target,
            seq_before: self.seq,
            seat_flags_before,
            hole_revealed_before: self.dealer.is_hole_revealed(),
        };

        self.shoe.deal(rank)?;
        self.history.push(record);
        self.seq.deal_index += 1;

        match target {
            DealTarget::Seat(index) => self.seats[index].hand.push(rank),
            DealTarget::DealerHole => self.dealer.set_hole(rank),
            DealTarget::DealerUp => self.dealer.push_up(rank),
        }

        match self.seq.phase {
            RoundPhase::Dealing => {
                if self
                    .seq
                    .advance_dealing(self.active.len(), self.options.dealer_style)
                {
                    self.enter_player_turn();
                }
            }
            RoundPhase::PlayerTurn => self.after_player_card(),
            RoundPhase::DealerTurn | RoundPhase::Resolution => {}
        }

        debug!(rank = %rank, to = ?target, phase = ?self.seq.phase, "card dealt");

        Ok(DealOutcome {
            rank,
            target,
            phase: self.seq.phase,
            count: self.shoe.snapshot(),
            hand: self.hand_value_at(target),
        })
    }

    /// Takes back the most recently dealt card, restoring the touched
    /// hand, seat flags, sequencer position and count exactly.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::EmptyHistory`] when no card has been dealt
    /// this round.
    pub fn undo_last_card(&mut self) -> Result<UndoOutcome, UndoError> {
        let record = *self.history.last().ok_or(UndoError::EmptyHistory)?;
        self.shoe.undo(record.rank)?;
        self.history.pop();

        match record.target {
            DealTarget::Seat(index) => {
                self.seats[index].hand.pop();
            }
            DealTarget::DealerHole => {
                self.dealer.take_hole();
            }
            DealTarget::DealerUp => {
                self.dealer.pop_up();
            }
        }

        if let Some((index, flags)) = record.seat_flags_before {
            self.seats[index].restore_flags(flags);
        }
        self.dealer.set_hole_revealed(record.hole_revealed_before);
        self.seq = record.seq_before;

        debug!(rank = %record.rank, from = ?record.target, "card undone");

        Ok(UndoOutcome {
            rank: record.rank,
            target: record.target,
            phase: self.seq.phase,
            count: self.shoe.snapshot(),
        })
    }

    /// Signals that the live dealer has finished drawing. The round moves
    /// to resolution. The engine never ends the dealer's turn on its own:
    /// whether to draw at 17 is the house's call, and the advisory
    /// soft-17 rule in the options is display-only.
    ///
    /// Returns `false` outside the dealer's turn.
    pub fn dealer_done(&mut self) -> bool {
        if self.seq.phase != RoundPhase::DealerTurn {
            return false;
        }
        self.seq.phase = RoundPhase::Resolution;
        debug!(dealer_total = self.dealer.value().total, "round resolved");
        true
    }

    /// Advisory per-seat outcomes against the dealer's final hand. Only
    /// meaningful once the round has reached resolution; the trainer
    /// settles nothing itself.
    #[must_use]
    pub fn round_summary(&self) -> Vec<SeatRoundResult> {
        let dealer_value = self.dealer.value();
        self.active
            .iter()
            .map(|&index| {
                let seat = &self.seats[index];
                let value = seat.value();
                let outcome = Self::seat_outcome(value, seat.is_busted, dealer_value);
                SeatRoundResult {
                    seat: index + 1,
                    status: seat.status,
                    bet: seat.bet,
                    outcome,
                    seat_total: value.total,
                    dealer_total: dealer_value.total,
                }
            })
            .collect()
    }

    fn seat_outcome(value: HandValue, busted: bool, dealer: HandValue) -> HandOutcome {
        if busted || value.is_bust {
            HandOutcome::Lose
        } else if value.is_blackjack {
            if dealer.is_blackjack {
                HandOutcome::Push
            } else {
                HandOutcome::Blackjack
            }
        } else if dealer.is_bust {
            HandOutcome::Win
        } else if dealer.is_blackjack {
            HandOutcome::Lose
        } else if value.total > dealer.total {
            HandOutcome::Win
        } else if value.total < dealer.total {
            HandOutcome::Lose
        } else {
            HandOutcome::Push
        }
    }

    fn hand_value_at(&self, target: DealTarget) -> HandValue {
        match target {
            DealTarget::Seat(index) => self.seats[index].value(),
            DealTarget::DealerHole | DealTarget::DealerUp => self.dealer.value(),
        }
    }

    fn enter_player_turn(&mut self) {
        self.seq.phase = RoundPhase::PlayerTurn;
        self.seq.current = self.active.len();
        self.advance_player();
    }

    /// Moves to the next seat that can still act, rightmost first; runs
    /// out into the dealer's turn.
    pub(crate) fn advance_player(&mut self) {
        let mut index = self.seq.current;
        loop {
            if index == 0 {
                self.enter_dealer_turn();
                return;
            }
            index -= 1;
            if self.seats[self.active[index]].can_act() {
                self.seq.current = index;
                return;
            }
        }
    }

    fn enter_dealer_turn(&mut self) {
        self.seq.phase = RoundPhase::DealerTurn;
        self.dealer.reveal_hole();
        debug!("dealer turn");
    }

    /// Applies the hit/double consequences of a card landing on the
    /// acting seat.
    fn after_player_card(&mut self) {
        let index = self.active[self.seq.current];
        let seat = &mut self.seats[index];
        let value = seat.hand.value();

        if value.is_bust {
            seat.is_busted = true;
            self.advance_player();
        } else if seat.is_doubling {
            // The double card ends the hand whatever the total.
            seat.is_standing = true;
            self.advance_player();
        } else if value.total == 21 {
            seat.is_standing = true;
            self.advance_player();
        }
    }
}
