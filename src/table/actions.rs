//! Player actions during the player-turn phase.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ActionError;

use super::{RoundPhase, Table};

/// An action taken by a seat during the player turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerAction {
    /// Take another card. The card itself arrives through
    /// [`Table::deal_card`], which routes it to the acting seat.
    Hit,
    /// Keep the hand; play moves to the next seat.
    Stand,
    /// Double down: the bet doubles and the next dealt card ends the hand
    /// regardless of total.
    Double,
    /// Not supported by this trainer; always rejected.
    Split,
}

impl Table {
    /// Performs a player action for the given seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player-turn phase, the
    /// seat does not exist or is not the one acting, the seat has already
    /// finished, a double is attempted past the first two cards, or the
    /// action is [`PlayerAction::Split`].
    pub fn player_action(
        &mut self,
        seat_index: usize,
        action: PlayerAction,
    ) -> Result<(), ActionError> {
        if self.seq.phase != RoundPhase::PlayerTurn {
            return Err(ActionError::InvalidPhase);
        }
        if seat_index >= self.seats.len() {
            return Err(ActionError::NoSuchSeat);
        }
        let current = self.active[self.seq.current];
        if seat_index != current {
            return Err(ActionError::NotSeatsTurn);
        }
        if !self.seats[seat_index].can_act() {
            return Err(ActionError::SeatFinished);
        }

        match action {
            PlayerAction::Hit => {
                // Nothing to change yet: the next reported card lands on
                // this seat and carries the bust check with it.
                debug!(seat = seat_index + 1, "hit");
                Ok(())
            }
            PlayerAction::Stand => {
                self.seats[seat_index].is_standing = true;
                debug!(seat = seat_index + 1, "stand");
                self.advance_player();
                Ok(())
            }
            PlayerAction::Double => {
                let seat = &mut self.seats[seat_index];
                if seat.hand.len() != 2 || seat.is_doubling {
                    return Err(ActionError::CannotDouble);
                }
                seat.is_doubling = true;
                seat.bet *= 2;
                debug!(seat = seat_index + 1, bet = seat.bet, "double down");
                Ok(())
            }
            PlayerAction::Split => Err(ActionError::SplitUnsupported),
        }
    }
}
