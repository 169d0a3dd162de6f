//! Hand evaluation and hand containers for seats and the dealer.

use serde::{Deserialize, Serialize};

use crate::card::Rank;

/// Evaluation of a sequence of ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandValue {
    /// Best non-busting total (aces high where possible).
    pub total: u8,
    /// An ace is still counted as 11.
    pub is_soft: bool,
    /// Total exceeds 21 after all ace conversions.
    pub is_bust: bool,
    /// Exactly two cards totalling 21.
    pub is_blackjack: bool,
    /// Exactly two cards of equal blackjack value (ten-group ranks all
    /// pair with each other).
    pub is_pair: bool,
}

/// Evaluates a sequence of ranks.
///
/// Every ace starts at 11; while the total exceeds 21 and an unconverted
/// ace remains, one ace is dropped to 1. An empty sequence evaluates to
/// total 0 with no flags set.
#[must_use]
pub fn evaluate(ranks: &[Rank]) -> HandValue {
    let mut total: u16 = 0;
    let mut aces: u8 = 0;

    for rank in ranks {
        if *rank == Rank::Ace {
            aces += 1;
        }
        total += u16::from(rank.blackjack_value());
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && total <= 21;
    let is_bust = total > 21;
    let is_blackjack = ranks.len() == 2 && total == 21;
    let is_pair =
        ranks.len() == 2 && ranks[0].blackjack_value() == ranks[1].blackjack_value();

    HandValue {
        total: total.min(u16::from(u8::MAX)) as u8,
        is_soft,
        is_bust,
        is_blackjack,
        is_pair,
    }
}

/// A seat's hand: an ordered sequence of ranks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    ranks: Vec<Rank>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { ranks: Vec::new() }
    }

    /// Adds a rank to the hand.
    pub fn push(&mut self, rank: Rank) {
        self.ranks.push(rank);
    }

    /// Removes and returns the most recently added rank.
    pub fn pop(&mut self) -> Option<Rank> {
        self.ranks.pop()
    }

    /// The ranks in deal order.
    #[must_use]
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Evaluates the hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate(&self.ranks)
    }

    /// Number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.ranks.clear();
    }
}

/// The dealer's hand. With American dealing the first card is a face-down
/// hole card, revealed when the dealer's turn starts; the remaining cards
/// are face up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerHand {
    hole: Option<Rank>,
    up_cards: Vec<Rank>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates an empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hole: None,
            up_cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Sets the face-down hole card (American style).
    pub fn set_hole(&mut self, rank: Rank) {
        self.hole = Some(rank);
    }

    /// Removes the hole card, if any.
    pub fn take_hole(&mut self) -> Option<Rank> {
        self.hole.take()
    }

    /// Adds a face-up card.
    pub fn push_up(&mut self, rank: Rank) {
        self.up_cards.push(rank);
    }

    /// Removes and returns the most recent face-up card.
    pub fn pop_up(&mut self) -> Option<Rank> {
        self.up_cards.pop()
    }

    /// The face-up cards in deal order.
    #[must_use]
    pub fn up_cards(&self) -> &[Rank] {
        &self.up_cards
    }

    /// The hole card, if dealt. Presentation layers should only show it
    /// once [`is_hole_revealed`](Self::is_hole_revealed) is true.
    #[must_use]
    pub const fn hole(&self) -> Option<Rank> {
        self.hole
    }

    /// The dealer's visible card: the first face-up card.
    #[must_use]
    pub fn up_card(&self) -> Option<Rank> {
        self.up_cards.first().copied()
    }

    /// Whether the hole card has been revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    pub(crate) fn set_hole_revealed(&mut self, revealed: bool) {
        self.hole_revealed = revealed;
    }

    /// All ranks, hole card first, in physical order.
    #[must_use]
    pub fn all_ranks(&self) -> Vec<Rank> {
        let mut ranks = Vec::with_capacity(self.len());
        if let Some(hole) = self.hole {
            ranks.push(hole);
        }
        ranks.extend_from_slice(&self.up_cards);
        ranks
    }

    /// Evaluates the full hand, hole card included.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate(&self.all_ranks())
    }

    /// Evaluates only what the table can see: the full hand once the hole
    /// is revealed, face-up cards otherwise.
    #[must_use]
    pub fn visible_value(&self) -> HandValue {
        if self.hole_revealed {
            self.value()
        } else {
            evaluate(&self.up_cards)
        }
    }

    /// Number of cards, hole card included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.up_cards.len() + usize::from(self.hole.is_some())
    }

    /// Whether no cards have been dealt to the dealer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hole.is_none() && self.up_cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.hole = None;
        self.up_cards.clear();
        self.hole_revealed = false;
    }
}
