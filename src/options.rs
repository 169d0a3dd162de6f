//! Table configuration options.

use serde::{Deserialize, Serialize};

/// Dealing style: whether the dealer takes a hole card during the initial
/// deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealerStyle {
    /// Dealer takes a face-down hole card first, then an upcard after the
    /// seats' second cards.
    #[default]
    American,
    /// Dealer takes a single upcard during the initial deal; further
    /// cards arrive on the dealer's turn.
    European,
}

/// House rule for the dealer's soft 17, shown for reference only. The
/// live dealer decides when to stop; the engine waits for an explicit
/// dealer-done signal either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DealerRule {
    /// Dealer stands on soft 17.
    #[default]
    #[serde(rename = "S17")]
    StandSoft17,
    /// Dealer hits soft 17.
    #[serde(rename = "H17")]
    HitSoft17,
}

/// Configuration options for a trainer table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use croupier::{DealerStyle, TableOptions};
///
/// let options = TableOptions::default()
///     .with_decks(8)
///     .with_dealer_style(DealerStyle::European)
///     .with_bet_limits(10, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Number of seats at the table.
    pub seats: usize,
    /// Dealing style.
    pub dealer_style: DealerStyle,
    /// Advisory soft-17 rule.
    pub dealer_rule: DealerRule,
    /// Whether the house offers surrender (advisory display only).
    pub surrender_allowed: bool,
    /// Table minimum bet.
    pub min_bet: usize,
    /// Table maximum bet.
    pub max_bet: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            seats: 5,
            dealer_style: DealerStyle::American,
            dealer_rule: DealerRule::StandSoft17,
            surrender_allowed: true,
            min_bet: 25,
            max_bet: 300,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of seats.
    #[must_use]
    pub const fn with_seats(mut self, seats: usize) -> Self {
        self.seats = seats;
        self
    }

    /// Sets the dealing style.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::{DealerStyle, TableOptions};
    ///
    /// let options = TableOptions::default().with_dealer_style(DealerStyle::European);
    /// assert_eq!(options.dealer_style, DealerStyle::European);
    /// ```
    #[must_use]
    pub const fn with_dealer_style(mut self, style: DealerStyle) -> Self {
        self.dealer_style = style;
        self
    }

    /// Sets the advisory soft-17 rule.
    #[must_use]
    pub const fn with_dealer_rule(mut self, rule: DealerRule) -> Self {
        self.dealer_rule = rule;
        self
    }

    /// Sets whether surrender is offered.
    #[must_use]
    pub const fn with_surrender_allowed(mut self, allowed: bool) -> Self {
        self.surrender_allowed = allowed;
        self
    }

    /// Sets the table bet limits.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::TableOptions;
    ///
    /// let options = TableOptions::default().with_bet_limits(10, 1000);
    /// assert_eq!((options.min_bet, options.max_bet), (10, 1000));
    /// ```
    #[must_use]
    pub const fn with_bet_limits(mut self, min_bet: usize, max_bet: usize) -> Self {
        self.min_bet = min_bet;
        self.max_bet = max_bet;
        self
    }
}
