//! Roulette simulator: wheel, bet ledger, resolver and the bankroll-aware
//! game session that ties them together.

mod bets;
mod pocket;
mod resolve;
mod sim;
mod wheel;

pub use bets::{BetCategory, BetLedger, LimitViolation, Placement, ViolationKind};
pub use pocket::{ParsePocketError, Pocket, RED_NUMBERS};
pub use resolve::{BetResult, SpinResolution, resolve};
pub use sim::SpinSimulator;
pub use wheel::{
    AMERICAN_SEQUENCE, EUROPEAN_SEQUENCE, Sector, TOP_LINE_EDGE, Variant, Wheel,
};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BetError, SpinError};

/// Configuration options for a roulette game.
///
/// ```
/// use croupier::roulette::{RouletteOptions, Variant};
///
/// let options = RouletteOptions::default()
///     .with_variant(Variant::American)
///     .with_starting_bankroll(2_000);
/// assert_eq!(options.variant, Variant::American);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouletteOptions {
    /// Wheel variant.
    pub variant: Variant,
    /// Bankroll the session starts with.
    pub starting_bankroll: usize,
    /// Table minimum bet.
    pub min_bet: usize,
    /// Table maximum bet.
    pub max_bet: usize,
}

impl Default for RouletteOptions {
    fn default() -> Self {
        Self {
            variant: Variant::European,
            starting_bankroll: 1_000,
            min_bet: 1,
            max_bet: 500,
        }
    }
}

impl RouletteOptions {
    /// Sets the wheel variant.
    #[must_use]
    pub const fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the starting bankroll.
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the table bet limits.
    #[must_use]
    pub const fn with_bet_limits(mut self, min_bet: usize, max_bet: usize) -> Self {
        self.min_bet = min_bet;
        self.max_bet = max_bet;
        self
    }
}

/// One settled spin in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinRecord {
    /// The winning pocket.
    pub pocket: Pocket,
    /// Total staked on the spin.
    pub wagered: usize,
    /// Total returned to the player.
    pub winnings: usize,
}

/// A roulette session: ledger, bankroll and spin history behind one
/// state object.
///
/// The ledger itself knows nothing about money; the game enforces the
/// bankroll at placement time and settles it after each spin.
#[derive(Debug, Clone)]
pub struct RouletteGame {
    options: RouletteOptions,
    wheel: Wheel,
    ledger: BetLedger,
    bankroll: usize,
    last_bets: Option<BetLedger>,
    history: Vec<SpinRecord>,
}

impl RouletteGame {
    /// Creates a session from the given options.
    #[must_use]
    pub fn new(options: RouletteOptions) -> Self {
        Self {
            wheel: Wheel::new(options.variant),
            ledger: BetLedger::new(),
            bankroll: options.starting_bankroll,
            last_bets: None,
            history: Vec::new(),
            options,
        }
    }

    /// The session configuration.
    #[must_use]
    pub const fn options(&self) -> &RouletteOptions {
        &self.options
    }

    /// The wheel in play.
    #[must_use]
    pub const fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    /// The bets currently on the layout.
    #[must_use]
    pub const fn ledger(&self) -> &BetLedger {
        &self.ledger
    }

    /// Current bankroll. Stakes on the layout are not yet deducted; they
    /// leave the bankroll when the spin settles.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Whether the session is out of money.
    #[must_use]
    pub const fn is_bankrupt(&self) -> bool {
        self.bankroll == 0
    }

    /// Places a stake, enforcing the bankroll.
    ///
    /// Returns `Ok(false)` without placing anything when the amount is
    /// zero (a designed no-op, matching the layout's dead-click
    /// behavior).
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientBankroll`] when the stake would
    /// push the total wagered past the bankroll.
    pub fn place_bet(
        &mut self,
        category: BetCategory,
        key: Option<&str>,
        amount: usize,
    ) -> Result<bool, BetError> {
        if amount == 0 {
            return Ok(false);
        }
        if self.ledger.total_wagered() + amount > self.bankroll {
            return Err(BetError::InsufficientBankroll);
        }
        Ok(self.ledger.place(category, key, amount))
    }

    /// Places straight stakes on a pocket and its physical neighbours,
    /// `each_side` on either side. Returns the number of stakes placed.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::MalformedKey`] for a pocket not on this wheel
    /// and [`BetError::InsufficientBankroll`] when the combined stake
    /// does not fit the bankroll; nothing is placed on error.
    pub fn place_neighbour_bet(
        &mut self,
        pocket: Pocket,
        each_side: usize,
        amount_per_pocket: usize,
    ) -> Result<usize, BetError> {
        let Some(pockets) = self.wheel.neighbours(pocket, each_side) else {
            return Err(BetError::MalformedKey(pocket.to_string()));
        };
        self.place_straight_spread(&pockets, amount_per_pocket)
    }

    /// Places flat straight stakes across every number of a racetrack
    /// sector. Returns the number of stakes placed.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientBankroll`] when the combined
    /// stake does not fit the bankroll; nothing is placed on error.
    pub fn place_call_bet(
        &mut self,
        sector: Sector,
        amount_per_pocket: usize,
    ) -> Result<usize, BetError> {
        let pockets: Vec<Pocket> = sector
            .numbers()
            .iter()
            .map(|&number| match number {
                0 => Pocket::Zero,
                value => Pocket::Number(value),
            })
            .collect();
        self.place_straight_spread(&pockets, amount_per_pocket)
    }

    fn place_straight_spread(
        &mut self,
        pockets: &[Pocket],
        amount_per_pocket: usize,
    ) -> Result<usize, BetError> {
        if amount_per_pocket == 0 {
            return Ok(0);
        }
        let combined = amount_per_pocket * pockets.len();
        if self.ledger.total_wagered() + combined > self.bankroll {
            return Err(BetError::InsufficientBankroll);
        }
        for pocket in pockets {
            self.ledger.place(
                BetCategory::Straight,
                Some(&pocket.to_string()),
                amount_per_pocket,
            );
        }
        Ok(pockets.len())
    }

    /// Removes up to `amount` from a stake. See [`BetLedger::remove`].
    pub fn remove_bet(
        &mut self,
        category: BetCategory,
        key: Option<&str>,
        amount: usize,
    ) -> bool {
        self.ledger.remove(category, key, amount)
    }

    /// Clears every bet from the layout.
    pub fn clear_bets(&mut self) {
        self.ledger.clear_all();
    }

    /// Sum of every stake on the layout.
    #[must_use]
    pub fn total_wagered(&self) -> usize {
        self.ledger.total_wagered()
    }

    /// Checks every stake against the table limits.
    #[must_use]
    pub fn validate_bets(&self) -> Vec<LimitViolation> {
        self.ledger
            .validate(self.options.min_bet, self.options.max_bet)
    }

    /// Spins the wheel with the OS CSPRNG and settles the layout.
    ///
    /// The outcome is drawn and the books are settled before this call
    /// returns; any spin animation the shell runs afterwards is pure
    /// theater.
    ///
    /// # Errors
    ///
    /// Returns [`SpinError::NoBets`] when nothing is staked, and
    /// [`SpinError::Bet`] when a placed key cannot be resolved.
    pub fn spin(&mut self) -> Result<SpinResolution, SpinError> {
        if !self.ledger.has_bets() {
            return Err(SpinError::NoBets);
        }
        let pocket = self.wheel.spin();
        self.settle(pocket)
    }

    /// Spins with the supplied generator; otherwise identical to
    /// [`spin`](Self::spin).
    ///
    /// # Errors
    ///
    /// Same as [`spin`](Self::spin).
    pub fn spin_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<SpinResolution, SpinError> {
        if !self.ledger.has_bets() {
            return Err(SpinError::NoBets);
        }
        let pocket = self.wheel.spin_with(rng);
        self.settle(pocket)
    }

    /// Resolves the current layout against a given pocket without
    /// touching the bankroll, ledger or history. For replay and
    /// what-if inspection.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::MalformedKey`] when a placed key cannot be
    /// resolved.
    pub fn resolution_for(&self, pocket: Pocket) -> Result<SpinResolution, BetError> {
        resolve(pocket, &self.ledger)
    }

    fn settle(&mut self, pocket: Pocket) -> Result<SpinResolution, SpinError> {
        let resolution = resolve(pocket, &self.ledger)?;

        self.bankroll = self.bankroll - resolution.total_wagered + resolution.total_winnings;
        self.last_bets = Some(self.ledger.clone());
        self.ledger.clear_all();
        self.history.push(SpinRecord {
            pocket,
            wagered: resolution.total_wagered,
            winnings: resolution.total_winnings,
        });
        debug!(pocket = %pocket, bankroll = self.bankroll, "spin settled");

        Ok(resolution)
    }

    /// Puts the previous spin's bets back on the layout.
    ///
    /// Returns `Ok(false)` when there is no previous layout.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientBankroll`] when the bankroll no
    /// longer covers the previous layout; the table is left unchanged.
    pub fn repeat_last_bets(&mut self) -> Result<bool, BetError> {
        let Some(last) = &self.last_bets else {
            return Ok(false);
        };
        if last.total_wagered() > self.bankroll {
            return Err(BetError::InsufficientBankroll);
        }
        self.ledger = last.clone();
        Ok(true)
    }

    /// Settled spins, oldest first.
    #[must_use]
    pub fn history(&self) -> &[SpinRecord] {
        &self.history
    }
}
