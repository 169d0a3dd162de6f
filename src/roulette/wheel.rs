//! Wheel configuration and outcome generation.
//!
//! The winning pocket is drawn before any animation parameter exists and
//! never depends on one: presentation layers receive a settled outcome
//! and are free to spin the graphics however they like.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pocket::Pocket;

const fn n(value: u8) -> Pocket {
    Pocket::Number(value)
}

/// Clockwise physical pocket order of a European wheel, starting at zero.
pub const EUROPEAN_SEQUENCE: [Pocket; 37] = [
    Pocket::Zero,
    n(32),
    n(15),
    n(19),
    n(4),
    n(21),
    n(2),
    n(25),
    n(17),
    n(34),
    n(6),
    n(27),
    n(13),
    n(36),
    n(11),
    n(30),
    n(8),
    n(23),
    n(10),
    n(5),
    n(24),
    n(16),
    n(33),
    n(1),
    n(20),
    n(14),
    n(31),
    n(9),
    n(22),
    n(18),
    n(29),
    n(7),
    n(28),
    n(12),
    n(35),
    n(3),
    n(26),
];

/// Clockwise physical pocket order of an American wheel, starting at
/// zero.
pub const AMERICAN_SEQUENCE: [Pocket; 38] = [
    Pocket::Zero,
    n(28),
    n(9),
    n(26),
    n(30),
    n(11),
    n(7),
    n(20),
    n(32),
    n(17),
    n(5),
    n(22),
    n(34),
    n(15),
    n(3),
    n(24),
    n(36),
    n(13),
    n(1),
    Pocket::DoubleZero,
    n(27),
    n(10),
    n(25),
    n(29),
    n(12),
    n(8),
    n(19),
    n(31),
    n(18),
    n(6),
    n(21),
    n(33),
    n(16),
    n(4),
    n(23),
    n(35),
    n(14),
    n(2),
];

/// House edge of the American top-line bet, the worst wager on either
/// layout.
pub const TOP_LINE_EDGE: f64 = 3.0 / 38.0;

const VOISINS: [u8; 17] = [0, 2, 3, 4, 7, 12, 15, 18, 19, 21, 22, 25, 26, 28, 29, 32, 35];
const TIERS: [u8; 12] = [5, 8, 10, 11, 13, 16, 23, 24, 27, 30, 33, 36];
const ORPHELINS: [u8; 8] = [1, 6, 9, 14, 17, 20, 31, 34];

/// Roulette variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Single-zero wheel, 37 pockets.
    #[default]
    European,
    /// Double-zero wheel, 38 pockets.
    American,
}

/// Named sector of the European wheel, as laid out on a racetrack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    /// Voisins du Zéro, the 17 pockets around zero.
    Voisins,
    /// Tiers du Cylindre, the 12 pockets opposite zero.
    Tiers,
    /// Orphelins, the 8 leftover pockets.
    Orphelins,
}

impl Sector {
    /// The numbers covered by the sector (zero included for Voisins).
    #[must_use]
    pub const fn numbers(self) -> &'static [u8] {
        match self {
            Self::Voisins => &VOISINS,
            Self::Tiers => &TIERS,
            Self::Orphelins => &ORPHELINS,
        }
    }
}

/// Immutable wheel configuration for one roulette variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wheel {
    variant: Variant,
    sequence: &'static [Pocket],
    house_edge: f64,
}

impl Wheel {
    /// The single-zero wheel.
    #[must_use]
    pub const fn european() -> Self {
        Self {
            variant: Variant::European,
            sequence: &EUROPEAN_SEQUENCE,
            house_edge: 1.0 / 37.0,
        }
    }

    /// The double-zero wheel.
    #[must_use]
    pub const fn american() -> Self {
        Self {
            variant: Variant::American,
            sequence: &AMERICAN_SEQUENCE,
            house_edge: 2.0 / 38.0,
        }
    }

    /// Wheel for the given variant.
    #[must_use]
    pub const fn new(variant: Variant) -> Self {
        match variant {
            Variant::European => Self::european(),
            Variant::American => Self::american(),
        }
    }

    /// The wheel's variant.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// The pockets in physical clockwise order.
    #[must_use]
    pub const fn pockets(&self) -> &'static [Pocket] {
        self.sequence
    }

    /// Number of pockets on the wheel.
    #[must_use]
    pub const fn pocket_count(&self) -> usize {
        self.sequence.len()
    }

    /// House edge on all standard bets.
    #[must_use]
    pub const fn house_edge(&self) -> f64 {
        self.house_edge
    }

    /// The zero pockets of this wheel.
    #[must_use]
    pub const fn zeros(&self) -> &'static [Pocket] {
        match self.variant {
            Variant::European => &[Pocket::Zero],
            Variant::American => &[Pocket::Zero, Pocket::DoubleZero],
        }
    }

    /// Draws the winning pocket from the operating-system CSPRNG.
    ///
    /// A cryptographically secure source is a design requirement, not a
    /// nicety: the trainer must be free of even perceived predictability.
    #[must_use]
    pub fn spin(&self) -> Pocket {
        self.spin_with(&mut rand::rng())
    }

    /// Draws the winning pocket from the supplied generator. Used by the
    /// batch simulator and by tests that need replayable spins.
    pub fn spin_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Pocket {
        let index = rng.random_range(0..self.sequence.len());
        let pocket = self.sequence[index];
        debug!(pocket = %pocket, "spin");
        pocket
    }

    /// Index of a pocket in the physical sequence.
    #[must_use]
    pub fn pocket_index(&self, pocket: Pocket) -> Option<usize> {
        self.sequence.iter().position(|&p| p == pocket)
    }

    /// Degrees of arc each pocket occupies.
    #[must_use]
    pub fn degrees_per_pocket(&self) -> f64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "pocket counts are tiny"
        )]
        let count = self.sequence.len() as f64;
        360.0 / count
    }

    /// Resting angle of a pocket, measured clockwise from the zero
    /// position. Purely a display derivation; the outcome never depends
    /// on it.
    #[must_use]
    pub fn pocket_angle(&self, pocket: Pocket) -> Option<f64> {
        let index = self.pocket_index(pocket)?;
        #[expect(clippy::cast_precision_loss, reason = "pocket counts are tiny")]
        let angle = index as f64 * self.degrees_per_pocket();
        Some(angle)
    }

    /// The pocket and its physical neighbours, `each_side` on either
    /// side (capped at half the wheel), wrapping around. Returns `None`
    /// for a pocket not on this wheel.
    #[must_use]
    pub fn neighbours(&self, pocket: Pocket, each_side: usize) -> Option<Vec<Pocket>> {
        let center = self.pocket_index(pocket)?;
        let len = self.sequence.len();
        let each_side = each_side.min(len / 2);
        let mut result = Vec::with_capacity(2 * each_side + 1);
        for offset in 0..=(2 * each_side) {
            let index = (center + len + offset - each_side) % len;
            result.push(self.sequence[index]);
        }
        Some(result)
    }

    /// The racetrack sector a pocket belongs to. Only the European wheel
    /// has named sectors.
    #[must_use]
    pub fn sector(&self, pocket: Pocket) -> Option<Sector> {
        if self.variant != Variant::European {
            return None;
        }
        let value = match pocket {
            Pocket::Zero => 0,
            Pocket::DoubleZero => return None,
            Pocket::Number(v) => v,
        };
        if VOISINS.contains(&value) {
            Some(Sector::Voisins)
        } else if TIERS.contains(&value) {
            Some(Sector::Tiers)
        } else if ORPHELINS.contains(&value) {
            Some(Sector::Orphelins)
        } else {
            None
        }
    }
}
