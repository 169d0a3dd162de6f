//! Pocket identity and number properties.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Red numbers on a standard layout. Numbers 1-10 and 19-28 are red when
/// odd; 11-18 and 29-36 are red when even.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// A wheel pocket. The double zero is its own variant rather than a
/// string overload, so American and European zeros can never be confused
/// by an equality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Pocket {
    /// The single zero.
    Zero,
    /// The American double zero.
    DoubleZero,
    /// A numbered pocket.
    ///
    /// Note: construction does not validate the number. Values outside
    /// 1..=36 parse as errors but can be built directly; they simply
    /// never win anything.
    Number(u8),
}

impl Pocket {
    /// The pocket's number, or `None` for either zero.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::Zero | Self::DoubleZero => None,
            Self::Number(n) => Some(n),
        }
    }

    /// Whether this is the single or double zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Zero | Self::DoubleZero)
    }

    /// Whether the pocket is red. Zeros are neither red nor black.
    #[must_use]
    pub fn is_red(self) -> bool {
        self.number()
            .is_some_and(|n| RED_NUMBERS.contains(&n))
    }

    /// Whether the pocket is black. Zeros are neither red nor black.
    #[must_use]
    pub fn is_black(self) -> bool {
        self.number()
            .is_some_and(|n| (1..=36).contains(&n) && !RED_NUMBERS.contains(&n))
    }

    /// Whether the pocket wins an even bet. Zeros are neither even nor
    /// odd.
    #[must_use]
    pub const fn is_even(self) -> bool {
        match self.number() {
            Some(n) => n % 2 == 0,
            None => false,
        }
    }

    /// Whether the pocket wins an odd bet.
    #[must_use]
    pub const fn is_odd(self) -> bool {
        match self.number() {
            Some(n) => n % 2 == 1,
            None => false,
        }
    }

    /// Whether the pocket is in the low half (1-18).
    #[must_use]
    pub const fn is_low(self) -> bool {
        match self.number() {
            Some(n) => n >= 1 && n <= 18,
            None => false,
        }
    }

    /// Whether the pocket is in the high half (19-36).
    #[must_use]
    pub const fn is_high(self) -> bool {
        match self.number() {
            Some(n) => n >= 19 && n <= 36,
            None => false,
        }
    }

    /// The layout column (1-3) the number falls in, or `None` for zeros.
    /// Column 1 holds 1, 4, 7, …; column 3 holds 3, 6, 9, ….
    #[must_use]
    pub const fn column(self) -> Option<u8> {
        match self.number() {
            Some(n) if n >= 1 && n <= 36 => Some((n - 1) % 3 + 1),
            _ => None,
        }
    }

    /// The dozen (1-3) the number falls in, or `None` for zeros.
    #[must_use]
    pub const fn dozen(self) -> Option<u8> {
        match self.number() {
            Some(n) if n >= 1 && n <= 36 => Some((n - 1) / 12 + 1),
            _ => None,
        }
    }
}

impl fmt::Display for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("0"),
            Self::DoubleZero => f.write_str("00"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<Pocket> for String {
    fn from(pocket: Pocket) -> Self {
        pocket.to_string()
    }
}

/// Error returned when parsing an unrecognized pocket label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePocketError(pub String);

impl fmt::Display for ParsePocketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized pocket label: {}", self.0)
    }
}

impl std::error::Error for ParsePocketError {}

impl FromStr for Pocket {
    type Err = ParsePocketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Self::Zero),
            "00" => Ok(Self::DoubleZero),
            other => match other.parse::<u8>() {
                Ok(n) if (1..=36).contains(&n) => Ok(Self::Number(n)),
                _ => Err(ParsePocketError(other.to_owned())),
            },
        }
    }
}

impl TryFrom<String> for Pocket {
    type Error = ParsePocketError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
