//! Value types shared by the derivation generators
//!
//! Carries, borrow events, division rows, partial products and fractions.
//! These hold no behavior beyond construction and display; each generator
//! builds its own snapshots of them into the steps it emits.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Whether a carried digit is still waiting to be added or already consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CarryState {
    /// Written above the next column, not yet added in
    Pending,
    /// Added into the column it was carried to
    Used,
}

/// A digit carried from one column to the next more significant column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Carry {
    pub value: u8,
    /// Column the carry is written above (0 = ones)
    pub position: usize,
    pub state: CarryState,
}

impl Carry {
    pub fn pending(value: u8, position: usize) -> Self {
        Carry {
            value,
            position,
            state: CarryState::Pending,
        }
    }

    pub fn is_used(&self) -> bool {
        self.state == CarryState::Used
    }
}

/// Mark every pending carry in `carries` as consumed
pub(crate) fn consume_carries(carries: &mut [Carry]) {
    for carry in carries.iter_mut() {
        carry.state = CarryState::Used;
    }
}

/// A minuend digit rewritten while borrowing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowEvent {
    pub position: usize,
    /// Digit value after the borrow (decremented lender, or 9 for a skipped zero)
    pub new_digit: u8,
}

/// One row of the long division layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionRow {
    #[serde(serialize_with = "decimal_string")]
    pub brought_down: BigUint,
    #[serde(serialize_with = "decimal_string")]
    pub subtracted: BigUint,
    #[serde(serialize_with = "decimal_string")]
    pub remainder: BigUint,
    pub is_decimal_extension: bool,
}

/// One operand multiplied by a single digit of the other, shifted by place value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialProduct {
    #[serde(serialize_with = "decimal_string")]
    pub value: BigUint,
    /// Number of trailing zero placeholders (1 = tens, 2 = hundreds, ...)
    pub shift: usize,
    pub is_current: bool,
}

impl PartialProduct {
    /// The row's contribution to the product, placeholders included
    pub fn shifted_value(&self) -> BigUint {
        &self.value * BigUint::from(10u32).pow(self.shift as u32)
    }
}

/// A fraction as the learner wrote it
///
/// Unlike a rational number type this is never reduced implicitly: 2/4 stays
/// 2/4 until a derivation step reduces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Fraction {
            numerator,
            denominator,
        }
    }

    /// Move a negative sign from the denominator to the numerator
    pub fn normalized_sign(self) -> Self {
        if self.denominator < 0 {
            Fraction::new(-self.numerator, -self.denominator)
        } else {
            self
        }
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<(i64, i64)> for Fraction {
    fn from((n, d): (i64, i64)) -> Self {
        Fraction::new(n, d)
    }
}

/// Big integers travel to JS as decimal strings
pub(crate) fn decimal_string<S: Serializer>(value: &BigUint, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}
