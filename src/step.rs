//! Derivation steps
//!
//! A derivation is a `Vec<Step>`. Each generator emits only its own variant
//! (plus `Step::Error` where it can reject input itself), and renderers match
//! on the variant. Steps serialize as objects tagged with a `kind` field.

use num_bigint::BigUint;
use serde::Serialize;

use crate::model::{decimal_string, BorrowEvent, Carry, DivisionRow, Fraction, PartialProduct};
use crate::operator::FractionOperator;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Step {
    Addition(AddStep),
    Subtraction(SubStep),
    Multiplication(MulStep),
    Division(DivStep),
    Fraction(FracStep),
    Error(ErrorStep),
}

impl Step {
    /// Narration shown next to the step
    pub fn explanation(&self) -> &str {
        match self {
            Step::Addition(s) => &s.explanation,
            Step::Subtraction(s) => &s.explanation,
            Step::Multiplication(s) => &s.explanation,
            Step::Division(s) => &s.explanation,
            Step::Fraction(s) => &s.explanation,
            Step::Error(s) => &s.message,
        }
    }

    /// True only on the last step of a successful derivation
    pub fn is_final(&self) -> bool {
        match self {
            Step::Addition(s) => s.is_final,
            Step::Subtraction(s) => s.is_final,
            Step::Multiplication(s) => s.is_final,
            Step::Division(s) => s.is_final,
            Step::Fraction(s) => s.is_final,
            Step::Error(_) => false,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Step::Error(_))
    }

    /// The running (or, on the final step, complete) answer as displayed
    pub fn result(&self) -> &str {
        match self {
            Step::Addition(s) => &s.result,
            Step::Subtraction(s) => &s.result,
            Step::Multiplication(s) => &s.result,
            Step::Division(s) => &s.result,
            Step::Fraction(s) => &s.result,
            Step::Error(_) => "",
        }
    }

    pub(crate) fn set_final(&mut self, is_final: bool) {
        match self {
            Step::Addition(s) => s.is_final = is_final,
            Step::Subtraction(s) => s.is_final = is_final,
            Step::Multiplication(s) => s.is_final = is_final,
            Step::Division(s) => s.is_final = is_final,
            Step::Fraction(s) => s.is_final = is_final,
            Step::Error(_) => {}
        }
    }

    pub fn error(message: impl Into<String>) -> Step {
        Step::Error(ErrorStep {
            message: message.into(),
        })
    }
}

/// What happened in a single digit column of an addition or multiplication
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ColumnAction {
    /// One column computed: `top (+|·) bottom + carry_in = value`
    #[serde(rename_all = "camelCase")]
    Column {
        position: usize,
        top: u8,
        bottom: u8,
        carry_in: u8,
        value: u8,
    },
    /// A leftover carry written in front of the result
    #[serde(rename_all = "camelCase")]
    PrependCarry { position: usize, carry: u8 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStep {
    #[serde(serialize_with = "decimal_string")]
    pub a: BigUint,
    #[serde(serialize_with = "decimal_string")]
    pub b: BigUint,
    pub action: ColumnAction,
    pub carries: Vec<Carry>,
    pub result: String,
    pub explanation: String,
    pub is_final: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubStep {
    #[serde(serialize_with = "decimal_string")]
    pub a: BigUint,
    #[serde(serialize_with = "decimal_string")]
    pub b: BigUint,
    pub position: usize,
    /// Minuend digit of this column after any borrowing
    pub top: u8,
    pub bottom: u8,
    /// Digit written under the column; `None` while borrowing
    pub digit: Option<u8>,
    pub borrowed: bool,
    /// Minuend digits as currently rewritten, least significant first
    pub working_digits: Vec<u8>,
    pub borrows: Vec<BorrowEvent>,
    pub result: String,
    pub explanation: String,
    pub is_final: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MulStep {
    #[serde(serialize_with = "decimal_string")]
    pub a: BigUint,
    #[serde(serialize_with = "decimal_string")]
    pub b: BigUint,
    /// Position of the multiplier digit in use
    pub multiplier_position: usize,
    /// `None` on the step that adds up the partial products
    pub action: Option<ColumnAction>,
    pub carries: Vec<Carry>,
    pub partial_products: Vec<PartialProduct>,
    pub result: String,
    pub explanation: String,
    pub is_final: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivStep {
    #[serde(serialize_with = "decimal_string")]
    pub dividend: BigUint,
    #[serde(serialize_with = "decimal_string")]
    pub divisor: BigUint,
    pub rows: Vec<DivisionRow>,
    /// Quotient digits written so far, decimal separator included
    pub quotient: String,
    pub decimal_places: usize,
    /// Set on the closing step when the decimal cap cut the quotient short
    pub approximate: bool,
    pub result: String,
    pub explanation: String,
    pub is_final: bool,
}

/// What a fraction step puts on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum FractionView {
    /// Both fractions as entered
    Compare,
    /// Both fractions rewritten over the common denominator
    #[serde(rename_all = "camelCase")]
    Expanded {
        left: Fraction,
        right: Fraction,
        common_denominator: i64,
    },
    Result { value: Fraction },
    /// `from` divided through by `divisor`
    Reduced {
        from: Fraction,
        value: Fraction,
        divisor: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FracStep {
    pub left: Fraction,
    pub right: Fraction,
    pub operator: FractionOperator,
    #[serde(flatten)]
    pub view: FractionView,
    pub result: String,
    pub explanation: String,
    pub is_final: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorStep {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_step_accessors() {
        let step = Step::error("nope");
        assert!(step.is_error());
        assert!(!step.is_final());
        assert_eq!(step.explanation(), "nope");
        assert_eq!(step.result(), "");
    }

    #[test]
    fn test_serialized_shape() {
        let step = Step::Fraction(FracStep {
            left: Fraction::new(1, 2),
            right: Fraction::new(1, 3),
            operator: FractionOperator::Add,
            view: FractionView::Result {
                value: Fraction::new(5, 6),
            },
            result: "5/6".to_string(),
            explanation: String::new(),
            is_final: true,
        });
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["kind"], "fraction");
        assert_eq!(json["view"], "result");
        assert_eq!(json["value"]["numerator"], 5);
        assert_eq!(json["isFinal"], true);
        assert_eq!(json["operator"], "add");
    }
}
