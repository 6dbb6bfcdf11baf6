//! Input validation and dispatch to the generators
//!
//! Operands arrive as the text the learner typed. A comma is accepted as the
//! decimal separator. Whole-number problems take non-negative integers only;
//! a decimal part made of zeros ("12,0") still counts as an integer.

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

use crate::config::{EngineConfig, Locale};
use crate::generator;
use crate::messages;
use crate::model::Fraction;
use crate::operator::{FractionOperator, Operator};
use crate::step::Step;

/// Largest magnitude accepted for a fraction field; keeps every product in `i64`
pub const MAX_FRACTION_FIELD: i64 = 1_000_000_000;

/// Most digits accepted for a whole-number operand.
///
/// Every step snapshots the operands and the working rows, so derivation size
/// grows with the square of the operand length (faster for multiplication).
pub const MAX_WHOLE_DIGITS: usize = 15;

/// Input rejected before any generator runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing number")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("'{0}' is not a whole number")]
    NotAnInteger(String),
    #[error("'{0}' is negative")]
    Negative(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("denominator is zero")]
    ZeroDenominator,
    #[error("'{0}' is too large")]
    TooLarge(String),
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
}

impl ValidationError {
    /// The message shown to the learner
    pub fn localized(&self, locale: Locale) -> String {
        messages::validation_error(locale, self)
    }
}

/// A number as typed: sign, integer digits, decimal digits
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedNumber {
    negative: bool,
    integer: BigUint,
    has_fraction: bool,
}

fn parse_number(input: &str) -> Result<ParsedNumber, ValidationError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ValidationError::Empty);
    }
    let normalized = text.replace(',', ".");
    let (negative, unsigned) = match normalized.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, normalized.as_str()),
    };
    let (integer_part, fraction_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f),
        None => (unsigned, ""),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (integer_part.is_empty() && fraction_part.is_empty())
        || !all_digits(integer_part)
        || !all_digits(fraction_part)
    {
        return Err(ValidationError::NotANumber(text.to_string()));
    }

    let integer = if integer_part.is_empty() {
        BigUint::zero()
    } else {
        integer_part
            .parse::<BigUint>()
            .map_err(|_| ValidationError::NotANumber(text.to_string()))?
    };

    Ok(ParsedNumber {
        negative: negative && !(integer.is_zero() && fraction_part.chars().all(|c| c == '0')),
        integer,
        has_fraction: fraction_part.chars().any(|c| c != '0'),
    })
}

/// Parse a non-negative whole number of at most [`MAX_WHOLE_DIGITS`] digits
pub fn parse_whole(input: &str) -> Result<BigUint, ValidationError> {
    let parsed = parse_number(input)?;
    if parsed.has_fraction {
        return Err(ValidationError::NotAnInteger(input.trim().to_string()));
    }
    if parsed.negative {
        return Err(ValidationError::Negative(input.trim().to_string()));
    }
    if parsed.integer.to_str_radix(10).len() > MAX_WHOLE_DIGITS {
        return Err(ValidationError::TooLarge(input.trim().to_string()));
    }
    Ok(parsed.integer)
}

/// Parse a signed integer for a fraction field
pub fn parse_fraction_field(input: &str) -> Result<i64, ValidationError> {
    let parsed = parse_number(input)?;
    if parsed.has_fraction {
        return Err(ValidationError::NotAnInteger(input.trim().to_string()));
    }
    let magnitude = i64::try_from(&parsed.integer)
        .ok()
        .filter(|m| *m <= MAX_FRACTION_FIELD)
        .ok_or_else(|| ValidationError::TooLarge(input.trim().to_string()))?;
    Ok(if parsed.negative { -magnitude } else { magnitude })
}

/// Validates input and runs the matching generator
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Derive `left <op> right` for whole numbers
    pub fn calculate(
        &self,
        left: &str,
        right: &str,
        op: Operator,
    ) -> Result<Vec<Step>, ValidationError> {
        let a = parse_whole(left).map_err(|e| self.rejected(e))?;
        let b = parse_whole(right).map_err(|e| self.rejected(e))?;

        Ok(match op {
            Operator::Add => generator::addition(&a, &b, &self.config),
            Operator::Sub => generator::subtraction(&a, &b, &self.config),
            Operator::Mul => generator::multiplication(&a, &b, &self.config),
            Operator::Div => {
                if b.is_zero() {
                    return Err(self.rejected(ValidationError::DivisionByZero));
                }
                generator::division(&a, &b, &self.config)
            }
        })
    }

    /// Derive `n1/d1 <op> n2/d2`
    pub fn calculate_fraction(
        &self,
        fields: [&str; 4],
        op: FractionOperator,
    ) -> Result<Vec<Step>, ValidationError> {
        let [n1, d1, n2, d2] = fields;
        let left = self.parse_fraction(n1, d1)?;
        let right = self.parse_fraction(n2, d2)?;
        if op == FractionOperator::Div && right.is_zero() {
            return Err(self.rejected(ValidationError::DivisionByZero));
        }
        Ok(generator::fraction(left, right, op, &self.config))
    }

    fn parse_fraction(&self, numerator: &str, denominator: &str) -> Result<Fraction, ValidationError> {
        let n = parse_fraction_field(numerator).map_err(|e| self.rejected(e))?;
        let d = parse_fraction_field(denominator).map_err(|e| self.rejected(e))?;
        if d == 0 {
            return Err(self.rejected(ValidationError::ZeroDenominator));
        }
        Ok(Fraction::new(n, d))
    }

    fn rejected(&self, error: ValidationError) -> ValidationError {
        tracing::debug!(%error, "input rejected");
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::new(EngineConfig::with_locale(Locale::English))
    }

    #[test]
    fn test_parse_whole() {
        assert_eq!(parse_whole(" 42 ").unwrap(), BigUint::from(42u32));
        assert_eq!(parse_whole("12,0").unwrap(), BigUint::from(12u32));
        assert_eq!(parse_whole("12.00").unwrap(), BigUint::from(12u32));
        assert_eq!(parse_whole("-0").unwrap(), BigUint::zero());
        assert_eq!(
            parse_whole("12,5"),
            Err(ValidationError::NotAnInteger("12,5".to_string()))
        );
        assert_eq!(
            parse_whole("-3"),
            Err(ValidationError::Negative("-3".to_string()))
        );
        assert_eq!(
            parse_whole("abc"),
            Err(ValidationError::NotANumber("abc".to_string()))
        );
        assert_eq!(parse_whole("  "), Err(ValidationError::Empty));
        assert_eq!(
            parse_whole("1.2.3"),
            Err(ValidationError::NotANumber("1.2.3".to_string()))
        );
    }

    #[test]
    fn test_parse_whole_digit_limit() {
        let at_limit = "9".repeat(MAX_WHOLE_DIGITS);
        assert_eq!(parse_whole(&at_limit).unwrap().to_string(), at_limit);
        // leading zeros do not count
        let padded = format!("000{}", at_limit);
        assert_eq!(parse_whole(&padded).unwrap().to_string(), at_limit);

        let past_limit = format!("1{}", "0".repeat(MAX_WHOLE_DIGITS));
        assert_eq!(
            parse_whole(&past_limit),
            Err(ValidationError::TooLarge(past_limit.clone()))
        );
    }

    #[test]
    fn test_oversized_operand_is_rejected_before_generating() {
        let long = "9".repeat(400);
        assert_eq!(
            engine().calculate(&long, &long, Operator::Mul),
            Err(ValidationError::TooLarge(long.clone()))
        );
        let at_limit = "9".repeat(MAX_WHOLE_DIGITS);
        let steps = engine().calculate(&at_limit, &at_limit, Operator::Mul).unwrap();
        assert_eq!(
            steps.last().unwrap().result(),
            "999999999999998000000000000001"
        );
    }

    #[test]
    fn test_parse_fraction_field() {
        assert_eq!(parse_fraction_field("-7").unwrap(), -7);
        assert_eq!(parse_fraction_field("3,0").unwrap(), 3);
        assert_eq!(
            parse_fraction_field("10000000000"),
            Err(ValidationError::TooLarge("10000000000".to_string()))
        );
    }

    #[test]
    fn test_dispatch_routes_by_operator() {
        let steps = engine().calculate("47", "58", Operator::Add).unwrap();
        assert!(matches!(steps[0], Step::Addition(_)));
        assert_eq!(steps.last().unwrap().result(), "105");

        let steps = engine().calculate("7", "2", Operator::Div).unwrap();
        assert!(matches!(steps[0], Step::Division(_)));
        assert_eq!(steps.last().unwrap().result(), "3.5");
    }

    #[test]
    fn test_division_by_zero_is_rejected() {
        assert_eq!(
            engine().calculate("7", "0", Operator::Div),
            Err(ValidationError::DivisionByZero)
        );
    }

    #[test]
    fn test_decimal_operand_rejected_for_division() {
        assert_eq!(
            engine().calculate("7,5", "2", Operator::Div),
            Err(ValidationError::NotAnInteger("7,5".to_string()))
        );
    }

    #[test]
    fn test_fraction_validation() {
        let e = engine();
        assert_eq!(
            e.calculate_fraction(["1", "0", "1", "2"], FractionOperator::Add),
            Err(ValidationError::ZeroDenominator)
        );
        assert_eq!(
            e.calculate_fraction(["1", "2", "0", "5"], FractionOperator::Div),
            Err(ValidationError::DivisionByZero)
        );
        assert_eq!(
            e.calculate_fraction(["1,5", "2", "1", "3"], FractionOperator::Add),
            Err(ValidationError::NotAnInteger("1,5".to_string()))
        );
        let steps = e
            .calculate_fraction(["1", "2", "1", "3"], FractionOperator::Add)
            .unwrap();
        assert_eq!(steps.last().unwrap().result(), "5/6");
    }

    #[test]
    fn test_localized_messages() {
        assert_eq!(
            ValidationError::DivisionByZero.localized(Locale::Norwegian),
            "Du kan ikke dele på null."
        );
        assert_eq!(
            ValidationError::Negative("-3".to_string()).localized(Locale::English),
            "Use positive numbers only. \"-3\" is negative."
        );
        assert_eq!(ValidationError::ZeroDenominator.to_string(), "denominator is zero");
    }
}
