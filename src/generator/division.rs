//! Long division with a capped decimal expansion

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::config::EngineConfig;
use crate::messages;
use crate::model::DivisionRow;
use crate::step::{DivStep, Step};

/// Divide `dividend` by `divisor` digit by digit.
///
/// Once the dividend's digits run out a non-zero remainder is extended with
/// zeros, up to `config.max_decimal_places` decimals. If the remainder is
/// still non-zero at that point a closing step reports the truncated quotient
/// marked with `≈`.
pub fn division(dividend: &BigUint, divisor: &BigUint, config: &EngineConfig) -> Vec<Step> {
    let locale = config.locale;
    if divisor.is_zero() {
        return super::reject("division", messages::divide_by_zero(locale));
    }

    let digits: Vec<u32> = dividend
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();
    let max_decimals = usize::from(config.max_decimal_places);
    let divisor_text = divisor.to_string();

    let mut steps = Vec::new();
    let mut rows: Vec<DivisionRow> = Vec::new();
    let mut quotient = String::new();
    let mut remainder = BigUint::zero();
    let mut decimals = 0usize;
    let mut index = 0usize;

    loop {
        let extending = index >= digits.len();
        let next_digit = if extending { 0 } else { digits[index] };
        index += 1;

        let current = &remainder * 10u32 + next_digit;
        let count = &current / divisor;
        let subtracted = &count * divisor;
        remainder = &current - &subtracted;
        // current < 10 * divisor, so count is a single digit
        let count_digit = count.to_u32().unwrap_or(0);

        let mut explanation = messages::division_row(
            locale,
            &divisor_text,
            &current.to_string(),
            count_digit,
            &subtracted.to_string(),
            &remainder.to_string(),
            extending,
        );

        if extending {
            if decimals == 0 {
                quotient.push(locale.decimal_separator());
                explanation.push_str(&messages::decimal_point(locale));
            }
            decimals += 1;
            quotient.push(char::from_digit(count_digit, 10).unwrap_or('0'));
        } else if !(quotient.is_empty() && count_digit == 0 && index < digits.len()) {
            // leading zeros of the quotient are not written
            quotient.push(char::from_digit(count_digit, 10).unwrap_or('0'));
        }

        rows.push(DivisionRow {
            brought_down: current,
            subtracted,
            remainder: remainder.clone(),
            is_decimal_extension: extending,
        });

        let digits_done = index >= digits.len();
        let exact = digits_done && remainder.is_zero();
        let capped = digits_done && !remainder.is_zero() && decimals >= max_decimals;
        if exact {
            explanation.push_str(&messages::answer(locale, &quotient));
        }

        steps.push(Step::Division(DivStep {
            dividend: dividend.clone(),
            divisor: divisor.clone(),
            rows: rows.clone(),
            quotient: quotient.clone(),
            decimal_places: decimals,
            approximate: false,
            result: quotient.clone(),
            explanation,
            is_final: false,
        }));

        if exact {
            break;
        }
        if capped {
            steps.push(Step::Division(DivStep {
                dividend: dividend.clone(),
                divisor: divisor.clone(),
                rows,
                quotient: quotient.clone(),
                decimal_places: decimals,
                approximate: true,
                result: format!("≈{}", quotient),
                explanation: messages::approximation(locale, decimals, &quotient),
                is_final: false,
            }));
            break;
        }
    }

    super::finish("division", steps)
}
