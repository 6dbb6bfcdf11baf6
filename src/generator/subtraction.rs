//! Column subtraction with borrowing

use num_bigint::BigUint;

use crate::config::EngineConfig;
use crate::messages;
use crate::model::BorrowEvent;
use crate::numeric::{digits_lsb, trim_leading_zeros};
use crate::step::{Step, SubStep};

/// Subtract `b` from `a` column by column, borrowing where needed.
///
/// Returns a single error step when `b > a`.
pub fn subtraction(a: &BigUint, b: &BigUint, config: &EngineConfig) -> Vec<Step> {
    let locale = config.locale;
    if b > a {
        return super::reject("subtraction", messages::subtrahend_too_large(locale));
    }

    let mut working = digits_lsb(a);
    let db = digits_lsb(b);
    let columns = working.len();

    let mut steps = Vec::with_capacity(columns * 2);
    let mut borrows: Vec<BorrowEvent> = Vec::new();
    let mut result = String::new();

    for i in 0..columns {
        let bottom = db.get(i).copied().unwrap_or(0);

        if working[i] < bottom {
            let Some(lender) = (i + 1..columns).find(|&j| working[j] != 0) else {
                // a >= b guarantees a non-zero digit above
                tracing::error!(%a, %b, column = i, "borrow cascade found no digit to borrow from");
                return vec![Step::error(messages::nothing_to_borrow(locale))];
            };

            let top = working[i];
            working[lender] -= 1;
            borrows.push(BorrowEvent {
                position: lender,
                new_digit: working[lender],
            });
            for k in (i + 1..lender).rev() {
                working[k] = 9;
                borrows.push(BorrowEvent {
                    position: k,
                    new_digit: 9,
                });
            }
            working[i] += 10;

            steps.push(Step::Subtraction(SubStep {
                a: a.clone(),
                b: b.clone(),
                position: i,
                top: working[i],
                bottom,
                digit: None,
                borrowed: true,
                working_digits: working.clone(),
                borrows: borrows.clone(),
                result: result.clone(),
                explanation: messages::borrow(locale, i + 1, top, bottom, lender + 1, lender > i + 1),
                is_final: false,
            }));
        }

        let top = working[i];
        let digit = top - bottom;
        result.insert(0, char::from(b'0' + digit));

        let mut explanation = messages::subtraction_column(locale, i + 1, top, bottom);
        let last = i + 1 == columns;
        if last {
            result = trim_leading_zeros(&result);
            explanation.push_str(&messages::answer(locale, &result));
        }

        steps.push(Step::Subtraction(SubStep {
            a: a.clone(),
            b: b.clone(),
            position: i,
            top,
            bottom,
            digit: Some(digit),
            borrowed: false,
            working_digits: working.clone(),
            borrows: borrows.clone(),
            result: result.clone(),
            explanation,
            is_final: false,
        }));
    }

    super::finish("subtraction", steps)
}
