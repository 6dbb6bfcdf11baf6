//! Column addition with carries

use num_bigint::BigUint;

use crate::config::EngineConfig;
use crate::messages;
use crate::model::{consume_carries, Carry};
use crate::numeric::digits_lsb;
use crate::step::{AddStep, ColumnAction, Step};

/// Add `a` and `b` column by column, ones first
pub fn addition(a: &BigUint, b: &BigUint, config: &EngineConfig) -> Vec<Step> {
    let locale = config.locale;
    let da = digits_lsb(a);
    let db = digits_lsb(b);
    let columns = da.len().max(db.len());

    let mut steps = Vec::with_capacity(columns + 1);
    let mut carries: Vec<Carry> = Vec::new();
    let mut result = String::new();
    let mut carry = 0u8;

    for i in 0..columns {
        let x = da.get(i).copied().unwrap_or(0);
        let y = db.get(i).copied().unwrap_or(0);
        let carry_in = carry;
        let sum = x + y + carry_in;

        consume_carries(&mut carries);
        carry = sum / 10;
        if carry > 0 {
            carries.push(Carry::pending(carry, i + 1));
        }
        result.insert(0, char::from(b'0' + sum % 10));

        let mut explanation = messages::column(locale, Some(i + 1), x, '+', y, carry_in, sum, carry);
        if i + 1 == columns && carry == 0 {
            explanation.push_str(&messages::answer(locale, &result));
        }

        steps.push(Step::Addition(AddStep {
            a: a.clone(),
            b: b.clone(),
            action: ColumnAction::Column {
                position: i,
                top: x,
                bottom: y,
                carry_in,
                value: sum,
            },
            carries: carries.clone(),
            result: result.clone(),
            explanation,
            is_final: false,
        }));
    }

    if carry > 0 {
        consume_carries(&mut carries);
        result.insert(0, char::from(b'0' + carry));
        let explanation = messages::prepend_carry(locale, carry) + &messages::answer(locale, &result);
        steps.push(Step::Addition(AddStep {
            a: a.clone(),
            b: b.clone(),
            action: ColumnAction::PrependCarry {
                position: columns,
                carry,
            },
            carries,
            result,
            explanation,
            is_final: false,
        }));
    }

    super::finish("addition", steps)
}
