//! Long multiplication, one row per multiplier digit

use num_bigint::BigUint;

use crate::config::EngineConfig;
use crate::messages;
use crate::model::{consume_carries, Carry, PartialProduct};
use crate::numeric::{digits_lsb, digits_to_string, from_digits_lsb};
use crate::step::{ColumnAction, MulStep, Step};

/// Multiply `a` by each digit of `b`, ones first, then add up the rows
pub fn multiplication(a: &BigUint, b: &BigUint, config: &EngineConfig) -> Vec<Step> {
    let locale = config.locale;
    let da = digits_lsb(a);
    let db = digits_lsb(b);
    let single_digit = db.len() == 1;
    let product = (a * b).to_string();

    let mut steps = Vec::with_capacity(db.len() * (da.len() + 1) + 1);
    let mut partials: Vec<PartialProduct> = Vec::with_capacity(db.len());

    for (i, &md) in db.iter().enumerate() {
        let mut carries: Vec<Carry> = Vec::new();
        // digits of the row under construction, least significant first
        let mut row: Vec<u8> = Vec::with_capacity(da.len() + 1);
        let mut carry = 0u8;

        for (j, &td) in da.iter().enumerate() {
            let carry_in = carry;
            let value = td * md + carry_in;

            consume_carries(&mut carries);
            carry = value / 10;
            if carry > 0 {
                carries.push(Carry::pending(carry, j + 1));
            }
            row.push(value % 10);

            let mut explanation = String::new();
            if j == 0 && i > 0 {
                explanation.push_str(&messages::new_row(locale, md, i));
            }
            explanation.push_str(&messages::column(locale, None, md, '·', td, carry_in, value, carry));
            let closes_derivation = single_digit && j + 1 == da.len() && carry == 0;
            if closes_derivation {
                explanation.push_str(&messages::product_annotation(
                    locale,
                    &a.to_string(),
                    &b.to_string(),
                    &product,
                ));
            }

            steps.push(Step::Multiplication(MulStep {
                a: a.clone(),
                b: b.clone(),
                multiplier_position: i,
                action: Some(ColumnAction::Column {
                    position: j,
                    top: td,
                    bottom: md,
                    carry_in,
                    value,
                }),
                carries: carries.clone(),
                partial_products: with_current_row(&partials, &row, i),
                result: if closes_derivation {
                    product.clone()
                } else {
                    digits_to_string(&row)
                },
                explanation,
                is_final: false,
            }));
        }

        if carry > 0 {
            consume_carries(&mut carries);
            row.push(carry);
            let row_text = digits_to_string(&row);
            let mut explanation =
                messages::prepend_carry(locale, carry) + &messages::row_value(locale, &row_text);
            if single_digit {
                explanation.push_str(&messages::product_annotation(
                    locale,
                    &a.to_string(),
                    &b.to_string(),
                    &product,
                ));
            }

            steps.push(Step::Multiplication(MulStep {
                a: a.clone(),
                b: b.clone(),
                multiplier_position: i,
                action: Some(ColumnAction::PrependCarry {
                    position: da.len(),
                    carry,
                }),
                carries,
                partial_products: with_current_row(&partials, &row, i),
                result: if single_digit { product.clone() } else { row_text },
                explanation,
                is_final: false,
            }));
        }

        partials.push(PartialProduct {
            value: from_digits_lsb(&row),
            shift: i,
            is_current: false,
        });
    }

    if !single_digit {
        let terms: Vec<String> = partials
            .iter()
            .map(|p| p.shifted_value().to_string())
            .collect();
        steps.push(Step::Multiplication(MulStep {
            a: a.clone(),
            b: b.clone(),
            multiplier_position: db.len() - 1,
            action: None,
            carries: Vec::new(),
            partial_products: partials,
            result: product.clone(),
            explanation: messages::sum_partials(locale, &terms, &product),
            is_final: false,
        }));
    }

    super::finish("multiplication", steps)
}

/// Finished rows plus the row being built, flagged as current
fn with_current_row(finished: &[PartialProduct], row: &[u8], shift: usize) -> Vec<PartialProduct> {
    let mut rows = finished.to_vec();
    rows.push(PartialProduct {
        value: from_digits_lsb(row),
        shift,
        is_current: true,
    });
    rows
}
