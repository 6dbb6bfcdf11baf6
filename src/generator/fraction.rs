//! Fraction arithmetic: common denominators, products, quotients, reduction

use crate::config::{EngineConfig, Locale};
use crate::messages;
use crate::model::Fraction;
use crate::numeric::{gcd, lcm};
use crate::operator::FractionOperator;
use crate::step::{FracStep, FractionView, Step};

/// Combine `left` and `right` with `op`, ending in lowest terms.
///
/// Inputs must have non-zero denominators, and `right` must be non-zero for
/// division; the dispatch layer checks both.
pub fn fraction(
    left: Fraction,
    right: Fraction,
    op: FractionOperator,
    config: &EngineConfig,
) -> Vec<Step> {
    let locale = config.locale;
    let left = left.normalized_sign();
    let right = right.normalized_sign();
    let frame = Frame { left, right, op };

    let mut steps = Vec::with_capacity(4);
    let value = match op {
        FractionOperator::Add | FractionOperator::Sub => {
            let cd = lcm(left.denominator, right.denominator);
            steps.push(frame.step(
                FractionView::Compare,
                String::new(),
                messages::fraction_compare(locale, left, op.symbol(), right, cd),
            ));

            let expanded_left = Fraction::new(left.numerator * (cd / left.denominator), cd);
            let expanded_right = Fraction::new(right.numerator * (cd / right.denominator), cd);
            steps.push(frame.step(
                FractionView::Expanded {
                    left: expanded_left,
                    right: expanded_right,
                    common_denominator: cd,
                },
                String::new(),
                messages::fraction_expand(locale, left, expanded_left, right, expanded_right),
            ));

            let numerator = if op == FractionOperator::Add {
                expanded_left.numerator + expanded_right.numerator
            } else {
                expanded_left.numerator - expanded_right.numerator
            };
            let value = Fraction::new(numerator, cd);
            steps.push(frame.step(
                FractionView::Result { value },
                value.to_string(),
                messages::fraction_combine(
                    locale,
                    expanded_left.numerator,
                    op.symbol(),
                    expanded_right.numerator,
                    value,
                ),
            ));
            value
        }
        FractionOperator::Mul => {
            let value = Fraction::new(
                left.numerator * right.numerator,
                left.denominator * right.denominator,
            );
            steps.push(frame.step(
                FractionView::Result { value },
                value.to_string(),
                messages::fraction_multiply(locale, left, right, value),
            ));
            value
        }
        FractionOperator::Div => {
            let value = Fraction::new(
                left.numerator * right.denominator,
                left.denominator * right.numerator,
            )
            .normalized_sign();
            steps.push(frame.step(
                FractionView::Result { value },
                value.to_string(),
                messages::fraction_divide(locale, left, right, value),
            ));
            value
        }
    };

    if let Some(step) = frame.reduction(value, locale) {
        steps.push(step);
    }

    super::finish("fraction", steps)
}

/// The problem as entered, shared by every step
struct Frame {
    left: Fraction,
    right: Fraction,
    op: FractionOperator,
}

impl Frame {
    fn step(&self, view: FractionView, result: String, explanation: String) -> Step {
        Step::Fraction(FracStep {
            left: self.left,
            right: self.right,
            operator: self.op,
            view,
            result,
            explanation,
            is_final: false,
        })
    }

    /// A reduction step when `value` is not in lowest terms
    fn reduction(&self, value: Fraction, locale: Locale) -> Option<Step> {
        let divisor = gcd(value.numerator, value.denominator);
        if divisor <= 1 {
            return None;
        }
        let reduced = Fraction::new(value.numerator / divisor, value.denominator / divisor);
        Some(self.step(
            FractionView::Reduced {
                from: value,
                value: reduced,
                divisor,
            },
            reduced.to_string(),
            messages::fraction_reduce(locale, value, divisor, reduced),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::assert_single_final;

    fn frac(n1: i64, d1: i64, n2: i64, d2: i64, op: FractionOperator) -> Vec<Step> {
        fraction(
            Fraction::new(n1, d1),
            Fraction::new(n2, d2),
            op,
            &EngineConfig::with_locale(Locale::English),
        )
    }

    fn view(step: &Step) -> &FractionView {
        match step {
            Step::Fraction(f) => &f.view,
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_add_already_reduced() {
        let steps = frac(1, 2, 1, 3, FractionOperator::Add);
        assert_single_final(&steps);
        assert_eq!(steps.len(), 3);
        assert_eq!(view(&steps[0]), &FractionView::Compare);
        assert_eq!(
            view(&steps[1]),
            &FractionView::Expanded {
                left: Fraction::new(3, 6),
                right: Fraction::new(2, 6),
                common_denominator: 6,
            }
        );
        assert_eq!(steps[2].result(), "5/6");
        assert_eq!(
            steps[1].explanation(),
            "Expand the fractions: 1/2 = 3/6 and 1/3 = 2/6."
        );
    }

    #[test]
    fn test_add_with_reduction() {
        let steps = frac(1, 4, 1, 4, FractionOperator::Add);
        assert_single_final(&steps);
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[2].result(), "2/4");
        assert_eq!(
            view(&steps[3]),
            &FractionView::Reduced {
                from: Fraction::new(2, 4),
                value: Fraction::new(1, 2),
                divisor: 2,
            }
        );
        assert_eq!(steps[3].explanation(), "Reduce by 2: 2/4 = 1/2.");
    }

    #[test]
    fn test_subtract_negative_result() {
        let steps = frac(1, 3, 1, 2, FractionOperator::Sub);
        assert_single_final(&steps);
        assert_eq!(steps.last().unwrap().result(), "-1/6");
    }

    #[test]
    fn test_subtract_to_zero() {
        let steps = frac(2, 5, 2, 5, FractionOperator::Sub);
        assert_single_final(&steps);
        assert_eq!(steps.last().unwrap().result(), "0/1");
    }

    #[test]
    fn test_multiply() {
        let steps = frac(2, 3, 3, 4, FractionOperator::Mul);
        assert_single_final(&steps);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].result(), "6/12");
        assert_eq!(steps[1].result(), "1/2");
    }

    #[test]
    fn test_divide() {
        let steps = frac(3, 4, 1, 2, FractionOperator::Div);
        assert_single_final(&steps);
        assert_eq!(steps[0].result(), "6/4");
        assert_eq!(steps.last().unwrap().result(), "3/2");
        assert_eq!(
            steps[0].explanation(),
            "Dividing by 1/2 is the same as multiplying by 2/1: 3 · 2 = 6 and 4 · 1 = 4, which gives 6/4."
        );
    }

    #[test]
    fn test_divide_by_negative_moves_sign() {
        let steps = frac(1, 3, -1, 2, FractionOperator::Div);
        assert_single_final(&steps);
        assert_eq!(steps.last().unwrap().result(), "-2/3");
    }

    #[test]
    fn test_negative_denominator_is_normalized() {
        let steps = frac(1, -2, 1, 2, FractionOperator::Add);
        assert_single_final(&steps);
        assert_eq!(steps.last().unwrap().result(), "0/1");
    }
}
