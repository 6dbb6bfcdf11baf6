//! Property tests for the generators and the player

use num_bigint::BigUint;
use pratiro_math::generator::{addition, division, fraction, multiplication, subtraction};
use pratiro_math::step::{FractionView, Step};
use pratiro_math::{EngineConfig, Fraction, FractionOperator, Locale, Operator, PlayerState, StepPlayer};
use proptest::prelude::*;

fn config() -> EngineConfig {
    EngineConfig::with_locale(Locale::English)
}

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Exactly one final step, and it is the last
fn single_final(steps: &[Step]) -> bool {
    match steps.split_last() {
        Some((last, rest)) => last.is_final() && rest.iter().all(|s| !s.is_final()),
        None => false,
    }
}

fn parse_fraction(text: &str) -> (i64, i64) {
    let (n, d) = text.split_once('/').unwrap();
    (n.parse().unwrap(), d.parse().unwrap())
}

proptest! {
    #[test]
    fn addition_is_correct(a in 0u64..u64::MAX / 2, b in 0u64..u64::MAX / 2) {
        let steps = addition(&big(a), &big(b), &config());
        prop_assert!(single_final(&steps));
        let result: u64 = steps.last().unwrap().result().parse().unwrap();
        prop_assert_eq!(result, a + b);
    }

    #[test]
    fn subtraction_is_correct(a in 0u64..1_000_000_000, b in 0u64..1_000_000_000) {
        let steps = subtraction(&big(a), &big(b), &config());
        if b > a {
            prop_assert_eq!(steps.len(), 1);
            prop_assert!(steps[0].is_error());
        } else {
            prop_assert!(single_final(&steps));
            let result: u64 = steps.last().unwrap().result().parse().unwrap();
            prop_assert_eq!(result, a - b);
        }
    }

    #[test]
    fn multiplication_is_correct(a in 0u64..10_000_000, b in 0u64..10_000_000) {
        let steps = multiplication(&big(a), &big(b), &config());
        prop_assert!(single_final(&steps));
        let result: u64 = steps.last().unwrap().result().parse().unwrap();
        prop_assert_eq!(result, a * b);
    }

    #[test]
    fn single_digit_multiplier_step_count(a in 0u64..100_000_000, b in 0u64..10) {
        let steps = multiplication(&big(a), &big(b), &config());
        let digits = a.to_string().len();
        // a carry is left over exactly when the product outgrows the multiplicand
        let leftover_carry = (a * b).to_string().len() > digits;
        let expected = digits + usize::from(leftover_carry);
        prop_assert_eq!(steps.len(), expected);
    }

    #[test]
    fn division_follows_decimal_policy(a in 0u64..1_000_000, b in 1u64..1_000) {
        let steps = division(&big(a), &big(b), &config());
        prop_assert!(single_final(&steps));
        let result = steps.last().unwrap().result().to_string();

        let exact = (a * 100) % b == 0;
        prop_assert_eq!(!result.starts_with('≈'), exact);

        let digits = result.trim_start_matches('≈');
        let (integer, decimals) = digits.split_once('.').unwrap_or((digits, ""));
        prop_assert_eq!(integer.parse::<u64>().unwrap(), a / b);
        if a % b == 0 {
            prop_assert_eq!(decimals, "");
        }
        if !exact {
            prop_assert_eq!(decimals.len(), 2);
        }
        let padded = format!("{:0<2}", decimals);
        prop_assert_eq!(padded.parse::<u64>().unwrap(), (a * 100 / b) % 100);
    }

    #[test]
    fn fraction_sum_uses_lcm_and_ends_reduced(
        n1 in -500i64..500, d1 in 1i64..60,
        n2 in -500i64..500, d2 in 1i64..60,
        subtract in any::<bool>(),
    ) {
        let op = if subtract { FractionOperator::Sub } else { FractionOperator::Add };
        let steps = fraction(Fraction::new(n1, d1), Fraction::new(n2, d2), op, &config());
        prop_assert!(single_final(&steps));

        let lcm = d1 / gcd(d1, d2) * d2;
        let unreduced = steps.iter().find_map(|s| match s {
            Step::Fraction(f) => match f.view {
                FractionView::Result { value } => Some(value),
                _ => None,
            },
            _ => None,
        });
        prop_assert_eq!(unreduced.map(|v| v.denominator), Some(lcm));

        let (n, d) = parse_fraction(steps.last().unwrap().result());
        prop_assert_eq!(gcd(n, d), 1);
        // same value as the exact sum
        let expected_n = if subtract { n1 * d2 - n2 * d1 } else { n1 * d2 + n2 * d1 };
        prop_assert_eq!(n * d1 * d2, expected_n * d);
    }

    #[test]
    fn fraction_product_and_quotient_end_reduced(
        n1 in -500i64..500, d1 in 1i64..60,
        n2 in -500i64..500, d2 in 1i64..60,
        divide in any::<bool>(),
    ) {
        prop_assume!(!divide || n2 != 0);
        let op = if divide { FractionOperator::Div } else { FractionOperator::Mul };
        let steps = fraction(Fraction::new(n1, d1), Fraction::new(n2, d2), op, &config());
        prop_assert!(single_final(&steps));
        prop_assert!(steps.len() <= 2);

        let (n, d) = parse_fraction(steps.last().unwrap().result());
        prop_assert!(d > 0);
        prop_assert_eq!(gcd(n, d), 1);
        // same value as the exact product or quotient
        let (expected_n, expected_d) = if divide { (n1 * d2, d1 * n2) } else { (n1 * n2, d1 * d2) };
        prop_assert_eq!(n * expected_d, expected_n * d);
    }

    #[test]
    fn player_visits_every_step_in_order(a in 0u64..100_000, b in 0u64..100_000) {
        let mut player = StepPlayer::with_config(config());
        player.calculate(&a.to_string(), &b.to_string(), Operator::Mul);
        let len = player.steps().len();
        prop_assert_eq!(player.previous(), PlayerState::Viewing(0));
        for i in 1..len {
            prop_assert_eq!(player.next(), PlayerState::Viewing(i));
        }
        prop_assert_eq!(player.next(), PlayerState::Summary);
        prop_assert_eq!(player.summary().unwrap().step_count, len);
    }
}
