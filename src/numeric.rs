//! Small numeric helpers shared by the generators

use num_bigint::BigUint;
use num_integer::Integer;

/// Greatest common divisor, always non-negative. `gcd(a, 0) == |a|`.
pub fn gcd(a: i64, b: i64) -> i64 {
    a.gcd(&b)
}

/// Least common multiple; 0 when either operand is 0
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a.lcm(&b)
}

/// Decimal digits of `n`, least significant first. Zero yields `[0]`.
pub fn digits_lsb(n: &BigUint) -> Vec<u8> {
    let mut digits = n.to_radix_le(10);
    if digits.is_empty() {
        digits.push(0);
    }
    digits
}

/// Rebuild a number from least-significant-first decimal digits
pub fn from_digits_lsb(digits: &[u8]) -> BigUint {
    BigUint::from_radix_le(digits, 10).unwrap_or_default()
}

/// Render least-significant-first digits as text, most significant first
pub fn digits_to_string(digits: &[u8]) -> String {
    digits
        .iter()
        .rev()
        .map(|d| char::from(b'0' + d))
        .collect()
}

/// Strip leading zeros, keeping a single "0" for zero
pub fn trim_leading_zeros(s: &str) -> String {
    let trimmed = s.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
