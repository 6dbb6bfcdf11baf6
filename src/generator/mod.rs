//! Step generators, one per operation
//!
//! Each generator runs to completion and returns the whole derivation.
//! Generators build every step with `is_final = false` and hand the sequence
//! to [`finish`], which flags the last one.

mod addition;
mod division;
mod fraction;
mod multiplication;
mod subtraction;

pub use addition::addition;
pub use division::division;
pub use fraction::fraction;
pub use multiplication::multiplication;
pub use subtraction::subtraction;

use crate::step::Step;

/// Flag the last step as final and log the derivation size
fn finish(operation: &'static str, mut steps: Vec<Step>) -> Vec<Step> {
    if let Some(last) = steps.last_mut() {
        last.set_final(true);
    }
    tracing::debug!(operation, steps = steps.len(), "generated derivation");
    steps
}

/// A derivation made of a single error step
fn reject(operation: &'static str, message: String) -> Vec<Step> {
    tracing::debug!(operation, %message, "generator rejected input");
    vec![Step::error(message)]
}

#[cfg(test)]
pub(crate) fn assert_single_final(steps: &[Step]) {
    assert!(!steps.is_empty(), "derivation is empty");
    let (last, rest) = steps.split_last().unwrap();
    assert!(last.is_final(), "last step is not final");
    assert!(
        rest.iter().all(|s| !s.is_final()),
        "a step before the last is final"
    );
}
