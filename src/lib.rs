//! Pratiro Math - Rust/WASM core for the Pratiro "show your work" math tutor
//!
//! This crate provides:
//! - Step generators for column addition, subtraction with borrowing,
//!   long multiplication, long division and fraction arithmetic
//! - Input validation and dispatch (`Engine`)
//! - A step player that walks through a derivation and closes with a summary

use wasm_bindgen::prelude::*;

pub mod config;
pub mod dispatch;
pub mod generator;
mod messages;
pub mod model;
pub mod numeric;
pub mod operator;
pub mod player;
pub mod step;

// Re-export main types for convenience
pub use config::{EngineConfig, Locale};
pub use dispatch::{Engine, ValidationError};
pub use model::{BorrowEvent, Carry, CarryState, DivisionRow, Fraction, PartialProduct};
pub use operator::{FractionOperator, Operator};
pub use player::{PlayerState, Problem, StepPlayer, Summary};
pub use step::Step;

/// Initialize the WASM module
/// Call this once when loading the module to set up panic hooks
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the pratiro-math library
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
