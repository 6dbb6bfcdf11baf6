//! Step Player - walks a learner through a derivation
//!
//! Holds the steps of the last calculation and a cursor into them. The
//! cursor is `None` before anything is calculated, an index while a step is
//! shown, and `steps.len()` on the closing summary.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::dispatch::{Engine, ValidationError};
use crate::operator::{FractionOperator, Operator};
use crate::step::Step;

/// Where the player currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "camelCase")]
pub enum PlayerState {
    Empty,
    Viewing(usize),
    Summary,
}

/// The closing screen after the last step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Taken from the last step's result; `None` for an empty derivation
    pub answer: Option<String>,
    pub step_count: usize,
}

/// The problem behind the current derivation, as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Problem {
    Whole {
        left: String,
        right: String,
        operator: Operator,
    },
    Fraction {
        fields: [String; 4],
        operator: FractionOperator,
    },
}

#[wasm_bindgen]
pub struct StepPlayer {
    engine: Engine,
    problem: Option<Problem>,
    steps: Vec<Step>,
    cursor: Option<usize>,
}

impl Default for StepPlayer {
    fn default() -> Self {
        StepPlayer::with_config(EngineConfig::default())
    }
}

impl StepPlayer {
    pub fn with_config(config: EngineConfig) -> Self {
        StepPlayer {
            engine: Engine::new(config),
            problem: None,
            steps: Vec::new(),
            cursor: None,
        }
    }

    /// Derive a whole-number problem and show its first step
    pub fn calculate(&mut self, left: &str, right: &str, operator: Operator) -> PlayerState {
        let outcome = self.engine.calculate(left, right, operator);
        self.load(
            Problem::Whole {
                left: left.to_string(),
                right: right.to_string(),
                operator,
            },
            outcome,
        )
    }

    /// Derive a fraction problem and show its first step
    pub fn calculate_fraction(&mut self, fields: [&str; 4], operator: FractionOperator) -> PlayerState {
        let outcome = self.engine.calculate_fraction(fields, operator);
        self.load(
            Problem::Fraction {
                fields: fields.map(str::to_string),
                operator,
            },
            outcome,
        )
    }

    /// Rejected input keeps no problem, only its error step
    fn load(&mut self, problem: Problem, outcome: Result<Vec<Step>, ValidationError>) -> PlayerState {
        match outcome {
            Ok(steps) => {
                self.steps = steps;
                self.problem = Some(problem);
                self.cursor = Some(0);
                self.state()
            }
            Err(error) => self.load_error(error),
        }
    }

    /// Show an input error without running a generator
    fn load_error(&mut self, error: ValidationError) -> PlayerState {
        self.steps = vec![Step::error(error.localized(self.engine.config().locale))];
        self.problem = None;
        self.cursor = Some(0);
        self.state()
    }

    pub fn state(&self) -> PlayerState {
        match self.cursor {
            None => PlayerState::Empty,
            Some(i) if i < self.steps.len() => PlayerState::Viewing(i),
            Some(_) => PlayerState::Summary,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> PlayerState {
        if let PlayerState::Viewing(i) = self.state() {
            self.cursor = Some(i + 1);
        }
        tracing::trace!(state = ?self.state(), "next");
        self.state()
    }

    pub fn previous(&mut self) -> PlayerState {
        match self.state() {
            PlayerState::Viewing(i) if i > 0 => self.cursor = Some(i - 1),
            PlayerState::Summary if !self.steps.is_empty() => {
                self.cursor = Some(self.steps.len() - 1)
            }
            _ => {}
        }
        tracing::trace!(state = ?self.state(), "previous");
        self.state()
    }

    /// Skip straight to the summary
    pub fn jump_to_end(&mut self) -> PlayerState {
        if self.cursor.is_some() {
            self.cursor = Some(self.steps.len());
        }
        tracing::trace!(state = ?self.state(), "jump to end");
        self.state()
    }

    /// Start the same derivation over from its first step
    pub fn replay(&mut self) -> PlayerState {
        if self.state() == PlayerState::Summary && !self.steps.is_empty() {
            self.cursor = Some(0);
        }
        tracing::trace!(state = ?self.state(), "replay");
        self.state()
    }

    pub fn reset(&mut self) -> PlayerState {
        self.problem = None;
        self.steps.clear();
        self.cursor = None;
        self.state()
    }

    pub fn current_step(&self) -> Option<&Step> {
        match self.state() {
            PlayerState::Viewing(i) => self.steps.get(i),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<Summary> {
        if self.state() != PlayerState::Summary {
            return None;
        }
        Some(Summary {
            answer: self.steps.last().map(|s| s.result().to_string()),
            step_count: self.steps.len(),
        })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }
}

/// Plain JS objects rather than `Map`s for flattened structs
fn to_js<T: Serialize>(value: &T) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).unwrap_or(JsValue::NULL)
}

// WASM bindings for JavaScript interop

#[wasm_bindgen]
impl StepPlayer {
    /// Create a player with the default (Norwegian) configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> StepPlayer {
        StepPlayer::default()
    }

    /// Create a player from a config object such as `{ locale: "en" }`
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config_js(config: JsValue) -> Result<StepPlayer, JsValue> {
        if config.is_undefined() || config.is_null() {
            return Ok(StepPlayer::default());
        }
        let config: EngineConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        Ok(StepPlayer::with_config(config))
    }

    #[wasm_bindgen(js_name = calculate)]
    pub fn calculate_js(&mut self, left: &str, right: &str, operator: &str) -> JsValue {
        let state = match operator.parse::<Operator>() {
            Ok(op) => self.calculate(left, right, op),
            Err(e) => self.load_error(e),
        };
        to_js(&state)
    }

    #[wasm_bindgen(js_name = calculateFraction)]
    pub fn calculate_fraction_js(
        &mut self,
        num1: &str,
        den1: &str,
        num2: &str,
        den2: &str,
        operator: &str,
    ) -> JsValue {
        let state = match operator.parse::<FractionOperator>() {
            Ok(op) => self.calculate_fraction([num1, den1, num2, den2], op),
            Err(e) => self.load_error(e),
        };
        to_js(&state)
    }

    #[wasm_bindgen(js_name = next)]
    pub fn next_js(&mut self) -> JsValue {
        to_js(&self.next())
    }

    #[wasm_bindgen(js_name = previous)]
    pub fn previous_js(&mut self) -> JsValue {
        to_js(&self.previous())
    }

    #[wasm_bindgen(js_name = jumpToEnd)]
    pub fn jump_to_end_js(&mut self) -> JsValue {
        to_js(&self.jump_to_end())
    }

    #[wasm_bindgen(js_name = replay)]
    pub fn replay_js(&mut self) -> JsValue {
        to_js(&self.replay())
    }

    #[wasm_bindgen(js_name = reset)]
    pub fn reset_js(&mut self) -> JsValue {
        to_js(&self.reset())
    }

    /// -1 before any calculation, `length` on the summary
    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> i32 {
        self.cursor.map_or(-1, |c| c as i32)
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.steps.len()
    }

    #[wasm_bindgen(js_name = currentStep)]
    pub fn current_step_js(&self) -> JsValue {
        self.current_step().map_or(JsValue::NULL, to_js)
    }

    #[wasm_bindgen(js_name = summary)]
    pub fn summary_js(&self) -> JsValue {
        self.summary().map_or(JsValue::NULL, |s| to_js(&s))
    }

    #[wasm_bindgen(js_name = steps)]
    pub fn steps_js(&self) -> JsValue {
        to_js(&self.steps)
    }

    #[wasm_bindgen(js_name = problem)]
    pub fn problem_js(&self) -> JsValue {
        self.problem().map_or(JsValue::NULL, to_js)
    }
}
