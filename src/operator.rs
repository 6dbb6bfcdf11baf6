//! Operator symbols accepted from the calculator input

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dispatch::ValidationError;

/// Operator for whole-number problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '·',
            Operator::Div => ':',
        }
    }
}

impl FromStr for Operator {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Sub),
            "*" | "·" | "×" | "x" => Ok(Operator::Mul),
            "/" | ":" | "÷" => Ok(Operator::Div),
            other => Err(ValidationError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Operator for fraction problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractionOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl FractionOperator {
    pub fn symbol(self) -> char {
        match self {
            FractionOperator::Add => '+',
            FractionOperator::Sub => '-',
            FractionOperator::Mul => '·',
            FractionOperator::Div => ':',
        }
    }
}

impl FromStr for FractionOperator {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<Operator>()? {
            Operator::Add => FractionOperator::Add,
            Operator::Sub => FractionOperator::Sub,
            Operator::Mul => FractionOperator::Mul,
            Operator::Div => FractionOperator::Div,
        })
    }
}

impl fmt::Display for FractionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
