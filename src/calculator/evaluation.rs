//! Expression evaluation.
//!
//! Rewrites percentage literals into their fractional value, runs the
//! tokenizer and recursive-descent parser over the result, and renders
//! finite values as canonical decimal strings. Every failure mode
//! (empty input, malformed grammar, non-finite result) collapses into
//! the single [`CalcResult::Error`] marker.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

use super::error::EvalError;
use super::lexer::tokenize;
use super::parser::parse_and_eval;

/// The literal shown in place of a numeric result when evaluation
/// fails.
pub const ERROR_INDICATOR: &str = "Error";

lazy_static! {
    /// Matches a number literal directly followed by a percent sign.
    static ref PERCENT_LITERAL: Regex = Regex::new(r"(\d+(?:\.\d+)?)%").unwrap();
}

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// A finite numeric result.
    Value {
        /// The expression that was evaluated.
        expression: String,
        /// The numeric value.
        value: f64,
        /// Canonical decimal rendering: no forced trailing zeros,
        /// integral values without a decimal point.
        display: String,
    },
    /// Evaluation failed. The expression is preserved so the user can
    /// correct it; no failure causes are distinguished.
    Error {
        /// The expression that failed to evaluate.
        expression: String,
    },
}

impl CalcResult {
    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Value { expression, .. } => expression,
            Self::Error { expression } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value { .. })
    }

    /// Get the display string (the rendered value, or the error
    /// indicator).
    pub fn display(&self) -> &str {
        match self {
            Self::Value { display, .. } => display,
            Self::Error { .. } => ERROR_INDICATOR,
        }
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Value { display, .. } => Some(display),
            Self::Error { .. } => None,
        }
    }
}

/// Evaluate an arithmetic expression.
///
/// Pure function over the input string. Percentage literals are
/// converted to their fractional value first (`50%` becomes `0.5`),
/// then the sanitized string is parsed as infix arithmetic over
/// `+ - * /` with conventional precedence.
pub fn evaluate(input: &str) -> CalcResult {
    let expression = input.to_string();
    match try_evaluate(input) {
        Ok(value) => CalcResult::Value {
            display: format_number(value),
            value,
            expression,
        },
        Err(err) => {
            debug!("evaluation of {:?} failed: {}", expression, err);
            CalcResult::Error { expression }
        }
    }
}

fn try_evaluate(input: &str) -> Result<f64, EvalError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EvalError::Empty);
    }

    let rewritten = rewrite_percents(trimmed);
    let tokens = tokenize(&rewritten)?;
    let value = parse_and_eval(&tokens)?;

    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(value)
}

/// Replace each `<number>%` run with the decimal literal of the number
/// divided by 100, so `50%` becomes `0.5` before tokenization.
fn rewrite_percents(expr: &str) -> String {
    PERCENT_LITERAL
        .replace_all(expr, |caps: &Captures| {
            let value: f64 = caps[1].parse().unwrap_or(f64::NAN);
            format_number(value / 100.0)
        })
        .into_owned()
}

/// Render a value as its canonical decimal string. `f64`'s `Display`
/// already produces the shortest round-trippable form without forced
/// trailing zeros; negative zero is normalized to `0`.
fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
