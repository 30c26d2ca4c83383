//! Calculator core: expression building, evaluation and display
//! formatting.
//!
//! This module provides functionality to:
//! - Accumulate an expression from discrete keypad input
//! - Evaluate expressions with a tokenizer and recursive-descent parser
//! - Format expressions and results for display
//! - Copy results to the clipboard

mod builder;
mod clipboard;
mod display;
mod error;
mod evaluation;
mod lexer;
mod parser;

pub use builder::{Expression, Key, Operator, is_keypad_input};
pub use clipboard::copy_to_clipboard;
pub use display::{format_expression, group_digits};
pub use evaluation::{CalcResult, ERROR_INDICATOR, evaluate};
