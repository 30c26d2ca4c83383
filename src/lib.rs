//! calcpad — a keypad-driven infix arithmetic calculator core.
//!
//! The [`calculator`] module holds the pure core: an expression
//! builder fed by discrete key input, a tokenizer and recursive-descent
//! evaluator for the `+ - * / %` grammar, and display formatting.
//! [`state`] layers the one piece of mutable UI state on top, and
//! [`config`] loads user preferences for the CLI front end.

pub mod calculator;
pub mod config;
pub mod state;
