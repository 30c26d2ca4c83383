//! Mutable UI state for a calculator front end.
//!
//! The core builder and evaluator are pure functions; this is the one
//! place that owns mutable state. A front end feeds every button or
//! key press into [`PadState::handle_key`] and re-renders from the
//! accessors afterwards.

use crate::calculator::{CalcResult, Expression, Key, evaluate, format_expression};

/// The state behind a calculator display: the expression being edited
/// and the result of the last evaluation, if any.
#[derive(Clone, Debug, Default)]
pub struct PadState {
    expression: Expression,
    result: Option<CalcResult>,
}

impl PadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The expression currently being edited.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The expression formatted with operator glyphs for display.
    pub fn display_expression(&self) -> String {
        format_expression(self.expression.as_str())
    }

    /// The result of the last `=` press, if one happened since the
    /// last clear.
    pub fn result(&self) -> Option<&CalcResult> {
        self.result.as_ref()
    }

    /// Whether the last evaluation failed.
    pub fn has_error(&self) -> bool {
        matches!(self.result, Some(CalcResult::Error { .. }))
    }

    /// Apply one key press.
    ///
    /// `Clear` resets everything, `Equals` evaluates the current
    /// expression (preserving it so the user can keep editing), and
    /// every other key edits the expression through the pure builder
    /// operations. An edit dismisses a stale error, but a successful
    /// result stays visible until the next evaluation or clear.
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Clear => {
                self.expression = Expression::new();
                self.result = None;
            }
            Key::Equals => {
                self.result = Some(evaluate(self.expression.as_str()));
            }
            edit => {
                self.expression = self.expression.append_key(edit);
                if self.has_error() {
                    self.result = None;
                }
            }
        }
    }

    /// Feed a sequence of typed characters through [`Self::handle_key`].
    /// Characters outside the keypad alphabet are ignored.
    pub fn handle_input(&mut self, input: &str) {
        for c in input.chars() {
            if let Some(key) = Key::from_char(c) {
                self.handle_key(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_session() {
        let mut state = PadState::new();
        state.handle_input("2+3*4=");
        assert_eq!(state.expression().as_str(), "2+3*4");
        assert_eq!(state.result().unwrap().display(), "14");
        assert!(!state.has_error());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = PadState::new();
        state.handle_input("10/0=");
        assert!(state.has_error());
        state.handle_key(Key::Clear);
        assert!(state.expression().is_empty());
        assert!(state.result().is_none());
    }

    #[test]
    fn test_error_preserves_expression_for_editing() {
        let mut state = PadState::new();
        state.handle_input("10/0=");
        assert!(state.has_error());
        assert_eq!(state.expression().as_str(), "10/0");
    }

    #[test]
    fn test_edit_dismisses_stale_error() {
        let mut state = PadState::new();
        state.handle_input("5+=");
        assert!(state.has_error());
        state.handle_input("2");
        assert!(!state.has_error());
        assert_eq!(state.expression().as_str(), "5+2");
    }

    #[test]
    fn test_successful_result_survives_edits() {
        let mut state = PadState::new();
        state.handle_input("2+2=");
        state.handle_input("+1");
        assert_eq!(state.result().unwrap().display(), "4");
        assert_eq!(state.expression().as_str(), "2+2+1");
    }

    #[test]
    fn test_display_expression_uses_glyphs() {
        let mut state = PadState::new();
        state.handle_input("2+3*4");
        assert_eq!(state.display_expression(), "2 + 3 × 4");
    }

    #[test]
    fn test_backspace_key() {
        let mut state = PadState::new();
        state.handle_input("12<");
        assert_eq!(state.expression().as_str(), "1");
    }
}
