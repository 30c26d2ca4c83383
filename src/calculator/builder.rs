//! Expression building from discrete keypad input.
//!
//! The builder accumulates an expression string one key at a time and
//! enforces its well-formedness rules at append time: no consecutive
//! operators, no leading operator, percent only after a digit, at most
//! one decimal point per number segment. Invalid edits are silently
//! ignored rather than reported, so every operation is total.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches strings containing only keypad characters and whitespace.
    static ref KEYPAD_CHARS: Regex = Regex::new(r"^[\d\s\.\+\-\*/%]*$").unwrap();
}

/// One of the four binary arithmetic operators on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// The character this operator contributes to the expression string.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }
}

/// A single keypad input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A digit key, `0`-`9`.
    Digit(u8),
    /// The decimal point key.
    Dot,
    /// One of the four operator keys.
    Op(Operator),
    /// The percent key.
    Percent,
    /// Remove the last character.
    Backspace,
    /// Reset the expression (the `C` key).
    Clear,
    /// Request evaluation (the `=` key). Not an edit; the builder
    /// leaves the expression unchanged.
    Equals,
}

impl Key {
    /// Map a typed character to a key. Recognizes the expression
    /// alphabet plus `=`, `c`/`C` for clear and `<` for backspace.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c as u8 - b'0')),
            '.' => Some(Self::Dot),
            '%' => Some(Self::Percent),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            '<' => Some(Self::Backspace),
            _ => Operator::from_char(c).map(Self::Op),
        }
    }
}

/// An accumulated arithmetic expression.
///
/// Characters are drawn from `{0-9 . + - * / %}`. The append rules
/// guarantee the string never contains two consecutive characters from
/// `{+ - * / %}`. All edit operations are pure: they take `&self` and
/// return the new expression, leaving the original untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expression(String);

impl Expression {
    /// The empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an expression from free-form text by replaying each
    /// character through the append rules. Whitespace and characters
    /// outside the keypad alphabet are skipped, and appends that the
    /// rules reject are dropped, so the result is always well formed.
    pub fn from_keys(input: &str) -> Self {
        let mut expr = Self::new();
        for c in input.chars() {
            if c.is_whitespace() {
                continue;
            }
            if let Some(key) = Key::from_char(c)
                && key != Key::Equals
            {
                expr = expr.append_key(key);
            }
        }
        expr
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Remove the last character. The empty expression stays empty.
    pub fn backspace(&self) -> Self {
        let mut s = self.0.clone();
        s.pop();
        Self(s)
    }

    /// Append a digit. Always succeeds for `0`-`9`; anything else is
    /// ignored so the operation stays total.
    pub fn append_digit(&self, digit: u8) -> Self {
        if digit > 9 {
            return self.clone();
        }
        self.push(char::from(b'0' + digit))
    }

    /// Append a decimal point, unless the trailing number segment
    /// already contains one (`1.2` + `.` is a no-op, `1.2+` + `.` is
    /// not, since `+` starts a new segment).
    pub fn append_dot(&self) -> Self {
        if self.trailing_segment_has_dot() {
            return self.clone();
        }
        self.push('.')
    }

    /// Append a binary operator. Rejected when the expression is empty
    /// or already ends in an operator or percent, which rules out both
    /// leading operators and runs like `5+*`.
    pub fn append_operator(&self, op: Operator) -> Self {
        if self.is_empty() || self.ends_with_symbol() {
            return self.clone();
        }
        self.push(op.symbol())
    }

    /// Append a percent sign. Only allowed directly after a digit, so
    /// `%%` and operator-then-percent can never occur.
    pub fn append_percent(&self) -> Self {
        match self.0.chars().last() {
            Some(c) if c.is_ascii_digit() => self.push('%'),
            _ => self.clone(),
        }
    }

    /// Apply a single key to this expression. `Equals` is not an edit
    /// and leaves the expression unchanged.
    pub fn append_key(&self, key: Key) -> Self {
        match key {
            Key::Digit(d) => self.append_digit(d),
            Key::Dot => self.append_dot(),
            Key::Op(op) => self.append_operator(op),
            Key::Percent => self.append_percent(),
            Key::Backspace => self.backspace(),
            Key::Clear => Self::new(),
            Key::Equals => self.clone(),
        }
    }

    fn push(&self, c: char) -> Self {
        let mut s = self.0.clone();
        s.push(c);
        Self(s)
    }

    /// True if the last character is an operator or percent.
    fn ends_with_symbol(&self) -> bool {
        matches!(self.0.chars().last(), Some('+' | '-' | '*' | '/' | '%'))
    }

    /// True if the number segment after the last operator or percent
    /// already contains a decimal point.
    fn trailing_segment_has_dot(&self) -> bool {
        self.0
            .chars()
            .rev()
            .take_while(|c| !matches!(c, '+' | '-' | '*' | '/' | '%'))
            .any(|c| c == '.')
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check that input contains only keypad characters (and whitespace).
/// Used by front ends as a fast pre-check before replaying raw text
/// through [`Expression::from_keys`].
pub fn is_keypad_input(input: &str) -> bool {
    KEYPAD_CHARS.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expr(s: &str) -> Expression {
        Expression::from_keys(s)
    }

    #[test]
    fn test_backspace_on_empty_is_empty() {
        assert_eq!(Expression::new().backspace(), Expression::new());
    }

    #[test]
    fn test_backspace_removes_last_char() {
        assert_eq!(expr("12+3").backspace().as_str(), "12+");
    }

    #[test]
    fn test_leading_operator_rejected() {
        assert!(Expression::new().append_operator(Operator::Add).is_empty());
    }

    #[test]
    fn test_consecutive_operators_rejected() {
        let e = expr("5+");
        assert_eq!(e.append_operator(Operator::Sub).as_str(), "5+");
        assert_eq!(e.append_operator(Operator::Mul).as_str(), "5+");
    }

    #[test]
    fn test_operator_after_percent_rejected() {
        assert_eq!(expr("5%").append_operator(Operator::Div).as_str(), "5%");
    }

    #[test]
    fn test_percent_after_digit() {
        assert_eq!(expr("5").append_percent().as_str(), "5%");
    }

    #[test]
    fn test_percent_rejected_after_operator_or_percent() {
        assert_eq!(expr("5+").append_percent().as_str(), "5+");
        assert_eq!(expr("5%").append_percent().as_str(), "5%");
        assert!(Expression::new().append_percent().is_empty());
    }

    #[test]
    fn test_digits_always_append() {
        assert_eq!(expr("5%").append_digit(2).as_str(), "5%2");
        assert_eq!(Expression::new().append_digit(0).as_str(), "0");
    }

    #[test]
    fn test_second_dot_in_segment_rejected() {
        assert_eq!(expr("1.2").append_dot().as_str(), "1.2");
        // An operator starts a new number segment.
        assert_eq!(expr("1.2+").append_dot().as_str(), "1.2+.");
    }

    #[test]
    fn test_append_then_backspace_round_trips() {
        for start in ["", "5", "1.2+3", "50%"] {
            let e = expr(start);
            assert_eq!(e.append_digit(7).backspace(), e);
        }
    }

    #[test]
    fn test_from_keys_replays_append_rules() {
        assert_eq!(expr("2 + 3 * 4").as_str(), "2+3*4");
        // Invalid sequences collapse to their valid prefix behavior.
        assert_eq!(expr("+5").as_str(), "5");
        assert_eq!(expr("5+*2").as_str(), "5+2");
        assert_eq!(expr("1.2.3").as_str(), "1.23");
        assert_eq!(expr("hello").as_str(), "");
    }

    #[test]
    fn test_clear_key_resets() {
        assert!(expr("5+2").append_key(Key::Clear).is_empty());
    }

    #[test]
    fn test_is_keypad_input() {
        assert!(is_keypad_input("2 + 3 * 4"));
        assert!(is_keypad_input("50%"));
        assert!(is_keypad_input(""));
        assert!(!is_keypad_input("2^8"));
        assert!(!is_keypad_input("sin(0)"));
    }
}
