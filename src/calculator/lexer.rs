//! Tokenizer for the calculator grammar.
//!
//! Turns a sanitized expression string into a flat token stream. The
//! accepted alphabet is digits, decimal points and the four operators;
//! percent signs are rewritten away before tokenization, so any `%`
//! reaching the lexer is an error. Whitespace is skipped.

use super::error::EvalError;

/// A lexical token of the arithmetic grammar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
}

/// Tokenize an expression string.
///
/// Number literals are maximal runs of digits and decimal points and
/// are parsed with `f64::from_str`, so `5.`, `.5` are accepted while
/// `.` alone or `1.2.3` are rejected.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '+' => {
                tokens.push(Token::Plus);
                chars.next();
            }
            '-' => {
                tokens.push(Token::Minus);
                chars.next();
            }
            '*' => {
                tokens.push(Token::Star);
                chars.next();
            }
            '/' => {
                tokens.push(Token::Slash);
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&c) = chars.peek() {
                    if !c.is_ascii_digit() && c != '.' {
                        break;
                    }
                    literal.push(c);
                    chars.next();
                }
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(literal))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            c => return Err(EvalError::UnexpectedChar(c)),
        }
    }

    Ok(tokens)
}
