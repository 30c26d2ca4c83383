//! Recursive-descent evaluation of the token stream.
//!
//! Grammar (no parentheses, no unary minus):
//!
//! ```text
//! expr := term (('+' | '-') term)*
//! term := number (('*' | '/') number)*
//! ```
//!
//! `*` and `/` bind tighter than `+` and `-`; equal precedence is
//! left-associative. The value is computed directly during the
//! descent, there is no intermediate AST.

use super::error::EvalError;
use super::lexer::Token;

/// Parse and evaluate a full token stream. The stream must contain
/// exactly one expression; an empty stream or leftover tokens are
/// errors.
pub fn parse_and_eval(tokens: &[Token]) -> Result<f64, EvalError> {
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;

    if parser.pos != tokens.len() {
        return Err(EvalError::TrailingInput);
    }

    Ok(value)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;

        while let Some(token) = self.peek() {
            match token {
                Token::Plus => {
                    self.advance();
                    value += self.term()?;
                }
                Token::Minus => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => break,
            }
        }

        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.number()?;

        while let Some(token) = self.peek() {
            match token {
                Token::Star => {
                    self.advance();
                    value *= self.number()?;
                }
                Token::Slash => {
                    self.advance();
                    value /= self.number()?;
                }
                _ => break,
            }
        }

        Ok(value)
    }

    fn number(&mut self) -> Result<f64, EvalError> {
        match self.peek() {
            Some(Token::Number(value)) => {
                self.advance();
                Ok(value)
            }
            _ => Err(EvalError::ExpectedNumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::lexer::tokenize;

    fn eval(input: &str) -> Result<f64, EvalError> {
        parse_and_eval(&tokenize(input).unwrap())
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2+3*4").unwrap(), 14.0);
        assert_eq!(eval("2*3+4").unwrap(), 10.0);
        assert_eq!(eval("10-4/2").unwrap(), 8.0);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(eval("10-3-2").unwrap(), 5.0);
        assert_eq!(eval("100/10/2").unwrap(), 5.0);
    }

    #[test]
    fn test_single_number() {
        assert_eq!(eval("42").unwrap(), 42.0);
        assert_eq!(eval("0.5").unwrap(), 0.5);
    }

    #[test]
    fn test_empty_stream_rejected() {
        assert_eq!(parse_and_eval(&[]), Err(EvalError::Empty));
    }

    #[test]
    fn test_trailing_operator_rejected() {
        assert_eq!(eval("5+"), Err(EvalError::ExpectedNumber));
        assert_eq!(eval("5*"), Err(EvalError::ExpectedNumber));
    }

    #[test]
    fn test_leading_operator_rejected() {
        // No unary minus in the grammar.
        assert_eq!(eval("-5"), Err(EvalError::ExpectedNumber));
        assert_eq!(eval("+5"), Err(EvalError::ExpectedNumber));
    }

    #[test]
    fn test_adjacent_numbers_rejected() {
        let tokens = vec![Token::Number(1.0), Token::Number(2.0)];
        assert_eq!(parse_and_eval(&tokens), Err(EvalError::TrailingInput));
    }

    #[test]
    fn test_division_by_zero_is_infinite() {
        // Non-finite values are caught by the caller, not the parser.
        assert!(eval("10/0").unwrap().is_infinite());
    }
}
