//! Arithmetic expression parser and evaluator
//!
//! Grammar (after sanitizing to `[-+*/%0-9.]`):
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/' | '%') unary)*
//! unary  := ('+' | '-')* number
//! number := digits ['.' digits] | '.' digits | digits '.'
//! ```
//!
//! `*`, `/` and `%` bind tighter than `+` and `-`; operators of equal
//! precedence associate to the left. `%` is the truncated remainder.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

/// Why an expression could not be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("expression is empty")]
    Empty,
    #[error("unexpected character `{found}` at position {position}")]
    UnexpectedChar { found: char, position: usize },
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("expected a number, found {0}")]
    UnexpectedToken(String),
    #[error("expression ended unexpectedly")]
    UnexpectedEnd,
    #[error("result is not a finite number")]
    NonFinite,
}

/// Binary operators understood by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl Operator {
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Remainder => '%',
        }
    }

    const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Remainder),
            _ => None,
        }
    }

    const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Remainder => lhs % rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Op(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Op(op) => write!(f, "operator `{op}`"),
        }
    }
}

/// Keep only the characters the grammar understands.
pub fn sanitize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '%'))
        .collect()
}

/// Evaluate an expression that has already been sanitized.
///
/// Fails on malformed input and on non-finite results (division by zero,
/// remainder by zero, overflow).
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser {
        tokens: &tokens,
        position: 0,
    };
    let value = parser.expression()?;
    if let Some(token) = parser.peek() {
        return Err(EvalError::UnexpectedToken(token.to_string()));
    }

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite)
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(position, c)) = chars.peek() {
        if c.is_ascii_digit() || c == '.' {
            tokens.push(Token::Number(read_number(&mut chars)?));
        } else if let Some(op) = Operator::from_symbol(c) {
            tokens.push(Token::Op(op));
            chars.next();
        } else if c.is_whitespace() {
            chars.next();
        } else {
            return Err(EvalError::UnexpectedChar { found: c, position });
        }
    }

    Ok(tokens)
}

fn read_number(chars: &mut Peekable<CharIndices<'_>>) -> Result<f64, EvalError> {
    let mut literal = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if c.is_ascii_digit() || c == '.' {
            literal.push(c);
            chars.next();
        } else {
            break;
        }
    }

    let valid = literal.chars().filter(|&c| c == '.').count() <= 1
        && literal.chars().any(|c| c.is_ascii_digit());
    if !valid {
        return Err(EvalError::InvalidNumber(literal));
    }
    literal
        .parse()
        .map_err(|_| EvalError::InvalidNumber(literal))
}

struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn next(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(&Token::Op(op)) = self.peek() {
            if !op.is_additive() {
                break;
            }
            self.position += 1;
            let rhs = self.term()?;
            value = op.apply(value, rhs);
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        while let Some(&Token::Op(op)) = self.peek() {
            if op.is_additive() {
                break;
            }
            self.position += 1;
            let rhs = self.unary()?;
            value = op.apply(value, rhs);
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        // Signs are folded iteratively so long runs cannot exhaust the stack
        let mut negative = false;
        loop {
            match self.next() {
                Some(Token::Op(Operator::Add)) => {}
                Some(Token::Op(Operator::Subtract)) => negative = !negative,
                Some(&Token::Number(value)) => return Ok(if negative { -value } else { value }),
                Some(token) => return Err(EvalError::UnexpectedToken(token.to_string())),
                None => return Err(EvalError::UnexpectedEnd),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(input: &str) -> Result<f64, EvalError> {
        evaluate(&sanitize(input))
    }

    #[test]
    fn test_simple_addition() {
        assert_eq!(eval("2 + 3"), Ok(5.0));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2 + 3 * 4"), Ok(14.0));
        assert_eq!(eval("10 - 6 / 3"), Ok(8.0));
        assert_eq!(eval("2 + 7 % 4"), Ok(5.0));
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(eval("10 - 4 - 3"), Ok(3.0));
        assert_eq!(eval("100 / 10 / 5"), Ok(2.0));
        assert_eq!(eval("20 % 7 * 2"), Ok(12.0));
    }

    #[test]
    fn test_unary_signs() {
        assert_eq!(eval("-5 * 2"), Ok(-10.0));
        assert_eq!(eval("2 - -3"), Ok(5.0));
        assert_eq!(eval("--4"), Ok(4.0));
        assert_eq!(eval("+4"), Ok(4.0));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(eval("0.5 + .25"), Ok(0.75));
        assert_eq!(eval("5. * 2"), Ok(10.0));
    }

    #[test]
    fn test_remainder_is_truncated() {
        assert_eq!(eval("-7 % 3"), Ok(-1.0));
    }

    #[test]
    fn test_division_by_zero_is_error() {
        assert_eq!(eval("5 / 0"), Err(EvalError::NonFinite));
        assert_eq!(eval("5 % 0"), Err(EvalError::NonFinite));
    }

    #[test]
    fn test_malformed_expressions() {
        assert_eq!(eval(""), Err(EvalError::Empty));
        assert_eq!(eval("5 +"), Err(EvalError::UnexpectedEnd));
        assert!(matches!(eval("* 5"), Err(EvalError::UnexpectedToken(_))));
        assert!(matches!(eval("1.2.3"), Err(EvalError::InvalidNumber(_))));
        assert!(matches!(eval("."), Err(EvalError::InvalidNumber(_))));
    }

    #[test]
    fn test_sanitize_strips_foreign_characters() {
        assert_eq!(sanitize("2 + 3"), "2+3");
        assert_eq!(sanitize("alert(1)"), "1");
        assert_eq!(sanitize("1e3"), "13");
    }

    #[test]
    fn test_unsanitized_input_is_rejected() {
        assert_eq!(
            evaluate("2 ^ 3"),
            Err(EvalError::UnexpectedChar {
                found: '^',
                position: 2
            })
        );
    }

    #[test]
    fn test_long_sign_runs_do_not_overflow() {
        let input = format!("{}1", "-".repeat(100_000));
        assert_eq!(evaluate(&input), Ok(1.0));
    }
}
