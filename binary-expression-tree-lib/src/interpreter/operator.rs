use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::Token;
use anyhow::Result;
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::Plus,
            BinaryOperator::Subtract => Token::Dash,
            BinaryOperator::Multiply => Token::Asterisk,
            BinaryOperator::Divide => Token::ForwardSlash,
        }
    }

    pub fn from_token(token: &Token) -> Option<BinaryOperator> {
        match token {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Dash => Some(BinaryOperator::Subtract),
            Token::Asterisk => Some(BinaryOperator::Multiply),
            Token::ForwardSlash => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    /// Applies the operator as `left OP right`.
    ///
    /// Division truncates towards zero. Fails on a zero divisor and on overflow.
    pub fn evaluate(&self, left: i32, right: i32) -> Result<i32> {
        let result = match self {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Subtract => left.checked_sub(right),
            BinaryOperator::Multiply => left.checked_mul(right),
            BinaryOperator::Divide => {
                if right == 0 {
                    return Err(ExpressionError::DivisionByZero.into());
                }
                left.checked_div(right)
            }
        };
        result.ok_or_else(|| ExpressionError::IntegerOverflow.into())
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
