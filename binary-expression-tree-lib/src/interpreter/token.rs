use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// Characters that make up an integer literal.
pub const DIGITS: &str = "0123456789";

/// Characters that denote a binary operator.
pub const OPERATORS: &str = "+-/*";

/// A discrete part of an expression.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A run of decimal digits. Kept as text so that it reproduces exactly as written.
    LiteralInteger(String),
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    LeftParentheses,
    RightParentheses,
}

impl Token {
    /// Converts a single operator or parenthesis character into its token.
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Dash),
            '*' => Some(Token::Asterisk),
            '/' => Some(Token::ForwardSlash),
            '(' => Some(Token::LeftParentheses),
            ')' => Some(Token::RightParentheses),
            _ => None,
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Plus | Token::Dash | Token::Asterisk | Token::ForwardSlash
        )
    }

    /// A 'value' is a token that represents a numerical value, i.e. a literal.
    pub fn is_value(&self) -> bool {
        matches!(self, Token::LiteralInteger(_))
    }
}

pub(crate) fn is_digit(character: char) -> bool {
    DIGITS.contains(character)
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::LiteralInteger(digits) => write!(f, "{}", digits),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::ForwardSlash => write!(f, "/"),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
        }
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
