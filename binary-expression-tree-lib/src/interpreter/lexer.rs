use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::{is_digit, Token};
use anyhow::Result;
use itertools::Itertools;
use log::trace;
use std::iter::Peekable;
use std::str::CharIndices;

/// Splits text into a lazy stream of tokens.
///
/// Digit runs become a single [`Token::LiteralInteger`] and whitespace is skipped.
/// The first unrecognized character is reported as an error, after which the stream ends.
pub struct Lexer<'a> {
    characters: Peekable<CharIndices<'a>>,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(expression: &'a str) -> Lexer<'a> {
        Lexer {
            characters: expression.char_indices().peekable(),
            failed: false,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        self.characters
            .peeking_take_while(|(_, character)| character.is_whitespace())
            .for_each(drop);

        let &(offset, character) = self.characters.peek()?;

        let token = if is_digit(character) {
            let digits: String = self
                .characters
                .peeking_take_while(|(_, character)| is_digit(*character))
                .map(|(_, digit)| digit)
                .collect();
            Token::LiteralInteger(digits)
        } else if let Some(token) = Token::from_symbol(character) {
            self.characters.next();
            token
        } else {
            self.failed = true;
            return Some(Err(ExpressionError::invalid(format!(
                "Unrecognized character '{}' at offset {}",
                character, offset
            ))
            .into()));
        };

        trace!("Lexed {:?} at offset {}", token, offset);
        Some(Ok(token))
    }
}

/// Splits the given expression into tokens.
///
/// # Arguments
///
/// * `expression`: Text containing integers, parentheses and the operators `+ - * /`.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// use binary_expression_tree::interpreter::lexer::tokenize;
/// use binary_expression_tree::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("(12 + 3)")?;
/// assert_eq!(tokens[1], Token::LiteralInteger("12".into()));
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    Lexer::new(expression).collect()
}
