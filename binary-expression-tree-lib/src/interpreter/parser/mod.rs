mod infix_converter;

use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::syntax::expression_tree;
use crate::interpreter::syntax::expression_tree::{ExpressionTree, Validation};
use crate::interpreter::token::Token;
use anyhow::Result;

/// Parses the given infix tokens into an equivalent expression tree.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in fully parenthesized infix format.
/// * `validation`: How strictly the intermediate postfix form is checked.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use binary_expression_tree::interpreter::parser::parse;
/// use binary_expression_tree::interpreter::syntax::expression_tree::Validation;
/// use binary_expression_tree::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::LeftParentheses,
///     Token::LiteralInteger("4".into()),
///     Token::Asterisk,
///     Token::LiteralInteger("2".into()),
///     Token::RightParentheses,
/// ];
/// let tree = parse(infix_tokens, Validation::Strict)?;
/// assert_eq!(tree.size(), 3);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>, validation: Validation) -> Result<ExpressionTree> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    let tree = expression_tree::new_tree(postfix_tokens, validation)?;
    Ok(tree)
}

/// Reorders fully parenthesized infix tokens into postfix order, dropping the parentheses.
pub fn to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    infix_to_postfix(infix_tokens)
}
