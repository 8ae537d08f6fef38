use crate::interpreter::error::ExpressionError;
use crate::interpreter::syntax::expression_tree::ExpressionTree;
use crate::interpreter::token::Token;
use anyhow::Result;

/// Writes the expression of a tree as fully parenthesized infix text.
///
/// Every operator and its two operands are wrapped in one pair of parentheses. A tree holding a
/// single literal gives just that literal and an empty tree gives an empty string.
///
/// # Arguments
///
/// * `tree`: The expression to write out.
///
/// returns: The infix text of the expression, without whitespace.
///
/// # Examples
///
/// ```
/// use binary_expression_tree::interpreter::{build_tree, infix_from_tree};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = build_tree("( 1 + (2*3) )")?;
/// assert_eq!(infix_from_tree(&tree)?, "(1+(2*3))");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn infix_from_tree(tree: &ExpressionTree) -> Result<String> {
    let mut expressions: Vec<String> = Vec::new();

    for token in tree.to_postfix() {
        match token {
            Token::LiteralInteger(digits) => expressions.push(digits),
            operator => {
                let right = pop_expression(&mut expressions, "Expected a second operand")?;
                let left = pop_expression(&mut expressions, "Expected a first operand")?;
                expressions.push(format!("({}{}{})", left, operator, right));
            }
        }
    }

    Ok(expressions.pop().unwrap_or_default())
}

fn pop_expression(expressions: &mut Vec<String>, message: &str) -> Result<String> {
    expressions
        .pop()
        .ok_or_else(|| ExpressionError::invalid(message).into())
}
