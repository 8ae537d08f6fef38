use crate::interpreter::error::ExpressionError;
use crate::interpreter::lexer::tokenize;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::ExpressionTree;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::{debug, trace};

/// Calculates the integer value of the given expression tree.
///
/// The tree is flattened to postfix order with a postorder traversal and then folded against a
/// stack of values. An empty tree has the value `0`.
///
/// # Arguments
///
/// * `tree`: The expression to evaluate.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use binary_expression_tree::interpreter::{build_tree, evaluate};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = build_tree("(10-3)")?;
/// assert_eq!(evaluate(&tree)?, 7);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(tree: &ExpressionTree) -> Result<i32> {
    if tree.is_empty() {
        return Ok(0);
    }
    let postfix_tokens = tree.to_postfix();
    debug!("Evaluating postfix {:?}", postfix_tokens);
    fold_values(postfix_tokens)
}

/// Calculates the integer value of a space-separated postfix expression, such as `"40 5 -"`.
pub fn evaluate_postfix(postfix: &str) -> Result<i32> {
    fold_values(tokenize(postfix)?)
}

fn fold_values(postfix_tokens: Vec<Token>) -> Result<i32> {
    let mut values: Vec<i32> = Vec::new();

    for token in postfix_tokens {
        match token {
            Token::LiteralInteger(digits) => values.push(parse_literal(&digits)?),
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(ExpressionError::invalid(
                    "There should not be any parenthesis present in the input",
                )
                .into())
            }
            Token::Plus | Token::Dash | Token::Asterisk | Token::ForwardSlash => {
                let operator = BinaryOperator::from_token(&token)
                    .context("Should be unreachable. Every operator token has an operator.")?;
                let right = pop_value(&mut values, "Expected a second operand")?;
                let left = pop_value(&mut values, "Expected a first operand")?;
                let result = operator
                    .evaluate(left, right)
                    .with_context(|| format!("Failed to evaluate {} {} {}", left, operator, right))?;
                trace!("{} {} {} = {}", left, operator, right, result);
                values.push(result);
            }
        }
    }

    let value = pop_value(&mut values, "No value found")?;
    if !values.is_empty() {
        return Err(ExpressionError::invalid(format!(
            "{} values are missing an operator",
            values.len()
        ))
        .into());
    }
    Ok(value)
}

fn parse_literal(digits: &str) -> Result<i32> {
    // A digit run only fails to parse when it does not fit.
    digits
        .parse::<i32>()
        .map_err(|_| ExpressionError::IntegerOverflow)
        .with_context(|| format!("Literal {} is too large", digits))
}

fn pop_value(values: &mut Vec<i32>, message: &str) -> Result<i32> {
    values
        .pop()
        .ok_or_else(|| ExpressionError::invalid(message).into())
}
