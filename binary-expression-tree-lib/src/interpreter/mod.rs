pub mod error;
pub mod evaluator;
pub mod lexer;
mod operator;
pub mod parser;
pub mod reconstructor;
pub mod syntax;
pub mod token;

pub use crate::interpreter::evaluator::{evaluate, evaluate_postfix};
pub use crate::interpreter::operator::BinaryOperator;
pub use crate::interpreter::reconstructor::infix_from_tree;

use crate::interpreter::syntax::expression_tree;
use crate::interpreter::syntax::expression_tree::{ExpressionTree, Validation};
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

/// Converts a fully parenthesized infix expression into postfix text.
///
/// Every integer and operator in the output is followed by a single space.
///
/// # Arguments
///
/// * `infix`: A fully parenthesized expression of integers and the operators `+ - * /`.
///
/// returns: The expression in postfix notation.
///
/// # Examples
///
/// ```
/// use binary_expression_tree::interpreter::postfix_from_infix;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix = postfix_from_infix("(12+345)")?;
/// assert_eq!(postfix, "12 345 + ");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn postfix_from_infix(infix: &str) -> Result<String> {
    let infix_tokens = lexer::tokenize(infix)?;
    let postfix_tokens = parser::to_postfix(infix_tokens)?;
    tokens_to_string(&postfix_tokens)
}

/// Builds an expression tree from a fully parenthesized infix expression.
///
/// # Examples
///
/// ```
/// use binary_expression_tree::interpreter::build_tree;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = build_tree("((40-5)*(9/(2+1)))")?;
/// assert_eq!(tree.size(), 9);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn build_tree(infix: &str) -> Result<ExpressionTree> {
    build_tree_with(infix, Validation::default())
}

/// Builds an expression tree from a fully parenthesized infix expression, checking its
/// postfix form as strictly as `validation` says.
pub fn build_tree_with(infix: &str, validation: Validation) -> Result<ExpressionTree> {
    let infix_tokens = lexer::tokenize(infix)?;
    let tree = parser::parse(infix_tokens, validation)
        .with_context(|| format!("Failed to build a tree from '{}'", infix))?;
    debug!("Built tree of {} nodes from '{}'", tree.size(), infix);
    Ok(tree)
}

/// Builds an expression tree from postfix text, such as `"40 5 - 9 2 1 + / * "`.
pub fn build_tree_from_postfix(postfix: &str) -> Result<ExpressionTree> {
    build_tree_from_postfix_with(postfix, Validation::default())
}

/// Builds an expression tree from postfix text, checking it as strictly as `validation` says.
pub fn build_tree_from_postfix_with(postfix: &str, validation: Validation) -> Result<ExpressionTree> {
    let postfix_tokens = lexer::tokenize(postfix)?;
    expression_tree::new_tree(postfix_tokens, validation)
        .with_context(|| format!("Failed to build a tree from postfix '{}'", postfix))
}

/// Writes the given tokens out, each followed by a single space.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use binary_expression_tree::interpreter::tokens_to_string;
/// use binary_expression_tree::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::LiteralInteger("40".to_string()),
///     Token::LiteralInteger("5".to_string()),
///     Token::Dash,
/// ];
/// assert_eq!(tokens_to_string(&tokens)?, "40 5 - ");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for token in tokens {
        builder.append(token.to_string());
        builder.append(' ');
    }

    builder.string().context("Failed to build token string")
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::error::{expression_error, ExpressionError};
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    const EXPRESSIONS: [&str; 6] = [
        "((40-5)*(9/(2+1)))",
        "(12+345)",
        "(((1+2)*(3-4))/5)",
        "(100/(7-(2*3)))",
        "( 8 * ( 9 - 10 ) )",
        "3",
    ];

    #[test]
    fn end_to_end_pipeline_matches_demonstration() {
        let infix = "((40-5)*(9/(2+1)))";

        let postfix = postfix_from_infix(infix).unwrap();
        let tree = build_tree(infix).unwrap();

        assert_eq!(postfix, "40 5 - 9 2 1 + / * ");
        assert_eq!(infix_from_tree(&tree).unwrap(), infix);
        assert_eq!(evaluate(&tree).unwrap(), 105);
    }

    #[test]
    fn multi_digit_integers_are_preserved() {
        assert_eq!(postfix_from_infix("(12+345)").unwrap(), "12 345 + ");
    }

    #[parameterized(
    infix = { "(1+2", "(1+2))", "((1+2)", "(1%2)", "(a+b)" }
    )]
    fn malformed_infix_returns_invalid_expression(infix: &str) {
        let error = postfix_from_infix(infix).unwrap_err();

        assert!(matches!(
            expression_error(&error),
            Some(ExpressionError::InvalidExpression(_))
        ));
    }

    #[test]
    fn empty_infix_converts_to_empty_postfix() {
        assert_eq!(postfix_from_infix("").unwrap(), "");
    }

    #[test]
    fn empty_infix_cannot_build_a_tree() {
        build_tree("").expect_err("Should return Err");
    }

    #[test]
    fn regenerated_infix_is_stable() {
        for expression in EXPRESSIONS {
            let once = infix_from_tree(&build_tree(expression).unwrap()).unwrap();
            let twice = infix_from_tree(&build_tree(&once).unwrap()).unwrap();

            assert_eq!(twice, once);
        }
    }

    #[test]
    fn tree_value_agrees_with_postfix_value() {
        for expression in EXPRESSIONS {
            let tree_value = evaluate(&build_tree(expression).unwrap()).unwrap();
            let postfix_value = evaluate_postfix(&postfix_from_infix(expression).unwrap()).unwrap();

            assert_eq!(tree_value, postfix_value, "for {}", expression);
        }
    }

    #[test]
    fn tree_from_postfix_equals_tree_from_infix() {
        let from_infix = build_tree("((40-5)*(9/(2+1)))").unwrap();
        let from_postfix = build_tree_from_postfix("40 5 - 9 2 1 + / * ").unwrap();

        assert_eq!(from_postfix, from_infix);
    }

    #[test]
    fn non_commutative_operators_keep_operand_order() {
        assert_eq!(evaluate(&build_tree("(10-3)").unwrap()).unwrap(), 7);
        assert_eq!(evaluate(&build_tree("(10/3)").unwrap()).unwrap(), 3);
    }

    #[test]
    fn division_by_zero_is_reported() {
        let error = evaluate(&build_tree("(5/0)").unwrap()).unwrap_err();

        assert_eq!(
            expression_error(&error),
            Some(&ExpressionError::DivisionByZero)
        );
    }

    #[test]
    fn leftover_postfix_operands_depend_on_validation() {
        let postfix = "1 2 3 +";

        build_tree_from_postfix(postfix).expect_err("Should return Err");
        let tree = build_tree_from_postfix_with(postfix, Validation::Lenient).unwrap();

        assert_eq!(infix_from_tree(&tree).unwrap(), "(2+3)");
    }

    #[test]
    fn postfix_with_unrecognized_character_returns_err() {
        let error = build_tree_from_postfix("1 2 ^").unwrap_err();

        assert!(matches!(
            expression_error(&error),
            Some(ExpressionError::InvalidExpression(_))
        ));
    }
}
