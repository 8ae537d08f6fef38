use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::Token;
use anyhow::Result;
use log::trace;

/// Converts fully parenthesized infix tokens into postfix order.
///
/// Every operator waits on the stack until the parenthesis that closes its group is reached,
/// so no precedence rules are needed. Parentheses never appear in the output.
pub(crate) fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(infix_tokens.len());

    for token in infix_tokens {
        match token {
            Token::LiteralInteger(_) => output.push(token),
            Token::LeftParentheses => operators.push(token),
            Token::RightParentheses => parse_closing_parenthesis_token(&mut operators, &mut output)?,
            Token::Plus | Token::Dash | Token::Asterisk | Token::ForwardSlash => {
                operators.push(token)
            }
        }
        trace!("Operator stack: {:?}", operators);
    }

    if !operators.is_empty() {
        return Err(ExpressionError::invalid("Mismatched parenthesis").into());
    }

    Ok(output)
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    loop {
        match operators.pop() {
            None => return Err(ExpressionError::invalid("Mismatched parenthesis").into()),
            // Discard the open parenthesis.
            Some(Token::LeftParentheses) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::error::expression_error;
    use pretty_assertions::assert_eq;

    fn literal(digits: &str) -> Token {
        Token::LiteralInteger(digits.into())
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // (1 + 2)
        let infix = vec![
            Token::LeftParentheses,
            literal("1"),
            Token::Plus,
            literal("2"),
            Token::RightParentheses,
        ];
        let postfix = vec![literal("1"), literal("2"), Token::Plus];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // ((40 - 5) * (9 / (2 + 1)))
        let infix = vec![
            Token::LeftParentheses,
            Token::LeftParentheses,
            literal("40"),
            Token::Dash,
            literal("5"),
            Token::RightParentheses,
            Token::Asterisk,
            Token::LeftParentheses,
            literal("9"),
            Token::ForwardSlash,
            Token::LeftParentheses,
            literal("2"),
            Token::Plus,
            literal("1"),
            Token::RightParentheses,
            Token::RightParentheses,
            Token::RightParentheses,
        ];
        let postfix = vec![
            literal("40"),
            literal("5"),
            Token::Dash,
            literal("9"),
            literal("2"),
            literal("1"),
            Token::Plus,
            Token::ForwardSlash,
            Token::Asterisk,
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn operators_without_parentheses_are_never_emitted() {
        // 1 + 2 leaves the operator on the stack
        let infix = vec![literal("1"), Token::Plus, literal("2")];

        let error = infix_to_postfix(infix).unwrap_err();

        assert!(matches!(
            expression_error(&error),
            Some(ExpressionError::InvalidExpression(_))
        ));
    }

    #[test]
    fn infix_to_postfix_unclosed_parenthesis_should_return_err() {
        // (1 + 2
        let infix = vec![
            Token::LeftParentheses,
            literal("1"),
            Token::Plus,
            literal("2"),
        ];

        infix_to_postfix(infix).expect_err("Should return Err");
    }

    #[test]
    fn infix_to_postfix_mismatched_parenthesis_should_return_err() {
        // (1 + 2))
        let infix = vec![
            Token::LeftParentheses,
            literal("1"),
            Token::Plus,
            literal("2"),
            Token::RightParentheses,
            Token::RightParentheses,
        ];

        infix_to_postfix(infix).expect_err("Should return Err");
    }

    #[test]
    fn lone_literal_passes_through() {
        let actual = infix_to_postfix(vec![literal("7")]).unwrap();

        assert_eq!(actual, vec![literal("7")]);
    }
}
