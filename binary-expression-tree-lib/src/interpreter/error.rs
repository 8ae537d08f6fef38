use thiserror::Error;

/// The faults an expression can raise while being parsed or evaluated.
///
/// Operations in this crate return [`anyhow::Result`], with one of these as the root cause.
/// Callers that need to tell faults apart can recover it with
/// [`anyhow::Error::downcast_ref`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow")]
    IntegerOverflow,
}

impl ExpressionError {
    pub(crate) fn invalid(message: impl Into<String>) -> ExpressionError {
        ExpressionError::InvalidExpression(message.into())
    }
}

/// Returns the [`ExpressionError`] at the root of the given error, if there is one.
pub fn expression_error(error: &anyhow::Error) -> Option<&ExpressionError> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ExpressionError>())
}
