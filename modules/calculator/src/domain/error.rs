use super::operator::Operator;

/// Error type for calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("unsupported operator '{0}'")]
    UnsupportedOperator(char),

    #[error("unsupported operator symbol \"{0}\"")]
    UnsupportedOperatorSymbol(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("numeric overflow in {} operation", .operator.name())]
    NumericOverflow { operator: Operator },
}

impl CalculatorError {
    /// True for both the character and string forms of an unknown operator.
    #[must_use]
    pub fn is_unsupported_operator(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedOperator(_) | Self::UnsupportedOperatorSymbol(_)
        )
    }
}

pub type CalculatorResult<T> = Result<T, CalculatorError>;
