//! The operation value model.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{CalculatorError, CalculatorResult};
use super::operator::Operator;

/// An operator applied to two decimal operands.
///
/// Operations are plain values: fields are fixed at construction and two
/// operations with the same operator and numerically equal operands compare
/// (and hash) equal. Operand equality is numeric, so `1.0` and `1.00` match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operation {
    operator: Operator,
    operand1: Decimal,
    operand2: Decimal,
}

impl Operation {
    #[must_use]
    pub fn new(operator: Operator, operand1: Decimal, operand2: Decimal) -> Self {
        Self {
            operator,
            operand1,
            operand2,
        }
    }

    /// Build an operation from an operator symbol (`+`, `-`, `*` or `/`).
    ///
    /// # Errors
    /// Returns [`CalculatorError::UnsupportedOperator`] if `symbol` is not one
    /// of the four supported operators.
    pub fn create(symbol: char, operand1: Decimal, operand2: Decimal) -> CalculatorResult<Self> {
        let operator = Operator::try_from(symbol)?;
        Ok(Self::new(operator, operand1, operand2))
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn operand1(&self) -> Decimal {
        self.operand1
    }

    #[must_use]
    pub fn operand2(&self) -> Decimal {
        self.operand2
    }

    /// Apply the operator to the operands using exact decimal arithmetic.
    ///
    /// Results that need more than 28 fractional digits are rounded by the
    /// decimal type; only results outside `Decimal::MIN..=Decimal::MAX` fail.
    ///
    /// # Errors
    /// - [`CalculatorError::DivisionByZero`] when dividing by zero, whatever
    ///   the dividend.
    /// - [`CalculatorError::NumericOverflow`] when the result is out of range.
    pub fn calculate(&self) -> CalculatorResult<Decimal> {
        let (a, b) = (self.operand1, self.operand2);
        let result = match self.operator {
            Operator::Add => a.checked_add(b),
            Operator::Subtract => a.checked_sub(b),
            Operator::Multiply => a.checked_mul(b),
            Operator::Divide => {
                if b.is_zero() {
                    return Err(CalculatorError::DivisionByZero);
                }
                a.checked_div(b)
            }
        };
        result.ok_or(CalculatorError::NumericOverflow {
            operator: self.operator,
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.operand1, self.operator, self.operand2)
    }
}
