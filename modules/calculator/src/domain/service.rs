//! Domain service for calculator
//!
//! Entry point for callers that hold raw symbols and operands rather than a
//! prepared [`Operation`].

use rust_decimal::Decimal;
use tracing::{debug, instrument, trace};

use super::error::CalculatorResult;
use super::operation::Operation;

/// Largest scale a `Decimal` can carry.
const MAX_RESULT_SCALE: u32 = 28;

/// Configuration for the calculator service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Round results to this many fractional digits (banker's rounding).
    /// `None` keeps the exact result.
    pub result_scale: Option<u32>,
}

/// Domain service that evaluates operations.
///
/// Stateless apart from its configuration; safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: ServiceConfig,
}

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        let result_scale = config.result_scale.map(|s| s.min(MAX_RESULT_SCALE));
        Self {
            config: ServiceConfig { result_scale },
        }
    }

    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Build an operation from `symbol` and compute it.
    ///
    /// # Errors
    /// Any error of [`Operation::create`] or [`Operation::calculate`].
    #[instrument(level = "debug", skip(self))]
    pub fn evaluate(
        &self,
        symbol: char,
        operand1: Decimal,
        operand2: Decimal,
    ) -> CalculatorResult<Decimal> {
        let operation = Operation::create(symbol, operand1, operand2)?;
        self.compute(&operation)
    }

    /// Compute a prepared operation, applying the configured result scale.
    ///
    /// # Errors
    /// Any error of [`Operation::calculate`].
    #[instrument(level = "debug", skip_all, fields(operator = %operation.operator()))]
    pub fn compute(&self, operation: &Operation) -> CalculatorResult<Decimal> {
        debug!(
            operand1 = %operation.operand1(),
            operand2 = %operation.operand2(),
            "performing operation"
        );
        let exact = operation.calculate()?;
        let result = match self.config.result_scale {
            Some(scale) => exact.round_dp(scale),
            None => exact,
        };
        trace!(%result, "operation computed");
        Ok(result)
    }
}
