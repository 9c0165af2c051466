#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Calculator Module
//!
//! Binary arithmetic over exact decimals. An [`Operation`] pairs an
//! [`Operator`] with two [`Decimal`] operands and computes its result with
//! checked arithmetic, reporting unsupported symbols, division by zero and
//! overflow as [`CalculatorError`] values.
//!
//! ## Architecture
//!
//! - `domain/operator.rs` - Closed set of operators and symbol mapping
//! - `domain/operation.rs` - The operation value and its computation
//! - `domain/error.rs` - Error taxonomy
//! - `domain/service.rs` - Stateless entry point for callers
//! - `config.rs` - Module configuration
//!
//! ## Usage
//!
//! ```
//! use calculator::{Operation, Decimal};
//!
//! let op = Operation::create('+', Decimal::ONE, Decimal::TWO)?;
//! assert_eq!(op.calculate()?, Decimal::from(3));
//! # Ok::<(), calculator::CalculatorError>(())
//! ```

pub mod config;
pub mod domain;

pub use config::CalculatorConfig;
pub use domain::error::{CalculatorError, CalculatorResult};
pub use domain::operation::Operation;
pub use domain::operator::Operator;
pub use domain::service::{Service, ServiceConfig};

pub use rust_decimal::Decimal;
