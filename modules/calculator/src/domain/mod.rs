//! Domain layer for calculator module
//!
//! Contains the operation model and the service that evaluates it.

pub mod error;
pub mod operation;
pub mod operator;
pub mod service;

pub use service::Service;
