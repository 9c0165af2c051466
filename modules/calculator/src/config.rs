use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Configuration for the calculator module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Number of fractional digits results are rounded to. Unset keeps
    /// results exact.
    #[serde(default)]
    pub result_scale: Option<u32>,
}

impl CalculatorConfig {
    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            result_scale: self.result_scale,
        }
    }
}
