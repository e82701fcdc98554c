//! Configuration for employee service module

use serde::{Deserialize, Serialize};

/// Employee service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Version prefix every route is nested under
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Start with the demo employees already stored
    #[serde(default)]
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            seed_demo_data: false,
        }
    }
}

fn default_base_path() -> String {
    "/api/v1".to_string()
}
