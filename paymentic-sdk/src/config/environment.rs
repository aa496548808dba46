//! Paymentic API environments.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    /// Base URL every API path is appended to.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.paymentic.com/v1_2",
            Environment::Sandbox => "https://api.sandbox.paymentic.com/v1_2",
        }
    }

    pub fn from_sandbox_flag(sandbox: bool) -> Self {
        if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }
}
