//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the card hash client.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Base address of the sandbox gateway.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.boletobancario.com/boletofacil/integration/api";

/// Base address of the production gateway.
pub const PRODUCTION_BASE_URL: &str = "https://www.boletobancario.com/boletofacil/integration/api";

/// Target gateway environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Test gateway; no real charges.
    #[default]
    Sandbox,
    /// Live gateway.
    Production,
}

impl Environment {
    /// Base address every request of this environment is issued against.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown environment name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown environment '{0}' (expected 'sandbox' or 'production')")]
pub struct UnknownEnvironment(pub String);

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            _ => Err(UnknownEnvironment(s.to_string())),
        }
    }
}

/// Root configuration for the card hash client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Public token issued to the integration by the gateway.
    pub public_token: String,

    /// Gateway environment (sandbox or production).
    pub environment: Environment,

    /// Transport timeouts.
    pub timeouts: TimeoutConfig,

    /// Overrides the environment's base address (e.g. a local gateway double).
    pub base_url: Option<String>,
}

impl ClientConfig {
    pub fn new(public_token: impl Into<String>, environment: Environment) -> Self {
        Self {
            public_token: public_token.into(),
            environment,
            ..Self::default()
        }
    }

    /// Address requests are issued against: the override if set, else the environment's.
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }
}

/// Timeouts handed to the HTTP transport.
///
/// Both are unset by default: the client itself never cancels a call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: Option<u64>,

    /// Total time for a single request/response in seconds.
    pub request_secs: Option<u64>,
}
