//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or ClientConfig built in code
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → CardHashClient::from_config
//! ```
//!
//! # Design Decisions
//! - Environment is an enum carrying its own base address, resolved once
//!   when the client is built
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ClientConfig, Environment, TimeoutConfig, UnknownEnvironment};
pub use validation::{validate_config, ValidationError};
