//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! CardHashClient::tokenize
//!     → `tokenize` span (environment, redacted public token)
//!     → debug events per protocol step
//!     → warn event on failure
//!
//! Consumers:
//!     → whatever tracing subscriber the host application installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber; without one nothing is emitted
//! - Card data, key material and ciphertext never reach an event
//! - Identifiers are logged only in redacted form

pub mod logging;
