//! Client-side card tokenization for the Juno / Boleto Fácil payment gateway.
//!
//! Card data is encrypted locally with the gateway's RSA public key and
//! exchanged for an opaque card hash, so raw card numbers never reach the
//! integrator's backend.
//!
//! ```text
//!   CardData ──▶ CardHashClient::tokenize
//!                  │
//!                  ├─ 1. POST get-public-encryption-key.json ──▶ gateway
//!                  ├─ 2-3. decode + import key (RSA-OAEP/SHA-256)
//!                  ├─ 4-6. JSON → bytes → encrypt → base64
//!                  ├─ 7. POST get-credit-card-hash.json ────────▶ gateway
//!                  └─ 8. validate ──▶ card hash
//! ```
//!
//! ```no_run
//! use juno_card_hash::{CardData, CardHashClient, Environment};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CardHashClient::with_environment("PUBLIC-TOKEN", Environment::Sandbox)?;
//! let hash = client
//!     .tokenize(&CardData::new("José da Silva", "5253286010447710", "172", "09", "2021"))
//!     .await?;
//! println!("{hash}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod crypto;
pub mod observability;

pub use client::{CardData, CardHashClient, CardHashError, CardHashResult};
pub use config::{ClientConfig, Environment};
