//! Card payload encryption subsystem.
//!
//! # Data Flow
//! ```text
//! key text from gateway (base64, line-broken)
//!     → key.rs (strip line breaks, base64 decode, SPKI import)
//!     → CardEncryptionKey (encrypt-only, RSA-OAEP/SHA-256)
//!
//! card JSON
//!     → encoding.rs (code-unit byte mapping)
//!     → CardEncryptionKey::encrypt
//!     → encoding.rs (standard base64)
//!     → encryptedData query parameter
//! ```
//!
//! # Security Constraints
//! - Keys are never cached beyond a single tokenization
//! - Plaintext card bytes and ciphertext are never logged

pub mod encoding;
pub mod key;

use thiserror::Error;

pub use encoding::{encode_ciphertext, to_code_unit_bytes};
pub use key::{decode_public_key, strip_line_breaks, Algorithm, CardEncryptionKey, ALGORITHM};

/// Errors from key handling and encryption.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key text is not valid base64.
    #[error("public key is not valid base64: {0}")]
    KeyDecode(#[source] base64::DecodeError),

    /// Decoded bytes are not an RSA SubjectPublicKeyInfo.
    #[error("public key import failed: {0}")]
    KeyImport(String),

    /// RSA-OAEP encryption failed (e.g. payload too long for the key).
    #[error("encryption failed: {0}")]
    Encryption(#[source] rsa::Error),
}

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;
