//! Gateway public key handling.
//!
//! The gateway hands out its RSA public key as base64 SPKI DER, wrapped
//! across several lines. The key is imported for RSA-OAEP/SHA-256 and only
//! ever used to encrypt.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPublicKey};
use sha2::Sha256;

use crate::crypto::{CryptoError, CryptoResult};

/// Algorithm parameters used for import and encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Algorithm {
    pub name: &'static str,
    pub hash: &'static str,
}

/// RSA-OAEP with SHA-256, as the gateway expects.
pub const ALGORITHM: Algorithm = Algorithm {
    name: "RSA-OAEP",
    hash: "SHA-256",
};

/// Remove every `\r\n`, `\n` and `\r` from a key string.
pub fn strip_line_breaks(key: &str) -> String {
    key.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

/// Decode the gateway's base64 key text into SPKI DER bytes.
pub fn decode_public_key(encoded: &str) -> CryptoResult<Vec<u8>> {
    let cleaned = strip_line_breaks(encoded);
    STANDARD.decode(cleaned.as_bytes()).map_err(CryptoError::KeyDecode)
}

/// Encrypt-only handle over the gateway's RSA public key.
#[derive(Clone)]
pub struct CardEncryptionKey {
    inner: RsaPublicKey,
}

impl CardEncryptionKey {
    /// Import a key from SPKI DER bytes.
    pub fn from_spki_der(der: &[u8]) -> CryptoResult<Self> {
        let inner = RsaPublicKey::from_public_key_der(der)
            .map_err(|e| CryptoError::KeyImport(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Decode base64 key text (line breaks allowed) and import it.
    pub fn from_base64(encoded: &str) -> CryptoResult<Self> {
        let der = decode_public_key(encoded)?;
        Self::from_spki_der(&der)
    }

    /// Modulus size in bytes; also the ciphertext length.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Largest plaintext OAEP/SHA-256 accepts for this key.
    pub fn max_plaintext_len(&self) -> usize {
        // k - 2*hLen - 2, hLen = 32
        self.size().saturating_sub(2 * 32 + 2)
    }

    /// Encrypt `plaintext` with RSA-OAEP/SHA-256.
    ///
    /// OAEP is randomized: two calls over the same input yield different ciphertexts.
    pub fn encrypt(&self, plaintext: &[u8]) -> CryptoResult<Vec<u8>> {
        let mut rng = rand::thread_rng();
        self.inner
            .encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext)
            .map_err(CryptoError::Encryption)
    }
}

impl std::fmt::Debug for CardEncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardEncryptionKey")
            .field("algorithm", &ALGORITHM.name)
            .field("hash", &ALGORITHM.hash)
            .field("bits", &(self.size() * 8))
            .finish()
    }
}
