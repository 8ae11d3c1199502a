//! Card data, wire responses and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ValidationError;
use crate::crypto::{to_code_unit_bytes, CryptoError};
use crate::observability::logging::redact_card_number;

/// Message surfaced when the gateway's public key cannot be obtained.
pub const PUBLIC_KEY_FETCH_FAILED: &str = "Erro ao gerar a chave pública na API de pagamentos";

/// Message surfaced when the gateway returns no card hash.
pub const HASH_GENERATION_FAILED: &str = "Não foi possível gerar o hash do cartão";

/// Raw card data. Values are passed through unvalidated.
///
/// Serializes as camelCase JSON in declaration order, which is the payload
/// the gateway decrypts.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub holder_name: String,
    pub card_number: String,
    pub security_code: String,
    pub expiration_month: String,
    pub expiration_year: String,
}

impl CardData {
    pub fn new(
        holder_name: impl Into<String>,
        card_number: impl Into<String>,
        security_code: impl Into<String>,
        expiration_month: impl Into<String>,
        expiration_year: impl Into<String>,
    ) -> Self {
        Self {
            holder_name: holder_name.into(),
            card_number: card_number.into(),
            security_code: security_code.into(),
            expiration_month: expiration_month.into(),
            expiration_year: expiration_year.into(),
        }
    }

    /// JSON-serialize and map to bytes one UTF-16 code unit per byte.
    pub fn to_payload(&self) -> Result<Vec<u8>, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(to_code_unit_bytes(&json))
    }
}

impl std::fmt::Debug for CardData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardData")
            .field("holder_name", &self.holder_name)
            .field("card_number", &redact_card_number(&self.card_number))
            .field("security_code", &"***")
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .finish()
    }
}

/// Envelope the gateway wraps its JSON responses in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl ApiResponse {
    /// The `data` field, unless it is missing, empty, or `success` is explicitly false.
    pub fn usable_data(&self) -> Option<&str> {
        if self.success == Some(false) {
            return None;
        }
        self.data.as_deref().filter(|d| !d.is_empty())
    }

    /// Remote error message, if one was sent and is non-empty.
    pub fn remote_error(&self) -> Option<&str> {
        self.error_message.as_deref().filter(|m| !m.is_empty())
    }

    /// Interpret this envelope as the answer to a card hash request.
    pub fn into_card_hash(self) -> CardHashResult<String> {
        match self.usable_data() {
            Some(hash) => Ok(hash.to_string()),
            None => {
                let message = self.remote_error().unwrap_or(HASH_GENERATION_FAILED);
                Err(CardHashError::HashGeneration(message.to_string()))
            }
        }
    }
}

/// Failures talking to the gateway.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS, or body read failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx status.
    #[error("gateway returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Gateway answered but declined to hand out the resource.
    #[error("{0}")]
    Rejected(String),
}

/// Errors that can occur during tokenization.
#[derive(Debug, Error)]
pub enum CardHashError {
    /// Public key could not be fetched.
    #[error("{}: {}", PUBLIC_KEY_FETCH_FAILED, .0)]
    PublicKeyFetch(#[source] TransportError),

    /// Key decode, import or encryption failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Card data could not be serialized.
    #[error("card data serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Card hash request failed at the transport level.
    #[error("card hash request failed: {0}")]
    HashFetch(#[source] TransportError),

    /// Gateway returned no usable card hash.
    #[error("{0}")]
    HashGeneration(String),

    /// Configuration rejected before building a client.
    #[error("invalid configuration: {}", join_errors(.0))]
    Config(Vec<ValidationError>),

    /// HTTP client could not be built.
    #[error("HTTP client construction failed: {0}")]
    HttpClient(#[source] reqwest::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for tokenization.
pub type CardHashResult<T> = Result<T, CardHashError>;
