//! Card tokenization client.
//!
//! # Data Flow
//! ```text
//! CardHashClient::tokenize(card)
//!     → POST /get-public-encryption-key.json?publicToken=…
//!     → crypto::key (strip line breaks, base64 decode, SPKI import)
//!     → CardData::to_payload (JSON, code-unit bytes)
//!     → CardEncryptionKey::encrypt (RSA-OAEP/SHA-256)
//!     → crypto::encoding (standard base64)
//!     → POST /get-credit-card-hash.json?publicToken=…&encryptedData=…
//!     → ApiResponse::into_card_hash
//! ```
//!
//! # Design Decisions
//! - Steps run strictly in order; every failure is terminal for the call
//! - No retries, no key caching: each call fetches a fresh key
//! - The client holds no mutable state, so concurrent calls are independent

pub mod types;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};

use crate::config::{validate_config, ClientConfig, Environment};
use crate::crypto::{encode_ciphertext, strip_line_breaks, CardEncryptionKey};
use crate::observability::logging::redact_token;

pub use types::{
    ApiResponse, CardData, CardHashError, CardHashResult, TransportError,
    HASH_GENERATION_FAILED, PUBLIC_KEY_FETCH_FAILED,
};

/// Key retrieval endpoint, relative to the environment's base address.
pub const PUBLIC_KEY_PATH: &str = "/get-public-encryption-key.json";

/// Tokenization endpoint, relative to the environment's base address.
pub const CARD_HASH_PATH: &str = "/get-credit-card-hash.json";

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Exchanges card data for an opaque card hash.
///
/// Token, environment and base address are fixed at construction. Building
/// a client does no network I/O.
#[derive(Clone)]
pub struct CardHashClient {
    http: Client,
    public_token: String,
    environment: Environment,
    base_url: String,
}

impl CardHashClient {
    /// Create a sandbox client.
    pub fn new(public_token: impl Into<String>) -> CardHashResult<Self> {
        Self::with_environment(public_token, Environment::default())
    }

    /// Create a client for the given environment.
    pub fn with_environment(
        public_token: impl Into<String>,
        environment: Environment,
    ) -> CardHashResult<Self> {
        Self::build(ClientConfig::new(public_token, environment))
    }

    /// Create a client from a configuration, validating it first.
    pub fn from_config(config: &ClientConfig) -> CardHashResult<Self> {
        validate_config(config).map_err(CardHashError::Config)?;
        Self::build(config.clone())
    }

    fn build(config: ClientConfig) -> CardHashResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(CardHashError::HttpClient)?;

        let base_url = config
            .effective_base_url()
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http,
            public_token: config.public_token,
            environment: config.environment,
            base_url,
        })
    }

    pub fn public_token(&self) -> &str {
        &self.public_token
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Base address every request is issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Encrypt `card` with the gateway's public key and exchange it for a card hash.
    pub async fn tokenize(&self, card: &CardData) -> CardHashResult<String> {
        let token = redact_token(&self.public_token);
        tracing::debug!(
            environment = %self.environment,
            public_token = %token,
            "Tokenizing card"
        );

        let result = self.run_tokenize(card).await;
        match &result {
            Ok(_) => tracing::debug!(public_token = %token, "Card hash generated"),
            Err(e) => tracing::warn!(public_token = %token, error = %e, "Card tokenization failed"),
        }
        result
    }

    async fn run_tokenize(&self, card: &CardData) -> CardHashResult<String> {
        let key_text = self
            .fetch_public_key()
            .await
            .map_err(CardHashError::PublicKeyFetch)?;

        let key = CardEncryptionKey::from_base64(&key_text)?;
        tracing::debug!(key_bits = key.size() * 8, "Public key imported");

        let payload = card.to_payload()?;
        let ciphertext = key.encrypt(&payload)?;
        let encrypted_data = encode_ciphertext(&ciphertext);
        tracing::debug!(ciphertext_len = ciphertext.len(), "Card data encrypted");

        let response = self
            .fetch_card_hash(&encrypted_data)
            .await
            .map_err(CardHashError::HashFetch)?;

        response.into_card_hash()
    }

    /// Fetch the gateway's public key text with line breaks removed.
    pub async fn fetch_public_key(&self) -> Result<String, TransportError> {
        let resp = self
            .http
            .post(self.endpoint(PUBLIC_KEY_PATH))
            .query(&[("publicToken", self.public_token.as_str())])
            .send()
            .await?;

        let body = success_body(resp).await?;
        let key = parse_public_key_body(&body)?;
        Ok(strip_line_breaks(&key))
    }

    /// Exchange base64 ciphertext for the gateway's response envelope.
    pub async fn fetch_card_hash(&self, encrypted_data: &str) -> Result<ApiResponse, TransportError> {
        let resp = self
            .http
            .post(self.endpoint(CARD_HASH_PATH))
            .query(&[
                ("publicToken", self.public_token.as_str()),
                ("encryptedData", encrypted_data),
            ])
            .send()
            .await?;

        let body = success_body(resp).await?;
        serde_json::from_str(&body).map_err(TransportError::Decode)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl std::fmt::Debug for CardHashClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardHashClient")
            .field("public_token", &redact_token(&self.public_token))
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .finish()
    }
}

async fn success_body(resp: Response) -> Result<String, TransportError> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(TransportError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

/// Extract the key text from a key endpoint body.
///
/// Accepts the JSON envelope (`{"success":true,"data":"MIIB…"}`), a bare
/// JSON string, or the key as plain text.
fn parse_public_key_body(body: &str) -> Result<String, TransportError> {
    let trimmed = body.trim();

    if trimmed.starts_with('{') {
        let envelope: ApiResponse =
            serde_json::from_str(trimmed).map_err(TransportError::Decode)?;
        return match envelope.usable_data() {
            Some(key) => Ok(key.to_string()),
            None => Err(TransportError::Rejected(
                envelope
                    .remote_error()
                    .unwrap_or("response carried no public key")
                    .to_string(),
            )),
        };
    }

    if trimmed.starts_with('"') {
        return serde_json::from_str(trimmed).map_err(TransportError::Decode);
    }

    if trimmed.is_empty() {
        return Err(TransportError::Rejected("empty response body".to_string()));
    }
    Ok(trimmed.to_string())
}
