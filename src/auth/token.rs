use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Required secret key length in bytes.
pub const SECRET_KEY_LEN: usize = 32;

/// Signing algorithm for issued tokens. Verification is pinned to this
/// algorithm so tokens produced under any other scheme are rejected.
const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Errors produced by the token codec.
///
/// Callers branch on the variant; the `Display` messages are surfaced
/// verbatim in HTTP error bodies and are part of the API contract.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The secret supplied at construction has the wrong length.
    #[error("invalid key size: must be exactly 32 bytes")]
    InvalidKeySize,

    /// The token is malformed, forged, or uses an unsupported scheme.
    #[error("token is invalid")]
    InvalidToken,

    /// The token was authentic but its validity window has passed.
    #[error("token has expired")]
    ExpiredToken,

    /// Internal encoding failure while serializing a payload.
    #[error("failed to serialize token payload: {0}")]
    Serialization(#[source] jsonwebtoken::errors::Error),
}

/// The authenticated content of a bearer token.
///
/// Serialized claim names follow the JWT registered-claim conventions
/// (`jti`, `sub`, `iat`, `exp`); `expires_at` is always derived from
/// `issued_at` plus the duration given at creation, never supplied
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Unique token identifier, generated fresh per token.
    #[serde(rename = "jti")]
    pub token_id: Uuid,
    /// Username of the authenticated principal.
    #[serde(rename = "sub")]
    pub username: String,
    /// Stable identifier of the authenticated principal.
    #[serde(rename = "uid")]
    pub user_id: Uuid,
    /// Creation time (seconds since epoch).
    #[serde(rename = "iat")]
    pub issued_at: i64,
    /// Expiry time (seconds since epoch).
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl Payload {
    /// Builds a payload valid from now for `duration`.
    ///
    /// `duration` is signed: a zero or negative value produces an
    /// already-expired payload, which callers use to exercise expiry
    /// handling.
    pub fn new(username: &str, user_id: Uuid, duration: Duration) -> Self {
        let issued_at = Utc::now().timestamp();
        Self {
            token_id: Uuid::new_v4(),
            username: username.to_string(),
            user_id,
            issued_at,
            expires_at: issued_at + duration.num_seconds(),
        }
    }
}

/// Stateless issuer and verifier of bearer tokens.
///
/// Holds the keys derived from a 32-byte symmetric secret; immutable after
/// construction and safe to share across request handlers behind an `Arc`.
/// Verification requires no server-side token state, so any instance built
/// from the same secret can verify any issued token.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a codec from a symmetric secret.
    ///
    /// Fails with [`TokenError::InvalidKeySize`] unless the secret is
    /// exactly [`SECRET_KEY_LEN`] bytes. There is no rotation mechanism;
    /// the key is held for the codec's lifetime.
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.len() != SECRET_KEY_LEN {
            return Err(TokenError::InvalidKeySize);
        }

        // No leeway around `exp`: clock skew between issuing and verifying
        // instances is not compensated for.
        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Issues a signed token for `username` valid for `duration`.
    ///
    /// Returns both the opaque token string and the plaintext payload so
    /// callers can echo the validity window without a second verification.
    pub fn create_token(
        &self,
        username: &str,
        user_id: Uuid,
        duration: Duration,
    ) -> Result<(String, Payload), TokenError> {
        let payload = Payload::new(username, user_id, duration);

        let token = encode(
            &Header::new(TOKEN_ALGORITHM),
            &payload,
            &self.encoding_key,
        )
        .map_err(TokenError::Serialization)?;

        Ok((token, payload))
    }

    /// Authenticates a token string and returns its payload.
    ///
    /// A forged, malformed, or differently-signed token fails with
    /// [`TokenError::InvalidToken`]; an authentic token past its expiry
    /// fails with [`TokenError::ExpiredToken`]. Purely functional given the
    /// key, the token, and the wall clock.
    pub fn verify_token(&self, token: &str) -> Result<Payload, TokenError> {
        decode::<Payload>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::ExpiredToken,
                _ => TokenError::InvalidToken,
            })
    }
}
