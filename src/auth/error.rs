use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::auth::token::TokenError;

/// Rejection raised by the bearer-token middleware.
///
/// Header-shape problems are detected before any cryptographic work;
/// verification failures wrap the underlying [`TokenError`] so callers can
/// still distinguish an expired token from a forged one. Every variant maps
/// to `401 Unauthorized` and its message is surfaced verbatim in the
/// response body.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header on the request.
    #[error("authorization header is not provided")]
    MissingHeader,

    /// The header value does not split into a scheme and a credential.
    #[error("invalid authorization header format")]
    MalformedHeader,

    /// The header carries a scheme other than `Bearer`.
    #[error("unsupported authorization type {0}")]
    UnsupportedScheme(String),

    /// The bearer credential failed verification.
    #[error(transparent)]
    Verification(#[from] TokenError),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.to_string()
        });

        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_response_contract() {
        assert_eq!(
            AuthError::MissingHeader.to_string(),
            "authorization header is not provided"
        );
        assert_eq!(
            AuthError::MalformedHeader.to_string(),
            "invalid authorization header format"
        );
        assert_eq!(
            AuthError::UnsupportedScheme("basic".to_string()).to_string(),
            "unsupported authorization type basic"
        );
        assert_eq!(
            AuthError::from(TokenError::ExpiredToken).to_string(),
            "token has expired"
        );
    }

    #[tokio::test]
    async fn every_rejection_is_unauthorized() {
        use axum::body::to_bytes;

        let rejections = [
            AuthError::MissingHeader,
            AuthError::MalformedHeader,
            AuthError::UnsupportedScheme("basic".to_string()),
            AuthError::Verification(TokenError::InvalidToken),
        ];

        for rejection in rejections {
            let message = rejection.to_string();
            let response = rejection.into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

            let bytes = to_bytes(response.into_body(), usize::MAX)
                .await
                .expect("body should be readable");
            let body: serde_json::Value =
                serde_json::from_slice(&bytes).expect("body should be JSON");
            assert_eq!(body["error"], message);
        }
    }
}
