use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(TokenType),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
    Activation,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::Access => write!(f, "access"),
            TokenType::Refresh => write!(f, "refresh"),
            TokenType::Activation => write!(f, "activation"),
        }
    }
}

/// Structure for JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
    /// Unique per token so two tokens minted in the same second differ.
    pub jti: Uuid,
    pub token_type: TokenType,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError>;
    fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, TokenError>;
    fn generate_activation_token(&self, user_id: Uuid) -> Result<String, TokenError>;

    /// Checks signature, issuer and time claims only.
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    /// Verifies the token and that it is of `expected` type; returns the subject.
    fn verify_token_of_type(&self, token: &str, expected: TokenType) -> Result<Uuid, TokenError> {
        let claims = self.verify_token(token)?;
        if claims.token_type != expected {
            return Err(TokenError::InvalidTokenType(expected));
        }
        Ok(claims.sub)
    }

    /// Lifetime of access tokens in seconds; the session cookie mirrors it.
    fn access_token_ttl(&self) -> i64;
}
