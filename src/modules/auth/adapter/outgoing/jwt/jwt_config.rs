use std::env;

const MIN_SECRET_LEN: usize = 32;
const MAX_ACCESS_EXPIRY: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,     // seconds
    pub refresh_token_expiry: i64,    // seconds
    pub activation_token_expiry: i64, // seconds
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least {MIN_SECRET_LEN} characters long for HS256")]
    SecretTooShort,

    #[error("invalid value for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("JWT_ACCESS_EXPIRY must be between 1 and {MAX_ACCESS_EXPIRY} seconds")]
    AccessExpiryOutOfRange,

    #[error("JWT_REFRESH_EXPIRY must be greater than JWT_ACCESS_EXPIRY")]
    RefreshNotLongerThanAccess,

    #[error("JWT_VERIFICATION_EXPIRY must be positive")]
    ActivationExpiryNotPositive,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;

        let config = Self {
            secret_key,
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "todo-service".to_string()),
            access_token_expiry: parse_expiry("JWT_ACCESS_EXPIRY", 1800)?,
            refresh_token_expiry: parse_expiry("JWT_REFRESH_EXPIRY", 604_800)?,
            activation_token_expiry: parse_expiry("JWT_VERIFICATION_EXPIRY", 86_400)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), JwtConfigError> {
        if self.secret_key.len() < MIN_SECRET_LEN {
            return Err(JwtConfigError::SecretTooShort);
        }
        if self.access_token_expiry <= 0 || self.access_token_expiry > MAX_ACCESS_EXPIRY {
            return Err(JwtConfigError::AccessExpiryOutOfRange);
        }
        if self.refresh_token_expiry <= self.access_token_expiry {
            return Err(JwtConfigError::RefreshNotLongerThanAccess);
        }
        if self.activation_token_expiry <= 0 {
            return Err(JwtConfigError::ActivationExpiryNotPositive);
        }
        Ok(())
    }
}

fn parse_expiry(name: &'static str, default: i64) -> Result<i64, JwtConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<i64>()
            .map_err(|_| JwtConfigError::InvalidNumber { name, value }),
        Err(_) => Ok(default),
    }
}
