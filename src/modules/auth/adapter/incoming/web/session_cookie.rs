use actix_web::cookie::{time::Duration, Cookie, SameSite};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionCookieConfigError {
    #[error("COOKIE_SAME_SITE must be one of Strict, Lax or None, got '{0}'")]
    InvalidSameSite(String),

    #[error("COOKIE_SECURE must be true or false, got '{0}'")]
    InvalidSecure(String),

    #[error("SameSite=None cookies must be Secure")]
    InsecureCrossSite,
}

/// Attributes of the HTTP-only access token cookie.
#[derive(Debug, Clone)]
pub struct SessionCookieConfig {
    pub secure: bool,
    pub same_site: SameSite,
    pub max_age_secs: i64,
}

impl SessionCookieConfig {
    pub fn new(max_age_secs: i64) -> Self {
        Self {
            secure: true,
            same_site: SameSite::None,
            max_age_secs,
        }
    }

    /// Reads `COOKIE_SECURE` and `COOKIE_SAME_SITE`; the max age follows the access token lifetime.
    pub fn from_env(max_age_secs: i64) -> Result<Self, SessionCookieConfigError> {
        let secure = match std::env::var("COOKIE_SECURE") {
            Ok(raw) => parse_bool(&raw)?,
            Err(_) => true,
        };
        let same_site = match std::env::var("COOKIE_SAME_SITE") {
            Ok(raw) => parse_same_site(&raw)?,
            Err(_) => SameSite::None,
        };

        let config = Self {
            secure,
            same_site,
            max_age_secs,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SessionCookieConfigError> {
        if self.same_site == SameSite::None && !self.secure {
            return Err(SessionCookieConfigError::InsecureCrossSite);
        }
        Ok(())
    }

    pub fn access_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build(ACCESS_TOKEN_COOKIE, token)
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .max_age(Duration::seconds(self.max_age_secs))
            .finish()
    }

    /// Expired, empty cookie with the same name and path, which makes the browser drop it.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.access_cookie(String::new());
        cookie.make_removal();
        cookie
    }
}

fn parse_bool(raw: &str) -> Result<bool, SessionCookieConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(SessionCookieConfigError::InvalidSecure(raw.to_string())),
    }
}

fn parse_same_site(raw: &str) -> Result<SameSite, SessionCookieConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "strict" => Ok(SameSite::Strict),
        "lax" => Ok(SameSite::Lax),
        "none" => Ok(SameSite::None),
        _ => Err(SessionCookieConfigError::InvalidSameSite(raw.to_string())),
    }
}
