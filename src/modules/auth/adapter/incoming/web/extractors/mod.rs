pub mod auth;

pub use auth::{access_token_from_cookie, AuthenticatedUser};
