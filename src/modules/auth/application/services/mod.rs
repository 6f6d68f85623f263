pub mod token_digest;
pub mod user_profile;

pub use token_digest::{digest_token, matches_digest};
pub use user_profile::FetchUserProfileService;
