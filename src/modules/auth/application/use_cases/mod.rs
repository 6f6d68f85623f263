pub mod activate_user;
pub mod create_user;
pub mod fetch_profile;
pub mod login_user;
pub mod logout_user;
pub mod refresh_token;
