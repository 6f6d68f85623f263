mod activate;
mod logout;
mod refresh;
mod signin;
mod signup;
mod user_info;

pub use activate::activate_handler;
pub use logout::logout_handler;
pub use refresh::refresh_handler;
pub use signin::signin_handler;
pub use signup::signup_handler;
pub use user_info::user_info_handler;
