pub mod app_state_builder;
pub mod fakes;
pub mod stubs;

use std::sync::Arc;

use actix_web::web;

use crate::auth::application::ports::outgoing::TokenProvider;

/// Token provider app data as registered by `start()`, backed by the test JWT secret.
pub fn test_token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(Arc::new(fakes::test_jwt_service()) as Arc<dyn TokenProvider + Send + Sync>)
}
