use std::sync::Arc;

use axum::{routing::post, Router};

use shared_config::AppConfig;
use shared_models::routes::{AUTH_LOGIN, DOCTOR_ONBOARDING};

use crate::handlers;
use crate::services::AuthService;

pub fn auth_routes(config: Arc<AppConfig>) -> Router {
    let auth = Arc::new(AuthService::new(config));

    Router::new()
        .route(AUTH_LOGIN, post(handlers::login))
        .route(
            &format!("{DOCTOR_ONBOARDING}/verify-invite"),
            post(handlers::verify_invite),
        )
        .route(DOCTOR_ONBOARDING, post(handlers::register_doctor))
        .with_state(auth)
}
