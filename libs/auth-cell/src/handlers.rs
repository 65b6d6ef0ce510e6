use std::sync::Arc;

use axum::extract::{Json, State};
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{
    AuthRedirect, DoctorOnboardingRequest, InviteVerification, InviteVerificationRequest,
    LoginRequest,
};
use crate::services::AuthService;

pub async fn login(
    State(auth): State<Arc<AuthService>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthRedirect>, AppError> {
    debug!("Handling login form");
    Ok(Json(auth.login(&request).await?))
}

pub async fn verify_invite(
    State(auth): State<Arc<AuthService>>,
    Json(request): Json<InviteVerificationRequest>,
) -> Result<Json<InviteVerification>, AppError> {
    Ok(Json(auth.verify_invite(&request).await?))
}

pub async fn register_doctor(
    State(auth): State<Arc<AuthService>>,
    Json(request): Json<DoctorOnboardingRequest>,
) -> Result<Json<AuthRedirect>, AppError> {
    debug!("Handling doctor onboarding form");
    Ok(Json(auth.register_doctor(&request).await?))
}
