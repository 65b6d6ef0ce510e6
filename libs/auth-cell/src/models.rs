use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use shared_models::auth::UserRole;
use shared_models::error::AppError;

#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteVerificationRequest {
    pub invite_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteVerification {
    pub invite_code: String,
    pub verified: bool,
}

/// Field names follow the onboarding form, so errors can be keyed the same way.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorOnboardingRequest {
    pub invite_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub medical_license: String,
    pub specialty: String,
    pub password: String,
    pub confirm_password: String,
}

/// Where the client goes after a successful form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthRedirect {
    pub role: UserRole,
    pub redirect_to: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthFormError {
    #[error("Validation failed")]
    Invalid(BTreeMap<String, String>),

    #[error("Please verify your invite code first")]
    InviteNotVerified,
}

impl AuthFormError {
    pub fn fields(&self) -> BTreeMap<String, String> {
        match self {
            AuthFormError::Invalid(fields) => fields.clone(),
            AuthFormError::InviteNotVerified => {
                BTreeMap::from([("inviteCode".to_string(), self.to_string())])
            }
        }
    }
}

impl From<AuthFormError> for AppError {
    fn from(err: AuthFormError) -> Self {
        AppError::ValidationError(err.fields())
    }
}
