use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use shared_config::AppConfig;
use shared_models::auth::UserRole;

use crate::models::{
    AuthFormError, AuthRedirect, DoctorOnboardingRequest, InviteVerification,
    InviteVerificationRequest, LoginRequest,
};
use crate::services::forms::{validate_invite_code, validate_login, validate_onboarding};

/// Simulated sign-in and doctor onboarding. Nothing is persisted except the
/// set of invite codes verified since startup.
pub struct AuthService {
    config: Arc<AppConfig>,
    verified_invites: RwLock<HashSet<String>>,
}

impl AuthService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            verified_invites: RwLock::new(HashSet::new()),
        }
    }

    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthRedirect, AuthFormError> {
        validate_login(request)?;
        info!("Login attempt for {}", request.email);

        tokio::time::sleep(self.config.auth_latency()).await;

        // No role lookup exists, so every sign-in lands on the patient dashboard.
        let role = UserRole::Patient;
        info!("Login succeeded, redirecting to {}", role.dashboard_route());
        Ok(AuthRedirect {
            role,
            redirect_to: role.dashboard_route().to_string(),
            message: "Signed in".to_string(),
        })
    }

    #[instrument(skip_all)]
    pub async fn verify_invite(
        &self,
        request: &InviteVerificationRequest,
    ) -> Result<InviteVerification, AuthFormError> {
        let code = request.invite_code.trim();
        validate_invite_code(code)?;
        info!("Verifying invite code");

        tokio::time::sleep(self.config.auth_latency()).await;

        self.verified_invites.write().await.insert(code.to_string());
        Ok(InviteVerification {
            invite_code: code.to_string(),
            verified: true,
        })
    }

    pub async fn is_verified(&self, code: &str) -> bool {
        self.verified_invites.read().await.contains(code.trim())
    }

    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn register_doctor(
        &self,
        request: &DoctorOnboardingRequest,
    ) -> Result<AuthRedirect, AuthFormError> {
        validate_onboarding(request)?;
        if !self.is_verified(&request.invite_code).await {
            warn!("Onboarding attempted with an unverified invite code");
            return Err(AuthFormError::InviteNotVerified);
        }
        info!(
            "Doctor onboarding: Dr. {} {}, {} (license {})",
            request.first_name, request.last_name, request.specialty, request.medical_license
        );

        tokio::time::sleep(self.config.auth_latency()).await;

        let role = UserRole::Doctor;
        Ok(AuthRedirect {
            role,
            redirect_to: role.dashboard_route().to_string(),
            message: format!("Welcome, Dr. {}", request.last_name),
        })
    }
}
