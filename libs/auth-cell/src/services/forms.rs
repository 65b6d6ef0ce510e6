use shared_utils::validation::FieldErrors;

use crate::models::{AuthFormError, DoctorOnboardingRequest, LoginRequest};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const SHORT_PASSWORD: &str = "Password must be at least 6 characters";
pub const INVALID_INVITE: &str = "Please enter a valid invite code";
pub const PASSWORD_MISMATCH: &str = "Passwords don't match";

pub fn validate_login(request: &LoginRequest) -> Result<(), AuthFormError> {
    let mut errors = FieldErrors::new();
    errors.email("email", &request.email, INVALID_EMAIL);
    errors.min_length("password", &request.password, 6, SHORT_PASSWORD);
    errors.into_result().map_err(AuthFormError::Invalid)
}

pub fn validate_invite_code(code: &str) -> Result<(), AuthFormError> {
    let mut errors = FieldErrors::new();
    errors.min_length("inviteCode", code.trim(), 6, INVALID_INVITE);
    errors.into_result().map_err(AuthFormError::Invalid)
}

/// All field errors are reported together; the password match check only
/// applies once both passwords are long enough.
pub fn validate_onboarding(request: &DoctorOnboardingRequest) -> Result<(), AuthFormError> {
    let mut errors = FieldErrors::new();
    errors.min_length("inviteCode", &request.invite_code, 6, INVALID_INVITE);
    errors.min_length(
        "firstName",
        &request.first_name,
        2,
        "First name must be at least 2 characters",
    );
    errors.min_length(
        "lastName",
        &request.last_name,
        2,
        "Last name must be at least 2 characters",
    );
    errors.email("email", &request.email, INVALID_EMAIL);
    errors.min_length(
        "medicalLicense",
        &request.medical_license,
        5,
        "Please enter a valid medical license number",
    );
    errors.min_length(
        "specialty",
        &request.specialty,
        2,
        "Please enter your medical specialty",
    );
    errors.min_length("password", &request.password, 6, SHORT_PASSWORD);
    errors.min_length(
        "confirmPassword",
        &request.confirm_password,
        6,
        "Please confirm your password",
    );

    if errors.is_empty() && request.password != request.confirm_password {
        errors.add("confirmPassword", PASSWORD_MISMATCH);
    }

    errors.into_result().map_err(AuthFormError::Invalid)
}
