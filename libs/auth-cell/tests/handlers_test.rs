// libs/auth-cell/tests/handlers_test.rs

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use auth_cell::auth_routes;
use shared_utils::test_utils::{instant_config, read_json};

fn app() -> Router {
    auth_routes(instant_config())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_login_success() {
    let response = app()
        .oneshot(post_json(
            "/auth/login",
            json!({ "email": "john.patient@example.com", "password": "password1" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["redirect_to"], "/patient/dashboard");
    assert_eq!(json["role"], "patient");
}

#[tokio::test]
async fn test_login_validation_errors() {
    let response = app()
        .oneshot(post_json(
            "/auth/login",
            json!({ "email": "john", "password": "pw" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(json["error"], "Validation failed");
    assert_eq!(json["fields"]["email"], "Please enter a valid email address");
    assert_eq!(json["fields"]["password"], "Password must be at least 6 characters");
}

#[tokio::test]
async fn test_doctor_onboarding_flow() {
    let app = app();
    let form = json!({
        "inviteCode": "CLINIC-2025",
        "firstName": "Grace",
        "lastName": "Hopper",
        "email": "grace@clinic.example",
        "medicalLicense": "LIC-55821",
        "specialty": "Neurology",
        "password": "compiler",
        "confirmPassword": "compiler"
    });

    let response = app
        .clone()
        .oneshot(post_json("/doctor/onboarding", form.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert_eq!(json["fields"]["inviteCode"], "Please verify your invite code first");

    let response = app
        .clone()
        .oneshot(post_json(
            "/doctor/onboarding/verify-invite",
            json!({ "inviteCode": "CLINIC-2025" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["verified"], true);

    let response = app
        .oneshot(post_json("/doctor/onboarding", form))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["redirect_to"], "/doctor/dashboard");
    assert_eq!(json["role"], "doctor");
}
