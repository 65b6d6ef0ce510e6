use std::sync::Arc;

use axum::{routing::get, Json, Router};

use auth_cell::auth_routes;
use doctor_cell::{create_doctor_router, DoctorDirectoryService};
use patient_cell::{create_patient_router, PatientState};
use shared_config::AppConfig;
use shared_models::routes::{route_table, RouteTable};

pub fn create_router(config: Arc<AppConfig>) -> Router {
    let directory = Arc::new(DoctorDirectoryService::new());
    let patient_state = PatientState::new(config.clone(), directory.clone());

    Router::new()
        .route("/", get(|| async { "Clinic portal API is running!" }))
        .route("/routes", get(routes))
        .nest("/doctors", create_doctor_router(directory))
        .nest("/patient", create_patient_router(patient_state))
        .merge(auth_routes(config))
}

async fn routes() -> Json<RouteTable> {
    Json(route_table())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use shared_utils::test_utils::{instant_config, read_json};
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn serves_route_table() {
        let response = create_router(instant_config())
            .oneshot(get("/routes"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        assert_eq!(json["auth"]["login"], "/auth/login");
        assert_eq!(json["dashboards"]["doctor"], "/doctor/dashboard");
    }

    #[tokio::test]
    async fn mounts_every_cell() {
        let app = create_router(instant_config());

        let doctors = app.clone().oneshot(get("/doctors")).await.unwrap();
        assert_eq!(doctors.status(), StatusCode::OK);

        let session = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/patient/sessions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(session.status(), StatusCode::CREATED);
    }
}
