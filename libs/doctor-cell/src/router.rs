use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers::*;
use crate::services::DoctorDirectoryService;

pub fn create_doctor_router(directory: Arc<DoctorDirectoryService>) -> Router {
    Router::new()
        .route("/", get(list_doctors))
        .route("/schedule", get(get_schedule))
        .route("/{id}", get(get_doctor))
        .with_state(directory)
}
