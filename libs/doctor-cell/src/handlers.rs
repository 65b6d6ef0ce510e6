use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{DoctorRef, DoctorSearchQuery, Schedule};
use crate::services::DoctorDirectoryService;

#[axum::debug_handler]
pub async fn list_doctors(
    State(directory): State<Arc<DoctorDirectoryService>>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let doctors = directory.search(query.specialty.as_deref());
    debug!("Returning {} doctors", doctors.len());

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(directory): State<Arc<DoctorDirectoryService>>,
    Path(doctor_id): Path<u32>,
) -> Result<Json<DoctorRef>, AppError> {
    let doctor = directory.find_doctor(doctor_id)?;
    Ok(Json(doctor))
}

#[axum::debug_handler]
pub async fn get_schedule(
    State(directory): State<Arc<DoctorDirectoryService>>,
) -> Result<Json<Schedule>, AppError> {
    Ok(Json(directory.schedule()))
}
