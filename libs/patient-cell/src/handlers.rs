use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{
    AlertResponseRequest, DashboardError, DashboardSnapshot, SelectDateRequest,
    SelectDoctorRequest, SelectTimeRequest, ViewRequest,
};
use crate::router::PatientState;

type SnapshotResult = Result<Json<DashboardSnapshot>, AppError>;

#[axum::debug_handler]
pub async fn create_session(
    State(state): State<PatientState>,
) -> (StatusCode, Json<DashboardSnapshot>) {
    let snapshot = state.sessions.create().await;
    (StatusCode::CREATED, Json(snapshot))
}

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<PatientState>,
    Path(session_id): Path<Uuid>,
) -> SnapshotResult {
    Ok(Json(state.sessions.snapshot(session_id).await?))
}

#[axum::debug_handler]
pub async fn end_session(
    State(state): State<PatientState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(session_id).await {
        info!("Ended dashboard session {}", session_id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(DashboardError::SessionNotFound(session_id).into())
    }
}

#[axum::debug_handler]
pub async fn set_view(
    State(state): State<PatientState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ViewRequest>,
) -> SnapshotResult {
    let snapshot = state
        .sessions
        .update(session_id, |dashboard| {
            dashboard.set_view(request.view);
            Ok(())
        })
        .await?;
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn clear_notifications(
    State(state): State<PatientState>,
    Path(session_id): Path<Uuid>,
) -> SnapshotResult {
    let snapshot = state
        .sessions
        .update(session_id, |dashboard| {
            dashboard.clear_notifications();
            Ok(())
        })
        .await?;
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn show_calendar(
    State(state): State<PatientState>,
    Path(session_id): Path<Uuid>,
) -> SnapshotResult {
    let snapshot = state
        .sessions
        .update(session_id, |dashboard| {
            dashboard.show_calendar();
            Ok(())
        })
        .await?;
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn respond_to_alert(
    State(state): State<PatientState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AlertResponseRequest>,
) -> SnapshotResult {
    let snapshot = state
        .sessions
        .update(session_id, |dashboard| {
            let action = dashboard.respond_to_alert(request.response);
            debug!("Alert response {:?} resolved to {:?}", request.response, action);
            Ok(())
        })
        .await?;
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn reschedule_appointment(
    State(state): State<PatientState>,
    Path((session_id, appointment_id)): Path<(Uuid, u32)>,
) -> SnapshotResult {
    let snapshot = state
        .sessions
        .update(session_id, |dashboard| dashboard.reschedule(appointment_id))
        .await?;
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<PatientState>,
    Path((session_id, appointment_id)): Path<(Uuid, u32)>,
) -> SnapshotResult {
    let snapshot = state
        .sessions
        .update(session_id, |dashboard| dashboard.cancel_appointment(appointment_id))
        .await?;
    Ok(Json(snapshot))
}

// Booking wizard

#[axum::debug_handler]
pub async fn start_booking(
    State(state): State<PatientState>,
    Path(session_id): Path<Uuid>,
) -> SnapshotResult {
    let snapshot = state
        .sessions
        .update(session_id, |dashboard| {
            dashboard.start_booking();
            Ok(())
        })
        .await?;
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn select_doctor(
    State(state): State<PatientState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectDoctorRequest>,
) -> SnapshotResult {
    let directory = state.directory.clone();
    let snapshot = state
        .sessions
        .update(session_id, |dashboard| {
            dashboard.select_doctor(&directory, request.doctor_id)
        })
        .await?;
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn select_date(
    State(state): State<PatientState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectDateRequest>,
) -> SnapshotResult {
    let directory = state.directory.clone();
    let snapshot = state
        .sessions
        .update(session_id, |dashboard| dashboard.select_date(&directory, request.date))
        .await?;
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn select_time(
    State(state): State<PatientState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SelectTimeRequest>,
) -> SnapshotResult {
    let directory = state.directory.clone();
    let snapshot = state
        .sessions
        .update(session_id, |dashboard| dashboard.select_time(&directory, &request.time))
        .await?;
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn continue_booking(
    State(state): State<PatientState>,
    Path(session_id): Path<Uuid>,
) -> SnapshotResult {
    let snapshot = state
        .sessions
        .update(session_id, |dashboard| dashboard.continue_booking())
        .await?;
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn booking_back(
    State(state): State<PatientState>,
    Path(session_id): Path<Uuid>,
) -> SnapshotResult {
    let snapshot = state
        .sessions
        .update(session_id, |dashboard| dashboard.booking_back())
        .await?;
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn confirm_booking(
    State(state): State<PatientState>,
    Path(session_id): Path<Uuid>,
) -> SnapshotResult {
    let snapshot = state
        .sessions
        .confirm_booking(session_id, state.submitter.as_ref())
        .await?;
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn cancel_booking(
    State(state): State<PatientState>,
    Path(session_id): Path<Uuid>,
) -> SnapshotResult {
    let snapshot = state
        .sessions
        .update(session_id, |dashboard| dashboard.request_cancel_booking())
        .await?;
    Ok(Json(snapshot))
}
