use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use appointment_cell::{BookingSubmitter, SimulatedBookingService};
use doctor_cell::DoctorDirectoryService;
use shared_config::AppConfig;

use crate::handlers::*;
use crate::services::DashboardSessionStore;

#[derive(Clone)]
pub struct PatientState {
    pub sessions: DashboardSessionStore,
    pub directory: Arc<DoctorDirectoryService>,
    pub submitter: Arc<dyn BookingSubmitter>,
}

impl PatientState {
    /// State backed by the simulated booking service configured in `config`.
    pub fn new(config: Arc<AppConfig>, directory: Arc<DoctorDirectoryService>) -> Self {
        let submitter = Arc::new(SimulatedBookingService::from_config(&config));
        Self::with_submitter(directory, submitter)
    }

    pub fn with_submitter(
        directory: Arc<DoctorDirectoryService>,
        submitter: Arc<dyn BookingSubmitter>,
    ) -> Self {
        Self {
            sessions: DashboardSessionStore::new(),
            directory,
            submitter,
        }
    }
}

pub fn create_patient_router(state: PatientState) -> Router {
    let booking_routes = Router::new()
        .route("/start", post(start_booking))
        .route("/doctor", post(select_doctor))
        .route("/date", post(select_date))
        .route("/time", post(select_time))
        .route("/continue", post(continue_booking))
        .route("/back", post(booking_back))
        .route("/confirm", post(confirm_booking))
        .route("/cancel", post(cancel_booking));

    let session_routes = Router::new()
        .route("/", get(get_session).delete(end_session))
        .route("/view", post(set_view))
        .route("/notifications/clear", post(clear_notifications))
        .route("/calendar", post(show_calendar))
        .route("/alert/respond", post(respond_to_alert))
        .route("/appointments/{appointment_id}/reschedule", post(reschedule_appointment))
        .route("/appointments/{appointment_id}/cancel", post(cancel_appointment))
        .nest("/booking", booking_routes);

    Router::new()
        .route("/sessions", post(create_session))
        .nest("/sessions/{id}", session_routes)
        .with_state(state)
}
