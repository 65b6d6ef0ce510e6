use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use alert_cell::{AlertConfig, AlertResponse};
use appointment_cell::{BookingDraft, WizardError};
use doctor_cell::{DoctorError, TimeSlot};
use shared_models::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    #[default]
    Dashboard,
    History,
    Settings,
    Booking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingAppointment {
    pub id: u32,
    pub doctor: String,
    pub specialty: String,
    pub appointment_type: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub location: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastAppointment {
    pub id: u32,
    pub doctor: String,
    pub specialty: String,
    pub appointment_type: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub status: AppointmentStatus,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Appointment,
    Results,
    Prescription,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: u32,
    pub action: String,
    pub details: String,
    pub time_ago: String,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardSnapshot {
    pub open: bool,
    pub step: u8,
    pub state: String,
    pub draft: BookingDraft,
    pub can_confirm: bool,
    pub is_submitting: bool,
}

/// Everything the dashboard page renders, in one response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub session_id: Uuid,
    pub patient_name: String,
    pub active_view: DashboardView,
    pub notifications: u32,
    pub wizard: WizardSnapshot,
    pub alert: Option<AlertConfig>,
    pub upcoming_appointments: Vec<UpcomingAppointment>,
    pub appointment_history: Vec<PastAppointment>,
    pub recent_activity: Vec<ActivityEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewRequest {
    pub view: DashboardView,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectDoctorRequest {
    pub doctor_id: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectDateRequest {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectTimeRequest {
    pub time: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlertResponseRequest {
    pub response: AlertResponse,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error("Session {0} not found")]
    SessionNotFound(Uuid),

    #[error("Appointment {0} not found")]
    AppointmentNotFound(u32),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Doctor(#[from] DoctorError),
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::SessionNotFound(_) | DashboardError::AppointmentNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            DashboardError::Wizard(inner) => inner.into(),
            DashboardError::Doctor(inner) => inner.into(),
        }
    }
}
