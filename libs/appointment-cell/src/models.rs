use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use doctor_cell::{DoctorRef, TimeSlot};
use shared_models::error::AppError;

/// The in-progress booking selection. Filled in step by step; only complete
/// once the wizard reaches confirmation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub doctor: Option<DoctorRef>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
}

impl BookingDraft {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.doctor.is_none() && self.date.is_none() && self.time.is_none()
    }

    pub fn populated_fields(&self) -> usize {
        [self.doctor.is_some(), self.date.is_some(), self.time.is_some()]
            .into_iter()
            .filter(|set| *set)
            .count()
    }

    /// Names of the fields still unset, in wizard order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.doctor.is_none() {
            missing.push("doctor");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.time.is_none() {
            missing.push("time");
        }
        missing
    }
}

/// Handed out when a submission starts; the id ties the eventual result
/// back to this submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingSubmission {
    pub submission_id: Uuid,
    pub selection: BookingSelection,
}

/// A fully populated draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSelection {
    pub doctor: DoctorRef,
    pub date: NaiveDate,
    pub time: TimeSlot,
}

impl BookingSelection {
    pub fn to_draft(&self) -> BookingDraft {
        BookingDraft {
            doctor: Some(self.doctor.clone()),
            date: Some(self.date),
            time: Some(self.time),
        }
    }

    /// "Tuesday, August 5, 2025"
    pub fn long_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

impl TryFrom<BookingDraft> for BookingSelection {
    type Error = WizardError;

    fn try_from(draft: BookingDraft) -> Result<Self, Self::Error> {
        match (draft.doctor, draft.date, draft.time) {
            (Some(doctor), Some(date), Some(time)) => Ok(BookingSelection { doctor, date, time }),
            (doctor, date, time) => {
                let partial = BookingDraft { doctor, date, time };
                Err(WizardError::SelectionIncomplete {
                    missing: partial.missing_fields().into_iter().map(String::from).collect(),
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub confirmation_id: Uuid,
    pub selection: BookingSelection,
    pub booked_at: DateTime<Utc>,
}

/// Position in the three-step flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    DoctorSelection,
    TimeSelection,
    Confirmation,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::DoctorSelection => 1,
            WizardStep::TimeSelection => 2,
            WizardStep::Confirmation => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WizardState {
    /// Step 1. Selections made before going back are kept.
    SelectingDoctor { draft: BookingDraft },
    /// Step 2.
    SelectingTime {
        doctor: DoctorRef,
        date: Option<NaiveDate>,
        time: Option<TimeSlot>,
    },
    /// Step 3, confirm enabled.
    Confirming { selection: BookingSelection },
    /// Step 3, booking call in flight, confirm disabled. Only the result
    /// carrying `submission_id` is accepted.
    Submitting {
        submission_id: Uuid,
        selection: BookingSelection,
    },
    /// Step 3, booked; waiting for the user to acknowledge the success alert.
    Booked { confirmation: BookingConfirmation },
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState::SelectingDoctor {
            draft: BookingDraft::empty(),
        }
    }
}

impl WizardState {
    pub fn name(&self) -> &'static str {
        match self {
            WizardState::SelectingDoctor { .. } => "selecting_doctor",
            WizardState::SelectingTime { .. } => "selecting_time",
            WizardState::Confirming { .. } => "confirming",
            WizardState::Submitting { .. } => "submitting",
            WizardState::Booked { .. } => "booked",
        }
    }

    pub fn step(&self) -> WizardStep {
        match self {
            WizardState::SelectingDoctor { .. } => WizardStep::DoctorSelection,
            WizardState::SelectingTime { .. } => WizardStep::TimeSelection,
            WizardState::Confirming { .. }
            | WizardState::Submitting { .. }
            | WizardState::Booked { .. } => WizardStep::Confirmation,
        }
    }

    pub fn draft(&self) -> BookingDraft {
        match self {
            WizardState::SelectingDoctor { draft } => draft.clone(),
            WizardState::SelectingTime { doctor, date, time } => BookingDraft {
                doctor: Some(doctor.clone()),
                date: *date,
                time: *time,
            },
            WizardState::Confirming { selection } | WizardState::Submitting { selection, .. } => {
                selection.to_draft()
            }
            WizardState::Booked { confirmation } => confirmation.selection.to_draft(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WizardError {
    #[error("Booking flow is not open")]
    Closed,

    #[error("Cannot {action} while {state}")]
    InvalidTransition { state: &'static str, action: &'static str },

    #[error("Selection incomplete, missing: {}", missing.join(", "))]
    SelectionIncomplete { missing: Vec<String> },

    #[error("A booking submission is already in progress")]
    SubmissionInFlight,

    #[error("No booking submission is in progress")]
    NoSubmissionInFlight,

    #[error("Booking result for submission {0} does not match the one in progress")]
    StaleSubmission(Uuid),
}

impl WizardError {
    /// A booking result that belongs to no live submission and is dropped.
    pub fn is_discarded_result(&self) -> bool {
        matches!(
            self,
            WizardError::NoSubmissionInFlight | WizardError::StaleSubmission(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("Booking submission failed: {0}")]
    SubmissionFailed(String),
}

impl From<WizardError> for AppError {
    fn from(err: WizardError) -> Self {
        AppError::Conflict(err.to_string())
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError::ExternalService(err.to_string())
    }
}
