// libs/appointment-cell/src/services/wizard.rs
use std::mem;

use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use alert_cell::{AlertAction, AlertDispatcher};
use doctor_cell::{DoctorRef, TimeSlot};

use crate::models::{
    BookingConfirmation, BookingDraft, BookingError, BookingSelection, PendingSubmission,
    WizardError, WizardState, WizardStep,
};
use crate::services::booking::BookingSubmitter;

pub const BOOKING_SUCCESS_TITLE: &str = "Appointment Booked Successfully!";
pub const BOOKING_FAILED_TITLE: &str = "Booking Failed";
pub const BOOKING_FAILED_MESSAGE: &str = "Sorry, there was an error booking your appointment. \
    Please try again or contact support if the problem persists.";
pub const CANCEL_BOOKING_TITLE: &str = "Cancel Booking Process";
pub const CANCEL_BOOKING_MESSAGE: &str =
    "Are you sure you want to cancel the booking process? All your selections will be lost.";

/// Drives a patient through doctor, date/time and confirmation.
///
/// Every transition is a method that either moves to the next state or
/// returns a [`WizardError`] and leaves the state untouched. User-facing
/// notifications go through the [`AlertDispatcher`] passed in by the owner.
#[derive(Debug, Clone, Default)]
pub struct BookingWizard {
    state: WizardState,
    is_open: bool,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn step(&self) -> WizardStep {
        self.state.step()
    }

    pub fn draft(&self) -> BookingDraft {
        self.state.draft()
    }

    /// Confirm is only enabled while a complete selection is awaiting confirmation.
    pub fn can_confirm(&self) -> bool {
        self.is_open && matches!(self.state, WizardState::Confirming { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, WizardState::Submitting { .. })
    }

    /// Open the flow at doctor selection. Opening an already open flow keeps
    /// its progress, unless that flow already ended in a booking.
    pub fn open(&mut self) {
        if self.is_open {
            if let WizardState::Booked { confirmation } = &self.state {
                info!(
                    "Starting a new booking after {}",
                    confirmation.confirmation_id
                );
                self.state = WizardState::default();
            } else {
                debug!("Booking flow already open at {}", self.state.name());
            }
            return;
        }
        self.state = WizardState::default();
        self.is_open = true;
        info!("Booking flow opened");
    }

    #[instrument(skip(self, doctor), fields(doctor_id = doctor.id))]
    pub fn select_doctor(&mut self, doctor: DoctorRef) -> Result<(), WizardError> {
        self.ensure_open()?;
        match &mut self.state {
            WizardState::SelectingDoctor { draft } => {
                let draft = mem::take(draft);
                info!("Doctor selected: {}", doctor.name);
                self.state = WizardState::SelectingTime {
                    doctor,
                    date: draft.date,
                    time: draft.time,
                };
                Ok(())
            }
            other => Err(invalid(other, "select a doctor")),
        }
    }

    pub fn select_date(&mut self, selected: NaiveDate) -> Result<(), WizardError> {
        self.ensure_open()?;
        match &mut self.state {
            WizardState::SelectingTime { date, .. } => {
                debug!("Date selected: {}", selected);
                *date = Some(selected);
                Ok(())
            }
            other => Err(invalid(other, "select a date")),
        }
    }

    pub fn select_time(&mut self, selected: TimeSlot) -> Result<(), WizardError> {
        self.ensure_open()?;
        match &mut self.state {
            WizardState::SelectingTime { time, .. } => {
                debug!("Time selected: {}", selected);
                *time = Some(selected);
                Ok(())
            }
            other => Err(invalid(other, "select a time")),
        }
    }

    /// Move to confirmation. Refused, without changing state, until both a
    /// date and a time are chosen.
    pub fn proceed_to_confirmation(&mut self) -> Result<(), WizardError> {
        self.ensure_open()?;
        let selection = match &self.state {
            WizardState::SelectingTime { .. } => BookingSelection::try_from(self.state.draft())?,
            other => return Err(invalid(other, "continue to confirmation")),
        };
        info!(
            "Proceeding to confirmation: {} on {} at {}",
            selection.doctor.name, selection.date, selection.time
        );
        self.state = WizardState::Confirming { selection };
        Ok(())
    }

    pub fn back(&mut self) -> Result<(), WizardError> {
        self.ensure_open()?;
        let previous = match &self.state {
            WizardState::SelectingTime { .. } => WizardState::SelectingDoctor {
                draft: self.state.draft(),
            },
            WizardState::Confirming { selection } => WizardState::SelectingTime {
                doctor: selection.doctor.clone(),
                date: Some(selection.date),
                time: Some(selection.time),
            },
            other => return Err(invalid(other, "go back")),
        };
        debug!("Wizard back: {} -> {}", self.state.name(), previous.name());
        self.state = previous;
        Ok(())
    }

    /// Enter `Submitting` and hand out the selection to book, tagged with a
    /// fresh submission id. A second call while a submission is in flight is
    /// refused.
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, WizardError> {
        self.ensure_open()?;
        match &self.state {
            WizardState::Confirming { selection } => {
                let pending = PendingSubmission {
                    submission_id: Uuid::new_v4(),
                    selection: selection.clone(),
                };
                self.state = WizardState::Submitting {
                    submission_id: pending.submission_id,
                    selection: pending.selection.clone(),
                };
                info!(
                    "Booking submission {} started for doctor {}",
                    pending.submission_id, pending.selection.doctor.id
                );
                Ok(pending)
            }
            WizardState::Submitting { .. } => {
                warn!("Duplicate booking submission refused");
                Err(WizardError::SubmissionInFlight)
            }
            other => Err(invalid(other, "confirm the booking")),
        }
    }

    /// Apply the result of the booking call started by [`begin_submission`].
    ///
    /// Only the result for the submission currently in flight is applied.
    /// Results that arrive after the flow was abandoned, including ones that
    /// race a newer submission, are discarded.
    ///
    /// [`begin_submission`]: BookingWizard::begin_submission
    pub fn finish_submission(
        &mut self,
        submission_id: Uuid,
        result: Result<BookingConfirmation, BookingError>,
        alerts: &mut AlertDispatcher,
    ) -> Result<(), WizardError> {
        let selection = match (&self.state, self.is_open) {
            (WizardState::Submitting { submission_id: current, selection }, true) => {
                if *current != submission_id {
                    warn!(
                        "Discarding booking result for {}: submission {} is in flight",
                        submission_id, current
                    );
                    return Err(WizardError::StaleSubmission(submission_id));
                }
                selection.clone()
            }
            _ => {
                warn!("Discarding booking result for {}: no submission in flight", submission_id);
                return Err(WizardError::NoSubmissionInFlight);
            }
        };

        match result {
            Ok(confirmation) => {
                info!("Booking {} succeeded", confirmation.confirmation_id);
                alerts.show_success(
                    BOOKING_SUCCESS_TITLE,
                    &success_message(&confirmation.selection),
                    AlertAction::ResetWizard,
                );
                self.state = WizardState::Booked { confirmation };
            }
            Err(err) => {
                warn!("Booking failed: {}", err);
                alerts.show_error(BOOKING_FAILED_TITLE, BOOKING_FAILED_MESSAGE);
                self.state = WizardState::Confirming { selection };
            }
        }
        Ok(())
    }

    /// Confirm, run the booking call and apply its result in one go.
    pub async fn submit(
        &mut self,
        submitter: &dyn BookingSubmitter,
        alerts: &mut AlertDispatcher,
    ) -> Result<(), WizardError> {
        let pending = self.begin_submission()?;
        let result = submitter.submit_booking(&pending.selection).await;
        self.finish_submission(pending.submission_id, result, alerts)
    }

    /// Ask the user whether to abandon the flow. Nothing changes until the
    /// prompt is confirmed.
    pub fn request_cancel(&self, alerts: &mut AlertDispatcher) -> Result<(), WizardError> {
        self.ensure_open()?;
        alerts.show_confirm(
            CANCEL_BOOKING_TITLE,
            CANCEL_BOOKING_MESSAGE,
            AlertAction::AbandonBooking,
        );
        Ok(())
    }

    /// React to a dismissed alert. Returns `true` when the action belonged to the wizard.
    pub fn apply_alert_action(&mut self, action: AlertAction) -> bool {
        match action {
            AlertAction::ResetWizard => {
                if matches!(self.state, WizardState::Booked { .. }) {
                    info!("Booking acknowledged, resetting wizard");
                    self.close();
                } else {
                    warn!("Ignoring reset while {}", self.state.name());
                }
                true
            }
            AlertAction::AbandonBooking => {
                if self.is_submitting() {
                    warn!("Booking abandoned while a submission is in flight");
                }
                info!("Booking flow cancelled from {}", self.state.name());
                self.close();
                true
            }
            AlertAction::Close | AlertAction::CancelAppointment { .. } => false,
        }
    }

    fn close(&mut self) {
        self.state = WizardState::default();
        self.is_open = false;
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.is_open {
            Ok(())
        } else {
            Err(WizardError::Closed)
        }
    }
}

fn invalid(state: &WizardState, action: &'static str) -> WizardError {
    warn!("Refused to {} while {}", action, state.name());
    WizardError::InvalidTransition {
        state: state.name(),
        action,
    }
}

fn success_message(selection: &BookingSelection) -> String {
    format!(
        "Your appointment has been confirmed!\n\nDoctor: {}\nDate: {} ({})\nTime: {}\n\n\
         You will receive a confirmation email shortly.",
        selection.doctor.name,
        selection.long_date(),
        selection.date.format("%Y-%m-%d"),
        selection.time
    )
}
