use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use alert_cell::{AlertAction, AlertDispatcher, AlertResponse};
use appointment_cell::{BookingConfirmation, BookingError, BookingWizard, PendingSubmission};
use doctor_cell::{DoctorDirectoryService, TimeSlot};

use crate::models::{
    ActivityEntry, ActivityKind, AppointmentStatus, DashboardError, DashboardSnapshot,
    DashboardView, PastAppointment, UpcomingAppointment, WizardSnapshot,
};

const PATIENT_NAME: &str = "John Patient";
const INITIAL_NOTIFICATIONS: u32 = 2;

/// One patient's dashboard page: the booking wizard, the alert slot they
/// share, and the static appointment data around them.
#[derive(Debug, Clone)]
pub struct PatientDashboard {
    patient_name: String,
    active_view: DashboardView,
    notifications: u32,
    wizard: BookingWizard,
    alerts: AlertDispatcher,
    upcoming: Vec<UpcomingAppointment>,
    history: Vec<PastAppointment>,
    activity: Vec<ActivityEntry>,
}

impl Default for PatientDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientDashboard {
    pub fn new() -> Self {
        Self {
            patient_name: PATIENT_NAME.to_string(),
            active_view: DashboardView::Dashboard,
            notifications: INITIAL_NOTIFICATIONS,
            wizard: BookingWizard::new(),
            alerts: AlertDispatcher::new(),
            upcoming: upcoming_appointments(),
            history: appointment_history(),
            activity: recent_activity(),
        }
    }

    pub fn wizard(&self) -> &BookingWizard {
        &self.wizard
    }

    pub fn alerts(&self) -> &AlertDispatcher {
        &self.alerts
    }

    pub fn active_view(&self) -> DashboardView {
        self.active_view
    }

    pub fn notifications(&self) -> u32 {
        self.notifications
    }

    /// Switching to the booking view opens the wizard.
    pub fn set_view(&mut self, view: DashboardView) {
        if view == DashboardView::Booking {
            self.start_booking();
            return;
        }
        debug!("Switching view to {:?}", view);
        self.active_view = view;
    }

    pub fn clear_notifications(&mut self) {
        self.notifications = 0;
    }

    pub fn show_calendar(&mut self) {
        self.alerts.show_info(
            "Calendar View",
            "Calendar view feature coming soon! This will show all your appointments in a monthly calendar format.",
        );
    }

    pub fn start_booking(&mut self) {
        self.wizard.open();
        self.active_view = DashboardView::Booking;
    }

    pub fn select_doctor(
        &mut self,
        directory: &DoctorDirectoryService,
        doctor_id: u32,
    ) -> Result<(), DashboardError> {
        let doctor = directory.find_doctor(doctor_id)?;
        self.wizard.select_doctor(doctor)?;
        Ok(())
    }

    pub fn select_date(
        &mut self,
        directory: &DoctorDirectoryService,
        date: NaiveDate,
    ) -> Result<(), DashboardError> {
        let option = directory.date_option(date)?;
        self.wizard.select_date(option.date)?;
        Ok(())
    }

    pub fn select_time(
        &mut self,
        directory: &DoctorDirectoryService,
        label: &str,
    ) -> Result<(), DashboardError> {
        let slot = directory.time_slot(label)?;
        self.wizard.select_time(slot)?;
        Ok(())
    }

    pub fn continue_booking(&mut self) -> Result<(), DashboardError> {
        Ok(self.wizard.proceed_to_confirmation()?)
    }

    pub fn booking_back(&mut self) -> Result<(), DashboardError> {
        Ok(self.wizard.back()?)
    }

    pub fn request_cancel_booking(&mut self) -> Result<(), DashboardError> {
        Ok(self.wizard.request_cancel(&mut self.alerts)?)
    }

    pub fn begin_booking_submission(&mut self) -> Result<PendingSubmission, DashboardError> {
        Ok(self.wizard.begin_submission()?)
    }

    pub fn finish_booking_submission(
        &mut self,
        submission_id: Uuid,
        result: Result<BookingConfirmation, BookingError>,
    ) -> Result<(), DashboardError> {
        Ok(self
            .wizard
            .finish_submission(submission_id, result, &mut self.alerts)?)
    }

    pub fn reschedule(&mut self, appointment_id: u32) -> Result<(), DashboardError> {
        self.find_upcoming(appointment_id)?;
        self.alerts.show_info(
            "Reschedule Appointment",
            "In a real app, this would open a calendar picker to select a new date and time for your appointment.",
        );
        Ok(())
    }

    pub fn cancel_appointment(&mut self, appointment_id: u32) -> Result<(), DashboardError> {
        self.find_upcoming(appointment_id)?;
        self.alerts.show_confirm(
            "Cancel Appointment",
            "Are you sure you want to cancel this appointment? This action cannot be undone.",
            AlertAction::CancelAppointment { appointment_id },
        );
        Ok(())
    }

    /// Dismiss the visible alert and carry out whatever it was bound to.
    pub fn respond_to_alert(&mut self, response: AlertResponse) -> Option<AlertAction> {
        let action = self.alerts.respond(response)?;

        match action {
            AlertAction::CancelAppointment { appointment_id } => {
                info!("Appointment {} cancellation confirmed", appointment_id);
                self.alerts.show_success(
                    "Appointment Cancelled",
                    "Your appointment has been successfully cancelled. You will receive a confirmation email shortly.",
                    AlertAction::Close,
                );
            }
            other => {
                if self.wizard.apply_alert_action(other) && !self.wizard.is_open() {
                    self.active_view = DashboardView::Dashboard;
                }
            }
        }

        Some(action)
    }

    pub fn snapshot(&self, session_id: Uuid) -> DashboardSnapshot {
        DashboardSnapshot {
            session_id,
            patient_name: self.patient_name.clone(),
            active_view: self.active_view,
            notifications: self.notifications,
            wizard: WizardSnapshot {
                open: self.wizard.is_open(),
                step: self.wizard.step().number(),
                state: self.wizard.state().name().to_string(),
                draft: self.wizard.draft(),
                can_confirm: self.wizard.can_confirm(),
                is_submitting: self.wizard.is_submitting(),
            },
            alert: self.alerts.current().cloned(),
            upcoming_appointments: self.upcoming.clone(),
            appointment_history: self.history.clone(),
            recent_activity: self.activity.clone(),
        }
    }

    fn find_upcoming(&self, appointment_id: u32) -> Result<&UpcomingAppointment, DashboardError> {
        self.upcoming
            .iter()
            .find(|a| a.id == appointment_id)
            .ok_or(DashboardError::AppointmentNotFound(appointment_id))
    }
}

fn on(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn at(label: &str) -> TimeSlot {
    // Labels below are all offered slots.
    TimeSlot::parse(label).unwrap_or_else(|_| TimeSlot::offered()[0])
}

fn upcoming_appointments() -> Vec<UpcomingAppointment> {
    vec![
        UpcomingAppointment {
            id: 1,
            doctor: "Dr. Sarah Johnson".to_string(),
            specialty: "General Medicine".to_string(),
            appointment_type: "General Checkup".to_string(),
            date: on(2025, 7, 30),
            time: at("2:00 PM"),
            location: "Room 201".to_string(),
            status: AppointmentStatus::Confirmed,
        },
        UpcomingAppointment {
            id: 2,
            doctor: "Dr. Michael Chen".to_string(),
            specialty: "Cardiology".to_string(),
            appointment_type: "Heart Consultation".to_string(),
            date: on(2025, 8, 5),
            time: at("10:30 AM"),
            location: "Room 105".to_string(),
            status: AppointmentStatus::Pending,
        },
    ]
}

fn appointment_history() -> Vec<PastAppointment> {
    [
        (1, "Dr. Emily Davis", "Dermatology", "Skin Examination", on(2025, 7, 20), "3:00 PM", "Follow-up in 6 months"),
        (2, "Dr. Robert Wilson", "Orthopedics", "Knee Consultation", on(2025, 7, 15), "11:00 AM", "Prescribed physical therapy"),
        (3, "Dr. Sarah Johnson", "General Medicine", "Annual Physical", on(2025, 6, 30), "9:00 AM", "All tests normal"),
    ]
    .into_iter()
    .map(|(id, doctor, specialty, kind, date, time, notes)| PastAppointment {
        id,
        doctor: doctor.to_string(),
        specialty: specialty.to_string(),
        appointment_type: kind.to_string(),
        date,
        time: at(time),
        status: AppointmentStatus::Completed,
        notes: notes.to_string(),
    })
    .collect()
}

fn recent_activity() -> Vec<ActivityEntry> {
    [
        (1, "Appointment confirmed", "Dr. Sarah Johnson - Tomorrow 2:00 PM", "2 hours ago", ActivityKind::Appointment),
        (2, "Lab results available", "Blood work - All results normal", "1 day ago", ActivityKind::Results),
        (3, "Prescription refilled", "Vitamin D supplement", "3 days ago", ActivityKind::Prescription),
    ]
    .into_iter()
    .map(|(id, action, details, time_ago, kind)| ActivityEntry {
        id,
        action: action.to_string(),
        details: details.to_string(),
        time_ago: time_ago.to_string(),
        kind,
    })
    .collect()
}
