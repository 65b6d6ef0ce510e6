// libs/doctor-cell/src/services/directory.rs
use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::models::{DateOption, DoctorError, DoctorRef, Schedule, TimeSlot};

/// Fixed, in-memory doctor list and booking calendar.
pub struct DoctorDirectoryService {
    doctors: Vec<DoctorRef>,
    dates: Vec<DateOption>,
}

impl Default for DoctorDirectoryService {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorDirectoryService {
    pub fn new() -> Self {
        let doctors = [
            (1, "Dr. Sarah Johnson", "General Medicine", "15 years", 4.9, "Tomorrow"),
            (2, "Dr. Michael Chen", "Cardiology", "12 years", 4.8, "Friday"),
            (3, "Dr. Emily Davis", "Dermatology", "8 years", 4.7, "Next Week"),
            (4, "Dr. Robert Wilson", "Orthopedics", "20 years", 4.9, "Monday"),
        ]
        .into_iter()
        .map(|(id, name, specialty, experience, rating, next)| DoctorRef {
            id,
            name: name.to_string(),
            specialty: specialty.to_string(),
            experience: experience.to_string(),
            rating,
            next_available_label: next.to_string(),
        })
        .collect();

        let dates = [
            ((2025, 7, 30), "Tomorrow", "Wed"),
            ((2025, 7, 31), "Thursday", "Thu"),
            ((2025, 8, 1), "Friday", "Fri"),
            ((2025, 8, 4), "Monday", "Mon"),
            ((2025, 8, 5), "Tuesday", "Tue"),
            ((2025, 8, 6), "Wednesday", "Wed"),
        ]
        .into_iter()
        .filter_map(|((y, m, d), label, day)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| DateOption {
                date,
                label: label.to_string(),
                day: day.to_string(),
            })
        })
        .collect();

        Self { doctors, dates }
    }

    pub fn list_doctors(&self) -> &[DoctorRef] {
        &self.doctors
    }

    /// Case-insensitive specialty filter; `None` returns everyone.
    pub fn search(&self, specialty: Option<&str>) -> Vec<DoctorRef> {
        match specialty.map(str::trim).filter(|s| !s.is_empty()) {
            Some(wanted) => {
                debug!("Searching doctors by specialty: {}", wanted);
                self.doctors
                    .iter()
                    .filter(|d| d.specialty.eq_ignore_ascii_case(wanted))
                    .cloned()
                    .collect()
            }
            None => self.doctors.clone(),
        }
    }

    pub fn find_doctor(&self, doctor_id: u32) -> Result<DoctorRef, DoctorError> {
        self.doctors
            .iter()
            .find(|d| d.id == doctor_id)
            .cloned()
            .ok_or_else(|| {
                warn!("Doctor lookup failed for id {}", doctor_id);
                DoctorError::NotFound(doctor_id)
            })
    }

    pub fn date_option(&self, date: NaiveDate) -> Result<DateOption, DoctorError> {
        self.dates
            .iter()
            .find(|option| option.date == date)
            .cloned()
            .ok_or(DoctorError::UnknownDate(date))
    }

    pub fn time_slot(&self, label: &str) -> Result<TimeSlot, DoctorError> {
        TimeSlot::parse(label)
    }

    pub fn schedule(&self) -> Schedule {
        Schedule {
            dates: self.dates.clone(),
            time_slots: TimeSlot::offered(),
        }
    }
}
