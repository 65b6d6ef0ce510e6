use std::fmt;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

/// Read-only reference entry from the doctor directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorRef {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub experience: String,
    pub rating: f32,
    pub next_available_label: String,
}

/// A bookable half-hour slot, serialized as its display label ("10:30 AM").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    start: NaiveTime,
}

impl TimeSlot {
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn label(&self) -> String {
        let (is_pm, hour) = self.start.hour12();
        format!(
            "{}:{:02} {}",
            hour,
            self.start.minute(),
            if is_pm { "PM" } else { "AM" }
        )
    }

    /// Morning 9:00-11:30 and afternoon 2:00-4:30, every 30 minutes.
    pub fn offered() -> Vec<TimeSlot> {
        [(9, 12), (14, 17)]
            .iter()
            .flat_map(|&(from, to)| (from..to).flat_map(|hour| [(hour, 0), (hour, 30)]))
            .filter_map(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
            .map(|start| TimeSlot { start })
            .collect()
    }

    pub fn parse(label: &str) -> Result<TimeSlot, DoctorError> {
        let wanted = label.trim();
        TimeSlot::offered()
            .into_iter()
            .find(|slot| slot.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DoctorError::UnknownTimeSlot(label.to_string()))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = DoctorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeSlot::parse(&value)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.label()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateOption {
    pub date: NaiveDate,
    pub label: String,
    pub day: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub dates: Vec<DateOption>,
    pub time_slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DoctorSearchQuery {
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor {0} not found")]
    NotFound(u32),

    #[error("Time slot '{0}' is not offered")]
    UnknownTimeSlot(String),

    #[error("Date {0} is not offered")]
    UnknownDate(NaiveDate),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) => AppError::NotFound(err.to_string()),
            DoctorError::UnknownTimeSlot(_) | DoctorError::UnknownDate(_) => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}
