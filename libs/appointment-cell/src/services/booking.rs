// libs/appointment-cell/src/services/booking.rs
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use shared_config::AppConfig;

use crate::models::{BookingConfirmation, BookingError, BookingSelection};

/// The remote booking operation. Only one call per wizard is ever in flight.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingSubmitter: Send + Sync {
    async fn submit_booking(
        &self,
        selection: &BookingSelection,
    ) -> Result<BookingConfirmation, BookingError>;
}

/// Stand-in for the booking backend: waits a fixed delay, then succeeds
/// (or fails, when configured to).
#[derive(Debug, Clone)]
pub struct SimulatedBookingService {
    latency: Duration,
    simulate_failure: bool,
}

impl SimulatedBookingService {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            simulate_failure: false,
        }
    }

    pub fn failing(latency: Duration) -> Self {
        Self {
            latency,
            simulate_failure: true,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            latency: config.booking_latency(),
            simulate_failure: config.booking_simulate_failure,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl BookingSubmitter for SimulatedBookingService {
    #[instrument(skip(self, selection), fields(doctor_id = selection.doctor.id))]
    async fn submit_booking(
        &self,
        selection: &BookingSelection,
    ) -> Result<BookingConfirmation, BookingError> {
        info!(
            "Submitting booking: {} on {} at {}",
            selection.doctor.name, selection.date, selection.time
        );

        tokio::time::sleep(self.latency).await;

        if self.simulate_failure {
            warn!("Simulated booking failure for doctor {}", selection.doctor.id);
            return Err(BookingError::SubmissionFailed(
                "booking service unavailable".to_string(),
            ));
        }

        let confirmation = BookingConfirmation {
            confirmation_id: Uuid::new_v4(),
            selection: selection.clone(),
            booked_at: Utc::now(),
        };

        info!("Booking confirmed with ID {}", confirmation.confirmation_id);
        Ok(confirmation)
    }
}
