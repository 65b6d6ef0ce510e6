use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use appointment_cell::BookingSubmitter;

use crate::models::{DashboardError, DashboardSnapshot};
use crate::services::dashboard::PatientDashboard;

/// In-memory dashboards keyed by session id. Nothing survives a restart.
#[derive(Clone, Default)]
pub struct DashboardSessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, PatientDashboard>>>,
}

impl DashboardSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> DashboardSnapshot {
        let session_id = Uuid::new_v4();
        let dashboard = PatientDashboard::new();
        let snapshot = dashboard.snapshot(session_id);

        self.sessions.write().await.insert(session_id, dashboard);
        info!("Created dashboard session {}", session_id);
        snapshot
    }

    pub async fn snapshot(&self, session_id: Uuid) -> Result<DashboardSnapshot, DashboardError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&session_id)
            .map(|dashboard| dashboard.snapshot(session_id))
            .ok_or(DashboardError::SessionNotFound(session_id))
    }

    /// Run `f` against one dashboard under the write lock and return the
    /// resulting snapshot.
    pub async fn update<F>(&self, session_id: Uuid, f: F) -> Result<DashboardSnapshot, DashboardError>
    where
        F: FnOnce(&mut PatientDashboard) -> Result<(), DashboardError>,
    {
        let mut sessions = self.sessions.write().await;
        let dashboard = sessions
            .get_mut(&session_id)
            .ok_or(DashboardError::SessionNotFound(session_id))?;

        f(dashboard)?;
        Ok(dashboard.snapshot(session_id))
    }

    /// Confirm the booking for one session.
    ///
    /// The lock is released while the booking call is awaited, so other
    /// requests for the session are served meanwhile; a second confirm is
    /// refused because the wizard is already `Submitting`. A result that
    /// arrives after the booking was abandoned is dropped, even when a newer
    /// submission has started in the meantime.
    #[instrument(skip(self, submitter))]
    pub async fn confirm_booking(
        &self,
        session_id: Uuid,
        submitter: &dyn BookingSubmitter,
    ) -> Result<DashboardSnapshot, DashboardError> {
        let pending = {
            let mut sessions = self.sessions.write().await;
            let dashboard = sessions
                .get_mut(&session_id)
                .ok_or(DashboardError::SessionNotFound(session_id))?;
            dashboard.begin_booking_submission()?
        };

        debug!("Awaiting booking backend for session {}", session_id);
        let result = submitter.submit_booking(&pending.selection).await;

        self.update(session_id, |dashboard| {
            match dashboard.finish_booking_submission(pending.submission_id, result) {
                Err(DashboardError::Wizard(err)) if err.is_discarded_result() => {
                    debug!("Booking for session {} finished after it was abandoned", session_id);
                    Ok(())
                }
                other => other,
            }
        })
        .await
    }

    pub async fn remove(&self, session_id: Uuid) -> bool {
        self.sessions.write().await.remove(&session_id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
