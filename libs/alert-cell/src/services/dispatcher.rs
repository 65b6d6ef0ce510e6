use tracing::{debug, error, info, warn};

use crate::models::{AlertAction, AlertConfig, AlertKind, AlertResponse};

/// Holds at most one visible alert. Last write wins; nothing is queued.
#[derive(Debug, Default, Clone)]
pub struct AlertDispatcher {
    current: Option<AlertConfig>,
}

impl AlertDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_success(&mut self, title: &str, message: &str, on_confirm: AlertAction) {
        self.raise(AlertConfig::new(
            AlertKind::Success,
            title,
            message,
            on_confirm,
            AlertAction::Close,
            false,
        ));
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.raise(AlertConfig::new(
            AlertKind::Error,
            title,
            message,
            AlertAction::Close,
            AlertAction::Close,
            false,
        ));
    }

    /// Warning with a cancel button; cancelling only hides the alert.
    pub fn show_confirm(&mut self, title: &str, message: &str, on_confirm: AlertAction) {
        self.raise(AlertConfig::new(
            AlertKind::Warning,
            title,
            message,
            on_confirm,
            AlertAction::Close,
            true,
        ));
    }

    pub fn show_info(&mut self, title: &str, message: &str) {
        self.raise(AlertConfig::new(
            AlertKind::Info,
            title,
            message,
            AlertAction::Close,
            AlertAction::Close,
            false,
        ));
    }

    pub fn raise(&mut self, alert: AlertConfig) {
        match alert.kind {
            AlertKind::Error => error!(alert_id = %alert.alert_id, "ERROR ALERT: {}", alert.title),
            AlertKind::Warning => warn!(alert_id = %alert.alert_id, "WARNING ALERT: {}", alert.title),
            AlertKind::Success | AlertKind::Info => {
                info!(alert_id = %alert.alert_id, kind = ?alert.kind, "ALERT: {}", alert.title)
            }
        }

        if let Some(previous) = self.current.replace(alert) {
            debug!("Replaced visible alert {} ({})", previous.alert_id, previous.title);
        }
    }

    pub fn current(&self) -> Option<&AlertConfig> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Hide the alert and return the action bound to the pressed button.
    ///
    /// A cancel response to an alert without a cancel button is ignored and
    /// leaves the alert visible.
    pub fn respond(&mut self, response: AlertResponse) -> Option<AlertAction> {
        let action = match &self.current {
            Some(alert) => alert.action_for(response),
            None => {
                debug!("Alert response {:?} with no visible alert", response);
                return None;
            }
        };

        match action {
            Some(action) => {
                if let Some(alert) = self.current.take() {
                    info!(alert_id = %alert.alert_id, ?response, ?action, "Alert dismissed");
                }
                Some(action)
            }
            None => {
                warn!("Ignoring {:?} response: visible alert has no cancel button", response);
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
