use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

/// What happens when an alert button is pressed. The dispatcher only stores
/// and returns these; the dashboard and wizard interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AlertAction {
    /// Just hide the alert.
    Close,
    /// Booking succeeded and was acknowledged: clear the wizard.
    ResetWizard,
    /// The user confirmed abandoning the booking flow.
    AbandonBooking,
    /// The user confirmed cancelling an existing appointment.
    CancelAppointment { appointment_id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertResponse {
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    pub alert_id: Uuid,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub confirm_action: AlertAction,
    pub cancel_action: AlertAction,
    pub show_cancel: bool,
}

impl AlertConfig {
    pub fn new(
        kind: AlertKind,
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_action: AlertAction,
        cancel_action: AlertAction,
        show_cancel: bool,
    ) -> Self {
        Self {
            alert_id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message: message.into(),
            confirm_action,
            cancel_action,
            show_cancel,
        }
    }

    /// The action bound to a response, or `None` when the alert has no such button.
    pub fn action_for(&self, response: AlertResponse) -> Option<AlertAction> {
        match response {
            AlertResponse::Confirm => Some(self.confirm_action),
            AlertResponse::Cancel if self.show_cancel => Some(self.cancel_action),
            AlertResponse::Cancel => None,
        }
    }
}
