// =====================================================================================
// ALERT CELL - SINGLE-SLOT NOTIFICATION DISPATCHER
// =====================================================================================
//
// One modal alert is visible at a time. Raising a new alert replaces the
// current one; responding hides it and hands the stored action back to the
// owner, which decides what the action means.
//
// =====================================================================================

pub mod models;
pub mod services;

pub use models::{AlertAction, AlertConfig, AlertKind, AlertResponse};
pub use services::AlertDispatcher;
