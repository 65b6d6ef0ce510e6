// libs/patient-cell/tests/sessions_test.rs

use std::time::Duration;

use assert_matches::assert_matches;
use chrono::NaiveDate;

use alert_cell::{AlertKind, AlertResponse};
use appointment_cell::{SimulatedBookingService, WizardError};
use doctor_cell::DoctorDirectoryService;
use patient_cell::*;

fn ready_to_confirm(dashboard: &mut PatientDashboard, directory: &DoctorDirectoryService) {
    ready_with_doctor(dashboard, directory, 2);
}

fn ready_with_doctor(dashboard: &mut PatientDashboard, directory: &DoctorDirectoryService, doctor_id: u32) {
    dashboard.start_booking();
    dashboard.select_doctor(directory, doctor_id).unwrap();
    dashboard
        .select_date(directory, NaiveDate::from_ymd_opt(2025, 8, 5).unwrap())
        .unwrap();
    dashboard.select_time(directory, "10:30 AM").unwrap();
    dashboard.continue_booking().unwrap();
}

#[tokio::test]
async fn test_second_confirm_while_submitting_is_refused() {
    let store = DashboardSessionStore::new();
    let directory = DoctorDirectoryService::new();
    let id = store.create().await.session_id;
    store
        .update(id, |d| {
            ready_to_confirm(d, &directory);
            Ok(())
        })
        .await
        .unwrap();

    let slow = SimulatedBookingService::new(Duration::from_millis(200));
    let first = {
        let store = store.clone();
        let slow = slow.clone();
        tokio::spawn(async move { store.confirm_booking(id, &slow).await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    let snapshot = store.snapshot(id).await.unwrap();
    assert!(snapshot.wizard.is_submitting);

    let second = store.confirm_booking(id, &slow).await;
    assert_matches!(
        second,
        Err(DashboardError::Wizard(WizardError::InvalidTransition { .. }))
            | Err(DashboardError::Wizard(WizardError::SubmissionInFlight))
    );

    let done = first.await.unwrap().unwrap();
    assert_eq!(done.wizard.state, "booked");
    assert_eq!(done.alert.unwrap().kind, AlertKind::Success);
}

#[tokio::test]
async fn test_result_after_abandon_is_discarded() {
    let store = DashboardSessionStore::new();
    let directory = DoctorDirectoryService::new();
    let id = store.create().await.session_id;
    store
        .update(id, |d| {
            ready_to_confirm(d, &directory);
            Ok(())
        })
        .await
        .unwrap();

    let slow = SimulatedBookingService::new(Duration::from_millis(200));
    let pending = {
        let store = store.clone();
        tokio::spawn(async move { store.confirm_booking(id, &slow).await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    store
        .update(id, |d| d.request_cancel_booking())
        .await
        .unwrap();
    let snapshot = store
        .update(id, |d| {
            d.respond_to_alert(AlertResponse::Confirm);
            Ok(())
        })
        .await
        .unwrap();
    assert!(!snapshot.wizard.open);

    let finished = pending.await.unwrap().unwrap();
    assert!(!finished.wizard.open);
    assert_eq!(finished.wizard.state, "selecting_doctor");
    assert!(finished.alert.is_none());
}

#[tokio::test]
async fn test_abandoned_result_does_not_complete_a_newer_booking() {
    let store = DashboardSessionStore::new();
    let directory = DoctorDirectoryService::new();
    let id = store.create().await.session_id;
    store
        .update(id, |d| {
            ready_with_doctor(d, &directory, 1);
            Ok(())
        })
        .await
        .unwrap();

    let first = {
        let store = store.clone();
        let slow = SimulatedBookingService::new(Duration::from_millis(200));
        tokio::spawn(async move { store.confirm_booking(id, &slow).await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    store.update(id, |d| d.request_cancel_booking()).await.unwrap();
    store
        .update(id, |d| {
            d.respond_to_alert(AlertResponse::Confirm);
            ready_with_doctor(d, &directory, 2);
            Ok(())
        })
        .await
        .unwrap();

    let second = {
        let store = store.clone();
        let slower = SimulatedBookingService::new(Duration::from_millis(400));
        tokio::spawn(async move { store.confirm_booking(id, &slower).await })
    };

    let after_first = first.await.unwrap().unwrap();
    assert!(after_first.wizard.is_submitting);
    assert!(after_first.alert.is_none());
    assert_eq!(after_first.wizard.draft.doctor.unwrap().id, 2);

    let done = second.await.unwrap().unwrap();
    assert_eq!(done.wizard.state, "booked");
    let alert = done.alert.unwrap();
    assert!(alert.message.contains("Dr. Michael Chen"));
    assert!(!alert.message.contains("Dr. Sarah Johnson"));
}

#[tokio::test]
async fn test_start_booking_after_unacknowledged_success_starts_over() {
    let store = DashboardSessionStore::new();
    let directory = DoctorDirectoryService::new();
    let id = store.create().await.session_id;
    store
        .update(id, |d| {
            ready_to_confirm(d, &directory);
            Ok(())
        })
        .await
        .unwrap();
    let booked = store
        .confirm_booking(id, &SimulatedBookingService::new(Duration::ZERO))
        .await
        .unwrap();
    assert_eq!(booked.wizard.state, "booked");

    let snapshot = store
        .update(id, |d| {
            d.show_calendar();
            d.respond_to_alert(AlertResponse::Confirm);
            d.start_booking();
            Ok(())
        })
        .await
        .unwrap();
    assert!(snapshot.wizard.open);
    assert_eq!(snapshot.wizard.step, 1);
    assert_eq!(snapshot.wizard.state, "selecting_doctor");
    assert!(snapshot.wizard.draft.is_empty());
}

#[tokio::test]
async fn test_session_lifecycle() {
    let store = DashboardSessionStore::new();
    assert!(store.is_empty().await);

    let a = store.create().await.session_id;
    let b = store.create().await.session_id;
    assert_ne!(a, b);
    assert_eq!(store.len().await, 2);

    assert!(store.remove(a).await);
    assert!(!store.remove(a).await);
    assert_matches!(store.snapshot(a).await, Err(DashboardError::SessionNotFound(_)));
    assert!(store.snapshot(b).await.is_ok());
}

#[test]
fn test_unknown_appointment() {
    let mut dashboard = PatientDashboard::new();
    assert_matches!(
        dashboard.reschedule(9),
        Err(DashboardError::AppointmentNotFound(9))
    );
    assert!(!dashboard.alerts().is_visible());
}

#[test]
fn test_respond_without_alert_is_noop() {
    let mut dashboard = PatientDashboard::new();
    assert_eq!(dashboard.respond_to_alert(AlertResponse::Confirm), None);
    assert_eq!(dashboard.active_view(), DashboardView::Dashboard);
}
