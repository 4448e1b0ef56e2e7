//! Keeps [`AdminState`] in step with the backend.
//!
//! Every mutation is followed by a full [`reload`]; nothing is patched locally.
//! Each reload bumps the state generation, and results carrying an older
//! generation are dropped by the reducer, so the newest reload always wins.

use super::repository::AdminRepository;
use crate::{
    api::{ApiError, AttendanceStatus, DashboardStats, Employee, MarkAttendanceRequest},
    state::admin::{AdminAction, AdminState, AdminStore},
    utils::time::clamp_to_today,
};
use chrono::NaiveDate;
use std::{future::Future, pin::Pin};

pub const LOAD_ERROR_MESSAGE: &str = "Backend server not reachable. Please try again.";
pub const ADD_FAILED_MESSAGE: &str = "Something went wrong";
pub const MARK_FAILED_MESSAGE: &str = "Failed to mark attendance";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete employee";

/// One per-employee attendance fetch issued by a reload.
pub type FanOutTask = Pin<Box<dyn Future<Output = ()>>>;

/// Releases the loading flag of one reload on every exit path.
struct LoadingGuard<'a, S: AdminStore> {
    store: &'a S,
    generation: u64,
}

impl<S: AdminStore> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.store.dispatch(AdminAction::ReloadFinished {
            generation: self.generation,
        });
    }
}

async fn load_snapshot(
    repo: &AdminRepository,
    filter_date: Option<NaiveDate>,
) -> Result<(Vec<Employee>, DashboardStats), ApiError> {
    let employees = repo.fetch_employees().await?;
    let stats = repo.fetch_dashboard(filter_date).await?;
    Ok((employees, stats))
}

pub async fn reload<S: AdminStore>(store: &S, repo: &AdminRepository, spawn: &dyn Fn(FanOutTask)) {
    store.dispatch(AdminAction::ReloadStarted);
    let (generation, filter_date) = store.with_state(|s| (s.generation, s.filter_date));
    let _guard = LoadingGuard { store, generation };
    log::info!("Reload #{} started (filter: {:?})", generation, filter_date);

    match load_snapshot(repo, filter_date).await {
        Ok((employees, stats)) => {
            let ids: Vec<i64> = employees.iter().map(|e| e.id).collect();
            store.dispatch(AdminAction::ReloadSucceeded {
                generation,
                employees,
                stats,
            });
            for employee_id in ids {
                let store = store.clone();
                let repo = repo.clone();
                spawn(Box::pin(async move {
                    fetch_attendance(&store, &repo, generation, employee_id, filter_date).await;
                }));
            }
        }
        Err(err) => {
            log::error!("Reload #{} failed: {}", generation, err);
            store.dispatch(AdminAction::ReloadFailed {
                generation,
                message: LOAD_ERROR_MESSAGE.to_string(),
            });
        }
    }
}

pub async fn fetch_attendance<S: AdminStore>(
    store: &S,
    repo: &AdminRepository,
    generation: u64,
    employee_id: i64,
    filter_date: Option<NaiveDate>,
) {
    match repo.fetch_attendance(employee_id, filter_date).await {
        Ok(records) => store.dispatch(AdminAction::AttendanceLoaded {
            generation,
            employee_id,
            records,
        }),
        Err(err) => {
            log::warn!("Attendance for employee {} failed: {}", employee_id, err);
            store.dispatch(AdminAction::AttendanceFailed {
                generation,
                employee_id,
                message: format!("Could not load attendance: {}", err),
            });
        }
    }
}

/// Re-fetches one card's attendance within the current reload generation.
pub async fn retry_attendance<S: AdminStore>(store: &S, repo: &AdminRepository, employee_id: i64) {
    let (generation, filter_date) = store.with_state(|s| (s.generation, s.filter_date));
    fetch_attendance(store, repo, generation, employee_id, filter_date).await;
}

pub async fn change_filter<S: AdminStore>(
    store: &S,
    repo: &AdminRepository,
    spawn: &dyn Fn(FanOutTask),
    filter_date: Option<NaiveDate>,
) {
    if store.with_state(|s| s.filter_date == filter_date) {
        return;
    }
    store.dispatch(AdminAction::FilterChanged(filter_date));
    reload(store, repo, spawn).await;
}

pub fn select_date<S: AdminStore>(store: &S, employee_id: i64, date: NaiveDate, today: NaiveDate) {
    store.dispatch(AdminAction::SelectedDateChanged {
        employee_id,
        date: clamp_to_today(date, today),
    });
}

/// Submits the form draft. The `Err` message is meant for the user as is.
pub async fn add_employee<S: AdminStore>(
    store: &S,
    repo: &AdminRepository,
    spawn: &dyn Fn(FanOutTask),
) -> Result<(), String> {
    let payload = store.with_state(|s| s.form.clone());
    match repo.create_employee(&payload).await {
        Ok(()) => {
            store.dispatch(AdminAction::FormCleared);
            reload(store, repo, spawn).await;
            Ok(())
        }
        Err(err) => {
            log::warn!("Create employee {} failed: {}", payload.emp_id, err);
            Err(err
                .server_message()
                .unwrap_or(ADD_FAILED_MESSAGE)
                .to_string())
        }
    }
}

pub async fn mark_attendance<S: AdminStore>(
    store: &S,
    repo: &AdminRepository,
    spawn: &dyn Fn(FanOutTask),
    employee_id: i64,
    status: AttendanceStatus,
    today: NaiveDate,
) -> Result<(), String> {
    let date = store.with_state(|s: &AdminState| s.resolved_date(employee_id, today));
    let payload = MarkAttendanceRequest {
        employee_id,
        date,
        status,
    };
    match repo.mark_attendance(&payload).await {
        Ok(()) => {
            reload(store, repo, spawn).await;
            Ok(())
        }
        Err(err) => {
            log::warn!("Mark {} for employee {} failed: {}", status, employee_id, err);
            Err(MARK_FAILED_MESSAGE.to_string())
        }
    }
}

/// Deletes without confirmation and reloads whatever the outcome.
pub async fn delete_employee<S: AdminStore>(
    store: &S,
    repo: &AdminRepository,
    spawn: &dyn Fn(FanOutTask),
    employee_id: i64,
) -> Result<(), String> {
    let result = repo.delete_employee(employee_id).await;
    reload(store, repo, spawn).await;
    result.map_err(|err| {
        log::warn!("Delete employee {} failed: {}", employee_id, err);
        DELETE_FAILED_MESSAGE.to_string()
    })
}
