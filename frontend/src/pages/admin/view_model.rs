use super::{
    repository::AdminRepository,
    sync::{self, FanOutTask},
};
use crate::api::{AttendanceStatus, EmployeeField};
use crate::state::admin::{use_admin_state, AdminAction, AdminState, AdminStore};
use crate::utils::{
    notify,
    time::{parse_date_input, today_local},
};
use leptos::*;

fn spawn_fan_out(task: FanOutTask) {
    spawn_local(task);
}

#[derive(Clone)]
pub struct AdminViewModel {
    pub state: RwSignal<AdminState>,
    pub repository: AdminRepository,
    pub add_action: Action<(), Result<(), String>>,
    pub mark_action: Action<(i64, AttendanceStatus), Result<(), String>>,
    pub delete_action: Action<i64, Result<(), String>>,
}

impl AdminViewModel {
    pub fn new(repository: AdminRepository) -> Self {
        let state = use_admin_state();

        let repo_add = repository.clone();
        let add_action = create_action(move |_: &()| {
            let repo = repo_add.clone();
            async move { sync::add_employee(&state, &repo, &spawn_fan_out).await }
        });

        let repo_mark = repository.clone();
        let mark_action = create_action(move |(employee_id, status): &(i64, AttendanceStatus)| {
            let repo = repo_mark.clone();
            let (employee_id, status) = (*employee_id, *status);
            async move {
                sync::mark_attendance(
                    &state,
                    &repo,
                    &spawn_fan_out,
                    employee_id,
                    status,
                    today_local(),
                )
                .await
            }
        });

        let repo_delete = repository.clone();
        let delete_action = create_action(move |employee_id: &i64| {
            let repo = repo_delete.clone();
            let employee_id = *employee_id;
            async move { sync::delete_employee(&state, &repo, &spawn_fan_out, employee_id).await }
        });

        for value in [
            add_action.value(),
            mark_action.value(),
            delete_action.value(),
        ] {
            create_effect(move |_| {
                if let Some(Err(message)) = value.get() {
                    notify::alert(&message);
                }
            });
        }

        let vm = Self {
            state,
            repository,
            add_action,
            mark_action,
            delete_action,
        };

        {
            let vm = vm.clone();
            create_effect(move |_| vm.reload());
        }

        vm
    }

    pub fn reload(&self) {
        let state = self.state;
        let repo = self.repository.clone();
        spawn_local(async move { sync::reload(&state, &repo, &spawn_fan_out).await });
    }

    pub fn on_filter_change(&self) -> impl Fn(String) {
        let state = self.state;
        let repo = self.repository.clone();
        move |raw| match parse_date_input(&raw) {
            Ok(filter_date) => {
                let repo = repo.clone();
                spawn_local(async move {
                    sync::change_filter(&state, &repo, &spawn_fan_out, filter_date).await
                });
            }
            Err(err) => log::warn!("Ignoring filter input {:?}: {}", raw, err),
        }
    }

    pub fn on_field_input(&self) -> impl Fn((EmployeeField, String)) {
        let state = self.state;
        move |(field, value)| state.dispatch(AdminAction::FormEdited { field, value })
    }

    pub fn on_submit(&self) -> impl Fn(()) {
        let add_action = self.add_action;
        move |_| add_action.dispatch(())
    }

    pub fn on_select_date(&self, employee_id: i64) -> impl Fn(String) {
        let state = self.state;
        move |raw| {
            let today = today_local();
            match parse_date_input(&raw) {
                Ok(date) => sync::select_date(&state, employee_id, date.unwrap_or(today), today),
                Err(err) => log::warn!("Ignoring attendance date {:?}: {}", raw, err),
            }
        }
    }

    pub fn on_mark(&self, employee_id: i64) -> impl Fn(AttendanceStatus) {
        let mark_action = self.mark_action;
        move |status| mark_action.dispatch((employee_id, status))
    }

    pub fn on_delete(&self, employee_id: i64) -> impl Fn(()) {
        let delete_action = self.delete_action;
        move |_| delete_action.dispatch(employee_id)
    }

    pub fn on_retry_attendance(&self, employee_id: i64) -> impl Fn(()) {
        let state = self.state;
        let repo = self.repository.clone();
        move |_| {
            let repo = repo.clone();
            spawn_local(async move { sync::retry_attendance(&state, &repo, employee_id).await });
        }
    }
}

pub fn use_admin_view_model() -> AdminViewModel {
    match use_context::<AdminViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AdminViewModel::new(AdminRepository::new());
            provide_context(vm.clone());
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::ssr::with_runtime;
    use chrono::NaiveDate;
    use std::rc::Rc;

    fn view_model() -> AdminViewModel {
        let client = ApiClient::new_with_base_url("http://localhost:0");
        AdminViewModel::new(AdminRepository::new_with_client(Rc::new(client)))
    }

    #[test]
    fn view_model_shares_state_from_context() {
        with_runtime(|| {
            let state = use_admin_state();
            let vm = view_model();
            state.update(|s| s.loading = false);
            assert!(!vm.state.get_untracked().loading);
        });
    }

    #[test]
    fn field_input_updates_form_draft() {
        with_runtime(|| {
            let vm = view_model();
            let on_input = vm.on_field_input();
            on_input((EmployeeField::Email, "ada@example.com".into()));
            assert_eq!(vm.state.get_untracked().form.email, "ada@example.com");
        });
    }

    #[test]
    fn select_date_caps_at_today_and_blank_resets() {
        with_runtime(|| {
            let vm = view_model();
            let today = today_local();
            let on_select = vm.on_select_date(4);

            on_select("2020-02-29".into());
            assert_eq!(
                vm.state.get_untracked().resolved_date(4, today),
                NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()
            );

            on_select("9999-12-31".into());
            assert_eq!(vm.state.get_untracked().resolved_date(4, today), today);

            on_select("2020-02-29".into());
            on_select(String::new());
            assert_eq!(vm.state.get_untracked().resolved_date(4, today), today);

            on_select("not a date".into());
            assert_eq!(vm.state.get_untracked().resolved_date(4, today), today);
        });
    }

    #[test]
    fn use_admin_view_model_reuses_provided_instance() {
        with_runtime(|| {
            let vm = view_model();
            provide_context(vm.clone());
            vm.state.update(|s| s.error = Some("x".into()));
            let again = use_admin_view_model();
            assert_eq!(again.state.get_untracked().error.as_deref(), Some("x"));
        });
    }
}
