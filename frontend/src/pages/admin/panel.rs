use crate::components::{
    empty_state::NoEmployees, error::ErrorBanner, layout::Layout, loading::LoadingIndicator,
};
use crate::pages::admin::{
    components::{AddEmployeeForm, DashboardStatsRow, DateFilter, EmployeeCard},
    layout::AdminFrame,
    view_model::{use_admin_view_model, AdminViewModel},
};
use crate::utils::time::today_local;
use leptos::*;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let vm = use_admin_view_model();
    let state = vm.state;
    let loading = create_memo(move |_| state.with(|s| s.loading));
    let error = create_memo(move |_| state.with(|s| s.error.clone()));

    view! {
        <Layout>
            {move || {
                if loading.get() {
                    view! { <LoadingIndicator /> }.into_view()
                } else if let Some(message) = error.get() {
                    view! { <ErrorBanner message=message /> }.into_view()
                } else {
                    view! { <AdminContent vm=vm.clone() /> }.into_view()
                }
            }}
        </Layout>
    }
}

#[component]
fn AdminContent(vm: AdminViewModel) -> impl IntoView {
    let state = vm.state;
    let stats = Signal::derive(move || state.with(|s| s.stats));
    let filter_date = Signal::derive(move || state.with(|s| s.filter_date));
    let draft = Signal::derive(move || state.with(|s| s.form.clone()));
    let employees = create_memo(move |_| state.with(|s| s.employees.clone()));
    let today = today_local();
    let card_vm = vm.clone();

    view! {
        <AdminFrame>
            <DashboardStatsRow stats=stats />
            <DateFilter value=filter_date on_change=Callback::new(vm.on_filter_change()) />
            <AddEmployeeForm
                draft=draft
                pending=vm.add_action.pending()
                on_input=Callback::new(vm.on_field_input())
                on_submit=Callback::new(vm.on_submit())
            />
            <Show when=move || employees.with(Vec::is_empty)>
                <NoEmployees />
            </Show>
            <For
                each=move || employees.get()
                key=|employee| employee.clone()
                children=move |employee| {
                    let id = employee.id;
                    view! {
                        <EmployeeCard
                            employee=employee
                            records=Signal::derive(move || {
                                state.with(|s| s.attendance_for(id).to_vec())
                            })
                            load_error=Signal::derive(move || {
                                state.with(|s| s.attendance_errors.get(&id).cloned())
                            })
                            selected_date=Signal::derive(move || {
                                state.with(|s| s.resolved_date(id, today))
                            })
                            today=today
                            on_select_date=Callback::new(card_vm.on_select_date(id))
                            on_mark=Callback::new(card_vm.on_mark(id))
                            on_delete=Callback::new(card_vm.on_delete(id))
                            on_retry=Callback::new(card_vm.on_retry_attendance(id))
                        />
                    }
                }
            />
        </AdminFrame>
    }
}
