use crate::api::{AttendanceRecord, AttendanceStatus, Employee};
use crate::components::error::InlineErrorMessage;
use crate::utils::time::format_date;
use chrono::NaiveDate;
use leptos::*;

const BUTTON: &str = "inline-flex items-center justify-center rounded-md px-3 py-1.5 text-sm font-semibold";

/// One card per employee: marking controls plus the attendance history.
#[component]
pub fn EmployeeCard(
    employee: Employee,
    #[prop(into)] records: Signal<Vec<AttendanceRecord>>,
    #[prop(into)] load_error: Signal<Option<String>>,
    #[prop(into)] selected_date: Signal<NaiveDate>,
    today: NaiveDate,
    on_select_date: Callback<String>,
    on_mark: Callback<AttendanceStatus>,
    on_delete: Callback<()>,
    on_retry: Callback<()>,
) -> impl IntoView {
    let Employee {
        emp_id,
        name,
        department,
        present_days,
        ..
    } = employee;

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 mb-4">
            <h6 class="text-base font-semibold text-fg">{format!("{} ({})", name, emp_id)}</h6>
            <p class="text-sm text-fg-muted">{department}</p>
            <p class="text-sm text-fg-muted">{format!("Present Days: {}", present_days)}</p>
            <div class="flex flex-wrap items-center gap-2 mt-3">
                <input
                    type="date"
                    class="rounded-md border border-form-control-border bg-form-control-bg px-2 py-1 text-fg"
                    max=format_date(today)
                    prop:value=move || format_date(selected_date.get())
                    on:change=move |ev| on_select_date.call(event_target_value(&ev))
                />
                <button
                    class=format!("{} bg-status-success-bg text-status-success-text", BUTTON)
                    on:click=move |_| on_mark.call(AttendanceStatus::Present)
                >
                    {"Present"}
                </button>
                <button
                    class=format!("{} bg-status-warning-bg text-status-warning-text", BUTTON)
                    on:click=move |_| on_mark.call(AttendanceStatus::Absent)
                >
                    {"Absent"}
                </button>
                <button
                    class=format!("{} bg-action-danger-bg text-text-inverse", BUTTON)
                    on:click=move |_| on_delete.call(())
                >
                    {"Delete"}
                </button>
            </div>
            <InlineErrorMessage error=load_error>
                <button class="text-sm underline" on:click=move |_| on_retry.call(())>
                    {"Retry"}
                </button>
            </InlineErrorMessage>
            <ul class="mt-3 space-y-1 text-sm text-fg">
                {move || {
                    records
                        .get()
                        .into_iter()
                        .map(|record| {
                            view! {
                                <li>{format!("{} - {}", format_date(record.date), record.status)}</li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
