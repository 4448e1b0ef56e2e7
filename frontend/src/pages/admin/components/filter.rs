use crate::utils::time::format_date;
use chrono::NaiveDate;
use leptos::*;

#[component]
pub fn DateFilter(
    #[prop(into)] value: Signal<Option<NaiveDate>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="mb-6">
            <label for="filter-date" class="block text-sm font-medium text-fg-muted mb-1">
                {"Filter by date"}
            </label>
            <input
                id="filter-date"
                type="date"
                class="w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-fg"
                prop:value=move || value.get().map(format_date).unwrap_or_default()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            />
        </div>
    }
}
