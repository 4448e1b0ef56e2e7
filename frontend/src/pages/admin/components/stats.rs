use crate::api::DashboardStats;
use leptos::*;

#[component]
pub fn DashboardStatsRow(#[prop(into)] stats: Signal<DashboardStats>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 gap-4 text-center mb-6">
            <div class="rounded-lg bg-surface-elevated shadow p-4 text-fg">
                {move || format!("Employees: {}", stats.get().total_employees)}
            </div>
            <div class="rounded-lg bg-surface-elevated shadow p-4 text-status-success-text">
                {move || format!("Present: {}", stats.get().present)}
            </div>
            <div class="rounded-lg bg-surface-elevated shadow p-4 text-status-error-text">
                {move || format!("Absent: {}", stats.get().absent)}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stats_row_shows_backend_figures_verbatim() {
        let html = render_to_string(|| {
            let stats = create_rw_signal(DashboardStats {
                total_employees: 12,
                present: 9,
                absent: 4,
            });
            view! { <DashboardStatsRow stats=stats /> }
        });
        assert!(html.contains("Employees: 12"));
        assert!(html.contains("Present: 9"));
        assert!(html.contains("Absent: 4"));
    }
}
