use leptos::*;

pub const PANEL_TITLE: &str = "HRMS Lite - Admin Panel";

#[component]
pub fn AdminFrame(children: Children) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold text-fg text-center">{PANEL_TITLE}</h2>
            {children()}
        </div>
    }
}
