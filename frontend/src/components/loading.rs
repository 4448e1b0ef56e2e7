use leptos::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="text-center my-12" role="status">
            <div class="mx-auto h-8 w-8 animate-spin rounded-full border-4 border-action-primary-bg border-t-transparent"></div>
            <p class="mt-2 text-sm text-fg-muted">{"Loading employees..."}</p>
        </div>
    }
}
