use leptos::*;

/// Replaces the whole panel while a load error is active.
#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div
            class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-12 text-center"
            role="alert"
        >
            <div class="font-bold">{message}</div>
        </div>
    }
}

#[component]
pub fn InlineErrorMessage(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let extra = children.map(|children| children());
    view! {
        <div
            class="bg-status-error-bg border border-status-error-border text-status-error-text px-3 py-2 rounded text-sm my-2 flex items-center justify-between gap-2"
            class:hidden=move || error.get().is_none()
        >
            <span>{move || error.get().unwrap_or_default()}</span>
            {extra}
        </div>
    }
}
