use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <div class="mx-auto h-12 w-12 text-fg-muted">
                <svg class="mx-auto h-12 w-12 text-fg-muted" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                    <path vector-effect="non-scaling-stroke" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0z" />
                </svg>
            </div>
            <h3 class="mt-2 text-sm font-semibold text-fg">{title}</h3>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-fg-muted">{desc}</p>
            })}
        </div>
    }
}

/// Shown when a successful load returned no employees.
#[component]
pub fn NoEmployees() -> impl IntoView {
    view! {
        <EmptyState
            title="No employees added yet"
            description="Add your first employee to get started"
        />
    }
}
