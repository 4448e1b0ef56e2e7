use leptos::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <main class="mx-auto my-10 max-w-4xl px-4">{children()}</main>
        </div>
    }
}
