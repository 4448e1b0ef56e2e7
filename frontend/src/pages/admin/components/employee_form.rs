use crate::api::{EmployeeField, NewEmployee};
use leptos::*;

#[component]
pub fn AddEmployeeForm(
    #[prop(into)] draft: Signal<NewEmployee>,
    #[prop(into)] pending: Signal<bool>,
    on_input: Callback<(EmployeeField, String)>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 mb-6 space-y-2">
            <h5 class="text-lg font-medium text-fg">{"Add Employee"}</h5>
            {EmployeeField::ALL
                .into_iter()
                .map(|field| {
                    view! {
                        <input
                            name=field.key()
                            placeholder=field.key()
                            class="w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-fg"
                            prop:value=move || draft.with(|d| d.field(field).to_string())
                            on:input=move |ev| on_input.call((field, event_target_value(&ev)))
                        />
                    }
                })
                .collect_view()}
            <button
                class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text"
                class:opacity-50=move || pending.get()
                disabled=move || pending.get()
                on:click=move |_| on_submit.call(())
            >
                {"Add Employee"}
            </button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(pending: bool) -> String {
        render_to_string(move || {
            let draft = create_rw_signal(NewEmployee::default());
            view! {
                <AddEmployeeForm
                    draft=draft
                    pending=Signal::derive(move || pending)
                    on_input=Callback::new(|_| {})
                    on_submit=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn form_renders_one_input_per_field() {
        let html = render(false);
        for field in EmployeeField::ALL {
            assert!(html.contains(&format!("placeholder=\"{}\"", field.key())));
        }
        assert!(html.contains("Add Employee"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn submit_button_is_disabled_while_pending() {
        let html = render(true);
        assert!(html.contains("disabled"));
        assert!(html.contains("opacity-50"));
    }
}
