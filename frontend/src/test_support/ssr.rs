//! Host-side rendering for component tests.

use leptos::*;

/// Keeps resources from fetching while a view renders on the host.
struct ResourceLoadSuppressed;

impl ResourceLoadSuppressed {
    fn enter() -> Self {
        leptos_reactive::suppress_resource_load(true);
        Self
    }
}

impl Drop for ResourceLoadSuppressed {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let out = f();
    runtime.dispose();
    out
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let _suppressed = ResourceLoadSuppressed::enter();
    with_runtime(|| view().into_view().render_to_string().to_string())
}
