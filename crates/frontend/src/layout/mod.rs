pub mod global_context;
pub mod header;
pub mod sidebar;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------+
/// |           |        Header          |
/// |  Sidebar  +------------------------+
/// |           |        Content         |
/// +-----------+------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <aside class="app-sidebar">
                {left()}
            </aside>
            <div class="app-main">
                <header::Header />
                <main class="app-content">
                    {center()}
                </main>
            </div>
        </div>
    }
}
