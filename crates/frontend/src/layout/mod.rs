pub mod global_context;
pub mod left;
pub mod registry;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+---------------------------+
/// |  Sidebar  |         Content           |
/// |  (Left)   |         (Center)          |
/// +-----------+---------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    {move || center()}
                </div>
            </div>
        </div>
    }
}
