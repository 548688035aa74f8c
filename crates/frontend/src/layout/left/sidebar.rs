//! Sidebar with the fixed page list, collapse toggle and logout.

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

fn page_icon(page: Page) -> &'static str {
    match page {
        Page::Dashboard => "layout-dashboard",
        Page::Projects => "folder",
        Page::Partners => "users",
        Page::Scorecard => "target",
        Page::Reports => "file-text",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let user_email = move || auth_state.get().email.unwrap_or_default();
    let collapsed = move || !ctx.sidebar_open.get();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__header">
                <Show when=move || !collapsed()>
                    <div class="app-sidebar__brand">
                        <h2>"MEL Dashboard"</h2>
                    </div>
                </Show>
                <button
                    class="app-sidebar__toggle"
                    on:click=move |_| ctx.toggle_sidebar()
                    title="Toggle sidebar"
                >
                    {icon("menu")}
                </button>
            </div>

            <nav class="app-sidebar__nav">
                {Page::all().into_iter().map(|page| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.active_page.get() == page
                            on:click=move |_| ctx.navigate(page)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(page_icon(page))}
                                <Show when=move || !collapsed()>
                                    <span>{page.title()}</span>
                                </Show>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </nav>

            <div class="app-sidebar__footer">
                <Show when=move || !collapsed()>
                    <div class="app-sidebar__user">
                        {icon("user")}
                        <span class="app-sidebar__user-email">{user_email}</span>
                    </div>
                </Show>
                <div
                    class="app-sidebar__item"
                    on:click=move |_| do_logout(&ctx, &set_auth_state)
                >
                    <div class="app-sidebar__item-content">
                        {icon("log-out")}
                        <Show when=move || !collapsed()>
                            <span>"Logout"</span>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
