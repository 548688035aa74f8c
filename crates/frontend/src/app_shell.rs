//! Application shell: auth gate plus the main layout.
//!
//! `AppShell` shows `LoginPage` until a session exists, then the
//! sidebar-and-page layout. A short branded splash overlay fades out
//! once on startup.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::registry::render_page;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Main application layout with sidebar and the active page.
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || render_page(ctx.active_page.get())
        />
    }
}

/// One-shot branded overlay shown on top of the app at startup.
#[component]
fn SplashOverlay() -> impl IntoView {
    let fading = RwSignal::new(false);
    let visible = RwSignal::new(true);

    spawn_local(async move {
        TimeoutFuture::new(900).await;
        fading.set(true);
        TimeoutFuture::new(500).await;
        visible.set(false);
    });

    view! {
        <Show when=move || visible.get()>
            <div
                class="splash-overlay"
                class:splash-overlay--fading=move || fading.get()
            >
                <div class="splash-overlay__brand">
                    <h1>"MEL Dashboard"</h1>
                    <p>"Monitoring, Evaluation and Learning"</p>
                </div>
            </div>
        </Show>
    }
}

/// Application shell - auth gate component.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <SplashOverlay />
        <Show
            when=move || auth_state.get().email.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
