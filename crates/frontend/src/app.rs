use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Global page/navigation state for the whole app.
    provide_context(AppGlobalContext::new());

    // Centralized modal stack for the record dialogs.
    provide_context(ModalStackService::new());

    // Toast notifications for mutation feedback.
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppShell />
            <ModalHost />
            <ToastHost />
        </AuthProvider>
    }
}
