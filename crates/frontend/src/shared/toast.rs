use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TOAST_LIFETIME_MS: u32 = 3000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

#[derive(Clone)]
struct ToastEntry {
    id: u64,
    kind: ToastKind,
    message: String,
}

/// Transient notifications stacked in a corner of the screen.
///
/// Every toast auto-dismisses after a few seconds; clicking one
/// dismisses it immediately.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|list| {
            list.push(ToastEntry { id, kind, message });
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| {
            list.retain(|t| t.id != id);
        });
    }
}

/// Renders the toast list at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-host">
            <For
                each=move || svc.toasts.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div
                            class=format!("toast {}", entry.kind.class())
                            on:click=move |_| svc.dismiss(id)
                        >
                            {entry.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
