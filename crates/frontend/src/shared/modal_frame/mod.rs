use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal frame container (overlay + positioned surface).
///
/// Renders no header or action buttons of its own: each dialog draws its
/// own header so create and edit variants can differ freely.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close (overlay click, close by host, etc.).
    on_close: Callback<()>,
    /// z-index for overlay stacking (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // We only close if both press and release happened on the overlay itself.
    // This prevents closing when user selects text inside the modal and releases the mouse outside.
    let handle_overlay_mouse_down = {
        let is_direct_overlay_event = is_direct_overlay_event;
        move |ev: ev::MouseEvent| {
            overlay_mouse_down.set(is_direct_overlay_event(&ev));
        }
    };

    let handle_overlay_click = {
        let is_direct_overlay_event = is_direct_overlay_event;
        move |ev: ev::MouseEvent| {
            let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
            overlay_mouse_down.set(false);
            if should_close {
                // Defer close to next tick: avoids Leptos event delegation calling a dropped handler
                // when the overlay is removed synchronously during its own click dispatch.
                let on_close = on_close;
                spawn_local(async move {
                    TimeoutFuture::new(0).await;
                    on_close.run(());
                });
            }
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            class="modal-overlay"
            style=move || format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=move || {
                    let cls = modal_class.clone().unwrap_or_default();
                    if cls.is_empty() { "modal".to_string() } else { format!("modal {cls}") }
                }
                style="position: relative;"
                on:click=stop_propagation
            >
                {children()}
            </div>
        </div>
    }
}
