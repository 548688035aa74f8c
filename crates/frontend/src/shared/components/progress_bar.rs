use leptos::prelude::*;

/// Thin horizontal progress indicator, 0..=100.
#[component]
pub fn ProgressBar(
    #[prop(into)] value: Signal<u8>,
    #[prop(optional)] color: Option<String>,
) -> impl IntoView {
    let fill_style = move || {
        let pct = value.get().min(100);
        match &color {
            Some(c) => format!("width: {pct}%; background-color: {c};"),
            None => format!("width: {pct}%;"),
        }
    };

    view! {
        <div class="progress-bar">
            <div class="progress-bar__fill" style=fill_style></div>
        </div>
    }
}
