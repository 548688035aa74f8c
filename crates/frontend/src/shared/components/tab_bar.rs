use leptos::prelude::*;

/// Row of tab buttons bound to a key signal.
///
/// `tabs` is a list of (key, label) pairs; the tab whose key equals the
/// signal value is highlighted.
#[component]
pub fn TabBar(tabs: Vec<(String, String)>, active: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="tab-bar">
            {tabs
                .into_iter()
                .map(|(key, label)| {
                    let key_for_class = key.clone();
                    let key_for_click = key.clone();
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || active.get() == key_for_class
                            on:click=move |_| active.set(key_for_click.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
