use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// The five top-level views reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Projects,
    Partners,
    Scorecard,
    Reports,
}

impl Page {
    /// Stable key used in the URL and the sidebar.
    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Projects => "projects",
            Page::Partners => "partners",
            Page::Scorecard => "scorecard",
            Page::Reports => "reports",
        }
    }

    /// Unknown keys fall back to the dashboard.
    pub fn from_key(key: &str) -> Self {
        match key {
            "projects" => Page::Projects,
            "partners" => Page::Partners,
            "scorecard" => Page::Scorecard,
            "reports" => Page::Reports,
            _ => Page::Dashboard,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Projects => "Projects",
            Page::Partners => "Partners",
            Page::Scorecard => "Scorecard",
            Page::Reports => "Reports",
        }
    }

    pub fn all() -> Vec<Page> {
        vec![
            Page::Dashboard,
            Page::Projects,
            Page::Partners,
            Page::Scorecard,
            Page::Reports,
        ]
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(Page::Dashboard),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, page: Page) {
        leptos::logging::log!("navigate: page='{}'", page.key());
        self.active_page.set(page);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|val| *val = !*val);
    }

    /// Mirror the active page into the URL as `?page=<key>` and pick the
    /// initial page from it, so a reload lands on the same view.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page_key) = params.get("page") {
            self.active_page.set(Page::from_key(page_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let page_key = this.active_page.get().key();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                page_key.to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_key_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_key(page.key()), page);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_dashboard() {
        assert_eq!(Page::from_key("settings"), Page::Dashboard);
        assert_eq!(Page::from_key(""), Page::Dashboard);
    }
}
