//! Landing page: program KPIs, activities and budget at a glance

pub mod activity;
pub mod budget;
pub mod kpi;

use leptos::prelude::*;

use crate::shared::components::TabBar;
use activity::ActivitiesTab;
use budget::BudgetTab;
use kpi::PerformanceTab;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let active_tab = RwSignal::new("performance".to_string());

    let tabs = vec![
        ("performance".to_string(), "Performance".to_string()),
        ("activities".to_string(), "Activities".to_string()),
        ("budget".to_string(), "Budget".to_string()),
    ];

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Dashboard"</h1>
                    <p class="header__subtitle">
                        "Monitoring, evaluation and learning across the program"
                    </p>
                </div>
            </div>

            <TabBar tabs=tabs active=active_tab/>

            <Show when=move || active_tab.get() == "performance">
                <PerformanceTab/>
            </Show>
            <Show when=move || active_tab.get() == "activities">
                <ActivitiesTab/>
            </Show>
            <Show when=move || active_tab.get() == "budget">
                <BudgetTab/>
            </Show>
        </div>
    }
}
