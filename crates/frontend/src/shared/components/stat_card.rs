use crate::shared::components::ProgressBar;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Summary card used at the top of the dashboard pages.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    /// Change label relative to last period, e.g. "+12%"
    trend: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Progress toward the period target, 0..=100
    progress: u8,
    #[prop(optional)] description: Option<String>,
) -> impl IntoView {
    let trend_class = if trend.starts_with('-') {
        "stat-card__trend stat-card__trend--down"
    } else {
        "stat-card__trend stat-card__trend--up"
    };
    let trend_icon = if trend.starts_with('-') {
        "trending-down"
    } else {
        "trending-up"
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <div class="stat-card__icon">{icon(&icon_name)}</div>
                <span class=trend_class>{icon(trend_icon)} {trend}</span>
            </div>
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__label">{title}</div>
            <ProgressBar value=progress/>
            {description.map(|d| view! { <div class="stat-card__subtitle">{d}</div> })}
        </div>
    }
}
