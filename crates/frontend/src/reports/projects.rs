use contracts::reports::progress::ReportData;
use leptos::prelude::*;

use crate::shared::charts::{BarChart, LineChart, SeriesDatum};
use crate::shared::icons::icon;

use super::RecentProjectsTable;

#[component]
fn CountCard(label: &'static str, count: u32, icon_name: &'static str) -> impl IntoView {
    view! {
        <div class="card count-card">
            <div class="count-card__icon">{icon(icon_name)}</div>
            <div class="count-card__body">
                <p class="count-card__label">{label}</p>
                <p class="count-card__value">{count}</p>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsTab(data: ReportData) -> impl IntoView {
    let type_labels: Vec<String> = data.projects.by_type.iter().map(|v| v.name.clone()).collect();
    let type_values: Vec<f64> = data.projects.by_type.iter().map(|v| v.value).collect();

    let months: Vec<String> = data
        .projects
        .timeline
        .iter()
        .map(|p| p.month.clone())
        .collect();
    let timeline_series = vec![
        SeriesDatum::new(
            "Total Projects",
            "#8b4513",
            data.projects.timeline.iter().map(|p| p.projects).collect(),
        ),
        SeriesDatum::new(
            "Completion Rate",
            "#d97706",
            data.projects
                .timeline
                .iter()
                .map(|p| p.completion)
                .collect(),
        ),
    ];

    view! {
        <div class="report-tab">
            <div class="stat-grid">
                <CountCard
                    label="Total Projects"
                    count=data.overview.total_projects
                    icon_name="target"
                />
                <CountCard
                    label="Active Projects"
                    count=data.overview.active_projects
                    icon_name="folder"
                />
                <CountCard
                    label="Completed"
                    count=data.overview.completed_projects
                    icon_name="award"
                />
                <CountCard
                    label="Planned"
                    count=data.overview.planned_projects
                    icon_name="file-text"
                />
            </div>

            <div class="chart-grid">
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Project Distribution by Type"</h3>
                    <BarChart labels=type_labels values=type_values color="#8b4513".to_string()/>
                </div>
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Project Completion Trends"</h3>
                    <LineChart labels=months series=timeline_series/>
                </div>
            </div>

            <div class="card">
                <h3 class="chart-card__title">"Project Details"</h3>
                <RecentProjectsTable projects=data.projects.recent_projects.clone()/>
            </div>
        </div>
    }
}
