use contracts::reports::progress::ReportData;
use leptos::prelude::*;

use crate::shared::charts::{LineChart, PieChart, SeriesDatum, SliceDatum};

use super::{RecentProjectsTable, StatusDistributionTable};

#[component]
pub fn OverviewTab(data: ReportData, #[prop(into)] show_tables: Signal<bool>) -> impl IntoView {
    let by_status: Vec<SliceDatum> = data
        .projects
        .by_status
        .iter()
        .map(|v| SliceDatum::new(v.name.clone(), v.value, v.color.clone()))
        .collect();
    let status_rows = data.projects.by_status.clone();

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
                {data
                    .overview
                    .metrics
                    .iter()
                    .map(|metric| {
                        let badge_class = if metric.increase {
                            "badge badge--trend-up"
                        } else {
                            "badge badge--trend-down"
                        };
                        view! {
                            <div class="card metric-card">
                                <p class="metric-card__title">{metric.title.clone()}</p>
                                <div class="metric-card__row">
                                    <span class="metric-card__value">{metric.value.clone()}</span>
                                    <span class=badge_class>{metric.change.clone()}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="chart-grid">
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Project Status Distribution"</h3>
                    <Show
                        when=move || !show_tables.get()
                        fallback=move || {
                            view! { <StatusDistributionTable rows=status_rows.clone()/> }
                        }
                    >
                        <PieChart data=by_status.clone()/>
                    </Show>
                </div>
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Project Growth Trend"</h3>
                    <LineChart labels=months series=timeline_series/>
                </div>
            </div>

            <div class="card">
                <h3 class="chart-card__title">"Recent Project Activities"</h3>
                <RecentProjectsTable projects=data.projects.recent_projects.clone()/>
            </div>
        </div>
    }
}
