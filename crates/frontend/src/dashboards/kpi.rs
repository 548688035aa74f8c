use contracts::reports::dashboard::KpiData;
use leptos::prelude::*;

use crate::shared::charts::{LineChart, PieChart, RadarChart, SeriesDatum, SliceDatum};
use crate::shared::components::StatCard;

#[component]
pub fn PerformanceTab() -> impl IntoView {
    let data = KpiData::fixture();

    let months: Vec<String> = data.monthly.iter().map(|m| m.month.clone()).collect();
    let kpi_series = vec![
        SeriesDatum::new(
            "Completion",
            "#8b4513",
            data.monthly.iter().map(|m| m.completion).collect(),
        ),
        SeriesDatum::new(
            "Impact",
            "#d97706",
            data.monthly.iter().map(|m| m.impact).collect(),
        ),
        SeriesDatum::new(
            "Engagement",
            "#92400e",
            data.monthly.iter().map(|m| m.engagement).collect(),
        ),
    ];

    let distribution: Vec<SliceDatum> = data
        .project_distribution
        .iter()
        .map(|s| SliceDatum::new(s.name.clone(), s.value, s.color.clone()))
        .collect();

    let radar_subjects: Vec<(String, f64)> = data
        .research_impact
        .iter()
        .map(|r| (r.subject.clone(), r.value))
        .collect();
    let full_mark = data
        .research_impact
        .first()
        .map(|r| r.full_mark)
        .unwrap_or(100.0);

    view! {
        <div class="dashboard-tab">
            <div class="stat-grid">
                {data
                    .summary_stats
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <StatCard
                                title=stat.title
                                value=stat.value
                                trend=stat.trend
                                icon_name=stat.icon
                                progress=stat.progress
                                description=stat.description
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="chart-grid">
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Monthly KPI Trends"</h3>
                    <LineChart labels=months series=kpi_series/>
                </div>
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Project Distribution"</h3>
                    <PieChart data=distribution/>
                </div>
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Research Impact"</h3>
                    <RadarChart subjects=radar_subjects full_mark=full_mark/>
                </div>
            </div>
        </div>
    }
}
