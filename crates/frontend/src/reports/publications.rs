use contracts::reports::progress::ReportData;
use leptos::prelude::*;

use crate::shared::charts::{LineChart, PieChart, SeriesDatum, SliceDatum};
use crate::shared::icons::icon;
use crate::shared::number_format::format_number_int;

use super::palette_color;

fn publication_status_class(status: &str) -> &'static str {
    match status {
        "Published" => "badge badge--pub-published",
        "In Review" => "badge badge--pub-review",
        _ => "badge badge--pub-draft",
    }
}

#[component]
pub fn PublicationsTab(data: ReportData) -> impl IntoView {
    let months: Vec<String> = data
        .publications
        .timeline
        .iter()
        .map(|p| p.month.clone())
        .collect();
    let timeline_series = vec![
        SeriesDatum::new(
            "Publications",
            "#8b4513",
            data.publications.timeline.iter().map(|p| p.papers).collect(),
        ),
        SeriesDatum::new(
            "Citations",
            "#d97706",
            data.publications
                .timeline
                .iter()
                .map(|p| p.citations)
                .collect(),
        ),
    ];

    let type_slices = data
        .publications
        .types
        .iter()
        .enumerate()
        .map(|(i, t)| SliceDatum::new(t.name.clone(), t.count as f64, palette_color(i)))
        .collect::<Vec<_>>();

    view! {
        <div class="report-tab">
            <div class="stat-grid">
                {data
                    .publications
                    .impact_metrics
                    .iter()
                    .map(|metric| {
                        view! {
                            <div class="card count-card">
                                <div class="count-card__icon">{icon("book-open")}</div>
                                <div class="count-card__body">
                                    <p class="count-card__label">{metric.metric.clone()}</p>
                                    <div class="count-card__row">
                                        <span class="count-card__value">
                                            {format_number_int(metric.value as f64)}
                                        </span>
                                        <span class="badge badge--trend-up">
                                            {metric.change.clone()}
                                        </span>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="chart-grid">
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Publication Trends"</h3>
                    <LineChart labels=months series=timeline_series/>
                </div>
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Publication Types"</h3>
                    <PieChart data=type_slices/>
                </div>
            </div>

            <div class="card">
                <h3 class="chart-card__title">"Publication Status"</h3>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell table__header-cell--number">"Count"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {data
                            .publications
                            .types
                            .iter()
                            .map(|row| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.name.clone()}</td>
                                        <td class="table__cell table__cell--number">{row.count}</td>
                                        <td class="table__cell">
                                            <span class=publication_status_class(
                                                &row.status,
                                            )>{row.status.clone()}</span>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        assert_eq!(
            publication_status_class("Published"),
            "badge badge--pub-published"
        );
        assert_eq!(
            publication_status_class("In Review"),
            "badge badge--pub-review"
        );
        assert_eq!(publication_status_class("Draft"), "badge badge--pub-draft");
    }
}
