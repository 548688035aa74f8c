//! Performance scorecard: category scores against targets, monthly
//! progress, and the beneficiary breakdown, with client-side PDF and
//! spreadsheet export.

use contracts::reports::progress::period_options;
use contracts::reports::scorecard::{PerformanceRow, ScoreStatus, ScorecardData};
use leptos::prelude::*;

use crate::shared::charts::{LineChart, RadarChart, SeriesDatum};
use crate::shared::components::{ProgressBar, Select};
use crate::shared::export::pdf::PdfDocument;
use crate::shared::export::{download_pdf, export_sections_to_spreadsheet, CsvSection};
use crate::shared::icons::icon;
use crate::shared::number_format::format_number_int;
use crate::shared::toast::ToastService;

fn score_status_class(status: ScoreStatus) -> String {
    let key = match status {
        ScoreStatus::Exceeding => "exceeding",
        ScoreStatus::OnTrack => "on-track",
        ScoreStatus::NeedsAttention => "needs-attention",
        ScoreStatus::AtRisk => "at-risk",
    };
    format!("badge badge--score-{}", key)
}

fn performance_csv_section(performance: &[PerformanceRow]) -> CsvSection {
    CsvSection::new(
        "Performance Metrics",
        &["Category", "Score", "Target", "Trend", "Status"],
        performance
            .iter()
            .map(|row| {
                vec![
                    row.category.clone(),
                    row.score.to_string(),
                    row.target.to_string(),
                    row.trend.clone(),
                    row.status.as_str().to_string(),
                ]
            })
            .collect(),
    )
}

fn scorecard_csv_sections(data: &ScorecardData) -> Vec<CsvSection> {
    vec![
        performance_csv_section(&data.performance),
        CsvSection::new(
            "Monthly Progress",
            &["Month", "Actual", "Target"],
            data.monthly_progress
                .iter()
                .map(|p| {
                    vec![
                        p.month.clone(),
                        p.actual.to_string(),
                        p.target.to_string(),
                    ]
                })
                .collect(),
        ),
        CsvSection::new(
            "Beneficiary Stats",
            &["Category", "Count", "Percentage"],
            data.beneficiaries
                .categories
                .iter()
                .map(|c| {
                    vec![
                        c.name.clone(),
                        c.count.to_string(),
                        format!("{}%", c.percentage),
                    ]
                })
                .collect(),
        ),
    ]
}

fn scorecard_pdf(data: &ScorecardData, period_label: &str) -> Vec<u8> {
    let mut doc = PdfDocument::new();
    doc.heading("Performance Scorecard");
    doc.text(&format!("Reporting Period: {}", period_label));
    doc.spacer();

    doc.table(
        &["Category", "Score", "Target", "Trend", "Status"],
        &data
            .performance
            .iter()
            .map(|row| {
                vec![
                    row.category.clone(),
                    row.score.to_string(),
                    row.target.to_string(),
                    row.trend.clone(),
                    row.status.as_str().to_string(),
                ]
            })
            .collect::<Vec<_>>(),
    );

    doc.spacer();
    doc.subheading("Beneficiary Statistics");
    doc.table(
        &["Category", "Count", "Percentage"],
        &data
            .beneficiaries
            .categories
            .iter()
            .map(|c| {
                vec![
                    c.name.clone(),
                    c.count.to_string(),
                    format!("{}%", c.percentage),
                ]
            })
            .collect::<Vec<_>>(),
    );

    doc.finish()
}

#[component]
pub fn ScorecardPage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let data = ScorecardData::fixture();
    let period = RwSignal::new("2024-q2".to_string());

    let period_label = move || {
        let key = period.get();
        period_options()
            .iter()
            .find(|(value, _)| *value == key)
            .map(|(_, label)| label.to_string())
            .unwrap_or(key)
    };

    let export_data = data.clone();
    let handle_export_spreadsheet = move |_| {
        let sections = scorecard_csv_sections(&export_data);
        let filename = format!("MEL_Scorecard_{}.csv", period.get_untracked());
        match export_sections_to_spreadsheet(&sections, &filename) {
            Ok(()) => toasts.success("Excel data exported successfully!"),
            Err(e) => toasts.error(e),
        }
    };

    let pdf_data = data.clone();
    let handle_export_pdf = move |_| {
        let bytes = scorecard_pdf(&pdf_data, &period_label());
        let filename = format!("MEL_Scorecard_{}.pdf", period.get_untracked());
        match download_pdf(&bytes, &filename) {
            Ok(()) => toasts.success("PDF report generated successfully!"),
            Err(e) => toasts.error(e),
        }
    };

    let months: Vec<String> = data
        .monthly_progress
        .iter()
        .map(|p| p.month.clone())
        .collect();
    let progress_series = vec![
        SeriesDatum::new(
            "Actual",
            "#8b4513",
            data.monthly_progress.iter().map(|p| p.actual).collect(),
        ),
        SeriesDatum::new(
            "Target",
            "#d97706",
            data.monthly_progress.iter().map(|p| p.target).collect(),
        ),
    ];

    let radar_subjects: Vec<(String, f64)> = data
        .radar
        .iter()
        .map(|r| (r.subject.clone(), r.value))
        .collect();
    let full_mark = data.radar.first().map(|r| r.full_mark).unwrap_or(100.0);

    let period_select_options: Vec<(String, String)> = period_options()
        .into_iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Performance Scorecard"</h1>
                    <p class="header__subtitle">
                        "Performance metrics and impact indicators across the program"
                    </p>
                </div>
                <div class="header__actions">
                    <Select
                        value=Signal::derive(move || period.get())
                        on_change=Callback::new(move |v: String| period.set(v))
                        options=period_select_options
                    />
                    <button class="button button--secondary" on:click=handle_export_spreadsheet>
                        {icon("file-spreadsheet")}
                        "Export Excel"
                    </button>
                    <button class="button button--secondary" on:click=handle_export_pdf>
                        {icon("file-text")}
                        "Export PDF"
                    </button>
                </div>
            </div>

            <div class="scorecard-grid">
                {data
                    .performance
                    .iter()
                    .map(|row| {
                        let share = if row.target > 0 {
                            (row.score * 100 / row.target).min(100) as u8
                        } else {
                            0
                        };
                        view! {
                            <div class="card scorecard-card">
                                <div class="scorecard-card__header">
                                    <h3 class="scorecard-card__title">{row.category.clone()}</h3>
                                    <span class=score_status_class(
                                        row.status,
                                    )>{row.status.as_str()}</span>
                                </div>
                                <div class="scorecard-card__score">
                                    <span class="scorecard-card__value">{row.score}</span>
                                    <span class="scorecard-card__target">
                                        {format!("/ {} target", row.target)}
                                    </span>
                                </div>
                                <ProgressBar value=share/>
                                <div class="scorecard-card__trend">
                                    {icon("trending-up")}
                                    <span>{format!("{} vs last period", row.trend)}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="chart-grid">
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Monthly Progress"</h3>
                    <LineChart labels=months series=progress_series/>
                </div>
                <div class="card chart-card">
                    <h3 class="chart-card__title">"Performance Radar"</h3>
                    <RadarChart subjects=radar_subjects full_mark=full_mark/>
                </div>
            </div>

            <div class="card beneficiary-panel">
                <div class="beneficiary-panel__header">
                    <h3 class="chart-card__title">"Beneficiary Reach"</h3>
                    <span class="beneficiary-panel__total">
                        {format!(
                            "{} total beneficiaries",
                            format_number_int(data.beneficiaries.total as f64),
                        )}
                    </span>
                </div>
                <div class="beneficiary-panel__rows">
                    {data
                        .beneficiaries
                        .categories
                        .iter()
                        .map(|category| {
                            let share = category.percentage.min(100) as u8;
                            view! {
                                <div class="beneficiary-row">
                                    <span class="beneficiary-row__name">
                                        {category.name.clone()}
                                    </span>
                                    <ProgressBar value=share/>
                                    <span class="beneficiary-row__count">
                                        {format!(
                                            "{} ({}%)",
                                            format_number_int(category.count as f64),
                                            category.percentage,
                                        )}
                                    </span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_sections_cover_all_rows() {
        let data = ScorecardData::fixture();
        let sections = scorecard_csv_sections(&data);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, "Performance Metrics");
        assert_eq!(sections[0].rows.len(), data.performance.len());
        assert_eq!(sections[1].rows.len(), data.monthly_progress.len());
        assert_eq!(sections[2].rows.len(), data.beneficiaries.categories.len());
    }

    #[test]
    fn test_csv_percentage_cells_carry_percent_sign() {
        let data = ScorecardData::fixture();
        let sections = scorecard_csv_sections(&data);
        for row in &sections[2].rows {
            assert!(row[2].ends_with('%'));
        }
    }

    #[test]
    fn test_pdf_contains_period_line() {
        let data = ScorecardData::fixture();
        let bytes = scorecard_pdf(&data, "Q2 2024");
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("Performance Scorecard"));
        assert!(text.contains("Reporting Period: Q2 2024"));
    }

    #[test]
    fn test_status_badge_classes_are_kebab_case() {
        assert_eq!(
            score_status_class(ScoreStatus::NeedsAttention),
            "badge badge--score-needs-attention"
        );
        assert_eq!(
            score_status_class(ScoreStatus::OnTrack),
            "badge badge--score-on-track"
        );
    }
}
