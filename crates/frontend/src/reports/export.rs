//! Spreadsheet and PDF assembly for the reports workspace.

use contracts::reports::progress::ReportData;

use crate::shared::export::pdf::PdfDocument;
use crate::shared::export::CsvSection;
use crate::shared::number_format::format_money;

pub fn report_csv_sections(data: &ReportData) -> Vec<CsvSection> {
    vec![
        CsvSection::new(
            "Overview",
            &["Metric", "Value", "Change"],
            data.overview
                .metrics
                .iter()
                .map(|m| vec![m.title.clone(), m.value.clone(), m.change.clone()])
                .collect(),
        ),
        CsvSection::new(
            "Projects",
            &["Name", "Status", "Progress", "Budget", "Start", "End"],
            data.projects
                .recent_projects
                .iter()
                .map(|p| {
                    vec![
                        p.name.clone(),
                        p.status.clone(),
                        format!("{}%", p.progress),
                        format_money(p.budget),
                        p.start.clone(),
                        p.end.clone(),
                    ]
                })
                .collect(),
        ),
        CsvSection::new(
            "Beneficiaries",
            &["Category", "Count", "Trend"],
            data.beneficiaries
                .categories
                .iter()
                .map(|c| vec![c.name.clone(), c.count.to_string(), c.trend.clone()])
                .collect(),
        ),
        CsvSection::new(
            "Financial",
            &["Category", "Amount"],
            data.financial
                .categories
                .iter()
                .map(|c| vec![c.name.clone(), format_money(c.value)])
                .collect(),
        ),
    ]
}

pub fn report_pdf(
    data: &ReportData,
    report_type_label: &str,
    period_label: &str,
    generated_on: &str,
) -> Vec<u8> {
    let mut doc = PdfDocument::new();
    doc.heading("Progress Report");
    doc.text(&format!("Report Type: {}", report_type_label));
    doc.text(&format!("Period: {}", period_label));
    doc.text(&format!("Generated: {}", generated_on));
    doc.spacer();

    doc.subheading("Overview Metrics");
    doc.table(
        &["Metric", "Value", "Change"],
        &data
            .overview
            .metrics
            .iter()
            .map(|m| vec![m.title.clone(), m.value.clone(), m.change.clone()])
            .collect::<Vec<_>>(),
    );

    doc.spacer();
    doc.subheading("Project Statistics");
    doc.table(
        &["Category", "Count"],
        &[
            vec![
                "Total Projects".to_string(),
                data.overview.total_projects.to_string(),
            ],
            vec![
                "Active Projects".to_string(),
                data.overview.active_projects.to_string(),
            ],
            vec![
                "Completed Projects".to_string(),
                data.overview.completed_projects.to_string(),
            ],
            vec![
                "Planned Projects".to_string(),
                data.overview.planned_projects.to_string(),
            ],
        ],
    );

    doc.spacer();
    doc.subheading("Beneficiary Statistics");
    doc.table(
        &["Category", "Count", "Trend"],
        &data
            .beneficiaries
            .categories
            .iter()
            .map(|c| vec![c.name.clone(), c.count.to_string(), c.trend.clone()])
            .collect::<Vec<_>>(),
    );

    doc.spacer();
    doc.subheading("Financial Summary");
    doc.table(
        &["Category", "Amount"],
        &[
            vec![
                "Total Budget".to_string(),
                format_money(data.financial.overview.total_budget),
            ],
            vec![
                "Allocated".to_string(),
                format_money(data.financial.overview.allocated),
            ],
            vec![
                "Spent".to_string(),
                format_money(data.financial.overview.spent),
            ],
            vec![
                "Remaining".to_string(),
                format_money(data.financial.overview.remaining),
            ],
        ],
    );

    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_sections_match_fixture_shape() {
        let data = ReportData::fixture();
        let sections = report_csv_sections(&data);
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0].title, "Overview");
        assert_eq!(sections[0].rows.len(), data.overview.metrics.len());
        assert_eq!(sections[1].rows.len(), data.projects.recent_projects.len());
        assert_eq!(sections[3].rows.len(), data.financial.categories.len());
    }

    #[test]
    fn test_csv_budget_cells_are_formatted_money() {
        let data = ReportData::fixture();
        let sections = report_csv_sections(&data);
        for row in &sections[1].rows {
            assert!(row[3].starts_with('$'));
        }
    }

    #[test]
    fn test_pdf_carries_header_lines() {
        let data = ReportData::fixture();
        let bytes = report_pdf(&data, "Executive Summary", "Q2 2024", "6/15/2024");
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("Progress Report"));
        assert!(text.contains("Report Type: Executive Summary"));
        assert!(text.contains("Period: Q2 2024"));
        assert!(text.contains("Financial Summary"));
    }
}
