use serde::{Deserialize, Serialize};

use super::NamedValue;

/// Everything the reports workspace renders and exports. A single
/// hand-authored snapshot; the type/period selectors pick presentation,
/// not data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub overview: ReportOverview,
    pub projects: ProjectReport,
    pub beneficiaries: BeneficiaryReport,
    pub publications: PublicationReport,
    pub financial: FinancialReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOverview {
    pub total_projects: u32,
    pub active_projects: u32,
    pub completed_projects: u32,
    pub planned_projects: u32,
    pub total_beneficiaries: u32,
    pub total_partners: u32,
    pub total_publications: u32,
    pub total_funding: f64,
    pub metrics: Vec<OverviewMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewMetric {
    pub title: String,
    pub value: String,
    pub change: String,
    /// true when the change is an improvement
    pub increase: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoredValue {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectTimelinePoint {
    pub month: String,
    pub projects: f64,
    pub completion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentProject {
    pub name: String,
    pub status: String,
    pub progress: u8,
    pub budget: f64,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectReport {
    pub by_status: Vec<ColoredValue>,
    pub by_type: Vec<ColoredValue>,
    pub timeline: Vec<ProjectTimelinePoint>,
    pub recent_projects: Vec<RecentProject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryTrendRow {
    pub name: String,
    pub count: u32,
    pub trend: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryReport {
    pub categories: Vec<BeneficiaryTrendRow>,
    pub demographics: Vec<NamedValue>,
    pub gender_distribution: Vec<ColoredValue>,
    pub country_distribution: Vec<NamedValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationTypeRow {
    pub name: String,
    pub count: u32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationTimelinePoint {
    pub month: String,
    pub papers: f64,
    pub citations: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactMetric {
    pub metric: String,
    pub value: u32,
    pub change: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationReport {
    pub types: Vec<PublicationTypeRow>,
    pub timeline: Vec<PublicationTimelinePoint>,
    pub impact_metrics: Vec<ImpactMetric>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialOverview {
    pub total_budget: f64,
    pub allocated: f64,
    pub spent: f64,
    pub remaining: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySpendingPoint {
    pub month: String,
    pub planned: f64,
    pub actual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub overview: FinancialOverview,
    pub categories: Vec<NamedValue>,
    pub monthly_spending: Vec<MonthlySpendingPoint>,
}

impl ReportData {
    pub fn fixture() -> Self {
        Self {
            overview: ReportOverview {
                total_projects: 45,
                active_projects: 32,
                completed_projects: 8,
                planned_projects: 5,
                total_beneficiaries: 2500,
                total_partners: 28,
                total_publications: 156,
                total_funding: 12_500_000.0,
                metrics: vec![
                    metric("Project Success Rate", "85%", "+5%", true),
                    metric("Research Impact", "4.8/5", "+0.3", true),
                    metric("Beneficiary Growth", "2,500", "+12%", true),
                    metric("Publication Output", "156", "-3%", false),
                ],
            },
            projects: ProjectReport {
                by_status: vec![
                    colored("Active", 32.0, "#10b981"),
                    colored("Completed", 8.0, "#6366f1"),
                    colored("Planned", 5.0, "#f59e0b"),
                ],
                by_type: vec![
                    colored("Research", 20.0, "#8b4513"),
                    colored("Training", 15.0, "#d97706"),
                    colored("Innovation", 10.0, "#059669"),
                ],
                timeline: vec![
                    timeline_point("Jan", 38.0, 82.0),
                    timeline_point("Feb", 40.0, 85.0),
                    timeline_point("Mar", 42.0, 87.0),
                    timeline_point("Apr", 43.0, 88.0),
                    timeline_point("May", 44.0, 90.0),
                    timeline_point("Jun", 45.0, 92.0),
                ],
                recent_projects: vec![
                    recent(
                        "Agricultural Innovation Research",
                        "Active",
                        75,
                        250_000.0,
                        "2024-01-15",
                        "2024-12-31",
                    ),
                    recent(
                        "Climate Change Adaptation Study",
                        "Completed",
                        100,
                        180_000.0,
                        "2023-06-01",
                        "2024-01-31",
                    ),
                    recent(
                        "Sustainable Farming Practices",
                        "Active",
                        60,
                        300_000.0,
                        "2024-02-01",
                        "2025-01-31",
                    ),
                ],
            },
            beneficiaries: BeneficiaryReport {
                categories: vec![
                    trend_row("Students", 1200, "+15%", "#8b4513"),
                    trend_row("Researchers", 600, "+8%", "#d97706"),
                    trend_row("Farmers", 450, "+12%", "#059669"),
                    trend_row("Policy Makers", 250, "+5%", "#6366f1"),
                ],
                demographics: vec![
                    NamedValue::new("18-24", 800.0),
                    NamedValue::new("25-34", 1000.0),
                    NamedValue::new("35-44", 400.0),
                    NamedValue::new("45-54", 200.0),
                    NamedValue::new("55+", 100.0),
                ],
                gender_distribution: vec![
                    colored("Male", 55.0, "#8b4513"),
                    colored("Female", 45.0, "#d97706"),
                ],
                country_distribution: vec![
                    NamedValue::new("Uganda", 800.0),
                    NamedValue::new("Kenya", 600.0),
                    NamedValue::new("Tanzania", 500.0),
                    NamedValue::new("Rwanda", 400.0),
                    NamedValue::new("Ethiopia", 200.0),
                ],
            },
            publications: PublicationReport {
                types: vec![
                    pub_type("Research Papers", 85, "Published"),
                    pub_type("Policy Briefs", 35, "Published"),
                    pub_type("Case Studies", 25, "In Review"),
                    pub_type("Reports", 11, "Draft"),
                ],
                timeline: vec![
                    pub_point("Jan", 12.0, 45.0),
                    pub_point("Feb", 15.0, 52.0),
                    pub_point("Mar", 18.0, 60.0),
                    pub_point("Apr", 22.0, 75.0),
                    pub_point("May", 25.0, 85.0),
                    pub_point("Jun", 30.0, 95.0),
                ],
                impact_metrics: vec![
                    impact("Citations", 1250, "+15%"),
                    impact("Downloads", 3500, "+22%"),
                    impact("Media Mentions", 85, "+8%"),
                ],
            },
            financial: FinancialReport {
                overview: FinancialOverview {
                    total_budget: 12_500_000.0,
                    allocated: 9_500_000.0,
                    spent: 7_500_000.0,
                    remaining: 5_000_000.0,
                },
                categories: vec![
                    NamedValue::new("Research Grants", 5_000_000.0),
                    NamedValue::new("Capacity Building", 3_000_000.0),
                    NamedValue::new("Infrastructure", 2_500_000.0),
                    NamedValue::new("Administration", 2_000_000.0),
                ],
                monthly_spending: vec![
                    spending("Jan", 800_000.0, 750_000.0),
                    spending("Feb", 900_000.0, 880_000.0),
                    spending("Mar", 1_000_000.0, 950_000.0),
                    spending("Apr", 950_000.0, 900_000.0),
                    spending("May", 1_100_000.0, 1_050_000.0),
                    spending("Jun", 1_200_000.0, 1_150_000.0),
                ],
            },
        }
    }
}

fn metric(title: &str, value: &str, change: &str, increase: bool) -> OverviewMetric {
    OverviewMetric {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        increase,
    }
}

fn colored(name: &str, value: f64, color: &str) -> ColoredValue {
    ColoredValue {
        name: name.to_string(),
        value,
        color: color.to_string(),
    }
}

fn timeline_point(month: &str, projects: f64, completion: f64) -> ProjectTimelinePoint {
    ProjectTimelinePoint {
        month: month.to_string(),
        projects,
        completion,
    }
}

fn recent(name: &str, status: &str, progress: u8, budget: f64, start: &str, end: &str) -> RecentProject {
    RecentProject {
        name: name.to_string(),
        status: status.to_string(),
        progress,
        budget,
        start: start.to_string(),
        end: end.to_string(),
    }
}

fn trend_row(name: &str, count: u32, trend: &str, color: &str) -> BeneficiaryTrendRow {
    BeneficiaryTrendRow {
        name: name.to_string(),
        count,
        trend: trend.to_string(),
        color: color.to_string(),
    }
}

fn pub_type(name: &str, count: u32, status: &str) -> PublicationTypeRow {
    PublicationTypeRow {
        name: name.to_string(),
        count,
        status: status.to_string(),
    }
}

fn pub_point(month: &str, papers: f64, citations: f64) -> PublicationTimelinePoint {
    PublicationTimelinePoint {
        month: month.to_string(),
        papers,
        citations,
    }
}

fn impact(metric: &str, value: u32, change: &str) -> ImpactMetric {
    ImpactMetric {
        metric: metric.to_string(),
        value,
        change: change.to_string(),
    }
}

fn spending(month: &str, planned: f64, actual: f64) -> MonthlySpendingPoint {
    MonthlySpendingPoint {
        month: month.to_string(),
        planned,
        actual,
    }
}

/// Report type choices in the toolbar. Presentation labels only.
pub fn report_type_options() -> Vec<(&'static str, &'static str)> {
    vec![
        ("executive", "Executive Summary"),
        ("detailed", "Detailed Report"),
        ("impact", "Impact Assessment"),
        ("financial", "Financial Report"),
        ("project", "Project Status"),
        ("beneficiary", "Beneficiary Analysis"),
        ("publication", "Publication Metrics"),
    ]
}

pub fn period_options() -> Vec<(&'static str, &'static str)> {
    vec![
        ("2024-q1", "Q1 2024"),
        ("2024-q2", "Q2 2024"),
        ("2024-q3", "Q3 2024"),
        ("2024-q4", "Q4 2024"),
        ("2024-full", "Full Year 2024"),
        ("custom", "Custom Range"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_overview_counts_are_consistent() {
        let data = ReportData::fixture();
        let o = &data.overview;
        assert_eq!(
            o.active_projects + o.completed_projects + o.planned_projects,
            45
        );
        assert_eq!(o.metrics.len(), 4);
    }

    #[test]
    fn test_fixture_series_lengths() {
        let data = ReportData::fixture();
        assert_eq!(data.projects.timeline.len(), 6);
        assert_eq!(data.publications.timeline.len(), 6);
        assert_eq!(data.financial.monthly_spending.len(), 6);
        assert_eq!(data.beneficiaries.demographics.len(), 5);
    }

    #[test]
    fn test_period_keys_are_unique() {
        let mut keys: Vec<_> = period_options().iter().map(|(k, _)| *k).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), period_options().len());
    }
}
