use serde::{Deserialize, Serialize};

use super::scorecard::RadarSubject;

/// One month of the KPI trend series on the performance tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiMonth {
    pub month: String,
    pub completion: f64,
    pub publications: f64,
    pub grants: f64,
    pub impact: f64,
    pub engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStat {
    pub title: String,
    pub value: String,
    pub trend: String,
    pub icon: String,
    pub progress: u8,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiData {
    pub monthly: Vec<KpiMonth>,
    pub research_impact: Vec<RadarSubject>,
    pub project_distribution: Vec<DistributionSlice>,
    pub summary_stats: Vec<SummaryStat>,
}

impl KpiData {
    pub fn fixture() -> Self {
        Self {
            monthly: vec![
                kpi_month("Jan", 65.0, 12.0, 8.0, 75.0, 80.0),
                kpi_month("Feb", 72.0, 15.0, 10.0, 78.0, 85.0),
                kpi_month("Mar", 68.0, 18.0, 12.0, 72.0, 82.0),
                kpi_month("Apr", 85.0, 22.0, 15.0, 85.0, 88.0),
                kpi_month("May", 78.0, 25.0, 18.0, 80.0, 85.0),
                kpi_month("Jun", 90.0, 30.0, 22.0, 88.0, 92.0),
            ],
            research_impact: vec![
                radar("Citations", 85.0),
                radar("Publications", 75.0),
                radar("Grants", 90.0),
                radar("Collaborations", 82.0),
                radar("Innovation", 88.0),
            ],
            project_distribution: vec![
                slice("Research", 45.0, "#8b4513"),
                slice("Training", 25.0, "#d97706"),
                slice("Innovation", 20.0, "#92400e"),
                slice("Policy", 10.0, "#b45309"),
            ],
            summary_stats: vec![
                SummaryStat {
                    title: "Project Success Rate".to_string(),
                    value: "85%".to_string(),
                    trend: "+5%".to_string(),
                    icon: "target".to_string(),
                    progress: 85,
                    description: "15 projects completed this quarter".to_string(),
                },
                SummaryStat {
                    title: "Research Impact Score".to_string(),
                    value: "4.8".to_string(),
                    trend: "+0.3".to_string(),
                    icon: "award".to_string(),
                    progress: 92,
                    description: "Based on 150+ citations".to_string(),
                },
                SummaryStat {
                    title: "Beneficiary Engagement".to_string(),
                    value: "92%".to_string(),
                    trend: "+8%".to_string(),
                    icon: "users".to_string(),
                    progress: 92,
                    description: "2,500+ active participants".to_string(),
                },
                SummaryStat {
                    title: "Publication Output".to_string(),
                    value: "145".to_string(),
                    trend: "+12".to_string(),
                    icon: "book-open".to_string(),
                    progress: 78,
                    description: "Across 25 institutions".to_string(),
                },
            ],
        }
    }
}

fn kpi_month(
    month: &str,
    completion: f64,
    publications: f64,
    grants: f64,
    impact: f64,
    engagement: f64,
) -> KpiMonth {
    KpiMonth {
        month: month.to_string(),
        completion,
        publications,
        grants,
        impact,
        engagement,
    }
}

fn radar(subject: &str, value: f64) -> RadarSubject {
    RadarSubject {
        subject: subject.to_string(),
        value,
        full_mark: 100.0,
    }
}

fn slice(name: &str, value: f64, color: &str) -> DistributionSlice {
    DistributionSlice {
        name: name.to_string(),
        value,
        color: color.to_string(),
    }
}

/// A planned or completed program activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub activity_type: String,
    pub status: String,
    pub participants: u32,
    pub completion: u8,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityData {
    pub upcoming: Vec<Activity>,
    pub recent: Vec<Activity>,
}

impl ActivityData {
    pub fn fixture() -> Self {
        Self {
            upcoming: vec![
                Activity {
                    id: 1,
                    title: "Annual Research Symposium".to_string(),
                    date: "Dec 15, 2024".to_string(),
                    time: "09:00 AM - 05:00 PM".to_string(),
                    location: "Kampala, Uganda".to_string(),
                    activity_type: "Conference".to_string(),
                    status: "Upcoming".to_string(),
                    participants: 150,
                    completion: 75,
                    description: "Annual gathering of researchers to present findings and network"
                        .to_string(),
                    tags: tags(&["Research", "Networking", "Presentation"]),
                },
                Activity {
                    id: 2,
                    title: "Grant Writing Workshop".to_string(),
                    date: "Dec 20, 2024".to_string(),
                    time: "10:00 AM - 03:00 PM".to_string(),
                    location: "Nairobi, Kenya".to_string(),
                    activity_type: "Workshop".to_string(),
                    status: "Upcoming".to_string(),
                    participants: 50,
                    completion: 60,
                    description: "Intensive workshop on writing successful grant proposals"
                        .to_string(),
                    tags: tags(&["Training", "Grants", "Writing"]),
                },
                Activity {
                    id: 3,
                    title: "Agricultural Innovation Forum".to_string(),
                    date: "Jan 5, 2025".to_string(),
                    time: "08:30 AM - 04:30 PM".to_string(),
                    location: "Dar es Salaam, Tanzania".to_string(),
                    activity_type: "Forum".to_string(),
                    status: "Planning".to_string(),
                    participants: 200,
                    completion: 40,
                    description: "Forum focusing on innovative agricultural practices".to_string(),
                    tags: tags(&["Agriculture", "Innovation", "Technology"]),
                },
            ],
            recent: vec![
                Activity {
                    id: 4,
                    title: "Research Methodology Training".to_string(),
                    date: "Nov 30, 2024".to_string(),
                    time: "09:00 AM - 04:00 PM".to_string(),
                    location: "Addis Ababa, Ethiopia".to_string(),
                    activity_type: "Training".to_string(),
                    status: "Completed".to_string(),
                    participants: 75,
                    completion: 100,
                    description: "Training session on advanced research methodologies".to_string(),
                    tags: tags(&["Research", "Training", "Methodology"]),
                },
                Activity {
                    id: 5,
                    title: "Policy Dialogue Meeting".to_string(),
                    date: "Nov 25, 2024".to_string(),
                    time: "02:00 PM - 05:00 PM".to_string(),
                    location: "Kigali, Rwanda".to_string(),
                    activity_type: "Meeting".to_string(),
                    status: "Completed".to_string(),
                    participants: 30,
                    completion: 100,
                    description: "Strategic meeting with policy makers on agricultural policies"
                        .to_string(),
                    tags: tags(&["Policy", "Dialogue", "Strategy"]),
                },
            ],
        }
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetOverview {
    pub total: f64,
    pub spent: f64,
    pub committed: f64,
    pub remaining: f64,
}

impl BudgetOverview {
    pub fn spent_share(&self) -> u8 {
        share(self.spent, self.total)
    }

    pub fn committed_share(&self) -> u8 {
        share(self.committed, self.total)
    }

    pub fn remaining_share(&self) -> u8 {
        share(self.remaining, self.total)
    }
}

fn share(part: f64, whole: f64) -> u8 {
    if whole <= 0.0 {
        return 0;
    }
    ((part / whole) * 100.0).round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterTrend {
    pub quarter: String,
    pub allocated: f64,
    pub spent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub description: String,
    pub project: String,
    pub date: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetData {
    pub overview: BudgetOverview,
    pub expense_categories: Vec<DistributionSlice>,
    pub quarterly_trends: Vec<QuarterTrend>,
    pub transactions: Vec<Transaction>,
}

impl BudgetData {
    pub fn fixture() -> Self {
        Self {
            overview: BudgetOverview {
                total: 500_000.0,
                spent: 300_000.0,
                committed: 100_000.0,
                remaining: 100_000.0,
            },
            expense_categories: vec![
                slice("Research Grants", 50.0, "#8b4513"),
                slice("Training Programs", 27.0, "#d97706"),
                slice("Infrastructure", 10.0, "#d4d4a7"),
                slice("Administrative", 13.0, "#3e1e0d"),
            ],
            quarterly_trends: vec![
                quarter("Q1", 120_000.0, 95_000.0),
                quarter("Q2", 125_000.0, 105_000.0),
                quarter("Q3", 125_000.0, 85_000.0),
                quarter("Q4", 130_000.0, 115_000.0),
            ],
            transactions: vec![
                transaction(
                    "Research Equipment Purchase",
                    "Agricultural Innovation",
                    "Nov 15, 2024",
                    24_500.0,
                ),
                transaction(
                    "Staff Training Workshop",
                    "Capacity Building",
                    "Nov 10, 2024",
                    12_300.0,
                ),
                transaction(
                    "Conference Sponsorship",
                    "Knowledge Sharing",
                    "Nov 5, 2024",
                    15_000.0,
                ),
                transaction(
                    "Field Research Expenses",
                    "Soil Health Initiative",
                    "Oct 28, 2024",
                    8_750.0,
                ),
                transaction(
                    "Publication Fees",
                    "Academic Research",
                    "Oct 20, 2024",
                    3_200.0,
                ),
            ],
        }
    }
}

fn quarter(quarter: &str, allocated: f64, spent: f64) -> QuarterTrend {
    QuarterTrend {
        quarter: quarter.to_string(),
        allocated,
        spent,
    }
}

fn transaction(description: &str, project: &str, date: &str, amount: f64) -> Transaction {
    Transaction {
        description: description.to_string(),
        project: project.to_string(),
        date: date.to_string(),
        amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_fixture_shape() {
        let data = KpiData::fixture();
        assert_eq!(data.monthly.len(), 6);
        assert_eq!(data.research_impact.len(), 5);
        assert_eq!(data.summary_stats.len(), 4);
        let total: f64 = data.project_distribution.iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_budget_shares() {
        let overview = BudgetData::fixture().overview;
        assert_eq!(overview.spent_share(), 60);
        assert_eq!(overview.committed_share(), 20);
        assert_eq!(overview.remaining_share(), 20);
    }

    #[test]
    fn test_budget_share_zero_total() {
        let overview = BudgetOverview {
            total: 0.0,
            spent: 10.0,
            committed: 0.0,
            remaining: 0.0,
        };
        assert_eq!(overview.spent_share(), 0);
    }

    #[test]
    fn test_activity_fixture_statuses() {
        let data = ActivityData::fixture();
        assert_eq!(data.upcoming.len(), 3);
        assert!(data.recent.iter().all(|a| a.status == "Completed"));
        assert!(data.recent.iter().all(|a| a.completion == 100));
    }
}
