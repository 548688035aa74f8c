use serde::{Deserialize, Serialize};

/// Standing of a scorecard category against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreStatus {
    Exceeding,
    OnTrack,
    NeedsAttention,
    AtRisk,
}

impl ScoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreStatus::Exceeding => "Exceeding",
            ScoreStatus::OnTrack => "On Track",
            ScoreStatus::NeedsAttention => "Needs Attention",
            ScoreStatus::AtRisk => "At Risk",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRow {
    pub category: String,
    pub score: u32,
    pub target: u32,
    pub trend: String,
    pub status: ScoreStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProgressPoint {
    pub month: String,
    pub actual: f64,
    pub target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSubject {
    pub subject: String,
    pub value: f64,
    pub full_mark: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryCategory {
    pub name: String,
    pub count: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryStats {
    pub total: u32,
    pub categories: Vec<BeneficiaryCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardData {
    pub performance: Vec<PerformanceRow>,
    pub monthly_progress: Vec<MonthlyProgressPoint>,
    pub radar: Vec<RadarSubject>,
    pub beneficiaries: BeneficiaryStats,
}

impl ScorecardData {
    pub fn fixture() -> Self {
        Self {
            performance: vec![
                perf("Research Impact", 85, 90, "+5%", ScoreStatus::OnTrack),
                perf("Innovation", 78, 85, "+3%", ScoreStatus::NeedsAttention),
                perf("Capacity Building", 92, 88, "+8%", ScoreStatus::Exceeding),
                perf("Partnership Engagement", 88, 85, "+6%", ScoreStatus::OnTrack),
                perf("Knowledge Dissemination", 75, 80, "+2%", ScoreStatus::AtRisk),
            ],
            monthly_progress: vec![
                month_point("Jan", 65.0, 70.0),
                month_point("Feb", 68.0, 72.0),
                month_point("Mar", 75.0, 75.0),
                month_point("Apr", 82.0, 77.0),
                month_point("May", 85.0, 80.0),
                month_point("Jun", 88.0, 82.0),
            ],
            radar: vec![
                radar_subject("Research Quality", 85.0),
                radar_subject("Innovation", 78.0),
                radar_subject("Collaboration", 92.0),
                radar_subject("Impact", 88.0),
                radar_subject("Sustainability", 75.0),
            ],
            beneficiaries: BeneficiaryStats {
                total: 2500,
                categories: vec![
                    beneficiary("Students", 1200, 48),
                    beneficiary("Researchers", 600, 24),
                    beneficiary("Farmers", 450, 18),
                    beneficiary("Policy Makers", 250, 10),
                ],
            },
        }
    }
}

fn perf(category: &str, score: u32, target: u32, trend: &str, status: ScoreStatus) -> PerformanceRow {
    PerformanceRow {
        category: category.to_string(),
        score,
        target,
        trend: trend.to_string(),
        status,
    }
}

fn month_point(month: &str, actual: f64, target: f64) -> MonthlyProgressPoint {
    MonthlyProgressPoint {
        month: month.to_string(),
        actual,
        target,
    }
}

fn radar_subject(subject: &str, value: f64) -> RadarSubject {
    RadarSubject {
        subject: subject.to_string(),
        value,
        full_mark: 100.0,
    }
}

fn beneficiary(name: &str, count: u32, percentage: u32) -> BeneficiaryCategory {
    BeneficiaryCategory {
        name: name.to_string(),
        count,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shape() {
        let data = ScorecardData::fixture();
        assert_eq!(data.performance.len(), 5);
        assert_eq!(data.monthly_progress.len(), 6);
        assert_eq!(data.radar.len(), 5);
        assert_eq!(
            data.beneficiaries
                .categories
                .iter()
                .map(|c| c.count)
                .sum::<u32>(),
            data.beneficiaries.total
        );
    }

    #[test]
    fn test_percentages_cover_total() {
        let data = ScorecardData::fixture();
        let sum: u32 = data
            .beneficiaries
            .categories
            .iter()
            .map(|c| c.percentage)
            .sum();
        assert_eq!(sum, 100);
    }
}
