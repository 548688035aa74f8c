use serde::{Deserialize, Serialize};

use super::common::{dimension_matches, matches_search, next_record_id, RecordId};

/// Lifecycle stage of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    Ongoing,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Completed => "Completed",
        }
    }

    /// Lowercase key used by the status tab strip.
    pub fn key(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "planning" => Some(ProjectStatus::Planning),
            "ongoing" => Some(ProjectStatus::Ongoing),
            "completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }

    pub fn all() -> Vec<ProjectStatus> {
        vec![
            ProjectStatus::Planning,
            ProjectStatus::Ongoing,
            ProjectStatus::Completed,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectPriority {
    High,
    Medium,
    Low,
}

impl ProjectPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectPriority::High => "High",
            ProjectPriority::Medium => "Medium",
            ProjectPriority::Low => "Low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high" => Some(ProjectPriority::High),
            "medium" => Some(ProjectPriority::Medium),
            "low" => Some(ProjectPriority::Low),
            _ => None,
        }
    }

    pub fn all() -> Vec<ProjectPriority> {
        vec![
            ProjectPriority::High,
            ProjectPriority::Medium,
            ProjectPriority::Low,
        ]
    }
}

/// A research or training project tracked by the program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub budget: f64,
    pub spent: f64,
    pub team: u32,
    pub category: String,
    pub priority: ProjectPriority,
    pub tags: Vec<String>,
    pub institution: String,
    pub location: String,
    #[serde(rename = "isPremium")]
    pub is_premium: bool,
}

/// String-typed form state for the project dialog. Numeric fields keep
/// whatever the user typed until save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub progress: String,
    pub budget: String,
    pub spent: String,
    pub team: String,
    pub category: String,
    pub priority: String,
    pub tags: Vec<String>,
    pub institution: String,
    pub location: String,
    pub is_premium: bool,
}

impl ProjectDraft {
    /// Empty draft for the create dialog.
    pub fn new() -> Self {
        Self {
            status: ProjectStatus::Planning.as_str().to_string(),
            priority: ProjectPriority::Medium.as_str().to_string(),
            ..Default::default()
        }
    }

    /// Seed the edit dialog from an existing record. The record itself is
    /// untouched until the dialog saves.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            status: project.status.as_str().to_string(),
            start_date: project.start_date.clone(),
            end_date: project.end_date.clone(),
            progress: project.progress.to_string(),
            budget: project.budget.to_string(),
            spent: project.spent.to_string(),
            team: project.team.to_string(),
            category: project.category.clone(),
            priority: project.priority.as_str().to_string(),
            tags: project.tags.clone(),
            institution: project.institution.clone(),
            location: project.location.clone(),
            is_premium: project.is_premium,
        }
    }

    /// Materialize the draft into a complete record.
    ///
    /// Numbers that fail to parse become 0, progress is clamped to 0..=100.
    /// `spent` is not checked against `budget`.
    pub fn into_project(self, id: RecordId) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            status: ProjectStatus::from_str(&self.status).unwrap_or(ProjectStatus::Planning),
            start_date: self.start_date,
            end_date: self.end_date,
            progress: parse_progress(&self.progress),
            budget: parse_amount(&self.budget),
            spent: parse_amount(&self.spent),
            team: self.team.trim().parse().unwrap_or(0),
            category: self.category,
            priority: ProjectPriority::from_str(&self.priority).unwrap_or(ProjectPriority::Medium),
            tags: self.tags,
            institution: self.institution,
            location: self.location,
            is_premium: self.is_premium,
        }
    }
}

fn parse_amount(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0)
}

fn parse_progress(s: &str) -> u8 {
    s.trim().parse::<i64>().unwrap_or(0).clamp(0, 100) as u8
}

/// Active constraints of the project list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilters {
    /// Substring match against the title, case-insensitive.
    pub search: String,
    /// Tab strip key: "all" or a `ProjectStatus::key()`.
    pub status_tab: String,
    pub category: String,
    pub priority: String,
    pub institution: String,
}

impl Default for ProjectFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            status_tab: "all".to_string(),
            category: "All".to_string(),
            priority: "All".to_string(),
            institution: "All".to_string(),
        }
    }
}

impl ProjectFilters {
    /// Reset the filter panel selects, keeping search and tab as-is.
    pub fn reset_panel(&mut self) {
        self.category = "All".to_string();
        self.priority = "All".to_string();
        self.institution = "All".to_string();
    }

    fn matches(&self, project: &Project) -> bool {
        matches_search(&project.title, &self.search)
            && dimension_matches(&self.status_tab, project.status.key())
            && dimension_matches(&self.category, &project.category)
            && dimension_matches(&self.priority, project.priority.as_str())
            && dimension_matches(&self.institution, &project.institution)
    }
}

/// All filter dimensions AND together; the result preserves source order.
pub fn filter_projects(projects: &[Project], filters: &ProjectFilters) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect()
}

/// Replace the record with a matching id, or append when there is none.
pub fn upsert_project(projects: &mut Vec<Project>, record: Project) {
    match projects.iter_mut().find(|p| p.id == record.id) {
        Some(slot) => *slot = record,
        None => projects.push(record),
    }
}

pub fn remove_project(projects: &mut Vec<Project>, id: RecordId) {
    projects.retain(|p| p.id != id);
}

pub fn next_project_id(projects: &[Project]) -> RecordId {
    next_record_id(projects.iter().map(|p| p.id))
}

/// Category choices offered by the filter panel and the dialog.
pub fn category_options() -> Vec<&'static str> {
    vec!["Research", "Training", "Innovation", "Policy"]
}

pub fn institution_options() -> Vec<&'static str> {
    vec![
        "University of Nairobi",
        "Makerere University",
        "University of Dar es Salaam",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: RecordId, title: &str, status: ProjectStatus, progress: u8) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: String::new(),
            status,
            start_date: "2024-01-01".to_string(),
            end_date: "2024-12-31".to_string(),
            progress,
            budget: 100_000.0,
            spent: 40_000.0,
            team: 10,
            category: "Research".to_string(),
            priority: ProjectPriority::High,
            tags: vec![],
            institution: "Makerere University".to_string(),
            location: "Uganda".to_string(),
            is_premium: false,
        }
    }

    fn sample_list() -> Vec<Project> {
        vec![
            sample(1, "Competence Based Learning", ProjectStatus::Ongoing, 45),
            sample(2, "Agricultural Innovation", ProjectStatus::Planning, 15),
            sample(3, "Climate Change Adaptation", ProjectStatus::Completed, 100),
        ]
    }

    #[test]
    fn test_default_filters_return_everything() {
        let projects = sample_list();
        let filtered = filter_projects(&projects, &ProjectFilters::default());
        assert_eq!(filtered, projects);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let projects = sample_list();
        let filters = ProjectFilters {
            search: "cLiMaTe".to_string(),
            ..Default::default()
        };
        let filtered = filter_projects(&projects, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn test_completed_tab_selects_only_completed() {
        let projects = sample_list();
        let filters = ProjectFilters {
            status_tab: "completed".to_string(),
            ..Default::default()
        };
        let filtered = filter_projects(&projects, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].progress, 100);
    }

    #[test]
    fn test_dimensions_and_together() {
        let mut projects = sample_list();
        projects[1].category = "Training".to_string();
        let filters = ProjectFilters {
            search: "a".to_string(),
            category: "Training".to_string(),
            ..Default::default()
        };
        let filtered = filter_projects(&projects, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_filter_preserves_order() {
        let projects = sample_list();
        let filters = ProjectFilters {
            search: "n".to_string(),
            ..Default::default()
        };
        let ids: Vec<_> = filter_projects(&projects, &filters)
            .iter()
            .map(|p| p.id)
            .collect();
        let expected: Vec<_> = projects
            .iter()
            .filter(|p| p.title.contains('n') || p.title.contains('N'))
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_create_then_delete_round_trip() {
        let original = sample_list();
        let mut projects = original.clone();

        let id = next_project_id(&projects);
        let record = ProjectDraft::new().into_project(id);
        upsert_project(&mut projects, record);
        assert_eq!(projects.len(), 4);

        remove_project(&mut projects, id);
        assert_eq!(projects, original);
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut projects = sample_list();
        let mut draft = ProjectDraft::from_project(&projects[1]);
        draft.title = "Renamed Initiative".to_string();
        upsert_project(&mut projects, draft.into_project(2));

        assert_eq!(projects.len(), 3);
        assert_eq!(
            projects.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(projects[1].title, "Renamed Initiative");
    }

    #[test]
    fn test_draft_round_trip_preserves_record() {
        let project = sample(7, "Soil Health", ProjectStatus::Ongoing, 62);
        let restored = ProjectDraft::from_project(&project).into_project(7);
        assert_eq!(restored, project);
    }

    #[test]
    fn test_progress_clamps() {
        let mut draft = ProjectDraft::new();
        draft.progress = "250".to_string();
        assert_eq!(draft.clone().into_project(1).progress, 100);
        draft.progress = "-5".to_string();
        assert_eq!(draft.clone().into_project(1).progress, 0);
        draft.progress = "not a number".to_string();
        assert_eq!(draft.into_project(1).progress, 0);
    }

    #[test]
    fn test_unparsable_amounts_become_zero() {
        let mut draft = ProjectDraft::new();
        draft.budget = "lots".to_string();
        draft.spent = String::new();
        draft.team = "12x".to_string();
        let project = draft.into_project(1);
        assert_eq!(project.budget, 0.0);
        assert_eq!(project.spent, 0.0);
        assert_eq!(project.team, 0);
    }

    #[test]
    fn test_spent_not_checked_against_budget() {
        let mut draft = ProjectDraft::new();
        draft.budget = "1000".to_string();
        draft.spent = "5000".to_string();
        let project = draft.into_project(1);
        assert_eq!(project.spent, 5000.0);
    }

    #[test]
    fn test_empty_title_draft_is_accepted() {
        let project = ProjectDraft::new().into_project(7);
        assert_eq!(project.title, "");

        let mut list = sample_list();
        upsert_project(&mut list, project);
        assert_eq!(list.len(), 4);
        assert_eq!(list[3].id, 7);
    }

    #[test]
    fn test_json_uses_camel_case_field_names() {
        let value = serde_json::to_value(sample(1, "Any", ProjectStatus::Planning, 0)).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("startDate"));
        assert!(obj.contains_key("endDate"));
        assert!(obj.contains_key("isPremium"));
        assert!(!obj.contains_key("start_date"));
    }
}
