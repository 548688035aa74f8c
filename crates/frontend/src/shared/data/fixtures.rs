//! Seed records for the demo workspace
//!
//! The lists start with these records on every page load; all edits
//! stay in memory.

use contracts::domain::partner::{Partner, PartnerType};
use contracts::domain::project::{Project, ProjectPriority, ProjectStatus};

pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Competence Based Learning Training Program".to_string(),
            description: "Enhancing teaching methodologies through competency-based approaches"
                .to_string(),
            status: ProjectStatus::Ongoing,
            start_date: "2024-01-15".to_string(),
            end_date: "2024-12-31".to_string(),
            progress: 45,
            budget: 150000.0,
            spent: 67500.0,
            team: 12,
            category: "Training".to_string(),
            priority: ProjectPriority::High,
            tags: vec![
                "Education".to_string(),
                "Training".to_string(),
                "Innovation".to_string(),
            ],
            institution: "University of Nairobi".to_string(),
            location: "Kenya".to_string(),
            is_premium: true,
        },
        Project {
            id: 2,
            title: "Agricultural Innovation Research Initiative".to_string(),
            description: "Developing sustainable farming practices for small-scale farmers"
                .to_string(),
            status: ProjectStatus::Planning,
            start_date: "2024-03-01".to_string(),
            end_date: "2025-02-28".to_string(),
            progress: 15,
            budget: 280000.0,
            spent: 42000.0,
            team: 18,
            category: "Research".to_string(),
            priority: ProjectPriority::Medium,
            tags: vec![
                "Agriculture".to_string(),
                "Research".to_string(),
                "Sustainability".to_string(),
            ],
            institution: "Makerere University".to_string(),
            location: "Uganda".to_string(),
            is_premium: true,
        },
        Project {
            id: 3,
            title: "Climate Change Adaptation Study".to_string(),
            description: "Researching climate resilience in East African agriculture".to_string(),
            status: ProjectStatus::Completed,
            start_date: "2023-06-01".to_string(),
            end_date: "2024-01-31".to_string(),
            progress: 100,
            budget: 200000.0,
            spent: 195000.0,
            team: 15,
            category: "Research".to_string(),
            priority: ProjectPriority::High,
            tags: vec![
                "Climate".to_string(),
                "Research".to_string(),
                "Agriculture".to_string(),
            ],
            institution: "University of Dar es Salaam".to_string(),
            location: "Tanzania".to_string(),
            is_premium: true,
        },
    ]
}

pub fn seed_partners() -> Vec<Partner> {
    vec![
        Partner {
            id: 1,
            name: "Makerere University".to_string(),
            partner_type: PartnerType::AcademicInstitution,
            country: "Uganda".to_string(),
            website: "https://www.mak.ac.ug".to_string(),
            email: "info@mak.ac.ug".to_string(),
            phone: "+256-414-531-441".to_string(),
            address: "University Rd, Kampala".to_string(),
            description: "Leading research institution in East Africa focusing on agricultural \
                          innovation and sustainable development."
                .to_string(),
            projects: 12,
            researchers: 150,
            publications: 45,
            partnerships: 8,
        },
        Partner {
            id: 2,
            name: "East African Agricultural Research Institute".to_string(),
            partner_type: PartnerType::ResearchCenter,
            country: "Tanzania".to_string(),
            website: "https://www.eaari.org".to_string(),
            email: "contact@eaari.org".to_string(),
            phone: "+255-123-456-789".to_string(),
            address: "Research Avenue, Dar es Salaam".to_string(),
            description: "Regional research center dedicated to improving agricultural practices \
                          and food security in East Africa."
                .to_string(),
            projects: 8,
            researchers: 75,
            publications: 28,
            partnerships: 5,
        },
        Partner {
            id: 3,
            name: "African Development Solutions".to_string(),
            partner_type: PartnerType::Ngo,
            country: "Kenya".to_string(),
            website: "https://www.ads.org".to_string(),
            email: "info@ads.org".to_string(),
            phone: "+254-789-012-345".to_string(),
            address: "Development Plaza, Nairobi".to_string(),
            description: "Non-profit organization working to promote sustainable agricultural \
                          practices and rural development."
                .to_string(),
            projects: 15,
            researchers: 45,
            publications: 12,
            partnerships: 10,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::next_record_id;

    #[test]
    fn test_seed_ids_are_sequential() {
        let projects = seed_projects();
        assert_eq!(next_record_id(projects.iter().map(|p| p.id)), 4);
        let partners = seed_partners();
        assert_eq!(next_record_id(partners.iter().map(|p| p.id)), 4);
    }

    #[test]
    fn test_one_seed_project_per_status() {
        let projects = seed_projects();
        for status in ProjectStatus::all() {
            assert_eq!(
                projects.iter().filter(|p| p.status == status).count(),
                1,
                "status {:?}",
                status
            );
        }
    }
}
