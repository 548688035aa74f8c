use serde::{Deserialize, Serialize};

use super::common::{dimension_matches, matches_search, next_record_id, RecordId};

/// Kind of partner organization in the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartnerType {
    AcademicInstitution,
    ResearchCenter,
    GovernmentAgency,
    Ngo,
    PrivateSector,
    InternationalOrganization,
}

impl PartnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerType::AcademicInstitution => "Academic Institution",
            PartnerType::ResearchCenter => "Research Center",
            PartnerType::GovernmentAgency => "Government Agency",
            PartnerType::Ngo => "NGO",
            PartnerType::PrivateSector => "Private Sector",
            PartnerType::InternationalOrganization => "International Organization",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Academic Institution" => Some(PartnerType::AcademicInstitution),
            "Research Center" => Some(PartnerType::ResearchCenter),
            "Government Agency" => Some(PartnerType::GovernmentAgency),
            "NGO" => Some(PartnerType::Ngo),
            "Private Sector" => Some(PartnerType::PrivateSector),
            "International Organization" => Some(PartnerType::InternationalOrganization),
            _ => None,
        }
    }

    pub fn all() -> Vec<PartnerType> {
        vec![
            PartnerType::AcademicInstitution,
            PartnerType::ResearchCenter,
            PartnerType::GovernmentAgency,
            PartnerType::Ngo,
            PartnerType::PrivateSector,
            PartnerType::InternationalOrganization,
        ]
    }
}

/// A partner organization with contact details and display counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub partner_type: PartnerType,
    pub country: String,
    pub website: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub description: String,
    pub projects: u32,
    pub researchers: u32,
    pub publications: u32,
    pub partnerships: u32,
}

/// Form state for the partner dialog. Counters are not editable through
/// the form; new partners start with all four at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnerDraft {
    pub name: String,
    pub partner_type: String,
    pub country: String,
    pub website: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub description: String,
}

impl PartnerDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_partner(partner: &Partner) -> Self {
        Self {
            name: partner.name.clone(),
            partner_type: partner.partner_type.as_str().to_string(),
            country: partner.country.clone(),
            website: partner.website.clone(),
            email: partner.email.clone(),
            phone: partner.phone.clone(),
            address: partner.address.clone(),
            description: partner.description.clone(),
        }
    }

    /// Build a fresh record with zeroed counters (create path).
    pub fn into_new_partner(self, id: RecordId) -> Partner {
        Partner {
            id,
            name: self.name,
            partner_type: PartnerType::from_str(&self.partner_type)
                .unwrap_or(PartnerType::AcademicInstitution),
            country: self.country,
            website: self.website,
            email: self.email,
            phone: self.phone,
            address: self.address,
            description: self.description,
            projects: 0,
            researchers: 0,
            publications: 0,
            partnerships: 0,
        }
    }

    /// Apply the form onto an existing record, keeping its counters.
    pub fn apply_to(self, existing: &Partner) -> Partner {
        Partner {
            id: existing.id,
            name: self.name,
            partner_type: PartnerType::from_str(&self.partner_type)
                .unwrap_or(existing.partner_type),
            country: self.country,
            website: self.website,
            email: self.email,
            phone: self.phone,
            address: self.address,
            description: self.description,
            projects: existing.projects,
            researchers: existing.researchers,
            publications: existing.publications,
            partnerships: existing.partnerships,
        }
    }
}

/// Active constraints of the partner list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerFilters {
    /// Substring match against the name, case-insensitive.
    pub search: String,
    /// "all" or a `PartnerType::as_str()` value.
    pub partner_type: String,
}

impl Default for PartnerFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            partner_type: "all".to_string(),
        }
    }
}

pub fn filter_partners(partners: &[Partner], filters: &PartnerFilters) -> Vec<Partner> {
    partners
        .iter()
        .filter(|p| {
            matches_search(&p.name, &filters.search)
                && dimension_matches(&filters.partner_type, p.partner_type.as_str())
        })
        .cloned()
        .collect()
}

pub fn upsert_partner(partners: &mut Vec<Partner>, record: Partner) {
    match partners.iter_mut().find(|p| p.id == record.id) {
        Some(slot) => *slot = record,
        None => partners.push(record),
    }
}

pub fn remove_partner(partners: &mut Vec<Partner>, id: RecordId) {
    partners.retain(|p| p.id != id);
}

pub fn next_partner_id(partners: &[Partner]) -> RecordId {
    next_record_id(partners.iter().map(|p| p.id))
}

pub fn country_options() -> Vec<&'static str> {
    vec![
        "Uganda",
        "Kenya",
        "Tanzania",
        "Rwanda",
        "Ethiopia",
        "Sudan",
        "South Sudan",
        "Burundi",
        "DR Congo",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: RecordId, name: &str, partner_type: PartnerType) -> Partner {
        Partner {
            id,
            name: name.to_string(),
            partner_type,
            country: "Uganda".to_string(),
            website: "https://example.org".to_string(),
            email: "info@example.org".to_string(),
            phone: "+256-000-000-000".to_string(),
            address: "Kampala".to_string(),
            description: String::new(),
            projects: 12,
            researchers: 150,
            publications: 45,
            partnerships: 8,
        }
    }

    fn sample_list() -> Vec<Partner> {
        vec![
            sample(1, "Makerere University", PartnerType::AcademicInstitution),
            sample(2, "East African Agricultural Research Institute", PartnerType::ResearchCenter),
            sample(3, "African Development Solutions", PartnerType::Ngo),
        ]
    }

    #[test]
    fn test_type_round_trip() {
        for t in PartnerType::all() {
            assert_eq!(PartnerType::from_str(t.as_str()), Some(t));
        }
        assert_eq!(PartnerType::from_str("Think Tank"), None);
    }

    #[test]
    fn test_filter_by_type_and_search() {
        let partners = sample_list();
        let filters = PartnerFilters {
            search: "african".to_string(),
            partner_type: "NGO".to_string(),
        };
        let filtered = filter_partners(&partners, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn test_all_sentinel_keeps_everything() {
        let partners = sample_list();
        let filtered = filter_partners(&partners, &PartnerFilters::default());
        assert_eq!(filtered, partners);
    }

    #[test]
    fn test_new_partner_counters_are_zero() {
        let draft = PartnerDraft {
            name: "New Org".to_string(),
            partner_type: "NGO".to_string(),
            ..Default::default()
        };
        let partner = draft.into_new_partner(4);
        assert_eq!(partner.projects, 0);
        assert_eq!(partner.researchers, 0);
        assert_eq!(partner.publications, 0);
        assert_eq!(partner.partnerships, 0);
    }

    #[test]
    fn test_empty_name_draft_is_accepted() {
        let partner = PartnerDraft::new().into_new_partner(9);
        assert_eq!(partner.name, "");

        let mut list = sample_list();
        upsert_partner(&mut list, partner);
        assert_eq!(list.len(), 4);
        assert_eq!(list[3].id, 9);
    }

    #[test]
    fn test_edit_keeps_counters() {
        let partners = sample_list();
        let mut draft = PartnerDraft::from_partner(&partners[0]);
        draft.country = "Kenya".to_string();
        let updated = draft.apply_to(&partners[0]);
        assert_eq!(updated.country, "Kenya");
        assert_eq!(updated.researchers, 150);
        assert_eq!(updated.id, 1);
    }

    #[test]
    fn test_create_then_delete_round_trip() {
        let original = sample_list();
        let mut partners = original.clone();

        let id = next_partner_id(&partners);
        upsert_partner(&mut partners, PartnerDraft::new().into_new_partner(id));
        assert_eq!(partners.len(), 4);

        remove_partner(&mut partners, id);
        assert_eq!(partners, original);
    }

    #[test]
    fn test_edit_and_cancel_leaves_source_untouched() {
        let partners = sample_list();
        let mut draft = PartnerDraft::from_partner(&partners[1]);
        draft.name = "Scratch edits".to_string();
        // Dropping the draft is all a cancel does
        drop(draft);
        assert_eq!(partners, sample_list());
    }
}
