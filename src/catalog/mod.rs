pub mod questions;

pub use questions::QUESTIONS;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The 14 fixed life areas. Variant order matches catalog order and is the
/// order every per-category summary is presented in.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    CoreValuesEthics,
    Religion,
    Spirituality,
    RelationshipModelBoundaries,
    LifeVisionHome,
    ChildrenParenting,
    Finances,
    WorkCareer,
    HouseholdRoles,
    CommunicationConflict,
    LoveIntimacySex,
    HealthLifestyle,
    FamilyOfOriginInLaws,
    GrowthChange,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Category::CoreValuesEthics,
        Category::Religion,
        Category::Spirituality,
        Category::RelationshipModelBoundaries,
        Category::LifeVisionHome,
        Category::ChildrenParenting,
        Category::Finances,
        Category::WorkCareer,
        Category::HouseholdRoles,
        Category::CommunicationConflict,
        Category::LoveIntimacySex,
        Category::HealthLifestyle,
        Category::FamilyOfOriginInLaws,
        Category::GrowthChange,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::CoreValuesEthics => "Core Values & Ethics",
            Category::Religion => "Religion",
            Category::Spirituality => "Spirituality",
            Category::RelationshipModelBoundaries => "Relationship Model & Boundaries",
            Category::LifeVisionHome => "Life Vision & Home",
            Category::ChildrenParenting => "Children & Parenting",
            Category::Finances => "Finances",
            Category::WorkCareer => "Work & Career",
            Category::HouseholdRoles => "Household & Roles",
            Category::CommunicationConflict => "Communication & Conflict",
            Category::LoveIntimacySex => "Love, Intimacy & Sex",
            Category::HealthLifestyle => "Health & Lifestyle",
            Category::FamilyOfOriginInLaws => "Family of Origin & In-Laws",
            Category::GrowthChange => "Growth & Change",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One questionnaire item. Loaded once, never mutated.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: u16,
    pub category: Category,
    pub prompt: &'static str,
    pub explanation: Option<&'static str>,
}

static QUESTION_INDEX: Lazy<HashMap<u16, &'static Question>> =
    Lazy::new(|| QUESTIONS.iter().map(|q| (q.id, q)).collect());

pub fn question_by_id(id: u16) -> Option<&'static Question> {
    QUESTION_INDEX.get(&id).copied()
}

pub fn questions_in(category: Category) -> impl Iterator<Item = &'static Question> {
    QUESTIONS.iter().filter(move |q| q.category == category)
}

/// Rating labels, index 0 = rating value 1.
pub const IMPORTANCE_LABELS: [&str; 5] = [
    "Not important to me",
    "Slightly important",
    "Moderately important",
    "Very important",
    "Extremely important",
];

/// Note the inverted sense: 1 is the most flexible answer, 5 the least.
pub const FLEXIBILITY_LABELS: [&str; 5] = [
    "Very flexible",
    "Quite flexible",
    "Neutral",
    "Limited flexibility",
    "Non-negotiable",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_86_questions_with_unique_sequential_ids() {
        assert_eq!(QUESTIONS.len(), 86);
        let ids: HashSet<u16> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), 86);
        for (i, q) in QUESTIONS.iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
        }
    }

    #[test]
    fn categories_partition_the_catalog() {
        let total: usize = Category::ALL
            .iter()
            .map(|&c| questions_in(c).count())
            .sum();
        assert_eq!(total, QUESTIONS.len());
        for &c in &Category::ALL {
            assert!(questions_in(c).count() >= 1, "{} has no questions", c);
        }
    }

    #[test]
    fn question_lookup_round_trips() {
        for q in QUESTIONS.iter() {
            let found = question_by_id(q.id).unwrap();
            assert_eq!(found.id, q.id);
            assert_eq!(found.category, q.category);
        }
        assert!(question_by_id(0).is_none());
        assert!(question_by_id(87).is_none());
    }

    #[test]
    fn display_names_match_original_wording() {
        assert_eq!(Category::CoreValuesEthics.to_string(), "Core Values & Ethics");
        assert_eq!(
            Category::FamilyOfOriginInLaws.to_string(),
            "Family of Origin & In-Laws"
        );
        assert_eq!(IMPORTANCE_LABELS[4], "Extremely important");
        assert_eq!(FLEXIBILITY_LABELS[0], "Very flexible");
    }
}
