use serde::{Deserialize, Serialize};

use super::{classify, Compatibility};
use crate::assessment::PartnerRecord;
use crate::catalog::{self, Category};

/// Classification tallies over some set of questions. Questions either
/// partner left unanswered are skipped entirely, so the three counts only
/// ever cover questions both partners rated.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompatibilityCounts {
    pub aligned: usize,
    pub discuss: usize,
    pub priority: usize,
}

impl CompatibilityCounts {
    fn record(&mut self, outcome: Compatibility) {
        match outcome {
            Compatibility::Aligned => self.aligned += 1,
            Compatibility::Discuss => self.discuss += 1,
            Compatibility::Priority => self.priority += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.aligned + self.discuss + self.priority
    }

    /// Share of classified questions that came out Aligned, rounded to the
    /// nearest whole percent. `None` when nothing could be classified, which
    /// callers must render as a waiting/insufficient-data state rather than
    /// a number.
    pub fn percentage(&self) -> Option<u8> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some((100.0 * self.aligned as f64 / total as f64).round() as u8)
    }

    /// Worst-case-wins summary label: a single Priority question marks the
    /// whole set Priority no matter how many others are Aligned.
    pub fn overall(&self) -> Compatibility {
        if self.priority > 0 {
            Compatibility::Priority
        } else if self.discuss > 0 {
            Compatibility::Discuss
        } else {
            Compatibility::Aligned
        }
    }
}

/// One category's tallies for the couple.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryCompatibility {
    pub category: Category,
    pub counts: CompatibilityCounts,
}

impl CategoryCompatibility {
    pub fn status(&self) -> Compatibility {
        self.counts.overall()
    }
}

fn tally<'a>(
    questions: impl Iterator<Item = &'a catalog::Question>,
    a: &PartnerRecord,
    b: &PartnerRecord,
) -> CompatibilityCounts {
    let mut counts = CompatibilityCounts::default();
    for question in questions {
        if let (Some(ra), Some(rb)) = (a.response(question.id), b.response(question.id)) {
            counts.record(classify(ra, rb));
        }
    }
    counts
}

/// Fold the classifier over the whole catalog in presentation order.
pub fn aggregate_overall(a: &PartnerRecord, b: &PartnerRecord) -> CompatibilityCounts {
    tally(catalog::QUESTIONS.iter(), a, b)
}

/// Same fold restricted to one category's questions.
pub fn aggregate_by_category(
    category: Category,
    a: &PartnerRecord,
    b: &PartnerRecord,
) -> CategoryCompatibility {
    CategoryCompatibility {
        category,
        counts: tally(catalog::questions_in(category), a, b),
    }
}

/// Full comparison output consumed by the report formatters.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ComparisonReport {
    pub partner_a: String,
    pub partner_b: String,
    pub overall: CompatibilityCounts,
    pub categories: Vec<CategoryCompatibility>,
}

/// Where the couple currently stands. Aggregation never guesses: missing
/// partners surface as explicit variants instead of empty tallies.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum ComparisonStatus {
    /// Neither partner has completed the questionnaire.
    NotStarted,
    /// One partner finished; the comparison is waiting on the other.
    Waiting { completed: String },
    Ready(ComparisonReport),
}

pub fn compare(a: Option<&PartnerRecord>, b: Option<&PartnerRecord>) -> ComparisonStatus {
    match (a, b) {
        (None, None) => ComparisonStatus::NotStarted,
        (Some(done), None) | (None, Some(done)) => ComparisonStatus::Waiting {
            completed: done.name.clone(),
        },
        (Some(a), Some(b)) => ComparisonStatus::Ready(ComparisonReport {
            partner_a: a.name.clone(),
            partner_b: b.name.clone(),
            overall: aggregate_overall(a, b),
            categories: Category::ALL
                .iter()
                .map(|&category| aggregate_by_category(category, a, b))
                .collect(),
        }),
    }
}
