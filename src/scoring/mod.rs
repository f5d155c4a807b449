pub mod aggregate;

pub use aggregate::{
    aggregate_by_category, aggregate_overall, compare, CategoryCompatibility, CompatibilityCounts,
    ComparisonReport, ComparisonStatus,
};

use serde::{Deserialize, Serialize};

use crate::assessment::Response;

/// Per-question compatibility classification for a couple.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compatibility {
    Aligned,
    Discuss,
    Priority,
}

impl Compatibility {
    pub fn label(self) -> &'static str {
        match self {
            Compatibility::Aligned => "Aligned",
            Compatibility::Discuss => "Discuss",
            Compatibility::Priority => "Priority",
        }
    }
}

impl std::fmt::Display for Compatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify two partners' responses to the same question by the gap between
/// their importance ratings.
///
/// Flexibility is collected and shown alongside importance but deliberately
/// does not feed this signal; only the importance gap does. Both inputs are
/// complete responses, so the classification is total.
pub fn classify(a: &Response, b: &Response) -> Compatibility {
    let gap = a.importance.get().abs_diff(b.importance.get());
    match gap {
        0 | 1 => Compatibility::Aligned,
        2 => Compatibility::Discuss,
        _ => Compatibility::Priority,
    }
}
