use chrono::Utc;
use log::info;
use std::fmt::Write;

use crate::assessment::PartnerRecord;
use crate::catalog::{Category, FLEXIBILITY_LABELS, IMPORTANCE_LABELS, QUESTIONS};
use crate::scoring::{self, Compatibility};

// Report wording is slightly longer than the dashboard badges.
fn status_label(outcome: Compatibility) -> &'static str {
    match outcome {
        Compatibility::Aligned => "Aligned",
        Compatibility::Discuss => "Needs Discussion",
        Compatibility::Priority => "Priority Area",
    }
}

fn rating_label(labels: &'static [&'static str; 5], value: u8) -> &'static str {
    labels[(value - 1) as usize]
}

/// Render the full couple report as plain text: executive summary, category
/// analysis, per-question detail, and action items. Consumes the same
/// aggregation output the dashboard does.
pub fn compatibility_report(a: &PartnerRecord, b: &PartnerRecord) -> String {
    info!("📄 Generating compatibility report for {} & {}", a.name, b.name);

    let overall = scoring::aggregate_overall(a, b);
    let mut out = String::new();

    let _ = writeln!(out, "Marriage Compatibility Assessment Report");
    let _ = writeln!(out, "{} & {}", a.name, b.name);
    let _ = writeln!(out, "Generated: {}", Utc::now().format("%Y-%m-%d"));
    let _ = writeln!(out);

    let _ = writeln!(out, "Executive Summary");
    let _ = writeln!(out, "-----------------");
    match overall.percentage() {
        Some(pct) => {
            let _ = writeln!(out, "Overall Compatibility Score: {}%", pct);
        }
        None => {
            let _ = writeln!(
                out,
                "Overall Compatibility Score: insufficient data (no questions answered by both partners)"
            );
        }
    }
    let _ = writeln!(out, "Aligned Areas (Green): {} topics", overall.aligned);
    let _ = writeln!(out, "Discussion Areas (Yellow): {} topics", overall.discuss);
    let _ = writeln!(out, "Priority Areas (Red): {} topics", overall.priority);
    let _ = writeln!(out);

    let _ = writeln!(out, "Category Analysis");
    let _ = writeln!(out, "-----------------");
    for &category in &Category::ALL {
        let summary = scoring::aggregate_by_category(category, a, b);
        let _ = writeln!(
            out,
            "{} - Status: {}",
            category,
            status_label(summary.status())
        );
        let _ = writeln!(
            out,
            "  Green: {} | Yellow: {} | Red: {}",
            summary.counts.aligned, summary.counts.discuss, summary.counts.priority
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Detailed Question Analysis");
    let _ = writeln!(out, "--------------------------");
    for question in QUESTIONS.iter() {
        let (ra, rb) = match (a.response(question.id), b.response(question.id)) {
            (Some(ra), Some(rb)) => (ra, rb),
            _ => continue,
        };
        let outcome = scoring::classify(ra, rb);

        let prompt = if question.prompt.len() > 80 {
            format!("{}...", &question.prompt[..80])
        } else {
            question.prompt.to_string()
        };
        let _ = writeln!(out, "Q{}: {}", question.id, prompt);
        for (name, response) in [(&a.name, ra), (&b.name, rb)] {
            let _ = writeln!(
                out,
                "  {}: Importance {} ({}), Flexibility {} ({})",
                name,
                response.importance,
                rating_label(&IMPORTANCE_LABELS, response.importance.get()),
                response.flexibility,
                rating_label(&FLEXIBILITY_LABELS, response.flexibility.get()),
            );
        }
        let _ = writeln!(out, "  Status: {}", status_label(outcome));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Recommended Action Items");
    let _ = writeln!(out, "------------------------");
    if overall.priority > 0 {
        let _ = writeln!(out, "Priority Areas (Red) - Immediate Discussion Needed:");
        for question in QUESTIONS.iter() {
            if let (Some(ra), Some(rb)) = (a.response(question.id), b.response(question.id)) {
                if scoring::classify(ra, rb) == Compatibility::Priority {
                    let _ = writeln!(out, "  * {}", question.prompt);
                }
            }
        }
    }
    if overall.discuss > 0 {
        let _ = writeln!(out, "Discussion Areas (Yellow) - Plan Together:");
        let _ = writeln!(
            out,
            "  Schedule time to discuss these topics and find mutually acceptable solutions."
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Marriage Compatibility Master Assessment - For guidance purposes only"
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{Rating, Response};

    fn resp(question_id: u16, importance: u8, flexibility: u8) -> Response {
        Response {
            question_id,
            importance: Rating::new(importance).unwrap(),
            flexibility: Rating::new(flexibility).unwrap(),
        }
    }

    fn full_partner(name: &str, importance: impl Fn(u16) -> u8) -> PartnerRecord {
        PartnerRecord::new(name, (1..=86).map(|id| resp(id, importance(id), 3)))
    }

    #[test]
    fn report_contains_summary_and_every_category() {
        let a = full_partner("Jordan", |_| 3);
        let b = full_partner("Sam", |id| if id == 31 { 3 } else { 4 });

        let report = compatibility_report(&a, &b);
        assert!(report.contains("Jordan & Sam"));
        assert!(report.contains("Overall Compatibility Score: 100%"));
        for &category in &Category::ALL {
            assert!(report.contains(category.display_name()));
        }
    }

    #[test]
    fn priority_questions_are_listed_as_action_items() {
        let a = full_partner("Jordan", |_| 1);
        let b = full_partner("Sam", |id| if id == 31 { 5 } else { 2 });

        let report = compatibility_report(&a, &b);
        assert!(report.contains("Priority Areas (Red) - Immediate Discussion Needed:"));
        // question 31 is the only importance gap >= 3
        assert!(report.contains("  * Whether or not to have children"));
        assert!(report.contains("Priority Areas (Red): 1 topics"));
    }

    #[test]
    fn insufficient_data_renders_without_a_percentage() {
        let a = PartnerRecord::new("Jordan", (1..=5).map(|id| resp(id, 3, 3)));
        let b = PartnerRecord::new("Sam", (6..=10).map(|id| resp(id, 3, 3)));

        let report = compatibility_report(&a, &b);
        assert!(report.contains("insufficient data"));
        assert!(!report.contains("%"));
    }

    #[test]
    fn rating_labels_accompany_each_detailed_line() {
        let a = PartnerRecord::new("Jordan", [resp(1, 5, 1)]);
        let b = PartnerRecord::new("Sam", [resp(1, 4, 5)]);

        let report = compatibility_report(&a, &b);
        assert!(report.contains("Jordan: Importance 5 (Extremely important), Flexibility 1 (Very flexible)"));
        assert!(report.contains("Sam: Importance 4 (Very important), Flexibility 5 (Non-negotiable)"));
        assert!(report.contains("  Status: Aligned"));
    }
}
