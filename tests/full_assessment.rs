use couplecheck::catalog::QUESTIONS;
use couplecheck::report;
use couplecheck::{
    AssessmentSession, Compatibility, ComparisonStatus, PartnerSlot, QualityLevel, Rating,
};

fn rating(v: u8) -> Rating {
    Rating::new(v).unwrap()
}

/// Walk one partner through the whole questionnaire the way the UI does:
/// rate, advance, repeat, then complete under a display name.
fn run_questionnaire(
    session: &mut AssessmentSession,
    slot: PartnerSlot,
    name: &str,
    importance: impl Fn(u16) -> u8,
    flexibility: impl Fn(u16) -> u8,
) {
    session.start(slot);
    loop {
        let question = session.current_question().expect("a current question");
        session
            .set_importance(question.id, rating(importance(question.id)))
            .unwrap();
        session
            .set_flexibility(question.id, rating(flexibility(question.id)))
            .unwrap();
        match session.advance().unwrap() {
            couplecheck::session::AdvanceOutcome::Next(_) => continue,
            couplecheck::session::AdvanceOutcome::EndReached => break,
        }
    }
    assert_eq!(session.progress(), 100);
    session.complete(name).unwrap();
}

#[test]
fn two_partners_end_to_end() {
    let mut session = AssessmentSession::new();

    // Partner A rates everything moderately important; B diverges on the
    // Children & Parenting block (ids 31-40) and one finance question.
    run_questionnaire(&mut session, PartnerSlot::A, "Jordan", |_| 3, |_| 2);
    run_questionnaire(
        &mut session,
        PartnerSlot::B,
        "Sam",
        |id| match id {
            31..=40 => 5,
            41 => 1,
            _ => 4,
        },
        |_| 4,
    );

    let report_data = match session.comparison() {
        ComparisonStatus::Ready(report) => report,
        other => panic!("expected Ready, got {:?}", other),
    };

    // 86 questions total: ids 31-40 gap 2 (Discuss), id 41 gap 2 (Discuss),
    // everything else gap 1 (Aligned).
    assert_eq!(report_data.overall.total(), QUESTIONS.len());
    assert_eq!(report_data.overall.discuss, 11);
    assert_eq!(report_data.overall.aligned, 75);
    assert_eq!(report_data.overall.priority, 0);
    assert_eq!(report_data.overall.percentage(), Some(87)); // round(100 * 75 / 86)

    // Worst-case-wins per category.
    for category in &report_data.categories {
        let expected = if category.counts.discuss > 0 {
            Compatibility::Discuss
        } else {
            Compatibility::Aligned
        };
        assert_eq!(category.status(), expected);
    }

    // Each partner gets their own quality-of-life view.
    let jordan = session.quality_report(PartnerSlot::A).unwrap();
    assert_eq!(jordan.category_insights.len(), 14);
    // importance 3.0, flexibility 2.0 -> 3 * (1 - 0.5/2.5) = 2.4 everywhere
    for insight in &jordan.category_insights {
        assert!((insight.score - 2.4).abs() < 1e-9);
        assert_eq!(insight.level, QualityLevel::NeedsAttention);
    }
    assert!(jordan
        .relationship_readiness
        .starts_with("Early Development Stage"));

    // The rendered report reflects the same aggregation.
    let (a, b) = (
        session.partner(PartnerSlot::A).unwrap().clone(),
        session.partner(PartnerSlot::B).unwrap().clone(),
    );
    let text = report::compatibility_report(&a, &b);
    assert!(text.contains("Jordan & Sam"));
    assert!(text.contains("Overall Compatibility Score: 87%"));
    assert!(text.contains("Children & Parenting - Status: Needs Discussion"));
}

#[test]
fn single_partner_session_reports_waiting_state() {
    let mut session = AssessmentSession::new();
    run_questionnaire(&mut session, PartnerSlot::A, "Jordan", |_| 4, |_| 2);

    match session.comparison() {
        ComparisonStatus::Waiting { completed } => assert_eq!(completed, "Jordan"),
        other => panic!("expected Waiting, got {:?}", other),
    }

    let report = session.quality_report(PartnerSlot::A).unwrap();
    // importance 4.0, flexibility 2.0 -> 4 * 0.8 = 3.2 (Moderate) everywhere
    assert!(report.strengths.is_empty());
    assert_eq!(report.growth_areas.len(), 3);
    assert!(report.overall_score > 0.0 && report.overall_score <= 5.0);
}
