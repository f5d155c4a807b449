use log::{info, warn};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

use super::PartnerSlot;
use crate::assessment::{PartnerRecord, Rating, ResponseDraft};
use crate::catalog::{self, Question, QUESTIONS};
use crate::error::{EngineError, Result};
use crate::quality_of_life::{self, QualityOfLifeReport};
use crate::scoring::{self, ComparisonStatus};

/// What `advance` landed on: the next question, or the end of the
/// questionnaire (at which point the caller completes or cancels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Next(&'static Question),
    EndReached,
}

/// A partner's questionnaire run that is still underway.
#[derive(Debug, Clone)]
struct ActiveRun {
    slot: PartnerSlot,
    current_index: usize,
    drafts: BTreeMap<u16, ResponseDraft>,
}

/// All transient state for one assessment session: one in-progress run at a
/// time plus up to two completed partner records. Owned by the caller and
/// passed around explicitly; the engine keeps no global registry.
#[derive(Debug)]
pub struct AssessmentSession {
    id: Uuid,
    active: Option<ActiveRun>,
    partner_a: Option<PartnerRecord>,
    partner_b: Option<PartnerRecord>,
}

impl AssessmentSession {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        info!("🆕 Assessment session created: {}", id);
        AssessmentSession {
            id,
            active: None,
            partner_a: None,
            partner_b: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Begin (or restart) a partner's questionnaire run from question 1 with
    /// a blank answer sheet.
    pub fn start(&mut self, slot: PartnerSlot) {
        if let Some(run) = &self.active {
            warn!("Replacing in-progress run for {} with a new run for {}", run.slot, slot);
        }
        info!("📝 {} started the questionnaire", slot);
        self.active = Some(ActiveRun {
            slot,
            current_index: 0,
            drafts: BTreeMap::new(),
        });
    }

    fn active_run(&mut self) -> Result<&mut ActiveRun> {
        self.active.as_mut().ok_or(EngineError::NoActiveAssessment)
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        let run = self.active.as_ref()?;
        QUESTIONS.get(run.current_index)
    }

    pub fn set_importance(&mut self, question_id: u16, rating: Rating) -> Result<()> {
        self.set_field(question_id, rating, true)
    }

    pub fn set_flexibility(&mut self, question_id: u16, rating: Rating) -> Result<()> {
        self.set_field(question_id, rating, false)
    }

    fn set_field(&mut self, question_id: u16, rating: Rating, importance: bool) -> Result<()> {
        if catalog::question_by_id(question_id).is_none() {
            return Err(EngineError::UnknownQuestion(question_id));
        }
        let run = self.active_run()?;
        let draft = run.drafts.entry(question_id).or_default();
        if importance {
            draft.importance = Some(rating);
        } else {
            draft.flexibility = Some(rating);
        }
        Ok(())
    }

    pub fn draft(&self, question_id: u16) -> Option<ResponseDraft> {
        let run = self.active.as_ref()?;
        run.drafts.get(&question_id).copied()
    }

    /// Move to the next question. The current question must be fully rated
    /// first, mirroring the one-question-at-a-time flow of the UI.
    pub fn advance(&mut self) -> Result<AdvanceOutcome> {
        let run = self.active_run()?;
        let current = QUESTIONS
            .get(run.current_index)
            .ok_or(EngineError::NoActiveAssessment)?;
        let complete = run
            .drafts
            .get(&current.id)
            .map(|d| d.is_complete())
            .unwrap_or(false);
        if !complete {
            return Err(EngineError::ResponseIncomplete(current.id));
        }
        if run.current_index + 1 < QUESTIONS.len() {
            run.current_index += 1;
            Ok(AdvanceOutcome::Next(&QUESTIONS[run.current_index]))
        } else {
            Ok(AdvanceOutcome::EndReached)
        }
    }

    pub fn back(&mut self) -> Option<&'static Question> {
        let run = self.active.as_mut()?;
        if run.current_index > 0 {
            run.current_index -= 1;
        }
        QUESTIONS.get(run.current_index)
    }

    /// Fully answered share of the questionnaire, 0-100.
    pub fn progress(&self) -> u8 {
        let answered = self
            .active
            .as_ref()
            .map(|run| run.drafts.values().filter(|d| d.is_complete()).count())
            .unwrap_or(0);
        (100.0 * answered as f64 / QUESTIONS.len() as f64).round() as u8
    }

    /// Finish the in-progress run under the given display name. Questions
    /// with only one of the two scales rated are dropped, the same way the
    /// original flow discards half-answered questions on completion.
    pub fn complete(&mut self, name: &str) -> Result<&PartnerRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::NameRequired);
        }
        let run = self.active.take().ok_or(EngineError::NoActiveAssessment)?;
        let responses = run
            .drafts
            .iter()
            .filter_map(|(&question_id, draft)| draft.into_response(question_id));
        let record = PartnerRecord::new(name, responses);
        info!(
            "✅ {} completed the questionnaire as \"{}\" ({} answered)",
            run.slot,
            record.name,
            record.responses.len()
        );
        let slot = match run.slot {
            PartnerSlot::A => &mut self.partner_a,
            PartnerSlot::B => &mut self.partner_b,
        };
        Ok(slot.insert(record))
    }

    /// Abandon the in-progress run, discarding its answers. Used by input
    /// adapters (e.g. the voice flow) when the user bails out mid-way.
    pub fn cancel(&mut self) {
        if let Some(run) = self.active.take() {
            warn!("🚫 {} cancelled the questionnaire mid-way", run.slot);
        }
    }

    /// Supply a partner record wholesale, bypassing the question-by-question
    /// flow. Bulk entry point for pre-collected response sets.
    pub fn load_partner(&mut self, slot: PartnerSlot, record: PartnerRecord) {
        info!(
            "📥 Loaded {} record for \"{}\" ({} responses)",
            slot,
            record.name,
            record.responses.len()
        );
        match slot {
            PartnerSlot::A => self.partner_a = Some(record),
            PartnerSlot::B => self.partner_b = Some(record),
        }
    }

    pub fn partner(&self, slot: PartnerSlot) -> Option<&PartnerRecord> {
        match slot {
            PartnerSlot::A => self.partner_a.as_ref(),
            PartnerSlot::B => self.partner_b.as_ref(),
        }
    }

    /// Couple comparison over whatever records exist right now.
    pub fn comparison(&self) -> ComparisonStatus {
        scoring::compare(self.partner_a.as_ref(), self.partner_b.as_ref())
    }

    /// Single-partner quality-of-life report. Available as soon as that
    /// partner finishes, even while the comparison is still waiting on the
    /// other partner.
    pub fn quality_report(&self, slot: PartnerSlot) -> Result<QualityOfLifeReport> {
        let record = self
            .partner(slot)
            .ok_or_else(|| EngineError::PartnerNotFinished(slot.label().to_string()))?;
        quality_of_life::analyze(&record.response_list())
    }

    /// Throw everything away and return to a blank session.
    pub fn restart(&mut self) {
        info!("🔄 Session {} restarted", self.id);
        self.active = None;
        self.partner_a = None;
        self.partner_b = None;
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable shared handle for callers that hand one session to several
/// components (UI, voice adapter, report exporter).
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<AssessmentSession>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        SessionHandle {
            inner: Arc::new(Mutex::new(AssessmentSession::new())),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut AssessmentSession) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(v: u8) -> Rating {
        Rating::new(v).unwrap()
    }

    fn answer_all(session: &mut AssessmentSession, importance: u8, flexibility: u8) {
        for q in QUESTIONS.iter() {
            session.set_importance(q.id, rating(importance)).unwrap();
            session.set_flexibility(q.id, rating(flexibility)).unwrap();
        }
    }

    #[test]
    fn rating_requires_an_active_run() {
        let mut session = AssessmentSession::new();
        assert_eq!(
            session.set_importance(1, rating(3)),
            Err(EngineError::NoActiveAssessment)
        );
    }

    #[test]
    fn drafts_upsert_per_question() {
        let mut session = AssessmentSession::new();
        session.start(PartnerSlot::A);

        session.set_importance(5, rating(2)).unwrap();
        session.set_importance(5, rating(4)).unwrap();
        session.set_flexibility(5, rating(1)).unwrap();

        let draft = session.draft(5).unwrap();
        assert_eq!(draft.importance.unwrap().get(), 4);
        assert_eq!(draft.flexibility.unwrap().get(), 1);
    }

    #[test]
    fn unknown_question_ids_are_rejected() {
        let mut session = AssessmentSession::new();
        session.start(PartnerSlot::A);
        assert_eq!(
            session.set_importance(87, rating(3)),
            Err(EngineError::UnknownQuestion(87))
        );
    }

    #[test]
    fn advance_requires_a_complete_rating() {
        let mut session = AssessmentSession::new();
        session.start(PartnerSlot::A);
        assert_eq!(session.current_question().unwrap().id, 1);

        assert_eq!(session.advance(), Err(EngineError::ResponseIncomplete(1)));

        session.set_importance(1, rating(3)).unwrap();
        assert_eq!(session.advance(), Err(EngineError::ResponseIncomplete(1)));

        session.set_flexibility(1, rating(3)).unwrap();
        match session.advance().unwrap() {
            AdvanceOutcome::Next(q) => assert_eq!(q.id, 2),
            AdvanceOutcome::EndReached => panic!("should not reach the end at question 1"),
        }

        assert_eq!(session.back().unwrap().id, 1);
    }

    #[test]
    fn complete_requires_a_name_and_filters_partial_answers() {
        let mut session = AssessmentSession::new();
        session.start(PartnerSlot::A);

        session.set_importance(1, rating(3)).unwrap();
        session.set_flexibility(1, rating(3)).unwrap();
        session.set_importance(2, rating(5)).unwrap(); // flexibility never set

        assert_eq!(session.complete("   ").unwrap_err(), EngineError::NameRequired);

        let record = session.complete("Alex").unwrap();
        assert_eq!(record.name, "Alex");
        assert_eq!(record.responses.len(), 1);
        assert!(record.response(2).is_none());
    }

    #[test]
    fn progress_counts_fully_answered_questions() {
        let mut session = AssessmentSession::new();
        session.start(PartnerSlot::A);
        assert_eq!(session.progress(), 0);

        for id in 1..=43u16 {
            session.set_importance(id, rating(3)).unwrap();
            session.set_flexibility(id, rating(3)).unwrap();
        }
        assert_eq!(session.progress(), 50); // round(100 * 43 / 86)
    }

    #[test]
    fn comparison_moves_through_waiting_to_ready() {
        let mut session = AssessmentSession::new();
        assert!(matches!(session.comparison(), ComparisonStatus::NotStarted));

        session.start(PartnerSlot::A);
        answer_all(&mut session, 3, 3);
        session.complete("Jordan").unwrap();

        match session.comparison() {
            ComparisonStatus::Waiting { completed } => assert_eq!(completed, "Jordan"),
            other => panic!("expected Waiting, got {:?}", other),
        }
        // the finished partner can already see their own analysis
        assert!(session.quality_report(PartnerSlot::A).is_ok());
        assert!(session.quality_report(PartnerSlot::B).is_err());

        session.start(PartnerSlot::B);
        answer_all(&mut session, 4, 2);
        session.complete("Sam").unwrap();

        match session.comparison() {
            ComparisonStatus::Ready(report) => {
                assert_eq!(report.overall.total(), 86);
                assert_eq!(report.overall.aligned, 86); // gap 1 everywhere
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn cancel_discards_the_run_without_a_record() {
        let mut session = AssessmentSession::new();
        session.start(PartnerSlot::B);
        session.set_importance(1, rating(5)).unwrap();
        session.set_flexibility(1, rating(5)).unwrap();
        session.cancel();

        assert!(session.partner(PartnerSlot::B).is_none());
        assert_eq!(
            session.complete("Sam").unwrap_err(),
            EngineError::NoActiveAssessment
        );
    }

    #[test]
    fn retaking_a_slot_replaces_the_previous_record() {
        // Re-taking a finished slot is allowed and overwrites the earlier
        // record, matching the original flow (no already-completed error).
        let mut session = AssessmentSession::new();
        session.start(PartnerSlot::A);
        answer_all(&mut session, 3, 3);
        session.complete("Jordan").unwrap();

        session.start(PartnerSlot::A);
        session.set_importance(1, rating(5)).unwrap();
        session.set_flexibility(1, rating(2)).unwrap();
        session.complete("Jo").unwrap();

        let record = session.partner(PartnerSlot::A).unwrap();
        assert_eq!(record.name, "Jo");
        assert_eq!(record.responses.len(), 1);
    }

    #[test]
    fn restart_clears_all_partner_records() {
        let mut session = AssessmentSession::new();
        session.start(PartnerSlot::A);
        answer_all(&mut session, 3, 3);
        session.complete("Jordan").unwrap();

        session.restart();
        assert!(matches!(session.comparison(), ComparisonStatus::NotStarted));
    }

    #[test]
    fn handle_shares_one_session_between_clones() {
        let handle = SessionHandle::new();
        let clone = handle.clone();

        handle.with(|s| {
            s.start(PartnerSlot::A);
            s.set_importance(1, rating(4)).unwrap();
            s.set_flexibility(1, rating(2)).unwrap();
        });
        let draft = clone.with(|s| s.draft(1)).unwrap();
        assert_eq!(draft.importance.unwrap().get(), 4);
    }
}
