use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid rating value: {0} (expected 1-5)")]
    InvalidRating(u8),
    #[error("Unknown question id: {0}")]
    UnknownQuestion(u16),
    #[error("No answered responses to analyze")]
    NoResponses,
    #[error("No assessment in progress")]
    NoActiveAssessment,
    #[error("Question {0} is not fully rated yet")]
    ResponseIncomplete(u16),
    #[error("A partner name is required to complete the assessment")]
    NameRequired,
    #[error("{0} has not finished the assessment")]
    PartnerNotFinished(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
