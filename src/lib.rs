pub mod assessment;
pub mod catalog;
pub mod quality_of_life;
pub mod report;
pub mod scoring;
pub mod session;

mod error;

pub use assessment::{PartnerRecord, Rating, Response, ResponseDraft};
pub use catalog::{Category, Question};
pub use error::{EngineError, Result};
pub use quality_of_life::{analyze, QualityLevel, QualityOfLifeReport};
pub use scoring::{classify, compare, Compatibility, ComparisonStatus};
pub use session::{AssessmentSession, PartnerSlot, SessionHandle};
