use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, Result};

/// A single 1-5 rating. Construction is the only place range checking
/// happens; everything downstream can assume a valid value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(5);

    pub fn new(value: u8) -> Result<Self> {
        if (1..=5).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(EngineError::InvalidRating(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> u8 {
        r.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A question being rated mid-assessment. Either scale may still be blank;
/// only a draft with both scales set can become a `Response`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResponseDraft {
    pub importance: Option<Rating>,
    pub flexibility: Option<Rating>,
}

impl ResponseDraft {
    pub fn is_complete(&self) -> bool {
        self.importance.is_some() && self.flexibility.is_some()
    }

    pub fn into_response(self, question_id: u16) -> Option<Response> {
        match (self.importance, self.flexibility) {
            (Some(importance), Some(flexibility)) => Some(Response {
                question_id,
                importance,
                flexibility,
            }),
            _ => None,
        }
    }
}

/// A fully rated question. Both scales are always present here, so the
/// scoring layer never has to deal with partially answered questions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Response {
    pub question_id: u16,
    pub importance: Rating,
    pub flexibility: Rating,
}

/// One partner's completed answer set. Keyed by question id, so a partner
/// can never hold two responses to the same question.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PartnerRecord {
    pub name: String,
    pub responses: BTreeMap<u16, Response>,
    pub completed_at: DateTime<Utc>,
}

impl PartnerRecord {
    pub fn new(name: impl Into<String>, responses: impl IntoIterator<Item = Response>) -> Self {
        PartnerRecord {
            name: name.into(),
            responses: responses.into_iter().map(|r| (r.question_id, r)).collect(),
            completed_at: Utc::now(),
        }
    }

    pub fn response(&self, question_id: u16) -> Option<&Response> {
        self.responses.get(&question_id)
    }

    pub fn response_list(&self) -> Vec<Response> {
        self.responses.values().copied().collect()
    }
}
