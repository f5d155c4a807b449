pub mod manager;

pub use manager::{AdvanceOutcome, AssessmentSession, SessionHandle};

use serde::{Deserialize, Serialize};

/// Which partner an answer set belongs to. At most one record per slot
/// exists in a session; the two are independent and only ever compared.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartnerSlot {
    A,
    B,
}

impl PartnerSlot {
    pub fn label(&self) -> &'static str {
        match self {
            PartnerSlot::A => "Partner A",
            PartnerSlot::B => "Partner B",
        }
    }
}

impl std::fmt::Display for PartnerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
