use serde::{Deserialize, Serialize};

/// The four combinations of the two acknowledgements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentState {
    Neither,
    TermsOnly,
    RisksOnly,
    Both,
}

/// Pure eligibility rule shared by every host.
pub fn can_submit(accepted_terms: bool, acknowledged_risks: bool, is_submitting: bool) -> bool {
    accepted_terms && acknowledged_risks && !is_submitting
}

/// Two independent acknowledgements owned by a mounted review step.
///
/// Nothing here is cached: [`ConsentGate::can_submit`] derives eligibility
/// from the flags on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsentGate {
    accepted_terms: bool,
    acknowledged_risks: bool,
}

impl ConsentGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_terms(&mut self) {
        self.accepted_terms = !self.accepted_terms;
        tracing::debug!(accepted_terms = self.accepted_terms, "terms consent toggled");
    }

    pub fn toggle_risks(&mut self) {
        self.acknowledged_risks = !self.acknowledged_risks;
        tracing::debug!(acknowledged_risks = self.acknowledged_risks, "risk consent toggled");
    }

    pub fn accepted_terms(&self) -> bool {
        self.accepted_terms
    }

    pub fn acknowledged_risks(&self) -> bool {
        self.acknowledged_risks
    }

    pub fn state(&self) -> ConsentState {
        match (self.accepted_terms, self.acknowledged_risks) {
            (false, false) => ConsentState::Neither,
            (true, false) => ConsentState::TermsOnly,
            (false, true) => ConsentState::RisksOnly,
            (true, true) => ConsentState::Both,
        }
    }

    pub fn can_submit(&self, is_submitting: bool) -> bool {
        can_submit(self.accepted_terms, self.acknowledged_risks, is_submitting)
    }
}
