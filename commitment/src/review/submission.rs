use super::consent::{ConsentGate, ConsentState};
use super::input::ReviewInput;
use super::variant::{variant_for_label, Variant};

pub const SUBMIT_LABEL: &str = "Create Commitment";
pub const PROCESSING_LABEL: &str = "Processing Transaction...";

/// Submission state as reported by the caller. The step reads it and never writes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionSignals {
    pub is_submitting: bool,
    pub submit_error: Option<String>,
}

impl SubmissionSignals {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn submitting() -> Self {
        Self {
            is_submitting: true,
            submit_error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            is_submitting: false,
            submit_error: Some(error.into()),
        }
    }

    /// Error text to show, if any. Empty strings count as no error.
    pub fn error_text(&self) -> Option<&str> {
        self.submit_error.as_deref().filter(|text| !text.is_empty())
    }
}

/// What the submit control should look like this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub busy: bool,
    pub enabled: bool,
}

impl SubmitControl {
    pub fn resolve(gate: &ConsentGate, signals: &SubmissionSignals) -> Self {
        if signals.is_submitting {
            Self {
                label: PROCESSING_LABEL,
                busy: true,
                enabled: false,
            }
        } else {
            Self {
                label: SUBMIT_LABEL,
                busy: false,
                enabled: gate.can_submit(false),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    AlreadySubmitting,
    ConsentMissing(ConsentState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Dispatched,
    Ignored(IgnoreReason),
}

impl SubmitOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, SubmitOutcome::Dispatched)
    }
}

/// A mounted review step: the caller's read-only input plus the consent it collects.
///
/// Dropping the step drops the consent with it.
#[derive(Debug, Clone)]
pub struct ReviewStep {
    input: ReviewInput,
    consent: ConsentGate,
}

impl ReviewStep {
    pub fn mount(input: ReviewInput) -> Self {
        tracing::debug!(type_label = %input.type_label, "review step mounted");
        Self {
            input,
            consent: ConsentGate::new(),
        }
    }

    pub fn input(&self) -> &ReviewInput {
        &self.input
    }

    pub fn consent(&self) -> &ConsentGate {
        &self.consent
    }

    pub fn variant(&self) -> Variant {
        variant_for_label(&self.input.type_label)
    }

    pub fn toggle_terms(&mut self) {
        self.consent.toggle_terms();
    }

    pub fn toggle_risks(&mut self) {
        self.consent.toggle_risks();
    }

    pub fn can_submit(&self, signals: &SubmissionSignals) -> bool {
        self.consent.can_submit(signals.is_submitting)
    }

    /// Relays a submit intent to `on_submit`, exactly once, when eligible.
    ///
    /// An ineligible call never reaches `on_submit`; nothing is queued for later.
    pub fn submit<F: FnOnce()>(&self, signals: &SubmissionSignals, on_submit: F) -> SubmitOutcome {
        if signals.is_submitting {
            tracing::debug!("submit ignored: submission already in flight");
            return SubmitOutcome::Ignored(IgnoreReason::AlreadySubmitting);
        }
        if !self.can_submit(signals) {
            let state = self.consent.state();
            tracing::debug!(?state, "submit ignored: consent incomplete");
            return SubmitOutcome::Ignored(IgnoreReason::ConsentMissing(state));
        }

        tracing::info!(type_label = %self.input.type_label, "submitting commitment");
        on_submit();
        SubmitOutcome::Dispatched
    }

    /// Back navigation does no cleanup; the caller decides what happens to the step.
    pub fn back<F: FnOnce()>(&self, on_back: F) {
        on_back();
    }
}
