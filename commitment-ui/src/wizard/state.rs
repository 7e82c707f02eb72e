use commitment::{ReviewInput, ReviewStep, SubmissionReceipt, SubmissionSignals};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Configure,
    Review,
    Complete,
}

/// Lifecycle of the create action, owned by the wizard rather than the review step.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Pending,
    Succeeded(SubmissionReceipt),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct WizardState {
    pub current_step: WizardStep,

    // Values produced by the earlier steps
    pub input: ReviewInput,

    // Only present while the review step is mounted
    pub review: Option<ReviewStep>,

    pub phase: SubmissionPhase,
}

impl WizardState {
    pub fn new(input: ReviewInput) -> Self {
        Self {
            current_step: WizardStep::default(),
            input,
            review: None,
            phase: SubmissionPhase::default(),
        }
    }

    /// The two signals handed back to the review step each frame.
    pub fn signals(&self) -> SubmissionSignals {
        match &self.phase {
            SubmissionPhase::Pending => SubmissionSignals::submitting(),
            SubmissionPhase::Failed(error) => SubmissionSignals::failed(error.clone()),
            SubmissionPhase::Idle | SubmissionPhase::Succeeded(_) => SubmissionSignals::idle(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Pending
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        match &self.phase {
            SubmissionPhase::Succeeded(receipt) => Some(receipt),
            _ => None,
        }
    }
}
