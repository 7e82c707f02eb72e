#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    // Navigation
    EnterReview,
    GoBack,
    Reset,

    // Review step
    ToggleTerms,
    ToggleRisks,
    Submit,

    // Error handling
    DismissError,
}

impl WizardAction {
    pub fn description(&self) -> &'static str {
        match self {
            WizardAction::EnterReview => "Entering review step",
            WizardAction::GoBack => "Going back to configuration",
            WizardAction::Reset => "Resetting wizard",
            WizardAction::ToggleTerms => "Toggling terms acceptance",
            WizardAction::ToggleRisks => "Toggling risk acknowledgement",
            WizardAction::Submit => "Submitting commitment",
            WizardAction::DismissError => "Dismissing submission error",
        }
    }

    pub fn is_async(&self) -> bool {
        matches!(self, WizardAction::Submit)
    }
}
