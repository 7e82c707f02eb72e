pub mod actions;
pub mod manager;
pub mod state;

#[cfg(test)]
mod tests;

pub use actions::WizardAction;
pub use manager::CommitmentWizardManager;
pub use state::{SubmissionPhase, WizardState, WizardStep};
