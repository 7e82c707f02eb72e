pub mod consent;
pub mod input;
pub mod submission;
pub mod variant;
pub mod view;


pub use consent::{can_submit, ConsentGate, ConsentState};
pub use input::ReviewInput;
pub use submission::{
    IgnoreReason, ReviewStep, SubmissionSignals, SubmitControl, SubmitOutcome,
    PROCESSING_LABEL, SUBMIT_LABEL,
};
pub use variant::{variant_for_label, Variant};
pub use view::{ConsentKind, ConsentRow, DetailRow, ReviewView, StepStatus, WizardStepBadge};
