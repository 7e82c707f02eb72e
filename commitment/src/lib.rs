pub mod config;
pub mod loader;
pub mod review;
pub mod submitter;
pub mod util;

pub use config::Config;
pub use review::{
    ConsentGate, ConsentState, ReviewInput, ReviewStep, ReviewView, SubmissionSignals,
    SubmitControl, SubmitOutcome, Variant,
};
pub use submitter::{CommitmentSubmitter, SimulatedSubmitter, SubmissionReceipt};
pub use util::errors::CommitmentError;
