use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use commitment::{CommitmentSubmitter, ReviewInput, ReviewStep, SubmissionReceipt};

use super::{SubmissionPhase, WizardAction, WizardState, WizardStep};
use crate::wasm_utils;

type SubmissionSlot = Arc<Mutex<Option<Result<SubmissionReceipt, String>>>>;

pub struct CommitmentWizardManager {
    // Current state - single source of truth
    state: WizardState,

    // Caller-supplied create action
    submitter: Arc<dyn CommitmentSubmitter>,

    // Actions queued by the UI this frame
    pending_actions: VecDeque<WizardAction>,

    // Async bridge for the in-flight submission
    submission_slot: Option<SubmissionSlot>,
}

impl CommitmentWizardManager {
    pub fn new(input: ReviewInput, submitter: Arc<dyn CommitmentSubmitter>) -> Self {
        Self {
            state: WizardState::new(input),
            submitter,
            pending_actions: VecDeque::new(),
            submission_slot: None,
        }
    }

    /// UI calls this - synchronous, just queues the action
    pub fn dispatch(&mut self, action: WizardAction) {
        log::debug!("Dispatching action: {}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Call this each frame - drains the queue in order
    pub fn update(&mut self) {
        while let Some(action) = self.pending_actions.pop_front() {
            log::debug!("Processing action: {}", action.description());
            self.handle_action(action);
        }
    }

    /// Call this each frame - picks up a finished submission, if any
    pub fn update_from_async(&mut self) {
        let Some(slot) = &self.submission_slot else {
            return;
        };

        let finished = match slot.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => Some(Err("Submission task panicked".to_string())),
        };

        if let Some(result) = finished {
            self.submission_slot = None;
            self.finish_submission(result);
        }
    }

    /// UI reads this - immutable reference
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Check if there is queued or in-flight work (for UI repaint requests)
    pub fn has_pending_work(&self) -> bool {
        !self.pending_actions.is_empty() || self.submission_slot.is_some()
    }

    fn handle_action(&mut self, action: WizardAction) {
        match action {
            WizardAction::EnterReview => self.handle_enter_review(),
            WizardAction::GoBack => self.handle_go_back(),
            WizardAction::Reset => self.handle_reset(),
            WizardAction::ToggleTerms => {
                if let Some(review) = self.state.review.as_mut() {
                    review.toggle_terms();
                }
            }
            WizardAction::ToggleRisks => {
                if let Some(review) = self.state.review.as_mut() {
                    review.toggle_risks();
                }
            }
            WizardAction::Submit => self.handle_submit(),
            WizardAction::DismissError => {
                if matches!(self.state.phase, SubmissionPhase::Failed(_)) {
                    self.state.phase = SubmissionPhase::Idle;
                }
            }
        }
    }
}

// Action handler implementations
impl CommitmentWizardManager {
    fn handle_enter_review(&mut self) {
        if self.state.current_step != WizardStep::Configure {
            log::warn!("Cannot enter review from {:?}", self.state.current_step);
            return;
        }

        // Fresh consent on every visit
        self.state.review = Some(ReviewStep::mount(self.state.input.clone()));
        self.state.phase = SubmissionPhase::Idle;
        self.state.current_step = WizardStep::Review;
        log::info!("Entered review step");
    }

    fn handle_go_back(&mut self) {
        if self.state.current_step != WizardStep::Review {
            return;
        }
        if self.state.is_submitting() {
            log::warn!("Ignoring back navigation while a submission is in flight");
            return;
        }

        if let Some(review) = self.state.review.take() {
            review.back(|| log::info!("Review step unmounted"));
        }
        self.state.phase = SubmissionPhase::Idle;
        self.state.current_step = WizardStep::Configure;
    }

    fn handle_reset(&mut self) {
        if self.state.is_submitting() {
            log::warn!("Ignoring reset while a submission is in flight");
            return;
        }

        self.state = WizardState::new(self.state.input.clone());
        self.pending_actions.clear();
        log::info!("Wizard state reset");
    }

    fn handle_submit(&mut self) {
        let Some(review) = &self.state.review else {
            return;
        };

        let signals = self.state.signals();
        let mut requested = false;
        let outcome = review.submit(&signals, || requested = true);
        if !requested {
            log::debug!("Submit intent ignored: {:?}", outcome);
            return;
        }

        let input = review.input().clone();
        self.start_submission(input);
    }

    fn start_submission(&mut self, input: ReviewInput) {
        self.state.phase = SubmissionPhase::Pending;

        let slot: SubmissionSlot = Arc::new(Mutex::new(None));
        let slot_clone = slot.clone();
        self.submission_slot = Some(slot);

        let submitter = self.submitter.clone();
        wasm_utils::spawn_async(async move {
            wasm_utils::console_log("⏳ Submitting commitment transaction...");

            let result = submitter.submit(&input).await.map_err(|e| e.to_string());
            match &result {
                Ok(receipt) => wasm_utils::console_log(&format!(
                    "✅ Commitment created: {}",
                    receipt.transaction_id
                )),
                Err(error) => wasm_utils::console_log(&format!("❌ Commitment failed: {}", error)),
            }

            if let Ok(mut guard) = slot_clone.lock() {
                *guard = Some(result);
            }
        });
    }

    fn finish_submission(&mut self, result: Result<SubmissionReceipt, String>) {
        match result {
            Ok(receipt) => {
                log::info!("Commitment confirmed: {}", receipt.transaction_id);
                self.state.review = None;
                self.state.current_step = WizardStep::Complete;
                self.state.phase = SubmissionPhase::Succeeded(receipt);
            }
            Err(error) => {
                log::error!("Commitment submission failed: {}", error);
                self.state.phase = SubmissionPhase::Failed(error);
            }
        }
    }
}
