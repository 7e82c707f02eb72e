#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use commitment::config::SubmissionConfig;
    use commitment::review::{ConsentState, PROCESSING_LABEL};
    use commitment::{ReviewInput, ReviewView, SimulatedSubmitter};

    use crate::wizard::{CommitmentWizardManager, SubmissionPhase, WizardAction, WizardStep};

    fn manager_with(forced_error: Option<&str>) -> CommitmentWizardManager {
        let submitter = SimulatedSubmitter::new(SubmissionConfig {
            latency_ms: 0,
            forced_error: forced_error.map(str::to_string),
        });
        CommitmentWizardManager::new(ReviewInput::demo(), Arc::new(submitter))
    }

    fn run(manager: &mut CommitmentWizardManager, actions: &[WizardAction]) {
        for action in actions {
            manager.dispatch(*action);
        }
        manager.update();
    }

    async fn settle(manager: &mut CommitmentWizardManager) {
        for _ in 0..100 {
            manager.update_from_async();
            if !manager.has_pending_work() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("submission never finished");
    }

    fn consent_state(manager: &CommitmentWizardManager) -> Option<ConsentState> {
        manager.state().review.as_ref().map(|r| r.consent().state())
    }

    #[test]
    fn test_initial_state() {
        let manager = manager_with(None);
        let state = manager.state();

        assert_eq!(state.current_step, WizardStep::Configure);
        assert!(state.review.is_none());
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert!(!manager.has_pending_work());
    }

    #[test]
    fn test_enter_review_mounts_fresh_consent() {
        let mut manager = manager_with(None);
        run(&mut manager, &[WizardAction::EnterReview]);

        assert_eq!(manager.state().current_step, WizardStep::Review);
        assert_eq!(consent_state(&manager), Some(ConsentState::Neither));
    }

    #[test]
    fn test_submit_without_consent_stays_idle() {
        let mut manager = manager_with(None);
        run(
            &mut manager,
            &[WizardAction::EnterReview, WizardAction::ToggleTerms, WizardAction::Submit],
        );

        assert_eq!(manager.state().phase, SubmissionPhase::Idle);
        assert!(!manager.has_pending_work());
    }

    #[test]
    fn test_going_back_resets_consent() {
        let mut manager = manager_with(None);
        run(
            &mut manager,
            &[
                WizardAction::EnterReview,
                WizardAction::ToggleTerms,
                WizardAction::ToggleRisks,
                WizardAction::GoBack,
            ],
        );
        assert_eq!(manager.state().current_step, WizardStep::Configure);
        assert!(manager.state().review.is_none());

        run(&mut manager, &[WizardAction::EnterReview]);
        assert_eq!(consent_state(&manager), Some(ConsentState::Neither));
    }

    #[tokio::test]
    async fn test_successful_submission_completes_wizard() {
        let mut manager = manager_with(None);
        run(
            &mut manager,
            &[
                WizardAction::EnterReview,
                WizardAction::ToggleTerms,
                WizardAction::ToggleRisks,
                WizardAction::Submit,
            ],
        );

        assert!(manager.state().is_submitting());
        let state = manager.state();
        let review = state.review.as_ref().unwrap();
        let view = ReviewView::build(review.input(), review.consent(), &state.signals());
        assert_eq!(view.submit.label, PROCESSING_LABEL);
        assert!(!view.submit.enabled);

        settle(&mut manager).await;

        assert_eq!(manager.state().current_step, WizardStep::Complete);
        assert!(manager.state().review.is_none());
        assert!(manager.state().receipt().is_some());
    }

    #[tokio::test]
    async fn test_duplicate_submit_is_suppressed() {
        let mut manager = manager_with(None);
        run(
            &mut manager,
            &[
                WizardAction::EnterReview,
                WizardAction::ToggleTerms,
                WizardAction::ToggleRisks,
                WizardAction::Submit,
                WizardAction::Submit,
                WizardAction::GoBack,
            ],
        );

        // Second submit and back are both inert while pending
        assert!(manager.state().is_submitting());
        assert_eq!(manager.state().current_step, WizardStep::Review);

        settle(&mut manager).await;
        assert_eq!(manager.state().current_step, WizardStep::Complete);
    }

    #[tokio::test]
    async fn test_failed_submission_surfaces_error_verbatim() {
        let mut manager = manager_with(Some("Insufficient balance"));
        run(
            &mut manager,
            &[
                WizardAction::EnterReview,
                WizardAction::ToggleTerms,
                WizardAction::ToggleRisks,
                WizardAction::Submit,
            ],
        );
        settle(&mut manager).await;

        let state = manager.state();
        assert_eq!(state.current_step, WizardStep::Review);
        assert_eq!(state.phase, SubmissionPhase::Failed("Insufficient balance".to_string()));

        let review = state.review.as_ref().unwrap();
        let view = ReviewView::build(review.input(), review.consent(), &state.signals());
        assert_eq!(view.error.as_deref(), Some("Insufficient balance"));
        assert!(view.submit.enabled);

        run(&mut manager, &[WizardAction::DismissError]);
        assert_eq!(manager.state().phase, SubmissionPhase::Idle);
    }

    #[tokio::test]
    async fn test_reset_after_completion() {
        let mut manager = manager_with(None);
        run(
            &mut manager,
            &[
                WizardAction::EnterReview,
                WizardAction::ToggleTerms,
                WizardAction::ToggleRisks,
                WizardAction::Submit,
            ],
        );
        settle(&mut manager).await;

        run(&mut manager, &[WizardAction::Reset]);
        assert_eq!(manager.state().current_step, WizardStep::Configure);
        assert_eq!(manager.state().phase, SubmissionPhase::Idle);
    }

    #[test]
    fn test_action_descriptions() {
        assert!(WizardAction::Submit.is_async());
        assert!(!WizardAction::ToggleTerms.is_async());
        assert_eq!(WizardAction::GoBack.description(), "Going back to configuration");
    }
}
