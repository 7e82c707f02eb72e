//! Display model for the review screen.
//!
//! Hosts (egui, terminal) render a [`ReviewView`] and never format values
//! themselves, so every label and string the user sees is decided here.

use super::consent::ConsentGate;
use super::input::ReviewInput;
use super::submission::{SubmissionSignals, SubmitControl};
use super::variant::{variant_for_label, Variant};

pub const TITLE: &str = "Create Commitment";
pub const SUBTITLE: &str = "Define your liquidity commitment with explicit rules and guarantees";
pub const REVIEW_TITLE: &str = "Review & Confirm";
pub const REVIEW_SUBTITLE: &str = "Please review your commitment details before confirming";
pub const CARD_SUBTITLE: &str = "Your commitment summary";
pub const BACK_LABEL: &str = "Back";
pub const NOTICE_TITLE: &str = "Important Notice";
pub const NOTICE_BODY: &str = "Once created, this commitment cannot be modified. Early exits will incur the penalty shown above. Make sure all details are correct before proceeding.";
pub const DISCLAIMER: &str = "This will initiate a blockchain transaction";

pub const TERMS_TITLE: &str = "I agree to the terms and conditions";
pub const TERMS_DESCRIPTION: &str = "I have read and understand the terms of service and smart contract exit conditions.";
pub const RISKS_TITLE: &str = "I acknowledge the risks";
pub const RISKS_DESCRIPTION: &str = "I understand that DeFi protocols carry inherent risks including smart contract vulnerabilities, market volatility, and potential loss of funds. I accept these risks.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardStepBadge {
    pub number: u8,
    pub label: &'static str,
    pub status: StepStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
    pub highlight: bool,
}

impl DetailRow {
    fn plain(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            highlight: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentKind {
    Terms,
    Risks,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentRow {
    pub kind: ConsentKind,
    pub title: &'static str,
    pub description: &'static str,
    pub checked: bool,
}

/// Everything the review screen shows for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewView {
    pub steps: Vec<WizardStepBadge>,
    pub variant: Variant,
    pub type_label: String,
    pub primary: Vec<DetailRow>,
    pub secondary: Vec<DetailRow>,
    pub consents: Vec<ConsentRow>,
    pub error: Option<String>,
    pub submit: SubmitControl,
}

impl ReviewView {
    pub fn build(input: &ReviewInput, gate: &ConsentGate, signals: &SubmissionSignals) -> Self {
        Self {
            steps: wizard_steps(),
            variant: variant_for_label(&input.type_label),
            type_label: input.type_label.clone(),
            primary: vec![
                DetailRow::plain("Amount", input.amount_display()),
                DetailRow::plain("Duration", input.duration_display()),
                DetailRow::plain("Max Loss", input.max_loss_display()),
                DetailRow::plain("Early Exit Penalty", input.early_exit_penalty.clone()),
            ],
            secondary: vec![
                DetailRow::plain("Estimated Transaction Fees", input.estimated_fees.clone()),
                DetailRow {
                    label: "Estimated Yield (APY)",
                    value: input.estimated_yield.clone(),
                    highlight: true,
                },
                DetailRow::plain("Commitment Start", input.commitment_start.clone()),
                DetailRow::plain("Commitment End", input.commitment_end.clone()),
            ],
            consents: vec![
                ConsentRow {
                    kind: ConsentKind::Terms,
                    title: TERMS_TITLE,
                    description: TERMS_DESCRIPTION,
                    checked: gate.accepted_terms(),
                },
                ConsentRow {
                    kind: ConsentKind::Risks,
                    title: RISKS_TITLE,
                    description: RISKS_DESCRIPTION,
                    checked: gate.acknowledged_risks(),
                },
            ],
            error: signals.error_text().map(str::to_string),
            submit: SubmitControl::resolve(gate, signals),
        }
    }

    pub fn row(&self, label: &str) -> Option<&DetailRow> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .find(|row| row.label == label)
    }
}

fn wizard_steps() -> Vec<WizardStepBadge> {
    vec![
        WizardStepBadge {
            number: 1,
            label: "Select Type",
            status: StepStatus::Completed,
        },
        WizardStepBadge {
            number: 2,
            label: "Configure",
            status: StepStatus::Completed,
        },
        WizardStepBadge {
            number: 3,
            label: "Review",
            status: StepStatus::Active,
        },
    ]
}
