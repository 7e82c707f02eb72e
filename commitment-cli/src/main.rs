use clap::Parser;
use commitment::loader::load_review_input;
use commitment::review::{ReviewStep, ReviewView, StepStatus, SubmissionSignals, PROCESSING_LABEL};
use commitment::review::view;
use commitment::{
    CommitmentSubmitter, Config, ReviewInput, SimulatedSubmitter, SubmissionReceipt, SubmitOutcome,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Review a commitment and, once both consents are given, submit it.
#[derive(Parser, Debug)]
#[command(name = "commitment-cli", version)]
struct Cli {
    /// Review input produced by the earlier wizard steps (YAML or JSON)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Config file (defaults to ./commitment.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Agree to the terms and conditions
    #[arg(long)]
    accept_terms: bool,

    /// Acknowledge the protocol risks
    #[arg(long)]
    acknowledge_risks: bool,

    /// Attempt to create the commitment
    #[arg(long)]
    submit: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.application.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let input = match &cli.input {
        Some(path) => load_review_input(path)?,
        None => ReviewInput::demo(),
    };

    let mut step = ReviewStep::mount(input);
    if cli.accept_terms {
        step.toggle_terms();
    }
    if cli.acknowledge_risks {
        step.toggle_risks();
    }

    print_review(&ReviewView::build(
        step.input(),
        step.consent(),
        &SubmissionSignals::idle(),
    ));

    if !cli.submit {
        return Ok(());
    }

    let submitter = SimulatedSubmitter::new(config.submission.clone());
    if let Some(receipt) = submit_commitment(&step, &submitter).await? {
        println!("✅ Commitment created");
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    }

    Ok(())
}

/// Runs the create action for a consented step. `Ok(None)` means the gate kept the submit inert.
async fn submit_commitment(
    step: &ReviewStep,
    submitter: &dyn CommitmentSubmitter,
) -> anyhow::Result<Option<SubmissionReceipt>> {
    let outcome = step.submit(&SubmissionSignals::idle(), || {
        println!("\n⏳ {}", PROCESSING_LABEL);
    });
    if let SubmitOutcome::Ignored(reason) = outcome {
        println!(
            "\nSubmission not started ({:?}). Pass --accept-terms and --acknowledge-risks.",
            reason
        );
        return Ok(None);
    }

    match submitter.submit(step.input()).await {
        Ok(receipt) => Ok(Some(receipt)),
        Err(error) => {
            let signals = SubmissionSignals::failed(error.to_string());
            print_footer(&ReviewView::build(step.input(), step.consent(), &signals));
            anyhow::bail!("commitment submission failed: {}", error)
        }
    }
}

fn print_review(review: &ReviewView) {
    println!("{}\n{}\n", view::TITLE, view::SUBTITLE);

    let stepper: Vec<String> = review
        .steps
        .iter()
        .map(|step| match step.status {
            StepStatus::Completed => format!("✓ {}", step.label),
            StepStatus::Active => format!("[{}] {}", step.number, step.label),
        })
        .collect();
    println!("{}\n", stepper.join("  ──  "));

    println!("{}\n{}\n", view::REVIEW_TITLE, view::REVIEW_SUBTITLE);
    println!("{} {}  ({})", review.variant.icon(), review.type_label, review.variant);
    println!("{}", view::CARD_SUBTITLE);
    for row in review.primary.iter().chain(review.secondary.iter()) {
        let marker = if row.highlight { " *" } else { "" };
        println!("  {:<28} {}{}", row.label, row.value, marker);
    }

    println!();
    for consent in &review.consents {
        let mark = if consent.checked { "[x]" } else { "[ ]" };
        println!("{} {}\n    {}", mark, consent.title, consent.description);
    }

    println!("\n⚠ {}\n  {}", view::NOTICE_TITLE, view::NOTICE_BODY);
    print_footer(review);
}

fn print_footer(review: &ReviewView) {
    println!();
    if let Some(error) = &review.error {
        println!("❌ {}", error);
    }
    let state = if review.submit.busy {
        "busy"
    } else if review.submit.enabled {
        "enabled"
    } else {
        "disabled"
    };
    println!("[ {} ] ({})", review.submit.label, state);
    println!("ⓘ {}", view::DISCLAIMER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use commitment::config::SubmissionConfig;

    fn submitter(forced_error: Option<&str>) -> SimulatedSubmitter {
        SimulatedSubmitter::new(SubmissionConfig {
            latency_ms: 0,
            forced_error: forced_error.map(str::to_string),
        })
    }

    fn consented_step() -> ReviewStep {
        let mut step = ReviewStep::mount(ReviewInput::demo());
        step.toggle_terms();
        step.toggle_risks();
        step
    }

    #[tokio::test]
    async fn test_failed_submission_is_an_error() {
        let err = submit_commitment(&consented_step(), &submitter(Some("Insufficient balance")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Insufficient balance"));
    }

    #[tokio::test]
    async fn test_submit_without_consent_is_not_an_error() {
        let mut step = ReviewStep::mount(ReviewInput::demo());
        step.toggle_terms();

        let result = submit_commitment(&step, &submitter(None)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_consented_submission_returns_receipt() {
        let receipt = submit_commitment(&consented_step(), &submitter(None))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(receipt.type_label, "Balanced Commitment");
    }
}
