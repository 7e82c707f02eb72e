//! The transaction side of a commitment: an opaque async action supplied by the host.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SubmissionConfig;
use crate::review::ReviewInput;
use crate::util::errors::{CommitmentError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub transaction_id: String,
    pub submitted_at: DateTime<Utc>,
    pub type_label: String,
}

#[async_trait]
pub trait CommitmentSubmitter: Send + Sync {
    async fn submit(&self, input: &ReviewInput) -> Result<SubmissionReceipt>;
}

/// Stand-in for a real transaction backend.
pub struct SimulatedSubmitter {
    config: SubmissionConfig,
}

impl SimulatedSubmitter {
    pub fn new(config: SubmissionConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CommitmentSubmitter for SimulatedSubmitter {
    async fn submit(&self, input: &ReviewInput) -> Result<SubmissionReceipt> {
        // Simulate network delay
        #[cfg(not(target_arch = "wasm32"))]
        if self.config.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        if let Some(error) = &self.config.forced_error {
            tracing::warn!(%error, "simulated submission failed");
            return Err(CommitmentError::Submission(error.clone()));
        }

        let receipt = SubmissionReceipt {
            transaction_id: format!("tx_{}", uuid::Uuid::new_v4().simple()),
            submitted_at: Utc::now(),
            type_label: input.type_label.clone(),
        };
        tracing::info!(transaction_id = %receipt.transaction_id, "simulated submission confirmed");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(forced_error: Option<&str>) -> SimulatedSubmitter {
        SimulatedSubmitter::new(SubmissionConfig {
            latency_ms: 0,
            forced_error: forced_error.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_simulated_success() {
        let receipt = instant(None).submit(&ReviewInput::demo()).await.unwrap();
        assert!(receipt.transaction_id.starts_with("tx_"));
        assert_eq!(receipt.type_label, "Balanced Commitment");
    }

    #[tokio::test]
    async fn test_forced_error_is_verbatim() {
        let err = instant(Some("Insufficient balance"))
            .submit(&ReviewInput::demo())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Insufficient balance");
    }

    #[tokio::test]
    async fn test_receipts_are_unique() {
        let submitter = instant(None);
        let a = submitter.submit(&ReviewInput::demo()).await.unwrap();
        let b = submitter.submit(&ReviewInput::demo()).await.unwrap();
        assert_ne!(a.transaction_id, b.transaction_id);
    }
}
