use serde::{Deserialize, Serialize};

/// Read-only commitment summary handed to the review step by earlier wizard steps.
///
/// Values arrive already formatted; the step renders them verbatim. Only
/// `duration_days` and `max_loss_percent` get a unit suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewInput {
    pub type_label: String,
    pub amount: String,
    pub asset: String,
    pub duration_days: u32,
    #[serde(default)]
    pub max_loss_percent: Option<f64>,
    pub early_exit_penalty: String,
    pub estimated_fees: String,
    pub estimated_yield: String,
    pub commitment_start: String,
    pub commitment_end: String,
}

impl ReviewInput {
    /// "<n> days"
    pub fn duration_display(&self) -> String {
        format!("{} days", self.duration_days)
    }

    /// "<n>%" when a limit was configured, otherwise the literal "N/A".
    pub fn max_loss_display(&self) -> String {
        match self.max_loss_percent {
            Some(percent) => format!("{}%", percent),
            None => "N/A".to_string(),
        }
    }

    /// Amount followed by the asset symbol, as shown in the summary grid.
    pub fn amount_display(&self) -> String {
        format!("{} {}", self.amount, self.asset)
    }

    /// Sample values for hosts started without an input file.
    pub fn demo() -> Self {
        Self {
            type_label: "Balanced Commitment".to_string(),
            amount: "50,000".to_string(),
            asset: "XLM".to_string(),
            duration_days: 90,
            max_loss_percent: Some(8.0),
            early_exit_penalty: "3%".to_string(),
            estimated_fees: "0.05 XLM".to_string(),
            estimated_yield: "8.2%".to_string(),
            commitment_start: "Jan 10, 2026".to_string(),
            commitment_end: "Apr 10, 2026".to_string(),
        }
    }
}
