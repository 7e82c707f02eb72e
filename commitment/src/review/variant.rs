use serde::{Deserialize, Serialize};

/// Visual category of a commitment, derived from its free-text type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Safe,
    Aggressive,
    #[default]
    Balanced,
}

/// Evaluated top to bottom; the first needle found in the label wins.
const VARIANT_RULES: &[(&str, Variant)] = &[
    ("safe", Variant::Safe),
    ("aggressive", Variant::Aggressive),
];

/// Heuristic label classifier. Labels matching no rule fall back to
/// [`Variant::Balanced`]; that is expected, not an error.
pub fn variant_for_label(label: &str) -> Variant {
    let label = label.to_lowercase();
    VARIANT_RULES
        .iter()
        .find(|(needle, _)| label.contains(needle))
        .map(|(_, variant)| *variant)
        .unwrap_or_default()
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Safe => "safe",
            Variant::Aggressive => "aggressive",
            Variant::Balanced => "balanced",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Variant::Safe => "🛡",
            Variant::Aggressive => "🔥",
            Variant::Balanced => "📈",
        }
    }

    /// Accent colour as RGB.
    pub fn accent_rgb(&self) -> (u8, u8, u8) {
        match self {
            Variant::Safe => (16, 185, 129),
            Variant::Aggressive => (239, 68, 68),
            Variant::Balanced => (59, 130, 246),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
