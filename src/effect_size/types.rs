use serde::{Deserialize, Serialize};

/// Standardized effect handed to the power solver. Equivalence designs
/// produce the pair of margin-shifted effects tested by TOST.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EffectSize {
    Single { value: f64 },
    Tost { lower: f64, upper: f64 },
}
