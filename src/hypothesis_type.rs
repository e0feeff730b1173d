use serde::{Deserialize, Serialize};
use std::fmt;

/// Rejection region of a single power calculation
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alternative {
    #[default]
    TwoSided,
    Larger,
    Smaller,
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alternative::TwoSided => write!(f, "two-sided"),
            Alternative::Larger => write!(f, "larger"),
            Alternative::Smaller => write!(f, "smaller"),
        }
    }
}
