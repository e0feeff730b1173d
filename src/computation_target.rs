use serde::{Deserialize, Serialize};

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComputationTarget {
    #[default]
    SampleSize,
    Power,
}
