//----------------------------------------
// design mod types
//----------------------------------------
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hypothesis_type::Alternative;

/// Hypothesis framework of the comparison
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestType {
    #[default]
    Equality,
    Superiority,
    NonInferiority,
    Equivalence,
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestType::Equality => write!(f, "equality"),
            TestType::Superiority => write!(f, "superiority"),
            TestType::NonInferiority => write!(f, "non-inferiority"),
            TestType::Equivalence => write!(f, "equivalence"),
        }
    }
}

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sidedness {
    #[default]
    TwoSided,
    OneSided,
}

#[derive(Default, Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct StudyDesign {
    pub test_type: TestType,
    #[serde(default)]
    pub sidedness: Sidedness,
    #[serde(default)]
    pub margin: Option<f64>,
}

impl StudyDesign {
    pub fn equality(sidedness: Sidedness) -> Self {
        StudyDesign {
            test_type: TestType::Equality,
            sidedness,
            margin: None,
        }
    }

    pub fn with_margin(test_type: TestType, sidedness: Sidedness, margin: f64) -> Self {
        StudyDesign {
            test_type,
            sidedness,
            margin: Some(margin),
        }
    }

    /// Margin actually applied to the effect size; equality tests never
    /// use one, whatever was supplied
    pub fn effective_margin(&self) -> f64 {
        match self.test_type {
            TestType::Equality => 0.0,
            _ => self.margin.unwrap_or(0.0),
        }
    }

    /// Alternative used for the single solver call of the
    /// non-equivalence designs
    pub fn alternative(&self) -> Alternative {
        match self.sidedness {
            Sidedness::TwoSided => Alternative::TwoSided,
            Sidedness::OneSided => Alternative::Larger,
        }
    }
}

/// The two ways of entering the expected effect on the means page
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeanDifference {
    Means { mean1: f64, mean2: f64 },
    Difference { mean_diff: f64 },
}

impl MeanDifference {
    /// Signed group 1 minus group 2 difference
    pub fn raw_diff(&self) -> f64 {
        match *self {
            MeanDifference::Means { mean1, mean2 } => mean1 - mean2,
            MeanDifference::Difference { mean_diff } => mean_diff,
        }
    }

    /// Group means; a bare difference is read as (mean_diff, 0)
    pub fn means(&self) -> (f64, f64) {
        match *self {
            MeanDifference::Means { mean1, mean2 } => (mean1, mean2),
            MeanDifference::Difference { mean_diff } => (mean_diff, 0.0),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StdDev {
    Pooled { pooled_sd: f64 },
    Separate { sd1: f64, sd2: f64 },
}

impl StdDev {
    pub fn group_sds(&self) -> (f64, f64) {
        match *self {
            StdDev::Pooled { pooled_sd } => (pooled_sd, pooled_sd),
            StdDev::Separate { sd1, sd2 } => (sd1, sd2),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct MeansInput {
    pub difference: MeanDifference,
    pub sd: StdDev,
}

impl Default for MeansInput {
    fn default() -> Self {
        MeansInput {
            difference: MeanDifference::Means {
                mean1: 1.0,
                mean2: 0.0,
            },
            sd: StdDev::Pooled { pooled_sd: 1.0 },
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ProportionsInput {
    pub prop1: f64,
    pub prop2: f64,
}

impl Default for ProportionsInput {
    fn default() -> Self {
        ProportionsInput {
            prop1: 0.5,
            prop2: 0.4,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "endpoint", rename_all = "kebab-case")]
pub enum Endpoint {
    Means(MeansInput),
    Proportions(ProportionsInput),
}

impl Endpoint {
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Means(_) => "means",
            Endpoint::Proportions(_) => "proportions",
        }
    }
}

/// Significance level, power and group 2 / group 1 allocation ratio
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct StatisticalParams {
    pub alpha: f64,
    pub power: f64,
    pub ratio: f64,
}

impl Default for StatisticalParams {
    fn default() -> Self {
        StatisticalParams {
            alpha: 0.05,
            power: 0.8,
            ratio: 1.0,
        }
    }
}

/// Everything a single computation needs; nothing else is consulted
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct SampleSizeRequest {
    pub design: StudyDesign,
    #[serde(flatten)]
    pub endpoint: Endpoint,
    #[serde(default)]
    pub params: StatisticalParams,
}

impl SampleSizeRequest {
    pub fn means(design: StudyDesign, input: MeansInput, params: StatisticalParams) -> Self {
        SampleSizeRequest {
            design,
            endpoint: Endpoint::Means(input),
            params,
        }
    }

    pub fn proportions(
        design: StudyDesign,
        input: ProportionsInput,
        params: StatisticalParams,
    ) -> Self {
        SampleSizeRequest {
            design,
            endpoint: Endpoint::Proportions(input),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_difference_reads_as_means() {
        let d = MeanDifference::Difference { mean_diff: 2.5 };
        assert_eq!(d.means(), (2.5, 0.0));
        assert_eq!(d.raw_diff(), 2.5);
    }

    #[test]
    fn equality_ignores_margin() {
        let design = StudyDesign {
            test_type: TestType::Equality,
            sidedness: Sidedness::TwoSided,
            margin: Some(0.3),
        };
        assert_eq!(design.effective_margin(), 0.0);
    }

    #[test]
    fn one_sided_maps_to_larger() {
        let design = StudyDesign::with_margin(TestType::Superiority, Sidedness::OneSided, 0.1);
        assert_eq!(design.alternative(), Alternative::Larger);
        assert_eq!(
            StudyDesign::equality(Sidedness::TwoSided).alternative(),
            Alternative::TwoSided
        );
    }

    #[test]
    fn request_json_round_trip() {
        let json = r#"{
            "design": { "test_type": "non-inferiority", "sidedness": "one-sided", "margin": 0.05 },
            "endpoint": "proportions",
            "prop1": 0.6,
            "prop2": 0.55,
            "params": { "alpha": 0.025, "power": 0.9, "ratio": 2.0 }
        }"#;
        let request: SampleSizeRequest =
            serde_json::from_str(json).expect("failed to parse request");
        assert_eq!(request.design.test_type, TestType::NonInferiority);
        assert_eq!(
            request.endpoint,
            Endpoint::Proportions(ProportionsInput {
                prop1: 0.6,
                prop2: 0.55
            })
        );
        assert_eq!(request.params.ratio, 2.0);
    }

    #[test]
    fn means_request_defaults_params() {
        let json = r#"{
            "design": { "test_type": "equality" },
            "endpoint": "means",
            "difference": { "means": { "mean1": 1.0, "mean2": 0.0 } },
            "sd": { "separate": { "sd1": 1.0, "sd2": 2.0 } }
        }"#;
        let request: SampleSizeRequest =
            serde_json::from_str(json).expect("failed to parse request");
        assert_eq!(request.params, StatisticalParams::default());
        assert_eq!(request.design.sidedness, Sidedness::TwoSided);
    }
}
