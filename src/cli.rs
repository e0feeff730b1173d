//! Command-line arguments and their mapping onto a request

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use fisher::compute::types::ComputationTarget;
use fisher::design::types::{
    MeanDifference, MeansInput, ProportionsInput, SampleSizeRequest, Sidedness,
    StatisticalParams, StdDev, StudyDesign, TestType,
};

/// Sample size and power for comparing two independent groups
#[derive(Parser, Debug)]
#[command(name = "fisher")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// What to solve for
    #[arg(long, global = true, value_enum, default_value_t = TargetArg::SampleSize)]
    pub target: TargetArg,

    /// Group 1 size, required with `--target power`
    #[arg(long, global = true)]
    pub n1: Option<f64>,

    /// Check the resulting design with this many simulated trials
    #[arg(long, global = true, value_name = "N_SIMS")]
    pub simulate: Option<usize>,

    /// Seed of the first simulated trial
    #[arg(long, global = true, default_value_t = 24601)]
    pub seed: u64,

    /// Print a JSON report instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two means with a two-sample t-test
    Means(MeansArgs),

    /// Compare two proportions with an arcsine normal test
    #[command(alias = "props")]
    Proportions(ProportionsArgs),

    /// Read a JSON request from a file
    Request {
        /// Path to the request
        path: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetArg {
    SampleSize,
    Power,
}

impl From<TargetArg> for ComputationTarget {
    fn from(target: TargetArg) -> Self {
        match target {
            TargetArg::SampleSize => ComputationTarget::SampleSize,
            TargetArg::Power => ComputationTarget::Power,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestArg {
    Equality,
    Superiority,
    NonInferiority,
    Equivalence,
}

impl From<TestArg> for TestType {
    fn from(test: TestArg) -> Self {
        match test {
            TestArg::Equality => TestType::Equality,
            TestArg::Superiority => TestType::Superiority,
            TestArg::NonInferiority => TestType::NonInferiority,
            TestArg::Equivalence => TestType::Equivalence,
        }
    }
}

#[derive(Args, Debug)]
pub struct DesignArgs {
    /// Hypothesis framework
    #[arg(long = "test", value_enum, default_value_t = TestArg::Equality)]
    pub test_type: TestArg,

    /// Use a one-sided test
    #[arg(long)]
    pub one_sided: bool,

    /// Superiority, non-inferiority or equivalence margin
    #[arg(long)]
    pub margin: Option<f64>,
}

impl DesignArgs {
    fn design(&self) -> StudyDesign {
        StudyDesign {
            test_type: self.test_type.into(),
            sidedness: if self.one_sided {
                Sidedness::OneSided
            } else {
                Sidedness::TwoSided
            },
            margin: self.margin,
        }
    }
}

#[derive(Args, Debug)]
pub struct ParamsArgs {
    /// Significance level
    #[arg(long, default_value_t = 0.05)]
    pub alpha: f64,

    /// Target power
    #[arg(long, default_value_t = 0.8)]
    pub power: f64,

    /// Group 2 / group 1 allocation ratio
    #[arg(long, default_value_t = 1.0)]
    pub ratio: f64,
}

impl ParamsArgs {
    fn params(&self) -> StatisticalParams {
        StatisticalParams {
            alpha: self.alpha,
            power: self.power,
            ratio: self.ratio,
        }
    }
}

#[derive(Args, Debug)]
pub struct MeansArgs {
    #[command(flatten)]
    pub design: DesignArgs,

    #[command(flatten)]
    pub params: ParamsArgs,

    #[arg(long, default_value_t = 1.0)]
    pub mean1: f64,

    #[arg(long, default_value_t = 0.0)]
    pub mean2: f64,

    /// Expected difference in means, instead of the two means
    #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["mean1", "mean2"])]
    pub mean_diff: Option<f64>,

    /// Pooled standard deviation
    #[arg(long, default_value_t = 1.0)]
    pub sd: f64,

    /// Group 1 standard deviation, instead of the pooled one
    #[arg(long, requires = "sd2", conflicts_with = "sd")]
    pub sd1: Option<f64>,

    /// Group 2 standard deviation, instead of the pooled one
    #[arg(long, requires = "sd1", conflicts_with = "sd")]
    pub sd2: Option<f64>,
}

impl MeansArgs {
    fn request(&self) -> SampleSizeRequest {
        let difference = match self.mean_diff {
            Some(mean_diff) => MeanDifference::Difference { mean_diff },
            None => MeanDifference::Means {
                mean1: self.mean1,
                mean2: self.mean2,
            },
        };
        let sd = match (self.sd1, self.sd2) {
            (Some(sd1), Some(sd2)) => StdDev::Separate { sd1, sd2 },
            _ => StdDev::Pooled { pooled_sd: self.sd },
        };
        SampleSizeRequest::means(
            self.design.design(),
            MeansInput { difference, sd },
            self.params.params(),
        )
    }
}

#[derive(Args, Debug)]
pub struct ProportionsArgs {
    #[command(flatten)]
    pub design: DesignArgs,

    #[command(flatten)]
    pub params: ParamsArgs,

    #[arg(long, default_value_t = 0.5)]
    pub prop1: f64,

    #[arg(long, default_value_t = 0.4)]
    pub prop2: f64,
}

impl ProportionsArgs {
    fn request(&self) -> SampleSizeRequest {
        SampleSizeRequest::proportions(
            self.design.design(),
            ProportionsInput {
                prop1: self.prop1,
                prop2: self.prop2,
            },
            self.params.params(),
        )
    }
}

impl Commands {
    /// Builds the request from flags, or reads it from the given file
    pub fn request(&self) -> Result<SampleSizeRequest> {
        match self {
            Commands::Means(args) => Ok(args.request()),
            Commands::Proportions(args) => Ok(args.request()),
            Commands::Request { path } => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read request {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("failed to parse request {}", path.display()))
            }
        }
    }
}
