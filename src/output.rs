//! Text and JSON rendering of results

use std::fmt::Write;

use serde::Serialize;

use fisher::compute::types::{Outcome, PowerReport, SampleSizeReport, SimulationReport};
use fisher::design::types::SampleSizeRequest;
use fisher::effect_size::types::EffectSize;
use fisher::error::{FailureKind, FisherErr};

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub request: &'a SampleSizeRequest,
    pub outcome: &'a Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation: Option<&'a SimulationReport>,
}

#[derive(Debug, Serialize)]
pub struct JsonFailure {
    pub status: &'static str,
    pub message: String,
}

impl JsonFailure {
    pub fn new(err: &FisherErr) -> Self {
        JsonFailure {
            status: status(err.kind()),
            message: err.to_string(),
        }
    }
}

/// Label the user sees for a failure: invalid input is a warning,
/// anything else an error
pub fn status(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::InvalidInput => "warning",
        FailureKind::ComputationFailed => "error",
    }
}

fn effect_size_lines(out: &mut String, effect_size: &EffectSize) {
    match effect_size {
        EffectSize::Single { value } => {
            let _ = writeln!(out, "  effect size: {value:.4}");
        }
        EffectSize::Tost { lower, upper } => {
            let _ = writeln!(out, "  effect size (lower): {lower:.4}");
            let _ = writeln!(out, "  effect size (upper): {upper:.4}");
        }
    }
}

fn sample_size_text(out: &mut String, endpoint: &str, report: &SampleSizeReport) {
    let _ = writeln!(out, "Sample size ({}, {endpoint})", report.test_type);
    effect_size_lines(out, &report.effect_size);
    if let Some((n_lower, n_upper)) = report.tost_n1 {
        let _ = writeln!(out, "  group 1 (lower test): {n_lower:.2}");
        let _ = writeln!(out, "  group 1 (upper test): {n_upper:.2}");
    }
    let _ = writeln!(out, "  group 1: {}", report.result.n1);
    let _ = writeln!(out, "  group 2: {}", report.result.n2);
    let _ = writeln!(out, "  total: {}", report.result.total());
}

fn power_text(out: &mut String, endpoint: &str, report: &PowerReport) {
    let _ = writeln!(out, "Power ({}, {endpoint})", report.test_type);
    effect_size_lines(out, &report.effect_size);
    let _ = writeln!(out, "  group 1: {}", report.n1);
    let _ = writeln!(out, "  group 2: {}", report.n2);
    if let Some((p_lower, p_upper)) = report.tost_power {
        let _ = writeln!(out, "  power (lower test): {p_lower:.4}");
        let _ = writeln!(out, "  power (upper test): {p_upper:.4}");
    }
    let _ = writeln!(out, "  power: {:.4}", report.power);
}

pub fn text(
    request: &SampleSizeRequest,
    outcome: &Outcome,
    simulation: Option<&SimulationReport>,
) -> String {
    let mut out = String::new();
    let endpoint = request.endpoint.name();
    match outcome {
        Outcome::SampleSize(report) => sample_size_text(&mut out, endpoint, report),
        Outcome::Power(report) => power_text(&mut out, endpoint, report),
    }
    if let Some(sim) = simulation {
        let _ = writeln!(
            out,
            "  simulated power: {:.4} ({}/{} trials, seed {})",
            sim.empirical_power, sim.rejections, sim.n_sims, sim.seed
        );
    }
    out
}
