//! Output formatting for command results.
//!
//! JSON output is pretty-printed with four-space indentation so that a
//! report written by the `report` command has the same layout as the one
//! embedded in the result of a mutating command.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use seafreight_lib::{FleetReport, PortId, Voyage};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Human-readable text.
    Text,
}

/// Result of a command that changes the fleet.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub action: &'static str,
    pub accepted: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voyage: Option<Voyage>,
}

impl Outcome {
    pub fn accepted(action: &'static str, message: impl Into<String>) -> Self {
        Self {
            action,
            accepted: true,
            message: message.into(),
            voyage: None,
        }
    }

    pub fn rejected(action: &'static str, message: impl Into<String>) -> Self {
        Self {
            action,
            accepted: false,
            message: message.into(),
            voyage: None,
        }
    }

    pub fn with_voyage(mut self, voyage: Voyage) -> Self {
        self.voyage = Some(voyage);
        self
    }
}

/// Distance between two ports.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceOutput {
    pub from: PortId,
    pub to: PortId,
    pub distance_km: f64,
}

#[derive(Serialize)]
struct CommandOutput<'a> {
    outcome: &'a Outcome,
    report: &'a FleetReport,
}

#[derive(Serialize)]
struct SimulationOutput<'a> {
    outcomes: &'a [Outcome],
    report: &'a FleetReport,
}

impl OutputFormat {
    /// Render a full fleet report.
    pub fn render_report(self, report: &FleetReport) -> Result<String> {
        match self {
            OutputFormat::Json => report.render_json().context("failed to render report"),
            OutputFormat::Text => Ok(report.render_text()),
        }
    }

    /// Render the outcome of a mutating command followed by the report.
    pub fn render_outcome(self, outcome: &Outcome, report: &FleetReport) -> Result<String> {
        match self {
            OutputFormat::Json => to_pretty_json(&CommandOutput { outcome, report }),
            OutputFormat::Text => Ok(format!("{}\n\n{}", outcome.message, report.render_text())),
        }
    }

    /// Render the outcomes of a scripted run, one per step, then the report.
    pub fn render_outcomes(self, outcomes: &[Outcome], report: &FleetReport) -> Result<String> {
        match self {
            OutputFormat::Json => to_pretty_json(&SimulationOutput { outcomes, report }),
            OutputFormat::Text => {
                let mut lines: Vec<String> = outcomes
                    .iter()
                    .enumerate()
                    .map(|(index, outcome)| format!("{}. {}", index + 1, outcome.message))
                    .collect();
                lines.push(String::new());
                lines.push(report.render_text());
                Ok(lines.join("\n"))
            }
        }
    }

    pub fn render_distance(self, output: &DistanceOutput) -> Result<String> {
        match self {
            OutputFormat::Json => to_pretty_json(output),
            OutputFormat::Text => Ok(format!(
                "Port {} -> Port {}: {:.2} km",
                output.from, output.to, output.distance_km
            )),
        }
    }
}

/// Serialize a value as JSON with four-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .context("failed to serialize output")?;
    String::from_utf8(buffer).context("serialized output was not UTF-8")
}
