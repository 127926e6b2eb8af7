//! Scripted steps applied to a fleet, and the simulate command handler.
//!
//! Rejections (not enough fuel, no free slot, container not aboard) are
//! recorded as outcomes and the script carries on. Anything else, such as
//! an unknown ship or a negative refuel amount, aborts the run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use seafreight_cli::output::{Outcome, OutputFormat};
use seafreight_lib::{ContainerId, Error, Fleet, FleetReport, PortId, ShipId};

use super::ScenarioArgs;

/// One action against the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Refuel { ship: ShipId, amount: f64 },
    Sail { ship: ShipId, to: PortId },
    Load { ship: ShipId, container: ContainerId },
    Unload { ship: ShipId, container: ContainerId },
}

impl Step {
    fn action(&self) -> &'static str {
        match self {
            Step::Refuel { .. } => "refuel",
            Step::Sail { .. } => "sail",
            Step::Load { .. } => "load",
            Step::Unload { .. } => "unload",
        }
    }

    /// Apply the step. Rejections become outcomes; other errors propagate.
    pub fn apply(&self, fleet: &mut Fleet) -> Result<Outcome> {
        let action = self.action();
        let result = match *self {
            Step::Refuel { ship, amount } => fleet.refuel(ship, amount).map(|fuel| {
                Outcome::accepted(
                    action,
                    format!("Refuelled ship {ship} with {amount:.2} (now {fuel:.2})"),
                )
            }),
            Step::Sail { ship, to } => fleet.sail(ship, to).map(|voyage| {
                Outcome::accepted(
                    action,
                    format!(
                        "Ship {ship} sailed from port {} to port {to} ({:.2} km, {:.2} fuel used, {:.2} left)",
                        voyage.from, voyage.distance_km, voyage.fuel_used, voyage.fuel_remaining
                    ),
                )
                .with_voyage(voyage)
            }),
            Step::Load { ship, container } => fleet.load(ship, container).map(|loaded| {
                Outcome::accepted(
                    action,
                    format!(
                        "Loaded {} container {} ({:.2}t) onto ship {ship}",
                        loaded.kind, loaded.id, loaded.weight
                    ),
                )
            }),
            Step::Unload { ship, container } => fleet.unload(ship, container).map(|unloaded| {
                Outcome::accepted(
                    action,
                    format!(
                        "Unloaded {} container {} from ship {ship}",
                        unloaded.kind, unloaded.id
                    ),
                )
            }),
        };

        match result {
            Ok(outcome) => Ok(outcome),
            Err(err) if err.is_rejection() => Ok(Outcome::rejected(
                action,
                format!("{} rejected: {err}", capitalize(action)),
            )),
            Err(err) => Err(self.context(err)),
        }
    }

    fn context(&self, err: Error) -> anyhow::Error {
        let description = match *self {
            Step::Refuel { ship, .. } => format!("failed to refuel ship {ship}"),
            Step::Sail { ship, to } => format!("failed to sail ship {ship} to port {to}"),
            Step::Load { ship, container } => {
                format!("failed to load container {container} onto ship {ship}")
            }
            Step::Unload { ship, container } => {
                format!("failed to unload container {container} from ship {ship}")
            }
        };
        anyhow::Error::new(err).context(description)
    }
}

/// Read a JSON array of steps.
pub fn read_steps(path: &Path) -> Result<Vec<Step>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read steps from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("malformed steps file {}", path.display()))
}

/// Run every step in order and print the outcomes followed by the report.
pub fn handle_simulate(scenario: &ScenarioArgs, steps: &Path, format: OutputFormat) -> Result<()> {
    let steps = read_steps(steps)?;
    let mut fleet = scenario.load()?;

    let mut outcomes = Vec::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        let outcome = step
            .apply(&mut fleet)
            .with_context(|| format!("step {} aborted the simulation", index + 1))?;
        outcomes.push(outcome);
    }

    let report = FleetReport::from_fleet(&fleet);
    println!("{}", format.render_outcomes(&outcomes, &report)?);
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
