//! Sail command handler.

use anyhow::Result;

use seafreight_cli::output::OutputFormat;
use seafreight_lib::{FleetReport, PortId, ShipId};

use super::steps::Step;
use super::ScenarioArgs;

/// Sail a ship and print the outcome followed by the resulting report.
///
/// A voyage refused for lack of fuel is an outcome, not a failure: it is
/// reported and the command still succeeds.
pub fn handle_sail(
    scenario: &ScenarioArgs,
    ship: ShipId,
    to: PortId,
    refuel: Option<f64>,
    format: OutputFormat,
) -> Result<()> {
    let mut fleet = scenario.load()?;

    if let Some(amount) = refuel {
        Step::Refuel { ship, amount }.apply(&mut fleet)?;
    }
    let outcome = Step::Sail { ship, to }.apply(&mut fleet)?;

    let report = FleetReport::from_fleet(&fleet);
    println!("{}", format.render_outcome(&outcome, &report)?);
    Ok(())
}
