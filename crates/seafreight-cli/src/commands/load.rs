//! Load command handler.

use anyhow::Result;

use seafreight_cli::output::OutputFormat;
use seafreight_lib::{ContainerId, FleetReport, ShipId};

use super::steps::Step;
use super::ScenarioArgs;

/// Move a container from the ship's port onto the ship and print the outcome.
pub fn handle_load(
    scenario: &ScenarioArgs,
    ship: ShipId,
    container: ContainerId,
    format: OutputFormat,
) -> Result<()> {
    let mut fleet = scenario.load()?;
    let outcome = Step::Load { ship, container }.apply(&mut fleet)?;

    let report = FleetReport::from_fleet(&fleet);
    println!("{}", format.render_outcome(&outcome, &report)?);
    Ok(())
}
