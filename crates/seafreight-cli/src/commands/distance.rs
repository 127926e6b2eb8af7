//! Distance command handler.

use anyhow::{Context, Result};

use seafreight_cli::output::{DistanceOutput, OutputFormat};
use seafreight_lib::PortId;

use super::ScenarioArgs;

pub fn handle_distance(
    scenario: &ScenarioArgs,
    from: PortId,
    to: PortId,
    format: OutputFormat,
) -> Result<()> {
    let fleet = scenario.load()?;
    let distance_km = fleet
        .distance_between(from, to)
        .with_context(|| format!("cannot measure distance from port {from} to port {to}"))?;

    let output = DistanceOutput {
        from,
        to,
        distance_km,
    };
    println!("{}", format.render_distance(&output)?);
    Ok(())
}
