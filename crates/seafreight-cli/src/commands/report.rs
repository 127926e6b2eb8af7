//! Report command handler.

use anyhow::Result;

use seafreight_cli::output::OutputFormat;
use seafreight_lib::FleetReport;

use super::ScenarioArgs;

/// Print the status of every port as loaded from the scenario.
pub fn handle_report(scenario: &ScenarioArgs, format: OutputFormat) -> Result<()> {
    let fleet = scenario.load()?;
    let report = FleetReport::from_fleet(&fleet);
    println!("{}", format.render_report(&report)?);
    Ok(())
}
