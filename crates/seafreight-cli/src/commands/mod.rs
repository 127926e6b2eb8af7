// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers, keeping the entry point focused on parsing and coordination.

pub mod distance;
pub mod load;
pub mod report;
pub mod sail;
pub mod steps;

use std::path::PathBuf;

use anyhow::{Context, Result};

use seafreight_lib::{load_fleet, resolve_scenario_path, Fleet, PortId};

/// Where the scenario comes from and how its containers are placed.
#[derive(Debug, Clone)]
pub struct ScenarioArgs {
    pub input: Option<PathBuf>,
    pub container_port: PortId,
}

impl ScenarioArgs {
    /// Resolve the scenario path and build its fleet.
    pub fn load(&self) -> Result<Fleet> {
        let path = resolve_scenario_path(self.input.as_deref());
        load_fleet(&path, self.container_port)
            .with_context(|| format!("failed to load scenario from {}", path.display()))
    }
}
