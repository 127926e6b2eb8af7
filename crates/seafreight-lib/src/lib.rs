//! Seafreight library entry points.
//!
//! This crate models ports holding containers and ships that dock at ports,
//! carry containers and burn fuel while sailing. It exposes the core types,
//! the fleet registry that owns them, scenario loading, and status reports.
//! Higher-level consumers (the CLI) should only depend on the items exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod container;
pub mod error;
pub mod fleet;
pub mod geo;
pub mod port;
pub mod report;
pub mod scenario;
pub mod ship;

pub use container::{Container, ContainerId, ContainerKind};
pub use error::{Error, Result};
pub use fleet::{ContainerLocation, Fleet};
pub use geo::{haversine_km, Coordinates, EARTH_RADIUS_KM};
pub use port::{Dock, Port, PortId};
pub use report::{CargoManifest, FleetReport, PortReport, ShipReport};
pub use scenario::{
    load_fleet, resolve_scenario_path, ContainerRecord, PortRecord, Scenario, ShipRecord,
    DEFAULT_CONTAINER_PORT, DEFAULT_SCENARIO_FILE, SCENARIO_ENV_VAR,
};
pub use ship::{Ship, ShipId, ShipSpec, Vessel, Voyage};
