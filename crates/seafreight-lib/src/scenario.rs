//! Scenario input: JSON records describing ports, ships and containers.
//!
//! Construction order matters. Ports are created first, then ships (each
//! bound to an existing port, which registers its arrival), then containers,
//! which are all placed at a single port chosen by the caller. Per-container
//! location hints in the input are ignored.

use std::env;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::container::{Container, ContainerId, ContainerKind};
use crate::error::{Error, Result};
use crate::fleet::Fleet;
use crate::geo::Coordinates;
use crate::port::PortId;
use crate::ship::{ShipId, ShipSpec};

/// Scenario file looked up in the working directory when nothing else is set.
pub const DEFAULT_SCENARIO_FILE: &str = "input.json";

/// Environment variable overriding the scenario path.
pub const SCENARIO_ENV_VAR: &str = "SEAFREIGHT_INPUT";

/// Port where containers are placed unless the caller picks another.
pub const DEFAULT_CONTAINER_PORT: PortId = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortRecord {
    pub id: PortId,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipRecord {
    pub id: ShipId,
    pub fuel: f64,
    pub current_port: PortId,
    pub max_weight: f64,
    pub max_containers: usize,
    pub fuel_consumption_per_km: f64,
}

impl ShipRecord {
    pub fn spec(&self) -> ShipSpec {
        ShipSpec {
            id: self.id,
            fuel: self.fuel,
            max_weight: self.max_weight,
            max_containers: self.max_containers,
            fuel_consumption_per_km: self.fuel_consumption_per_km,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerRecord {
    pub id: ContainerId,
    #[serde(rename = "type")]
    pub kind: ContainerKind,
    pub weight: f64,
}

impl ContainerRecord {
    pub fn container(&self) -> Container {
        Container::new(self.id, self.weight, self.kind)
    }
}

/// Parsed scenario input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub ports: Vec<PortRecord>,
    pub ships: Vec<ShipRecord>,
    pub containers: Vec<ContainerRecord>,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ScenarioNotFound {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), "reading scenario");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a scenario from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate numeric fields. Identifier uniqueness and references are
    /// checked while building the fleet.
    pub fn validate(&self) -> Result<()> {
        for port in &self.ports {
            let position = Coordinates::new(port.latitude, port.longitude);
            if !position.is_finite() {
                return Err(invalid(format!(
                    "port {} coordinates must be finite",
                    port.id
                )));
            }
            if !(-90.0..=90.0).contains(&port.latitude) {
                return Err(invalid(format!(
                    "port {} latitude must be between -90 and 90, got {}",
                    port.id, port.latitude
                )));
            }
        }

        for ship in &self.ships {
            let fields = [
                (ship.fuel, "fuel"),
                (ship.max_weight, "max_weight"),
                (ship.fuel_consumption_per_km, "fuel_consumption_per_km"),
            ];
            for (value, field) in fields {
                if !value.is_finite() || value < 0.0 {
                    return Err(invalid(format!(
                        "ship {} {field} must be a finite non-negative number",
                        ship.id
                    )));
                }
            }
        }

        for container in &self.containers {
            if !container.weight.is_finite() || container.weight < 0.0 {
                return Err(invalid(format!(
                    "container {} weight must be a finite non-negative number",
                    container.id
                )));
            }
        }

        Ok(())
    }

    /// Build the object graph, placing every container at `container_port`.
    ///
    /// Nothing is returned unless the whole scenario is consistent.
    pub fn build_fleet(&self, container_port: PortId) -> Result<Fleet> {
        self.validate()?;

        let mut fleet = Fleet::new();
        for port in &self.ports {
            fleet.add_port(port.id, Coordinates::new(port.latitude, port.longitude))?;
        }
        for ship in &self.ships {
            fleet.commission_ship(ship.spec(), ship.current_port)?;
        }
        for container in &self.containers {
            fleet.store_container(container_port, container.container())?;
        }

        info!(
            ports = fleet.port_count(),
            ships = fleet.ship_count(),
            containers = self.containers.len(),
            container_port,
            "scenario loaded"
        );
        Ok(fleet)
    }
}

/// Read a scenario file and build its fleet.
pub fn load_fleet(path: &Path, container_port: PortId) -> Result<Fleet> {
    Scenario::from_path(path)?.build_fleet(container_port)
}

/// Resolve the scenario path.
///
/// The resolution order is:
/// 1. Explicit `explicit` argument when provided.
/// 2. `SEAFREIGHT_INPUT` environment variable.
/// 3. `input.json` in the working directory.
pub fn resolve_scenario_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(env_path) = env::var_os(SCENARIO_ENV_VAR) {
        return PathBuf::from(env_path);
    }

    PathBuf::from(DEFAULT_SCENARIO_FILE)
}

fn invalid(message: String) -> Error {
    Error::InvalidScenario { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::Dock;
    use crate::ship::Vessel;

    const SAMPLE: &str = r#"{
        "ports": [
            {"id": 1, "latitude": 0.0, "longitude": 0.0},
            {"id": 2, "latitude": 0.0, "longitude": 1.0}
        ],
        "ships": [
            {"id": 1, "fuel": 200.0, "current_port": 2, "max_weight": 5000.0,
             "max_containers": 3, "fuel_consumption_per_km": 1.0}
        ],
        "containers": [
            {"id": 1, "type": "basic", "weight": 10.0, "port": 2},
            {"id": 2, "type": "liquid", "weight": 4.5}
        ]
    }"#;

    #[test]
    fn parses_records_and_ignores_location_hints() {
        let scenario = Scenario::from_json(SAMPLE).unwrap();
        assert_eq!(scenario.ports.len(), 2);
        assert_eq!(scenario.ships[0].current_port, 2);
        assert_eq!(scenario.containers[1].kind, ContainerKind::Liquid);
    }

    #[test]
    fn builds_fleet_with_containers_at_designated_port() {
        let fleet = Scenario::from_json(SAMPLE)
            .unwrap()
            .build_fleet(1)
            .unwrap();

        assert_eq!(fleet.port(1).unwrap().containers().len(), 2);
        assert!(fleet.port(2).unwrap().containers().is_empty());
        assert!(fleet.port(2).unwrap().is_docked(1));
        assert_eq!(fleet.ship(1).unwrap().fuel(), 200.0);
    }

    #[test]
    fn designated_port_must_exist_when_containers_are_present() {
        let scenario = Scenario::from_json(SAMPLE).unwrap();
        assert!(matches!(
            scenario.build_fleet(42),
            Err(Error::UnknownPort { id: 42 })
        ));

        let mut empty = scenario.clone();
        empty.containers.clear();
        assert!(empty.build_fleet(42).is_ok());
    }

    #[test]
    fn unknown_container_type_is_a_json_error() {
        let json = SAMPLE.replace("\"liquid\"", "\"gas\"");
        assert!(matches!(Scenario::from_json(&json), Err(Error::Json(_))));
    }

    #[test]
    fn missing_section_is_a_json_error() {
        let err = Scenario::from_json(r#"{"ports": [], "ships": []}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn rejects_negative_fuel_and_weight() {
        let mut scenario = Scenario::from_json(SAMPLE).unwrap();
        scenario.ships[0].fuel = -1.0;
        let err = scenario.validate().unwrap_err();
        assert!(err.to_string().contains("ship 1 fuel"));

        let mut scenario = Scenario::from_json(SAMPLE).unwrap();
        scenario.containers[0].weight = -3.0;
        assert!(matches!(
            scenario.build_fleet(1),
            Err(Error::InvalidScenario { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let mut scenario = Scenario::from_json(SAMPLE).unwrap();
        scenario.ports[1].longitude = f64::INFINITY;
        let err = scenario.validate().unwrap_err();
        assert!(err.to_string().contains("port 2 coordinates must be finite"));
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let mut scenario = Scenario::from_json(SAMPLE).unwrap();
        scenario.ports[0].latitude = 91.0;
        assert!(matches!(
            scenario.validate(),
            Err(Error::InvalidScenario { .. })
        ));
    }

    #[test]
    fn ship_bound_to_unknown_port_fails_the_build() {
        let json = SAMPLE.replace("\"current_port\": 2", "\"current_port\": 7");
        let scenario = Scenario::from_json(&json).unwrap();
        assert!(matches!(
            scenario.build_fleet(1),
            Err(Error::UnknownPort { id: 7 })
        ));
    }

    #[test]
    fn duplicate_container_ids_fail_the_build() {
        let json = SAMPLE.replace("{\"id\": 2, \"type\"", "{\"id\": 1, \"type\"");
        let scenario = Scenario::from_json(&json).unwrap();
        assert!(matches!(
            scenario.build_fleet(1),
            Err(Error::DuplicateContainer { id: 1 })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        match Scenario::from_path(&path) {
            Err(Error::ScenarioNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected ScenarioNotFound, got {other:?}"),
        }
    }

    #[test]
    fn explicit_path_wins_resolution() {
        let explicit = Path::new("/tmp/elsewhere.json");
        assert_eq!(resolve_scenario_path(Some(explicit)), explicit);
    }
}
