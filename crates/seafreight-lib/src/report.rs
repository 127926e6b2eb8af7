//! Port and ship status reports.
//!
//! The JSON shape is a map keyed `"Port {id}"`. Each port object carries its
//! rounded coordinates, four ascending container id lists (one per kind),
//! and one `"ship_{id}"` object per docked ship with its rounded fuel level
//! and the same four lists for the cargo aboard.

use std::fmt::Write;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::container::{Container, ContainerId, ContainerKind};
use crate::error::Result;
use crate::fleet::Fleet;
use crate::port::{Port, PortId};
use crate::ship::{Ship, ShipId, Vessel};

/// Container ids grouped by kind, each list ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CargoManifest {
    #[serde(rename = "basic_container")]
    pub basic: Vec<ContainerId>,
    #[serde(rename = "heavy_container")]
    pub heavy: Vec<ContainerId>,
    #[serde(rename = "refrigerated_container")]
    pub refrigerated: Vec<ContainerId>,
    #[serde(rename = "liquid_container")]
    pub liquid: Vec<ContainerId>,
}

impl CargoManifest {
    pub fn from_containers<'a, I>(containers: I) -> Self
    where
        I: IntoIterator<Item = &'a Container>,
    {
        let mut manifest = Self::default();
        for container in containers {
            manifest.ids_mut(container.kind).push(container.id);
        }
        for kind in ContainerKind::ALL {
            manifest.ids_mut(kind).sort_unstable();
        }
        manifest
    }

    pub fn ids(&self, kind: ContainerKind) -> &[ContainerId] {
        match kind {
            ContainerKind::Basic => &self.basic,
            ContainerKind::Heavy => &self.heavy,
            ContainerKind::Refrigerated => &self.refrigerated,
            ContainerKind::Liquid => &self.liquid,
        }
    }

    pub fn len(&self) -> usize {
        ContainerKind::ALL.iter().map(|k| self.ids(*k).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ids_mut(&mut self, kind: ContainerKind) -> &mut Vec<ContainerId> {
        match kind {
            ContainerKind::Basic => &mut self.basic,
            ContainerKind::Heavy => &mut self.heavy,
            ContainerKind::Refrigerated => &mut self.refrigerated,
            ContainerKind::Liquid => &mut self.liquid,
        }
    }

    fn serialize_entries<M: SerializeMap>(&self, map: &mut M) -> std::result::Result<(), M::Error> {
        map.serialize_entry("basic_container", &self.basic)?;
        map.serialize_entry("heavy_container", &self.heavy)?;
        map.serialize_entry("refrigerated_container", &self.refrigerated)?;
        map.serialize_entry("liquid_container", &self.liquid)
    }
}

/// Status of a docked ship.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipReport {
    #[serde(skip)]
    pub id: ShipId,
    pub fuel_left: f64,
    #[serde(flatten)]
    pub cargo: CargoManifest,
    #[serde(skip)]
    pub cargo_weight: f64,
    #[serde(skip)]
    pub cargo_consumption: f64,
}

impl ShipReport {
    pub fn from_ship(ship: &Ship) -> Self {
        Self {
            id: ship.id,
            fuel_left: round2(ship.fuel()),
            cargo: CargoManifest::from_containers(ship.containers()),
            cargo_weight: round2(ship.cargo_weight()),
            cargo_consumption: round2(ship.cargo_consumption()),
        }
    }
}

/// Status of a port and the ships docked there.
#[derive(Debug, Clone, PartialEq)]
pub struct PortReport {
    pub id: PortId,
    pub lat: f64,
    pub lon: f64,
    pub cargo: CargoManifest,
    pub ships: Vec<ShipReport>,
}

impl PortReport {
    /// Build the report for `port`, resolving docked ships through `fleet`.
    pub fn from_port(port: &Port, fleet: &Fleet) -> Self {
        let ships = port
            .docked_ships()
            .iter()
            .filter_map(|id| fleet.ship(*id).ok())
            .map(ShipReport::from_ship)
            .collect();

        Self {
            id: port.id,
            lat: round2(port.position.latitude),
            lon: round2(port.position.longitude),
            cargo: CargoManifest::from_containers(port.containers()),
            ships,
        }
    }
}

impl Serialize for PortReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(6 + self.ships.len()))?;
        map.serialize_entry("lat", &self.lat)?;
        map.serialize_entry("lon", &self.lon)?;
        self.cargo.serialize_entries(&mut map)?;
        for ship in &self.ships {
            map.serialize_entry(&format!("ship_{}", ship.id), ship)?;
        }
        map.end()
    }
}

/// Report covering every port of a fleet.
///
/// Ports are listed in ascending port id order, not in the order the
/// scenario declared them. Docked ships follow the same rule.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetReport {
    pub ports: Vec<PortReport>,
}

impl FleetReport {
    pub fn from_fleet(fleet: &Fleet) -> Self {
        Self {
            ports: fleet
                .ports()
                .map(|port| PortReport::from_port(port, fleet))
                .collect(),
        }
    }

    /// Pretty JSON with four-space indentation.
    pub fn render_json(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Human-readable rendering.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        for port in &self.ports {
            let _ = writeln!(
                buffer,
                "Port {} ({:.2}, {:.2}): {} containers, {} ships docked",
                port.id,
                port.lat,
                port.lon,
                port.cargo.len(),
                port.ships.len()
            );
            write_manifest(&mut buffer, "  ", &port.cargo);
            for ship in &port.ships {
                let _ = writeln!(
                    buffer,
                    "  Ship {}: fuel {:.2}, cargo {:.2}t (consumption {:.2})",
                    ship.id, ship.fuel_left, ship.cargo_weight, ship.cargo_consumption
                );
                write_manifest(&mut buffer, "    ", &ship.cargo);
            }
        }
        buffer
    }
}

impl Serialize for FleetReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.ports.len()))?;
        for port in &self.ports {
            map.serialize_entry(&format!("Port {}", port.id), port)?;
        }
        map.end()
    }
}

fn write_manifest(buffer: &mut String, indent: &str, manifest: &CargoManifest) {
    for kind in ContainerKind::ALL {
        let ids = manifest.ids(kind);
        if ids.is_empty() {
            continue;
        }
        let joined = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(buffer, "{indent}{kind}: {joined}");
    }
}

/// Round to two decimal places, ties to even (`0.125` becomes `0.12`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinates;
    use crate::ship::ShipSpec;

    fn sample_fleet() -> Fleet {
        let mut fleet = Fleet::new();
        fleet.add_port(2, Coordinates::new(10.123, -20.456)).unwrap();
        fleet.add_port(1, Coordinates::new(0.0, 0.0)).unwrap();
        fleet
            .commission_ship(
                ShipSpec {
                    id: 3,
                    fuel: 100.456,
                    max_weight: 1000.0,
                    max_containers: 5,
                    fuel_consumption_per_km: 1.0,
                },
                1,
            )
            .unwrap();
        let containers = [
            (9, ContainerKind::Basic),
            (4, ContainerKind::Basic),
            (7, ContainerKind::Refrigerated),
            (5, ContainerKind::Liquid),
            (6, ContainerKind::Heavy),
        ];
        for (id, kind) in containers {
            fleet
                .store_container(1, Container::new(id, 1.0, kind))
                .unwrap();
        }
        fleet.load(3, 5).unwrap();
        fleet
    }

    #[test]
    fn manifest_groups_and_sorts_ids() {
        let containers = [
            Container::new(3, 1.0, ContainerKind::Heavy),
            Container::new(1, 1.0, ContainerKind::Heavy),
            Container::new(2, 1.0, ContainerKind::Liquid),
        ];
        let manifest = CargoManifest::from_containers(&containers);
        assert_eq!(manifest.heavy, vec![1, 3]);
        assert_eq!(manifest.liquid, vec![2]);
        assert!(manifest.basic.is_empty());
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn json_matches_expected_shape() {
        let report = FleetReport::from_fleet(&sample_fleet());
        let value = serde_json::to_value(&report).unwrap();

        let expected = serde_json::json!({
            "Port 1": {
                "lat": 0.0,
                "lon": 0.0,
                "basic_container": [4, 9],
                "heavy_container": [6],
                "refrigerated_container": [7],
                "liquid_container": [],
                "ship_3": {
                    "fuel_left": 100.46,
                    "basic_container": [],
                    "heavy_container": [],
                    "refrigerated_container": [],
                    "liquid_container": [5]
                }
            },
            "Port 2": {
                "lat": 10.12,
                "lon": -20.46,
                "basic_container": [],
                "heavy_container": [],
                "refrigerated_container": [],
                "liquid_container": []
            }
        });
        assert_eq!(value, expected);
    }

    #[test]
    fn json_lists_ports_in_ascending_order_with_four_space_indent() {
        let rendered = FleetReport::from_fleet(&sample_fleet())
            .render_json()
            .unwrap();

        let first = rendered.find("\"Port 1\"").unwrap();
        let second = rendered.find("\"Port 2\"").unwrap();
        assert!(first < second);
        assert!(rendered.starts_with("{\n    \"Port 1\": {\n        \"lat\": 0.0,"));
    }

    #[test]
    fn text_rendering_mentions_ports_ships_and_cargo() {
        let text = FleetReport::from_fleet(&sample_fleet()).render_text();
        assert!(text.contains("Port 1 (0.00, 0.00): 4 containers, 1 ships docked"));
        assert!(text.contains("Ship 3: fuel 100.46, cargo 1.00t (consumption 4.00)"));
        assert!(text.contains("basic: 4, 9"));
        assert!(text.contains("Port 2 (10.12, -20.46): 0 containers, 0 ships docked"));
    }

    #[test]
    fn round2_rounds_exact_halves_to_even() {
        assert_eq!(round2(100.125), 100.12);
        assert_eq!(round2(1.375), 1.38);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(-0.125), -0.12);
        assert_eq!(round2(88.805_073), 88.81);
        assert_eq!(round2(-20.456), -20.46);
        assert_eq!(round2(3.0), 3.0);
    }

    #[test]
    fn report_rounds_coordinates_and_fuel_half_to_even() {
        let mut fleet = Fleet::new();
        fleet.add_port(1, Coordinates::new(0.125, 1.375)).unwrap();
        fleet
            .commission_ship(
                ShipSpec {
                    id: 1,
                    fuel: 100.125,
                    max_weight: 10.0,
                    max_containers: 1,
                    fuel_consumption_per_km: 1.0,
                },
                1,
            )
            .unwrap();

        let report = FleetReport::from_fleet(&fleet);
        let port = &report.ports[0];
        assert_eq!(port.lat, 0.12);
        assert_eq!(port.lon, 1.38);
        assert_eq!(port.ships[0].fuel_left, 100.12);
    }

    #[test]
    fn ports_are_listed_by_id_not_insertion_order() {
        let report = FleetReport::from_fleet(&sample_fleet());
        let ids: Vec<PortId> = report.ports.iter().map(|port| port.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
