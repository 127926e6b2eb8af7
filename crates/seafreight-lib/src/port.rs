//! Ports: position, resident cargo, and docking registers.

use std::collections::BTreeSet;

use crate::container::{Container, ContainerId};
use crate::geo::Coordinates;
use crate::ship::ShipId;

/// Numeric identifier for a port.
pub type PortId = u64;

/// Something ships can dock at.
///
/// Ships are referenced by identifier; resolving an identifier to a ship is
/// the job of whoever owns both (see [`crate::Fleet`]).
pub trait Dock {
    fn id(&self) -> PortId;

    fn position(&self) -> Coordinates;

    /// Record a ship as docked. Idempotent; the ship is also added to the
    /// history the first time it is seen.
    fn register_arrival(&mut self, ship: ShipId);

    /// Remove a ship from the docked set. No-op if it is not docked.
    fn register_departure(&mut self, ship: ShipId);

    fn is_docked(&self, ship: ShipId) -> bool;

    /// Whether the ship has ever docked here.
    fn has_visited(&self, ship: ShipId) -> bool;

    /// Great-circle distance to another dock in kilometres.
    fn distance_to(&self, other: &dyn Dock) -> f64 {
        self.position().distance_to(&other.position())
    }
}

/// A port holding containers and hosting ships.
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    pub id: PortId,
    pub position: Coordinates,
    containers: Vec<Container>,
    docked: BTreeSet<ShipId>,
    history: BTreeSet<ShipId>,
}

impl Port {
    pub fn new(id: PortId, position: Coordinates) -> Self {
        Self {
            id,
            position,
            containers: Vec::new(),
            docked: BTreeSet::new(),
            history: BTreeSet::new(),
        }
    }

    /// Containers resident at the port, in insertion order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Ships currently docked here.
    pub fn docked_ships(&self) -> &BTreeSet<ShipId> {
        &self.docked
    }

    /// Every ship that has ever docked here. Never shrinks.
    pub fn history(&self) -> &BTreeSet<ShipId> {
        &self.history
    }

    /// Append a container to the port. No capacity limit applies.
    pub fn store_container(&mut self, container: Container) {
        self.containers.push(container);
    }

    pub fn find_container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Remove and return the first container with the given identifier.
    pub fn take_container(&mut self, id: ContainerId) -> Option<Container> {
        let index = self.containers.iter().position(|c| c.id == id)?;
        Some(self.containers.remove(index))
    }
}

impl Dock for Port {
    fn id(&self) -> PortId {
        self.id
    }

    fn position(&self) -> Coordinates {
        self.position
    }

    fn register_arrival(&mut self, ship: ShipId) {
        self.docked.insert(ship);
        self.history.insert(ship);
    }

    fn register_departure(&mut self, ship: ShipId) {
        self.docked.remove(&ship);
    }

    fn is_docked(&self, ship: ShipId) -> bool {
        self.docked.contains(&ship)
    }

    fn has_visited(&self, ship: ShipId) -> bool {
        self.history.contains(&ship)
    }
}
