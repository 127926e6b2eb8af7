//! Registry owning every port and ship of a scenario.
//!
//! Ports and ships refer to each other by identifier; the fleet resolves
//! identifiers and keeps the docking invariant: a ship is in exactly one
//! port's docked set, and that port is the ship's current port.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::container::{Container, ContainerId};
use crate::error::{Error, Result};
use crate::geo::Coordinates;
use crate::port::{Dock, Port, PortId};
use crate::ship::{Ship, ShipId, ShipSpec, Vessel, Voyage};

/// Where a container currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerLocation {
    Port(PortId),
    Ship(ShipId),
}

/// In-memory object graph of ports, ships and containers.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    ports: BTreeMap<PortId, Port>,
    ships: BTreeMap<ShipId, Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new port.
    pub fn add_port(&mut self, id: PortId, position: Coordinates) -> Result<&mut Port> {
        if self.ports.contains_key(&id) {
            return Err(Error::DuplicatePort { id });
        }

        Ok(self.ports.entry(id).or_insert(Port::new(id, position)))
    }

    /// Create a ship docked at `port` and register its arrival.
    pub fn commission_ship(&mut self, spec: ShipSpec, port: PortId) -> Result<&Ship> {
        if self.ships.contains_key(&spec.id) {
            return Err(Error::DuplicateShip { id: spec.id });
        }
        let dock = self
            .ports
            .get_mut(&port)
            .ok_or(Error::UnknownPort { id: port })?;

        let ship = Ship::commission(spec, dock);
        debug!(ship = ship.id, port, "ship commissioned");
        Ok(self.ships.entry(spec.id).or_insert(ship))
    }

    /// Place a container at a port. Container ids are unique fleet-wide.
    pub fn store_container(&mut self, port: PortId, container: Container) -> Result<()> {
        if self.locate_container(container.id).is_some() {
            return Err(Error::DuplicateContainer { id: container.id });
        }

        self.port_mut(port)?.store_container(container);
        Ok(())
    }

    pub fn port(&self, id: PortId) -> Result<&Port> {
        self.ports.get(&id).ok_or(Error::UnknownPort { id })
    }

    pub fn ship(&self, id: ShipId) -> Result<&Ship> {
        self.ships.get(&id).ok_or(Error::UnknownShip { id })
    }

    /// Ports in ascending id order.
    pub fn ports(&self) -> impl Iterator<Item = &Port> {
        self.ports.values()
    }

    /// Ships in ascending id order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values()
    }

    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn locate_container(&self, id: ContainerId) -> Option<ContainerLocation> {
        if let Some(port) = self
            .ports
            .values()
            .find(|port| port.find_container(id).is_some())
        {
            return Some(ContainerLocation::Port(port.id));
        }

        self.ships
            .values()
            .find(|ship| ship.containers().iter().any(|c| c.id == id))
            .map(|ship| ContainerLocation::Ship(ship.id))
    }

    /// Great-circle distance between two registered ports in kilometres.
    pub fn distance_between(&self, from: PortId, to: PortId) -> Result<f64> {
        let from = self.port(from)?;
        let to = self.port(to)?;
        Ok(from.distance_to(to))
    }

    /// Check a voyage without performing it.
    pub fn plan_voyage(&self, ship: ShipId, destination: PortId) -> Result<Voyage> {
        let ship = self.ship(ship)?;
        let origin = self.port(ship.current_port())?;
        let destination = self.port(destination)?;
        ship.plan_voyage(origin, destination)
    }

    /// Sail a ship from its current port to `destination`.
    ///
    /// Sailing to the port the ship is already at covers zero distance and
    /// always succeeds; the ship stays docked.
    pub fn sail(&mut self, ship_id: ShipId, destination: PortId) -> Result<Voyage> {
        let ship = self
            .ships
            .get_mut(&ship_id)
            .ok_or(Error::UnknownShip { id: ship_id })?;
        if !self.ports.contains_key(&destination) {
            return Err(Error::UnknownPort { id: destination });
        }
        let origin_id = ship.current_port();

        let result = if origin_id == destination {
            let port = self
                .ports
                .get_mut(&destination)
                .ok_or(Error::UnknownPort { id: destination })?;
            let planned = ship.plan_voyage(&*port, &*port);
            if let Ok(voyage) = &planned {
                port.register_departure(ship_id);
                port.register_arrival(ship_id);
                ship.apply_voyage(voyage);
            }
            planned
        } else {
            let mut origin = self
                .ports
                .remove(&origin_id)
                .ok_or(Error::UnknownPort { id: origin_id })?;
            let result = match self.ports.get_mut(&destination) {
                Some(target) => ship.sail_to(&mut origin, target),
                None => Err(Error::UnknownPort { id: destination }),
            };
            self.ports.insert(origin_id, origin);
            result
        };

        match &result {
            Ok(voyage) => debug!(
                ship = ship_id,
                from = voyage.from,
                to = voyage.to,
                fuel_used = voyage.fuel_used,
                "ship sailed"
            ),
            Err(err) => warn!(ship = ship_id, to = destination, error = %err, "sail rejected"),
        }
        result
    }

    /// Add fuel to a ship and return its new fuel level.
    pub fn refuel(&mut self, ship: ShipId, amount: f64) -> Result<f64> {
        let fuel = self.ship_mut(ship)?.refuel(amount)?;
        debug!(ship, amount, fuel, "ship refuelled");
        Ok(fuel)
    }

    /// Move a container from the ship's current port onto the ship.
    ///
    /// When the ship is full the container stays at the port.
    pub fn load(&mut self, ship_id: ShipId, container_id: ContainerId) -> Result<Container> {
        let ship = self
            .ships
            .get_mut(&ship_id)
            .ok_or(Error::UnknownShip { id: ship_id })?;
        let port_id = ship.current_port();
        let port = self
            .ports
            .get_mut(&port_id)
            .ok_or(Error::UnknownPort { id: port_id })?;

        let container = *port
            .find_container(container_id)
            .ok_or(Error::ContainerNotAtPort {
                port: port_id,
                container: container_id,
            })?;

        if let Err(err) = ship.load_container(container) {
            warn!(
                ship = ship_id,
                container = container_id,
                error = %err,
                "load rejected"
            );
            return Err(err);
        }
        port.take_container(container_id);

        debug!(
            ship = ship_id,
            port = port_id,
            container = container_id,
            "container loaded"
        );
        Ok(container)
    }

    /// Move a container from a ship onto the ship's current port.
    pub fn unload(&mut self, ship_id: ShipId, container_id: ContainerId) -> Result<Container> {
        let ship = self
            .ships
            .get_mut(&ship_id)
            .ok_or(Error::UnknownShip { id: ship_id })?;
        let port_id = ship.current_port();
        let port = self
            .ports
            .get_mut(&port_id)
            .ok_or(Error::UnknownPort { id: port_id })?;

        let Some(target) = ship
            .containers()
            .iter()
            .find(|c| c.id == container_id)
            .copied()
        else {
            warn!(
                ship = ship_id,
                container = container_id,
                "unload rejected: container not aboard"
            );
            return Err(Error::ContainerNotAboard {
                ship: ship_id,
                container: container_id,
            });
        };

        let container = ship.unload_container(&target)?;
        port.store_container(container);

        debug!(
            ship = ship_id,
            port = port_id,
            container = container_id,
            "container unloaded"
        );
        Ok(container)
    }

    fn port_mut(&mut self, id: PortId) -> Result<&mut Port> {
        self.ports.get_mut(&id).ok_or(Error::UnknownPort { id })
    }

    fn ship_mut(&mut self, id: ShipId) -> Result<&mut Ship> {
        self.ships.get_mut(&id).ok_or(Error::UnknownShip { id })
    }
}
