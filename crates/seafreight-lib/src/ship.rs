//! Ships: fuel, cargo, and the sailing feasibility check.
//!
//! A ship is always docked at exactly one port. The only state transition is
//! a voyage, which is gated by the fuel predicate
//! `fuel >= distance_km * fuel_consumption_per_km`. A voyage either commits
//! completely (fuel deducted, departure and arrival registered, current port
//! updated) or leaves every piece of state exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::container::Container;
use crate::error::{Error, Result};
use crate::port::{Dock, PortId};

/// Numeric identifier for a ship.
pub type ShipId = u64;

/// Something that sails between docks and carries cargo.
pub trait Vessel {
    fn id(&self) -> ShipId;

    fn fuel(&self) -> f64;

    fn current_port(&self) -> PortId;

    /// Check whether a voyage from `origin` to `destination` is feasible
    /// without changing any state.
    fn plan_voyage(&self, origin: &dyn Dock, destination: &dyn Dock) -> Result<Voyage>;

    /// Sail from `origin` (the current port) to `destination`.
    ///
    /// On error nothing is mutated: not the ship, and neither dock.
    fn sail_to(&mut self, origin: &mut dyn Dock, destination: &mut dyn Dock) -> Result<Voyage>;

    /// Add fuel and return the new fuel level.
    fn refuel(&mut self, amount: f64) -> Result<f64>;

    /// Put a container aboard if a slot is free.
    fn load_container(&mut self, container: Container) -> Result<()>;

    /// Remove the first container equal to `container` and return it.
    fn unload_container(&mut self, container: &Container) -> Result<Container>;
}

/// Static description of a ship before it is bound to a port.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipSpec {
    pub id: ShipId,
    pub fuel: f64,
    /// Declared weight ceiling in tons. Recorded but not enforced on loading.
    pub max_weight: f64,
    pub max_containers: usize,
    pub fuel_consumption_per_km: f64,
}

/// Outcome of a feasible (planned) or completed voyage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Voyage {
    pub ship: ShipId,
    pub from: PortId,
    pub to: PortId,
    pub distance_km: f64,
    pub fuel_used: f64,
    pub fuel_remaining: f64,
}

/// A vessel with mutable voyage and cargo state.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub id: ShipId,
    pub max_weight: f64,
    pub max_containers: usize,
    pub fuel_consumption_per_km: f64,
    fuel: f64,
    current_port: PortId,
    containers: Vec<Container>,
}

impl Ship {
    /// Create a ship bound to `port` without touching the port's registers.
    ///
    /// Prefer [`Ship::commission`] or [`crate::Fleet::commission_ship`], which
    /// also register the arrival.
    pub fn new(spec: ShipSpec, port: PortId) -> Self {
        Self {
            id: spec.id,
            max_weight: spec.max_weight,
            max_containers: spec.max_containers,
            fuel_consumption_per_km: spec.fuel_consumption_per_km,
            fuel: spec.fuel,
            current_port: port,
            containers: Vec::new(),
        }
    }

    /// Create a ship docked at `port` and register its arrival there.
    pub fn commission(spec: ShipSpec, port: &mut dyn Dock) -> Self {
        let ship = Self::new(spec, port.id());
        port.register_arrival(ship.id);
        ship
    }

    /// Containers aboard, in loading order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn free_slots(&self) -> usize {
        self.max_containers.saturating_sub(self.containers.len())
    }

    /// Total weight of the cargo aboard in tons.
    pub fn cargo_weight(&self) -> f64 {
        self.containers.iter().map(|c| c.weight).sum()
    }

    /// Sum of the fuel consumption figures of the cargo aboard.
    pub fn cargo_consumption(&self) -> f64 {
        self.containers.iter().map(Container::consumption).sum()
    }

    /// Fuel needed to cover `distance_km`.
    pub fn required_fuel(&self, distance_km: f64) -> f64 {
        distance_km * self.fuel_consumption_per_km
    }

    /// Commit a planned voyage to the ship's own state. Dock registers are
    /// the caller's responsibility.
    pub(crate) fn apply_voyage(&mut self, voyage: &Voyage) {
        self.fuel -= voyage.fuel_used;
        self.current_port = voyage.to;
    }
}

impl Vessel for Ship {
    fn id(&self) -> ShipId {
        self.id
    }

    fn fuel(&self) -> f64 {
        self.fuel
    }

    fn current_port(&self) -> PortId {
        self.current_port
    }

    fn plan_voyage(&self, origin: &dyn Dock, destination: &dyn Dock) -> Result<Voyage> {
        if origin.id() != self.current_port {
            return Err(Error::ShipNotDocked {
                ship: self.id,
                port: origin.id(),
            });
        }

        let distance_km = origin.distance_to(destination);
        let required = self.required_fuel(distance_km);

        if self.fuel >= required {
            Ok(Voyage {
                ship: self.id,
                from: origin.id(),
                to: destination.id(),
                distance_km,
                fuel_used: required,
                fuel_remaining: self.fuel - required,
            })
        } else {
            Err(Error::InsufficientFuel {
                ship: self.id,
                required,
                available: self.fuel,
            })
        }
    }

    fn sail_to(&mut self, origin: &mut dyn Dock, destination: &mut dyn Dock) -> Result<Voyage> {
        let voyage = self.plan_voyage(&*origin, &*destination)?;

        origin.register_departure(self.id);
        destination.register_arrival(self.id);
        self.apply_voyage(&voyage);

        debug!(
            ship = self.id,
            from = voyage.from,
            to = voyage.to,
            distance_km = voyage.distance_km,
            fuel_remaining = voyage.fuel_remaining,
            "voyage completed"
        );
        Ok(voyage)
    }

    fn refuel(&mut self, amount: f64) -> Result<f64> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidFuelAmount { amount });
        }

        self.fuel += amount;
        Ok(self.fuel)
    }

    fn load_container(&mut self, container: Container) -> Result<()> {
        if self.free_slots() == 0 {
            return Err(Error::CapacityExceeded {
                ship: self.id,
                max_containers: self.max_containers,
            });
        }

        self.containers.push(container);
        Ok(())
    }

    fn unload_container(&mut self, container: &Container) -> Result<Container> {
        let index = self
            .containers
            .iter()
            .position(|aboard| aboard == container)
            .ok_or(Error::ContainerNotAboard {
                ship: self.id,
                container: container.id,
            })?;

        Ok(self.containers.remove(index))
    }
}
