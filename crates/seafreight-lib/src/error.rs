use std::path::PathBuf;

use thiserror::Error;

use crate::container::ContainerId;
use crate::port::PortId;
use crate::ship::ShipId;

/// Convenient result alias for the seafreight library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a ship lacks the fuel for a requested voyage.
    #[error("ship {ship} needs {required:.2} fuel to sail but has {available:.2}")]
    InsufficientFuel {
        ship: ShipId,
        required: f64,
        available: f64,
    },

    /// Raised when every container slot aboard a ship is taken.
    #[error("ship {ship} is full ({max_containers} containers)")]
    CapacityExceeded { ship: ShipId, max_containers: usize },

    /// Raised when unloading a container that is not aboard.
    #[error("container {container} is not aboard ship {ship}")]
    ContainerNotAboard {
        ship: ShipId,
        container: ContainerId,
    },

    /// Raised when a container is not stored at the given port.
    #[error("container {container} is not stored at port {port}")]
    ContainerNotAtPort {
        port: PortId,
        container: ContainerId,
    },

    /// Raised when a voyage is started from a port the ship is not docked at.
    #[error("ship {ship} is not docked at port {port}")]
    ShipNotDocked { ship: ShipId, port: PortId },

    /// Raised when a port identifier is not registered.
    #[error("unknown port: {id}")]
    UnknownPort { id: PortId },

    /// Raised when a ship identifier is not registered.
    #[error("unknown ship: {id}")]
    UnknownShip { id: ShipId },

    #[error("duplicate port id: {id}")]
    DuplicatePort { id: PortId },

    #[error("duplicate ship id: {id}")]
    DuplicateShip { id: ShipId },

    #[error("duplicate container id: {id}")]
    DuplicateContainer { id: ContainerId },

    /// Raised when a refuel amount is negative or not finite.
    #[error("invalid fuel amount {amount}; refuelling requires a finite non-negative amount")]
    InvalidFuelAmount { amount: f64 },

    /// Raised when scenario data fails validation.
    #[error("invalid scenario: {message}")]
    InvalidScenario { message: String },

    /// Scenario input could not be located at the resolved path.
    #[error("scenario input not found at {path}")]
    ScenarioNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing and serialisation errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error is an operational rejection (fuel, capacity, or a
    /// missing container) rather than a structural fault. Rejections always
    /// leave the model untouched and are expected outcomes for callers.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::InsufficientFuel { .. }
                | Error::CapacityExceeded { .. }
                | Error::ContainerNotAboard { .. }
        )
    }
}
