//! Cargo containers and their fuel consumption rates.
//!
//! Container kinds form a closed set with a flat rate table. Refrigerated and
//! liquid containers are heavy cargo in practice, but each carries its own
//! rate; rates never compound.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Numeric identifier for a container, unique across a fleet.
pub type ContainerId = u64;

/// Variant of a container. Determines the fuel rate only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Basic,
    Heavy,
    Refrigerated,
    Liquid,
}

impl ContainerKind {
    /// All kinds in report order.
    pub const ALL: [ContainerKind; 4] = [
        ContainerKind::Basic,
        ContainerKind::Heavy,
        ContainerKind::Refrigerated,
        ContainerKind::Liquid,
    ];

    /// Fuel consumption per ton of cargo.
    pub fn fuel_rate(self) -> f64 {
        match self {
            ContainerKind::Basic => 2.5,
            ContainerKind::Heavy => 3.0,
            ContainerKind::Refrigerated => 5.0,
            ContainerKind::Liquid => 4.0,
        }
    }

    /// Lowercase name used in scenario input.
    pub fn label(self) -> &'static str {
        match self {
            ContainerKind::Basic => "basic",
            ContainerKind::Heavy => "heavy",
            ContainerKind::Refrigerated => "refrigerated",
            ContainerKind::Liquid => "liquid",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContainerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(ContainerKind::Basic),
            "heavy" => Ok(ContainerKind::Heavy),
            "refrigerated" => Ok(ContainerKind::Refrigerated),
            "liquid" => Ok(ContainerKind::Liquid),
            other => Err(format!(
                "unknown container type '{other}'; expected basic, heavy, refrigerated or liquid"
            )),
        }
    }
}

/// A unit of cargo. Never mutated after creation.
#[derive(Debug, Clone, Copy)]
pub struct Container {
    pub id: ContainerId,
    /// Weight in tons.
    pub weight: f64,
    pub kind: ContainerKind,
}

impl Container {
    pub fn new(id: ContainerId, weight: f64, kind: ContainerKind) -> Self {
        Self { id, weight, kind }
    }

    /// Fuel consumption contributed by this container: `weight * rate(kind)`.
    pub fn consumption(&self) -> f64 {
        self.weight * self.kind.fuel_rate()
    }
}

// Identity is (id, weight); the kind is deliberately not compared. Two
// containers that differ only in kind are equal, which also governs which
// entry `unload_container` matches.
impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.weight == other.weight
    }
}
