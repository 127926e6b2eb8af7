#![allow(dead_code)]

use std::path::PathBuf;

use seafreight_lib::{load_fleet, Coordinates, Fleet, ShipSpec};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn sample_scenario_path() -> PathBuf {
    fixtures_dir().join("sample_scenario.json")
}

pub fn sample_fleet() -> Fleet {
    load_fleet(&sample_scenario_path(), 1).expect("sample scenario loads")
}

/// Two ports one degree of longitude apart on the equator (about 111.19 km)
/// and ship 1 docked at port 1 burning one unit of fuel per kilometre.
pub fn equator_fleet(fuel: f64) -> Fleet {
    let mut fleet = Fleet::new();
    fleet
        .add_port(1, Coordinates::new(0.0, 0.0))
        .expect("port 1");
    fleet
        .add_port(2, Coordinates::new(0.0, 1.0))
        .expect("port 2");
    fleet
        .commission_ship(
            ShipSpec {
                id: 1,
                fuel,
                max_weight: 10_000.0,
                max_containers: 4,
                fuel_consumption_per_km: 1.0,
            },
            1,
        )
        .expect("ship 1");
    fleet
}
