use criterion::{criterion_group, criterion_main, Criterion};
use seafreight_lib::{
    haversine_km, Container, ContainerKind, Coordinates, Fleet, FleetReport, ShipSpec,
};
use std::hint::black_box;

const PORTS: u64 = 64;
const SHIPS: u64 = 256;

fn build_fleet() -> Fleet {
    let mut fleet = Fleet::new();
    for id in 1..=PORTS {
        let lat = (id as f64 * 7.3) % 160.0 - 80.0;
        let lon = (id as f64 * 13.7) % 360.0 - 180.0;
        fleet
            .add_port(id, Coordinates::new(lat, lon))
            .expect("unique port");
    }
    for id in 1..=SHIPS {
        let spec = ShipSpec {
            id,
            fuel: 1e9,
            max_weight: 1e6,
            max_containers: 32,
            fuel_consumption_per_km: 0.5,
        };
        fleet
            .commission_ship(spec, id % PORTS + 1)
            .expect("port exists");
    }
    for id in 1..=SHIPS * 8 {
        let kind = ContainerKind::ALL[(id % 4) as usize];
        fleet
            .store_container(id % PORTS + 1, Container::new(id, id as f64 % 40.0, kind))
            .expect("unique container");
    }
    fleet
}

fn benchmark_voyages(c: &mut Criterion) {
    let hamburg = Coordinates::new(53.55, 9.99);
    let singapore = Coordinates::new(1.29, 103.85);

    c.bench_function("haversine_hamburg_singapore", |b| {
        b.iter(|| black_box(haversine_km(black_box(&hamburg), black_box(&singapore))));
    });

    let fleet = build_fleet();

    c.bench_function("plan_voyage_all_ships", |b| {
        b.iter(|| {
            let feasible = (1..=SHIPS)
                .filter(|ship| fleet.plan_voyage(*ship, (ship * 7) % PORTS + 1).is_ok())
                .count();
            black_box(feasible)
        });
    });

    c.bench_function("sail_round_trip", |b| {
        b.iter_batched(
            || fleet.clone(),
            |mut fleet| {
                for ship in 1..=SHIPS {
                    let _ = fleet.sail(ship, (ship * 3) % PORTS + 1);
                }
                black_box(fleet)
            },
            criterion::BatchSize::LargeInput,
        );
    });

    c.bench_function("fleet_report_json", |b| {
        b.iter(|| {
            let report = FleetReport::from_fleet(&fleet);
            black_box(report.render_json().expect("report renders"))
        });
    });
}

criterion_group!(benches, benchmark_voyages);
criterion_main!(benches);
