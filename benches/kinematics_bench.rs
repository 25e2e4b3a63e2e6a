//! Benchmarks for the kinematics hot path.
//!
//! Run with: `cargo bench --bench kinematics_bench`
//!
//! The external solver evaluates the displacement/velocity laws once per
//! section per substep, so per-call cost dominates the coupling overhead.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ibkin_rs::swimmer::{PositionUpdatePolicy, UndulatingFoil};
use ibkin_rs::{KinematicConfig, KinematicOptions, Kinematics, MeshSpacing, RigidPose, SwimmingMode};

fn make_kinematics(mode: SwimmingMode) -> Kinematics {
    let options = KinematicOptions {
        swimming_mode: Some(mode),
        thickness_ratio: match mode {
            SwimmingMode::Anguilliform => 0.08,
            SwimmingMode::Carangiform => 0.18,
        },
        write_validation_data: false,
        designated_writer: false,
        ..Default::default()
    };
    let (config, _) = KinematicConfig::from_options(&options);
    Kinematics::new(config)
}

/// Benchmark the pointwise displacement/velocity evaluation.
fn bench_pointwise_laws(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointwise_laws");

    let positions: Vec<f64> = (0..1000).map(|i| i as f64 / 999.0).collect();

    for mode in [SwimmingMode::Anguilliform, SwimmingMode::Carangiform] {
        let kin = make_kinematics(mode);
        group.bench_with_input(
            BenchmarkId::new("displacement", format!("{mode:?}")),
            &kin,
            |b, kin| {
                b.iter(|| {
                    let mut total = 0.0;
                    for &x in &positions {
                        total += kin.displacement(black_box(x), black_box(1.37));
                    }
                    total
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("velocity", format!("{mode:?}")),
            &kin,
            |b, kin| {
                b.iter(|| {
                    let mut total = 0.0;
                    for &x in &positions {
                        total += kin.velocity(black_box(x), black_box(1.37));
                    }
                    total
                })
            },
        );
    }

    group.finish();
}

/// Benchmark a full per-substep refresh over the marker set.
fn bench_substep_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("substep_refresh");

    for dx in [0.02, 0.005] {
        let options = KinematicOptions {
            write_validation_data: false,
            designated_writer: false,
            ..Default::default()
        };
        let spacing = MeshSpacing { dx, dy: dx / 2.0 };
        let mut foil =
            UndulatingFoil::new(&options, spacing, PositionUpdatePolicy::ShapeTracking);
        let n = foil.layout().total_markers();

        group.bench_function(BenchmarkId::new("velocity_and_shape", n), |b| {
            let mut t = 0.0;
            b.iter(|| {
                t += 1e-4;
                foil.set_kinematics_velocity(black_box(t), RigidPose::default())
                    .unwrap();
                foil.set_shape(black_box(t)).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pointwise_laws, bench_substep_refresh);
criterion_main!(benches);
