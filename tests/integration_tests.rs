/// Integration tests for the fire telemetry service
///
/// Run with: cargo test --test integration_tests -- --nocapture

use fire_telemetry::{
    damage::round_cents, AreaRange, Intensity, RegionConfig, ScriptedRandom, SeededRandom,
    TelemetryService,
};
use std::collections::HashSet;
use std::path::PathBuf;

fn region_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("regions")
        .join(format!("{}.json", name))
}

fn seeded_california(seed: u64) -> RegionConfig {
    let mut cfg = RegionConfig::california();
    cfg.seed = Some(seed);
    cfg
}

#[test]
fn test_shipped_profiles_load() {
    println!("\n=== Test: Shipped Profiles ===");
    for name in ["california", "oregon"] {
        let cfg = RegionConfig::load(region_file(name)).expect("profile should load");
        assert_eq!(cfg.name, name);
        println!("✓ {} jitter={} cost={}", cfg.name, cfg.jitter_range, cfg.cost_per_km2);
    }

    // the JSON profile and the built-in default describe the same region
    let from_file = RegionConfig::load(region_file("california")).unwrap();
    assert_eq!(from_file, RegionConfig::california());
}

#[test]
fn test_bounded_step_and_drift() {
    println!("\n=== Test: Bounded Step ===");
    let cfg = seeded_california(2024);
    let j = cfg.jitter_range;
    let origin = cfg.origin;
    let svc = TelemetryService::new(cfg).unwrap();

    let n = 200;
    let mut prev = origin;
    for _ in 0..n {
        let fires = svc.get_fires();
        assert_eq!(fires.len(), 1, "exactly one fire per poll");
        let pos = fires[0].position;
        assert!((pos.lat - prev.lat).abs() <= j + 1e-12, "lat step too large");
        assert!((pos.lon - prev.lon).abs() <= j + 1e-12, "lon step too large");
        prev = pos;
    }

    let bound = n as f64 * j + 1e-9;
    assert!((prev.lat - origin.lat).abs() <= bound);
    assert!((prev.lon - origin.lon).abs() <= bound);
    println!("✓ drift after {} polls: ({:+.4}, {:+.4})", n, prev.lat - origin.lat, prev.lon - origin.lon);
}

#[test]
fn test_intensity_from_configured_set() {
    println!("\n=== Test: Intensity Labels ===");
    let mut cfg = seeded_california(3);
    cfg.intensity_labels = vec![Intensity::Moderate, Intensity::VeryHigh];
    let svc = TelemetryService::new(cfg).unwrap();

    for _ in 0..300 {
        let fires = svc.get_fires();
        assert_eq!(fires.len(), 1);
        assert_ne!(fires[0].intensity, Intensity::High, "High is not configured");
    }
    println!("✓ intensities stayed within the configured set");
}

#[test]
fn test_prediction_tracks_last_poll() {
    println!("\n=== Test: Prediction Consistency ===");
    let svc = TelemetryService::new(seeded_california(77)).unwrap();

    for _ in 0..25 {
        let fire = svc.get_fires().remove(0);
        for _ in 0..3 {
            let p = svc.get_prediction();
            assert_eq!(p.spread_zone[0], [fire.position.lat, fire.position.lon]);
            assert_eq!(p.fire_id, fire.id);
        }
    }

    // prediction never moves the fire
    let before = svc.get_prediction();
    for _ in 0..10 {
        svc.get_prediction();
    }
    assert_eq!(svc.get_prediction(), before);
    println!("✓ spread zone anchored at the last observed position");
}

#[test]
fn test_zero_jitter_holds_still() {
    println!("\n=== Test: Zero Jitter ===");
    let mut cfg = seeded_california(5);
    cfg.jitter_range = 0.0;
    let origin = cfg.origin;
    let svc = TelemetryService::new(cfg).unwrap();

    for _ in 0..5 {
        assert_eq!(svc.get_fires()[0].position, origin);
    }
    println!("✓ no drift with jitter disabled");
}

#[test]
fn test_damage_formula_and_range() {
    println!("\n=== Test: Damage Sampling ===");
    let cfg = seeded_california(9);
    let range = cfg.area_range;
    let cost = cfg.cost_per_km2;
    let svc = TelemetryService::new(cfg).unwrap();

    for _ in 0..10_000 {
        let d = svc.get_damage();
        assert!(d.area_affected_km2 >= range.min && d.area_affected_km2 <= range.max);
        assert_eq!(d.estimated_damage_usd, round_cents(d.area_affected_km2 * cost));
        assert_eq!(d.currency, "USD");
    }
    println!("✓ 10000 samples inside [{}, {}]", range.min, range.max);
}

#[test]
fn test_pinned_damage_scenario() {
    println!("\n=== Test: Pinned Damage ===");
    let cfg = RegionConfig::load(region_file("oregon")).unwrap();
    assert_eq!(cfg.area_range, AreaRange { min: 40.0, max: 50.0 });
    assert_eq!(cfg.cost_per_km2, 15_000.0);

    let svc = TelemetryService::with_random(
        cfg,
        ScriptedRandom::new(vec![0.5]),
        ScriptedRandom::new(vec![0.5]),
    )
    .unwrap();

    let d = svc.get_damage();
    assert_eq!(d.area_affected_km2, 45.0);
    assert_eq!(d.estimated_damage_usd, 675_000.00);

    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["estimated_damage_usd"], 675_000.0);
    println!("✓ 45 km2 at $15000/km2 = ${:.2}", d.estimated_damage_usd);
}

#[test]
fn test_oregon_bounds_hold() {
    println!("\n=== Test: Clamped Drift ===");
    let mut cfg = RegionConfig::load(region_file("oregon")).unwrap();
    let b = cfg.bounds.expect("oregon ships with bounds");
    cfg.jitter_range = 0.5;
    let svc = TelemetryService::with_random(cfg, SeededRandom::from_seed(1), SeededRandom::from_seed(2))
        .unwrap();

    for _ in 0..500 {
        let pos = svc.get_fires()[0].position;
        assert!(pos.lat >= b.min_lat && pos.lat <= b.max_lat);
        assert!(pos.lon >= b.min_lon && pos.lon <= b.max_lon);
    }
    println!("✓ fire stayed inside the region box");
}

#[test]
fn test_concurrent_polls_are_consistent() {
    println!("\n=== Test: Concurrent Polls ===");
    let step = 0.001;
    let mut cfg = RegionConfig::california();
    cfg.jitter_range = step;
    let origin = cfg.origin;

    // every poll moves both axes by exactly +step, so a torn snapshot would
    // show the two axes at different step counts
    let svc = TelemetryService::with_random(
        cfg,
        ScriptedRandom::new(vec![1.0, 1.0, 0.5]),
        ScriptedRandom::new(vec![0.5]),
    )
    .unwrap();

    let snapshots: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..100).map(|_| s.spawn(|| svc.get_fires())).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut steps = HashSet::new();
    for fires in &snapshots {
        assert_eq!(fires.len(), 1);
        let pos = fires[0].position;
        let lat_steps = ((pos.lat - origin.lat) / step).round() as i64;
        let lon_steps = ((pos.lon - origin.lon) / step).round() as i64;
        assert_eq!(lat_steps, lon_steps, "torn read: lat and lon disagree");
        assert_eq!(fires[0].intensity, Intensity::High);
        steps.insert(lat_steps);
    }

    assert_eq!(steps.len(), 100, "each poll should observe its own step");
    assert_eq!(steps.iter().min(), Some(&1));
    assert_eq!(steps.iter().max(), Some(&100));
    println!("✓ 100 concurrent snapshots, all internally consistent");
}

#[test]
fn test_json_shapes() {
    println!("\n=== Test: JSON Shapes ===");
    let svc = TelemetryService::new(seeded_california(1)).unwrap();

    let fires = serde_json::to_value(svc.get_fires()).unwrap();
    assert!(fires.is_array());
    assert_eq!(fires.as_array().unwrap().len(), 1);
    for key in ["id", "lat", "lon", "intensity", "status", "detected_by", "tree_type", "tree_density", "last_update"] {
        assert!(fires[0].get(key).is_some(), "missing {}", key);
    }

    let prediction = serde_json::to_value(svc.get_prediction()).unwrap();
    assert_eq!(prediction["direction"], "North-East");
    assert_eq!(prediction["spread_zone"].as_array().unwrap().len(), 3);

    let damage = serde_json::to_value(svc.get_damage()).unwrap();
    assert_eq!(damage["currency"], "USD");

    let preview = serde_json::to_string_pretty(&fires).unwrap();
    println!("{}", preview);
}
