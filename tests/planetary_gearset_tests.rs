//! Integration tests exercising the planetary gearset descriptor the way a
//! rendering or simulation consumer would: build a gearset, serialize it into
//! scene config, and read back phases and velocities for animation.

use gearmath::{normalize_angle, GearError, PlanetaryGearset};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::TAU;

/// Build a gearset, query every kinematic value a renderer needs for one
/// frame, and confirm all phases are canonical.
#[test]
fn test_render_frame_queries() {
    let gearset = PlanetaryGearset::new(30, 20, 5).expect("Failed to build gearset");

    let sun_phase = 1.25;
    let planet_phases = gearset.planet_phases(sun_phase);
    assert_eq!(planet_phases.len(), 5);
    for phase in &planet_phases {
        assert!((0.0..TAU).contains(phase), "planet phase out of range: {phase}");
    }

    let ring_phase = gearset.ring_phase(sun_phase);
    assert!((0.0..TAU).contains(&ring_phase));

    // Carrier held: the ring counter-rotates against the sun
    let ring_omega = gearset.ring_speed(4.0, 0.0);
    assert!(ring_omega < 0.0);
    assert!((ring_omega - (-30.0 * 4.0 / 70.0)).abs() < 1e-9);
}

/// Descriptors survive a trip through scene-config JSON, and validation
/// catches hand-edited configs that break the assembly condition.
#[test]
fn test_gearset_config_round_trip() {
    let gearset = PlanetaryGearset::new(24, 18, 3).expect("Failed to build gearset");

    let json = serde_json::to_string(&gearset).expect("Failed to serialize gearset");
    let restored: PlanetaryGearset =
        serde_json::from_str(&json).expect("Failed to deserialize gearset");
    assert_eq!(restored, gearset);
    assert!(restored.validate().is_ok());

    // A hand-edited config with a bad planet count deserializes fine but
    // fails validation.
    let edited: PlanetaryGearset =
        serde_json::from_str(r#"{"sun_teeth":24,"planet_teeth":18,"planet_count":7}"#)
            .expect("Failed to deserialize edited gearset");
    assert_eq!(
        edited.validate(),
        Err(GearError::AssemblyCondition {
            sun_teeth: 24,
            ring_teeth: 60,
            planet_count: 7,
        })
    );
}

/// Phase queries are pure: repeated calls with the same sun phase agree
/// exactly, and randomized sun phases never escape the canonical interval.
#[test]
fn test_phase_queries_are_pure_and_canonical() {
    let mut rng = StdRng::seed_from_u64(42);
    let gearset = PlanetaryGearset::new(30, 20, 5).expect("Failed to build gearset");

    for _ in 0..200 {
        let sun_phase: f64 = rng.gen_range(-20.0..20.0);

        let first = gearset.planet_phases(sun_phase);
        let second = gearset.planet_phases(sun_phase);
        assert_eq!(first, second);

        for phase in first {
            assert!((0.0..TAU).contains(&phase));
        }

        let ring = gearset.ring_phase(sun_phase);
        assert_eq!(normalize_angle(ring), ring, "ring phase already canonical");
    }
}

/// Error messages carry enough detail to debug a bad gearset description.
#[test]
fn test_error_messages() {
    let err = PlanetaryGearset::new(0, 20, 3).unwrap_err();
    assert_eq!(err.to_string(), "gear has zero teeth: sun");

    let err = PlanetaryGearset::new(30, 20, 3).unwrap_err();
    assert!(err.to_string().contains("assembly condition violated"));
    assert!(err.to_string().contains("70"));
}
