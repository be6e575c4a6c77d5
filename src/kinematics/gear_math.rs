//! # Gear Math
//!
//! The six pure functions at the heart of the crate. Each one is a direct
//! closed-form evaluation: compute a gear-ratio factor and a half-tooth
//! angular width from tooth counts, combine them linearly with the known
//! phase and mesh-geometry angle, and normalize the result.
//!
//! None of these functions validate their inputs. Tooth counts are taken as
//! `f64` so callers can pass integers without ceremony; a zero tooth count
//! divides to infinity or NaN per IEEE 754 rather than raising an error, and
//! non-finite inputs propagate unchanged. The phase formulas encode specific
//! geometric conventions (tooth-to-gap alignment at the mesh point, sign of
//! the mesh angle) and should be treated as authoritative rather than
//! re-derived.

use std::f64::consts::{PI, TAU};

/// Normalizes an angle in radians to the half-open interval `[0, 2π)`.
///
/// The result is congruent to the input modulo 2π. Rust's `%` follows the
/// sign of the dividend, so the remainder lies in `(−2π, 2π)` and a single
/// addition of 2π suffices for negative inputs. Non-finite input yields NaN.
pub fn normalize_angle(angle: f64) -> f64 {
    let rem = angle % TAU;
    if rem < 0.0 {
        rem + TAU
    } else {
        rem
    }
}

/// Returns the ring tooth count required for a geometrically valid planetary
/// gearset, from the constraint `R = S + 2P`.
pub fn planetary_ring_teeth(sun_teeth: f64, planet_teeth: f64) -> f64 {
    sun_teeth + 2.0 * planet_teeth
}

/// Returns the ring gear's angular velocity in a planetary train.
///
/// Solves the kinematic constraint `S·ωs + R·ωr = (S + R)·ωc` for `ωr`.
/// Callers must ensure `ring_teeth` is nonzero; a zero value divides to
/// ±∞ or NaN per standard floating-point semantics.
pub fn planetary_ring_speed(
    sun_omega: f64,
    carrier_omega: f64,
    sun_teeth: f64,
    ring_teeth: f64,
) -> f64 {
    ((sun_teeth + ring_teeth) * carrier_omega - sun_teeth * sun_omega) / ring_teeth
}

/// Returns the ring gear phase implied by a known planet gear phase.
///
/// Inverse direction of the internal-mesh relation: instead of deriving a
/// planet's phase from the ring, this recovers the ring's phase from a
/// planet already positioned at `mesh_angle`. Ring and planet rotate in the
/// same direction (internal mesh). Callers must ensure both tooth counts are
/// nonzero.
pub fn ring_phase_from_planet(
    planet_phase: f64,
    mesh_angle: f64,
    planet_teeth: f64,
    ring_teeth: f64,
) -> f64 {
    let ratio = planet_teeth / ring_teeth;
    let half_tooth_planet = PI / planet_teeth;
    normalize_angle((planet_phase - half_tooth_planet) * ratio + mesh_angle * (1.0 - ratio))
}

/// Returns the phase of a child gear meshing externally with a parent gear.
///
/// `mesh_angle` is measured from the parent's center to the child's center.
/// The phase is chosen so a parent tooth tip coincides with a child tooth
/// gap at the contact point; the `−π` term encodes the 180° flip inherent to
/// external mesh, where the gears rotate in opposite directions. Callers
/// must ensure `child_teeth` is nonzero.
pub fn child_phase(
    parent_phase: f64,
    mesh_angle: f64,
    parent_teeth: f64,
    child_teeth: f64,
) -> f64 {
    let ratio = parent_teeth / child_teeth;
    let half_tooth = PI / child_teeth;
    normalize_angle(half_tooth - PI - mesh_angle * (1.0 + ratio) - parent_phase * ratio)
}

/// Returns the phase of a child gear meshing with the inside of a ring-type
/// parent gear.
///
/// Internal mesh preserves rotation direction, so there is no 180° flip
/// term: the contact condition aligns a ring gap with the child's tooth tip
/// at `mesh_angle`. Callers must ensure `child_teeth` is nonzero.
pub fn internal_mesh_phase(
    parent_phase: f64,
    mesh_angle: f64,
    parent_teeth: f64,
    child_teeth: f64,
) -> f64 {
    let ratio = parent_teeth / child_teeth;
    let half_tooth = PI / child_teeth;
    normalize_angle(-half_tooth + mesh_angle * (ratio - 1.0) + parent_phase * ratio)
}
