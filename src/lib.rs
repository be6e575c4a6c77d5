//! # Gearmath
//!
//! Angular kinematics and phase relationships for planetary and simple gear
//! trains.
//!
//! ## Architecture Overview
//!
//! The crate is a stateless function library plus one thin descriptor type:
//!
//! - **Kinematics Core**: six pure functions mapping tooth counts and mesh
//!   geometry to phase offsets and angular velocities
//! - **Planetary Descriptor**: a validated, serializable description of a
//!   complete planetary gearset built on top of the core functions
//!
//! ## Intended Consumers
//!
//! A rendering or simulation layer supplies tooth counts and mesh geometry
//! (computed externally) and reads back phase and velocity values to position
//! or animate gear visuals. The crate performs no I/O and holds no state
//! across calls; every function is safe to call concurrently from any number
//! of threads.
//!
//! ## Numeric Conventions
//!
//! Angles are `f64` radians, normalized to the half-open interval `[0, 2π)`.
//! The core functions perform no input validation: division by a zero tooth
//! count yields infinity or NaN per IEEE 754, and non-finite inputs propagate
//! through the arithmetic. This leniency is deliberate so the functions stay
//! total over the floating-point domain.

pub mod kinematics;

pub use kinematics::*;

// Explicit re-exports for commonly used items
pub use kinematics::gear_math::{
    child_phase, internal_mesh_phase, normalize_angle, planetary_ring_speed,
    planetary_ring_teeth, ring_phase_from_planet,
};
pub use kinematics::planetary::PlanetaryGearset;

/// Core error type for the gearmath crate.
///
/// The pure kinematics functions never return errors; only the
/// [`PlanetaryGearset`] descriptor, whose constructor enforces geometric
/// validity, produces these.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GearError {
    /// A gear was described with zero teeth
    #[error("gear has zero teeth: {0}")]
    ZeroTeeth(&'static str),

    /// A planetary gearset was described with no planets
    #[error("planetary gearset requires at least one planet")]
    NoPlanets,

    /// Equally spaced planets cannot mesh with this tooth combination
    #[error(
        "assembly condition violated: sun ({sun_teeth}) + ring ({ring_teeth}) \
         teeth not divisible by planet count ({planet_count})"
    )]
    AssemblyCondition {
        /// Sun gear tooth count
        sun_teeth: u32,
        /// Ring gear tooth count
        ring_teeth: u32,
        /// Number of equally spaced planets
        planet_count: u32,
    },
}

/// Result type used throughout the gearmath codebase.
pub type GearResult<T> = Result<T, GearError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
