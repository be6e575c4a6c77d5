//! # Planetary Gearset Descriptor
//!
//! A validated description of a complete planetary gearset: sun, ring, and a
//! set of equally spaced planets on a common carrier. The descriptor owns no
//! state beyond its three tooth/count integers; every query method is a thin
//! composition of the pure functions in [`gear_math`](super::gear_math).

use crate::kinematics::gear_math;
use crate::{GearError, GearResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Geometric description of a planetary gearset with equally spaced planets.
///
/// Construct via [`PlanetaryGearset::new`], which enforces the assembly
/// condition. Descriptors built directly or deserialized from stored config
/// bypass validation; call [`validate`](Self::validate) on those before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetaryGearset {
    /// Tooth count of the central sun gear
    pub sun_teeth: u32,
    /// Tooth count of each planet gear
    pub planet_teeth: u32,
    /// Number of equally spaced planets on the carrier
    pub planet_count: u32,
}

impl PlanetaryGearset {
    /// Creates a validated planetary gearset description.
    ///
    /// Fails if either tooth count is zero, if there are no planets, or if
    /// the assembly condition `(S + R) % N == 0` does not hold — equally
    /// spaced planets can only mesh when the combined sun and ring tooth
    /// count is divisible by the planet count.
    pub fn new(sun_teeth: u32, planet_teeth: u32, planet_count: u32) -> GearResult<Self> {
        let gearset = Self {
            sun_teeth,
            planet_teeth,
            planet_count,
        };
        gearset.validate()?;
        debug!(
            "planetary gearset: sun={} planet={} ring={} planets={}",
            sun_teeth,
            planet_teeth,
            gearset.ring_teeth(),
            planet_count
        );
        Ok(gearset)
    }

    /// Checks the geometric validity of this description.
    pub fn validate(&self) -> GearResult<()> {
        if self.sun_teeth == 0 {
            return Err(GearError::ZeroTeeth("sun"));
        }
        if self.planet_teeth == 0 {
            return Err(GearError::ZeroTeeth("planet"));
        }
        if self.planet_count == 0 {
            return Err(GearError::NoPlanets);
        }
        let ring_teeth = self.ring_teeth();
        if (self.sun_teeth + ring_teeth) % self.planet_count != 0 {
            return Err(GearError::AssemblyCondition {
                sun_teeth: self.sun_teeth,
                ring_teeth,
                planet_count: self.planet_count,
            });
        }
        Ok(())
    }

    /// Tooth count of the ring gear, from the constraint `R = S + 2P`.
    pub fn ring_teeth(&self) -> u32 {
        gear_math::planetary_ring_teeth(f64::from(self.sun_teeth), f64::from(self.planet_teeth))
            as u32
    }

    /// Carrier-frame angles at which the planets sit, one per planet,
    /// starting at zero and evenly spaced around the carrier.
    pub fn planet_mesh_angles(&self) -> Vec<f64> {
        (0..self.planet_count)
            .map(|i| TAU * f64::from(i) / f64::from(self.planet_count))
            .collect()
    }

    /// Phase offset of each planet for a given sun phase, via the external
    /// sun–planet mesh relation.
    pub fn planet_phases(&self, sun_phase: f64) -> Vec<f64> {
        self.planet_mesh_angles()
            .into_iter()
            .map(|mesh_angle| {
                gear_math::child_phase(
                    sun_phase,
                    mesh_angle,
                    f64::from(self.sun_teeth),
                    f64::from(self.planet_teeth),
                )
            })
            .collect()
    }

    /// Phase offset of the ring gear for a given sun phase.
    ///
    /// Propagates the phase of the planet at mesh angle zero through the
    /// internal planet–ring mesh.
    pub fn ring_phase(&self, sun_phase: f64) -> f64 {
        let planet_phase = gear_math::child_phase(
            sun_phase,
            0.0,
            f64::from(self.sun_teeth),
            f64::from(self.planet_teeth),
        );
        gear_math::ring_phase_from_planet(
            planet_phase,
            0.0,
            f64::from(self.planet_teeth),
            f64::from(self.ring_teeth()),
        )
    }

    /// Angular velocity of the ring gear given sun and carrier velocities.
    pub fn ring_speed(&self, sun_omega: f64, carrier_omega: f64) -> f64 {
        gear_math::planetary_ring_speed(
            sun_omega,
            carrier_omega,
            f64::from(self.sun_teeth),
            f64::from(self.ring_teeth()),
        )
    }
}
