//! # Kinematics Module
//!
//! Closed-form angular kinematics for meshing gears: phase offsets, angular
//! velocities, and a validated planetary gearset descriptor.

pub mod gear_math;
pub mod planetary;

pub use gear_math::*;
pub use planetary::*;
