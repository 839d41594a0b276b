use thiserror::Error;

use crate::drive_model::MotionProfile;
use crate::limits::DriveLimits;

/// Motor steps per degree of output rotation.
pub const STEPS_PER_DEGREE: f64 = 185.185;

/// Exclusive upper bound of a single rotation, in millidegrees.
pub const MAX_DISPLACEMENT_MDEG: u32 = 360_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RotationError {
    #[error("displacement of {millidegrees} mdeg is out of range (max {max} mdeg, exclusive)")]
    DisplacementOutOfRange { millidegrees: u32, max: u32 },
}

/// Absolute rotation distance, below one full turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displacement(u32);

impl Displacement {
    pub fn from_millidegrees(millidegrees: u32) -> Result<Self, RotationError> {
        if millidegrees >= MAX_DISPLACEMENT_MDEG {
            return Err(RotationError::DisplacementOutOfRange {
                millidegrees,
                max: MAX_DISPLACEMENT_MDEG,
            });
        }
        Ok(Self(millidegrees))
    }

    pub fn millidegrees(&self) -> u32 {
        self.0
    }

    /// Distance in motor steps, truncated.
    pub fn steps(&self) -> u32 {
        (f64::from(self.0) * STEPS_PER_DEGREE / 1000.0) as u32
    }
}

/// Profile of a rotation by `displacement` under `limits`.
pub fn plan_rotation(displacement: Displacement, limits: &DriveLimits) -> MotionProfile {
    limits.plan(displacement.steps())
}
