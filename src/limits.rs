use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::drive_model::{compute_profile, MotionProfile};
use crate::motion_segment::MotionSegment;

/// Rejected drive limits.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LimitsError {
    #[error("acceleration must be positive, got {0}")]
    NonPositiveAcceleration(f64),
    #[error("deceleration must be negative, got {0}")]
    NonNegativeDeceleration(f64),
    #[error("velocity ceiling must be positive, got {0}")]
    NonPositiveVelocity(f64),
    #[error("drive limits must be finite")]
    NotFinite,
}

/// Acceleration, deceleration and velocity ceiling of a stepper drive.
///
/// Holding a `DriveLimits` guarantees `deceleration < 0 < acceleration` and
/// a positive, finite ceiling, which is everything [`compute_profile`]
/// expects from its caller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLimits")]
pub struct DriveLimits {
    acceleration: f64,
    deceleration: f64,
    max_velocity: f64,
}

#[derive(Deserialize)]
struct RawLimits {
    acceleration: f64,
    deceleration: f64,
    max_velocity: f64,
}

impl TryFrom<RawLimits> for DriveLimits {
    type Error = LimitsError;

    fn try_from(raw: RawLimits) -> Result<Self, Self::Error> {
        Self::new(raw.acceleration, raw.deceleration, raw.max_velocity)
    }
}

impl Default for DriveLimits {
    fn default() -> Self {
        Self::fast_rotation()
    }
}

impl DriveLimits {
    /// Acceleration of the fast rotation profile [steps/s^2] (23.81 turns/s in 1 s).
    pub const FAST_ACCELERATION: f64 = 2381.0;
    /// Deceleration of the fast rotation profile [steps/s^2].
    pub const FAST_DECELERATION: f64 = -2381.0;
    /// Velocity ceiling of the fast rotation profile [steps/s].
    pub const FAST_MAX_VELOCITY: f64 = 2125.0;

    /// Checked constructor.
    pub fn new(acceleration: f64, deceleration: f64, max_velocity: f64) -> Result<Self, LimitsError> {
        if !(acceleration.is_finite() && deceleration.is_finite() && max_velocity.is_finite()) {
            return Err(LimitsError::NotFinite);
        }
        if acceleration <= 0.0 {
            return Err(LimitsError::NonPositiveAcceleration(acceleration));
        }
        if deceleration >= 0.0 {
            return Err(LimitsError::NonNegativeDeceleration(deceleration));
        }
        if max_velocity <= 0.0 {
            return Err(LimitsError::NonPositiveVelocity(max_velocity));
        }
        Ok(Self {
            acceleration,
            deceleration,
            max_velocity,
        })
    }

    /// Limits used by the fast rotation movement.
    pub const fn fast_rotation() -> Self {
        Self {
            acceleration: Self::FAST_ACCELERATION,
            deceleration: Self::FAST_DECELERATION,
            max_velocity: Self::FAST_MAX_VELOCITY,
        }
    }

    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    pub fn deceleration(&self) -> f64 {
        self.deceleration
    }

    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    /// Profile for a move of `steps` steps under these limits.
    pub fn plan(&self, steps: u32) -> MotionProfile {
        compute_profile(steps, self.acceleration, self.deceleration, self.max_velocity)
    }

    /// Splits a move of `steps` steps into `[ramp_up, cruise, ramp_down]`.
    ///
    /// Segment distances follow the continuous kinematics rather than the
    /// truncated step counts, so the three segments add up to `steps`.
    pub fn segments(&self, steps: u32) -> [MotionSegment; 3] {
        let profile = self.plan(steps);
        if steps == 0 {
            return [MotionSegment::default(); 3];
        }

        // Speed actually reached: the ceiling for a capped profile
        let cruise_vel = self.acceleration * profile.accel_time;

        let accel_dist = self.acceleration * profile.accel_time * profile.accel_time * 0.5;
        let decel_dist = -self.deceleration * profile.decel_time * profile.decel_time * 0.5;
        let cruise_dist = (f64::from(steps) - accel_dist - decel_dist).max(0.0);
        let cruise_time = if cruise_dist > 0.0 { cruise_dist / cruise_vel } else { 0.0 };

        let mut segments = [
            MotionSegment::new(profile.accel_time, accel_dist, 0.0, self.acceleration),
            MotionSegment::new(cruise_time, cruise_dist, cruise_vel, 0.0),
            MotionSegment::new(profile.decel_time, decel_dist, cruise_vel, self.deceleration),
        ];

        // Turn segment lengths into start positions
        let mut pos = 0.0;
        for segment in &mut segments {
            let ds = segment.pos;
            segment.pos = pos;
            pos += ds;
        }
        segments
    }
}
