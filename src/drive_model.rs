use serde::{Deserialize, Serialize};

/// Linear motion profile of a stepper drive: how long the motor ramps up,
/// how long it ramps down and how many steps each ramp consumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionProfile {
    /// Acceleration [steps/s^2], truncated to whole units.
    pub acceleration: i32,

    /// Deceleration [steps/s^2], truncated to whole units. Negative.
    pub deceleration: i32,

    /// Acceleration time in seconds.
    pub accel_time: f64,

    /// Deceleration time in seconds.
    pub decel_time: f64,

    /// Steps covered during acceleration.
    pub accel_steps: u32,

    /// Steps covered during deceleration.
    pub decel_steps: u32,

    /// Top speed [steps/s] of the unconstrained triangular profile.
    ///
    /// Not capped to the velocity ceiling: a value above the ceiling tells
    /// the caller the requested speed cannot be reached over this distance
    /// without a cruise phase.
    pub top_speed: f64,
}

impl MotionProfile {
    /// True when the velocity ceiling capped the ramps, leaving room for a
    /// constant-speed plateau.
    pub fn is_trapezoidal(&self, max_velocity: f64) -> bool {
        self.top_speed > max_velocity
    }

    /// True when the unconstrained peak speed stays within `max_velocity`.
    pub fn is_speed_feasible(&self, max_velocity: f64) -> bool {
        self.top_speed <= max_velocity
    }

    /// Steps consumed by both ramps together.
    pub fn ramp_steps(&self) -> u32 {
        self.accel_steps.saturating_add(self.decel_steps)
    }

    /// Steps left for the constant-speed plateau out of `steps`.
    pub fn cruise_steps(&self, steps: u32) -> u32 {
        steps.saturating_sub(self.ramp_steps())
    }
}

/// Calculates acceleration and deceleration times, top speed and the steps
/// covered by each ramp.
///
/// * `steps` - total number of steps to move (distance).
/// * `acceleration` - acceleration [steps/s^2], must be positive.
/// * `deceleration` - deceleration [steps/s^2], must be negative.
/// * `max_velocity` - maximum allowed speed [steps/s], must be positive.
///
/// The times are first computed without any velocity limit, as if the whole
/// distance was a triangular accelerate-then-decelerate move. If the peak
/// of that triangle is above `max_velocity` both ramps are shortened to end
/// exactly at `max_velocity`; the reported `top_speed` still carries the
/// uncapped peak.
///
/// The inputs are not validated. Use [`crate::DriveLimits`] for a checked
/// entry point.
pub fn compute_profile(
    steps: u32,
    acceleration: f64,
    deceleration: f64,
    max_velocity: f64,
) -> MotionProfile {
    let mut profile = MotionProfile {
        acceleration: acceleration as i32,
        deceleration: deceleration as i32,
        ..MotionProfile::default()
    };

    // No motion requested: keep sqrt and divisions out of it.
    if steps == 0 {
        return profile;
    }

    let distance = f64::from(steps);

    // Unconstrained ramps, to check whether max_velocity is reached at all
    let mut accel_time =
        ((-2.0 * deceleration * distance) / (acceleration * (acceleration - deceleration))).sqrt();
    // Ratio form keeps decel_time == accel_time bit-exact for symmetric ramps
    let mut decel_time = accel_time * (acceleration / -deceleration);

    let top_speed = accel_time * acceleration;

    if top_speed > max_velocity {
        // Cap acceleration and adjust deceleration
        accel_time = max_velocity / acceleration;
        decel_time = max_velocity / -deceleration;
        log::debug!(
            "top speed {top_speed:.3} steps/s over ceiling {max_velocity:.3}, ramps capped"
        );
    }

    profile.top_speed = top_speed;
    profile.accel_time = accel_time;
    profile.decel_time = decel_time;

    // s = a * t^2 / 2, truncated to whole steps
    profile.accel_steps = (acceleration * (accel_time * accel_time) / 2.0) as u32;
    profile.decel_steps = (-deceleration * (decel_time * decel_time) / 2.0) as u32;

    log::trace!("profile for {steps} steps: {profile:?}");
    profile
}
