//! Kani harnesses for the linear drive model.
//!
//! The displacement is bounded to one turn and the ramps use the fast
//! rotation limits, the only configuration the drive runs the linear model
//! with. The velocity ceiling is any positive value up to the fast one.
//!
//! ```bash
//! cargo kani --harness kani_linear_model_postconditions
//! ```

use crate::drive_model::compute_profile;
use crate::limits::DriveLimits;
use crate::rotation::{Displacement, MAX_DISPLACEMENT_MDEG};

#[kani::proof]
fn kani_linear_model_postconditions() {
    let millidegrees: u32 = kani::any();
    kani::assume(millidegrees < MAX_DISPLACEMENT_MDEG);
    let steps = match Displacement::from_millidegrees(millidegrees) {
        Ok(displacement) => displacement.steps(),
        Err(_) => return,
    };

    let max_velocity: f64 = kani::any();
    kani::assume(max_velocity > 0.0 && max_velocity <= DriveLimits::FAST_MAX_VELOCITY);

    let acceleration = DriveLimits::FAST_ACCELERATION;
    let deceleration = DriveLimits::FAST_DECELERATION;

    let profile = compute_profile(steps, acceleration, deceleration, max_velocity);

    kani::assert(profile.acceleration == acceleration as i32, "acceleration stored");
    kani::assert(profile.deceleration == deceleration as i32, "deceleration stored");

    if steps == 0 {
        kani::assert(profile.accel_time == 0.0, "no acceleration time");
        kani::assert(profile.decel_time == 0.0, "no deceleration time");
        kani::assert(profile.accel_steps == 0, "no acceleration steps");
        kani::assert(profile.decel_steps == 0, "no deceleration steps");
        kani::assert(profile.top_speed == 0.0, "no top speed");
    } else {
        let eps = 0.000_000_1;
        let max_accel_time = max_velocity / acceleration;
        let max_decel_time = max_velocity / -deceleration;
        let max_accel_steps = acceleration * (max_accel_time * max_accel_time) / 2.0;
        let max_decel_steps = -deceleration * (max_decel_time * max_decel_time) / 2.0;

        kani::assert(profile.accel_time > 0.0, "accelerates");
        kani::assert(profile.accel_time <= max_accel_time + eps, "acceleration time bounded by ceiling");
        kani::assert(profile.decel_time > 0.0, "decelerates");
        kani::assert(profile.decel_time <= max_decel_time + eps, "deceleration time bounded by ceiling");
        kani::assert(
            f64::from(profile.accel_steps) <= max_accel_steps + eps,
            "acceleration steps bounded by ceiling",
        );
        kani::assert(
            f64::from(profile.decel_steps) <= max_decel_steps + eps,
            "deceleration steps bounded by ceiling",
        );
        kani::assert(
            (profile.accel_time - profile.decel_time).abs() < eps,
            "symmetric ramp times",
        );
        kani::assert(profile.accel_steps == profile.decel_steps, "symmetric ramp steps");
        kani::assert(profile.ramp_steps() <= steps, "ramps fit the distance");
        kani::assert(profile.top_speed > 0.0, "moves");
    }
}

#[kani::proof]
fn kani_zero_steps_any_limits() {
    let acceleration: f64 = kani::any();
    let deceleration: f64 = kani::any();
    let max_velocity: f64 = kani::any();
    kani::assume(acceleration > 0.0 && acceleration < 1.0e6);
    kani::assume(deceleration < 0.0 && deceleration > -1.0e6);
    kani::assume(max_velocity > 0.0 && max_velocity < 1.0e6);

    let profile = compute_profile(0, acceleration, deceleration, max_velocity);

    kani::assert(profile.accel_steps == 0 && profile.decel_steps == 0, "no steps");
    kani::assert(profile.top_speed == 0.0, "no top speed");
}
