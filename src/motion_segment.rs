use serde::{Deserialize, Serialize};

/// One constant-acceleration piece of a linear profile.
#[derive(Default, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionSegment {
    /// Duration [s].
    pub time: f64,
    /// Start position [steps].
    pub pos: f64,
    /// Start velocity [steps/s].
    pub vel: f64,
    /// Constant acceleration [steps/s^2].
    pub acc: f64,
}

impl MotionSegment {
    pub fn new(time: f64, pos: f64, vel: f64, acc: f64) -> Self {
        Self {
            time,
            pos,
            vel,
            acc,
        }
    }

    /// State `t` seconds into the segment, as a segment starting there.
    pub fn at(&self, t: f64) -> Self {
        // pos(t) = s0 + v0*t + a*t^2/2
        let vel = self.vel + self.acc * t;
        let pos = self.pos + (self.vel + vel) * 0.5 * t;
        Self {
            time: t,
            pos,
            vel,
            acc: self.acc,
        }
    }

    /// Position at the end of the segment.
    pub fn end_pos(&self) -> f64 {
        self.at(self.time).pos
    }

    /// Velocity at the end of the segment.
    pub fn end_vel(&self) -> f64 {
        self.vel + self.acc * self.time
    }
}
