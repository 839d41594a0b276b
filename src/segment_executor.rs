use crate::motion_segment::MotionSegment;
use crate::segment_queue::SegmentQueue;

/// Samples queued motion segments at a fixed tick frequency.
pub struct SegmentExecutor<const N: usize> {
    /// Segments waiting to run
    queue: SegmentQueue<MotionSegment, N>,

    /// The segment being executed
    active: MotionSegment,

    /// Instantaneous state
    inst: MotionSegment,

    /// Tick frequency in Hz
    freq: f64,

    /// Tick frequency the active segment was loaded with
    active_freq: f64,

    /// Ticks elapsed in the active segment
    ticks: u32,

    /// Length of the active segment in ticks
    duration: u32,
}

impl<const N: usize> SegmentExecutor<N> {
    /// Creates an idle executor ticking at `freq` Hz.
    pub fn new(freq: u32) -> Self {
        Self {
            queue: SegmentQueue::default(),
            active: MotionSegment::default(),
            inst: MotionSegment::default(),
            freq: f64::from(freq),
            active_freq: f64::from(freq),
            ticks: 0,
            duration: 0,
        }
    }

    /// Queues a segment. Returns `false` if the oldest queued segment was dropped.
    pub fn add_segment(&mut self, segment: MotionSegment) -> bool {
        let kept = self.queue.push(segment);
        if !kept {
            log::warn!("segment queue full, oldest segment dropped");
        }
        kept
    }

    /// Activates the next segment with a non-zero duration.
    fn load_next(&mut self) -> bool {
        while let Some(segment) = self.queue.pop() {
            if segment.time > 0.0 {
                log::trace!("loading segment {segment:?}");
                self.active = segment;
                self.inst = segment.at(0.0);
                self.active_freq = self.freq;
                self.duration = (segment.time * self.active_freq).ceil() as u32;
                self.ticks = 0;
                return true;
            }
        }
        false
    }

    /// Advances by one tick.
    pub fn tick(&mut self) {
        if self.ticks >= self.duration && !self.load_next() {
            // Nothing left: hold the last state
            return;
        }
        self.ticks += 1;
        let t = if self.ticks >= self.duration {
            self.active.time
        } else {
            (f64::from(self.ticks) / self.active_freq).min(self.active.time)
        };
        self.inst = self.active.at(t);
    }

    /// Sets a new tick frequency in Hz. Applies from the next segment.
    pub fn set_freq(&mut self, freq: u32) {
        self.freq = f64::from(freq);
    }

    pub fn acc(&self) -> f64 {
        self.inst.acc
    }

    pub fn vel(&self) -> f64 {
        self.inst.vel
    }

    pub fn pos(&self) -> f64 {
        self.inst.pos
    }

    /// True once the active segment has finished and nothing is queued.
    pub fn is_idle(&self) -> bool {
        self.ticks >= self.duration && self.queue.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.queue.is_full()
    }

    /// Number of segments waiting behind the active one.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_executor_holds_zero() {
        let mut executor = SegmentExecutor::<4>::new(100);
        assert!(executor.is_idle());
        executor.tick();
        assert_eq!(executor.pos(), 0.0);
        assert_eq!(executor.vel(), 0.0);
    }

    #[test]
    fn segment_ends_exactly_on_its_duration() {
        let mut executor = SegmentExecutor::<4>::new(10);
        executor.add_segment(MotionSegment::new(0.25, 0.0, 0.0, 8.0));

        // ceil(0.25 * 10) = 3 ticks
        for _ in 0..3 {
            executor.tick();
        }
        assert!(executor.is_idle());
        assert_eq!(executor.vel(), 2.0);
        assert_eq!(executor.pos(), 0.25);

        executor.tick();
        assert_eq!(executor.pos(), 0.25);
    }

    #[test]
    fn frequency_change_waits_for_next_segment() {
        let mut executor = SegmentExecutor::<4>::new(10);
        executor.add_segment(MotionSegment::new(1.0, 0.0, 1.0, 0.0));
        executor.add_segment(MotionSegment::new(2.0, 1.0, 1.0, 0.0));

        executor.tick();
        executor.tick();
        executor.set_freq(1);

        // First segment still runs at 10 Hz: 8 more ticks, never past its end
        for _ in 0..8 {
            executor.tick();
            assert!(executor.pos() <= 1.0);
        }
        assert_eq!(executor.pos(), 1.0);
        assert_eq!(executor.queued(), 1);

        // Second segment picks up the new rate: 2 ticks of 1 s
        executor.tick();
        assert_eq!(executor.pos(), 2.0);
        executor.tick();
        assert_eq!(executor.pos(), 3.0);
        assert!(executor.is_idle());
    }

    #[test]
    fn zero_length_segments_are_skipped() {
        let mut executor = SegmentExecutor::<4>::new(1);
        executor.add_segment(MotionSegment::new(0.0, 100.0, 0.0, 0.0));
        executor.add_segment(MotionSegment::new(2.0, 5.0, 1.0, 0.0));
        assert_eq!(executor.queued(), 2);
        executor.tick();
        assert_eq!(executor.queued(), 0);
        assert_eq!(executor.pos(), 6.0);
        executor.tick();
        assert_eq!(executor.pos(), 7.0);
        assert!(executor.is_idle());
    }
}
