//! Fixed-timestep frame pacing.
//!
//! Each frame records its start, does its work, then waits out whatever is
//! left of the target period. A frame that overruns the period waits zero and
//! the next frame starts immediately; there is no catch-up or frame skipping.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::input::handle_key_event;
use crate::types::LoopControl;

/// Timing of the frame in flight and the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTiming {
    /// When the current frame began.
    pub frame_start: Instant,
    /// Draw + step time of the last completed frame.
    pub frame_delta: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct FrameScheduler {
    period: Duration,
    timing: Option<FrameTiming>,
}

impl FrameScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            timing: None,
        }
    }

    /// Target period per frame.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Measured duration of the last completed frame, if any.
    pub fn last_delta(&self) -> Option<Duration> {
        self.timing.and_then(|t| t.frame_delta)
    }

    /// Mark the start of a frame.
    pub fn begin_frame(&mut self, now: Instant) {
        let frame_delta = self.last_delta();
        self.timing = Some(FrameTiming {
            frame_start: now,
            frame_delta,
        });
    }

    /// Close the current frame at `now` and return how long to wait.
    pub fn finish_frame(&mut self, now: Instant) -> Duration {
        let Some(timing) = self.timing.as_mut() else {
            return Duration::ZERO;
        };
        let elapsed = now.saturating_duration_since(timing.frame_start);
        timing.frame_delta = Some(elapsed);
        self.remaining(elapsed)
    }

    /// `max(0, period - elapsed)`.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.period.saturating_sub(elapsed)
    }
}

/// Blocks between frames.
pub trait FrameWait {
    /// Wait for `duration`, reporting whether the loop should go on.
    fn wait(&mut self, duration: Duration) -> Result<LoopControl>;
}

/// Waits by polling terminal input so an interrupt key ends the wait early.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalWait;

impl FrameWait for TerminalWait {
    fn wait(&mut self, duration: Duration) -> Result<LoopControl> {
        let deadline = Instant::now() + duration;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                return Ok(LoopControl::Continue);
            }
            // Any other input is drained and the rest of the period is waited out.
            if let Event::Key(key) = event::read()? {
                if handle_key_event(key) == LoopControl::Interrupt {
                    return Ok(LoopControl::Interrupt);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(50);

    #[test]
    fn fast_frame_waits_the_remainder() {
        let mut sched = FrameScheduler::new(PERIOD);
        let start = Instant::now();
        sched.begin_frame(start);
        let wait = sched.finish_frame(start + Duration::from_millis(12));
        assert_eq!(wait, Duration::from_millis(38));
        assert_eq!(sched.last_delta(), Some(Duration::from_millis(12)));
    }

    #[test]
    fn slow_frame_waits_nothing() {
        let mut sched = FrameScheduler::new(PERIOD);
        let start = Instant::now();
        sched.begin_frame(start);
        assert_eq!(sched.finish_frame(start + PERIOD), Duration::ZERO);

        sched.begin_frame(start + PERIOD);
        assert_eq!(
            sched.finish_frame(start + PERIOD + Duration::from_millis(80)),
            Duration::ZERO
        );
        assert_eq!(sched.last_delta(), Some(Duration::from_millis(80)));
    }

    #[test]
    fn delta_carries_into_next_frame() {
        let mut sched = FrameScheduler::new(PERIOD);
        let start = Instant::now();
        assert_eq!(sched.last_delta(), None);

        sched.begin_frame(start);
        sched.finish_frame(start + Duration::from_millis(7));
        sched.begin_frame(start + PERIOD);
        // The previous frame's delta stays visible while the new frame runs.
        assert_eq!(sched.last_delta(), Some(Duration::from_millis(7)));
    }

    #[test]
    fn finish_without_begin_waits_nothing() {
        let mut sched = FrameScheduler::new(PERIOD);
        assert_eq!(sched.finish_frame(Instant::now()), Duration::ZERO);
    }
}
