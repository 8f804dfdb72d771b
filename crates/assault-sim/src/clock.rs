//! Fixed-timestep accumulator.
//!
//! The host reports how long each rendered frame took; the clock answers
//! how many whole simulation steps of `step` seconds to run. Frame times
//! are capped so a stall never triggers a catch-up spiral.

use assault_core::constants::{FIXED_DT, MAX_FRAME_TIME};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimestep {
    step: f32,
    max_frame: f32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(FIXED_DT, MAX_FRAME_TIME)
    }
}

impl FixedTimestep {
    pub fn new(step: f32, max_frame: f32) -> Self {
        Self {
            step,
            max_frame,
            accumulator: 0.0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Fraction of a step left over after the last `advance`, in `[0, 1)`.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    /// Feed one frame's elapsed time; returns the number of steps to run.
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        self.accumulator += frame_time.clamp(0.0, self.max_frame);
        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Feed one frame's elapsed time and call `update(step)` once per whole step.
    pub fn run(&mut self, frame_time: f32, mut update: impl FnMut(f32)) -> u32 {
        let steps = self.advance(frame_time);
        for _ in 0..steps {
            update(self.step);
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
