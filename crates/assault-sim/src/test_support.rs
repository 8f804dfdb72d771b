//! Test doubles shared by the unit tests.

use glam::Vec2;
use rand::RngCore;

use crate::bullets::BulletSink;

/// RNG that replays a fixed script of `[0, 1)` draws, repeating the last one.
pub struct ScriptedRng {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: &[f32]) -> Self {
        assert!(!values.is_empty(), "script needs at least one value");
        Self {
            values: values.to_vec(),
            cursor: 0,
        }
    }

    /// Always yields `value`.
    pub fn constant(value: f32) -> Self {
        Self::new(&[value])
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.cursor.min(self.values.len() - 1)];
        self.cursor += 1;
        // `gen::<f32>()` keeps the top 24 bits and scales by 2^-24.
        let mantissa = (value.clamp(0.0, 0.999_999) * (1u32 << 24) as f32) as u32;
        mantissa << 8
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Bullet sink that records every alien shot.
#[derive(Default)]
pub struct RecordingSink {
    pub shots: Vec<(Vec2, Vec2)>,
}

impl BulletSink for RecordingSink {
    fn spawn_alien_bullet(&mut self, position: Vec2, velocity: Vec2) {
        self.shots.push((position, velocity));
    }
}
