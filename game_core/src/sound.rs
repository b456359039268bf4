//! Procedural sound effects
//!
//! Every effect is a short hard square wave at a fixed pitch, rendered as
//! mono 16-bit little-endian PCM. The front-end only has to play the bytes.

use std::f64::consts::PI;

use crate::{Events, Params};

/// Which game event a sound belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKind {
    Wall,
    Paddle,
    Serve,
    Out,
}

impl SoundKind {
    pub fn frequency(self) -> f64 {
        match self {
            SoundKind::Wall => 600.0,
            SoundKind::Paddle => 1000.0,
            SoundKind::Serve => 500.0,
            SoundKind::Out => 250.0,
        }
    }

    /// Sounds produced by one tick, in the order they happened
    pub fn for_events(events: &Events) -> Vec<SoundKind> {
        let mut sounds = Vec::new();
        if events.ball_served {
            sounds.push(SoundKind::Serve);
        }
        if events.ball_hit_wall {
            sounds.push(SoundKind::Wall);
        }
        if events.scored.is_some() {
            sounds.push(SoundKind::Out);
        }
        if events.ball_hit_paddle {
            sounds.push(SoundKind::Paddle);
        }
        sounds
    }
}

/// Number of samples in one effect
pub fn sample_count(sample_rate: u32) -> usize {
    (sample_rate as f64 * Params::SOUND_DURATION) as usize
}

/// Render the effect for `kind` as 16-bit little-endian mono PCM
pub fn synthesize(kind: SoundKind, sample_rate: u32) -> Vec<u8> {
    let freq = kind.frequency();
    let rate = sample_rate as f64;
    let n = sample_count(sample_rate);
    let mut buf = Vec::with_capacity(n * 2);

    for i in 0..n {
        let t = (2.0 * PI * freq * i as f64 / rate).sin();
        let v = if t >= 0.0 { 1.0 } else { -1.0 };
        let s = (v * Params::SOUND_VOLUME * i16::MAX as f64) as i16;
        buf.extend_from_slice(&s.to_le_bytes());
    }

    buf
}
