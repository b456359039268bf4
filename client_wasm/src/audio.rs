//! One-shot sound effect playback through Web Audio

use game_core::{synthesize, Params, SoundKind};

/// 16-bit little-endian PCM to the [-1, 1) floats Web Audio expects
pub fn pcm_to_f32(pcm: &[u8]) -> Vec<f32> {
    pcm.chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]) as f32 / 32768.0)
        .collect()
}

/// Pre-rendered effects, so a tick never synthesizes
#[derive(Debug, Clone)]
pub struct SoundBank {
    wall: Vec<f32>,
    paddle: Vec<f32>,
    serve: Vec<f32>,
    out: Vec<f32>,
}

impl SoundBank {
    pub fn new(sample_rate: u32) -> Self {
        let render = |kind| pcm_to_f32(&synthesize(kind, sample_rate));
        Self {
            wall: render(SoundKind::Wall),
            paddle: render(SoundKind::Paddle),
            serve: render(SoundKind::Serve),
            out: render(SoundKind::Out),
        }
    }

    pub fn samples(&self, kind: SoundKind) -> &[f32] {
        match kind {
            SoundKind::Wall => &self.wall,
            SoundKind::Paddle => &self.paddle,
            SoundKind::Serve => &self.serve,
            SoundKind::Out => &self.out,
        }
    }
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::new(Params::SAMPLE_RATE)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioOutput;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::SoundBank;
    use crate::error::ClientError;
    use game_core::{Params, SoundKind};
    use web_sys::AudioContext;

    fn audio_err(e: wasm_bindgen::JsValue) -> ClientError {
        ClientError::Audio(format!("{:?}", e))
    }

    pub struct AudioOutput {
        ctx: AudioContext,
        bank: SoundBank,
    }

    impl AudioOutput {
        pub fn new() -> Result<Self, ClientError> {
            let ctx = AudioContext::new().map_err(audio_err)?;
            Ok(Self {
                ctx,
                bank: SoundBank::new(Params::SAMPLE_RATE),
            })
        }

        /// Browsers keep the context suspended until a user gesture
        pub fn resume(&self) {
            if let Err(e) = self.ctx.resume() {
                log::warn!("Audio resume failed: {:?}", e);
            }
        }

        /// Fire and forget. Overlapping sounds each get their own source node.
        pub fn play(&self, kind: SoundKind) {
            if let Err(e) = self.try_play(kind) {
                log::warn!("Could not play {:?}: {}", kind, e);
            }
        }

        fn try_play(&self, kind: SoundKind) -> Result<(), ClientError> {
            let mut samples = self.bank.samples(kind).to_vec();
            let buffer = self
                .ctx
                .create_buffer(1, samples.len() as u32, Params::SAMPLE_RATE as f32)
                .map_err(audio_err)?;
            buffer
                .copy_to_channel(&mut samples, 0)
                .map_err(audio_err)?;

            let source = self.ctx.create_buffer_source().map_err(audio_err)?;
            source.set_buffer(Some(&buffer));
            source
                .connect_with_audio_node(&self.ctx.destination())
                .map_err(audio_err)?;
            source.start().map_err(audio_err)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcm_to_f32() {
        let pcm = [0x00, 0x00, 0xff, 0x7f, 0x00, 0x80];
        assert_eq!(pcm_to_f32(&pcm), vec![0.0, 32767.0 / 32768.0, -1.0]);
    }

    #[test]
    fn test_bank_holds_one_effect_per_kind() {
        let bank = SoundBank::default();
        for kind in [
            SoundKind::Wall,
            SoundKind::Paddle,
            SoundKind::Serve,
            SoundKind::Out,
        ] {
            let samples = bank.samples(kind);
            assert_eq!(samples.len(), 1764);
            assert!(samples.iter().all(|s| s.abs() <= 0.25));
        }
    }
}
