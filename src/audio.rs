/// Sound cues raised by the simulation.
///
/// Playback is not part of the game: entities queue cues and the loop hands
/// them to a `SoundSink`, fire-and-forget.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    EngineStart,
    EngineStop,
    EngineCabin,
    Explosion,
}

pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);
}

/// Rings the terminal bell for explosions; everything else is logged.
#[derive(Debug, Default)]
pub struct BellSink {
    pending: bool,
}

impl BellSink {
    /// Returns true once per batch of explosion cues.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl SoundSink for BellSink {
    fn play(&mut self, cue: SoundCue) {
        tracing::debug!(?cue, "sound cue");
        if cue == SoundCue::Explosion {
            self.pending = true;
        }
    }
}
