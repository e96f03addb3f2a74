/// Master volume at which every cue plays at its own default level.
pub const REFERENCE_VOLUME: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Hit,
    Miss,
    Win,
    GameOver,
    Hover,
}

impl Cue {
    pub fn default_volume(self) -> f32 {
        match self {
            Cue::Hover => 0.2,
            _ => 0.5,
        }
    }

    /// Volume for this cue under the configured master volume.
    pub fn volume_at(self, master: f32) -> f32 {
        (self.default_volume() * master / REFERENCE_VOLUME).clamp(0.0, 1.0)
    }

    /// Tone sequence as (frequency Hz, duration ms) pairs.
    pub fn tones(self) -> &'static [(f32, u64)] {
        match self {
            Cue::Hit => &[(880.0, 70)],
            Cue::Miss => &[(196.0, 160)],
            Cue::Win => &[(523.25, 90), (659.25, 90), (783.99, 160)],
            Cue::GameOver => &[(392.0, 180), (311.13, 180), (196.0, 320)],
            Cue::Hover => &[(1318.5, 25)],
        }
    }
}

/// Fire-and-forget sound output. Implementations swallow their own failures.
pub trait SoundPlayer {
    fn play(&self, cue: Cue, volume: f32);
}

pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&self, _cue: Cue, _volume: f32) {}
}

#[cfg(feature = "sound")]
pub use tone::TonePlayer;

#[cfg(feature = "sound")]
mod tone {
    use std::time::Duration;

    use rodio::source::{SineWave, Source};
    use rodio::{OutputStream, OutputStreamHandle, Sink};

    use super::{Cue, SoundPlayer};

    /// Synthesized sine beeps on the default output device.
    pub struct TonePlayer {
        // Dropping the stream stops all playback.
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl TonePlayer {
        pub fn try_new() -> Option<Self> {
            match OutputStream::try_default() {
                Ok((stream, handle)) => Some(Self {
                    _stream: stream,
                    handle,
                }),
                Err(e) => {
                    tracing::warn!(error = %e, "no audio output device");
                    None
                }
            }
        }
    }

    impl SoundPlayer for TonePlayer {
        fn play(&self, cue: Cue, volume: f32) {
            let sink = match Sink::try_new(&self.handle) {
                Ok(sink) => sink,
                Err(e) => {
                    tracing::warn!(error = %e, ?cue, "audio sink unavailable");
                    return;
                }
            };
            for &(freq, ms) in cue.tones() {
                sink.append(
                    SineWave::new(freq)
                        .take_duration(Duration::from_millis(ms))
                        .amplify(volume),
                );
            }
            sink.detach();
        }
    }
}

/// Best available player: tones when built with `sound` and a device exists,
/// silence otherwise.
pub fn default_player(enabled: bool) -> Box<dyn SoundPlayer> {
    if !enabled {
        return Box::new(Silent);
    }
    #[cfg(feature = "sound")]
    if let Some(player) = TonePlayer::try_new() {
        return Box::new(player);
    }
    Box::new(Silent)
}
