//! Fire-and-forget sound cues.

use crate::assets::SoundBank;
use crate::game::GameEvent;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::io::Cursor;

/// The four named cues the game triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Flap,
    Score,
    Hit,
    Die,
}

impl AudioCue {
    pub const ALL: [AudioCue; 4] = [Self::Flap, Self::Score, Self::Hit, Self::Die];

    /// Sound file backing the cue. Death reuses the hit sound.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Flap => "flapping.wav",
            Self::Score => "point.wav",
            Self::Hit | Self::Die => "hit.wav",
        }
    }
}

impl From<GameEvent> for AudioCue {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Flap => Self::Flap,
            GameEvent::Score => Self::Score,
            GameEvent::Hit => Self::Hit,
            GameEvent::Die => Self::Die,
        }
    }
}

/// Plays cues without blocking or reporting back.
pub trait CuePlayer {
    fn play(&self, cue: AudioCue);
}

/// Used when muted or when no output device is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCuePlayer;

impl CuePlayer for SilentCuePlayer {
    fn play(&self, _cue: AudioCue) {}
}

/// Plays pre-loaded sounds on the default output device.
pub struct RodioCuePlayer {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sounds: SoundBank,
}

impl RodioCuePlayer {
    pub fn new(sounds: SoundBank) -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            sounds,
        })
    }
}

impl CuePlayer for RodioCuePlayer {
    fn play(&self, cue: AudioCue) {
        // Missing cues are tolerated silently.
        let Some(bytes) = self.sounds.get(cue) else {
            return;
        };
        let Ok(source) = Decoder::new(Cursor::new(bytes)) else {
            return;
        };
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.append(source);
            sink.detach();
        }
    }
}

/// Pick the best available player, degrading to silence.
pub fn open_player(sounds: SoundBank, mute: bool) -> Box<dyn CuePlayer> {
    if mute {
        log::info!("audio muted");
        return Box::new(SilentCuePlayer);
    }
    if sounds.is_empty() {
        log::warn!("no sound cues loaded; audio disabled");
        return Box::new(SilentCuePlayer);
    }
    match RodioCuePlayer::new(sounds) {
        Ok(player) => Box::new(player),
        Err(e) => {
            log::warn!("audio output unavailable ({}); continuing silently", e);
            Box::new(SilentCuePlayer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPlayer {
        played: RefCell<Vec<AudioCue>>,
    }

    impl CuePlayer for RecordingPlayer {
        fn play(&self, cue: AudioCue) {
            self.played.borrow_mut().push(cue);
        }
    }

    #[test]
    fn test_events_map_to_cues() {
        let player = RecordingPlayer::default();
        for event in [GameEvent::Flap, GameEvent::Score, GameEvent::Hit, GameEvent::Die] {
            player.play(event.into());
        }
        assert_eq!(*player.played.borrow(), AudioCue::ALL.to_vec());
    }

    #[test]
    fn test_die_reuses_hit_sound() {
        assert_eq!(AudioCue::Die.file_name(), AudioCue::Hit.file_name());
    }

    #[test]
    fn test_silent_player_accepts_everything() {
        let player = SilentCuePlayer;
        for cue in AudioCue::ALL {
            player.play(cue);
        }
    }

    #[test]
    fn test_open_player_muted_or_empty_is_silent() {
        // Neither path touches an output device.
        let _muted = open_player(SoundBank::default(), true);
        let _empty = open_player(SoundBank::default(), false);
    }
}
