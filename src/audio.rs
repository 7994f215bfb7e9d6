//! Audio system using SDL2_mixer
//!
//! One looping music track and four sound effects, all loaded from the media
//! directory at start-up.

use std::path::Path;

use sdl2::keyboard::Keycode;
use sdl2::mixer::{self, Channel, Chunk, Music};
use sdl2::{AudioSubsystem, Sdl};

use crate::error::{Error, Result};
use crate::settings::Settings;

/// Output sample rate (Hz)
const FREQUENCY: i32 = 44_100;
/// Samples per mixer chunk
const CHUNK_SIZE: i32 = 2048;
/// Mixing channels available for sound effects
const MIX_CHANNELS: i32 = 8;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    High,
    Medium,
    Low,
    Scratch,
}

impl SoundEffect {
    /// File name inside the media directory
    pub fn file_name(self) -> &'static str {
        match self {
            SoundEffect::High => "high.wav",
            SoundEffect::Medium => "medium.wav",
            SoundEffect::Low => "low.wav",
            SoundEffect::Scratch => "scratch.wav",
        }
    }
}

/// What a key press asks the audio system to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    Play(SoundEffect),
    ToggleMusic,
    HaltMusic,
}

impl AudioCommand {
    /// `1`-`4` play effects, `9` toggles music, `0` halts it
    pub fn from_keycode(key: Keycode) -> Option<Self> {
        match key {
            Keycode::Num1 => Some(AudioCommand::Play(SoundEffect::High)),
            Keycode::Num2 => Some(AudioCommand::Play(SoundEffect::Medium)),
            Keycode::Num3 => Some(AudioCommand::Play(SoundEffect::Low)),
            Keycode::Num4 => Some(AudioCommand::Play(SoundEffect::Scratch)),
            Keycode::Num9 => Some(AudioCommand::ToggleMusic),
            Keycode::Num0 => Some(AudioCommand::HaltMusic),
            _ => None,
        }
    }
}

/// Music transition chosen by the toggle key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicAction {
    /// Nothing playing: start looping
    Start,
    Resume,
    Pause,
}

impl MusicAction {
    pub fn decide(playing: bool, paused: bool) -> Self {
        if !playing {
            MusicAction::Start
        } else if paused {
            MusicAction::Resume
        } else {
            MusicAction::Pause
        }
    }
}

/// Open mixer device. Closed again on drop.
pub struct AudioSystem {
    _audio: AudioSubsystem,
}

impl AudioSystem {
    pub fn init(sdl: &Sdl) -> Result<Self> {
        let audio = sdl.audio().map_err(Error::Mixer)?;
        mixer::open_audio(FREQUENCY, mixer::DEFAULT_FORMAT, mixer::DEFAULT_CHANNELS, CHUNK_SIZE)
            .map_err(Error::Mixer)?;
        mixer::allocate_channels(MIX_CHANNELS);

        log::info!("Mixer open at {} Hz, {} channels", FREQUENCY, MIX_CHANNELS);
        Ok(Self { _audio: audio })
    }
}

impl Drop for AudioSystem {
    fn drop(&mut self) {
        mixer::close_audio();
    }
}

/// Loaded music and sound effects
pub struct SoundBank {
    music: Music<'static>,
    high: Chunk,
    medium: Chunk,
    low: Chunk,
    scratch: Chunk,
}

impl SoundBank {
    /// Load `beat.wav` and the four effects from the media directory
    pub fn load(settings: &Settings) -> Result<Self> {
        let music_path = settings.media("beat.wav");
        let music = Music::from_file(&music_path).map_err(|reason| Error::Music {
            path: music_path.clone(),
            reason,
        })?;

        let chunk = |effect: SoundEffect| load_chunk(&settings.media(effect.file_name()));
        Ok(Self {
            music,
            high: chunk(SoundEffect::High)?,
            medium: chunk(SoundEffect::Medium)?,
            low: chunk(SoundEffect::Low)?,
            scratch: chunk(SoundEffect::Scratch)?,
        })
    }

    fn chunk(&self, effect: SoundEffect) -> &Chunk {
        match effect {
            SoundEffect::High => &self.high,
            SoundEffect::Medium => &self.medium,
            SoundEffect::Low => &self.low,
            SoundEffect::Scratch => &self.scratch,
        }
    }

    /// Run a key command; playback problems are logged, not fatal
    pub fn apply(&self, command: AudioCommand) {
        match command {
            AudioCommand::Play(effect) => self.play(effect),
            AudioCommand::ToggleMusic => self.toggle_music(),
            AudioCommand::HaltMusic => {
                Music::halt();
                log::debug!("Music halted");
            }
        }
    }

    /// Play an effect once on the first free channel
    pub fn play(&self, effect: SoundEffect) {
        if let Err(e) = Channel::all().play(self.chunk(effect), 0) {
            log::warn!("Could not play {:?}: {}", effect, e);
        }
    }

    /// Start, pause or resume the music track
    pub fn toggle_music(&self) {
        match MusicAction::decide(Music::is_playing(), Music::is_paused()) {
            MusicAction::Start => {
                if let Err(e) = self.music.play(-1) {
                    log::warn!("Could not start music: {}", e);
                }
            }
            MusicAction::Resume => Music::resume(),
            MusicAction::Pause => Music::pause(),
        }
    }
}

fn load_chunk(path: &Path) -> Result<Chunk> {
    Chunk::from_file(path).map_err(|reason| Error::Chunk {
        path: path.to_path_buf(),
        reason,
    })
}
