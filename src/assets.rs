//! Sprite and sound loading with placeholder fallbacks.
//!
//! A failed load is logged once and replaced for the rest of the run; it
//! never stops the game.

use crate::audio::AudioCue;
use crate::core::constants::{PLACEHOLDER_SPRITE_HEIGHT, PLAYER_SPRITE_WIDTH};
use image::imageops::FilterType;
use image::DynamicImage;
use ratatui::style::Color;
use rodio::Decoder;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const SPRITE_FILE: &str = "flappy.png";

const PLACEHOLDER_COLOR: Color = Color::Rgb(255, 255, 0);

#[derive(Debug)]
pub enum AssetError {
    Io(PathBuf, io::Error),
    Image(PathBuf, image::ImageError),
    Audio(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io(path, e) => write!(f, "failed to read {}: {}", path.display(), e),
            AssetError::Image(path, e) => write!(f, "failed to decode {}: {}", path.display(), e),
            AssetError::Audio(msg) => write!(f, "unusable sound: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io(_, e) => Some(e),
            AssetError::Image(_, e) => Some(e),
            AssetError::Audio(_) => None,
        }
    }
}

/// The player image, scaled to a fixed width. Transparent pixels are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Option<Color>>,
}

impl Sprite {
    /// Solid block used when the image cannot be loaded.
    pub fn placeholder() -> Self {
        let (width, height) = (PLAYER_SPRITE_WIDTH, PLACEHOLDER_SPRITE_HEIGHT);
        Self {
            width,
            height,
            pixels: vec![Some(PLACEHOLDER_COLOR); (width * height) as usize],
        }
    }

    /// Scale to the player width, keeping the aspect ratio.
    pub fn from_image(image: &DynamicImage) -> Self {
        let width = PLAYER_SPRITE_WIDTH;
        let aspect = f64::from(image.width().max(1)) / f64::from(image.height().max(1));
        let height = ((f64::from(width) / aspect) as u32).max(1);
        let scaled = image
            .resize_exact(width, height, FilterType::Nearest)
            .to_rgba8();

        let pixels = scaled
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                (a >= 128).then_some(Color::Rgb(r, g, b))
            })
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let image = image::open(path).map_err(|e| match e {
            image::ImageError::IoError(io) => AssetError::Io(path.to_path_buf(), io),
            other => AssetError::Image(path.to_path_buf(), other),
        })?;
        Ok(Self::from_image(&image))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size in logical units, as used for the player's bounds.
    pub fn size(&self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[(y * self.width + x) as usize]
    }
}

/// Raw sound files keyed by cue. Cues without a file are simply absent.
#[derive(Debug, Clone, Default)]
pub struct SoundBank {
    sounds: HashMap<AudioCue, Arc<[u8]>>,
}

impl SoundBank {
    pub fn insert(&mut self, cue: AudioCue, bytes: Arc<[u8]>) {
        self.sounds.insert(cue, bytes);
    }

    pub fn get(&self, cue: AudioCue) -> Option<Arc<[u8]>> {
        self.sounds.get(&cue).cloned()
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}

/// Read a sound file and make sure it decodes.
pub fn load_sound(path: &Path) -> Result<Arc<[u8]>, AssetError> {
    let bytes: Arc<[u8]> = fs::read(path)
        .map_err(|e| AssetError::Io(path.to_path_buf(), e))?
        .into();
    Decoder::new(Cursor::new(bytes.clone()))
        .map_err(|e| AssetError::Audio(format!("{}: {}", path.display(), e)))?;
    Ok(bytes)
}

/// Everything loaded from the assets directory.
#[derive(Debug, Clone)]
pub struct Assets {
    pub sprite: Sprite,
    pub sounds: SoundBank,
}

impl Assets {
    /// Load from `dir`, substituting placeholders for anything missing or broken.
    pub fn load(dir: &Path) -> Self {
        let sprite = match Sprite::load(&dir.join(SPRITE_FILE)) {
            Ok(sprite) => {
                log::info!("loaded sprite {}x{}", sprite.width(), sprite.height());
                sprite
            }
            Err(e) => {
                log::warn!("asset warning: {}; using placeholder sprite", e);
                Sprite::placeholder()
            }
        };

        let mut sounds = SoundBank::default();
        let mut cache: HashMap<&'static str, Option<Arc<[u8]>>> = HashMap::new();
        for cue in AudioCue::ALL {
            let file = cue.file_name();
            let entry = cache.entry(file).or_insert_with(|| {
                load_sound(&dir.join(file))
                    .map_err(|e| log::warn!("asset warning: {}; cue will be silent", e))
                    .ok()
            });
            if let Some(bytes) = entry {
                sounds.insert(cue, bytes.clone());
            }
        }
        log::info!("loaded {} of {} sound cues", sounds.len(), AudioCue::ALL.len());

        Self { sprite, sounds }
    }
}
