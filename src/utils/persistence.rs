//! Paths under ~/.flappy/ for files the game writes.

use std::fs;
use std::io;
use std::path::PathBuf;

pub const LOG_FILE: &str = "flappy.log";

/// Get the ~/.flappy/ directory path, creating it if needed.
pub fn flappy_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".flappy");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default log location, ~/.flappy/flappy.log.
pub fn default_log_path() -> io::Result<PathBuf> {
    Ok(flappy_dir()?.join(LOG_FILE))
}
