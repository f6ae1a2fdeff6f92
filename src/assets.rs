/// Startup assets. The background art is required; the game refuses to
/// start without it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GameError;

pub const BACKGROUND_FILE: &str = "background.txt";

/// Text art tiled behind the playfield.
#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    pub rows: Vec<String>,
}

impl Background {
    pub fn from_text(text: &str) -> Option<Self> {
        let rows: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
        if rows.iter().all(|r| r.is_empty()) {
            None
        } else {
            Some(Background { rows })
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Clone, Debug)]
pub struct Assets {
    pub background: Background,
}

pub fn background_path(dir: &Path) -> PathBuf {
    dir.join(BACKGROUND_FILE)
}

pub fn load_assets(dir: &Path) -> Result<Assets, GameError> {
    let path = background_path(dir);
    let text = fs::read_to_string(&path).map_err(|source| GameError::AssetMissing {
        path: path.clone(),
        source,
    })?;
    let background = Background::from_text(&text).ok_or(GameError::AssetEmpty { path })?;
    tracing::info!(rows = background.height(), "loaded background");
    Ok(Assets { background })
}
