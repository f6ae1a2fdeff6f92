use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GameError {
    AssetMissing { path: PathBuf, source: io::Error },
    AssetEmpty { path: PathBuf },
    SaveWrite { path: PathBuf, source: io::Error },
    SaveRead { path: PathBuf, source: io::Error },
    SaveFormat { path: PathBuf, detail: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetMissing { path, source } => {
                write!(f, "failed to load asset {}: {source}", path.display())
            }
            Self::AssetEmpty { path } => write!(f, "asset {} is empty", path.display()),
            Self::SaveWrite { path, source } => {
                write!(f, "failed to write save file {}: {source}", path.display())
            }
            Self::SaveRead { path, source } => {
                write!(f, "failed to read save file {}: {source}", path.display())
            }
            Self::SaveFormat { path, detail } => {
                write!(f, "malformed save file {}: {detail}", path.display())
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AssetMissing { source, .. }
            | Self::SaveWrite { source, .. }
            | Self::SaveRead { source, .. } => Some(source),
            _ => None,
        }
    }
}
