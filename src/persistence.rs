use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum PersistenceError {
    Io(std::io::Error),
    Serde(serde_yaml_ng::Error),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::Io(e) => write!(f, "IO error: {}", e),
            PersistenceError::Serde(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(e: std::io::Error) -> Self {
        PersistenceError::Io(e)
    }
}

impl From<serde_yaml_ng::Error> for PersistenceError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        PersistenceError::Serde(e)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreData {
    pub high_score: u32,
}

/// The save-file collaborator: seeds the high score at session start and
/// receives the updated one at session end. The engine only sees the
/// numbers, never the file.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A save file that does not exist yet reads as a zero high score.
    pub fn load(&self) -> Result<ScoreData, PersistenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_yaml_ng::from_str(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(ScoreData::default()),
            Err(err) => Err(PersistenceError::Io(err)),
        }
    }

    pub fn save(&self, data: &ScoreData) -> Result<(), PersistenceError> {
        let content = serde_yaml_ng::to_string(data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
