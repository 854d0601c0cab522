use flipdeck_core::{store::DeckStore, Card, CoreError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::warn;

pub mod paths;

/// One fixed JSON file holding the deck as a bare array of
/// `{"question", "answer"}` objects. No version field, no migration:
/// absence and corruption both read back as an empty deck.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn open_default() -> Result<Self, CoreError> {
        Self::open_at(paths::default_store_file())
    }

    pub fn open_at(path: PathBuf) -> Result<Self, CoreError> {
        ensure_parent_dirs(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DeckStore for JsonStore {
    fn load(&self) -> Vec<Card> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("could not read {}: {e}", self.path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Card>>(&raw) {
            Ok(cards) => cards,
            Err(e) => {
                warn!("ignoring malformed deck file {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    fn save(&self, deck: &[Card]) -> Result<(), CoreError> {
        write_atomic(&self.path, deck).map_err(|e| {
            warn!("could not save {}: {e}", self.path.display());
            CoreError::Storage("deck file write")
        })
    }
}

fn ensure_parent_dirs(path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|_| CoreError::Storage("create data dir"))?;
    }
    Ok(())
}

fn write_atomic(path: &Path, deck: &[Card]) -> Result<(), std::io::Error> {
    let json = serde_json::to_vec_pretty(&deck)?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    let _ = fs::remove_file(path);
    tmp.persist(path)?;
    Ok(())
}
