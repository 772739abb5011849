use async_trait::async_trait;
use cardbox_core::errors::StorageError;
use cardbox_core::models::Card;
use cardbox_core::storage::CardStorage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::task;

pub mod adapted;
pub mod paths;

use adapted::JsonAdaptedCard;

const FILE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct FileImage {
    version: u32,
    updated_at: DateTime<Utc>,
    cards: Vec<JsonAdaptedCard>,
}

/// JSON-file persistence: one versioned image, written atomically through
/// a temp file, with a rotated set of timestamped backups alongside.
pub struct JsonStore {
    path: PathBuf,
    backups_dir: PathBuf,
    max_backups: usize,
}

impl JsonStore {
    pub fn open_default() -> Result<Self, StorageError> {
        let (file, backups) = paths::default_store_file();
        Self::open_with(file, backups, 10)
    }

    pub fn open_with(
        path: PathBuf,
        backups_dir: PathBuf,
        max_backups: usize,
    ) -> Result<Self, StorageError> {
        ensure_parent_dirs(&path)?;
        fs::create_dir_all(&backups_dir)?;
        Ok(Self {
            path,
            backups_dir,
            max_backups: max_backups.max(1),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CardStorage for JsonStore {
    async fn load_cards(&self) -> Result<Vec<Card>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let path = self.path.clone();
        task::spawn_blocking(move || read_image(&path))
            .await
            .map_err(join_error)?
    }

    async fn save_cards(&self, cards: &[Card]) -> Result<(), StorageError> {
        let image = FileImage {
            version: FILE_VERSION,
            updated_at: Utc::now(),
            cards: cards.iter().map(JsonAdaptedCard::from_model).collect(),
        };
        let path = self.path.clone();
        let backups = self.backups_dir.clone();
        let keep = self.max_backups;
        task::spawn_blocking(move || write_with_backup(&path, &backups, keep, &image))
            .await
            .map_err(join_error)?
    }
}

fn join_error(e: task::JoinError) -> StorageError {
    StorageError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

fn ensure_parent_dirs(path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn read_image(path: &Path) -> Result<Vec<Card>, StorageError> {
    let mut f = fs::File::open(path)?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    let image = serde_json::from_str::<FileImage>(&buf)?;
    image.cards.iter().map(JsonAdaptedCard::to_model).collect()
}

fn write_with_backup(
    path: &Path,
    backups_dir: &Path,
    max_backups: usize,
    image: &FileImage,
) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::create_dir_all(backups_dir)?;

    let json = serde_json::to_vec_pretty(image)?;
    let mut tmp = NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    let _ = fs::remove_file(path);
    tmp.persist(path).map_err(|e| StorageError::Io(e.error))?;

    // Backup rotation
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let backup_path = backups_dir.join(format!("cardbox-{ts}.json"));
    let mut btmp = NamedTempFile::new_in(backups_dir)?;
    btmp.write_all(&json)?;
    btmp.flush()?;
    let _ = fs::remove_file(&backup_path);
    btmp.persist(&backup_path).map_err(|e| StorageError::Io(e.error))?;

    rotate_backups(backups_dir, max_backups)?;

    Ok(())
}

fn rotate_backups(dir: &Path, keep: usize) -> Result<(), StorageError> {
    let mut entries: Vec<_> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    entries.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());
    if entries.len() > keep {
        for e in &entries[0..entries.len() - keep] {
            let _ = fs::remove_file(e.path());
        }
    }
    Ok(())
}
