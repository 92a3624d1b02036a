use super::dto::Note;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Notes keyed by the video path, persisted as one JSON file.
pub struct NoteStore {
    path: PathBuf,
    notes: RwLock<BTreeMap<String, Note>>,
}

impl NoteStore {
    /// Opens the store at `path`. A missing file is an empty store; an
    /// unreadable one is logged and replaced on the next save.
    pub async fn load(path: PathBuf) -> Self {
        let notes = match Self::load_from_file(&path).await {
            Ok(notes) => {
                info!(path = %path.display(), count = notes.len(), "notes loaded");
                notes
            }
            Err(e) if is_not_found(&e) => {
                debug!(path = %path.display(), "no notes yet");
                BTreeMap::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "load failed, starting empty");
                BTreeMap::new()
            }
        };
        Self {
            path,
            notes: RwLock::new(notes),
        }
    }

    /// The note's content, or an empty string when there is none.
    pub async fn get(&self, video_path: &str) -> String {
        self.notes
            .read()
            .await
            .get(video_path)
            .map(|note| note.content.clone())
            .unwrap_or_default()
    }

    /// Inserts or replaces the note. Memory only changes once the file is written.
    pub async fn save(&self, video_path: String, content: String) -> Result<()> {
        let mut notes = self.notes.write().await;
        let mut updated = notes.clone();
        updated.insert(
            video_path,
            Note {
                content,
                updated_at: now_secs(),
            },
        );

        let data = serde_json::to_string_pretty(&updated)?;
        fs::write(&self.path, data)
            .await
            .with_context(|| format!("writing {}", self.path.display()))?;

        *notes = updated;
        Ok(())
    }

    async fn load_from_file(path: &Path) -> Result<BTreeMap<String, Note>> {
        let data = fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&data)?)
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .map(|e| e.kind() == io::ErrorKind::NotFound)
        .unwrap_or(false)
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
