//! On-disk home of the last-result slot.
//!
//! `last.json` is the commit point: it holds the document metadata, the
//! preview, and the name of the `last-*.docx` file with the bytes. A save
//! stages the bytes under a fresh name first, then swaps `last.json` in with
//! a rename, then removes stale `.docx` files. An interrupted save leaves the
//! previous pair intact.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use mtd_core::{GeneratedDocument, ResultSlot};
use serde::{Deserialize, Serialize};

const META_FILE: &str = "last.json";
const DOCX_PREFIX: &str = "last-";
const DOCX_SUFFIX: &str = ".docx";

#[derive(Serialize, Deserialize)]
struct SlotRecord {
    docx: String,
    #[serde(flatten)]
    document: GeneratedDocument,
}

pub struct SlotStore {
    dir: PathBuf,
}

impl SlotStore {
    /// `~/.cache/metodist` or the platform equivalent.
    pub fn default_location() -> anyhow::Result<Self> {
        let dir = dirs::cache_dir()
            .context("could not determine the user cache directory")?
            .join("metodist");
        Ok(Self::at(dir))
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read the persisted slot; a missing cache is an empty slot.
    pub fn load(&self) -> anyhow::Result<ResultSlot> {
        let mut slot = ResultSlot::new();
        let meta_path = self.dir.join(META_FILE);
        if !meta_path.exists() {
            return Ok(slot);
        }

        let meta = std::fs::read_to_string(&meta_path)
            .with_context(|| format!("failed to read {}", meta_path.display()))?;
        let record: SlotRecord = serde_json::from_str(&meta)
            .with_context(|| format!("corrupt last-result metadata at {}", meta_path.display()))?;
        let docx_path = self.dir.join(&record.docx);
        let mut document = record.document;
        document.bytes = std::fs::read(&docx_path)
            .with_context(|| format!("failed to read {}", docx_path.display()))?;

        slot.store(document);
        Ok(slot)
    }

    /// Persist `slot`, replacing whatever was cached before.
    pub fn save(&self, slot: &ResultSlot) -> anyhow::Result<()> {
        let Some(document) = slot.last() else {
            return self.clear();
        };

        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;

        let docx_path = self.stage_docx(&document.bytes)?;
        let docx = docx_path
            .file_name()
            .and_then(|name| name.to_str())
            .context("staged docx has no file name")?
            .to_string();
        let record = SlotRecord {
            docx: docx.clone(),
            document: document.clone(),
        };
        let committed = serde_json::to_string_pretty(&record)
            .map_err(anyhow::Error::from)
            .and_then(|meta| write_atomic(&self.dir, META_FILE, meta.as_bytes()));
        if let Err(e) = committed {
            let _ = std::fs::remove_file(&docx_path);
            return Err(e);
        }

        self.remove_docx_except(Some(&docx));
        tracing::debug!(dir = %self.dir.display(), file = %document.file_name, "stored last result");
        Ok(())
    }

    fn stage_docx(&self, bytes: &[u8]) -> anyhow::Result<PathBuf> {
        let mut tmp = tempfile::Builder::new()
            .prefix(DOCX_PREFIX)
            .suffix(DOCX_SUFFIX)
            .tempfile_in(&self.dir)
            .with_context(|| format!("failed to create temp file in {}", self.dir.display()))?;
        tmp.write_all(bytes)?;
        let (_, path) = tmp
            .keep()
            .map_err(|e| anyhow::anyhow!("failed to keep staged docx: {}", e.error))?;
        Ok(path)
    }

    /// Best-effort removal of slot `.docx` files other than `keep`.
    fn remove_docx_except(&self, keep: Option<&str>) {
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return;
        };
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !is_slot_docx(name) || keep == Some(name) {
                continue;
            }
            if let Err(e) = std::fs::remove_file(entry.path()) {
                tracing::warn!(file = name, error = %e, "failed to remove stale slot file");
            }
        }
    }

    fn clear(&self) -> anyhow::Result<()> {
        let path = self.dir.join(META_FILE);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
        }
        self.remove_docx_except(None);
        Ok(())
    }
}

fn is_slot_docx(name: &str) -> bool {
    name.starts_with(DOCX_PREFIX) && name.ends_with(DOCX_SUFFIX)
}

fn write_atomic(dir: &Path, name: &str, bytes: &[u8]) -> anyhow::Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(bytes)?;
    tmp.persist(dir.join(name))
        .map_err(|e| anyhow::anyhow!("failed to write {name}: {}", e.error))?;
    Ok(())
}
