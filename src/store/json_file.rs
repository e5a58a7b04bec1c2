use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use super::{Result, StoreBackend};

const STORE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// File-backed store: one `<collection>.json` per collection under a base
/// directory. Writes go through a temp file and rename so a crash mid-write
/// leaves the previous payload intact.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: Option<PathBuf>) -> Result<Self> {
        let dir = dir.unwrap_or_else(default_dir);
        ensure_dir(&dir)?;
        Ok(Self { dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.dir
    }

    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", canonical_name(collection), STORE_EXTENSION))
    }
}

impl StoreBackend for JsonFileStore {
    fn read(&self, collection: &str) -> Option<String> {
        fs::read_to_string(self.collection_path(collection)).ok()
    }

    fn write(&self, collection: &str, payload: &str) -> Result<()> {
        let path = self.collection_path(collection);
        let tmp = tmp_path(&path);
        write_file(&tmp, payload)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, collection: &str) -> Result<()> {
        let path = self.collection_path(collection);
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Folds the modification times and sizes of every collection file into a
    /// counter, so writes from other processes register as revision changes.
    fn revision(&self) -> u64 {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return 0;
        };
        let mut acc: u64 = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(STORE_EXTENSION) {
                continue;
            }
            let Ok(meta) = entry.metadata() else {
                continue;
            };
            let stamp = meta
                .modified()
                .ok()
                .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or(0);
            acc = acc.wrapping_add(stamp).wrapping_add(meta.len());
        }
        acc
    }
}

fn default_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("finance_core")
}

fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "collection".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
