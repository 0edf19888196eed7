use crate::domain::storage::Storage;
use crate::domain::{PublishedCity, RawCityFact, RefreshMetadata};
use crate::error::{CityError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Clone)]
pub struct FileSystemStore {
    source_path: PathBuf,
    output_path: PathBuf,
}

impl FileSystemStore {
    pub fn new(source_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// `data/cities.json` -> `data/cities.meta.json`
    pub fn metadata_path(&self) -> PathBuf {
        let stem = self
            .output_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cities".to_string());
        self.output_path.with_file_name(format!("{stem}.meta.json"))
    }

    fn ensure_parent(&self, path: &Path) -> Result<PathBuf> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !parent.exists() {
            fs::create_dir_all(&parent)?;
        }
        Ok(parent)
    }

    /// Serialises first, then writes through a temp file in the target
    /// directory and renames it over `path`. Readers see the old file or the
    /// new one, never a truncated one.
    fn write_json_file<T: serde::Serialize + ?Sized>(&self, path: &Path, data: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(data)?;
        let dir = self.ensure_parent(path)?;

        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        file.persist(path).map_err(|e| CityError::Io(e.error))?;

        debug!("Wrote {} bytes to {:?}", content.len(), path);
        Ok(())
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }
}

impl Storage for FileSystemStore {
    fn load_source_facts(&self) -> Result<Vec<RawCityFact>> {
        self.read_json_file(&self.source_path)?
            .ok_or_else(|| CityError::SourceNotFound(self.source_path.clone()))
    }

    fn load_published(&self) -> Result<Option<Vec<PublishedCity>>> {
        self.read_json_file(&self.output_path)
    }

    fn save_published(&self, cities: &[PublishedCity]) -> Result<()> {
        self.write_json_file(&self.output_path, cities)
    }

    fn save_metadata(&self, metadata: &RefreshMetadata) -> Result<()> {
        self.write_json_file(&self.metadata_path(), metadata)
    }
}
