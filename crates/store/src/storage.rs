use crate::error::{Result, StoreError};
use crate::note::{Note, Notebook};
use crate::paths::default_storage_path;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// JSON file backed note storage.
///
/// Every operation reads the whole file; every write replaces it.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at [`default_storage_path`].
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::new(default_storage_path()?))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the notebook; a missing file is an empty notebook.
    pub fn load(&self) -> Result<Notebook> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No notebook at {}, starting empty", self.path.display());
                return Ok(Notebook::default());
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };
        let notebook: Notebook =
            serde_json::from_slice(&bytes).map_err(|err| StoreError::json(&self.path, err))?;
        log::debug!(
            "Loaded {} notes from {}",
            notebook.len(),
            self.path.display()
        );
        Ok(notebook)
    }

    /// Replace the stored notebook.
    pub fn save(&self, notebook: &Notebook) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
        }
        let bytes =
            serde_json::to_vec_pretty(notebook).map_err(|err| StoreError::json(&self.path, err))?;
        let tmp = self.tmp_path();
        fs::write(&tmp, bytes).map_err(|err| StoreError::io(&tmp, err))?;
        fs::rename(&tmp, &self.path).map_err(|err| StoreError::io(&self.path, err))?;
        log::info!(
            "Saved {} notes to {}",
            notebook.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Sibling of the storage file with `.tmp` appended to its full name.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    pub fn add_note(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<Note> {
        let mut notebook = self.load()?;
        let note = Note::new(title, content, tags);
        notebook.add(note.clone());
        self.save(&notebook)?;
        Ok(note)
    }

    pub fn search(&self, query: &str) -> Result<Vec<Note>> {
        let notebook = self.load()?;
        Ok(notebook.search(query).into_iter().cloned().collect())
    }

    pub fn all_notes(&self) -> Result<Vec<Note>> {
        Ok(self.load()?.into_notes())
    }
}
