use crate::error::{Result, StoreError};
use std::env;
use std::path::{Path, PathBuf};

/// Directory override for the notebook home (replaces `~/.notebooklm`).
pub const HOME_ENV: &str = "NOTEBOOKLM_HOME";
/// Full path override for the storage file.
pub const STORAGE_ENV: &str = "NOTEBOOKLM_STORAGE";

pub const DEFAULT_DIR_NAME: &str = ".notebooklm";
pub const STORAGE_FILE_NAME: &str = "notes.json";

/// Resolve the storage file: `$NOTEBOOKLM_STORAGE`, then `$NOTEBOOKLM_HOME/notes.json`,
/// then `~/.notebooklm/notes.json`.
pub fn default_storage_path() -> Result<PathBuf> {
    resolve_storage_path(
        env_path(STORAGE_ENV),
        env_path(HOME_ENV),
        dirs::home_dir(),
    )
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn resolve_storage_path(
    storage: Option<PathBuf>,
    home_override: Option<PathBuf>,
    user_home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = storage {
        return Ok(path);
    }
    if let Some(dir) = home_override {
        return Ok(dir.join(STORAGE_FILE_NAME));
    }
    let home = user_home.ok_or(StoreError::HomeDirUnavailable)?;
    Ok(storage_path_in(&home.join(DEFAULT_DIR_NAME)))
}

#[must_use]
pub fn storage_path_in(dir: &Path) -> PathBuf {
    dir.join(STORAGE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_storage_wins() {
        let path = resolve_storage_path(
            Some(PathBuf::from("/tmp/mine.json")),
            Some(PathBuf::from("/srv/notes")),
            Some(PathBuf::from("/home/me")),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/mine.json"));
    }

    #[test]
    fn test_home_override_then_user_home() {
        let path =
            resolve_storage_path(None, Some(PathBuf::from("/srv/notes")), None).unwrap();
        assert_eq!(path, PathBuf::from("/srv/notes/notes.json"));

        let path = resolve_storage_path(None, None, Some(PathBuf::from("/home/me"))).unwrap();
        assert_eq!(path, PathBuf::from("/home/me/.notebooklm/notes.json"));
    }

    #[test]
    fn test_no_home_is_an_error() {
        assert!(matches!(
            resolve_storage_path(None, None, None),
            Err(StoreError::HomeDirUnavailable)
        ));
    }
}
