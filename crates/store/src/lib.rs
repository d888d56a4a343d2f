//! Local note storage for notebooklm.
//!
//! Notes live in a single pretty-printed JSON file (`{"notes": [...]}`) that is read in
//! full and rewritten in full on every change.

mod error;
mod note;
mod paths;
mod storage;

pub use error::{Result, StoreError};
pub use note::{Note, Notebook};
pub use paths::{
    default_storage_path, storage_path_in, DEFAULT_DIR_NAME, HOME_ENV, STORAGE_ENV,
    STORAGE_FILE_NAME,
};
pub use storage::JsonStorage;
