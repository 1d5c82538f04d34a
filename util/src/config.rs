//! Runtime configuration for form storage.
//!
//! Values are loaded lazily from `.env` and environment variables into a
//! thread-safe singleton, with setters for overrides in tests or runtime
//! environments.

use std::env;
use std::sync::{OnceLock, RwLock};

/// Lazily-initialized, thread-safe storage root value.
static STORAGE_ROOT: OnceLock<RwLock<String>> = OnceLock::new();

fn load_storage_root() -> RwLock<String> {
    dotenvy::dotenv().ok();
    RwLock::new(env::var("FORM_STORAGE_ROOT").unwrap_or_else(|_| "data".into()))
}

/// Returns the configured storage root for published forms.
///
/// Read from `FORM_STORAGE_ROOT` on first access; defaults to `data`.
///
/// # Panics
/// Panics if the lock cannot be acquired.
pub fn storage_root() -> String {
    STORAGE_ROOT
        .get_or_init(load_storage_root)
        .read()
        .expect("Failed to acquire storage root read lock")
        .clone()
}

/// Override the storage root.
///
/// Useful in tests to point form storage at a temporary directory.
pub fn set_storage_root(value: impl Into<String>) {
    let lock = STORAGE_ROOT.get_or_init(load_storage_root);
    let mut guard = lock
        .write()
        .expect("Failed to acquire storage root write lock");
    *guard = value.into();
}
