use crate::config;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Create a directory (and all parents) if it doesn't exist, and return the path.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    let p = path.as_ref();
    fs::create_dir_all(p)?;
    Ok(p.to_path_buf())
}

/// Global storage root (absolute), from `config::storage_root()`.
/// If relative in env, resolve against current_dir().
pub fn storage_root() -> PathBuf {
    let root = config::storage_root();
    let p = PathBuf::from(root);
    if p.is_absolute() {
        p
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(p)
    }
}

/// A single form folder: {STORAGE_ROOT}/form_{form_id}
pub fn form_dir(form_id: i64) -> PathBuf {
    storage_root().join(format!("form_{form_id}"))
}

/// Path to the published snapshot of a form: .../form_{form_id}/form.json
pub fn published_form_path(form_id: i64) -> PathBuf {
    form_dir(form_id).join("form.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn published_form_path_layout() {
        config::set_storage_root("/srv/forms");
        assert_eq!(
            published_form_path(7),
            PathBuf::from("/srv/forms/form_7/form.json")
        );
        config::set_storage_root("data");
    }

    #[test]
    #[serial]
    fn relative_root_resolves_against_cwd() {
        config::set_storage_root("data");
        let p = storage_root();
        assert!(p.is_absolute());
        assert!(p.ends_with("data"));
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b").join("c");
        let created = ensure_dir(&nested).unwrap();
        assert_eq!(created, nested);
        assert!(nested.is_dir());
        // idempotent on an existing directory
        ensure_dir(&nested).unwrap();
    }
}
