//! File picker: resolves a typed path into a file reference
//!
//! Only metadata is inspected; the file is never opened.

use crate::state::AttachedFile;
use directories::UserDirs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PickError {
    #[error("No such file: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),
}

/// Expand a leading `~` to the home directory
fn expand_home(input: &str) -> PathBuf {
    let home = || UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    if input == "~" {
        if let Some(home) = home() {
            return home;
        }
    } else if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = home() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

/// Resolve the picker input.
///
/// Blank input means "no file" and yields `Ok(None)`, which clears the
/// attachment.
pub fn pick(input: &str) -> Result<Option<AttachedFile>, PickError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let path = expand_home(input);
    check_file(&path)?;
    Ok(Some(AttachedFile::from_path(path)))
}

fn check_file(path: &Path) -> Result<(), PickError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(PickError::NotAFile(path.to_path_buf())),
        Err(_) => Err(PickError::NotFound(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_clears() {
        assert!(pick("").unwrap().is_none());
        assert!(pick("   ").unwrap().is_none());
    }

    #[test]
    fn test_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        let file = pick(&format!("  {}  ", path.display())).unwrap().unwrap();
        assert_eq!(file.name, "resume.pdf");
        assert_eq!(file.path, path);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = pick(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, PickError::NotFound(_)));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = pick(dir.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, PickError::NotAFile(_)));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        if let Some(dirs) = UserDirs::new() {
            assert_eq!(expand_home("~/x.txt"), dirs.home_dir().join("x.txt"));
            assert_eq!(expand_home("~"), dirs.home_dir().to_path_buf());
        }
    }
}
