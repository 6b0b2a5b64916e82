//! In-place replacement of a file's contents.
//!
//! The existing file is opened for writing and truncated, so the directory
//! entry, inode, ownership and mode are untouched. Symlinks are followed and
//! the link target is rewritten; every hard link sees the new content. A file
//! the caller may not write fails with [`ResolveError::Write`].

use crate::error::{ResolveError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Overwrite the contents of the existing file at `path` with `content`.
///
/// The file must already exist; it is never created. No backup of the
/// previous contents is kept.
pub fn overwrite_in_place<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| ResolveError::write(path, e))?;

    file.write_all(content)
        .map_err(|e| ResolveError::write(path, e))?;
    file.sync_all().map_err(|e| ResolveError::write(path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::make_read_only;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_overwrite_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("script.js");
        fs::write(&file_path, "old();\nmore();\n").unwrap();

        overwrite_in_place(&file_path, b"new();\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new();\n");
    }

    #[test]
    fn test_overwrite_empty_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("index.html");
        fs::write(&file_path, "<<<<<<< HEAD\n=======\n>>>>>>> b\n").unwrap();

        overwrite_in_place(&file_path, b"").unwrap();

        assert!(fs::read(&file_path).unwrap().is_empty());
    }

    #[test]
    fn test_overwrite_touches_no_sibling_files() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("index.html");
        let sibling = temp_dir.path().join(".index.html.tmp");
        fs::write(&file_path, "old\n").unwrap();
        fs::write(&sibling, "user data\n").unwrap();

        overwrite_in_place(&file_path, b"new\n").unwrap();

        assert_eq!(fs::read_to_string(&sibling).unwrap(), "user data\n");
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_overwrite_missing_file_is_not_created() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("styles.css");

        let err = overwrite_in_place(&file_path, b"x").unwrap_err();

        assert!(matches!(err, ResolveError::Write { .. }));
        assert!(!file_path.exists());
    }

    #[test]
    fn test_overwrite_read_only_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("index.html");
        fs::write(&file_path, "locked\n").unwrap();
        if !make_read_only(&file_path) {
            // Privileged users can write regardless of mode.
            return;
        }

        let err = overwrite_in_place(&file_path, b"new\n").unwrap_err();

        assert!(matches!(err, ResolveError::Write { .. }));
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "locked\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("deploy.sh");
        fs::write(&file_path, "echo old\n").unwrap();
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o750)).unwrap();

        overwrite_in_place(&file_path, b"echo new\n").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o750);
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_through_symlink_rewrites_target() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real.html");
        let link = temp_dir.path().join("index.html");
        fs::write(&real, "old\n").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        overwrite_in_place(&link, b"new\n").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new\n");
    }

    #[test]
    fn test_overwrite_is_visible_through_hard_link() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("index.html");
        let other = temp_dir.path().join("copy.html");
        fs::write(&path, "old\n").unwrap();
        fs::hard_link(&path, &other).unwrap();

        overwrite_in_place(&path, b"new\n").unwrap();

        assert_eq!(fs::read_to_string(&other).unwrap(), "new\n");
    }
}
