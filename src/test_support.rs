use crate::cli::Cli;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Single conflict with content on both sides of the block.
pub(crate) const SCENARIO_A: &str = "a\n<<<<<<< HEAD\nb\n=======\nc\n>>>>>>> branch\nd\n";

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Switches the process working directory for the lifetime of the guard.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; hold the lock even under #[serial].
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Parse a command line as if given after the binary name.
pub(crate) fn cli_from(args: &[&str]) -> Cli {
    let argv = std::iter::once("resolve-conflicts").chain(args.iter().copied());
    Cli::try_parse_from(argv).unwrap()
}

/// Clear write permission on `path`.
///
/// Returns false when the file is still writable afterwards (running as
/// root), in which case read-only behaviour cannot be observed.
pub(crate) fn make_read_only(path: &Path) -> bool {
    let mut permissions = std::fs::metadata(path).unwrap().permissions();
    permissions.set_readonly(true);
    std::fs::set_permissions(path, permissions).unwrap();

    std::fs::OpenOptions::new().write(true).open(path).is_err()
}
