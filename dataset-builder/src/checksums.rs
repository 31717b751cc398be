use crate::common::*;
use once_cell::sync::Lazy;

static CHECKSUM_DIRS: Lazy<Mutex<IndexSet<PathBuf>>> = Lazy::new(|| Mutex::new(IndexSet::new()));

/// Registers a directory of checksum files with the download-verification
/// subsystem.
///
/// Registration is process-wide, additive, and idempotent; registering the
/// same directory again is a no-op. There is no teardown.
pub fn add_checksums_dir(dir: impl Into<PathBuf>) {
    let dir = dir.into();
    let mut dirs = CHECKSUM_DIRS.lock().unwrap();
    if dirs.insert(dir.clone()) {
        debug!("registered checksum directory '{}'", dir.display());
    }
}

/// The registered checksum directories in registration order.
pub fn checksum_dirs() -> Vec<PathBuf> {
    CHECKSUM_DIRS.lock().unwrap().iter().cloned().collect()
}
