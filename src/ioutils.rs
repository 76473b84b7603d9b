use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating parent directories if needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Copies a file byte-for-byte, creating parent directories if needed.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P, dest_path: Q) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path.as_ref(), dest_path).map(|_| ()).map_err(Error::IoError)
}

/// Applies unix permission bits to `path`.
#[cfg(unix)]
pub fn set_mode<P: AsRef<Path>>(path: P, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path.as_ref(), std::fs::Permissions::from_mode(mode))
        .map_err(Error::IoError)
}

/// Permission bits are a unix concept; elsewhere the file is left as written.
#[cfg(not(unix))]
pub fn set_mode<P: AsRef<Path>>(path: P, mode: u32) -> Result<()> {
    log::debug!(
        "Skipping mode {mode:o} on '{}': not supported on this platform",
        path.as_ref().display()
    );
    Ok(())
}
