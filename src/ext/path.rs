use std::path::{Component, Path, PathBuf};

use crate::error::Result;

/// Extension trait for Path used when resolving project locations
pub trait PathExt {
    /// Resolves the path against the current directory and removes `.` and `..`
    /// components lexically.
    ///
    /// Symlinks are not followed and the path does not need to exist.
    ///
    /// # Examples
    /// ```
    /// use mcp_on_rails::ext::PathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// let path = Path::new("/srv/apps/./shop/../blog");
    /// assert_eq!(path.absolutize().unwrap(), PathBuf::from("/srv/apps/blog"));
    /// ```
    fn absolutize(&self) -> Result<PathBuf>;

    /// Returns the last component of the path, or the whole path when it has
    /// none (the filesystem root).
    ///
    /// # Examples
    /// ```
    /// use mcp_on_rails::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert_eq!(Path::new("/tmp/myapp").base_name(), "myapp");
    /// assert_eq!(Path::new("/").base_name(), "/");
    /// ```
    fn base_name(&self) -> String;
}

impl PathExt for Path {
    fn absolutize(&self) -> Result<PathBuf> {
        let joined = if self.is_absolute() {
            self.to_path_buf()
        } else {
            std::env::current_dir()?.join(self)
        };

        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other.as_os_str()),
            }
        }
        Ok(normalized)
    }

    fn base_name(&self) -> String {
        self.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.display().to_string())
    }
}
