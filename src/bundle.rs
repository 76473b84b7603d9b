use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use crate::constants::{CONFIG_FILENAME, CONTEXT_FILENAME, PROMPTS_DIR_NAME};
use crate::error::{Error, Result};
use crate::ioutils::write_file;

/// Bundle shipped with the tool, compiled into the binary. Paths are relative to
/// the bundle root.
const EMBEDDED_FILES: &[(&str, &str)] = &[
    ("context.md", include_str!("../templates/context.md")),
    ("mcp-config.yml", include_str!("../templates/mcp-config.yml")),
    ("prompts/controllers.md", include_str!("../templates/prompts/controllers.md")),
    ("prompts/models.md", include_str!("../templates/prompts/models.md")),
    ("prompts/rails_expert.md", include_str!("../templates/prompts/rails_expert.md")),
    ("prompts/testing.md", include_str!("../templates/prompts/testing.md")),
    ("prompts/views.md", include_str!("../templates/prompts/views.md")),
];

/// The read-only set of assets a generation run copies or renders.
///
/// The bundle only knows where its assets live; a missing asset surfaces when
/// the step that reads it runs.
#[derive(Debug, Clone)]
pub struct TemplateBundle {
    root: PathBuf,
    /// Extracted copy of the embedded bundle, removed when the last clone drops.
    _extracted: Option<Arc<TempDir>>,
}

impl TemplateBundle {
    /// Loads a bundle rooted at `root`.
    ///
    /// # Returns
    /// * `Result<TemplateBundle>` - Fails when `root` is not a directory
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: root.display().to_string(),
            });
        }
        log::debug!("Using template bundle at '{}'", root.display());
        Ok(Self { root: root.to_path_buf(), _extracted: None })
    }

    /// Loads the bundle shipped with the tool.
    ///
    /// The embedded files are extracted into a private temporary directory that
    /// lives as long as the returned bundle.
    pub fn bundled() -> Result<Self> {
        let dir = tempfile::Builder::new().prefix("mcp-on-rails-").tempdir()?;
        for (relative, content) in EMBEDDED_FILES {
            write_file(content, dir.path().join(relative))?;
        }
        log::debug!(
            "Extracted {} bundled file(s) to '{}'",
            EMBEDDED_FILES.len(),
            dir.path().display()
        );

        let mut bundle = Self::load(dir.path())?;
        bundle._extracted = Some(Arc::new(dir));
        Ok(bundle)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn prompts_dir(&self) -> PathBuf {
        self.root.join(PROMPTS_DIR_NAME)
    }

    pub fn config_template(&self) -> PathBuf {
        self.root.join(CONFIG_FILENAME)
    }

    pub fn context_file(&self) -> PathBuf {
        self.root.join(CONTEXT_FILENAME)
    }
}
