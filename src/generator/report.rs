use std::path::{Path, PathBuf};

use crate::constants::{BIN_DIR_NAME, SETUP_SCRIPT_NAME};

/// What a finished generation run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub project_name: String,
    pub project_path: PathBuf,
    pub output_dir: PathBuf,
    pub script_path: PathBuf,
    /// Paths created or overwritten, in the order they were touched.
    pub created: Vec<PathBuf>,
    pub dry_run: bool,
}

impl GenerationReport {
    pub(crate) fn new(
        project_name: &str,
        project_path: &Path,
        output_dir: &Path,
        dry_run: bool,
    ) -> Self {
        Self {
            project_name: project_name.to_string(),
            project_path: project_path.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            script_path: project_path.join(BIN_DIR_NAME).join(SETUP_SCRIPT_NAME),
            created: Vec::new(),
            dry_run,
        }
    }

    /// Records a touched path, ignoring repeats.
    pub(crate) fn record(&mut self, path: &Path) {
        if !self.created.iter().any(|p| p == path) {
            self.created.push(path.to_path_buf());
        }
    }

    /// The confirmation lines shown once a run succeeds.
    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!("✅ MCP on Rails setup completed for '{}'", self.project_name),
            format!("📁 Files created in: {}", self.output_dir.display()),
            format!("🚀 Run: ./{BIN_DIR_NAME}/{SETUP_SCRIPT_NAME} to configure your project"),
        ]
    }
}
