//! The generation run
//!
//! This module turns a [`GenerationRequest`] into files on disk:
//! - `step`: the five steps, in order
//! - `operation`: filesystem actions planned by each step
//! - `script`: the `bin/mcp-setup` body
//! - `report`: the result handed back to callers
//!
//! Each step is planned and applied before the next one starts, so a failure
//! leaves the output of earlier steps on disk. Existing files are overwritten.

pub mod operation;
pub mod report;
pub mod script;
pub mod step;

pub use operation::GenerationOperation;
pub use report::GenerationReport;
pub use step::GenerationStep;

use std::path::{Path, PathBuf};

use serde_json::json;
use walkdir::WalkDir;

use crate::{
    bundle::TemplateBundle,
    constants::{
        BIN_DIR_NAME, CONFIG_FILENAME, CONTEXT_FILENAME, OUTPUT_DIR_NAME, PROJECT_NAME_KEY,
        PROMPTS_DIR_NAME, SETUP_SCRIPT_MODE, SETUP_SCRIPT_NAME,
    },
    error::Result,
    ext::PathExt,
    ioutils::{copy_file, create_dir_all, set_mode, write_file},
    renderer::TemplateRenderer,
};

/// Inputs of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Defaults to the base name of the resolved project path.
    pub project_name: Option<String>,
    pub project_path: PathBuf,
}

impl GenerationRequest {
    pub fn new<P: AsRef<Path>>(project_name: Option<String>, project_path: P) -> Self {
        Self { project_name, project_path: project_path.as_ref().to_path_buf() }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(None, ".")
    }
}

pub struct Generator<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,
    bundle: &'a TemplateBundle,

    /// Other
    project_name: String,
    project_path: PathBuf,
    dry_run: bool,
}

impl<'a> Generator<'a> {
    /// Resolves the request against the current directory.
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        bundle: &'a TemplateBundle,
        request: GenerationRequest,
    ) -> Result<Self> {
        let project_path = request.project_path.absolutize()?;
        let project_name = request.project_name.unwrap_or_else(|| project_path.base_name());
        Ok(Self { engine, bundle, project_name, project_path, dry_run: false })
    }

    /// Plan and log every operation without touching the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    pub fn output_dir(&self) -> PathBuf {
        self.project_path.join(OUTPUT_DIR_NAME)
    }

    /// Runs every step in order and stops at the first failure.
    pub fn generate(&self) -> Result<GenerationReport> {
        let mut report = GenerationReport::new(
            &self.project_name,
            &self.project_path,
            &self.output_dir(),
            self.dry_run,
        );

        for step in GenerationStep::ALL {
            log::debug!("Starting step: {step}");
            let operations = self.plan(step).map_err(|e| e.during(step))?;
            for operation in &operations {
                self.apply(operation).map_err(|e| e.during(step))?;
                log::info!("{}", operation.get_message(self.dry_run));
                report.record(operation.target_path());
            }
        }

        Ok(report)
    }

    /// Builds the operations for one step.
    pub(crate) fn plan(&self, step: GenerationStep) -> Result<Vec<GenerationOperation>> {
        let output_dir = self.output_dir();
        let operations = match step {
            GenerationStep::CreateOutputDirectory => vec![create_directory(output_dir)],
            GenerationStep::CopyPrompts => {
                self.plan_prompts(&self.bundle.prompts_dir(), &output_dir.join(PROMPTS_DIR_NAME))?
            }
            GenerationStep::RenderConfig => {
                let template_file = self.bundle.config_template();
                let template = std::fs::read_to_string(&template_file)?;
                let content = self.engine.render(
                    &template,
                    &json!({ PROJECT_NAME_KEY: self.project_name }),
                    Some(CONFIG_FILENAME),
                )?;
                vec![write(output_dir.join(CONFIG_FILENAME), content)]
            }
            GenerationStep::CopyContext => {
                vec![copy(self.bundle.context_file(), output_dir.join(CONTEXT_FILENAME))]
            }
            GenerationStep::CreateSetupScript => {
                let bin_dir = self.project_path.join(BIN_DIR_NAME);
                let script_path = bin_dir.join(SETUP_SCRIPT_NAME);
                let content = script::render_setup_script(self.engine, &self.project_name)?;
                vec![
                    create_directory(bin_dir),
                    write(script_path.clone(), content),
                    GenerationOperation::SetPermissions {
                        target: script_path,
                        mode: SETUP_SCRIPT_MODE,
                    },
                ]
            }
        };
        Ok(operations)
    }

    /// Mirrors the prompts tree: one operation per directory and file, parents first.
    ///
    /// Symlinks are followed, so a linked file or directory is copied as its
    /// target's content.
    fn plan_prompts(&self, source_root: &Path, target_root: &Path) -> Result<Vec<GenerationOperation>> {
        let mut operations = Vec::new();
        for dir_entry in WalkDir::new(source_root).follow_links(true).sort_by_file_name() {
            let dir_entry = dir_entry?;
            let source = dir_entry.path();
            let target = match source.strip_prefix(source_root) {
                Ok(relative) if relative.as_os_str().is_empty() => target_root.to_path_buf(),
                Ok(relative) => target_root.join(relative),
                Err(_) => target_root.join(dir_entry.file_name()),
            };

            if dir_entry.file_type().is_dir() {
                operations.push(create_directory(target));
            } else {
                operations.push(copy(source.to_path_buf(), target));
            }
        }
        log::debug!(
            "Planned {} prompt operation(s) from '{}'",
            operations.len(),
            source_root.display()
        );
        Ok(operations)
    }

    fn apply(&self, operation: &GenerationOperation) -> Result<()> {
        log::trace!("Handling operation: {operation:?}");
        if self.dry_run {
            return Ok(());
        }

        let result = match operation {
            GenerationOperation::CreateDirectory { target, .. } => create_dir_all(target),
            GenerationOperation::Copy { source, target, .. } => copy_file(source, target),
            GenerationOperation::Write { target, content, .. } => write_file(content, target),
            GenerationOperation::SetPermissions { target, mode } => set_mode(target, *mode),
        };
        if let Err(e) = &result {
            log::debug!("Failed to {}: {e}", operation.error_context());
        }
        result
    }
}

fn create_directory(target: PathBuf) -> GenerationOperation {
    let target_exists = target.is_dir();
    GenerationOperation::CreateDirectory { target, target_exists }
}

fn copy(source: PathBuf, target: PathBuf) -> GenerationOperation {
    let target_exists = target.exists();
    GenerationOperation::Copy { source, target, target_exists }
}

fn write(target: PathBuf, content: String) -> GenerationOperation {
    let target_exists = target.exists();
    GenerationOperation::Write { target, content, target_exists }
}
