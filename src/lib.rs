use std::path::Path;

/// Handles argument parsing and the command-line runner.
pub mod cli;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// The five-step generation run.
pub mod generator;

/// The bundled assets a run copies or renders.
pub mod bundle;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Template parsing and rendering functionality.
pub mod renderer;

pub use bundle::TemplateBundle;
pub use error::{Error, Result};
pub use generator::{GenerationReport, GenerationRequest, GenerationStep, Generator};

/// Scaffolds `.mcp-on-rails/` and `bin/mcp-setup` into `project_path` from the
/// bundled templates.
///
/// `project_name` defaults to the base name of the resolved `project_path`.
/// Nothing is printed; the returned report carries what was produced.
pub fn setup<P: AsRef<Path>>(
    project_name: Option<String>,
    project_path: P,
) -> Result<GenerationReport> {
    let engine = renderer::new_renderer();
    let bundle = TemplateBundle::bundled()?;
    let request = GenerationRequest::new(project_name, project_path);
    Generator::new(&engine, &bundle, request)?.generate()
}
