use thiserror::Error;

use crate::constants::exit_codes;
use crate::generator::GenerationStep;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// A generation step failed. Everything written by earlier steps stays on disk.
    #[error("Failed to {step}: {source}")]
    StepFailed {
        step: GenerationStep,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attaches the step that was running when this error occurred.
    ///
    /// Errors that already carry a step are returned unchanged.
    pub fn during(self, step: GenerationStep) -> Self {
        if matches!(self, Error::StepFailed { .. }) {
            return self;
        }
        Error::StepFailed { step, source: Box::new(self) }
    }

    /// The generation step that failed, if the error came from one.
    pub fn step(&self) -> Option<GenerationStep> {
        match self {
            Error::StepFailed { step, .. } => Some(*step),
            _ => None,
        }
    }
}

/// Convenience type alias for Results with the crate Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn during_wraps_plain_errors_with_step() {
        let err = Error::IoError(std::io::Error::from(std::io::ErrorKind::NotFound))
            .during(GenerationStep::CopyContext);
        assert_eq!(err.step(), Some(GenerationStep::CopyContext));
        assert!(err.to_string().starts_with("Failed to copy context file: IO error:"));
    }

    #[test]
    fn during_keeps_the_first_step() {
        let err = Error::IoError(std::io::Error::from(std::io::ErrorKind::NotFound))
            .during(GenerationStep::CopyPrompts)
            .during(GenerationStep::RenderConfig);
        assert_eq!(err.step(), Some(GenerationStep::CopyPrompts));
    }

    #[test]
    fn errors_without_step() {
        let err = Error::TemplateDoesNotExistsError { template_dir: "/nope".into() };
        assert_eq!(err.step(), None);
        assert_eq!(
            err.to_string(),
            "Cannot proceed: template directory '/nope' does not exist."
        );
    }
}
