use std::path::PathBuf;

/// A single filesystem action planned by a generation step.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOperation {
    CreateDirectory { target: PathBuf, target_exists: bool },
    Copy { source: PathBuf, target: PathBuf, target_exists: bool },
    Write { target: PathBuf, content: String, target_exists: bool },
    SetPermissions { target: PathBuf, mode: u32 },
}

impl GenerationOperation {
    /// Returns the path this operation produces or modifies.
    pub fn target_path(&self) -> &PathBuf {
        match self {
            GenerationOperation::CreateDirectory { target, .. }
            | GenerationOperation::Copy { target, .. }
            | GenerationOperation::Write { target, .. }
            | GenerationOperation::SetPermissions { target, .. } => target,
        }
    }

    /// Returns a brief description of this operation for error messages.
    pub fn error_context(&self) -> String {
        match self {
            GenerationOperation::CreateDirectory { target, .. } => {
                format!("create directory '{}'", target.display())
            }
            GenerationOperation::Copy { source, target, .. } => {
                format!("copy '{}' -> '{}'", source.display(), target.display())
            }
            GenerationOperation::Write { target, .. } => {
                format!("write '{}'", target.display())
            }
            GenerationOperation::SetPermissions { target, mode } => {
                format!("set mode {mode:o} on '{}'", target.display())
            }
        }
    }

    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    ///
    /// # Returns
    /// * `String` - A descriptive message about the operation
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            GenerationOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Skipping directory creation '{}' (already exists)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Creating directory '{}'", prefix, target.display())
                }
            }

            GenerationOperation::Copy { source, target, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Copying '{}' to '{}' (overwriting existing file)",
                        prefix,
                        source.display(),
                        target.display()
                    )
                } else {
                    format!(
                        "{}Copying '{}' to '{}'",
                        prefix,
                        source.display(),
                        target.display()
                    )
                }
            }

            GenerationOperation::Write { target, target_exists, .. } => {
                if *target_exists {
                    format!(
                        "{}Writing to '{}' (overwriting existing file)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Writing to '{}'", prefix, target.display())
                }
            }

            GenerationOperation::SetPermissions { target, mode } => {
                format!("{}Setting mode {:o} on '{}'", prefix, mode, target.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_operation_logs_overwrite_message() {
        let source = PathBuf::from("/bundle/context.md");
        let target = PathBuf::from("/app/.mcp-on-rails/context.md");
        let expected = format!(
            "Copying '{}' to '{}' (overwriting existing file)",
            source.display(),
            target.display()
        );

        let copy = GenerationOperation::Copy { source, target, target_exists: true };
        assert_eq!(copy.get_message(false), expected);
    }

    #[test]
    fn copy_operation_logs_basic_message() {
        let source = PathBuf::from("/bundle/context.md");
        let target = PathBuf::from("/app/.mcp-on-rails/context.md");
        let expected = format!("Copying '{}' to '{}'", source.display(), target.display());

        let copy = GenerationOperation::Copy { source, target, target_exists: false };
        assert_eq!(copy.get_message(false), expected);
    }

    #[test]
    fn create_directory_skips_when_exists() {
        let target = PathBuf::from("/app/.mcp-on-rails");
        let expected =
            format!("Skipping directory creation '{}' (already exists)", target.display());

        let op = GenerationOperation::CreateDirectory { target, target_exists: true };
        assert_eq!(op.get_message(false), expected);
    }

    #[test]
    fn create_directory_message_when_missing() {
        let target = PathBuf::from("/app/bin");
        let expected = format!("Creating directory '{}'", target.display());

        let op = GenerationOperation::CreateDirectory { target, target_exists: false };
        assert_eq!(op.get_message(false), expected);
    }

    #[test]
    fn write_operation_messages() {
        let target = PathBuf::from("/app/.mcp-on-rails/mcp-config.yml");
        let fresh = GenerationOperation::Write {
            target: target.clone(),
            content: String::new(),
            target_exists: false,
        };
        let existing = GenerationOperation::Write {
            target: target.clone(),
            content: String::new(),
            target_exists: true,
        };
        assert_eq!(fresh.get_message(false), format!("Writing to '{}'", target.display()));
        assert_eq!(
            existing.get_message(false),
            format!("Writing to '{}' (overwriting existing file)", target.display())
        );
    }

    #[test]
    fn set_permissions_message_uses_octal() {
        let op = GenerationOperation::SetPermissions {
            target: PathBuf::from("/app/bin/mcp-setup"),
            mode: 0o755,
        };
        assert_eq!(op.get_message(false), "Setting mode 755 on '/app/bin/mcp-setup'");
        assert_eq!(op.error_context(), "set mode 755 on '/app/bin/mcp-setup'");
    }

    #[test]
    fn test_dry_run_messages() {
        let op = GenerationOperation::Copy {
            source: PathBuf::from("/bundle/prompts/models.md"),
            target: PathBuf::from("/app/.mcp-on-rails/prompts/models.md"),
            target_exists: false,
        };
        let dry_run_message = op.get_message(true);
        let normal_message = op.get_message(false);

        assert!(dry_run_message.starts_with("[DRY RUN] "));
        assert!(!normal_message.starts_with("[DRY RUN] "));
        assert_eq!(dry_run_message, format!("[DRY RUN] {normal_message}"));
    }

    #[test]
    fn target_path_for_every_variant() {
        let target = PathBuf::from("/app/x");
        let ops = [
            GenerationOperation::CreateDirectory { target: target.clone(), target_exists: false },
            GenerationOperation::Copy {
                source: PathBuf::from("/bundle/x"),
                target: target.clone(),
                target_exists: false,
            },
            GenerationOperation::Write {
                target: target.clone(),
                content: String::new(),
                target_exists: false,
            },
            GenerationOperation::SetPermissions { target: target.clone(), mode: 0o644 },
        ];
        for op in &ops {
            assert_eq!(op.target_path(), &target);
        }
    }

    #[test]
    fn error_context_for_copy_includes_source_and_target() {
        let op = GenerationOperation::Copy {
            source: PathBuf::from("/bundle/context.md"),
            target: PathBuf::from("/app/.mcp-on-rails/context.md"),
            target_exists: false,
        };
        let context = op.error_context();
        assert!(context.contains("copy"));
        assert!(context.contains("/bundle/context.md"));
        assert!(context.contains("/app/.mcp-on-rails/context.md"));
    }
}
