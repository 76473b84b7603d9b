use std::fmt::Display;

/// The steps of a generation run, in the order they execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStep {
    /// Create `.mcp-on-rails/` under the project path.
    CreateOutputDirectory,
    /// Copy the bundled prompts tree.
    CopyPrompts,
    /// Render the configuration template.
    RenderConfig,
    /// Copy the static context document.
    CopyContext,
    /// Write `bin/mcp-setup` and mark it executable.
    CreateSetupScript,
}

impl GenerationStep {
    pub const ALL: [GenerationStep; 5] = [
        GenerationStep::CreateOutputDirectory,
        GenerationStep::CopyPrompts,
        GenerationStep::RenderConfig,
        GenerationStep::CopyContext,
        GenerationStep::CreateSetupScript,
    ];
}

impl Display for GenerationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GenerationStep::CreateOutputDirectory => "create output directory",
            GenerationStep::CopyPrompts => "copy prompts",
            GenerationStep::RenderConfig => "render configuration",
            GenerationStep::CopyContext => "copy context file",
            GenerationStep::CreateSetupScript => "create setup script",
        };
        write!(f, "{s}")
    }
}
