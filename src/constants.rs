//! Constants used throughout the mcp-on-rails application

/// Directory created under the project root that holds the generated files
pub const OUTPUT_DIR_NAME: &str = ".mcp-on-rails";

/// Name of the prompts directory, both in the bundle and in the output
pub const PROMPTS_DIR_NAME: &str = "prompts";

/// Configuration template in the bundle, and its rendered name in the output
pub const CONFIG_FILENAME: &str = "mcp-config.yml";

/// Static context document
pub const CONTEXT_FILENAME: &str = "context.md";

/// Directory under the project root receiving the setup script
pub const BIN_DIR_NAME: &str = "bin";

/// Setup script file name
pub const SETUP_SCRIPT_NAME: &str = "mcp-setup";

/// Permission bits applied to the setup script (rwxr-xr-x)
pub const SETUP_SCRIPT_MODE: u32 = 0o755;

/// Environment variable overriding the bundle location
pub const TEMPLATES_ENV_VAR: &str = "MCP_ON_RAILS_TEMPLATES";

/// Variable name holding the project name in every rendered template
pub const PROJECT_NAME_KEY: &str = "project_name";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
