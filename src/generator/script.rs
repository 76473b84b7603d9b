use serde_json::json;

use crate::constants::{PROJECT_NAME_KEY, SETUP_SCRIPT_NAME};
use crate::error::Result;
use crate::renderer::TemplateRenderer;

/// Body of `bin/mcp-setup`. It only prints instructions.
const SETUP_SCRIPT_TEMPLATE: &str = r#"#!/bin/sh
set -e

printf '%s\n' {{ ("🔧 Setting up MCP on Rails for " ~ project_name) | shell_quote }}
printf '%s\n' '📋 Configuration files are ready in .mcp-on-rails/'
printf '\n'
printf '%s\n' 'Next steps:'
printf '%s\n' '1. Configure your MCP client to use .mcp-on-rails/mcp-config.yml'
printf '%s\n' '2. Use the prompts in .mcp-on-rails/prompts/ for context-aware AI assistance'
printf '%s\n' '3. Customize the configuration as needed for your project'
"#;

/// Renders the setup script for `project_name`.
pub fn render_setup_script(engine: &dyn TemplateRenderer, project_name: &str) -> Result<String> {
    engine.render(
        SETUP_SCRIPT_TEMPLATE,
        &json!({ PROJECT_NAME_KEY: project_name }),
        Some(SETUP_SCRIPT_NAME),
    )
}
