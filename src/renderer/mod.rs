//! Template rendering engine for mcp-on-rails
//!
//! This module provides template rendering capabilities using MiniJinja.
//!
//! The module is structured as:
//! - `interface`: Core trait definitions for template rendering
//! - `minijinja`: MiniJinja-based implementation of the template renderer
//! - `filters`: Custom filters available to bundle templates

pub mod filters;
pub mod interface;
pub mod minijinja;

// Re-export the main types and traits for convenience
pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;

/// Convenience function to create the default template renderer
pub fn new_renderer() -> impl TemplateRenderer {
    MiniJinjaRenderer::new()
}
