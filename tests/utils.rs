#![allow(dead_code)]

use mcp_on_rails::renderer::MiniJinjaRenderer;
use mcp_on_rails::{GenerationReport, GenerationRequest, Generator, Result, TemplateBundle};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Root of a bundle under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// Runs a full generation against the fixture bundle `bundle`.
pub fn generate_from(
    bundle: &str,
    project_path: &Path,
    project_name: Option<&str>,
) -> Result<GenerationReport> {
    generate_with_bundle(&fixture(bundle), project_path, project_name)
}

/// Runs a full generation against the bundle rooted at `bundle_root`.
pub fn generate_with_bundle(
    bundle_root: &Path,
    project_path: &Path,
    project_name: Option<&str>,
) -> Result<GenerationReport> {
    let engine = MiniJinjaRenderer::new();
    let bundle = TemplateBundle::load(bundle_root)?;
    let request = GenerationRequest::new(project_name.map(str::to_string), project_path);
    Generator::new(&engine, &bundle, request)?.generate()
}

/// Runs a full generation against the default fixture bundle.
pub fn generate(project_path: &Path, project_name: Option<&str>) -> Result<GenerationReport> {
    generate_from("bundle", project_path, project_name)
}

fn relative_files(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

/// Prints which files differ between two directories.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let files1 = relative_files(actual);
    let files2 = relative_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual:   {actual:?}");
    println!("Expected: {expected:?}");

    for file in files1.difference(&files2) {
        println!("  + {file:?}");
    }
    for file in files2.difference(&files1) {
        println!("  - {file:?}");
    }
    for file in files1.intersection(&files2) {
        if fs::read(actual.join(file)).unwrap() != fs::read(expected.join(file)).unwrap() {
            println!("  ~ {file:?}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts two directory trees hold the same files with the same bytes.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}
