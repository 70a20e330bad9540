//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::model::GradleProject;
use crate::writer::{self, tree_digest, GradleProjectWriter};

/// Load a description and write it, optionally into another root directory.
pub fn write_project(description: &Path, out: Option<&Path>) -> Result<()> {
    info!("Loading project description: {}", description.display());

    let mut project = GradleProject::load(description)?;
    if let Some(out) = out {
        project = project.with_root_dir(out);
    }

    let report = GradleProjectWriter::new(&project).write()?;
    for file in &report.files {
        println!("{}", file.display());
    }
    println!(
        "Wrote {} files to {}",
        report.len(),
        project.root_dir.display()
    );

    Ok(())
}

/// Validate every source in a description without writing.
pub fn check_project(description: &Path) -> Result<()> {
    info!("Checking project description: {}", description.display());

    let project = GradleProject::load(description)?;
    writer::check(&project)?;

    let count = project.all_sources().count();
    println!("{} sources OK", count);

    Ok(())
}

/// Print the digest of a written tree.
pub fn print_digest(path: &Path) -> Result<()> {
    info!("Hashing tree: {}", path.display());

    println!("{}", tree_digest(path)?);

    Ok(())
}
