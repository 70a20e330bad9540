//! Android post-write step: manifest, value resources and layouts.

use std::path::{Path, PathBuf};

use log::debug;

use super::{create_dir, write_file};
use crate::error::Result;
use crate::model::AndroidResources;

/// Manifest location relative to the module directory.
pub const MANIFEST_PATH: &str = "src/main/AndroidManifest.xml";
/// Value resources directory relative to the module directory.
pub const VALUES_DIR: &str = "src/main/res/values";
/// Layout resources directory relative to the module directory.
pub const LAYOUT_DIR: &str = "src/main/res/layout";

/// Write the Android-only files of a module rooted at `project_path`.
///
/// Returns the written paths in write order.
pub fn write_android_resources(
    project_path: &Path,
    resources: &AndroidResources,
) -> Result<Vec<PathBuf>> {
    let values_dir = project_path.join(VALUES_DIR);
    let fixed = [
        (project_path.join(MANIFEST_PATH), &resources.manifest),
        (values_dir.join("styles.xml"), &resources.styles),
        (values_dir.join("strings.xml"), &resources.strings),
        (values_dir.join("colors.xml"), &resources.colors),
    ];

    let mut written = Vec::with_capacity(fixed.len() + resources.layouts.len());
    for (path, content) in fixed {
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }
        write_file(&path, content)?;
        written.push(path);
    }

    // Always present, even without layouts.
    let layouts_dir = project_path.join(LAYOUT_DIR);
    create_dir(&layouts_dir)?;
    for layout in &resources.layouts {
        let layout_path = layouts_dir.join(&layout.filename);
        write_file(&layout_path, &layout.content)?;
        written.push(layout_path);
    }

    debug!(
        "Wrote {} Android resource files under {}",
        written.len(),
        project_path.display()
    );

    Ok(written)
}
