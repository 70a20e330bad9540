//! Project Writer
//!
//! Materializes a [`GradleProject`] description as a directory tree in the
//! layout Gradle expects.
//!
//! # Directory Structure
//! ```text
//! root_dir/
//!   gradle.properties
//!   settings.gradle
//!   build.gradle
//!   <extra files>
//!   src/<sourceSet>/<language>/<path>/<Name>.<ext>
//!   <subproject>/
//!     build.gradle
//!     src/...
//!     src/main/AndroidManifest.xml   # Android subprojects only
//!     src/main/res/values/*.xml
//!     src/main/res/layout/*.xml
//! ```

pub mod android;
pub mod digest;
pub mod validation;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Result, TestkitError};
use crate::model::project::{BUILD_SCRIPT_FILE, GRADLE_PROPERTIES_FILE, SETTINGS_FILE};
use crate::model::{ExtraFile, GradleProject, ProjectKind, Source, Subproject};

pub use android::write_android_resources;
pub use digest::{list_files, tree_digest};
pub use validation::{is_missing_package, validate_source};

/// Files written by one materialization, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub files: Vec<PathBuf>,
}

impl WriteReport {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Writes a [`GradleProject`] to its root directory.
pub struct GradleProjectWriter<'a> {
    project: &'a GradleProject,
    report: WriteReport,
}

impl<'a> GradleProjectWriter<'a> {
    pub fn new(project: &'a GradleProject) -> Self {
        Self {
            project,
            report: WriteReport::default(),
        }
    }

    /// Write the whole build.
    ///
    /// Stops at the first error. Files written before the failure are left
    /// in place.
    pub fn write(mut self) -> Result<WriteReport> {
        let project = self.project;
        let root_path = project.root_dir.as_path();
        let root = &project.root_project;
        info!("Writing Gradle project to {}", root_path.display());

        create_dir(root_path)?;

        self.write_text(&root_path.join(GRADLE_PROPERTIES_FILE), &root.gradle_properties)?;
        self.write_text(&root_path.join(SETTINGS_FILE), &root.settings_script)?;
        self.write_text(&root_path.join(BUILD_SCRIPT_FILE), &root.build_script)?;

        self.write_extra_files(root_path, &root.files)?;
        self.write_sources(root_path, &root.sources)?;

        for subproject in &project.subprojects {
            self.write_subproject(root_path, subproject)?;
        }

        info!(
            "Wrote {} files for {} subprojects",
            self.report.len(),
            project.subprojects.len()
        );
        Ok(self.report)
    }

    fn write_subproject(&mut self, root_path: &Path, subproject: &Subproject) -> Result<()> {
        let project_path = root_path.join(&subproject.name);
        debug!("Writing subproject '{}'", subproject.name);

        create_dir(&project_path)?;
        self.write_text(&project_path.join(BUILD_SCRIPT_FILE), &subproject.build_script)?;
        self.write_extra_files(&project_path, &subproject.files)?;
        self.write_sources(&project_path, &subproject.sources)?;

        match &subproject.kind {
            ProjectKind::Plain => {}
            ProjectKind::Android(resources) => {
                let written = write_android_resources(&project_path, resources)?;
                self.report.files.extend(written);
            }
        }

        Ok(())
    }

    fn write_extra_files(&mut self, project_path: &Path, files: &[ExtraFile]) -> Result<()> {
        for file in files {
            let file_path = project_path.join(&file.path);
            if let Some(parent) = file_path.parent() {
                create_dir(parent)?;
            }
            self.write_text(&file_path, &file.content)?;
        }
        Ok(())
    }

    fn write_sources(&mut self, project_path: &Path, sources: &[Source]) -> Result<()> {
        for source in sources {
            let source_dir = source_dir(project_path, source);
            let file_path = source_dir.join(source.file_name());
            let rendered = source.rendered();

            validate_source(source, &rendered, &file_path)?;

            create_dir(&source_dir)?;
            self.write_text(&file_path, &rendered)?;
        }
        Ok(())
    }

    fn write_text(&mut self, path: &Path, content: &str) -> Result<()> {
        write_file(path, content)?;
        self.report.files.push(path.to_path_buf());
        Ok(())
    }
}

/// Write `project` to its root directory.
pub fn materialize(project: &GradleProject) -> Result<()> {
    GradleProjectWriter::new(project).write().map(|_| ())
}

/// Check every source in `project` without touching the filesystem.
pub fn check(project: &GradleProject) -> Result<()> {
    for (project_dir, source) in project.all_sources() {
        let target = source_dir(&project.root_dir.join(project_dir), source)
            .join(source.file_name());
        validate_source(source, &source.rendered(), &target)?;
    }
    Ok(())
}

/// `<project>/src/<sourceSet>/<language>/<path>`
fn source_dir(project_path: &Path, source: &Source) -> PathBuf {
    let source_root = project_path
        .join("src")
        .join(&source.source_set)
        .join(source.source_type.value());
    if source.path.is_empty() {
        source_root
    } else {
        source_root.join(&source.path)
    }
}

pub(crate) fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| TestkitError::DirectoryCreateError {
        path: path.to_path_buf(),
        source: e,
    })
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    debug!("Writing {}", path.display());
    fs::write(path, content).map_err(|e| TestkitError::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    })
}
