//! Project descriptions: the root project, its subprojects and loose files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::android::AndroidResources;
use super::source::Source;
use crate::error::{Result, TestkitError};

/// Root build script file name.
pub const BUILD_SCRIPT_FILE: &str = "build.gradle";
/// Settings script file name.
pub const SETTINGS_FILE: &str = "settings.gradle";
/// Gradle properties file name.
pub const GRADLE_PROPERTIES_FILE: &str = "gradle.properties";

/// An arbitrary file written verbatim relative to its project directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraFile {
    pub path: PathBuf,
    pub content: String,
}

impl ExtraFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// The top-level project, owner of settings and properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootProject {
    #[serde(default)]
    pub gradle_properties: String,

    #[serde(default)]
    pub settings_script: String,

    #[serde(default)]
    pub build_script: String,

    #[serde(default)]
    pub sources: Vec<Source>,

    #[serde(default)]
    pub files: Vec<ExtraFile>,
}

impl RootProject {
    pub fn new(build_script: impl Into<String>) -> Self {
        Self {
            build_script: build_script.into(),
            ..Self::default()
        }
    }

    pub fn with_settings(mut self, settings_script: impl Into<String>) -> Self {
        self.settings_script = settings_script.into();
        self
    }

    pub fn with_gradle_properties(mut self, gradle_properties: impl Into<String>) -> Self {
        self.gradle_properties = gradle_properties.into();
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_file(mut self, file: ExtraFile) -> Self {
        self.files.push(file);
        self
    }
}

/// Flavor of a subproject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProjectKind {
    /// JVM module: build script, sources and extra files only.
    #[default]
    Plain,
    /// Android module: also gets a manifest and resources.
    Android(AndroidResources),
}

/// A nested project directory with its own build script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subproject {
    /// Directory name relative to the root project.
    pub name: String,

    #[serde(default)]
    pub build_script: String,

    #[serde(default)]
    pub sources: Vec<Source>,

    #[serde(default)]
    pub files: Vec<ExtraFile>,

    #[serde(default)]
    pub kind: ProjectKind,
}

impl Subproject {
    pub fn new(name: impl Into<String>, build_script: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            build_script: build_script.into(),
            sources: Vec::new(),
            files: Vec::new(),
            kind: ProjectKind::Plain,
        }
    }

    pub fn android(
        name: impl Into<String>,
        build_script: impl Into<String>,
        resources: AndroidResources,
    ) -> Self {
        Self {
            kind: ProjectKind::Android(resources),
            ..Self::new(name, build_script)
        }
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_file(mut self, file: ExtraFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn is_android(&self) -> bool {
        matches!(self.kind, ProjectKind::Android(_))
    }
}

/// A complete Gradle build: root directory, root project and subprojects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradleProject {
    /// Directory the build is written into.
    #[serde(default)]
    pub root_dir: PathBuf,

    #[serde(default)]
    pub root_project: RootProject,

    #[serde(default)]
    pub subprojects: Vec<Subproject>,
}

impl GradleProject {
    pub fn new(root_dir: impl Into<PathBuf>, root_project: RootProject) -> Self {
        Self {
            root_dir: root_dir.into(),
            root_project,
            subprojects: Vec::new(),
        }
    }

    pub fn with_subproject(mut self, subproject: Subproject) -> Self {
        self.subprojects.push(subproject);
        self
    }

    /// Same description rooted somewhere else.
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = root_dir.into();
        self
    }

    /// Every source in the build, paired with the project directory it
    /// belongs to (relative to the root).
    pub fn all_sources(&self) -> impl Iterator<Item = (PathBuf, &Source)> + '_ {
        let root = self
            .root_project
            .sources
            .iter()
            .map(|source| (PathBuf::new(), source));
        let nested = self.subprojects.iter().flat_map(|subproject| {
            subproject
                .sources
                .iter()
                .map(move |source| (PathBuf::from(&subproject.name), source))
        });
        root.chain(nested)
    }

    /// Parse a description from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a description from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TestkitError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LayoutFile, SourceType};
    use pretty_assertions::assert_eq;

    fn sample_project() -> GradleProject {
        GradleProject::new(
            "/tmp/demo",
            RootProject::new("apply plugin: 'java'")
                .with_settings("rootProject.name='demo'")
                .with_source(Source::java("Root", "", "class Root {}")),
        )
        .with_subproject(
            Subproject::new("lib", "apply plugin: 'java-library'")
                .with_source(Source::kotlin("Lib", "com/example", "package com.example")),
        )
        .with_subproject(Subproject::android(
            "app",
            "apply plugin: 'com.android.application'",
            AndroidResources::new("<manifest/>")
                .with_layout(LayoutFile::new("main.xml", "<LinearLayout/>")),
        ))
    }

    #[test]
    fn test_builders() {
        let project = sample_project();

        assert_eq!(project.root_dir, PathBuf::from("/tmp/demo"));
        assert_eq!(project.subprojects.len(), 2);
        assert!(!project.subprojects[0].is_android());
        assert!(project.subprojects[1].is_android());
    }

    #[test]
    fn test_all_sources_pairs_project_dirs() {
        let project = sample_project();
        let sources: Vec<(PathBuf, String)> = project
            .all_sources()
            .map(|(dir, source)| (dir, source.name.clone()))
            .collect();

        assert_eq!(
            sources,
            vec![
                (PathBuf::new(), "Root".to_string()),
                (PathBuf::from("lib"), "Lib".to_string()),
            ]
        );
    }

    #[test]
    fn test_json_round_trip() {
        let project = sample_project();
        let json = project.to_json_pretty().unwrap();
        let parsed = GradleProject::from_json_str(&json).unwrap();

        assert_eq!(parsed, project);
    }

    #[test]
    fn test_kind_defaults_to_plain() {
        let json = r#"{
            "root_dir": "out",
            "root_project": {"build_script": "apply plugin: 'base'"},
            "subprojects": [
                {"name": "lib"},
                {"name": "app", "kind": {"type": "android", "manifest": "<manifest/>"}}
            ]
        }"#;
        let project = GradleProject::from_json_str(json).unwrap();

        assert_eq!(project.subprojects[0].kind, ProjectKind::Plain);
        match &project.subprojects[1].kind {
            ProjectKind::Android(resources) => assert_eq!(resources.manifest, "<manifest/>"),
            ProjectKind::Plain => panic!("expected an android subproject"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = GradleProject::load(Path::new("/nonexistent/description.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_READ_ERROR");
    }

    #[test]
    fn test_malformed_json() {
        let err = GradleProject::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, TestkitError::JsonSerializationError(_)));
    }

    #[test]
    fn test_source_type_survives_json() {
        let project = sample_project();
        let json = project.to_json_pretty().unwrap();
        assert!(json.contains("\"source_type\": \"kotlin\""));
        assert_eq!(
            GradleProject::from_json_str(&json).unwrap().subprojects[0].sources[0].source_type,
            SourceType::Kotlin
        );
    }
}
