//! Android resources carried by Android-flavored subprojects.

use serde::{Deserialize, Serialize};

/// Empty `<resources>` document used for value files nobody filled in.
pub const EMPTY_RESOURCES: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<resources>\n</resources>\n";

fn empty_resources() -> String {
    EMPTY_RESOURCES.to_string()
}

/// A layout XML file under `res/layout/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutFile {
    pub filename: String,
    pub content: String,
}

impl LayoutFile {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Manifest and resource files of an Android module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidResources {
    pub manifest: String,

    #[serde(default = "empty_resources")]
    pub styles: String,

    #[serde(default = "empty_resources")]
    pub strings: String,

    #[serde(default = "empty_resources")]
    pub colors: String,

    #[serde(default)]
    pub layouts: Vec<LayoutFile>,
}

impl AndroidResources {
    /// Resources with the given manifest and empty value files.
    pub fn new(manifest: impl Into<String>) -> Self {
        Self {
            manifest: manifest.into(),
            styles: empty_resources(),
            strings: empty_resources(),
            colors: empty_resources(),
            layouts: Vec::new(),
        }
    }

    pub fn with_styles(mut self, styles: impl Into<String>) -> Self {
        self.styles = styles.into();
        self
    }

    pub fn with_strings(mut self, strings: impl Into<String>) -> Self {
        self.strings = strings.into();
        self
    }

    pub fn with_colors(mut self, colors: impl Into<String>) -> Self {
        self.colors = colors.into();
        self
    }

    pub fn with_layout(mut self, layout: LayoutFile) -> Self {
        self.layouts.push(layout);
        self
    }
}
