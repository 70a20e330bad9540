//! Source files and how their content is rendered.

use serde::{Deserialize, Serialize};

/// Source set used when none is given.
pub const DEFAULT_SOURCE_SET: &str = "main";

/// Language of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Java,
    Kotlin,
    Groovy,
    Scala,
}

impl SourceType {
    /// Directory segment under `src/<sourceSet>/`.
    pub fn value(&self) -> &'static str {
        match self {
            SourceType::Java => "java",
            SourceType::Kotlin => "kotlin",
            SourceType::Groovy => "groovy",
            SourceType::Scala => "scala",
        }
    }

    /// File extension, without the dot.
    pub fn file_extension(&self) -> &'static str {
        match self {
            SourceType::Java => "java",
            SourceType::Kotlin => "kt",
            SourceType::Groovy => "groovy",
            SourceType::Scala => "scala",
        }
    }

    fn statement_terminator(&self) -> &'static str {
        match self {
            SourceType::Java => ";",
            _ => "",
        }
    }
}

/// Structured source: package, imports and a body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,

    #[serde(default)]
    pub body: String,
}

impl SourceUnit {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            package: None,
            imports: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// Render in the syntax of `source_type`.
    ///
    /// Empty sections are dropped with their blank separator, and the
    /// result always ends in exactly one newline.
    pub fn render(&self, source_type: SourceType) -> String {
        let terminator = source_type.statement_terminator();
        let mut sections: Vec<String> = Vec::new();

        if let Some(package) = &self.package {
            sections.push(format!("package {}{}", package, terminator));
        }

        if !self.imports.is_empty() {
            let imports: Vec<String> = self
                .imports
                .iter()
                .map(|import| format!("import {}{}", import, terminator))
                .collect();
            sections.push(imports.join("\n"));
        }

        let body = self.body.trim_end();
        if !body.is_empty() {
            sections.push(body.to_string());
        }

        let mut rendered = sections.join("\n\n");
        rendered.push('\n');
        rendered
    }
}

/// Content of a source file, either literal text or a structured unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceContent {
    Text(String),
    Structured(SourceUnit),
}

impl SourceContent {
    pub fn render(&self, source_type: SourceType) -> String {
        match self {
            SourceContent::Text(text) => text.clone(),
            SourceContent::Structured(unit) => unit.render(source_type),
        }
    }
}

impl From<&str> for SourceContent {
    fn from(text: &str) -> Self {
        SourceContent::Text(text.to_string())
    }
}

impl From<String> for SourceContent {
    fn from(text: String) -> Self {
        SourceContent::Text(text)
    }
}

impl From<SourceUnit> for SourceContent {
    fn from(unit: SourceUnit) -> Self {
        SourceContent::Structured(unit)
    }
}

fn default_source_set() -> String {
    DEFAULT_SOURCE_SET.to_string()
}

/// A single source file in a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// File name without extension.
    pub name: String,

    /// Source set, e.g. "main" or "test".
    #[serde(default = "default_source_set")]
    pub source_set: String,

    pub source_type: SourceType,

    /// Directory below the language root, e.g. "com/example". Empty for the
    /// default package.
    #[serde(default)]
    pub path: String,

    pub content: SourceContent,
}

impl Source {
    pub fn new(
        source_type: SourceType,
        name: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<SourceContent>,
    ) -> Self {
        Self {
            name: name.into(),
            source_set: default_source_set(),
            source_type,
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn java(
        name: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<SourceContent>,
    ) -> Self {
        Self::new(SourceType::Java, name, path, content)
    }

    pub fn kotlin(
        name: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<SourceContent>,
    ) -> Self {
        Self::new(SourceType::Kotlin, name, path, content)
    }

    pub fn groovy(
        name: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<SourceContent>,
    ) -> Self {
        Self::new(SourceType::Groovy, name, path, content)
    }

    pub fn scala(
        name: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<SourceContent>,
    ) -> Self {
        Self::new(SourceType::Scala, name, path, content)
    }

    pub fn in_source_set(mut self, source_set: impl Into<String>) -> Self {
        self.source_set = source_set.into();
        self
    }

    /// File name with the extension for this source's language.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.source_type.file_extension())
    }

    /// Content as it will be written to disk.
    pub fn rendered(&self) -> String {
        self.content.render(self.source_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_source_type_segments() {
        assert_eq!(SourceType::Kotlin.value(), "kotlin");
        assert_eq!(SourceType::Kotlin.file_extension(), "kt");
        assert_eq!(SourceType::Java.file_extension(), "java");
    }

    #[test]
    fn test_render_java_unit() {
        let unit = SourceUnit::new("public class Main {}")
            .with_package("com.example")
            .with_import("java.util.List")
            .with_import("java.util.Map");

        assert_eq!(
            unit.render(SourceType::Java),
            "package com.example;\n\nimport java.util.List;\nimport java.util.Map;\n\npublic class Main {}\n"
        );
    }

    #[test]
    fn test_render_kotlin_unit_without_imports() {
        let unit = SourceUnit::new("class Main\n\n").with_package("com.example");

        assert_eq!(
            unit.render(SourceType::Kotlin),
            "package com.example\n\nclass Main\n"
        );
    }

    #[test]
    fn test_render_default_package_unit() {
        let unit = SourceUnit::new("object Main");
        assert_eq!(unit.render(SourceType::Scala), "object Main\n");
    }

    #[test]
    fn test_text_content_is_literal() {
        let source = Source::java("Main", "", "class Main {}");
        assert_eq!(source.rendered(), "class Main {}");
        assert_eq!(source.file_name(), "Main.java");
        assert_eq!(source.source_set, "main");
    }

    #[test]
    fn test_source_json_defaults() {
        let json = r#"{"name": "Lib", "source_type": "kotlin", "content": "class Lib"}"#;
        let source: Source = serde_json::from_str(json).unwrap();

        assert_eq!(source.source_set, DEFAULT_SOURCE_SET);
        assert_eq!(source.path, "");
        assert_eq!(source.content, SourceContent::Text("class Lib".to_string()));
    }

    #[test]
    fn test_structured_content_from_json() {
        let json = r#"{
            "name": "Lib",
            "source_type": "java",
            "path": "com/example",
            "content": {"package": "com.example", "body": "class Lib {}"}
        }"#;
        let source: Source = serde_json::from_str(json).unwrap();

        assert_eq!(source.rendered(), "package com.example;\n\nclass Lib {}\n");
    }
}
