//! Package declaration check for source files.

use std::path::Path;

use crate::error::{Result, TestkitError};
use crate::model::Source;

/// Substring that counts as a package declaration.
///
/// This is a plain substring match, so a comment or string literal that
/// mentions the word also passes.
pub const PACKAGE_KEYWORD: &str = "package";

/// True when a source below the language root has no package declaration.
///
/// Sources with an empty `sub_path` live in the default package and are
/// never flagged.
pub fn is_missing_package(sub_path: &str, content: &str) -> bool {
    !sub_path.is_empty() && !content.contains(PACKAGE_KEYWORD)
}

/// Check one source, reporting `target` as the file it would be written to.
pub fn validate_source(source: &Source, rendered: &str, target: &Path) -> Result<()> {
    if is_missing_package(&source.path, rendered) {
        return Err(TestkitError::MissingPackageDeclaration {
            name: source.name.clone(),
            path: target.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", "class Main {}", false ; "default package without declaration")]
    #[test_case("", "package com.example;", false ; "default package with declaration")]
    #[test_case("com/example", "package com.example;\nclass Main {}", false ; "nested with declaration")]
    #[test_case("com/example", "class Main {}", true ; "nested without declaration")]
    #[test_case("com/example", "// see package docs\nclass Main {}", false ; "comment mentioning package")]
    #[test_case("com/example", "", true ; "nested and empty")]
    fn test_is_missing_package(sub_path: &str, content: &str, expected: bool) {
        assert_eq!(is_missing_package(sub_path, content), expected);
    }

    #[test]
    fn test_validate_source_reports_target() {
        let source = Source::java("Main", "com/example", "class Main {}");
        let target = Path::new("out/src/main/java/com/example/Main.java");

        let err = validate_source(&source, &source.rendered(), target).unwrap_err();
        match err {
            TestkitError::MissingPackageDeclaration { name, path } => {
                assert_eq!(name, "Main");
                assert_eq!(path, target);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
