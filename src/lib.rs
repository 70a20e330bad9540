//! Gradle Testkit - Project Fixture Writer
//!
//! Writes Gradle builds described in memory (root project, subprojects,
//! Android modules, sources and resources) to disk so plugin tests can run
//! real builds against them.
//!
//! # Usage
//!
//! ```no_run
//! use gradle_testkit::model::{GradleProject, RootProject, Source, Subproject};
//! use gradle_testkit::writer::materialize;
//!
//! let project = GradleProject::new(
//!     "build/fixtures/demo",
//!     RootProject::new("apply plugin: 'java'").with_settings("include ':lib'"),
//! )
//! .with_subproject(
//!     Subproject::new("lib", "apply plugin: 'java-library'")
//!         .with_source(Source::java("Lib", "com/example", "package com.example;\n")),
//! );
//!
//! materialize(&project)?;
//! # Ok::<(), gradle_testkit::TestkitError>(())
//! ```

pub mod cli;
pub mod error;
pub mod model;
pub mod writer;

pub use error::{Result, TestkitError};
pub use model::GradleProject;
pub use writer::{materialize, GradleProjectWriter, WriteReport};
