//! Project Model
//!
//! In-memory descriptions of a Gradle build. The writer only reads these.

pub mod android;
pub mod project;
pub mod source;

pub use android::{AndroidResources, LayoutFile};
pub use project::{ExtraFile, GradleProject, ProjectKind, RootProject, Subproject};
pub use source::{Source, SourceContent, SourceType, SourceUnit};
