pub mod resolver;
pub mod response;
pub mod source;
pub mod transcript;

pub use crate::domain::model::{PackageSet, ResolutionResult, ResolvedPackage, SourcePackage};
pub use crate::domain::ports::PackageTool;
pub use crate::utils::error::Result;
