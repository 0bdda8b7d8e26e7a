pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::AptVenv;
pub use config::ServiceConfig;
pub use core::resolver::Resolver;
pub use core::response::{CondensedResponse, DetailedResponse};
pub use domain::model::{PackageSet, ResolutionResult, ResolvedPackage, SourcePackage};
pub use domain::ports::PackageTool;
pub use domain::release::ReleaseCatalog;
pub use utils::error::{DepsError, Result};
