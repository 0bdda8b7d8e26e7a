use crate::core::source::lookup_source;
use crate::core::transcript::parse_transcript;
use crate::core::{PackageTool, ResolutionResult, Result};
use crate::domain::release::ReleaseCatalog;
use crate::utils::error::DepsError;
use crate::utils::validation::validate_specifier;

/// Runs a simulated install through a [`PackageTool`] and turns the
/// transcript into a [`ResolutionResult`].
pub struct Resolver<T: PackageTool> {
    tool: T,
}

impl<T: PackageTool> Resolver<T> {
    pub fn new(tool: T) -> Self {
        Self { tool }
    }

    /// Resolve `input` (one or more `name` / `name=version` specifiers)
    /// against the release `alias`. Unknown aliases and unusable input are
    /// rejected before the tool is invoked.
    pub fn resolve(&self, input: &str, alias: &str) -> Result<ResolutionResult> {
        let codename = ReleaseCatalog::codename(alias)?;
        let specifiers = normalize_input(input)?;

        tracing::debug!(
            "Simulating install of '{}' on {} ({})",
            specifiers,
            alias,
            codename
        );
        let transcript = self.tool.simulate_install(alias, &specifiers)?;

        let result = parse_transcript(&transcript, |record| {
            lookup_source(&self.tool, record.release_name, record.name, record.version)
        })?;

        match &result {
            ResolutionResult::Success(packages) => {
                tracing::info!("Resolved '{}' on {}: {} package(s)", input, alias, packages.len())
            }
            ResolutionResult::Failure(diagnostic) => {
                tracing::info!("Resolution of '{}' on {} failed: {}", input, alias, diagnostic)
            }
        }

        Ok(result)
    }
}

/// Split a user supplied package list on commas and whitespace, validate
/// each specifier and join them back with single spaces.
pub fn normalize_input(input: &str) -> Result<String> {
    let specifiers: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    if specifiers.is_empty() {
        return Err(DepsError::InvalidInput {
            field: "input".to_string(),
            value: input.to_string(),
            reason: "At least one package must be given".to_string(),
        });
    }

    for specifier in &specifiers {
        validate_specifier("input", specifier)?;
    }

    Ok(specifiers.join(" "))
}
