use crate::utils::error::Result;

/// The external package tool. Both calls block until the tool exits and
/// return its combined stdout/stderr transcript.
pub trait PackageTool: Send + Sync {
    /// `apt -s install <specifiers>` inside the environment for `release`.
    fn simulate_install(&self, release: &str, specifiers: &str) -> Result<String>;

    /// `apt-cache showsrc <package>` inside the environment for `release`.
    fn show_source(&self, release: &str, package: &str) -> Result<String>;
}

