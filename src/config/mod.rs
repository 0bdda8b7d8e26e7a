pub mod toml_config;

pub use toml_config::ServiceConfig;

#[cfg(feature = "cli")]
use crate::domain::release::{ReleaseCatalog, DEFAULT_RELEASE};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "debian-deps")]
#[command(about = "Resolve dependencies of Debian packages")]
pub struct CliConfig {
    #[arg(
        short,
        long,
        required_unless_present = "flask",
        help = "A package name or several names separated by commas. Examples: \
                'debianutils' or 'debianutils=4.8.6.1' or 'debianutils, zlib1g'"
    )]
    pub input: Option<String>,

    #[arg(short, long, help = "File to save the output")]
    pub output_file: Option<String>,

    #[arg(short, long, help = "Debian release (default: stable)")]
    pub release: Option<String>,

    #[arg(
        short,
        long,
        conflicts_with_all = ["input", "output_file", "release"],
        help = "Serve the HTTP API instead of resolving once"
    )]
    pub flask: bool,

    #[arg(short, long, help = "Service configuration file (TOML)")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn release(&self) -> &str {
        self.release.as_deref().unwrap_or(DEFAULT_RELEASE)
    }

    pub fn service_config(&self) -> Result<ServiceConfig> {
        match &self.config {
            Some(path) => ServiceConfig::from_file(path),
            None => Ok(ServiceConfig::default()),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.flask {
            return Ok(());
        }

        if let Some(input) = &self.input {
            validate_non_empty_string("input", input)?;
        }
        if let Some(output_file) = &self.output_file {
            validate_path("output_file", output_file)?;
        }
        ReleaseCatalog::codename(self.release())?;

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_one_shot_arguments() {
        let config =
            CliConfig::try_parse_from(["debian-deps", "-i", "debianutils", "-o", "out.json"])
                .unwrap();
        assert_eq!(config.input.as_deref(), Some("debianutils"));
        assert_eq!(config.output_file.as_deref(), Some("out.json"));
        assert_eq!(config.release(), "stable");
        assert!(!config.flask);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_long_flags() {
        let config = CliConfig::try_parse_from([
            "debian-deps",
            "--input",
            "zlib1g",
            "--release",
            "testing",
            "--output-file",
            "deps.json",
        ])
        .unwrap();
        assert_eq!(config.release(), "testing");
        assert_eq!(config.output_file.as_deref(), Some("deps.json"));
    }

    #[test]
    fn test_flask_alone() {
        let config = CliConfig::try_parse_from(["debian-deps", "--flask"]).unwrap();
        assert!(config.flask);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flask_conflicts_with_other_options() {
        for extra in [["-i", "debianutils"], ["-o", "out.json"], ["-r", "stable"]] {
            let err = CliConfig::try_parse_from(["debian-deps", "-f", extra[0], extra[1]])
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        }
    }

    #[test]
    fn test_input_required_without_flask() {
        let err = CliConfig::try_parse_from(["debian-deps"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = CliConfig::try_parse_from(["debian-deps", "-r", "stable"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_unknown_release_fails_validation() {
        let config =
            CliConfig::try_parse_from(["debian-deps", "-i", "debianutils", "-r", "rolling"])
                .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_verbose_and_config_allowed_with_flask() {
        let config =
            CliConfig::try_parse_from(["debian-deps", "-f", "-v", "-c", "deps.toml"]).unwrap();
        assert!(config.flask);
        assert!(config.verbose);
        assert_eq!(config.config.as_deref(), Some("deps.toml"));
    }
}
