use crate::utils::error::{DepsError, Result};

pub const DEFAULT_RELEASE: &str = "stable";

/// Alias -> codename table for the Debian suites the resolver knows about.
const DEBIAN_RELEASES: [(&str, &str); 5] = [
    ("stable", "buster"),
    ("testing", "bullseye"),
    ("unstable", "sid"),
    ("oldstable", "stretch"),
    ("oldoldstable", "jessie"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseCatalog;

impl ReleaseCatalog {
    /// Codename for a public alias such as `stable`.
    pub fn codename(alias: &str) -> Result<&'static str> {
        DEBIAN_RELEASES
            .iter()
            .find(|(a, _)| *a == alias)
            .map(|(_, codename)| *codename)
            .ok_or_else(|| DepsError::UnknownRelease {
                name: alias.to_string(),
            })
    }

    /// Codename for a release name as `apt` prints it in a transcript.
    ///
    /// Depending on the archive configuration the suite shows up either as
    /// the alias (`stable`) or as the codename itself (`buster`); both are
    /// accepted, anything else is unknown.
    pub fn resolve(name: &str) -> Result<&'static str> {
        Self::codename(name).or_else(|err| {
            DEBIAN_RELEASES
                .iter()
                .find(|(_, codename)| *codename == name)
                .map(|(_, codename)| *codename)
                .ok_or(err)
        })
    }

    pub fn aliases() -> impl Iterator<Item = &'static str> {
        DEBIAN_RELEASES.iter().map(|(alias, _)| *alias)
    }
}
