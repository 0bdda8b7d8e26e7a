use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Source package a binary package was built from. Both fields are empty
/// when `apt-cache showsrc` has nothing on record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourcePackage {
    pub name: String,
    pub version: String,
}

impl SourcePackage {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// One `Inst ...` line of a simulated install.
///
/// Identity is the raw transcript line: two records are equal only if the
/// tool printed byte-identical lines, so different versions of the same
/// package name stay distinct.
#[derive(Debug, Clone)]
pub struct ResolvedPackage {
    raw: String,
    name: String,
    version: String,
    installed_version: String,
    release_name: String,
    release: String,
    architecture: String,
    source: SourcePackage,
}

impl ResolvedPackage {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        raw: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        installed_version: impl Into<String>,
        release_name: impl Into<String>,
        release: impl Into<String>,
        architecture: impl Into<String>,
        source: SourcePackage,
    ) -> Self {
        Self {
            raw: raw.into(),
            name: name.into(),
            version: version.into(),
            installed_version: installed_version.into(),
            release_name: release_name.into(),
            release: release.into(),
            architecture: architecture.into(),
            source,
        }
    }

    /// Deduplication key within a [`PackageSet`].
    pub fn key(&self) -> &str {
        &self.raw
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn installed_version(&self) -> &str {
        &self.installed_version
    }

    /// Release as printed by apt (`stable`, `buster`, ...).
    pub fn release_name(&self) -> &str {
        &self.release_name
    }

    /// Codename from the release catalog.
    pub fn release(&self) -> &str {
        &self.release
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn source(&self) -> &SourcePackage {
        &self.source
    }
}

impl PartialEq for ResolvedPackage {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ResolvedPackage {}

impl Hash for ResolvedPackage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

/// Insertion-ordered set of packages keyed by [`ResolvedPackage::key`].
#[derive(Debug, Clone, Default)]
pub struct PackageSet {
    packages: Vec<ResolvedPackage>,
    keys: HashSet<String>,
}

impl PackageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when a record with the same key is already present.
    pub fn insert(&mut self, package: ResolvedPackage) -> bool {
        if !self.keys.insert(package.key().to_string()) {
            return false;
        }
        self.packages.push(package);
        true
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedPackage> {
        self.packages.iter()
    }
}

impl<'a> IntoIterator for &'a PackageSet {
    type Item = &'a ResolvedPackage;
    type IntoIter = std::slice::Iter<'a, ResolvedPackage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub enum ResolutionResult {
    Success(PackageSet),
    /// Diagnostic line reported by the tool (or a malformed-output notice).
    Failure(String),
}

impl ResolutionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ResolutionResult::Success(_))
    }

    pub fn packages(&self) -> Option<&PackageSet> {
        match self {
            ResolutionResult::Success(packages) => Some(packages),
            ResolutionResult::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ResolutionResult::Success(_) => None,
            ResolutionResult::Failure(diagnostic) => Some(diagnostic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(raw: &str, name: &str, version: &str) -> ResolvedPackage {
        ResolvedPackage::new(
            raw,
            name,
            version,
            "Debian:10.9",
            "stable",
            "buster",
            "amd64",
            SourcePackage::none(),
        )
    }

    #[test]
    fn test_identity_is_raw_line() {
        let a = package("Inst zlib1g (1:1.2.11.dfsg-1 Debian:10.9/stable [amd64])", "zlib1g", "1:1.2.11.dfsg-1");
        let b = package("Inst zlib1g (1:1.2.11.dfsg-2 Debian:10.9/stable [amd64])", "zlib1g", "1:1.2.11.dfsg-2");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_package_set_dedup_keeps_first() {
        let mut set = PackageSet::new();
        let line = "Inst debianutils (4.8.6.1 Debian:10.9/stable [amd64])";

        assert!(set.insert(package(line, "debianutils", "4.8.6.1")));
        assert!(!set.insert(package(line, "debianutils", "4.8.6.1")));
        assert!(set.insert(package("Inst zlib1g (1:1.2.11.dfsg-1 Debian:10.9/stable [amd64])", "zlib1g", "1:1.2.11.dfsg-1")));

        assert_eq!(set.len(), 2);
        assert!(set.contains_key(line));
        let names: Vec<&str> = set.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["debianutils", "zlib1g"]);
    }

    #[test]
    fn test_resolution_result_accessors() {
        let ok = ResolutionResult::Success(PackageSet::new());
        assert!(ok.is_success());
        assert!(ok.packages().unwrap().is_empty());
        assert!(ok.error().is_none());

        let failed = ResolutionResult::Failure("E: Unable to locate package foo".to_string());
        assert!(!failed.is_success());
        assert_eq!(failed.error(), Some("E: Unable to locate package foo"));
    }
}
