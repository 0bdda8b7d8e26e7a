//! JSON shapes returned to callers: the detailed document written by the
//! CLI and the condensed list served over HTTP.

use crate::core::{ResolutionResult, ResolvedPackage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDetail {
    pub package: String,
    pub version: String,
    pub arch: String,
    pub release: String,
    pub source: String,
    pub source_version: String,
    /// Always empty; kept for consumers that expect the field.
    pub date: String,
}

impl From<&ResolvedPackage> for PackageDetail {
    fn from(pkg: &ResolvedPackage) -> Self {
        Self {
            package: pkg.name().to_string(),
            version: pkg.version().to_string(),
            arch: pkg.architecture().to_string(),
            release: pkg.release().to_string(),
            source: pkg.source().name.clone(),
            source_version: pkg.source().version.clone(),
            date: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedResponse {
    pub input: String,
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<BTreeMap<String, PackageDetail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DetailedResponse {
    pub fn new(input: &str, result: &ResolutionResult) -> Self {
        match result {
            ResolutionResult::Success(packages) => Self {
                input: input.to_string(),
                status: true,
                // 同名套件以後出現者為準
                packages: Some(
                    packages
                        .iter()
                        .map(|pkg| (pkg.name().to_string(), PackageDetail::from(pkg)))
                        .collect(),
                ),
                error: None,
            },
            ResolutionResult::Failure(diagnostic) => Self {
                input: input.to_string(),
                status: false,
                packages: None,
                error: Some(diagnostic.clone()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVersion {
    pub product: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CondensedResponse {
    Packages(Vec<ProductVersion>),
    Error { error: String },
}

impl CondensedResponse {
    pub fn new(result: &ResolutionResult) -> Self {
        match result {
            ResolutionResult::Success(packages) => CondensedResponse::Packages(
                packages
                    .iter()
                    .filter(|pkg| !pkg.name().is_empty())
                    .map(|pkg| ProductVersion {
                        product: pkg.name().to_string(),
                        version: pkg.version().to_string(),
                    })
                    .collect(),
            ),
            ResolutionResult::Failure(diagnostic) => CondensedResponse::Error {
                error: diagnostic.clone(),
            },
        }
    }
}
