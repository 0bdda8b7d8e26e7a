//! Parsing of `apt -s install` transcripts.
//!
//! A simulated install prints one `Inst` line per package it would unpack,
//! e.g. `Inst debianutils (4.8.6.1 Debian:10.9/stable [amd64])`. When apt
//! gives up it ends with an `E:` line followed by the trailing newline, so
//! the diagnostic is always the second-to-last element after splitting on
//! `\n`.

use crate::core::{PackageSet, ResolutionResult, ResolvedPackage, Result, SourcePackage};
use crate::domain::release::ReleaseCatalog;
use crate::utils::error::DepsError;
use regex::Regex;
use std::sync::LazyLock;

const ERROR_MARKER: &str = "E:";

static RECORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Inst ([a-z0-9+.\-]*) \(([a-zA-Z0-9~+.\-]*) (.*)/(.*) \[(.*)\]\)")
        .expect("record pattern is valid")
});

/// Fields captured from one `Inst` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRecord<'a> {
    pub raw: &'a str,
    pub name: &'a str,
    pub version: &'a str,
    pub installed_version: &'a str,
    pub release_name: &'a str,
    pub architecture: &'a str,
}

impl<'a> TranscriptRecord<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = RECORD_PATTERN.captures(line)?;
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        Some(Self {
            raw: group(0),
            name: group(1),
            version: group(2),
            installed_version: group(3),
            release_name: group(4),
            architecture: group(5),
        })
    }
}

/// Interpret a transcript. `lookup_source` is called once per distinct
/// record (not for repeated lines) and only when the tool reported no error.
pub fn parse_transcript<F>(transcript: &str, mut lookup_source: F) -> Result<ResolutionResult>
where
    F: FnMut(&TranscriptRecord<'_>) -> SourcePackage,
{
    let lines: Vec<&str> = transcript.split('\n').collect();

    if lines.len() < 2 {
        tracing::warn!("Package tool produced malformed output: {:?}", transcript);
        return Ok(ResolutionResult::Failure(format!(
            "Malformed package tool output: expected at least two lines, got {}",
            lines.len()
        )));
    }

    let trailing = lines[lines.len() - 2];
    if trailing.starts_with(ERROR_MARKER) {
        tracing::debug!("Package tool reported an error: {}", trailing);
        return Ok(ResolutionResult::Failure(trailing.to_string()));
    }

    let mut packages = PackageSet::new();
    for &line in &lines {
        let Some(record) = TranscriptRecord::parse(line) else {
            continue;
        };
        if packages.contains_key(record.raw) {
            continue;
        }

        // 紀錄中的發行版名稱來自工具輸出，不是使用者輸入
        let release = ReleaseCatalog::resolve(record.release_name).map_err(|_| {
            DepsError::MalformedOutput {
                message: format!(
                    "unknown release '{}' in record: {}",
                    record.release_name, record.raw
                ),
            }
        })?;
        let source = lookup_source(&record);

        packages.insert(ResolvedPackage::new(
            record.raw,
            record.name,
            record.version,
            record.installed_version,
            record.release_name,
            release,
            record.architecture,
            source,
        ));
    }

    tracing::debug!("Parsed {} package record(s) from transcript", packages.len());
    Ok(ResolutionResult::Success(packages))
}
