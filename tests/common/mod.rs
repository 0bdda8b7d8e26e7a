#![allow(dead_code)]

use debian_deps::{DepsError, PackageTool, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One invocation seen by [`ScriptedTool`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SimulateInstall { release: String, specifiers: String },
    ShowSource { release: String, package: String },
}

/// Fake package tool replaying canned transcripts and recording every call.
#[derive(Clone, Default)]
pub struct ScriptedTool {
    transcript: Option<String>,
    sources: HashMap<String, String>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ScriptedTool {
    pub fn new(transcript: &str) -> Self {
        Self {
            transcript: Some(transcript.to_string()),
            ..Self::default()
        }
    }

    /// A tool whose simulate call fails as if the program were missing.
    pub fn broken() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, package: &str, output: &str) -> Self {
        self.sources.insert(package.to_string(), output.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl PackageTool for ScriptedTool {
    fn simulate_install(&self, release: &str, specifiers: &str) -> Result<String> {
        self.calls.lock().unwrap().push(Call::SimulateInstall {
            release: release.to_string(),
            specifiers: specifiers.to_string(),
        });
        self.transcript.clone().ok_or_else(|| DepsError::ToolError {
            message: "Failed to run apt-venv: No such file or directory".to_string(),
        })
    }

    fn show_source(&self, release: &str, package: &str) -> Result<String> {
        self.calls.lock().unwrap().push(Call::ShowSource {
            release: release.to_string(),
            package: package.to_string(),
        });
        Ok(self
            .sources
            .get(package)
            .cloned()
            .unwrap_or_else(|| format!("W: Unable to locate package {}\n", package)))
    }
}

pub const DEBIANUTILS_TRANSCRIPT: &str = "\
NOTE: This is only a simulation!
      apt needs root privileges for real execution.
      Keep also in mind that locking is deactivated,
      so don't depend on the relevance to the real current situation!
Reading package lists...
Building dependency tree...
The following NEW packages will be installed:
  debianutils libc6
0 upgraded, 2 newly installed, 0 to remove and 0 not upgraded.
Inst libc6 (2.28-10 Debian:10.9/stable [amd64])
Inst debianutils (4.8.6.1 Debian:10.9/stable [amd64])
Conf libc6 (2.28-10 Debian:10.9/stable [amd64])
Conf debianutils (4.8.6.1 Debian:10.9/stable [amd64])
";

pub const NOT_FOUND_TRANSCRIPT: &str = "\
NOTE: This is only a simulation!
Reading package lists...
Building dependency tree...
E: Unable to locate package foo
";
