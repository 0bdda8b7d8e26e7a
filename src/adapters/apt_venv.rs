//! [`PackageTool`] backed by `apt-venv`, which runs a shell command inside
//! a per-release apt environment:
//!
//! ```text
//! apt-venv -c '<command>' <release>
//! ```

use crate::domain::ports::PackageTool;
use crate::utils::error::{DepsError, Result};
use std::io::Read;
use std::process::{Command, Stdio};

pub const DEFAULT_PROGRAM: &str = "apt-venv";

#[derive(Debug, Clone)]
pub struct AptVenv {
    program: String,
}

impl AptVenv {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `command` for `release` and return stdout and stderr interleaved
    /// in the order the tool wrote them. A non-zero exit status is not an
    /// error here; apt reports failures in the transcript itself.
    fn run(&self, release: &str, command: &str) -> Result<String> {
        tracing::debug!("Running {} -c '{}' {}", self.program, command, release);

        // 兩個輸出串流共用同一條 pipe 以保留原始交錯順序
        let (mut reader, writer) = std::io::pipe()?;
        let mut child = {
            let mut cmd = Command::new(&self.program);
            cmd.arg("-c")
                .arg(command)
                .arg(release)
                .stdin(Stdio::null())
                .stdout(writer.try_clone()?)
                .stderr(writer);
            cmd.spawn().map_err(|e| DepsError::ToolError {
                message: format!("Failed to run {}: {}. Is it installed?", self.program, e),
            })?
            // cmd 在此釋放，寫入端隨之關閉
        };

        let mut output = Vec::new();
        if let Err(e) = reader.read_to_end(&mut output) {
            // 讀取失敗仍需回收子程序
            let _ = child.kill();
            let _ = child.wait();
            return Err(DepsError::ToolError {
                message: format!("Failed to read output of {}: {}", self.program, e),
            });
        }

        let status = child.wait().map_err(|e| DepsError::ToolError {
            message: format!("Failed to wait for {}: {}", self.program, e),
        })?;
        tracing::debug!(
            "{} finished with {} ({} bytes of output)",
            self.program,
            status,
            output.len()
        );

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

impl Default for AptVenv {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl PackageTool for AptVenv {
    fn simulate_install(&self, release: &str, specifiers: &str) -> Result<String> {
        self.run(release, &format!("apt -s install {}", specifiers))
    }

    fn show_source(&self, release: &str, package: &str) -> Result<String> {
        self.run(release, &format!("apt-cache showsrc {}", package))
    }
}
