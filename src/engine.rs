//! External PDF engine discovery and invocation.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{OptimizeError, Result};

/// A resolved engine executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    name: String,
    path: PathBuf,
}

impl Engine {
    /// Resolve an engine by name on PATH, or by explicit path.
    ///
    /// # Errors
    ///
    /// Returns [`OptimizeError::EngineNotFound`] if the executable cannot be
    /// resolved.
    pub fn locate(program: impl AsRef<Path>) -> Result<Self> {
        let program = program.as_ref();
        let name = program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| program.to_string_lossy().to_string());

        let path = which::which(program).map_err(|e| {
            let explicit = program
                .parent()
                .is_some_and(|dir| !dir.as_os_str().is_empty());
            let reason = if explicit && program.is_file() {
                "file is not executable".to_string()
            } else {
                e.to_string()
            };
            OptimizeError::engine_not_found(program.to_string_lossy(), reason)
        })?;

        log::debug!("Resolved engine {} at {}", name, path.display());

        Ok(Self { name, path })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the engine to completion with the given arguments.
    ///
    /// Output streams are discarded; success is judged by exit status alone.
    pub fn run(&self, args: &[String]) -> Result<()> {
        log::debug!("Running {} {}", self.path.display(), args.join(" "));

        let status = Command::new(&self.path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| {
                OptimizeError::engine_failed(&self.name, format!("failed to launch: {}", e))
            })?;

        if !status.success() {
            return Err(OptimizeError::engine_failed(
                &self.name,
                format!("exited with {}", status),
            ));
        }

        Ok(())
    }

    /// First line of `<engine> --version`, if the engine answers.
    pub fn version(&self) -> Option<String> {
        let output = Command::new(&self.path)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .map(|s| s.trim().to_string())
    }
}
