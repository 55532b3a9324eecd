use anyhow::{Context, Result};
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

use taskmail_runtime::RECOGNIZED_KEYS;

const ENV_FILE_VAR: &str = "TASKMAIL_ENV_FILE";
const LOG_ENV_VAR: &str = "TASKMAIL_LOG";

/// Isolated environment for running the hook binary.
///
/// Every run points `TASKMAIL_ENV_FILE` at a file inside a private temp
/// directory and clears any notifier settings inherited from the developer's
/// shell, so results never depend on the host machine.
pub struct HookWorld {
    temp_dir: TempDir,
    env_file: PathBuf,
    env_vars: Vec<(String, String)>,
}

impl HookWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let env_file = temp_dir.path().join(".env");
        Self {
            temp_dir,
            env_file,
            env_vars: Vec::new(),
        }
    }

    /// Write the dotenv file the binary will load.
    pub fn with_env_file(self, contents: &str) -> Self {
        std::fs::write(&self.env_file, contents).expect("Failed to write env file");
        self
    }

    /// Set a process environment variable for every run.
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env_vars.push((key.to_string(), value.to_string()));
        self
    }

    /// Write `contents` to a file in the temp directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Run `taskmail` with `args`, feeding `stdin` (empty when `None`).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str], stdin: Option<&str>) -> Result<HookResult> {
        let mut cmd = Command::cargo_bin("taskmail")
            .map_err(|e| anyhow::anyhow!("Failed to find taskmail binary: {}", e))?;

        for key in RECOGNIZED_KEYS {
            cmd.env_remove(key);
        }
        cmd.env_remove(LOG_ENV_VAR);
        cmd.env(ENV_FILE_VAR, &self.env_file);
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.args(args);
        cmd.write_stdin(stdin.unwrap_or_default());

        let output = cmd.output().context("Failed to execute taskmail")?;

        Ok(HookResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

impl Default for HookWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Captured output of one hook invocation
#[derive(Debug)]
pub struct HookResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl HookResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON (for `--format json` previews).
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.stdout).context("stdout is not valid JSON")
    }
}
