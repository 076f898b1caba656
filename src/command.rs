//! # External Command Module
//!
//! Esecuzione bloccante di comandi esterni con cattura di stdout/stderr.
//! Un exit code diverso da zero è un dato, non un'eccezione: la decisione
//! di interrompere o proseguire spetta al chiamante.

use anyhow::Result;
use tokio::process::Command;
use tracing::debug;

/// Captured result of a finished external command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// True when the command exited with status zero
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs external commands to completion
pub struct CommandRunner;

impl CommandRunner {
    /// Run `cmd`, wait for it to exit, and capture its output.
    ///
    /// Returns `Err` only when the process cannot be spawned; a nonzero
    /// exit status is reported through [`CommandOutput::status`].
    pub async fn run(cmd: &mut Command) -> Result<CommandOutput> {
        debug!("Running command: {:?}", cmd.as_std());

        let output = cmd
            .output()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to execute {:?}: {}", cmd.as_std().get_program(), e))?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
