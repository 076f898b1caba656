//! # Platform-specific utilities
//!
//! Questo modulo centralizza tutta la logica per la gestione cross-platform
//! dei comandi e delle dipendenze esterne (ffmpeg, ffprobe).

use std::collections::HashMap;
use std::sync::OnceLock;

/// Platform-specific command manager
pub struct PlatformCommands {
    commands: HashMap<&'static str, &'static str>,
    which_command: &'static str,
}

impl PlatformCommands {
    /// Get the singleton instance
    pub fn instance() -> &'static Self {
        static INSTANCE: OnceLock<PlatformCommands> = OnceLock::new();
        INSTANCE.get_or_init(Self::new)
    }

    /// Initialize platform-specific commands
    fn new() -> Self {
        let (commands, which_command) = if cfg!(windows) {
            // Windows commands
            let mut commands = HashMap::new();
            commands.insert("ffmpeg", "ffmpeg.exe");
            commands.insert("ffprobe", "ffprobe.exe");
            (commands, "where")
        } else {
            // Unix-like systems (Linux, macOS)
            let mut commands = HashMap::new();
            commands.insert("ffmpeg", "ffmpeg");
            commands.insert("ffprobe", "ffprobe");
            (commands, "which")
        };

        Self {
            commands,
            which_command,
        }
    }

    /// Get the platform-specific command name
    pub fn get_command<'a>(&self, base_name: &'a str) -> &'a str {
        self.commands.get(base_name).unwrap_or(&base_name)
    }

    /// Get the command used to check if a program exists
    pub fn which_command(&self) -> &str {
        self.which_command
    }

    /// Check if a command is available on the system
    pub async fn is_command_available(&self, base_name: &str) -> bool {
        let command_name = self.get_command(base_name);

        let result = tokio::process::Command::new(self.which_command)
            .arg(command_name)
            .output()
            .await;

        match result {
            Ok(output) => output.status.success(),
            Err(_) => false,
        }
    }

    /// Get system information for diagnostics
    pub fn system_info() -> SystemInfo {
        SystemInfo {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            family: std::env::consts::FAMILY,
        }
    }
}

/// System information structure
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub os: &'static str,
    pub arch: &'static str,
    pub family: &'static str,
}

impl std::fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.os, self.arch, self.family)
    }
}
