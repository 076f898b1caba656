//! # Movie Trimmer Orchestrator
//!
//! Orchestratore principale che scandisce la directory di input e delega
//! l'accorciamento dei singoli film al task trimmer, applicando la policy
//! di errore della batch.

use crate::config::Config;
use crate::file_manager::FileManager;
use crate::platform::PlatformCommands;
use crate::progress::TrimStats;
use crate::trimmer::task_trimmer::{TaskTrimmer, TrimJob, TrimOutcome};
use anyhow::Result;
use std::path::Path;
use tracing::{debug, error, info};

/// Main orchestrator for a trimming run
pub struct MovieTrimmer {
    config: Config,
    task_trimmer: TaskTrimmer,
}

impl MovieTrimmer {
    /// Create a new trimmer after validating the configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let task_trimmer = TaskTrimmer::new(config.clone());

        Ok(Self {
            config,
            task_trimmer,
        })
    }

    /// Scan the input directory and trim every matching movie sequentially
    pub async fn run(&self) -> Result<TrimStats> {
        debug!("Running on {}", PlatformCommands::system_info());
        info!("Scanning directory '{}'", self.config.input_dir.display());

        let files =
            FileManager::find_matching_files(&self.config.input_dir, &self.config.file_type)?;

        if files.is_empty() {
            info!(
                "No matching files found with file type: {}",
                self.config.file_type
            );
            return Ok(TrimStats::new());
        }

        info!(
            "Found {} matching file/s with file type: {}",
            files.len(),
            self.config.file_type
        );

        // External tools are only needed once there is work to do
        TaskTrimmer::check_dependencies().await?;

        let mut stats = TrimStats::new();
        for path in &files {
            match self.process_path(path).await {
                Ok(TrimOutcome::Trimmed { .. }) => stats.add_trimmed(),
                Ok(TrimOutcome::SkippedExisting) => stats.add_skipped(),
                Err(e) => {
                    error!("Error when attempting to trim {}", path.display());
                    error!("Details: {}", e);
                    stats.add_error();

                    if !self.config.keep_going {
                        info!("{}", stats.format_summary());
                        return Err(e);
                    }
                }
            }
        }

        info!("✅ Movie trimming completed.");
        info!("{}", stats.format_summary());

        Ok(stats)
    }

    /// Build and process the job for one matched file
    async fn process_path(&self, path: &Path) -> Result<TrimOutcome> {
        let job = TrimJob::new(path, &self.config.output_dir)?;
        self.task_trimmer.process_file(&job).await
    }
}
