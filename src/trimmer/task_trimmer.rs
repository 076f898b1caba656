//! # Task Trimmer Module
//!
//! Worker per l'accorciamento di un singolo film.
//! Separato dall'orchestratore principale per maggiore modularità.
//!
//! ## Pipeline per ogni file:
//! 1. Soft skip se il file di output esiste già (nessuna sovrascrittura)
//! 2. Analizza la durata totale del sorgente con ffprobe
//! 3. Calcola la durata voluta: `(durata * fps - frame_da_rimuovere) / fps`
//! 4. Rimuxa con ffmpeg in stream copy (`-c copy`, nessuna ricodifica),
//!    limitato alla durata voluta e con `creation_time` impostato al
//!    modification time del sorgente in formato ISO 8601
//! 5. Propaga access e modification time del sorgente sul file di output
//!
//! ## Aritmetica dei frame:
//! Floating point puro, nessun arrotondamento o clamping: un sorgente più
//! corto dei frame da rimuovere produce una durata negativa che viene
//! passata a ffmpeg così com'è (contratto del tool esterno).
//!
//! ## Dipendenze richieste:
//! - `ffprobe`: Analisi della durata
//! - `ffmpeg`: Remux in stream copy

use crate::command::CommandRunner;
use crate::config::Config;
use crate::error::TrimError;
use crate::file_manager::FileManager;
use crate::platform::PlatformCommands;
use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use filetime::FileTime;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info, warn};

/// A single trimming job, created per matched file
#[derive(Debug, Clone)]
pub struct TrimJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Last-modified time of the source, never mutated
    pub timestamp: FileTime,
}

impl TrimJob {
    /// Build a job for `input_path`, placing the output under `output_dir`
    /// with the same file name.
    pub fn new(input_path: &Path, output_dir: &Path) -> Result<Self> {
        let file_name = input_path.file_name().ok_or_else(|| {
            TrimError::Validation(format!("{} has no file name", input_path.display()))
        })?;
        let timestamp = FileManager::modification_time(input_path)?;

        Ok(Self {
            input_path: input_path.to_path_buf(),
            output_path: output_dir.join(file_name),
            timestamp,
        })
    }
}

/// Result of processing a single job
#[derive(Debug, Clone, PartialEq)]
pub enum TrimOutcome {
    /// A trimmed copy was written, bounded to `wanted_duration` seconds
    Trimmed { wanted_duration: f64 },
    /// The output already existed and was left untouched
    SkippedExisting,
}

/// Duration in seconds of a movie shortened by `frames_to_trim` trailing
/// frames at `fps`. Plain floating point, no rounding or clamping.
pub fn wanted_duration(total_duration: f64, fps: f64, frames_to_trim: u32) -> f64 {
    let total_frames = total_duration * fps;
    let wanted_frames = total_frames - f64::from(frames_to_trim);
    wanted_frames / fps
}

/// Render a timestamp as ISO 8601 UTC with millisecond precision,
/// e.g. `2020-09-13T12:26:40.000Z`.
pub fn format_creation_time(timestamp: FileTime) -> Result<String> {
    let datetime = DateTime::<Utc>::from_timestamp(timestamp.unix_seconds(), timestamp.nanoseconds())
        .ok_or_else(|| {
            TrimError::Validation(format!(
                "timestamp {}s out of range",
                timestamp.unix_seconds()
            ))
        })?;
    Ok(datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Parse ffprobe stdout as a duration in seconds.
/// Non-numeric or non-finite output is rejected with a distinct error.
fn parse_probed_duration(raw: &str) -> Result<f64> {
    let text = raw.trim();
    let duration: f64 = text
        .parse()
        .map_err(|_| TrimError::ProbeOutput(text.to_string()))?;
    if !duration.is_finite() {
        return Err(TrimError::ProbeOutput(text.to_string()).into());
    }
    Ok(duration)
}

/// Handles trimming of single movies
pub struct TaskTrimmer {
    config: Config,
}

impl TaskTrimmer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Check if required tools are available
    pub async fn check_dependencies() -> Result<()> {
        let platform = PlatformCommands::instance();
        let tools = ["ffmpeg", "ffprobe"];

        for tool in &tools {
            if !platform.is_command_available(tool).await {
                return Err(TrimError::MissingDependency(format!(
                    "{} is required for movie trimming",
                    tool
                ))
                .into());
            }
        }

        Ok(())
    }

    /// Process a single job: skip, probe, trim, copy timestamps
    pub async fn process_file(&self, job: &TrimJob) -> Result<TrimOutcome> {
        info!(
            "🎬 Processing file {}",
            job.input_path.file_name().unwrap_or_default().to_string_lossy()
        );

        if job.output_path.exists() {
            warn!(
                "file {} already exists. We will NOT overwrite it. Movie trimming aborted.",
                job.output_path.display()
            );
            return Ok(TrimOutcome::SkippedExisting);
        }

        // ffprobe establishes the movie duration; together with the expected
        // frame rate that gives the total number of frames.
        let total_duration = self.probe_duration(&job.input_path).await?;
        let total_frames = total_duration * self.config.fps;
        info!(
            "Movie duration is {} seconds and contains {} frames",
            total_duration, total_frames
        );

        let wanted = wanted_duration(total_duration, self.config.fps, self.config.frames_to_trim);
        info!(
            "Movie will be trimmed to {} seconds, containing {} frames",
            wanted,
            wanted * self.config.fps
        );

        self.remux(job, wanted).await?;

        // finally set timestamps on the trimmed file to match the original
        FileManager::copy_timestamps(&job.output_path, job.timestamp)?;

        Ok(TrimOutcome::Trimmed {
            wanted_duration: wanted,
        })
    }

    /// Probe the total duration of `input` in seconds using ffprobe
    async fn probe_duration(&self, input: &Path) -> Result<f64> {
        let platform = PlatformCommands::instance();
        let ffprobe = platform.get_command("ffprobe");

        let mut cmd = Command::new(ffprobe);
        cmd.args([
            "-v",
            "0",
            "-show_entries",
            "format=duration",
            "-of",
            "compact=p=0:nk=1",
        ])
        .arg(input);

        let output = CommandRunner::run(&mut cmd).await?;
        if !output.success() {
            return Err(TrimError::FFmpeg(format!(
                "ffprobe failed for {}: {}",
                input.display(),
                output.stderr.trim()
            ))
            .into());
        }

        parse_probed_duration(&output.stdout)
    }

    /// Remux the source into the output path, bounded to `duration` seconds
    async fn remux(&self, job: &TrimJob, duration: f64) -> Result<()> {
        let platform = PlatformCommands::instance();
        let ffmpeg = platform.get_command("ffmpeg");
        let creation_time = format_creation_time(job.timestamp)?;

        // '-c copy' repackages the streams without re-encoding; the embedded
        // creation_time is stamped from the source modification time.
        let mut cmd = Command::new(ffmpeg);
        cmd.arg("-t")
            .arg(duration.to_string())
            .arg("-i")
            .arg(&job.input_path)
            .args(["-c", "copy", "-map", "0", "-metadata"])
            .arg(format!("creation_time={}", creation_time))
            .arg(&job.output_path)
            .args(["-loglevel", "warning"]);

        debug!(
            "Trimming {} to {} seconds",
            job.input_path.display(),
            duration
        );

        let output = CommandRunner::run(&mut cmd).await?;
        if !output.success() {
            return Err(TrimError::FFmpeg(format!(
                "ffmpeg failed for {}: {}",
                job.input_path.display(),
                output.stderr.trim()
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(input: &TempDir, output: &TempDir) -> Config {
        Config {
            file_type: "mov".to_string(),
            input_dir: input.path().to_path_buf(),
            output_dir: output.path().to_path_buf(),
            fps: 25.0,
            frames_to_trim: 1,
            keep_going: false,
        }
    }

    #[test]
    fn test_wanted_duration_matches_frame_arithmetic() {
        // 10.04s at 25 fps = 251 frames; dropping one leaves exactly 10s
        let wanted = wanted_duration(10.04, 25.0, 1);
        assert!((wanted - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_wanted_duration_zero_trim_is_identity() {
        let wanted = wanted_duration(42.0, 25.0, 0);
        assert!((wanted - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_wanted_duration_shorter_than_one_frame_goes_negative() {
        // No clamping: the negative bound is handed to ffmpeg as-is
        let wanted = wanted_duration(0.02, 25.0, 1);
        assert!(wanted < 0.0);
    }

    #[test]
    fn test_parse_probed_duration() {
        assert_eq!(parse_probed_duration("10.04\n").unwrap(), 10.04);
        assert_eq!(parse_probed_duration("0").unwrap(), 0.0);
        assert!(parse_probed_duration("garbage").is_err());
        assert!(parse_probed_duration("NaN").is_err());
        assert!(parse_probed_duration("inf").is_err());
        assert!(parse_probed_duration("").is_err());
    }

    #[test]
    fn test_format_creation_time() {
        let timestamp = FileTime::from_unix_time(1_600_000_000, 0);
        assert_eq!(
            format_creation_time(timestamp).unwrap(),
            "2020-09-13T12:26:40.000Z"
        );
    }

    #[test]
    fn test_trim_job_captures_source_timestamp() {
        let input_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let input = input_dir.path().join("a.mov");
        std::fs::write(&input, b"movie").unwrap();

        let timestamp = FileTime::from_unix_time(1_600_000_000, 0);
        filetime::set_file_times(&input, timestamp, timestamp).unwrap();

        let job = TrimJob::new(&input, output_dir.path()).unwrap();
        assert_eq!(job.timestamp, timestamp);
        assert_eq!(job.input_path, input);
        assert_eq!(job.output_path, output_dir.path().join("a.mov"));
    }

    #[tokio::test]
    async fn test_existing_output_is_soft_skipped() {
        let input_dir = TempDir::new().unwrap();
        let output_dir = TempDir::new().unwrap();
        let input = input_dir.path().join("a.mov");
        std::fs::write(&input, b"movie").unwrap();
        let existing = output_dir.path().join("a.mov");
        std::fs::write(&existing, b"already here").unwrap();

        let trimmer = TaskTrimmer::new(test_config(&input_dir, &output_dir));
        let job = TrimJob::new(&input, output_dir.path()).unwrap();

        let outcome = trimmer.process_file(&job).await.unwrap();
        assert_eq!(outcome, TrimOutcome::SkippedExisting);

        // The existing output must be left untouched
        assert_eq!(std::fs::read(&existing).unwrap(), b"already here");
    }
}
