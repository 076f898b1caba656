//! # Configuration Management Module
//!
//! Questo modulo gestisce tutta la configurazione dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` con tutti i parametri di trimming
//! - Fornisce validazione robusta dei parametri di input
//! - Rende espliciti frame rate e frame da rimuovere invece di costanti nascoste
//!
//! ## Parametri di configurazione:
//! - `file_type`: Estensione dei file da processare (es. "mov")
//! - `input_dir`: Directory contenente i film da accorciare
//! - `output_dir`: Directory dove salvare i film accorciati
//! - `fps`: Frame rate atteso dei sorgenti (default: 25.0)
//! - `frames_to_trim`: Numero di frame finali da rimuovere (default: 1)
//! - `keep_going`: Continua con i file rimanenti se uno fallisce (default: false)
//!
//! ## Validazione:
//! - Controlla che file_type non sia vuoto
//! - Controlla che fps sia finito e positivo
//! - Controlla che le directory di input e output esistano
//!
//! ## Esempio:
//! ```rust,ignore
//! let config = Config {
//!     file_type: "mov".to_string(),
//!     input_dir: PathBuf::from("/movies/raw"),
//!     output_dir: PathBuf::from("/movies/trimmed"),
//!     ..
//! };
//! config.validate()?;
//! ```

use crate::error::TrimError;
use anyhow::Result;
use std::path::PathBuf;

/// Default frame rate assumed for source movies.
pub const DEFAULT_FPS: f64 = 25.0;

/// Default number of trailing frames removed from each movie.
pub const DEFAULT_FRAMES_TO_TRIM: u32 = 1;

/// Configuration for a trimming run
#[derive(Debug, Clone)]
pub struct Config {
    /// Extension of the files to trim, without the leading dot
    pub file_type: String,
    /// Directory containing the movies being trimmed
    pub input_dir: PathBuf,
    /// Directory where trimmed movies will be saved
    pub output_dir: PathBuf,
    /// Expected frames per second of the source movies
    pub fps: f64,
    /// Number of trailing frames to remove
    pub frames_to_trim: u32,
    /// Continue with the remaining files when one fails
    pub keep_going: bool,
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.file_type.is_empty() {
            return Err(TrimError::MissingArgument("fileType parameter".to_string()).into());
        }

        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(TrimError::Validation(format!(
                "frames per second must be a positive number, got {}",
                self.fps
            ))
            .into());
        }

        // Existence check only, no directory-vs-file distinction
        if !self.input_dir.exists() {
            return Err(TrimError::DirectoryNotFound(self.input_dir.clone()).into());
        }

        if !self.output_dir.exists() {
            return Err(TrimError::DirectoryNotFound(self.output_dir.clone()).into());
        }

        Ok(())
    }

    /// Suffix matched against directory entries, e.g. ".mov"
    pub fn extension_suffix(&self) -> String {
        format!(".{}", self.file_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn valid_config(input: &TempDir, output: &TempDir) -> Config {
        Config {
            file_type: "mov".to_string(),
            input_dir: input.path().to_path_buf(),
            output_dir: output.path().to_path_buf(),
            fps: DEFAULT_FPS,
            frames_to_trim: DEFAULT_FRAMES_TO_TRIM,
            keep_going: false,
        }
    }

    #[test]
    fn test_config_validation() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        let mut config = valid_config(&input, &output);
        assert!(config.validate().is_ok());

        config.file_type = String::new();
        assert!(config.validate().is_err());

        config.file_type = "mov".to_string();
        config.fps = 0.0;
        assert!(config.validate().is_err());

        config.fps = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_missing_directories() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        let mut config = valid_config(&input, &output);
        config.input_dir = input.path().join("does-not-exist");
        assert!(config.validate().is_err());

        let mut config = valid_config(&input, &output);
        config.output_dir = output.path().join("does-not-exist");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_extension_suffix() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        let config = valid_config(&input, &output);
        assert_eq!(config.extension_suffix(), ".mov");
    }
}
