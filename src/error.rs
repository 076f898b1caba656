//! # Error Types Module
//!
//! Questo modulo definisce tutti i tipi di errore custom dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce `TrimError` enum per categorizzare tutti gli errori possibili
//! - Fornisce messaggi di errore descrittivi e strutturati
//! - Integra con `thiserror` per automatic error conversion
//!
//! ## Categorie di errori:
//! - `Io`: Errori di I/O (file non trovati, permessi, etc.)
//! - `MissingArgument`: Flag obbligatorio assente sulla command line
//! - `DirectoryNotFound`: Directory di input/output inesistente
//! - `FFmpeg`: Errori dei subprocess ffmpeg/ffprobe
//! - `ProbeOutput`: Output di ffprobe non numerico o non finito
//! - `MissingDependency`: Tool esterno mancante (ffmpeg, ffprobe)
//! - `Validation`: Errori di validazione input
//!
//! ## Esempio:
//! ```rust,ignore
//! if !tool_exists {
//!     return Err(TrimError::MissingDependency("ffmpeg".to_string()));
//! }
//! ```

use std::path::PathBuf;

/// Custom error types for movie trimming
#[derive(thiserror::Error, Debug)]
pub enum TrimError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing argument: no {0} has been supplied")]
    MissingArgument(String),

    #[error("directory {} does not exist. Movie trimming aborted", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("FFmpeg error: {0}")]
    FFmpeg(String),

    #[error("malformed probe output: {0:?} is not a finite duration")]
    ProbeOutput(String),

    #[error("Dependency missing: {0}")]
    MissingDependency(String),

    #[error("File validation error: {0}")]
    Validation(String),
}
