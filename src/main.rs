//! # Movie Trimmer - Main Entry Point
//!
//! Questo è il punto di ingresso principale dell'applicazione.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing`
//! - Validazione degli input dell'utente
//! - Creazione della configurazione e avvio del trimmer
//!
//! ## Flusso di esecuzione:
//! 1. Parsa gli argomenti CLI (fileType, input, output, fps, etc.)
//! 2. Configura il logging (INFO o DEBUG a seconda del flag verbose)
//! 3. Valida che fileType sia presente e che le directory esistano
//! 4. Crea un oggetto Config e avvia il MovieTrimmer
//!
//! ## Esempio di utilizzo:
//! ```bash
//! movie-trimmer --file-type mov --input /movies/raw --output /movies/trimmed
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use movie_trimmer::config::{DEFAULT_FPS, DEFAULT_FRAMES_TO_TRIM};
use movie_trimmer::{Config, MovieTrimmer, TrimError};

#[derive(Parser)]
#[command(name = "movie-trimmer")]
#[command(about = "Trim trailing frames from movies without re-encoding")]
struct Args {
    /// Type of files to trim, e.g. mov
    #[arg(short = 'f', long = "file-type", alias = "fileType")]
    file_type: Option<String>,

    /// Absolute path to directory containing movies being trimmed
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Absolute path to directory where trimmed movies will be saved
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Expected frames per second of the source movies
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: f64,

    /// Number of trailing frames to remove from each movie
    #[arg(long, default_value_t = DEFAULT_FRAMES_TO_TRIM)]
    trim_frames: u32,

    /// Continue with the remaining files when one fails
    #[arg(long)]
    keep_going: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Validate arguments; a missing mandatory flag exits with status 1
    // instead of clap's usage error.
    let file_type = args
        .file_type
        .ok_or_else(|| TrimError::MissingArgument("fileType parameter".to_string()))?;
    let input_dir = args
        .input
        .ok_or_else(|| TrimError::MissingArgument("input directory".to_string()))?;
    let output_dir = args
        .output
        .ok_or_else(|| TrimError::MissingArgument("output directory".to_string()))?;

    if !input_dir.exists() {
        return Err(TrimError::DirectoryNotFound(input_dir).into());
    }
    if !output_dir.exists() {
        return Err(TrimError::DirectoryNotFound(output_dir).into());
    }

    let config = Config {
        file_type,
        input_dir,
        output_dir,
        fps: args.fps,
        frames_to_trim: args.trim_frames,
        keep_going: args.keep_going,
    };

    let trimmer = MovieTrimmer::new(config)?;
    trimmer.run().await?;

    Ok(())
}
