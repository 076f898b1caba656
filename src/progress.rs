//! # Statistics Module
//!
//! Questo modulo traccia le statistiche cumulative di una run di trimming.
//!
//! ## Statistiche tracciate:
//! - **files_processed**: Totale file elaborati
//! - **files_trimmed**: File effettivamente accorciati
//! - **files_skipped**: File saltati (output già esistente)
//! - **errors**: Numero di errori durante il processing
//!
//! ## Esempio:
//! ```rust,ignore
//! let mut stats = TrimStats::new();
//! stats.add_trimmed();
//! info!("{}", stats.format_summary());
//! ```

/// Statistics tracker for trimming results
#[derive(Debug, Default)]
pub struct TrimStats {
    pub files_processed: usize,
    pub files_trimmed: usize,
    pub files_skipped: usize,
    pub errors: usize,
}

impl TrimStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_trimmed(&mut self) {
        self.files_processed += 1;
        self.files_trimmed += 1;
    }

    pub fn add_skipped(&mut self) {
        self.files_processed += 1;
        self.files_skipped += 1;
    }

    pub fn add_error(&mut self) {
        self.files_processed += 1;
        self.errors += 1;
    }

    pub fn format_summary(&self) -> String {
        format!(
            "Processed: {} files | Trimmed: {} | Skipped: {} | Errors: {}",
            self.files_processed, self.files_trimmed, self.files_skipped, self.errors
        )
    }
}
