//! # File Management Module
//!
//! Questo modulo gestisce tutte le operazioni sui file e la discovery dei film.
//!
//! ## Responsabilità:
//! - Discovery non ricorsiva dei file che corrispondono all'estensione scelta
//! - Lettura del modification time dei sorgenti
//! - Propagazione dei timestamp sui file accorciati
//!
//! ## Matching:
//! - Solo le entry immediate della directory di input (nessuna ricorsione)
//! - Suffisso esatto `.<estensione>`, case-sensitive
//! - Ordine = ordine di listing della directory, non ordinato
//!
//! ## Timestamp:
//! - `modification_time()`: Legge il last-modified di un file
//! - `copy_timestamps()`: Applica lo stesso timestamp ad access e modification time
//!
//! ## Esempio:
//! ```rust,ignore
//! let files = FileManager::find_matching_files(&input_dir, "mov")?;
//! for file in files {
//!     let timestamp = FileManager::modification_time(&file)?;
//!     // trim, then copy timestamps onto the output
//! }
//! ```

use anyhow::{Context, Result};
use filetime::FileTime;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Manages file operations and discovery
pub struct FileManager;

impl FileManager {
    /// List the files in `dir` whose name ends with `.<file_type>`.
    ///
    /// Non-recursive, case-sensitive, in directory listing order. A failed
    /// listing (e.g. permission error) is a hard error.
    pub fn find_matching_files(dir: &Path, file_type: &str) -> Result<Vec<PathBuf>> {
        let suffix = format!(".{}", file_type);
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry =
                entry.with_context(|| format!("Failed to list directory {}", dir.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name().to_string_lossy().ends_with(&suffix) {
                files.push(entry.path().to_path_buf());
            }
        }

        Ok(files)
    }

    /// Last-modified timestamp of a file
    pub fn modification_time(path: &Path) -> Result<FileTime> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Failed to read metadata for {}", path.display()))?;
        Ok(FileTime::from_last_modification_time(&metadata))
    }

    /// Set both access and modification times of `path` to `timestamp`
    pub fn copy_timestamps(path: &Path, timestamp: FileTime) -> Result<()> {
        filetime::set_file_times(path, timestamp, timestamp)
            .with_context(|| format!("Failed to set timestamps on {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"data").unwrap();
        path
    }

    #[test]
    fn test_find_matching_files_filters_by_suffix() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.mov");
        touch(dir.path(), "b.txt");
        touch(dir.path(), "c.mov.bak");

        let files = FileManager::find_matching_files(dir.path(), "mov").unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.mov"]);
    }

    #[test]
    fn test_find_matching_files_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "upper.MOV");
        touch(dir.path(), "lower.mov");

        let files = FileManager::find_matching_files(dir.path(), "mov").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "lower.mov");
    }

    #[test]
    fn test_find_matching_files_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "top.mov");
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        touch(&nested, "deep.mov");

        let files = FileManager::find_matching_files(dir.path(), "mov").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "top.mov");
    }

    #[test]
    fn test_find_matching_files_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        assert!(FileManager::find_matching_files(&missing, "mov").is_err());
    }

    #[test]
    fn test_copy_timestamps() {
        let dir = TempDir::new().unwrap();
        let source = touch(dir.path(), "source.mov");
        let target = touch(dir.path(), "target.mov");

        let timestamp = FileTime::from_unix_time(1_600_000_000, 0);
        filetime::set_file_times(&source, timestamp, timestamp).unwrap();

        let read_back = FileManager::modification_time(&source).unwrap();
        assert_eq!(read_back, timestamp);

        FileManager::copy_timestamps(&target, read_back).unwrap();
        assert_eq!(FileManager::modification_time(&target).unwrap(), timestamp);
    }
}
