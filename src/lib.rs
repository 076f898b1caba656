//! # Movie Trimmer Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Responsabilità:
//! - Definisce la struttura modulare dell'applicazione
//! - Espone i tipi e le funzioni principali tramite re-exports
//! - Fornisce un'interfaccia pulita per il main.rs e per altri consumatori
//!
//! ## Architettura dei moduli:
//! - `config`: Gestione configurazione e validazione parametri
//! - `error`: Tipi di errore custom per le diverse operazioni
//! - `command`: Esecuzione di comandi esterni con output catturato
//! - `platform`: Risoluzione cross-platform di ffmpeg/ffprobe
//! - `file_manager`: Discovery dei film e gestione timestamp
//! - `trimmer`: Orchestratore della batch e worker per i singoli film
//! - `progress`: Statistiche della run
//!
//! ## Utilizzo:
//! ```rust,ignore
//! use movie_trimmer::{Config, MovieTrimmer};
//!
//! let trimmer = MovieTrimmer::new(config)?;
//! let stats = trimmer.run().await?;
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod file_manager;
pub mod platform;
pub mod progress;
pub mod trimmer;

pub use config::Config;
pub use error::TrimError;
pub use progress::TrimStats;
pub use trimmer::{MovieTrimmer, TrimJob, TrimOutcome};
