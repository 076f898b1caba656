//! # Trimmer Module
//!
//! Separazione delle responsabilità in sottomoduli:
//! - `movie_trimmer`: Orchestratore principale della batch
//! - `task_trimmer`: Worker per l'accorciamento dei singoli film

pub mod movie_trimmer;
pub mod task_trimmer;

pub use movie_trimmer::MovieTrimmer;
pub use task_trimmer::{TaskTrimmer, TrimJob, TrimOutcome};
