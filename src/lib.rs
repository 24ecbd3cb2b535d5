//! Folio computes per-character, per-scene dialogue statistics for plays
//! encoded as act/scene/speech markup.
//!
//! The pipeline is `markup -> Play -> {scene labels, speech records} -> ranking -> grid`,
//! see [`engine::PlayStats`].

pub use crate::ast::Play;
pub use crate::engine::PlayStats;
pub use crate::errors::{FolioError, FolioResult};

pub mod ast;
pub mod catalog;
pub mod cli;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod stats;
pub mod syntax;
