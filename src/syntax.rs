//! Syntax module for play markup.
//!
//! Reads the act/scene/speech hierarchy and the roster out of play markup and
//! hands the engine an immutable [`crate::ast::Play`].

pub mod parser;

pub use parser::parse_play;
