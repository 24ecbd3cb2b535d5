//! Folio Error Handling
//!
//! Every failure the library can produce is a variant of [`FolioError`]. Each variant
//! carries a stable diagnostic code (`folio::<area>::<kind>`) so the CLI can render it
//! through `miette` and tests can match on it without comparing strings.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Convenience alias used across the crate.
pub type FolioResult<T> = Result<T, FolioError>;

/// The single error type for markup reading, statistics and the CLI collaborators.
#[derive(Debug, Error, Diagnostic)]
pub enum FolioError {
    // ------------------------------------------------------------------------
    // Engine errors
    // ------------------------------------------------------------------------
    /// Numeral conversion was asked for a value outside `0..=3999`.
    #[error("cannot convert {value} to a Roman numeral: supported range is 0 to 3999")]
    #[diagnostic(code(folio::numeral::out_of_range))]
    OutOfRange { value: i64 },

    /// A speech has no speaker designation.
    #[error("malformed speech in scene {scene_index}: no speaker designation")]
    #[diagnostic(
        code(folio::stats::malformed_speech),
        help("every SPEECH element needs a non-empty SPEAKER child")
    )]
    MalformedSpeech { scene_index: usize },

    // ------------------------------------------------------------------------
    // Input errors
    // ------------------------------------------------------------------------
    /// The play markup is not well-formed XML.
    #[error("malformed play markup: {message}")]
    #[diagnostic(code(folio::syntax::markup))]
    Markup {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    /// A catalog line could not be read as `<name>,<slug>`.
    #[error("invalid catalog entry on line {line}: {message}")]
    #[diagnostic(
        code(folio::catalog::entry),
        help("catalog lines have the form `<display name>,<slug>`")
    )]
    Catalog { line: usize, message: String },

    /// Neither a play file nor a catalog index was given.
    #[error("no play selected")]
    #[diagnostic(
        code(folio::cli::no_play),
        help("pass a markup file path or `--play <N>`")
    )]
    NoPlay,

    /// A catalog lookup used an index past the end of the catalog.
    #[error("play index {index} is out of range: the catalog has {len} entries")]
    #[diagnostic(code(folio::catalog::index))]
    PlayIndex { index: usize, len: usize },

    // ------------------------------------------------------------------------
    // I/O and serialization
    // ------------------------------------------------------------------------
    #[error("failed to access '{}'", .path.display())]
    #[diagnostic(code(folio::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk directory '{}'", .path.display())]
    #[diagnostic(code(folio::io::walk))]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to write CSV output")]
    #[diagnostic(code(folio::output::csv))]
    Csv(#[from] csv::Error),

    #[error("failed to write JSON output")]
    #[diagnostic(code(folio::output::json))]
    Json(#[from] serde_json::Error),
}

impl FolioError {
    /// Builds a markup error pointing at `offset` inside `source`.
    pub fn markup(
        message: impl Into<String>,
        name: &str,
        source: &str,
        offset: usize,
    ) -> Self {
        let offset = offset.min(source.len());
        FolioError::Markup {
            message: message.into(),
            src: NamedSource::new(name, source.to_string()),
            span: SourceSpan::from(offset..offset),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FolioError::Io {
            path: path.into(),
            source,
        }
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Prints a FolioError with full miette diagnostics to stderr.
pub fn print_error(error: FolioError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
