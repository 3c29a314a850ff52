//! Error types for polygon loading.

use thiserror::Error;

/// Errors reported by the loop-file loader.
///
/// The Boolean core itself never fails; geometric pathologies collapse into
/// empty contributions instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file that failed.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A data line held fewer than two coordinate tokens.
    #[error("line {line}: expected two coordinates")]
    MissingCoordinate {
        /// 1-based line number.
        line: usize,
    },

    /// A coordinate token did not parse as a number.
    #[error("line {line}: invalid coordinate {token:?}")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The file contained no loop to use as the outer boundary.
    #[error("no outer loop found")]
    NoOuterLoop,
}
