//! Error types of documentation writing.

use std::{io, path::PathBuf};

use derive_more::{Display, Error};

/// Error of producing living documentation output.
///
/// [`CreateDir`] and [`WriteDoc`] are fatal for the feature being documented
/// and are propagated to the caller; whether they abort the whole run is the
/// test runner's call. Screenshot capture failures never surface here — they
/// degrade the affected table row instead (see [`CaptureError`]).
///
/// [`CaptureError`]: crate::screenshot::CaptureError
/// [`CreateDir`]: Error::CreateDir
/// [`WriteDoc`]: Error::WriteDoc
#[derive(Debug, Display, Error)]
pub enum Error {
    /// Failed to create a feature's output directory.
    ///
    /// Also raised when the directory already exists: a pre-existing feature
    /// directory means two features map to the same path, which would
    /// silently interleave their screenshots.
    #[display("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// Path of the directory that couldn't be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write a feature's `index.mmark` document.
    #[display("failed to write document {}: {source}", path.display())]
    WriteDoc {
        /// Path of the document that couldn't be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An event arrived while no feature was in progress.
    ///
    /// The runner contract guarantees feature-start before any nested event,
    /// so hitting this means the event stream is malformed.
    #[display("received `{event}` event with no feature in progress")]
    OutOfOrder {
        /// Human-readable name of the offending event.
        event: &'static str,
    },
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
