//! Error types for the chart rendering pipeline.
//!
//! Covers deserialization of the input case list, filesystem I/O, and
//! failures reported by the drawing backend.

use std::backtrace::Backtrace;
use std::fmt;

/// Error type for chart rendering operations.
///
/// Uses the canonical struct pattern with backtrace capture and
/// `is_xxx()` helper methods; the kind enum stays internal so the
/// public API is stable across backend changes.
#[derive(Debug)]
pub struct PlotError {
    kind: PlotErrorKind,
    backtrace: Backtrace,
}

/// Internal error variants. Not exposed publicly; use `is_xxx()` methods.
#[derive(Debug)]
pub(crate) enum PlotErrorKind {
    /// Failed to deserialize the input case list JSON.
    Deserialize(serde_json::Error),
    /// I/O error when reading input or preparing the output directory.
    Io(std::io::Error),
    /// The drawing backend failed while building or saving a chart.
    Render(String),
}

impl PlotError {
    /// Creates an error from an error kind, capturing a backtrace.
    pub(crate) fn new(kind: PlotErrorKind) -> Self {
        Self {
            kind,
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a deserialization error.
    pub(crate) fn deserialize(err: serde_json::Error) -> Self {
        Self::new(PlotErrorKind::Deserialize(err))
    }

    /// Creates a render error from any backend error.
    ///
    /// The drawing backend's error type is generic over the backend, so
    /// only its rendered message is carried.
    pub(crate) fn render(err: impl fmt::Display) -> Self {
        Self::new(PlotErrorKind::Render(err.to_string()))
    }

    /// Returns true if this error is due to deserialization failure.
    pub fn is_deserialize(&self) -> bool {
        matches!(self.kind, PlotErrorKind::Deserialize(_))
    }

    /// Returns true if this error is due to I/O failure.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, PlotErrorKind::Io(_))
    }

    /// Returns true if this error came from the drawing backend.
    pub fn is_render(&self) -> bool {
        matches!(self.kind, PlotErrorKind::Render(_))
    }

    /// Returns the backtrace captured when this error was created.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for PlotErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotErrorKind::Deserialize(err) => {
                write!(f, "failed to deserialize case list: {err}")
            }
            PlotErrorKind::Io(err) => write!(f, "I/O error: {err}"),
            PlotErrorKind::Render(msg) => {
                write!(f, "chart rendering failed: {msg}")
            }
        }
    }
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Summary of what happened.
        writeln!(f, "{}", self.kind)?;

        // Backtrace (will be empty unless RUST_BACKTRACE is set).
        write!(f, "{}", self.backtrace)
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            PlotErrorKind::Deserialize(err) => Some(err),
            PlotErrorKind::Io(err) => Some(err),
            PlotErrorKind::Render(_) => None,
        }
    }
}

impl From<std::io::Error> for PlotError {
    fn from(err: std::io::Error) -> Self {
        Self::new(PlotErrorKind::Io(err))
    }
}
