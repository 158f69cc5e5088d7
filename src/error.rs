//! Error types for rendering.
//!
//! Inline-span failures are recovered locally and never surface here;
//! only block-level failures and sink I/O failures become a
//! [`RenderError`]. A parse error names the source, line and column of
//! the offending construct; HTML already written to the sink before the
//! failure stands as the partial render result.

use std::io;

use thiserror::Error;

use crate::cursor::Cursor;

/// The offending construct behind a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A `#` run not followed by the mandatory space.
    #[error("heading marker must be followed by a space")]
    MalformedHeading,
    /// A ``` fence opened but never closed before end of input.
    #[error("fenced code block is never closed")]
    UnterminatedCodeFence,
}

/// Error surfaced by the document driver.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Block-level parse failure with its source location.
    #[error("{source_name}:{line}:{column}: {kind}")]
    Parse {
        source_name: String,
        line: u32,
        column: u32,
        kind: ParseErrorKind,
    },
    /// The output sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl RenderError {
    /// Build a parse error at the cursor's current position.
    pub(crate) fn parse_at(cursor: &Cursor<'_>, kind: ParseErrorKind) -> Self {
        Self::Parse {
            source_name: cursor.source_name().to_owned(),
            line: cursor.line(),
            column: cursor.column(),
            kind,
        }
    }
}
