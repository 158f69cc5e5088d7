//! cindermark: single-pass recursive-descent Markdown to HTML renderer.
//!
//! The renderer tokenizes block structure, tracks nested-list
//! indentation, resolves inline spans and streams escaped HTML in one
//! pass over the input; there is no separate AST stage. Blocks and
//! spans write their own markup to the sink as they are recognized.
//!
//! # Design Principles
//! - Parse-and-emit fused: productions render as they consume
//! - Byte-level scanning through a single backtracking [`Cursor`]
//! - Best-effort output: a parse failure truncates the render and
//!   surfaces a diagnostic; everything written before it stands
//!
//! # Example
//! ```
//! let html = cindermark::to_html("# Hello\n\nWorld");
//! assert_eq!(html, "<h1>Hello</h1>\n<p>World</p>");
//! ```

mod block;
pub mod cursor;
mod document;
pub mod error;
pub mod escape;
pub mod front_matter;
mod inline;
pub mod render;

// Re-export primary types
pub use cursor::Cursor;
pub use error::{ParseErrorKind, RenderError};
pub use front_matter::front_matter_len;
pub use render::HtmlWriter;

use std::io;

/// Render Markdown into an open writable sink.
///
/// `source_name` appears only in diagnostics. HTML fragments are written
/// incrementally as blocks are recognized; on a parse error the partial
/// output already written stands and the error names the source, line
/// and column of the offending construct. The caller owns the sink and
/// is responsible for flushing/closing it.
pub fn render_to<W: io::Write>(
    source_name: &str,
    input: &str,
    out: W,
) -> Result<(), RenderError> {
    let mut cursor = Cursor::new(source_name, input.as_bytes());
    let mut writer = HtmlWriter::new(out);
    document::render_document(&mut cursor, &mut writer)
}

/// Convert Markdown to HTML, best-effort.
///
/// This is the primary API for simple use cases. A parse failure is
/// swallowed and the partial render returned; use [`try_to_html`] or
/// [`render_to`] when the diagnostic matters.
pub fn to_html(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len() + input.len() / 4);
    let _ = render_to("<input>", input, &mut out);
    // SAFETY: input is valid UTF-8 and the renderer only inserts ASCII
    // markup between verbatim input bytes.
    unsafe { String::from_utf8_unchecked(out) }
}

/// Convert Markdown to HTML, surfacing the first parse failure.
pub fn try_to_html(input: &str) -> Result<String, RenderError> {
    let mut out = Vec::with_capacity(input.len() + input.len() / 4);
    render_to("<input>", input, &mut out)?;
    // SAFETY: as in `to_html`.
    Ok(unsafe { String::from_utf8_unchecked(out) })
}
