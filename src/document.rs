//! Document driver.
//!
//! Owns the block loop: skip leading blank lines, parse one block,
//! consume the inter-block blank-line run (re-emitting it as a single
//! literal newline when more input follows), repeat until the input is
//! exhausted. The first block failure stops the loop and surfaces a
//! diagnostic; HTML already written to the sink stays put, so a
//! malformed tail never destroys a rendered prefix.

use std::io::Write;

use crate::block;
use crate::cursor::Cursor;
use crate::error::RenderError;
use crate::render::HtmlWriter;

/// Render every block in the input to the sink.
pub(crate) fn render_document<W: Write>(
    cursor: &mut Cursor<'_>,
    out: &mut HtmlWriter<W>,
) -> Result<(), RenderError> {
    loop {
        while cursor.eat(b'\n') {}
        if cursor.is_eof() {
            return Ok(());
        }
        block::parse_block(cursor, out)?;
        let mut saw_blank = false;
        while cursor.eat(b'\n') {
            saw_blank = true;
        }
        if saw_blank && !cursor.is_eof() {
            out.write_str("\n")?;
        }
    }
}
