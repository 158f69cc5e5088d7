//! Block dispatcher.
//!
//! Block productions are tried in a fixed priority order (heading,
//! list, block quote, fenced code, literal HTML, paragraph) with
//! first-success semantics. A production that does not recognize its
//! opening token reports [`Parsed::NoMatch`] without consuming, so the
//! next candidate sees the same input; the paragraph fallback always
//! matches. No state persists between blocks.

mod list;

use std::io::{self, Write};

use memchr::memmem;

use crate::cursor::Cursor;
use crate::error::{ParseErrorKind, RenderError};
use crate::inline;
use crate::render::HtmlWriter;

/// Outcome of trying one block production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Parsed {
    /// The production consumed its block and wrote its HTML.
    Match,
    /// The opening token was not recognized; nothing was consumed.
    NoMatch,
}

/// Parse one block at the cursor and emit its HTML.
pub(crate) fn parse_block<W: Write>(
    cursor: &mut Cursor<'_>,
    out: &mut HtmlWriter<W>,
) -> Result<(), RenderError> {
    if heading(cursor, out)? == Parsed::Match {
        return Ok(());
    }
    if list::list(cursor, out)? == Parsed::Match {
        return Ok(());
    }
    if block_quote(cursor, out)? == Parsed::Match {
        return Ok(());
    }
    if code_fence(cursor, out)? == Parsed::Match {
        return Ok(());
    }
    if literal_html(cursor, out)? == Parsed::Match {
        return Ok(());
    }
    paragraph(cursor, out)
}

/// `#`-run heading. The space after the run is mandatory; a missing
/// space is a hard parse error, not a fallthrough to paragraph.
fn heading<W: Write>(
    cursor: &mut Cursor<'_>,
    out: &mut HtmlWriter<W>,
) -> Result<Parsed, RenderError> {
    if !cursor.at(b'#') {
        return Ok(Parsed::NoMatch);
    }
    let start = cursor.save();
    let mut level = 0usize;
    while cursor.eat(b'#') {
        level += 1;
    }
    if !cursor.eat(b' ') {
        cursor.restore(start);
        return Err(RenderError::parse_at(cursor, ParseErrorKind::MalformedHeading));
    }
    out.heading_start(level)?;
    inline::line_text(cursor, out)?;
    cursor.eat(b'\n');
    out.heading_end(level)?;
    Ok(Parsed::Match)
}

/// `>`-prefixed quote. Consecutive quoted lines are joined with a
/// single space; the quote ends at the first unquoted or blank line.
fn block_quote<W: Write>(
    cursor: &mut Cursor<'_>,
    out: &mut HtmlWriter<W>,
) -> Result<Parsed, RenderError> {
    if !cursor.at(b'>') {
        return Ok(Parsed::NoMatch);
    }
    out.blockquote_start()?;
    let mut first = true;
    while cursor.eat(b'>') {
        while cursor.eat(b' ') {}
        if !first {
            out.write_str(" ")?;
        }
        first = false;
        inline::line_text(cursor, out)?;
        if !cursor.eat(b'\n') {
            break;
        }
    }
    out.blockquote_end()?;
    Ok(Parsed::Match)
}

/// Triple-backtick fenced code block. The info token after the opening
/// fence is consumed and discarded; body lines get only `<`/`>`
/// escaped; a fence never closed before end of input is a parse error
/// reported at the opening fence.
fn code_fence<W: Write>(
    cursor: &mut Cursor<'_>,
    out: &mut HtmlWriter<W>,
) -> Result<Parsed, RenderError> {
    if !cursor.at(b'`') {
        return Ok(Parsed::NoMatch);
    }
    let start = cursor.save();
    if !cursor.eat_literal(b"```") {
        return Ok(Parsed::NoMatch);
    }
    while !cursor.is_eof() && !cursor.at(b'\n') {
        cursor.bump();
    }
    if !cursor.eat(b'\n') {
        cursor.restore(start);
        return Err(RenderError::parse_at(cursor, ParseErrorKind::UnterminatedCodeFence));
    }
    out.code_block_start()?;
    loop {
        if cursor.is_eof() {
            cursor.restore(start);
            return Err(RenderError::parse_at(cursor, ParseErrorKind::UnterminatedCodeFence));
        }
        if cursor.eat_literal(b"```") {
            while !cursor.is_eof() && !cursor.at(b'\n') {
                cursor.bump();
            }
            cursor.eat(b'\n');
            break;
        }
        copy_code_line(cursor, out)?;
    }
    out.code_block_end()?;
    Ok(Parsed::Match)
}

/// Copy one fence body line, newline included.
fn copy_code_line<W: Write>(cursor: &mut Cursor<'_>, out: &mut HtmlWriter<W>) -> io::Result<()> {
    let start = cursor.offset();
    while let Some(b) = cursor.next() {
        if b == b'\n' {
            break;
        }
    }
    out.write_code_text(cursor.slice(start, cursor.offset()))
}

/// Literal HTML passthrough. A comment is copied verbatim through its
/// closing `-->`; anything else starting with `<` is copied verbatim
/// until a blank line or end of input. No validation, no escaping.
fn literal_html<W: Write>(
    cursor: &mut Cursor<'_>,
    out: &mut HtmlWriter<W>,
) -> Result<Parsed, RenderError> {
    if !cursor.at(b'<') {
        return Ok(Parsed::NoMatch);
    }
    let rest = cursor.rest();
    if rest.starts_with(b"<!--") {
        let end = match memmem::find(rest, b"-->") {
            Some(i) => i + 3,
            None => rest.len(),
        };
        out.write_raw(&rest[..end])?;
        cursor.advance(end);
        while matches!(cursor.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            cursor.bump();
        }
    } else {
        let end = memmem::find(rest, b"\n\n").unwrap_or(rest.len());
        out.write_raw(&rest[..end])?;
        cursor.advance(end);
    }
    Ok(Parsed::Match)
}

/// Paragraph fallback. Lines are inline-parsed and joined by a literal
/// newline; the terminating blank-line run is consumed here so adjacent
/// paragraphs emit back to back.
fn paragraph<W: Write>(
    cursor: &mut Cursor<'_>,
    out: &mut HtmlWriter<W>,
) -> Result<(), RenderError> {
    out.paragraph_start()?;
    loop {
        inline::line_text(cursor, out)?;
        if !cursor.eat(b'\n') {
            break;
        }
        if cursor.is_eof() {
            break;
        }
        if cursor.at(b'\n') {
            while cursor.eat(b'\n') {}
            break;
        }
        out.write_str("\n")?;
    }
    out.paragraph_end()?;
    Ok(())
}
