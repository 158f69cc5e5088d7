//! Inline span parser.
//!
//! Invoked byte-by-byte while a block production scans its text. The
//! design is parse-and-emit: a span writes its own wrapper tags, so
//! before emitting anything each production scans ahead for its closing
//! delimiter, since a streaming sink cannot take output back.
//!
//! Span failures are recovered locally: when no production matches a
//! candidate byte, the caller falls back to emitting it as escaped text
//! and the document keeps rendering.

use std::io::{self, Write};

use crate::cursor::Cursor;
use crate::render::HtmlWriter;

/// Render running text up to (not consuming) a newline or end of input.
pub(crate) fn line_text<W: Write>(
    cursor: &mut Cursor<'_>,
    out: &mut HtmlWriter<W>,
) -> io::Result<()> {
    while let Some(b) = cursor.peek() {
        if b == b'\n' {
            break;
        }
        step(cursor, out)?;
    }
    Ok(())
}

/// Consume and render one unit of running text: an escape sequence, an
/// em-dash, an inline span, or a single escaped byte.
fn step<W: Write>(cursor: &mut Cursor<'_>, out: &mut HtmlWriter<W>) -> io::Result<()> {
    let Some(b) = cursor.peek() else {
        return Ok(());
    };
    if b == b'\\' {
        // The following byte is emitted verbatim (HTML-escaped) with no
        // further interpretation.
        cursor.bump();
        match cursor.next() {
            Some(escaped) => out.write_escaped_byte(escaped),
            None => out.write_escaped_byte(b'\\'),
        }
    } else if b == b'-' && cursor.peek_ahead(1) == Some(b'-') {
        cursor.bump();
        cursor.bump();
        out.mdash()
    } else if is_inline_start(cursor) {
        if try_span(cursor, out)? {
            Ok(())
        } else {
            // Lookahead false positive: ordinary text.
            cursor.bump();
            out.write_escaped_byte(b)
        }
    } else {
        cursor.bump();
        out.write_escaped_byte(b)
    }
}

/// Lookahead-only classification of an inline-start candidate.
///
/// `*`/`_` qualify only when real content follows the delimiter run, so
/// a lone trailing `*` or a `_ _` pair stays literal. A doubled backtick
/// never starts a code span. `[` always starts a link; `!` starts an
/// image only when `[` follows.
pub(crate) fn is_inline_start(cursor: &Cursor<'_>) -> bool {
    match cursor.peek() {
        Some(c @ (b'*' | b'_')) => {
            if cursor.peek_ahead(1) == Some(c) {
                matches!(cursor.peek_ahead(2), Some(b) if !b.is_ascii_whitespace())
            } else {
                matches!(cursor.peek_ahead(1), Some(b) if !b.is_ascii_whitespace())
            }
        }
        Some(b'`') => cursor.peek_ahead(1) != Some(b'`'),
        Some(b'[') => true,
        Some(b'!') => cursor.peek_ahead(1) == Some(b'['),
        _ => false,
    }
}

/// Try each span production in priority order.
fn try_span<W: Write>(cursor: &mut Cursor<'_>, out: &mut HtmlWriter<W>) -> io::Result<bool> {
    if strong(cursor, out)? {
        return Ok(true);
    }
    if emphasis(cursor, out)? {
        return Ok(true);
    }
    if code_span(cursor, out)? {
        return Ok(true);
    }
    if link(cursor, out)? {
        return Ok(true);
    }
    if image(cursor, out)? {
        return Ok(true);
    }
    Ok(false)
}

/// `**text**` or `__text__`. Content may hold nested spans.
fn strong<W: Write>(cursor: &mut Cursor<'_>, out: &mut HtmlWriter<W>) -> io::Result<bool> {
    let Some(c) = cursor.peek() else {
        return Ok(false);
    };
    if !(c == b'*' || c == b'_') || cursor.peek_ahead(1) != Some(c) {
        return Ok(false);
    }
    if !closing_pair_ahead(cursor, c) {
        return Ok(false);
    }
    cursor.bump();
    cursor.bump();
    out.strong_start()?;
    loop {
        match cursor.peek() {
            // The closing pair pre-scanned above can be swallowed by a
            // nested span; stop at the line boundary rather than run on.
            None | Some(b'\n') => break,
            Some(b) if b == c && cursor.peek_ahead(1) == Some(c) => {
                cursor.bump();
                cursor.bump();
                break;
            }
            _ => step(cursor, out)?,
        }
    }
    out.strong_end()?;
    Ok(true)
}

/// `*text*` or `_text_`.
fn emphasis<W: Write>(cursor: &mut Cursor<'_>, out: &mut HtmlWriter<W>) -> io::Result<bool> {
    let Some(c) = cursor.peek() else {
        return Ok(false);
    };
    if !(c == b'*' || c == b'_') || cursor.peek_ahead(1) == Some(c) {
        return Ok(false);
    }
    if !matches!(cursor.peek_ahead(1), Some(b) if !b.is_ascii_whitespace()) {
        return Ok(false);
    }
    if !closing_single_ahead(cursor, c) {
        return Ok(false);
    }
    cursor.bump();
    out.em_start()?;
    loop {
        match cursor.peek() {
            None | Some(b'\n') => break,
            Some(b) if b == c => {
                cursor.bump();
                break;
            }
            _ => step(cursor, out)?,
        }
    }
    out.em_end()?;
    Ok(true)
}

/// `` `code` ``. Content is copied escaped; `<`/`>` inside inline code
/// still become entities, a deliberate asymmetry versus fenced blocks.
fn code_span<W: Write>(cursor: &mut Cursor<'_>, out: &mut HtmlWriter<W>) -> io::Result<bool> {
    if !cursor.at(b'`') || cursor.peek_ahead(1) == Some(b'`') {
        return Ok(false);
    }
    let mut i = 1;
    loop {
        match cursor.peek_ahead(i) {
            None | Some(b'\n') => return Ok(false),
            Some(b'`') => break,
            _ => i += 1,
        }
    }
    cursor.bump();
    out.code_span_start()?;
    while let Some(b) = cursor.peek() {
        if b == b'`' {
            break;
        }
        cursor.bump();
        out.write_escaped_byte(b)?;
    }
    cursor.bump();
    out.code_span_end()?;
    Ok(true)
}

/// `[text](href)`.
fn link<W: Write>(cursor: &mut Cursor<'_>, out: &mut HtmlWriter<W>) -> io::Result<bool> {
    if !cursor.at(b'[') {
        return Ok(false);
    }
    let saved = cursor.save();
    cursor.bump();
    let Some(text) = collect_until(cursor, b']') else {
        cursor.restore(saved);
        return Ok(false);
    };
    if !cursor.eat(b'(') {
        cursor.restore(saved);
        return Ok(false);
    }
    let Some(href) = collect_until(cursor, b')') else {
        cursor.restore(saved);
        return Ok(false);
    };
    out.link(&href, &text)?;
    Ok(true)
}

/// `![alt](src)`.
fn image<W: Write>(cursor: &mut Cursor<'_>, out: &mut HtmlWriter<W>) -> io::Result<bool> {
    if !cursor.at(b'!') || cursor.peek_ahead(1) != Some(b'[') {
        return Ok(false);
    }
    let saved = cursor.save();
    cursor.bump();
    cursor.bump();
    let Some(alt) = collect_until(cursor, b']') else {
        cursor.restore(saved);
        return Ok(false);
    };
    if !cursor.eat(b'(') {
        cursor.restore(saved);
        return Ok(false);
    }
    let Some(src) = collect_until(cursor, b')') else {
        cursor.restore(saved);
        return Ok(false);
    };
    out.image(&src, &alt)?;
    Ok(true)
}

/// Accumulate bytes into a growable buffer up to the next unescaped
/// `terminator`, consuming it. `None` when the line or input ends first.
fn collect_until(cursor: &mut Cursor<'_>, terminator: u8) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    loop {
        match cursor.peek() {
            None | Some(b'\n') => return None,
            Some(b'\\') => {
                cursor.bump();
                if let Some(b) = cursor.next() {
                    buf.push(b);
                }
            }
            Some(b) if b == terminator => {
                cursor.bump();
                return Some(buf);
            }
            Some(b) => {
                buf.push(b);
                cursor.bump();
            }
        }
    }
}

/// Scan for a doubled `c` before the end of the line, skipping `\x`.
fn closing_pair_ahead(cursor: &Cursor<'_>, c: u8) -> bool {
    let mut i = 2;
    loop {
        match cursor.peek_ahead(i) {
            None | Some(b'\n') => return false,
            Some(b'\\') => i += 2,
            Some(b) if b == c && cursor.peek_ahead(i + 1) == Some(c) => return true,
            _ => i += 1,
        }
    }
}

/// Scan for a single `c` before the end of the line, skipping `\x`.
fn closing_single_ahead(cursor: &Cursor<'_>, c: u8) -> bool {
    let mut i = 1;
    loop {
        match cursor.peek_ahead(i) {
            None | Some(b'\n') => return false,
            Some(b'\\') => i += 2,
            Some(b) if b == c => return true,
            _ => i += 1,
        }
    }
}
