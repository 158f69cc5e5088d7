//! HTML escaping primitives.
//!
//! Fast-path optimized: scans for the first escapable character with
//! memchr, then bulk-copies the segments between escapes. Two contexts
//! exist: ordinary text (`<`, `>`, `&`) and fenced-code lines, which
//! escape `<`/`>` only.

use std::io::{self, Write};

use memchr::{memchr2, memchr3};

/// Lookup table for escapable characters in text content.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table
};

/// Lookup table for escapable characters in fenced-code content.
///
/// `&` passes through untouched here; only the angle brackets are
/// rewritten so the code block cannot open a tag.
const CODE_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table
};

#[inline]
fn escape_sequence(b: u8) -> &'static [u8] {
    match b {
        b'<' => b"&lt;",
        b'>' => b"&gt;",
        b'&' => b"&amp;",
        _ => unreachable!("byte {b} is not escapable"),
    }
}

/// Escape text content into `out`, mapping `<` `>` `&` to entities.
///
/// # Example
/// ```
/// use cindermark::escape::escape_text_into;
///
/// let mut out = Vec::new();
/// escape_text_into(&mut out, b"a < b & c").unwrap();
/// assert_eq!(out, b"a &lt; b &amp; c");
/// ```
pub fn escape_text_into<W: Write>(out: &mut W, input: &[u8]) -> io::Result<()> {
    escape_with_table(out, input, &TEXT_ESCAPE_TABLE, |i| {
        memchr3(b'<', b'>', b'&', i)
    })
}

/// Escape a fenced-code line into `out`, mapping only `<` and `>`.
pub fn escape_code_into<W: Write>(out: &mut W, input: &[u8]) -> io::Result<()> {
    escape_with_table(out, input, &CODE_ESCAPE_TABLE, |i| memchr2(b'<', b'>', i))
}

/// Escape a single byte of text content.
#[inline]
pub fn escape_byte_into<W: Write>(out: &mut W, b: u8) -> io::Result<()> {
    if TEXT_ESCAPE_TABLE[b as usize] {
        out.write_all(escape_sequence(b))
    } else {
        out.write_all(&[b])
    }
}

#[inline]
fn escape_with_table<W, F>(
    out: &mut W,
    input: &[u8],
    table: &[bool; 256],
    first_hit: F,
) -> io::Result<()>
where
    W: Write,
    F: Fn(&[u8]) -> Option<usize>,
{
    if input.is_empty() {
        return Ok(());
    }

    let mut pos = match first_hit(input) {
        Some(p) => p,
        None => return out.write_all(input),
    };
    if pos > 0 {
        out.write_all(&input[..pos])?;
    }

    while pos < input.len() {
        let scan_start = pos;
        while pos < input.len() && !table[input[pos] as usize] {
            pos += 1;
        }
        if pos > scan_start {
            out.write_all(&input[scan_start..pos])?;
        }
        if pos < input.len() {
            out.write_all(escape_sequence(input[pos]))?;
            pos += 1;
        }
    }
    Ok(())
}
