//! List nesting resolver.
//!
//! Both list kinds share one production parameterized by marker kind and
//! required indent. The indent for a nesting depth is the exact leading
//! whitespace run of its first line, kept as a borrowed slice of the
//! input and compared byte-for-byte: tabs and spaces each count as one
//! indent unit and are never equated.

use std::io::Write;

use crate::cursor::Cursor;
use crate::error::RenderError;
use crate::inline;
use crate::render::HtmlWriter;

use super::Parsed;

/// Marker kind for a list level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    Unordered,
    Ordered,
}

/// Top-level list production, tried by the block dispatcher.
pub(crate) fn list<W: Write>(
    cursor: &mut Cursor<'_>,
    out: &mut HtmlWriter<W>,
) -> Result<Parsed, RenderError> {
    match marker_kind(cursor) {
        Some(kind) => {
            list_at_indent(cursor, out, kind, b"")?;
            Ok(Parsed::Match)
        }
        None => Ok(Parsed::NoMatch),
    }
}

/// Classify the bytes at the cursor as a list marker.
///
/// `*` or `-` followed by a space starts an unordered item; a single
/// ASCII digit followed by `.` or `)` and a space starts an ordered
/// item. The mandatory space keeps mid-word hyphens and plain numbers
/// (`123 ...`) out of list territory.
fn marker_kind(cursor: &Cursor<'_>) -> Option<ListKind> {
    match cursor.peek()? {
        b'*' | b'-' if cursor.peek_ahead(1) == Some(b' ') => Some(ListKind::Unordered),
        b'0'..=b'9'
            if matches!(cursor.peek_ahead(1), Some(b'.' | b')'))
                && cursor.peek_ahead(2) == Some(b' ') =>
        {
            Some(ListKind::Ordered)
        }
        _ => None,
    }
}

fn consume_marker(cursor: &mut Cursor<'_>, kind: ListKind) {
    match kind {
        ListKind::Unordered => cursor.advance(2), // bullet, space
        ListKind::Ordered => cursor.advance(3),   // digit, delimiter, space
    }
}

/// Render one list level.
///
/// On entry the cursor sits on the first marker of this level, its
/// indent already consumed. Each subsequent line is classified by its
/// measured indent: equal continues this level, deeper recurses into a
/// nested list emitted between this level's items, shallower (or a
/// blank line) rewinds the indent and closes this level so an ancestor
/// or the dispatcher takes over.
fn list_at_indent<W: Write>(
    cursor: &mut Cursor<'_>,
    out: &mut HtmlWriter<W>,
    kind: ListKind,
    indent: &[u8],
) -> Result<(), RenderError> {
    match kind {
        ListKind::Unordered => out.ul_start()?,
        ListKind::Ordered => out.ol_start()?,
    }
    'items: loop {
        consume_marker(cursor, kind);
        out.li_start()?;
        inline::line_text(cursor, out)?;
        out.li_end()?;
        if !cursor.eat(b'\n') {
            break; // end of input ends the list
        }
        'decide: loop {
            let saved = cursor.save();
            let ws_start = cursor.offset();
            while matches!(cursor.peek(), Some(b' ' | b'\t')) {
                cursor.bump();
            }
            let line_indent = cursor.slice(ws_start, cursor.offset());
            if cursor.is_eof() || cursor.at(b'\n') {
                // Blank line ends every open level.
                cursor.restore(saved);
                break 'items;
            }
            let next_kind = marker_kind(cursor);
            if line_indent == indent {
                match next_kind {
                    Some(k) if k == kind => continue 'items,
                    _ => {
                        cursor.restore(saved);
                        break 'items;
                    }
                }
            } else if line_indent.len() > indent.len() {
                match next_kind {
                    Some(k) => {
                        list_at_indent(cursor, out, k, line_indent)?;
                        // The nested level rewound to the start of the
                        // line that ended it; reclassify it for ours.
                        continue 'decide;
                    }
                    None => {
                        cursor.restore(saved);
                        break 'items;
                    }
                }
            } else {
                cursor.restore(saved);
                break 'items;
            }
        }
    }
    match kind {
        ListKind::Unordered => out.ul_end()?,
        ListKind::Ordered => out.ol_end()?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: &str) -> String {
        let mut cursor = Cursor::new("test", input.as_bytes());
        let mut out = HtmlWriter::new(Vec::new());
        let parsed = list(&mut cursor, &mut out).unwrap();
        assert!(matches!(parsed, Parsed::Match));
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_marker_kind() {
        let kind = |s: &str| marker_kind(&Cursor::new("t", s.as_bytes()));
        assert_eq!(kind("* item"), Some(ListKind::Unordered));
        assert_eq!(kind("- item"), Some(ListKind::Unordered));
        assert_eq!(kind("1. item"), Some(ListKind::Ordered));
        assert_eq!(kind("9) item"), Some(ListKind::Ordered));
        assert_eq!(kind("*no space"), None);
        assert_eq!(kind("-dash"), None);
        assert_eq!(kind("12. two digits"), None);
        assert_eq!(kind("123 plain"), None);
    }

    #[test]
    fn test_flat_unordered() {
        assert_eq!(
            render("* one\n* two"),
            "<ul><li>one</li><li>two</li></ul>"
        );
    }

    #[test]
    fn test_flat_ordered() {
        assert_eq!(
            render("1. one\n2. two"),
            "<ol><li>one</li><li>two</li></ol>"
        );
    }

    #[test]
    fn test_nested_deeper_then_back() {
        assert_eq!(
            render("* This is\n\t* a list\n\t* with\n* an indent"),
            "<ul><li>This is</li><ul><li>a list</li><li>with</li></ul><li>an indent</li></ul>"
        );
    }

    #[test]
    fn test_mixed_kinds_across_depths() {
        assert_eq!(
            render("* top\n\t1. nested\n\t2. nested\n* top again"),
            "<ul><li>top</li><ol><li>nested</li><li>nested</li></ol><li>top again</li></ul>"
        );
    }

    #[test]
    fn test_two_level_unwind() {
        assert_eq!(
            render("* a\n\t* b\n\t\t* c\n* d"),
            "<ul><li>a</li><ul><li>b</li><ul><li>c</li></ul></ul><li>d</li></ul>"
        );
    }

    #[test]
    fn test_blank_line_ends_list() {
        let mut cursor = Cursor::new("test", b"* a\n\nafter");
        let mut out = HtmlWriter::new(Vec::new());
        list(&mut cursor, &mut out).unwrap();
        assert_eq!(out.into_inner(), b"<ul><li>a</li></ul>");
        // The blank line is left for the document driver.
        assert_eq!(cursor.peek(), Some(b'\n'));
    }

    #[test]
    fn test_non_list_line_ends_list() {
        let mut cursor = Cursor::new("test", b"1. a\n123 not a marker");
        let mut out = HtmlWriter::new(Vec::new());
        list(&mut cursor, &mut out).unwrap();
        assert_eq!(out.into_inner(), b"<ol><li>a</li></ol>");
        assert_eq!(cursor.peek(), Some(b'1'));
    }

    #[test]
    fn test_tab_and_space_indents_are_distinct() {
        // A space indent does not continue a tab-indented level.
        assert_eq!(
            render("* a\n\t* tab\n * space"),
            "<ul><li>a</li><ul><li>tab</li></ul><ul><li>space</li></ul></ul>"
        );
    }
}
