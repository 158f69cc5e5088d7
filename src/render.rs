//! HTML output sink.
//!
//! [`HtmlWriter`] wraps any [`std::io::Write`] (a buffered file handle,
//! a raw descriptor, or an in-memory `Vec<u8>`) and enforces the
//! escaping boundary: `write_raw`/`write_str` for markup the engine
//! itself generates (and literal-HTML passthrough), `write_escaped_*`
//! for user-authored text.

use std::io::{self, Write};

use crate::escape;

/// HTML writer over an arbitrary byte sink.
///
/// # Example
/// ```
/// use cindermark::HtmlWriter;
///
/// let mut writer = HtmlWriter::new(Vec::new());
/// writer.paragraph_start().unwrap();
/// writer.write_escaped_text(b"a < b").unwrap();
/// writer.paragraph_end().unwrap();
/// assert_eq!(writer.into_inner(), b"<p>a &lt; b</p>");
/// ```
pub struct HtmlWriter<W: Write> {
    out: W,
}

impl<W: Write> HtmlWriter<W> {
    /// Wrap a sink.
    #[inline]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Unwrap the sink.
    #[inline]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write bytes verbatim, without escaping.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)
    }

    /// Write a static string verbatim.
    #[inline]
    pub fn write_str(&mut self, s: &'static str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())
    }

    /// Write a single byte verbatim.
    #[inline]
    pub fn write_byte(&mut self, b: u8) -> io::Result<()> {
        self.out.write_all(&[b])
    }

    /// Write user text with `<` `>` `&` escaped.
    #[inline]
    pub fn write_escaped_text(&mut self, text: &[u8]) -> io::Result<()> {
        escape::escape_text_into(&mut self.out, text)
    }

    /// Write a single byte of user text, escaped.
    #[inline]
    pub fn write_escaped_byte(&mut self, b: u8) -> io::Result<()> {
        escape::escape_byte_into(&mut self.out, b)
    }

    /// Write a fenced-code line with only `<` and `>` escaped.
    #[inline]
    pub fn write_code_text(&mut self, text: &[u8]) -> io::Result<()> {
        escape::escape_code_into(&mut self.out, text)
    }

    // --- Block markup ---

    pub fn paragraph_start(&mut self) -> io::Result<()> {
        self.write_str("<p>")
    }

    pub fn paragraph_end(&mut self) -> io::Result<()> {
        self.write_str("</p>")
    }

    /// `<hN>` where N is the `#` count, conventionally 1-6 but unbounded.
    pub fn heading_start(&mut self, level: usize) -> io::Result<()> {
        self.write_str("<h")?;
        self.write_usize(level)?;
        self.write_byte(b'>')
    }

    pub fn heading_end(&mut self, level: usize) -> io::Result<()> {
        self.write_str("</h")?;
        self.write_usize(level)?;
        self.write_byte(b'>')
    }

    pub fn blockquote_start(&mut self) -> io::Result<()> {
        self.write_str("<blockquote>")
    }

    pub fn blockquote_end(&mut self) -> io::Result<()> {
        self.write_str("</blockquote>")
    }

    pub fn code_block_start(&mut self) -> io::Result<()> {
        self.write_str("<pre><code>")
    }

    pub fn code_block_end(&mut self) -> io::Result<()> {
        self.write_str("</code></pre>")
    }

    pub fn ul_start(&mut self) -> io::Result<()> {
        self.write_str("<ul>")
    }

    pub fn ul_end(&mut self) -> io::Result<()> {
        self.write_str("</ul>")
    }

    pub fn ol_start(&mut self) -> io::Result<()> {
        self.write_str("<ol>")
    }

    pub fn ol_end(&mut self) -> io::Result<()> {
        self.write_str("</ol>")
    }

    pub fn li_start(&mut self) -> io::Result<()> {
        self.write_str("<li>")
    }

    pub fn li_end(&mut self) -> io::Result<()> {
        self.write_str("</li>")
    }

    // --- Inline markup ---

    pub fn em_start(&mut self) -> io::Result<()> {
        self.write_str("<em>")
    }

    pub fn em_end(&mut self) -> io::Result<()> {
        self.write_str("</em>")
    }

    pub fn strong_start(&mut self) -> io::Result<()> {
        self.write_str("<strong>")
    }

    pub fn strong_end(&mut self) -> io::Result<()> {
        self.write_str("</strong>")
    }

    pub fn code_span_start(&mut self) -> io::Result<()> {
        self.write_str("<code>")
    }

    pub fn code_span_end(&mut self) -> io::Result<()> {
        self.write_str("</code>")
    }

    /// `<a href="HREF">TEXT</a>`, both parts escaped.
    pub fn link(&mut self, href: &[u8], text: &[u8]) -> io::Result<()> {
        self.write_str("<a href=\"")?;
        self.write_escaped_text(href)?;
        self.write_str("\">")?;
        self.write_escaped_text(text)?;
        self.write_str("</a>")
    }

    /// `<img src="SRC" alt="ALT" />`, both parts escaped.
    pub fn image(&mut self, src: &[u8], alt: &[u8]) -> io::Result<()> {
        self.write_str("<img src=\"")?;
        self.write_escaped_text(src)?;
        self.write_str("\" alt=\"")?;
        self.write_escaped_text(alt)?;
        self.write_str("\" />")
    }

    pub fn mdash(&mut self) -> io::Result<()> {
        self.write_str("&mdash;")
    }

    /// Write a usize as decimal.
    fn write_usize(&mut self, mut n: usize) -> io::Result<()> {
        if n == 0 {
            return self.write_byte(b'0');
        }
        let mut buf = [0u8; 20];
        let mut i = buf.len();
        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }
        self.write_raw(&buf[i..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer() -> HtmlWriter<Vec<u8>> {
        HtmlWriter::new(Vec::new())
    }

    fn finish(w: HtmlWriter<Vec<u8>>) -> String {
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn test_writer_paragraph() {
        let mut w = writer();
        w.paragraph_start().unwrap();
        w.write_escaped_text(b"Hello").unwrap();
        w.paragraph_end().unwrap();
        assert_eq!(finish(w), "<p>Hello</p>");
    }

    #[test]
    fn test_writer_heading_levels() {
        for level in 1..=6 {
            let mut w = writer();
            w.heading_start(level).unwrap();
            w.heading_end(level).unwrap();
            assert_eq!(finish(w), format!("<h{level}></h{level}>"));
        }
    }

    #[test]
    fn test_writer_heading_beyond_six() {
        let mut w = writer();
        w.heading_start(7).unwrap();
        w.heading_end(7).unwrap();
        assert_eq!(finish(w), "<h7></h7>");
    }

    #[test]
    fn test_writer_raw_is_not_escaped() {
        let mut w = writer();
        w.write_raw(b"<div class=\"x\">").unwrap();
        assert_eq!(finish(w), "<div class=\"x\">");
    }

    #[test]
    fn test_writer_link() {
        let mut w = writer();
        w.link(b"http://example.com?a=1&b=2", b"ex").unwrap();
        assert_eq!(
            finish(w),
            "<a href=\"http://example.com?a=1&amp;b=2\">ex</a>"
        );
    }

    #[test]
    fn test_writer_image() {
        let mut w = writer();
        w.image(b"cat.png", b"a <cat>").unwrap();
        assert_eq!(finish(w), "<img src=\"cat.png\" alt=\"a &lt;cat&gt;\" />");
    }

    #[test]
    fn test_writer_code_text_keeps_ampersand() {
        let mut w = writer();
        w.write_code_text(b"a<b && c>d").unwrap();
        assert_eq!(finish(w), "a&lt;b && c&gt;d");
    }

    #[test]
    fn test_writer_list_tags() {
        let mut w = writer();
        w.ul_start().unwrap();
        w.li_start().unwrap();
        w.li_end().unwrap();
        w.ul_end().unwrap();
        w.ol_start().unwrap();
        w.ol_end().unwrap();
        assert_eq!(finish(w), "<ul><li></li></ul><ol></ol>");
    }
}
