//! Front-matter collaborator interface.
//!
//! The rendering engine itself never looks at front matter; a generator
//! calls [`front_matter_len`] on the raw buffer and skips that many
//! bytes before handing the remainder to the engine.

use memchr::memmem;

/// Byte length of a leading `---`-delimited metadata prologue.
///
/// Returns 0 when the buffer has no front matter. The opening delimiter
/// must be exactly `---` at the very start of the buffer on its own
/// line, and the closing delimiter exactly `---` on its own line; the
/// returned length includes both delimiter lines.
///
/// # Example
/// ```
/// use cindermark::front_matter_len;
///
/// let input = b"---\ntitle: Post\n---\n# Body";
/// let skip = front_matter_len(input);
/// assert_eq!(&input[skip..], b"# Body");
/// ```
pub fn front_matter_len(input: &[u8]) -> usize {
    if !input.starts_with(b"---\n") {
        return 0;
    }
    // Search from the opening line's newline so an immediately following
    // `---` line (empty front matter) is found.
    let tail = &input[3..];
    if let Some(i) = memmem::find(tail, b"\n---\n") {
        return 3 + i + 5;
    }
    if tail.ends_with(b"\n---") {
        return input.len();
    }
    0
}
