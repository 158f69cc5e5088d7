//! Front-matter skipping as a site generator would drive it.

use cindermark::{front_matter_len, to_html};

/// Strip front matter and render the rest, the way a generator consumes
/// a source file.
fn render_page(raw: &str) -> String {
    let skip = front_matter_len(raw.as_bytes());
    to_html(&raw[skip..])
}

#[test]
fn metadata_prologue_is_skipped() {
    let page = "---\ntitle: Hello\ndate: 2024-01-01\n---\n# Hello\n\nBody text.";
    assert_eq!(render_page(page), "<h1>Hello</h1>\n<p>Body text.</p>");
}

#[test]
fn page_without_front_matter_renders_whole() {
    assert_eq!(render_page("# Plain"), "<h1>Plain</h1>");
}

#[test]
fn unterminated_front_matter_renders_as_content() {
    // Without a closing delimiter the prologue is ordinary Markdown;
    // the dashes become an em dash plus a hyphen.
    let page = "---\ntitle: Hello";
    assert_eq!(render_page(page), "<p>&mdash;-\ntitle: Hello</p>");
}

#[test]
fn delimiter_lines_never_leak_into_output() {
    let page = "---\ntitle: x\n---\nbody";
    let html = render_page(page);
    assert!(!html.contains("---"));
    assert!(!html.contains("title"));
    assert_eq!(html, "<p>body</p>");
}

#[test]
fn front_matter_only_page_renders_empty() {
    assert_eq!(render_page("---\ntitle: x\n---"), "");
}

#[test]
fn thematic_break_later_in_body_is_not_front_matter() {
    let page = "intro\n---\nnot metadata";
    assert_eq!(front_matter_len(page.as_bytes()), 0);
}
