//! Markdown renderer for generated roadmaps.
//!
//! Only three constructs are recognized:
//! - `### ` level-3 headings
//! - `* ` bullet list items (consecutive bullets share one `<ul>`)
//! - `**text**` inline bold, inside bullets and paragraphs only
//!
//! Every other line becomes a `<p>`. Text is NOT escaped: the output is trusted
//! exactly as far as the upstream model is.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

const HEADING_MARKER: &str = "### ";
const BULLET_MARKER: &str = "* ";

/// Classification of a single input line. Classification is ordered:
/// heading wins over bullet, bullet wins over paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Text after the `### ` marker.
    Heading(&'a str),
    /// Text after the `* ` marker.
    Bullet(&'a str),
    /// The full line.
    Paragraph(&'a str),
}

/// Whether a `<ul>` is currently open in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    OutsideList,
    InsideList,
}

fn bold_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is a valid regex"))
}

/// Classifies one line of Markdown by its prefix.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(rest) = line.strip_prefix(HEADING_MARKER) {
        LineKind::Heading(rest)
    } else if let Some(rest) = line.strip_prefix(BULLET_MARKER) {
        LineKind::Bullet(rest)
    } else {
        LineKind::Paragraph(line)
    }
}

/// Replaces every `**text**` run with `<strong>text</strong>`, left to right,
/// without overlap. Unmatched asterisks are left untouched.
pub fn emphasize(text: &str) -> Cow<'_, str> {
    bold_pattern().replace_all(text, "<strong>${1}</strong>")
}

/// Renders a roadmap written in the Markdown subset into an HTML string.
///
/// Never fails. Empty input renders as a single empty paragraph (`<p></p>`),
/// and a list still open at end of input is always closed.
pub fn render_markdown(markdown: &str) -> String {
    let (mut html, state) = markdown.split('\n').map(classify).fold(
        (String::with_capacity(markdown.len() * 2), ListState::OutsideList),
        |(mut html, state), kind| {
            let next = render_line(&mut html, state, kind);
            (html, next)
        },
    );

    if state == ListState::InsideList {
        html.push_str("</ul>");
    }
    html
}

fn render_line(out: &mut String, state: ListState, kind: LineKind<'_>) -> ListState {
    match kind {
        LineKind::Heading(text) => {
            close_list(out, state);
            push_element(out, "h3", text);
            ListState::OutsideList
        }
        LineKind::Bullet(text) => {
            if state == ListState::OutsideList {
                out.push_str("<ul>");
            }
            push_element(out, "li", &emphasize(text));
            ListState::InsideList
        }
        LineKind::Paragraph(text) => {
            close_list(out, state);
            push_element(out, "p", &emphasize(text));
            ListState::OutsideList
        }
    }
}

fn close_list(out: &mut String, state: ListState) {
    if state == ListState::InsideList {
        out.push_str("</ul>");
    }
}

fn push_element(out: &mut String, tag: &str, content: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
