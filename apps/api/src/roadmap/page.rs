//! Server-rendered form page: the input and display surface for browsers.

use crate::roadmap::builder::FINAL_SEMESTER;

/// Branch choices offered by the form. The label is what the model sees.
pub const BRANCHES: &[&str] = &[
    "Computer Science and Engineering",
    "Information Technology",
    "Electronics and Communication Engineering",
    "Electrical and Electronics Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Chemical Engineering",
    "Artificial Intelligence and Data Science",
];

/// What to show below the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContent<'a> {
    Blank,
    /// Rendered roadmap HTML, inserted as-is.
    Roadmap(&'a str),
    /// User-facing error message for the error panel.
    Error(&'a str),
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Career Roadmap Generator</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
label { display: block; margin-top: 1rem; font-weight: 600; }
select, textarea { width: 100%; padding: 0.4rem; }
button { margin-top: 1rem; padding: 0.5rem 1.5rem; }
.loading { color: #555; }
.error { border: 1px solid #c33; background: #fee; padding: 1rem; margin-top: 1.5rem; }
.roadmap { margin-top: 1.5rem; }
.roadmap h3 { border-bottom: 1px solid #ddd; padding-bottom: 0.25rem; }
</style>
</head>
<body>
<h1>Career Roadmap Generator</h1>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

/// Renders the full page with the form and the given content panel.
pub fn render_page(content: PageContent<'_>) -> String {
    let mut page = String::from(PAGE_HEAD);
    page.push_str(&render_form());

    match content {
        PageContent::Blank => {}
        PageContent::Roadmap(html) => {
            page.push_str("<section class=\"roadmap\">\n");
            page.push_str(html);
            page.push_str("\n</section>\n");
        }
        PageContent::Error(message) => {
            page.push_str("<section class=\"error\" role=\"alert\"><strong>Error:</strong> ");
            page.push_str(&escape_text(message));
            page.push_str("</section>\n");
        }
    }

    page.push_str(PAGE_TAIL);
    page
}

fn render_form() -> String {
    let semesters: String = (1..=FINAL_SEMESTER)
        .map(|n| format!("<option value=\"{n}\">Semester {n}</option>"))
        .collect();
    let branches: String = BRANCHES
        .iter()
        .map(|label| format!("<option value=\"{label}\">{label}</option>"))
        .collect();

    format!(
        r#"<form method="post" action="/roadmap" onsubmit="document.getElementById('loading').hidden = false">
<label for="semester">Current semester</label>
<select id="semester" name="semester" required>{semesters}</select>
<label for="branch">Branch</label>
<select id="branch" name="branch" required>{branches}</select>
<label for="skills">Your current skills</label>
<textarea id="skills" name="skills" rows="3" placeholder="e.g. C, Python, basic web development"></textarea>
<button type="submit">Generate roadmap</button>
<p id="loading" class="loading" hidden>Generating your roadmap&hellip;</p>
</form>
"#
    )
}

/// Minimal escaping for text placed inside an element.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
