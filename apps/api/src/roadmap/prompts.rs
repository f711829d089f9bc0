// Prompt template for roadmap generation.
// The formatting rules must stay in sync with what render::markdown understands.

/// Substituted for `{skills}` when the student leaves the field empty.
pub const NO_SKILLS_FALLBACK: &str = "no specific skills yet";

/// Output-format instruction: restricts the model to the Markdown subset the
/// renderer supports.
pub const FORMAT_INSTRUCTION: &str = "\
    FORMAT RULES: Use ONLY this Markdown subset. \
    Start each semester with a heading line of the form '### Semester N: <theme>'. \
    Put every recommendation on its own line starting with '* '. \
    Use **double asterisks** to highlight key technologies and skills. \
    Do NOT use any other Markdown: no tables, no numbered lists, no nested lists, \
    no code blocks, no links, no '#' or '##' headings.";

/// Roadmap prompt template.
/// Replace: {semester}, {branch}, {skills}, {final_semester}, {format_instruction}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"I am an engineering student currently in semester {semester} of an {final_semester}-semester degree in {branch}.
My current skills: {skills}.

Create a detailed, semester-by-semester career roadmap from semester {semester} through semester {final_semester}.
For each semester, recommend:
* the core subjects and technologies to focus on
* hands-on projects that build on my current skills
* certifications, competitions or internships worth pursuing
* the soft skills and habits to develop

Keep every recommendation concrete and actionable, and finish with a short paragraph of overall career advice for {branch}.

{format_instruction}"#;
