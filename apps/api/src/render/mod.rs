// Roadmap rendering: converts the model's Markdown subset into HTML fragments.
// Pure and synchronous, so handlers call it inline.

pub mod markdown;

pub use markdown::render_markdown;
