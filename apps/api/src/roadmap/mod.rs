// Roadmap generation: request validation, prompt construction, and the
// HTTP handlers that wire the model call to the Markdown renderer.
// All model calls go through llm_client; no direct HTTP calls here.

pub mod builder;
pub mod generator;
pub mod handlers;
pub mod page;
pub mod prompts;
