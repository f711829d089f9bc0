//! Roadmap pipeline: validate → build prompt → call model → render Markdown.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::render::render_markdown;
use crate::roadmap::builder::{build_prompt, RoadmapRequest};

/// A generated roadmap in both its raw and rendered forms.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedRoadmap {
    pub markdown: String,
    pub html: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

/// Runs the full pipeline for one submission.
/// Nothing is rendered unless the model returned usable text.
pub async fn generate_roadmap(
    llm: &dyn TextGenerator,
    request: &RoadmapRequest,
) -> Result<GeneratedRoadmap, AppError> {
    request.validate()?;

    let prompt = build_prompt(request);
    info!(
        semester = request.semester,
        branch = %request.branch.trim(),
        "Generating roadmap"
    );

    let markdown = llm.generate(&prompt).await?;
    let html = render_markdown(&markdown);

    Ok(GeneratedRoadmap {
        markdown,
        html,
        model: llm.model().to_string(),
        generated_at: Utc::now(),
    })
}
