//! Prompt builder: validates the student's form input and fills the roadmap template.

use serde::Deserialize;

use crate::errors::AppError;
use crate::roadmap::prompts::{FORMAT_INSTRUCTION, NO_SKILLS_FALLBACK, ROADMAP_PROMPT_TEMPLATE};

/// Last semester of the degree; also the upper bound for `semester`.
pub const FINAL_SEMESTER: u8 = 8;

/// Input collected from the roadmap form or the JSON API.
#[derive(Debug, Clone, Deserialize)]
pub struct RoadmapRequest {
    pub semester: u8,
    /// Human-readable branch label, e.g. "Computer Science and Engineering".
    pub branch: String,
    #[serde(default)]
    pub skills: String,
}

impl RoadmapRequest {
    /// Rejects input that would produce a meaningless prompt.
    /// Runs before any model call.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(1..=FINAL_SEMESTER).contains(&self.semester) {
            return Err(AppError::Validation(format!(
                "semester must be between 1 and {FINAL_SEMESTER}"
            )));
        }
        if self.branch.trim().is_empty() {
            return Err(AppError::Validation("branch cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// Builds the instruction string sent to the model.
/// Blank skills are replaced with [`NO_SKILLS_FALLBACK`].
pub fn build_prompt(request: &RoadmapRequest) -> String {
    let skills = match request.skills.trim() {
        "" => NO_SKILLS_FALLBACK,
        skills => skills,
    };

    ROADMAP_PROMPT_TEMPLATE
        .replace("{format_instruction}", FORMAT_INSTRUCTION)
        .replace("{final_semester}", &FINAL_SEMESTER.to_string())
        .replace("{semester}", &request.semester.to_string())
        .replace("{branch}", request.branch.trim())
        .replace("{skills}", skills)
}
