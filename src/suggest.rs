//! Prompts for AI-assisted writing of résumé fields.
//!
//! Only the request side lives here: which field is being written, the
//! prompt describing it, and how a returned suggestion is stored back into
//! the record. Talking to a language model is left to the caller.

use crate::error::LayoutError;
use crate::resume::ResumeRecord;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Instructions sent with every request
pub const SYSTEM_PROMPT: &str =
    "You are an expert resume writer who helps create professional resume content.";

/// A résumé field that can be filled in with a suggestion
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SuggestionField {
    Summary,
    /// The description of the experience at this index
    ExperienceDescription(usize),
}

impl fmt::Display for SuggestionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionField::Summary => write!(f, "summary"),
            SuggestionField::ExperienceDescription(index) => write!(f, "experience-{index}"),
        }
    }
}

impl FromStr for SuggestionField {
    type Err = LayoutError;

    /// Parses the wire form, `summary` or `experience-{index}`
    fn from_str(field: &str) -> Result<Self, Self::Err> {
        if field == "summary" {
            return Ok(SuggestionField::Summary);
        }
        field
            .strip_prefix("experience-")
            .and_then(|index| index.parse().ok())
            .map(SuggestionField::ExperienceDescription)
            .ok_or_else(|| LayoutError::UnknownField(field.to_string()))
    }
}

/// A chat-style request for one field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionPrompt {
    pub system: &'static str,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl SuggestionPrompt {
    fn new(user: String) -> SuggestionPrompt {
        SuggestionPrompt {
            system: SYSTEM_PROMPT,
            user,
            temperature: 0.7,
            max_tokens: 200,
        }
    }
}

impl SuggestionField {
    /// Builds the prompt for this field from what the record already holds.
    /// Returns [None] when the field refers to an experience that does not exist.
    pub fn prompt(&self, record: &ResumeRecord) -> Option<SuggestionPrompt> {
        match self {
            SuggestionField::Summary => {
                let role = record
                    .experiences
                    .first()
                    .map(|experience| experience.title.trim())
                    .filter(|title| !title.is_empty())
                    .unwrap_or("professional");
                let skills = record
                    .skills
                    .iter()
                    .map(|skill| skill.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                Some(SuggestionPrompt::new(format!(
                    "Create a professional summary for a {role}.\n\
                     Include skills: {skills}.\n\
                     Keep it concise and impactful, around 3-4 sentences."
                )))
            }
            SuggestionField::ExperienceDescription(index) => {
                let experience = record.experiences.get(*index)?;
                Some(SuggestionPrompt::new(format!(
                    "Write a compelling bullet-point style description for this job position:\n\
                     Job Title: {}\n\
                     Company: {}\n\
                     Highlight achievements and responsibilities. Use strong action verbs. \
                     Keep it to 3-4 sentences.",
                    experience.title, experience.company
                )))
            }
        }
    }

    /// Stores `suggestion` in the field, trimmed. Blank suggestions and missing
    /// experiences leave the record untouched; returns whether it changed.
    pub fn apply(&self, record: &mut ResumeRecord, suggestion: &str) -> bool {
        let suggestion = suggestion.trim();
        if suggestion.is_empty() {
            return false;
        }

        let target = match self {
            SuggestionField::Summary => &mut record.personal.summary,
            SuggestionField::ExperienceDescription(index) => {
                match record.experiences.get_mut(*index) {
                    Some(experience) => &mut experience.description,
                    None => return false,
                }
            }
        };
        *target = suggestion.to_string();
        true
    }
}
