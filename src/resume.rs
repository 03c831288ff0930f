//! The résumé record handed to the engine on every render.
//!
//! The record deserializes from the JSON the editor produces (camelCase keys).
//! Input is free-form user text, so deserialization is forgiving: numbers and
//! booleans where text is expected are stringified, `null` becomes an empty or
//! absent value, and skill levels outside `1..=5` are clamped or dropped.

use crate::error::LayoutError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Contact details and the free-text summary
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Personal {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_optional_string")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub summary: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient_optional_string")]
    pub end_date: Option<String>,
    #[serde(alias = "current", deserialize_with = "lenient_bool")]
    pub is_current: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(deserialize_with = "lenient_string")]
    pub degree: String,
    #[serde(deserialize_with = "lenient_string")]
    pub institution: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient_optional_string")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient_optional_string")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub issuer: String,
    #[serde(deserialize_with = "lenient_optional_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_optional_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_optional_string")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    /// Proficiency from 1 to 5
    #[serde(deserialize_with = "lenient_level")]
    pub level: Option<u8>,
}

impl Skill {
    pub fn new<S: ToString>(name: S, level: Option<u8>) -> Skill {
        Skill {
            name: name.to_string(),
            level: level.and_then(clamp_level),
        }
    }
}

/// A whole résumé. List order is display order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRecord {
    pub personal: Personal,
    #[serde(alias = "experience")]
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub skills: Vec<Skill>,
}

impl ResumeRecord {
    /// Parse a record from the editor's JSON representation
    pub fn from_json(json: &str) -> Result<ResumeRecord, LayoutError> {
        serde_json::from_str(json).map_err(LayoutError::Input)
    }

    /// A file name for the exported PDF, derived from the person's name
    pub fn suggested_file_name(&self) -> String {
        let name = self.personal.name.split_whitespace().collect::<Vec<_>>();
        if name.is_empty() {
            "resume.pdf".to_string()
        } else {
            format!("{}_resume.pdf", name.join("_"))
        }
    }
}

fn clamp_level(level: u8) -> Option<u8> {
    match level {
        0 => None,
        level => Some(level.min(5)),
    }
}

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        // structured values carry no displayable text
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(value).unwrap_or_default())
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_string(value))
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1"),
        _ => false,
    })
}

fn lenient_level<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let level = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    Ok(level
        .filter(|level| level.is_finite() && *level >= 1.0)
        .map(|level| level.round().min(5.0) as u8)
        .and_then(clamp_level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_editor_json() {
        let record = ResumeRecord::from_json(
            r#"{
                "personal": {
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "phone": "555-0100",
                    "location": "Berlin",
                    "summary": "Engineer."
                },
                "experiences": [{
                    "id": "1",
                    "title": "Engineer",
                    "company": "Acme",
                    "location": "Remote",
                    "startDate": "Jan 2020",
                    "current": true,
                    "description": "Built things."
                }],
                "education": [],
                "skills": [{ "id": "a", "name": "Rust", "level": 5 }]
            }"#,
        )
        .expect("record parses");

        assert_eq!(record.personal.name, "Jane Doe");
        assert_eq!(record.personal.website, None);
        assert_eq!(record.experiences.len(), 1);
        assert!(record.experiences[0].is_current);
        assert_eq!(record.experiences[0].end_date, None);
        assert_eq!(record.skills, vec![Skill::new("Rust", Some(5))]);
        assert!(record.certifications.is_empty());
    }

    #[test]
    fn malformed_fields_are_coerced_rather_than_rejected() {
        let record = ResumeRecord::from_json(
            r#"{
                "personal": { "name": 42, "phone": null, "website": "" },
                "skills": [
                    { "name": "Go", "level": -3 },
                    { "name": "C", "level": 9 },
                    { "name": "SQL", "level": "4" },
                    { "name": true }
                ]
            }"#,
        )
        .expect("record parses");

        assert_eq!(record.personal.name, "42");
        assert_eq!(record.personal.phone, "");
        assert_eq!(record.personal.website, Some(String::new()));
        let levels: Vec<Option<u8>> = record.skills.iter().map(|s| s.level).collect();
        assert_eq!(levels, vec![None, Some(5), Some(4), None]);
        assert_eq!(record.skills[3].name, "true");
    }

    #[test]
    fn broken_json_is_an_input_error() {
        assert!(matches!(
            ResumeRecord::from_json("{ not json"),
            Err(LayoutError::Input(_))
        ));
    }

    #[test]
    fn file_name_follows_person_name() {
        let mut record = ResumeRecord::default();
        assert_eq!(record.suggested_file_name(), "resume.pdf");
        record.personal.name = "Jane  van Doe".into();
        assert_eq!(record.suggested_file_name(), "Jane_van_Doe_resume.pdf");
    }
}
