//! The resume schema shared by the extraction and generation pipelines.
//!
//! Field names are the wire contract with the editor UI; do not rename.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A complete resume as exchanged with the editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub linkedin: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectEntry>,
    #[serde(deserialize_with = "lenient_strings")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub institution: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub degree: String,
    #[serde(deserialize_with = "lenient_string")]
    pub dates: String,
    pub details: Details,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub dates: String,
    pub details: Details,
}

/// `items` is deliberately a single free-text string, not a parsed list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    #[serde(deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(deserialize_with = "lenient_string")]
    pub items: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub technologies: String,
    #[serde(deserialize_with = "lenient_string")]
    pub dates: String,
    pub details: Details,
}

/// Bullet lines of an entry. The editor sends either one newline-delimited
/// textarea value or an array of lines; both are accepted and normalized
/// once via [`Details::lines`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Details {
    Lines(Vec<String>),
    Text(String),
}

impl Default for Details {
    fn default() -> Self {
        Details::Lines(Vec::new())
    }
}

/// `null` is no details, an array is `Lines` (elements coerced like any
/// scalar), anything else is `Text`.
impl<'de> Deserialize<'de> for Details {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Details::default(),
            Some(Value::Array(items)) => Details::Lines(items.into_iter().map(coerce).collect()),
            Some(other) => Details::Text(coerce(other)),
        })
    }
}

impl Details {
    /// Appends one line, converting a `Text` value to `Lines` first.
    pub fn push(&mut self, line: impl Into<String>) {
        if let Details::Text(_) = self {
            *self = Details::Lines(self.lines());
        }
        if let Details::Lines(lines) = self {
            lines.push(line.into());
        }
    }

    /// `Text` is split on newlines with blank lines dropped; `Lines` is returned unchanged.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Details::Lines(lines) => lines.clone(),
            Details::Text(text) => text
                .split('\n')
                .filter(|line| !line.trim().is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

/// Accepts string, number, bool or null for a text field. Missing/null → "".
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .map(coerce)
        .unwrap_or_default())
}

/// A list of text fields, each coerced like [`lenient_string`]. A null list
/// is empty; a lone scalar becomes a one-item list.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.into_iter().map(coerce).collect(),
        Some(other) => vec![coerce(other)],
    })
}

fn coerce(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}
