//! Placeholder text for empty scalar fields.
//!
//! Every scalar the renderer emits goes through [`field_or_placeholder`], so
//! the fallback wording lives in exactly one table.

use crate::render::escape::sanitize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Linkedin,
    Institution,
    Location,
    Degree,
    Dates,
    Title,
    Company,
    ProjectName,
    Technologies,
}

pub const PLACEHOLDERS: &[(Field, &str)] = &[
    (Field::Name, "Your Name"),
    (Field::Phone, "+1 234 567 890"),
    (Field::Email, "your.email@example.com"),
    (Field::Linkedin, "linkedin.com/in/yourprofile"),
    (Field::Institution, "Institution"),
    (Field::Location, "Location"),
    (Field::Degree, "Degree"),
    (Field::Dates, "Dates"),
    (Field::Title, "Job Title"),
    (Field::Company, "Company"),
    (Field::ProjectName, "Project Name"),
    (Field::Technologies, "Technologies"),
];

impl Field {
    pub fn placeholder(self) -> &'static str {
        PLACEHOLDERS
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, text)| *text)
            .unwrap_or_default()
    }
}

/// Sanitized `value`, or the field's placeholder when nothing printable remains.
/// Each field falls back independently.
pub fn field_or_placeholder(value: &str, field: Field) -> String {
    let sanitized = sanitize(value);
    let trimmed = sanitized.trim();
    if trimmed.is_empty() {
        sanitize(field.placeholder())
    } else {
        trimmed.to_string()
    }
}
