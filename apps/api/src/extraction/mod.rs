// Resume import: raw document text → ResumeRecord.
// Flow: contact → segmenter → {education, experience, skills} classifiers.
// Classifiers never fail; they degrade to placeholder entries.

pub mod classifier;
pub mod contact;
pub mod documents;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod segmenter;
pub mod skills;

use tracing::info;

use crate::extraction::contact::extract_contact;
use crate::extraction::documents::ExtractionError;
use crate::extraction::education::classify_education;
use crate::extraction::experience::classify_experience;
use crate::extraction::segmenter::segment_all;
use crate::extraction::skills::classify_skills;
use crate::models::resume::{ProjectEntry, ResumeRecord};

/// Maps free resume text onto the structured schema.
///
/// Projects and achievements have no header keywords and are never
/// extracted; they come back as one blank project and one blank achievement
/// so the editor always has a row to fill in.
pub fn parse_resume_text(text: &str) -> ResumeRecord {
    let contact = extract_contact(text);
    let segments = segment_all(text);

    ResumeRecord {
        name: contact.name,
        email: contact.email,
        phone: contact.phone,
        linkedin: contact.linkedin,
        education: classify_education(segments.education),
        experience: classify_experience(segments.experience),
        skills: classify_skills(segments.skills),
        projects: vec![ProjectEntry::default()],
        achievements: vec![String::new()],
    }
}

/// Like [`parse_resume_text`], but rejects text with nothing to segment.
pub fn extract_resume(text: &str) -> Result<ResumeRecord, ExtractionError> {
    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }
    let record = parse_resume_text(text);
    info!(
        "Extracted resume: {} education, {} experience, {} skill groups",
        record.education.len(),
        record.experience.len(),
        record.skills.len()
    );
    Ok(record)
}
