//! Section segmentation: slices raw resume text into the sub-text following
//! a section header keyword, up to the next recognized header.
//!
//! Boundaries are deliberately loose: each section has its own stop-word list,
//! and those lists are not symmetric, so the same region of text can end up in
//! more than one segment. Downstream classifiers tolerate this.

use std::sync::LazyLock;

use regex::Regex;

const EDUCATION_HEADERS: &[&str] = &[
    "education",
    "academic",
    "university",
    "college",
    "school",
    "degree",
];
const EXPERIENCE_HEADERS: &[&str] = &[
    "experience",
    "employment",
    "work",
    "career",
    "professional",
];
const SKILLS_HEADERS: &[&str] = &["skills", "technical", "technologies", "expertise"];

const EDUCATION_STOPS: &[&str] = &[
    "experience",
    "employment",
    "work",
    "skills",
    "projects",
    "achievements",
];
const EXPERIENCE_STOPS: &[&str] = &["education", "skills", "projects", "achievements"];
const SKILLS_STOPS: &[&str] = &["experience", "education", "projects", "achievements"];

/// Case-insensitive alternation anchored at a word start, so `work` does not
/// fire inside `network` but `Skills:` still matches `skills`.
fn keyword_regex(words: &[&str]) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{})", words.join("|"))).expect("keyword regex")
}

static EDUCATION_HEADER: LazyLock<Regex> = LazyLock::new(|| keyword_regex(EDUCATION_HEADERS));
static EXPERIENCE_HEADER: LazyLock<Regex> = LazyLock::new(|| keyword_regex(EXPERIENCE_HEADERS));
static SKILLS_HEADER: LazyLock<Regex> = LazyLock::new(|| keyword_regex(SKILLS_HEADERS));
static EDUCATION_STOP: LazyLock<Regex> = LazyLock::new(|| keyword_regex(EDUCATION_STOPS));
static EXPERIENCE_STOP: LazyLock<Regex> = LazyLock::new(|| keyword_regex(EXPERIENCE_STOPS));
static SKILLS_STOP: LazyLock<Regex> = LazyLock::new(|| keyword_regex(SKILLS_STOPS));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Education,
    Experience,
    Skills,
}

impl SectionKind {
    fn header(self) -> &'static Regex {
        match self {
            SectionKind::Education => &EDUCATION_HEADER,
            SectionKind::Experience => &EXPERIENCE_HEADER,
            SectionKind::Skills => &SKILLS_HEADER,
        }
    }

    fn stop(self) -> &'static Regex {
        match self {
            SectionKind::Education => &EDUCATION_STOP,
            SectionKind::Experience => &EXPERIENCE_STOP,
            SectionKind::Skills => &SKILLS_STOP,
        }
    }
}

/// The three captured segments. `None` means the header keywords never occurred.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Segments<'a> {
    pub education: Option<&'a str>,
    pub experience: Option<&'a str>,
    pub skills: Option<&'a str>,
}

/// Returns everything after the first header match for `kind`, up to (not
/// including) the first stop keyword after it, or the end of the text.
pub fn segment(text: &str, kind: SectionKind) -> Option<&str> {
    let header = kind.header().find(text)?;
    let rest = &text[header.end()..];
    let end = kind.stop().find(rest).map_or(rest.len(), |m| m.start());
    Some(&rest[..end])
}

pub fn segment_all(text: &str) -> Segments<'_> {
    Segments {
        education: segment(text, SectionKind::Education),
        experience: segment(text, SectionKind::Experience),
        skills: segment(text, SectionKind::Skills),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        EDUCATION\n\
        Bachelor of Science\n\
        State University\n\
        EXPERIENCE\n\
        Software Engineer\n\
        Acme Inc.\n\
        SKILLS\n\
        Languages: Rust, Go\n";

    #[test]
    fn test_segments_split_on_headers() {
        let segments = segment_all(RESUME);
        assert_eq!(
            segments.education,
            Some("\nBachelor of Science\nState University\n")
        );
        assert_eq!(segments.experience, Some("\nSoftware Engineer\nAcme Inc.\n"));
        assert_eq!(segments.skills, Some("\nLanguages: Rust, Go\n"));
    }

    #[test]
    fn test_missing_header_is_absent() {
        let segments = segment_all("Jane Doe\nSKILLS\nRust");
        assert_eq!(segments.education, None);
        assert_eq!(segments.experience, None);
        assert_eq!(segments.skills, Some("\nRust"));
    }

    #[test]
    fn test_segment_runs_to_end_without_stop() {
        assert_eq!(
            segment("Education\nMIT\n2020", SectionKind::Education),
            Some("\nMIT\n2020")
        );
    }

    #[test]
    fn test_header_match_is_case_insensitive_and_word_anchored() {
        // "network" must not open the experience segment; "Work" must.
        let text = "Built a network tool\nWork History\nAcme";
        assert_eq!(
            segment(text, SectionKind::Experience),
            Some(" History\nAcme")
        );
    }

    #[test]
    fn test_projects_and_achievements_terminate_every_segment() {
        let text = "Skills\nRust\nProjects\nToy compiler\nAchievements\nWon";
        assert_eq!(segment(text, SectionKind::Skills), Some("\nRust\n"));
    }

    #[test]
    fn test_segments_may_overlap() {
        // "University" opens an education segment inside the experience block,
        // and experience does not stop at "university", so both capture it.
        let text = "Experience\nResearch Assistant\nState University Lab\n2019 - 2021";
        let segments = segment_all(text);
        let experience = segments.experience.unwrap();
        let education = segments.education.unwrap();
        assert!(experience.contains("Lab\n2019 - 2021"));
        assert!(education.contains("Lab\n2019 - 2021"));
    }
}
