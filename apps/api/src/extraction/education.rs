//! Education classifier.
//!
//! Priority: degree > institution > dates > location > detail. A degree line
//! opens a new entry, committing the previous one only if it had an
//! institution.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::classifier::{
    classify_lines, has_year, looks_like_location, Accumulator, LineRule, SectionEntry,
};
use crate::models::resume::EducationEntry;

static DEGREE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)bachelor|master|phd|doctorate|diploma").expect("degree regex")
});

/// BS, B.S., B.S and friends, as whole words.
static DEGREE_ABBREV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:b\.?s|m\.?s|b\.?a|m\.?a)\b\.?").expect("degree abbreviation regex")
});

static INSTITUTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)university|college|institute|school").expect("institution regex")
});

/// Detail lines must be longer than this many characters.
const MIN_DETAIL_CHARS: usize = 10;

impl SectionEntry for EducationEntry {
    fn is_anchored(&self) -> bool {
        !self.institution.is_empty() || !self.degree.is_empty()
    }
}

pub static EDUCATION_RULES: &[LineRule<EducationEntry>] = &[
    LineRule {
        name: "degree",
        matches: is_degree,
        apply: start_degree,
    },
    LineRule {
        name: "institution",
        matches: is_institution,
        apply: set_institution,
    },
    LineRule {
        name: "dates",
        matches: has_year,
        apply: set_dates,
    },
    LineRule {
        name: "location",
        matches: looks_like_location,
        apply: set_location,
    },
    LineRule {
        name: "detail",
        matches: is_detail,
        apply: push_detail,
    },
];

fn is_degree(line: &str) -> bool {
    DEGREE_REGEX.is_match(line)
        || DEGREE_ABBREV_REGEX
            .find_iter(line)
            .any(|m| !is_state_code(line, m.start()))
}

/// `Boston, MA`: an abbreviation right after a comma is a state, not a degree.
fn is_state_code(line: &str, start: usize) -> bool {
    line[..start].trim_end().ends_with(',')
}

fn is_institution(line: &str) -> bool {
    INSTITUTION_REGEX.is_match(line)
}

fn is_detail(line: &str) -> bool {
    line.chars().count() > MIN_DETAIL_CHARS
}

fn start_degree(acc: &mut Accumulator<EducationEntry>, line: &str) {
    let flush = !acc.current().institution.is_empty();
    acc.restart(flush);
    acc.current_mut().degree = line.to_string();
}

fn set_institution(acc: &mut Accumulator<EducationEntry>, line: &str) {
    acc.current_mut().institution = line.to_string();
}

fn set_dates(acc: &mut Accumulator<EducationEntry>, line: &str) {
    acc.current_mut().dates = line.to_string();
}

fn set_location(acc: &mut Accumulator<EducationEntry>, line: &str) {
    acc.current_mut().location = line.to_string();
}

fn push_detail(acc: &mut Accumulator<EducationEntry>, line: &str) {
    acc.current_mut().details.push(line);
}

/// Classifies an education segment. Never empty: an absent or unproductive
/// segment yields one blank placeholder entry.
pub fn classify_education(segment: Option<&str>) -> Vec<EducationEntry> {
    let entries = segment
        .map(|text| classify_lines(text, EDUCATION_RULES))
        .unwrap_or_default();
    if entries.is_empty() {
        vec![EducationEntry::default()]
    } else {
        entries
    }
}
