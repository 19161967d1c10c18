//! Experience classifier.
//!
//! Priority: title > company > dates > location > detail. A title line opens
//! a new entry, committing the previous one only if it had a company.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::classifier::{
    classify_lines, has_year, looks_like_location, Accumulator, LineRule, SectionEntry,
};
use crate::models::resume::ExperienceEntry;

static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)engineer|developer|manager|analyst|coordinator|specialist|intern|assistant",
    )
    .expect("title regex")
});

static COMPANY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)inc\.|llc|corp|company|technologies|solutions").expect("company regex")
});

static BULLET_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[•\-]\s*").expect("bullet regex"));

/// Unbulleted detail lines must be longer than this many characters.
const MIN_DETAIL_CHARS: usize = 15;

impl SectionEntry for ExperienceEntry {
    fn is_anchored(&self) -> bool {
        !self.title.is_empty() || !self.company.is_empty()
    }
}

pub static EXPERIENCE_RULES: &[LineRule<ExperienceEntry>] = &[
    LineRule {
        name: "title",
        matches: is_title,
        apply: start_title,
    },
    LineRule {
        name: "company",
        matches: is_company,
        apply: set_company,
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

fn is_title(line: &str) -> bool {
    TITLE_REGEX.is_match(line)
}

fn is_company(line: &str) -> bool {
    COMPANY_REGEX.is_match(line)
}

fn is_detail(line: &str) -> bool {
    line.starts_with('•') || line.starts_with('-') || line.chars().count() > MIN_DETAIL_CHARS
}

fn start_title(acc: &mut Accumulator<ExperienceEntry>, line: &str) {
    let flush = !acc.current().company.is_empty();
    acc.restart(flush);
    acc.current_mut().title = line.to_string();
}

fn set_company(acc: &mut Accumulator<ExperienceEntry>, line: &str) {
    acc.current_mut().company = line.to_string();
}

fn set_dates(acc: &mut Accumulator<ExperienceEntry>, line: &str) {
    acc.current_mut().dates = line.to_string();
}

fn set_location(acc: &mut Accumulator<ExperienceEntry>, line: &str) {
    acc.current_mut().location = line.to_string();
}

fn push_detail(acc: &mut Accumulator<ExperienceEntry>, line: &str) {
    let stripped = BULLET_PREFIX_REGEX.replace(line, "");
    acc.current_mut().details.push(stripped.into_owned());
}

/// Classifies an experience segment. Never empty: an absent or unproductive
/// segment yields one blank placeholder entry.
pub fn classify_experience(segment: Option<&str>) -> Vec<ExperienceEntry> {
    let entries = segment
        .map(|text| classify_lines(text, EXPERIENCE_RULES))
        .unwrap_or_default();
    if entries.is_empty() {
        vec![ExperienceEntry::default()]
    } else {
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::classifier::matching_rule;

    #[test]
    fn test_rule_priority_order() {
        let names: Vec<_> = EXPERIENCE_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["title", "company", "dates", "location", "detail"]);
    }

    #[test]
    fn test_ambiguous_lines_resolve_by_priority() {
        assert_eq!(
            matching_rule("Data Analyst at Acme Corp", EXPERIENCE_RULES),
            Some("title")
        );
        assert_eq!(
            matching_rule("Globex Solutions 2019", EXPERIENCE_RULES),
            Some("company")
        );
        assert_eq!(matching_rule("Jan 2020 - Present", EXPERIENCE_RULES), Some("dates"));
        assert_eq!(matching_rule("Denver, CO", EXPERIENCE_RULES), Some("location"));
        assert_eq!(matching_rule("- Shipped", EXPERIENCE_RULES), Some("detail"));
        assert_eq!(matching_rule("Did things", EXPERIENCE_RULES), None);
    }

    #[test]
    fn test_two_titles_yield_two_entries() {
        let segment = "\nSenior Software Engineer\n\
            Acme Technologies\n\
            Jan 2020 - Present\n\
            Denver, CO\n\
            • Reduced p99 latency by 40% across services\n\
            - Led migration to Kubernetes\n\
            Backend Developer\n\
            Globex LLC\n\
            2017 - 2019\n\
            Maintained billing pipelines for enterprise clients\n";
        let entries = classify_experience(Some(segment));
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].title, "Senior Software Engineer");
        assert_eq!(entries[0].company, "Acme Technologies");
        assert_eq!(entries[0].dates, "Jan 2020 - Present");
        assert_eq!(entries[0].location, "Denver, CO");
        assert_eq!(
            entries[0].details.lines(),
            vec![
                "Reduced p99 latency by 40% across services",
                "Led migration to Kubernetes",
            ]
        );

        assert_eq!(entries[1].title, "Backend Developer");
        assert_eq!(entries[1].company, "Globex LLC");
        assert_eq!(
            entries[1].details.lines(),
            vec!["Maintained billing pipelines for enterprise clients"]
        );
    }

    #[test]
    fn test_short_bullet_lines_are_kept() {
        let entries = classify_experience(Some("Intern\nInitech Inc.\n- Wrote docs"));
        assert_eq!(entries[0].details.lines(), vec!["Wrote docs"]);
    }

    #[test]
    fn test_company_only_entry_is_flushed() {
        let entries = classify_experience(Some("Initech Inc.\nAustin, TX"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "");
        assert_eq!(entries[0].company, "Initech Inc.");
        assert_eq!(entries[0].location, "Austin, TX");
    }

    #[test]
    fn test_absent_segment_yields_placeholder() {
        assert_eq!(classify_experience(None), vec![ExperienceEntry::default()]);
    }
}
