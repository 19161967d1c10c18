//! Skills classifier: one `SkillGroup` per meaningful line.

use crate::models::resume::SkillGroup;

pub const DEFAULT_SKILL_CATEGORY: &str = "Technical Skills";

/// Lines must be longer than this many characters to count.
const MIN_LINE_CHARS: usize = 5;

/// `Category: items` splits on the first colon; anything else is filed under
/// [`DEFAULT_SKILL_CATEGORY`]. Never empty: falls back to one blank group.
pub fn classify_skills(segment: Option<&str>) -> Vec<SkillGroup> {
    let groups: Vec<SkillGroup> = segment
        .map(|text| {
            text.lines()
                .map(str::trim)
                .filter(|line| line.chars().count() > MIN_LINE_CHARS)
                .map(parse_skill_line)
                .collect()
        })
        .unwrap_or_default();

    if groups.is_empty() {
        vec![SkillGroup {
            category: DEFAULT_SKILL_CATEGORY.to_string(),
            items: String::new(),
        }]
    } else {
        groups
    }
}

fn parse_skill_line(line: &str) -> SkillGroup {
    match line.split_once(':') {
        Some((category, items)) => SkillGroup {
            category: category.trim().to_string(),
            items: items.trim().to_string(),
        },
        None => SkillGroup {
            category: DEFAULT_SKILL_CATEGORY.to_string(),
            items: line.to_string(),
        },
    }
}
