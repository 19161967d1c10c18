//! Contact extraction — pulls name, email, phone and LinkedIn out of raw text,
//! independent of any section structure.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email regex")
});

/// Loose North-American shape: optional +1, optional parens, `-`/`.`/space separators.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?1?[-.\s]?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").expect("phone regex")
});

static LINKEDIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)linkedin\.com/(?:in|pub)/([a-zA-Z0-9-]+)").expect("linkedin regex")
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
}

/// Extracts contact fields. Every field is `""` when nothing matches.
///
/// The name is simply the first non-blank line. Documents that open with a
/// heading or decorative text will get that text as the name; this is a
/// known limitation of the heuristic.
pub fn extract_contact(text: &str) -> ContactInfo {
    let email = EMAIL_REGEX
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    // The optional leading separator can swallow the preceding newline.
    let phone = PHONE_REGEX
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let linkedin = LINKEDIN_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|handle| format!("linkedin.com/in/{}", handle.as_str()))
        .unwrap_or_default();

    let name = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string();

    ContactInfo {
        name,
        email,
        phone,
        linkedin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_block_extracts_all_fields() {
        let text = "Jane Doe\njane.doe@email.com\n(555) 123-4567\nlinkedin.com/in/janedoe";
        let contact = extract_contact(text);
        assert_eq!(
            contact,
            ContactInfo {
                name: "Jane Doe".to_string(),
                email: "jane.doe@email.com".to_string(),
                phone: "(555) 123-4567".to_string(),
                linkedin: "linkedin.com/in/janedoe".to_string(),
            }
        );
    }

    #[test]
    fn test_name_skips_leading_blank_lines() {
        let contact = extract_contact("\n   \n  John Smith  \nSoftware Engineer");
        assert_eq!(contact.name, "John Smith");
    }

    #[test]
    fn test_name_heuristic_takes_heading_verbatim() {
        // Known limitation: no validation that the first line is a person's name.
        let contact = extract_contact("CURRICULUM VITAE\nJohn Smith");
        assert_eq!(contact.name, "CURRICULUM VITAE");
    }

    #[test]
    fn test_phone_variants() {
        for (input, expected) in [
            ("call +1 555.123.4567 now", "+1 555.123.4567"),
            ("tel: 555-123-4567", "555-123-4567"),
            ("5551234567", "5551234567"),
        ] {
            assert_eq!(extract_contact(input).phone, expected, "input: {input}");
        }
    }

    #[test]
    fn test_linkedin_pub_normalized_to_in() {
        let contact = extract_contact("https://www.LinkedIn.com/pub/john-smith-42");
        assert_eq!(contact.linkedin, "linkedin.com/in/john-smith-42");
    }

    #[test]
    fn test_first_email_wins() {
        let contact = extract_contact("a.b@first.io and c@second.org");
        assert_eq!(contact.email, "a.b@first.io");
    }

    #[test]
    fn test_no_matches_yield_empty_fields() {
        let contact = extract_contact("");
        assert_eq!(contact, ContactInfo::default());

        let contact = extract_contact("Only a name here");
        assert_eq!(contact.name, "Only a name here");
        assert_eq!(contact.email, "");
        assert_eq!(contact.phone, "");
        assert_eq!(contact.linkedin, "");
    }
}
