//! Name, location and summary.
//!
//! These scans are line anchored, so they run on the original text rather than
//! the whitespace-normalized copy.

use crate::resume::patterns::{
    group, LOCATION_PATTERNS, NAME_PATTERNS, RE_BLANK_LINE, RE_SUMMARY_HEADER,
    RE_SUMMARY_SENTENCE,
};
use crate::resume::sections::{is_section_heading, section_range, SectionKind};
use crate::resume::text::{is_all_uppercase, lines_with_offsets, normalize_whitespace, title_case};

const MIN_SUMMARY_CHARS: usize = 50;

/// First name pattern with a non-heading match wins. Shouted names are
/// converted to title case.
pub fn extract_name(text: &str) -> String {
    for re in NAME_PATTERNS.iter().filter_map(|p| p.as_ref()) {
        let candidate = re
            .captures_iter(text)
            .map(|c| group(&c, 1))
            .find(|name| !name.is_empty() && !is_section_heading(name));

        if let Some(name) = candidate {
            let name = normalize_whitespace(name);
            return if is_all_uppercase(&name) {
                title_case(&name)
            } else {
                name
            };
        }
    }
    String::new()
}

/// First location pattern with a match outside the Skills section wins, since
/// a list like "Python, Java" reads as "City, Region".
pub fn extract_location(text: &str) -> String {
    let skills = section_range(text, SectionKind::Skills);
    let in_skills = |offset: usize| skills.as_ref().is_some_and(|r| r.contains(&offset));

    let Some(caps) = LOCATION_PATTERNS
        .iter()
        .filter_map(|p| p.as_ref())
        .find_map(|re| {
            re.captures_iter(text)
                .find(|c| c.get(0).is_some_and(|m| !in_skills(m.start())))
        })
    else {
        return String::new();
    };
    let value = match caps.get(1) {
        Some(m) => m.as_str(),
        None => group(&caps, 0),
    };
    normalize_whitespace(value)
        .trim_end_matches([',', '.', ';', '|'])
        .trim()
        .to_string()
}

/// A labelled summary section, else the first long standalone sentence.
pub fn extract_summary(text: &str) -> String {
    labelled_summary(text)
        .or_else(|| leading_sentence(text))
        .unwrap_or_default()
}

fn labelled_summary(text: &str) -> Option<String> {
    let header = RE_SUMMARY_HEADER.as_ref()?.find(text)?;
    let body = &text[header.end()..];

    let mut parts = Vec::new();
    for (_, line) in lines_with_offsets(body) {
        let line = line.trim();
        if is_section_heading(line) {
            break;
        }
        if line.is_empty() {
            if parts.is_empty() {
                continue;
            }
            break;
        }
        parts.push(line);
    }

    let summary = normalize_whitespace(&parts.join(" "));
    (summary.chars().count() >= MIN_SUMMARY_CHARS).then_some(summary)
}

fn leading_sentence(text: &str) -> Option<String> {
    let re = RE_SUMMARY_SENTENCE.as_ref()?;
    paragraphs(text).find_map(|block| {
        re.captures_iter(block).find_map(|caps| {
            let sentence = caps.get(1)?;
            if !closes_block(&block[sentence.end()..]) {
                return None;
            }
            let summary = normalize_whitespace(sentence.as_str());
            (summary.chars().count() >= MIN_SUMMARY_CHARS).then_some(summary)
        })
    })
}

/// Blocks of text separated by blank lines.
fn paragraphs(text: &str) -> Box<dyn Iterator<Item = &str> + '_> {
    match RE_BLANK_LINE.as_ref() {
        Some(re) => Box::new(re.split(text)),
        None => Box::new(std::iter::once(text)),
    }
}

/// The sentence must end its line, and the line after it (if any, within the
/// paragraph) must be a section heading.
fn closes_block(after: &str) -> bool {
    let mut lines = after.split('\n');
    if !lines.next().unwrap_or("").trim().is_empty() {
        return false;
    }
    match lines.next() {
        None => true,
        Some(next) => is_section_heading(next),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_caps_name_is_title_cased() {
        assert_eq!(extract_name("JOHN SMITH"), "John Smith");
        assert_eq!(extract_name("\n  JOHN SMITH  \n"), "John Smith");
    }

    #[test]
    fn test_title_case_name_on_first_line() {
        let text = "Jane Ann Doe\njane@example.com\nSoftware Engineer";
        assert_eq!(extract_name(text), "Jane Ann Doe");
    }

    #[test]
    fn test_name_with_middle_initial() {
        assert_eq!(extract_name("Jane Q. Public\nEngineer"), "Jane Q. Public");
    }

    #[test]
    fn test_labelled_name() {
        assert_eq!(extract_name("Name: Priya Sharma\nPhone: 98"), "Priya Sharma");
    }

    #[test]
    fn test_headings_are_not_names() {
        assert_eq!(extract_name("WORK EXPERIENCE\nTechnical Skills"), "");
        assert_eq!(
            extract_name("PROFESSIONAL SUMMARY\nMARIA GARCIA"),
            "Maria Garcia"
        );
    }

    #[test]
    fn test_no_name() {
        assert_eq!(extract_name(""), "");
        assert_eq!(extract_name("just lowercase words here"), "");
    }

    #[test]
    fn test_location_labelled() {
        assert_eq!(
            extract_location("Location: Pune, Maharashtra, India | +91 9876543210"),
            "Pune, Maharashtra, India"
        );
    }

    #[test]
    fn test_location_known_city_with_qualifier() {
        assert_eq!(
            extract_location("jane@example.com · Bangalore, India · 2024"),
            "Bangalore, India"
        );
    }

    #[test]
    fn test_location_generic_city_region() {
        assert_eq!(
            extract_location("jane@example.com\nPortland, OR\n"),
            "Portland, OR"
        );
    }

    #[test]
    fn test_skills_list_is_not_a_location() {
        assert_eq!(extract_location("Jane Doe\nSkills\nPython, Java, Docker\n"), "");
    }

    #[test]
    fn test_location_after_skills_section() {
        let text = "Jane Doe\n\
            Technical Skills\n\
            Python, Java, Docker\n\
            \n\
            Contact\n\
            Portland, OR\n";
        assert_eq!(extract_location(text), "Portland, OR");
    }

    #[test]
    fn test_location_place_label() {
        assert_eq!(extract_location("country: india"), "india");
    }

    #[test]
    fn test_labelled_summary_stops_at_heading() {
        let text = "Jane Doe\n\nSummary\nBackend engineer with eight years building payment\nsystems and distributed storage at scale.\nExperience\nEngineer at Acme - 2020";
        assert_eq!(
            extract_summary(text),
            "Backend engineer with eight years building payment systems and distributed storage at scale."
        );
    }

    #[test]
    fn test_inline_objective() {
        let text = "Objective: To join a product team where I can apply my data engineering background.\n\nSkills";
        assert_eq!(
            extract_summary(text),
            "To join a product team where I can apply my data engineering background."
        );
    }

    #[test]
    fn test_short_summary_rejected() {
        assert_eq!(extract_summary("Summary: Engineer.\n\nSkills"), "");
    }

    #[test]
    fn test_fallback_sentence_followed_by_blank_line() {
        let text = "Jane Doe\n\nCurious engineer who enjoys turning messy operational problems into small reliable services.\n\nSkills\nRust";
        assert_eq!(
            extract_summary(text),
            "Curious engineer who enjoys turning messy operational problems into small reliable services."
        );
    }

    #[test]
    fn test_fallback_sentence_must_close_a_block() {
        let text = "Curious engineer who enjoys turning messy operational problems into small reliable services. More text follows on the same line";
        assert_eq!(extract_summary(text), "");
    }
}
