//! Section headings and bounded sections.
//!
//! A bounded section runs from the line after its heading to the next line
//! that is any recognised heading. Bounding is line based, so a section that
//! appears earlier or later in the document never leaks into another one.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::resume::text::lines_with_offsets;

static RE_ANY_HEADING: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:professional|work|career|technical|core|key|academic|educational|personal|relevant|selected)\s+)?(?:summary|objective|profile|about\s+me|experience|employment(?:\s+history)?|work\s+history|history|education|academics?|academic\s+background|qualifications?|skills|skill\s+set|competencies|projects|portfolio|certifications?|licenses|awards|honou?rs|achievements|accomplishments|publications|languages|interests|hobbies|references|contact(?:\s+(?:information|details))?|volunteering|volunteer\s+experience|activities|extracurricular\s+activities|training|courses)\s*:?$",
    )
    .ok()
});

static RE_EXPERIENCE_HEADING: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:professional|work|relevant|career)\s+)?(?:experience|employment(?:\s+history)?|work\s+history|career\s+history)\s*:?$",
    )
    .ok()
});

static RE_EDUCATION_HEADING: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:academic|educational)\s+)?(?:education|academics?|academic\s+background|qualifications?)(?:\s+(?:background|details|history))?\s*:?$",
    )
    .ok()
});

static RE_PROJECTS_HEADING: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:key|selected|personal|academic|relevant)\s+)?(?:projects|portfolio)\s*:?$",
    )
    .ok()
});

static RE_SKILLS_HEADING: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:(?:technical|core|key|relevant)\s+)?(?:skills|skill\s+set|competencies)\s*:?$",
    )
    .ok()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Experience,
    Education,
    Projects,
    Skills,
}

impl SectionKind {
    fn heading(self) -> &'static LazyLock<Option<Regex>> {
        match self {
            SectionKind::Experience => &RE_EXPERIENCE_HEADING,
            SectionKind::Education => &RE_EDUCATION_HEADING,
            SectionKind::Projects => &RE_PROJECTS_HEADING,
            SectionKind::Skills => &RE_SKILLS_HEADING,
        }
    }

    fn is_heading(self, line: &str) -> bool {
        matches_trimmed(self.heading(), line)
    }
}

fn matches_trimmed(re: &LazyLock<Option<Regex>>, line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && re.as_ref().is_some_and(|re| re.is_match(trimmed))
}

/// True when the whole line is a recognised resume section heading.
pub fn is_section_heading(line: &str) -> bool {
    matches_trimmed(&RE_ANY_HEADING, line)
}

/// Byte range of the section of `kind` inside `text`, heading line excluded.
///
/// Returns `None` when no heading of that kind exists.
pub fn section_range(text: &str, kind: SectionKind) -> Option<Range<usize>> {
    let mut lines = lines_with_offsets(text);
    let start = lines
        .find_map(|(offset, line)| kind.is_heading(line).then(|| next_line_start(text, offset)))?;

    let end = lines_with_offsets(&text[start..])
        .find(|(_, line)| is_section_heading(line))
        .map(|(offset, _)| start + offset)
        .unwrap_or(text.len());

    Some(start..end)
}

/// Locates the section of `kind` inside `text`.
pub fn find_section(text: &str, kind: SectionKind) -> Option<&str> {
    section_range(text, kind).and_then(|range| text.get(range))
}

/// The bounded section of `kind`, or the whole text when it has no such heading.
pub fn bounded_section(text: &str, kind: SectionKind) -> &str {
    find_section(text, kind).unwrap_or(text)
}

fn next_line_start(text: &str, line_offset: usize) -> usize {
    text[line_offset..]
        .find('\n')
        .map(|i| line_offset + i + 1)
        .unwrap_or(text.len())
}
