//! Experience, education and project entries.
//!
//! Each kind is scanned only inside its own bounded section. Patterns are
//! tried in order and applied globally; the first pattern that yields at least
//! one accepted entry supplies the whole list.

use regex::Captures;

use crate::resume::model::{EducationEntry, ExperienceEntry, ProjectEntry};
use crate::resume::patterns::{
    group, Pattern, EDUCATION_PATTERNS, EXPERIENCE_PATTERNS, RE_DATE_TAIL, RE_GPA, RE_YEAR,
};
use crate::resume::sections::{bounded_section, find_section, is_section_heading, SectionKind};
use crate::resume::text::{is_bullet, lines_with_offsets, normalize_whitespace, strip_bullet};

pub const DEFAULT_DURATION: &str = "Duration not specified";
pub const DEFAULT_EXPERIENCE_DESCRIPTION: &str = "Experience details extracted from resume.";
pub const DEFAULT_TECHNOLOGIES: &str = "Various technologies";
pub const MAX_PROJECTS: usize = 5;

const MAX_TITLE_CHARS: usize = 60;
const MAX_TITLE_WORDS: usize = 8;

/// Runs `patterns` in order over `section` and returns the entries from the
/// first pattern that produced any.
fn first_productive<T>(
    patterns: &[&Pattern],
    section: &str,
    mut accept: impl FnMut(&Captures<'_>) -> Option<T>,
) -> Vec<T> {
    for re in patterns.iter().filter_map(|p| p.as_ref()) {
        let entries: Vec<T> = re
            .captures_iter(section)
            .filter_map(|caps| accept(&caps))
            .collect();
        if !entries.is_empty() {
            return entries;
        }
    }
    Vec::new()
}

fn is_plausible_label(text: &str) -> bool {
    !text.is_empty() && !is_bullet(text) && !is_section_heading(text)
}

pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let section = bounded_section(text, SectionKind::Experience);

    first_productive(&EXPERIENCE_PATTERNS, section, |caps| {
        let title = group(caps, 1);
        let company = group(caps, 2);
        if !is_plausible_label(title)
            || company.is_empty()
            || title.contains('@')
            || company.contains('@')
        {
            return None;
        }

        // "Jan 2020 - Present": the spaced hyphen split the range, so the
        // fourth field is the end date rather than a description.
        let (duration, inline_description) = match (caps.get(3), caps.get(4)) {
            (Some(from), Some(to))
                if is_date_tail(to.as_str().trim())
                    && !section[from.end()..to.start()].contains('\n') =>
            {
                (section[from.start()..to.end()].trim(), "")
            }
            _ => (group(caps, 3), group(caps, 4)),
        };

        let duration = match duration {
            "" => DEFAULT_DURATION.to_string(),
            d => d.to_string(),
        };
        let description = match inline_description {
            "" => bullets_after(section, caps.get(0)?.end())
                .unwrap_or_else(|| DEFAULT_EXPERIENCE_DESCRIPTION.to_string()),
            d => d.to_string(),
        };

        Some(ExperienceEntry {
            title: title.to_string(),
            company: company.to_string(),
            duration,
            description,
        })
    })
}

fn is_date_tail(field: &str) -> bool {
    RE_DATE_TAIL.as_ref().is_some_and(|re| re.is_match(field))
}

/// Joins the bullet lines directly below `offset`'s line.
fn bullets_after(section: &str, offset: usize) -> Option<String> {
    let rest = &section[offset..];
    let bullets: Vec<&str> = lines_with_offsets(rest)
        .skip(1)
        .map(|(_, line)| line)
        .take_while(|line| is_bullet(line))
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .collect();

    (!bullets.is_empty()).then(|| bullets.join(" "))
}

pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let section = bounded_section(text, SectionKind::Education);

    first_productive(&EDUCATION_PATTERNS, section, |caps| {
        let degree = group(caps, 1);
        let institution = group(caps, 2);
        if !is_plausible_label(degree) || institution.is_empty() {
            return None;
        }

        let details = group(caps, 3);
        let year = RE_YEAR
            .as_ref()
            .and_then(|re| re.find(details))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        let gpa = match group(caps, 4) {
            "" => RE_GPA
                .as_ref()
                .and_then(|re| re.captures(details))
                .map(|c| group(&c, 1).to_string())
                .unwrap_or_default(),
            g => g.to_string(),
        };

        Some(EducationEntry {
            degree: degree.to_string(),
            institution: institution.to_string(),
            year,
            gpa,
        })
    })
}

/// Projects are read only from an explicit Projects/Portfolio section.
pub fn extract_projects(text: &str) -> Vec<ProjectEntry> {
    let Some(section) = find_section(text, SectionKind::Projects) else {
        return Vec::new();
    };

    let lines: Vec<&str> = section
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut projects = Vec::new();
    let mut i = 0;
    while i < lines.len() && projects.len() < MAX_PROJECTS {
        let title = lines[i];
        i += 1;
        if !looks_like_title(title) {
            continue;
        }

        let mut description = Vec::new();
        while let Some(&line) = lines.get(i) {
            if looks_like_title(line) {
                break;
            }
            description.push(strip_bullet(line));
            i += 1;
        }

        projects.push(ProjectEntry {
            name: title.trim_end_matches(':').trim().to_string(),
            description: normalize_whitespace(&description.join(" ")),
            technologies: DEFAULT_TECHNOLOGIES.to_string(),
            link: String::new(),
        });
    }
    projects
}

/// A short capitalised line that reads like a name rather than a sentence.
fn looks_like_title(line: &str) -> bool {
    let line = line.trim();
    let body = line.trim_end_matches(':');
    let chars = body.chars().count();

    !is_bullet(line)
        && (2..=MAX_TITLE_CHARS).contains(&chars)
        && body.chars().next().is_some_and(|c| c.is_uppercase())
        && !body.ends_with(['.', '!', '?', ','])
        && !body.contains(':')
        && body.split_whitespace().count() <= MAX_TITLE_WORDS
}
