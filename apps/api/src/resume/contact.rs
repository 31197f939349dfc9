//! Email, phone and profile links. All scans run on whitespace-normalized text.

use crate::resume::patterns::{
    first_match, Pattern, GITHUB_PATTERNS, LINKEDIN_PATTERNS, PHONE_PATTERNS, RE_EMAIL,
};

pub fn extract_email(normalized: &str) -> String {
    first_match(&[&RE_EMAIL], normalized)
        .and_then(|c| c.get(0))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First pattern in priority order that matches anywhere wins, even when a
/// later pattern would have matched earlier in the text.
pub fn extract_phone(normalized: &str) -> String {
    first_match(&PHONE_PATTERNS, normalized)
        .and_then(|c| c.get(0))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// A professional profile platform with a canonical URL shape.
struct Platform {
    /// Canonical URL, labelled and bare forms, tried in that order.
    patterns: &'static [&'static Pattern],
    /// Lowercase keyword used as the label and to spot canonical matches.
    keyword: &'static str,
    domain: &'static str,
    /// Path segment placed between the domain and a bare handle.
    handle_prefix: &'static str,
}

static LINKEDIN: Platform = Platform {
    patterns: &LINKEDIN_PATTERNS,
    keyword: "linkedin",
    domain: "linkedin.com",
    handle_prefix: "in/",
};

static GITHUB: Platform = Platform {
    patterns: &GITHUB_PATTERNS,
    keyword: "github",
    domain: "github.com",
    handle_prefix: "",
};

pub fn extract_linkedin(normalized: &str) -> String {
    extract_profile_url(&LINKEDIN, normalized)
}

pub fn extract_github(normalized: &str) -> String {
    extract_profile_url(&GITHUB, normalized)
}

fn extract_profile_url(platform: &Platform, normalized: &str) -> String {
    let Some(matched) = first_match(platform.patterns, normalized)
        .and_then(|c| c.get(0))
        .map(|m| m.as_str().trim().to_string())
    else {
        return String::new();
    };

    let url = if matched.to_lowercase().contains(platform.domain) {
        matched
    } else {
        let handle = strip_label(&matched, platform.keyword);
        if handle.is_empty() {
            return String::new();
        }
        format!("{}/{}{}", platform.domain, platform.handle_prefix, handle)
    };

    if url.to_lowercase().starts_with("http") {
        url
    } else {
        format!("https://{url}")
    }
}

/// Removes `@`, the platform keyword (any casing) and an optional colon,
/// leaving only the handle.
fn strip_label(matched: &str, keyword: &str) -> String {
    let lower = matched.to_lowercase();
    let without_keyword = lower
        .find(keyword)
        .and_then(|i| Some((matched.get(..i)?, matched.get(i + keyword.len()..)?)))
        .map(|(head, tail)| format!("{head}{tail}"))
        .unwrap_or_else(|| matched.to_string());
    without_keyword
        .replace('@', "")
        .trim()
        .trim_start_matches(':')
        .trim()
        .to_string()
}
