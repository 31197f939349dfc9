//! Compiled pattern tables.
//!
//! Each pattern is compiled once on first use. A pattern that fails to compile
//! is stored as `None` and simply never matches, so extraction can't panic.
//! Lists are ordered: callers take the first pattern that produces a match.

use regex::{Captures, Regex};
use std::sync::LazyLock;

pub type Pattern = LazyLock<Option<Regex>>;

macro_rules! pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: Pattern = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Contact ────────────────────────────────────────────────────────────────
pattern!(
    RE_EMAIL,
    r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b"
);

pattern!(RE_PHONE_REGIONAL_MOBILE, r"(?:\+91[-.\s]?)?[6-9]\d{9}");
pattern!(
    RE_PHONE_INTERNATIONAL,
    r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"
);
pattern!(RE_PHONE_TEN_DIGIT, r"\d{10}");
pattern!(RE_PHONE_US, r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}");

/// Most specific first; the bare forms only run when nothing better matched.
pub static PHONE_PATTERNS: [&Pattern; 4] = [
    &RE_PHONE_REGIONAL_MOBILE,
    &RE_PHONE_INTERNATIONAL,
    &RE_PHONE_TEN_DIGIT,
    &RE_PHONE_US,
];

// Profile links: canonical URL, then `Label: handle`, then a bare handle next
// to the keyword. The bare form only runs when neither of the others matched.
pattern!(
    RE_LINKEDIN_URL,
    r"(?i)linkedin\.com/(?:in|company)/[A-Za-z0-9\-]+"
);
pattern!(RE_LINKEDIN_LABEL, r"(?i)linkedin\s*:\s*@?[A-Za-z0-9\-]+");
pattern!(RE_LINKEDIN_BARE, r"(?i)@?[A-Za-z0-9\-]+\s*linkedin");

pub static LINKEDIN_PATTERNS: [&Pattern; 3] =
    [&RE_LINKEDIN_URL, &RE_LINKEDIN_LABEL, &RE_LINKEDIN_BARE];

pattern!(RE_GITHUB_URL, r"(?i)github\.com/[A-Za-z0-9\-]+");
pattern!(RE_GITHUB_LABEL, r"(?i)github\s*:\s*@?[A-Za-z0-9\-]+");
pattern!(RE_GITHUB_BARE, r"(?i)@?[A-Za-z0-9\-]+\s*github");

pub static GITHUB_PATTERNS: [&Pattern; 3] = [&RE_GITHUB_URL, &RE_GITHUB_LABEL, &RE_GITHUB_BARE];

// ── Name (line anchored, original text) ────────────────────────────────────
pattern!(
    RE_NAME_TITLE_CASE,
    r"(?m)^[ \t]*([A-Z][a-z]+[ \t]+[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)?)[ \t]*\r?$"
);
pattern!(
    RE_NAME_WITH_INITIAL,
    r"(?m)^[ \t]*([A-Z][a-z]+[ \t]+[A-Z]\.?[ \t]+[A-Z][a-z]+)[ \t]*\r?$"
);
pattern!(
    RE_NAME_LABELLED,
    r"(?i:name)[ \t]*:[ \t]*([A-Z][A-Za-z'\-]+[ \t]+[A-Z][A-Za-z'\-]+(?:[ \t]+[A-Z][A-Za-z'\-]+)?)"
);
pattern!(
    RE_NAME_ALL_CAPS,
    r"(?m)^[ \t]*([A-Z][A-Z'\-]+(?:[ \t]+[A-Z][A-Z'\-]+){1,2})[ \t]*\r?$"
);

pub static NAME_PATTERNS: [&Pattern; 4] = [
    &RE_NAME_TITLE_CASE,
    &RE_NAME_WITH_INITIAL,
    &RE_NAME_LABELLED,
    &RE_NAME_ALL_CAPS,
];

// ── Location ───────────────────────────────────────────────────────────────
pattern!(
    RE_LOCATION_LABELLED,
    r"(?i:address|location)[ \t]*:[ \t]*([A-Za-z0-9][A-Za-z0-9 .'\-]*(?:,[ \t]*[A-Za-z0-9][A-Za-z0-9 .'\-]*)*)"
);
pattern!(
    RE_LOCATION_KNOWN_CITY,
    r"\b(?:New Delhi|Delhi|Mumbai|Bangalore|Bengaluru|Hyderabad|Chennai|Kolkata|Pune|Ahmedabad|Jaipur|Noida|Gurgaon|Gurugram|Chandigarh|Lucknow|Indore|Bhopal|Kochi|Coimbatore|Nagpur|Surat|Vadodara|Visakhapatnam|Thiruvananthapuram|Mysore|Mysuru|New York|San Francisco|San Jose|Seattle|Austin|Boston|Chicago|Los Angeles|Denver|Atlanta|London|Manchester|Dublin|Berlin|Munich|Amsterdam|Paris|Toronto|Vancouver|Singapore|Sydney|Melbourne|Dubai|Tokyo)\b(?:,[ \t]*[A-Z][A-Za-z]+(?:[ \t][A-Z][A-Za-z]+)*){0,2}"
);
pattern!(
    RE_LOCATION_CITY_REGION,
    r"\b[A-Z][a-z]+(?:[ \t][A-Z][a-z]+)?,[ \t]*(?:[A-Z]{2}\b|[A-Z][a-z]+(?:[ \t][A-Z][a-z]+)?)"
);
pattern!(
    RE_LOCATION_PLACE_LABEL,
    r"(?i:city|state|country)[ \t]*:[ \t]*([^\n\r]+)"
);

pub static LOCATION_PATTERNS: [&Pattern; 4] = [
    &RE_LOCATION_LABELLED,
    &RE_LOCATION_KNOWN_CITY,
    &RE_LOCATION_CITY_REGION,
    &RE_LOCATION_PLACE_LABEL,
];

// ── Summary ────────────────────────────────────────────────────────────────
pattern!(
    RE_SUMMARY_HEADER,
    r"(?im)^[ \t]*(?:(?:professional|career)[ \t]+)?(?:summary|objective|profile|about[ \t]+me)\b[ \t]*:?[ \t]*"
);
pattern!(RE_SUMMARY_SENTENCE, r"(?m)^[ \t]*([A-Z][^.!?]{78,398}[.!?])");
pattern!(RE_BLANK_LINE, r"\r?\n[ \t]*\r?\n");

// ── Experience ─────────────────────────────────────────────────────────────
// A bare hyphen only separates fields when spaced, so "Full-Stack" and
// "2019-2021" survive intact. The trailing description field is optional.
pattern!(
    RE_EXPERIENCE_DASHED,
    r"(?m)^[ \t]*([^•\n\r]+?)(?:[ \t]+-[ \t]+|[ \t]*[–—|][ \t]*)([^•\n\r]+?)(?:[ \t]+-[ \t]+|[ \t]*[–—|][ \t]*)([^•\n\r]+?)(?:(?:[ \t]+-[ \t]+|[ \t]*[–—|][ \t]*)([^•\n\r]*?))?[ \t]*\r?$"
);
// The second half of a date range that a spaced hyphen split off the duration
// ("Jan 2020 - Present").
pattern!(
    RE_DATE_TAIL,
    r"(?i)^(?:present|current|now|till date|(?:(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?[ \t]+)?(?:19|20)\d{2})$"
);
pattern!(
    RE_EXPERIENCE_AT,
    r"(?m)^[ \t]*([^•\n\r]+?)[ \t]+(?i:at|@)[ \t]+([^•\n\r]+?)(?:[ \t]+-[ \t]+|[ \t]*[–—|,][ \t]*)([^•\n\r]+?)[ \t]*\r?$"
);
pattern!(
    RE_EXPERIENCE_LABELLED,
    r"(?im)^[ \t]*(?:title|role|position|designation)[ \t]*:[ \t]*([^\n\r]+?)[ \t]*\r?\n[ \t]*(?:company|employer|organi[sz]ation)[ \t]*:[ \t]*([^\n\r]+?)[ \t]*\r?(?:\n[ \t]*(?:duration|dates?|period)[ \t]*:[ \t]*([^\n\r]+?)[ \t]*\r?)?(?:\n[ \t]*(?:description|summary|responsibilities)[ \t]*:[ \t]*([^\n\r]+?)[ \t]*\r?)?$"
);

pub static EXPERIENCE_PATTERNS: [&Pattern; 3] = [
    &RE_EXPERIENCE_DASHED,
    &RE_EXPERIENCE_AT,
    &RE_EXPERIENCE_LABELLED,
];

// ── Education ──────────────────────────────────────────────────────────────
// Degree line: group 1 degree, group 2 institution, group 3 the rest of the
// line (scanned separately for year and GPA).
pattern!(
    RE_EDUCATION_DEGREE_LINE,
    r"(?m)^[ \t]*([^\n\r]*?\b(?:Bachelor|Master|Doctor|Ph\.?[ \t]?D|B\.?[ \t]?Tech|M\.?[ \t]?Tech|B\.?[ \t]?Sc|M\.?[ \t]?Sc|B\.[ \t]?[SAE]\.?|M\.[ \t]?[SAE]\.?|MBA|BBA|BCA|MCA|Associate|Diploma)[^\n\r]*?)(?:[ \t]+-[ \t]+|[ \t]*[,–—|][ \t]*|[ \t]+(?:from|at)[ \t]+)([^\n\r,|(–—]*?\b(?i:university|college|institute|school|academy|polytechnic)\b[A-Za-z .'&]*)([^\n\r]*?)\r?$"
);
pattern!(
    RE_EDUCATION_LABELLED,
    r"(?im)^[ \t]*degree[ \t]*:[ \t]*([^\n\r]+?)[ \t]*\r?\n[ \t]*(?:institution|university|college|school)[ \t]*:[ \t]*([^\n\r]+?)[ \t]*\r?(?:\n[ \t]*(?:year|graduated|graduation)[ \t]*:[ \t]*([^\n\r]+?)[ \t]*\r?)?(?:\n[ \t]*c?gpa[ \t]*:[ \t]*([^\n\r]+?)[ \t]*\r?)?$"
);
pattern!(
    RE_EDUCATION_THREE_LINE,
    r"(?m)^[ \t]*([^\n\r]+?)[ \t]*\r?\n[ \t]*([^\n\r]+?)[ \t]*\r?\n[ \t]*((?:19|20)\d{2}[^\n\r]*?)[ \t]*\r?$"
);

pub static EDUCATION_PATTERNS: [&Pattern; 3] = [
    &RE_EDUCATION_DEGREE_LINE,
    &RE_EDUCATION_LABELLED,
    &RE_EDUCATION_THREE_LINE,
];

pattern!(
    RE_YEAR,
    r"\b(?:19|20)\d{2}(?:[ \t]*[-–—][ \t]*(?:(?:19|20)\d{2}|(?i:present)))?"
);
pattern!(RE_GPA, r"(?i)\bc?gpa[ \t]*:?[ \t]*([0-9]+(?:\.[0-9]+)?(?:[ \t]*/[ \t]*[0-9]+(?:\.[0-9]+)?)?)");

/// Tries each pattern in order against the whole text and returns the first
/// pattern's first match. Later patterns are never consulted once one matches.
pub fn first_match<'t>(patterns: &[&Pattern], text: &'t str) -> Option<Captures<'t>> {
    patterns
        .iter()
        .filter_map(|p| p.as_ref())
        .find_map(|re| re.captures(text))
}

/// Trimmed text of capture group `i`, or `""` when the group did not participate.
pub fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map(|m| m.as_str().trim()).unwrap_or("")
}
