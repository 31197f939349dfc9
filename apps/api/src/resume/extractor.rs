use crate::resume::contact::{extract_email, extract_github, extract_linkedin, extract_phone};
use crate::resume::entries::{extract_education, extract_experience, extract_projects};
use crate::resume::identity::{extract_location, extract_name, extract_summary};
use crate::resume::model::{ExtractedResume, PersonalInfo};
use crate::resume::skills::extract_skills;
use crate::resume::text::normalize_whitespace;

/// Turns raw resume text into a structured record.
///
/// Every field is resolved independently; one that finds nothing keeps its
/// default. Pure and deterministic: the same input always yields the same
/// record.
pub fn extract(raw: &str) -> ExtractedResume {
    let normalized = normalize_whitespace(raw);

    let personal_info = PersonalInfo {
        name: extract_name(raw),
        email: extract_email(&normalized),
        phone: extract_phone(&normalized),
        location: extract_location(raw),
        summary: extract_summary(raw),
        linkedin: extract_linkedin(&normalized),
        github: extract_github(&normalized),
    };

    let resume = ExtractedResume {
        personal_info,
        skills: extract_skills(&normalized),
        experience: extract_experience(raw),
        education: extract_education(raw),
        projects: extract_projects(raw),
    };

    tracing::debug!(
        skills = resume.skills.len(),
        experience = resume.experience.len(),
        education = resume.education.len(),
        projects = resume.projects.len(),
        "resume fields extracted"
    );
    resume
}
