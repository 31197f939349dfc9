use serde::{Deserialize, Serialize};

/// Contact and identity fields. Every field is `""` when nothing was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
}

/// Best-effort structured view of an unstructured resume.
///
/// Always fully formed: a field that could not be extracted keeps its default.
/// Serialized in camelCase so it slots into the portal's `ResumeData` model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedResume {
    pub personal_info: PersonalInfo,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
}

/// What the user sees before accepting an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionPreview {
    pub name_found: bool,
    pub email_found: bool,
    pub phone_found: bool,
    pub skill_count: usize,
    pub experience_count: usize,
    pub education_count: usize,
    pub project_count: usize,
}

impl ExtractedResume {
    pub fn preview(&self) -> ExtractionPreview {
        ExtractionPreview {
            name_found: !self.personal_info.name.is_empty(),
            email_found: !self.personal_info.email.is_empty(),
            phone_found: !self.personal_info.phone.is_empty(),
            skill_count: self.skills.len(),
            experience_count: self.experience.len(),
            education_count: self.education.len(),
            project_count: self.projects.len(),
        }
    }

    /// True when nothing at all was recovered; callers prompt for manual entry.
    pub fn is_empty(&self) -> bool {
        *self == ExtractedResume::default()
    }
}
