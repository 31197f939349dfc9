//! Fixed skill vocabulary and membership scan.
//!
//! Only listed terms are ever reported, with the vocabulary's casing. A term
//! matches case-insensitively on word boundaries, so `Reactive` never yields
//! `React` and `Java` is not found inside `JavaScript`.

use regex::Regex;
use std::sync::LazyLock;

pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C#",
    "C++",
    "Rust",
    "Go",
    "Golang",
    "Kotlin",
    "Swift",
    "Ruby",
    "PHP",
    "Scala",
    "Dart",
    "Elixir",
    "Haskell",
    "Perl",
    "MATLAB",
    "SQL",
    "HTML",
    "CSS",
    "Bash",
    // Frameworks and libraries
    "React",
    "React Native",
    "Angular",
    "Vue",
    "Svelte",
    "Next.js",
    "Nuxt.js",
    "Node.js",
    "Express",
    "NestJS",
    "Django",
    "Flask",
    "FastAPI",
    "Spring",
    "Spring Boot",
    "Laravel",
    "Ruby on Rails",
    ".NET",
    "jQuery",
    "Redux",
    "Bootstrap",
    "Tailwind CSS",
    "SASS",
    "LESS",
    "Flutter",
    "Electron",
    "Tokio",
    "Pandas",
    "NumPy",
    "Scikit-learn",
    "TensorFlow",
    "PyTorch",
    "Keras",
    // APIs and protocols
    "REST",
    "GraphQL",
    "gRPC",
    "WebSockets",
    "Microservices",
    // Databases
    "MySQL",
    "PostgreSQL",
    "MongoDB",
    "Redis",
    "SQLite",
    "Oracle",
    "Cassandra",
    "DynamoDB",
    "Elasticsearch",
    "Firebase",
    "Supabase",
    // Cloud and DevOps
    "AWS",
    "Azure",
    "Google Cloud",
    "GCP",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Ansible",
    "Jenkins",
    "GitHub Actions",
    "CI/CD",
    "Git",
    "Linux",
    "Nginx",
    "Kafka",
    "RabbitMQ",
    "Prometheus",
    "Grafana",
    // Methodologies
    "Agile",
    "Scrum",
    "Kanban",
    "TDD",
    "DevOps",
    "Microservices Architecture",
    "System Design",
    // Data and AI
    "Machine Learning",
    "Deep Learning",
    "Data Science",
    "Data Analysis",
    "Computer Vision",
    "NLP",
    "Generative AI",
    "LLM",
    "Prompt Engineering",
    // Emerging tech
    "Blockchain",
    "Web3",
    "Solidity",
    "IoT",
    "AR/VR",
    // Soft skills
    "Leadership",
    "Communication",
    "Teamwork",
    "Problem Solving",
    "Critical Thinking",
    "Time Management",
    "Project Management",
    "Mentoring",
];

/// One compiled matcher per vocabulary term, in vocabulary order.
static SKILL_MATCHERS: LazyLock<Vec<(&'static str, Option<Regex>)>> = LazyLock::new(|| {
    SKILL_VOCABULARY
        .iter()
        .map(|&term| (term, Regex::new(&boundary_pattern(term)).ok()))
        .collect()
});

/// Builds a case-insensitive pattern for `term`, with `\b` only on sides
/// where the term itself starts or ends with a word character.
fn boundary_pattern(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let lead = if term.chars().next().is_some_and(is_word) {
        r"\b"
    } else {
        r"(?:^|\W)"
    };
    let trail = if term.chars().last().is_some_and(is_word) {
        r"\b"
    } else {
        r"(?:\W|$)"
    };
    format!("(?i){lead}{}{trail}", regex::escape(term))
}

/// Scans `text` for every vocabulary term.
///
/// Results keep vocabulary order; case-insensitive duplicates are dropped.
pub fn extract_skills(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for (term, matcher) in SKILL_MATCHERS.iter() {
        let Some(re) = matcher else { continue };
        if !re.is_match(text) {
            continue;
        }
        if found.iter().any(|s| s.eq_ignore_ascii_case(term)) {
            continue;
        }
        found.push((*term).to_string());
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_term_compiles() {
        for (term, matcher) in SKILL_MATCHERS.iter() {
            assert!(matcher.is_some(), "skill pattern for {term} failed to compile");
        }
    }

    #[test]
    fn test_vocabulary_has_no_case_insensitive_duplicates() {
        for (i, a) in SKILL_VOCABULARY.iter().enumerate() {
            for b in &SKILL_VOCABULARY[i + 1..] {
                assert!(!a.eq_ignore_ascii_case(b), "duplicate term {a}");
            }
        }
    }

    #[test]
    fn test_react_and_node_found_exactly() {
        let skills = extract_skills("experienced in React and Node.js");
        assert_eq!(skills, vec!["React".to_string(), "Node.js".to_string()]);
    }

    #[test]
    fn test_reactive_is_not_react() {
        let skills = extract_skills("Reactive programming with streams");
        assert!(!skills.contains(&"React".to_string()));
    }

    #[test]
    fn test_java_not_found_inside_javascript() {
        let skills = extract_skills("Wrote JavaScript daily");
        assert_eq!(skills, vec!["JavaScript".to_string()]);
    }

    #[test]
    fn test_output_uses_vocabulary_casing_and_order() {
        let skills = extract_skills("postgresql, DOCKER and python");
        assert_eq!(
            skills,
            vec![
                "Python".to_string(),
                "PostgreSQL".to_string(),
                "Docker".to_string()
            ]
        );
    }

    #[test]
    fn test_symbol_terms_match() {
        let skills = extract_skills("Fluent in C++ and C#, shipped with CI/CD.");
        assert!(skills.contains(&"C++".to_string()));
        assert!(skills.contains(&"C#".to_string()));
        assert!(skills.contains(&"CI/CD".to_string()));
    }

    #[test]
    fn test_dotnet_requires_the_leading_dot() {
        assert!(extract_skills("Built services on .NET Core").contains(&".NET".to_string()));
        assert!(!extract_skills("a social network").contains(&".NET".to_string()));
    }

    #[test]
    fn test_empty_text_has_no_skills() {
        assert!(extract_skills("").is_empty());
    }
}
