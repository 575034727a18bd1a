use serde::{Deserialize, Serialize};
use std::fmt;

pub const CONTENT_TYPES: &[&str] = &[
    "introduction",
    "formula",
    "concept_helper",
    "warning",
    "real_world",
    "text",
];

pub const SECTION_TYPES: &[&str] = &["objectives", "intro", "content", "applications", "quiz"];

pub const VALID_ICONS: &[&str] = &[
    "Zap",
    "Calculator",
    "FlaskConical",
    "Leaf",
    "Trophy",
    "Star",
    "Award",
    "Flame",
    "HelpCircle",
    "CheckCircle2",
    "Target",
    "BookOpen",
    "FileText",
    "Clock",
    "Globe",
    "Lightbulb",
    "AlertTriangle",
];

/// A closed set of values a column may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    ContentType,
    SectionType,
    Icon,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::ContentType, Domain::SectionType, Domain::Icon];

    pub fn values(self) -> &'static [&'static str] {
        match self {
            Domain::ContentType => CONTENT_TYPES,
            Domain::SectionType => SECTION_TYPES,
            Domain::Icon => VALID_ICONS,
        }
    }

    /// Membership is case-sensitive; icon names are component names.
    pub fn contains(self, value: &str) -> bool {
        self.values().contains(&value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Domain::ContentType => "content types",
            Domain::SectionType => "section types",
            Domain::Icon => "icons",
        }
    }

    /// Warning text for a value outside the domain.
    pub fn describe_invalid(self, value: &str) -> String {
        match self {
            Domain::Icon => format!("Unknown icon '{value}'"),
            Domain::ContentType | Domain::SectionType => format!(
                "Invalid {self} '{value}'. Valid: {}",
                self.values().join(", ")
            ),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Domain::ContentType => "content_type",
            Domain::SectionType => "section_type",
            Domain::Icon => "icon",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_sizes() {
        assert_eq!(Domain::ContentType.values().len(), 6);
        assert_eq!(Domain::SectionType.values().len(), 5);
        assert_eq!(Domain::Icon.values().len(), 17);
    }

    #[test]
    fn test_icon_membership_is_case_sensitive() {
        assert!(Domain::Icon.contains("Zap"));
        assert!(!Domain::Icon.contains("zap"));
    }

    #[test]
    fn test_describe_invalid() {
        assert_eq!(Domain::Icon.describe_invalid("Rocket"), "Unknown icon 'Rocket'");
        assert_eq!(
            Domain::ContentType.describe_invalid("quote"),
            "Invalid content_type 'quote'. Valid: introduction, formula, concept_helper, warning, real_world, text"
        );
    }

    #[test]
    fn test_domain_deserializes_from_snake_case() {
        let domain: Domain = serde_yaml::from_str("section_type").unwrap();
        assert_eq!(domain, Domain::SectionType);
    }
}
