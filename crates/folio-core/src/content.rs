//! Site content model.
//!
//! Everything the page displays (profile, phrases, sections, skills,
//! timeline, projects) comes from one TOML document, parsed and checked
//! once at startup.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ContentError;
use crate::filter::parse_categories;
use crate::theme::ThemePreference;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    /// Phrases cycled by the hero typing effect.
    pub typing: Vec<String>,
    /// Theme used when the visitor has no stored preference.
    #[serde(default)]
    pub default_theme: ThemePreference,
    pub profile: Profile,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub socials: Vec<Social>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    pub email: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

/// A navigable page section. `id` doubles as the DOM id and URL fragment.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u32,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent (0-100).
    pub level: u8,
    pub group: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Experience {
    pub period: String,
    pub title: String,
    pub organization: String,
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Space-separated category tags used by the filter.
    #[serde(default)]
    pub categories: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
}

impl Project {
    pub fn category_list(&self) -> Vec<String> {
        parse_categories(&self.categories)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Social {
    pub label: String,
    pub url: String,
}

impl SiteContent {
    /// Parses and validates a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.typing.is_empty() {
            return Err(invalid("typing needs at least one phrase"));
        }
        if self.sections.is_empty() {
            return Err(invalid("at least one section is required"));
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if !is_valid_id(&section.id) {
                return Err(invalid(format!("invalid section id '{}'", section.id)));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(invalid(format!("duplicate section id '{}'", section.id)));
            }
        }

        let mut names = HashSet::new();
        for skill in &self.skills {
            if !names.insert(skill.name.to_lowercase()) {
                return Err(invalid(format!("duplicate skill '{}'", skill.name)));
            }
        }

        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(invalid(format!(
                "skill '{}' level {} exceeds 100",
                skill.name, skill.level
            )));
        }

        Ok(())
    }

    /// Category lists for every project, in order.
    pub fn project_categories(&self) -> Vec<Vec<String>> {
        self.projects.iter().map(Project::category_list).collect()
    }

    /// Skill group names in first-seen order.
    pub fn skill_groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for skill in &self.skills {
            if !groups.contains(&skill.group.as_str()) {
                groups.push(&skill.group);
            }
        }
        groups
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }
}

fn invalid(msg: impl Into<String>) -> ContentError {
    ContentError::Invalid(msg.into())
}

/// Section ids must be usable as DOM ids and URL fragments.
fn is_valid_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
typing = ["Rust developer", "Open source"]

[profile]
name = "Ada"
role = "Engineer"
tagline = "Builds things"
email = "ada@example.com"

[[sections]]
id = "home"
label = "Home"

[[sections]]
id = "projects"
label = "Projects"

[[skills]]
name = "Rust"
level = 90
group = "Languages"

[[skills]]
name = "Leptos"
level = 70
group = "Web"

[[skills]]
name = "Go"
level = 60
group = "Languages"

[[projects]]
title = "folio"
description = "This site"
categories = "web Rust"
"#;

    #[test]
    fn test_parse_minimal() {
        let content = SiteContent::from_toml(MINIMAL).unwrap();
        assert_eq!(content.typing.len(), 2);
        assert_eq!(content.default_theme, ThemePreference::Dark);
        assert_eq!(content.section_ids(), vec!["home", "projects"]);
        assert_eq!(content.skill_groups(), vec!["Languages", "Web"]);
        assert_eq!(content.project_categories(), vec![vec!["web", "rust"]]);
        assert!(content.profile.resume_url.is_none());
    }

    #[test]
    fn test_non_string_phrase_rejected() {
        let source = MINIMAL.replace(r#"["Rust developer", "Open source"]"#, r#"["ok", 3]"#);
        assert!(matches!(
            SiteContent::from_toml(&source),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_typing_rejected() {
        let source = MINIMAL.replace(r#"["Rust developer", "Open source"]"#, "[]");
        assert!(matches!(
            SiteContent::from_toml(&source),
            Err(ContentError::Invalid(_))
        ));
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let source = MINIMAL.replace(r#"id = "projects""#, r#"id = "home""#);
        let err = SiteContent::from_toml(&source).unwrap_err();
        assert!(err.to_string().contains("duplicate section id"));
    }

    #[test]
    fn test_skill_level_bound() {
        let source = MINIMAL.replace("level = 90", "level = 101");
        assert!(SiteContent::from_toml(&source).is_err());
    }

    #[test]
    fn test_duplicate_skill_rejected() {
        let source = MINIMAL.replace(r#"name = "Go""#, r#"name = "rust""#);
        let err = SiteContent::from_toml(&source).unwrap_err();
        assert!(err.to_string().contains("duplicate skill 'rust'"));
    }

    #[test]
    fn test_valid_ids() {
        assert!(is_valid_id("about-me"));
        assert!(is_valid_id("a1_b"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("1st"));
        assert!(!is_valid_id("has space"));
    }
}
