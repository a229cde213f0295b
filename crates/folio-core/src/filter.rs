//! Project card filtering by category tag.

use std::fmt;
use std::str::FromStr;

/// Selected project filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    /// Lowercased category tag.
    Category(String),
}

impl ProjectFilter {
    /// Check whether a card with the given categories is visible.
    pub fn matches<S: AsRef<str>>(&self, categories: &[S]) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => categories
                .iter()
                .any(|c| c.as_ref().eq_ignore_ascii_case(tag)),
        }
    }

    /// Visibility of each card, in order.
    pub fn apply<S: AsRef<str>>(&self, cards: &[Vec<S>]) -> Vec<bool> {
        cards.iter().map(|c| self.matches(c)).collect()
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(tag) => tag,
        }
    }
}

impl FromStr for ProjectFilter {
    type Err = std::convert::Infallible;

    /// Parses a filter button value. Blank or `all` selects everything.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        if tag.is_empty() || tag == "all" {
            Ok(Self::All)
        } else {
            Ok(Self::Category(tag))
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits a space-separated category attribute into lowercased tags.
pub fn parse_categories(attr: &str) -> Vec<String> {
    attr.split_whitespace()
        .map(|s| s.to_ascii_lowercase())
        .collect()
}

/// Filter buttons for a card set: `All` first, then every category in
/// first-seen order.
pub fn available_filters<S: AsRef<str>>(cards: &[Vec<S>]) -> Vec<ProjectFilter> {
    let mut filters = vec![ProjectFilter::All];
    for category in cards.iter().flatten() {
        let tag = category.as_ref().to_ascii_lowercase();
        if !filters.iter().any(|f| f.as_str() == tag) {
            filters.push(ProjectFilter::Category(tag));
        }
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<Vec<String>> {
        vec![
            parse_categories("web rust"),
            parse_categories("crypto"),
            parse_categories("Rust cli"),
        ]
    }

    #[test]
    fn test_all_shows_everything() {
        let filter: ProjectFilter = "all".parse().unwrap();
        assert_eq!(filter.apply(&cards()), vec![true, true, true]);
    }

    #[test]
    fn test_category_filter() {
        let filter: ProjectFilter = "rust".parse().unwrap();
        assert_eq!(filter.apply(&cards()), vec![true, false, true]);

        let filter: ProjectFilter = "CRYPTO".parse().unwrap();
        assert_eq!(filter.apply(&cards()), vec![false, true, false]);
    }

    #[test]
    fn test_unknown_category_hides_all() {
        let filter: ProjectFilter = "games".parse().unwrap();
        assert_eq!(filter.apply(&cards()), vec![false, false, false]);
    }

    #[test]
    fn test_parse_blank_is_all() {
        assert_eq!("  ".parse::<ProjectFilter>().unwrap(), ProjectFilter::All);
        assert_eq!(" All ".parse::<ProjectFilter>().unwrap(), ProjectFilter::All);
    }

    #[test]
    fn test_available_filters_order() {
        let names: Vec<String> = available_filters(&cards())
            .iter()
            .map(|f| f.to_string())
            .collect();
        assert_eq!(names, vec!["all", "web", "rust", "crypto", "cli"]);
    }
}
