//! Tag and category filter segments.
//!
//! Search feeds accept filters as a positional path segment after a
//! `/-/` marker. A filter is either a flat token list (implicit
//! "match all of these") or three grouped token lists: `either`
//! (match any), `include` (match all), and `exclude` (match none).
//!
//! The wire grammar is fixed: grouped sections always render in the
//! order either, include, exclude regardless of how the caller filled
//! the groups; `either` tokens join on an escaped pipe (`%7C`);
//! `exclude` tokens each carry a leading `-`; every emitted section
//! ends with `/`. Category tokens are capitalized (GData requires
//! it), tag tokens are percent-escaped verbatim.

use gdata_core::escape::escape_component;
use serde::{Deserialize, Serialize};

/// How tokens of a filter are rendered into the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Keyword tags; tokens are percent-escaped.
    Tags,
    /// Video categories; tokens get a capitalized first letter.
    Categories,
}

/// Grouped filter sequences. Empty groups are omitted from output.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroups {
    /// Match any one of these tokens.
    #[serde(default)]
    pub either: Vec<String>,
    /// Match all of these tokens.
    #[serde(default)]
    pub include: Vec<String>,
    /// Match none of these tokens.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// A tag or category filter in one of its two shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// A flat ordered token list, treated as an include filter.
    Flat(Vec<String>),
    /// Grouped either/include/exclude sequences.
    Grouped(FilterGroups),
}

impl Filter {
    /// Build a flat filter from any sequence of token-like values.
    pub fn flat<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::Flat(tokens.into_iter().map(Into::into).collect())
    }

    /// Returns true if the filter carries no tokens at all.
    ///
    /// Empty filters behave as absent and contribute nothing to the
    /// request path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Flat(tokens) => tokens.is_empty(),
            Self::Grouped(groups) => {
                groups.either.is_empty() && groups.include.is_empty() && groups.exclude.is_empty()
            }
        }
    }

    /// Render the filter as a path segment with a trailing `/`.
    ///
    /// An empty filter renders as the empty string.
    #[must_use]
    pub fn encode(&self, kind: FilterKind) -> String {
        match self {
            Self::Flat(tokens) => {
                if tokens.is_empty() {
                    String::new()
                } else {
                    format!("{}/", join_tokens(tokens, "/", kind))
                }
            }
            Self::Grouped(groups) => groups.encode(kind),
        }
    }
}

impl From<FilterGroups> for Filter {
    fn from(groups: FilterGroups) -> Self {
        Self::Grouped(groups)
    }
}

impl FilterGroups {
    /// Create empty groups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `either` group.
    #[must_use]
    pub fn with_either<I, T>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.either = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Set the `include` group.
    #[must_use]
    pub fn with_include<I, T>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.include = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Set the `exclude` group.
    #[must_use]
    pub fn with_exclude<I, T>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.exclude = tokens.into_iter().map(Into::into).collect();
        self
    }

    // Emission order is fixed by the wire grammar: either, include,
    // exclude, independent of how the caller populated the groups.
    fn encode(&self, kind: FilterKind) -> String {
        let mut sections = Vec::new();
        if !self.either.is_empty() {
            sections.push(format!("{}/", join_tokens(&self.either, "%7C", kind)));
        }
        if !self.include.is_empty() {
            sections.push(format!("{}/", join_tokens(&self.include, "/", kind)));
        }
        if !self.exclude.is_empty() {
            sections.push(format!("-{}/", join_tokens(&self.exclude, "/-", kind)));
        }
        sections.concat()
    }
}

fn render_token(token: &str, kind: FilterKind) -> String {
    match kind {
        FilterKind::Tags => escape_component(token),
        FilterKind::Categories => capitalize(token),
    }
}

/// Uppercase the first character only; the rest of the token is left
/// untouched.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn join_tokens(tokens: &[String], separator: &str, kind: FilterKind) -> String {
    tokens
        .iter()
        .map(|token| render_token(token, kind))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_categories_are_capitalized() {
        let filter = Filter::flat(["news", "sports"]);
        assert_eq!(filter.encode(FilterKind::Categories), "News/Sports/");
    }

    #[test]
    fn flat_tags_are_escaped_not_capitalized() {
        let filter = Filter::flat(["football", "pro wolf"]);
        assert_eq!(filter.encode(FilterKind::Tags), "football/pro%20wolf/");
    }

    #[test]
    fn grouped_sections_render_either_include_exclude() {
        let filter: Filter = FilterGroups::new()
            .with_include(["news"])
            .with_exclude(["sports"])
            .with_either(["polo", "tennis"])
            .into();
        assert_eq!(
            filter.encode(FilterKind::Categories),
            "Polo%7CTennis/News/-Sports/"
        );
    }

    #[test]
    fn grouped_tags_escape_every_token() {
        let filter: Filter = FilterGroups::new()
            .with_either(["polo", "tennis"])
            .with_include(["football"])
            .with_exclude(["pro wolf"])
            .into();
        assert_eq!(
            filter.encode(FilterKind::Tags),
            "polo%7Ctennis/football/-pro%20wolf/"
        );
    }

    #[test]
    fn exclude_tokens_each_get_a_leading_dash() {
        let filter: Filter = FilterGroups::new()
            .with_exclude(["news", "sports", "tech"])
            .into();
        assert_eq!(
            filter.encode(FilterKind::Categories),
            "-News/-Sports/-Tech/"
        );
    }

    #[test]
    fn empty_groups_are_omitted() {
        let filter: Filter = FilterGroups::new().with_include(["music"]).into();
        assert_eq!(filter.encode(FilterKind::Categories), "Music/");
    }

    #[test]
    fn empty_filters_render_nothing() {
        assert!(Filter::flat(Vec::<String>::new()).is_empty());
        assert_eq!(
            Filter::flat(Vec::<String>::new()).encode(FilterKind::Tags),
            ""
        );
        let grouped: Filter = FilterGroups::new().into();
        assert!(grouped.is_empty());
        assert_eq!(grouped.encode(FilterKind::Categories), "");
    }

    #[test]
    fn capitalize_touches_only_the_first_character() {
        let filter = Filter::flat(["howTo"]);
        assert_eq!(filter.encode(FilterKind::Categories), "HowTo/");
    }
}
