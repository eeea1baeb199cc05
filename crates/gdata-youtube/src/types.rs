//! Closed sets of YouTube search options.
//!
//! The GData API documents each of these as a fixed vocabulary; they
//! are modeled as enums so an illegal value cannot reach the wire.
//! Every enum renders through [`name`](StandardFeed::name)-style
//! accessors returning the exact string the API expects.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The `format` code meaning "only return embeddable videos".
///
/// See <http://code.google.com/apis/youtube/reference.html#yt_format>.
pub const ONLY_EMBEDDABLE: u8 = 5;

/// Predefined aggregate video listings served under `standardfeeds/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardFeed {
    /// Most viewed videos.
    MostViewed,
    /// Top rated videos.
    TopRated,
    /// Recently featured videos.
    RecentlyFeatured,
    /// Videos watchable on mobile devices.
    WatchOnMobile,
}

impl StandardFeed {
    /// Returns the feed name as it appears in the request path.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MostViewed => "most_viewed",
            Self::TopRated => "top_rated",
            Self::RecentlyFeatured => "recently_featured",
            Self::WatchOnMobile => "watch_on_mobile",
        }
    }

    /// Returns all available standard feeds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::MostViewed,
            Self::TopRated,
            Self::RecentlyFeatured,
            Self::WatchOnMobile,
        ]
    }

    fn allowed_names() -> String {
        Self::all()
            .iter()
            .map(|feed| feed.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for StandardFeed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "most_viewed" => Ok(Self::MostViewed),
            "top_rated" => Ok(Self::TopRated),
            "recently_featured" => Ok(Self::RecentlyFeatured),
            "watch_on_mobile" => Ok(Self::WatchOnMobile),
            _ => Err(Error::InvalidFeedType {
                given: s.to_string(),
                allowed: Self::allowed_names(),
            }),
        }
    }
}

impl std::fmt::Display for StandardFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result ordering for search feeds (`orderby`).
///
/// The API default is relevance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    /// Order by search relevance.
    Relevance,
    /// Order by view count.
    ViewCount,
    /// Order by publication date.
    Published,
    /// Order by rating.
    Rating,
}

impl OrderBy {
    /// Returns the wire value for the `orderby` parameter.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::ViewCount => "viewCount",
            Self::Published => "published",
            Self::Rating => "rating",
        }
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Response body format (`alt`). The API default is Atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Atom feed.
    Atom,
    /// RSS feed.
    Rss,
    /// JSON document.
    Json,
}

impl ResponseFormat {
    /// Returns the wire value for the `alt` parameter.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Atom => "atom",
            Self::Rss => "rss",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether restricted content appears in results (`racy`).
///
/// The API default is to exclude it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RacyPolicy {
    /// Include restricted content.
    Include,
    /// Exclude restricted content.
    Exclude,
}

impl RacyPolicy {
    /// Returns the wire value for the `racy` parameter.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Exclude => "exclude",
        }
    }
}

impl std::fmt::Display for RacyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Time window for standard feeds (`time`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// Videos from the last 24 hours.
    Today,
    /// Videos from the last 7 days.
    ThisWeek,
    /// Videos from the last 30 days.
    ThisMonth,
    /// All videos.
    AllTime,
}

impl TimeRange {
    /// Returns the wire value for the `time` parameter.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::ThisWeek => "this_week",
            Self::ThisMonth => "this_month",
            Self::AllTime => "all_time",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_feed_names_round_trip() {
        for feed in StandardFeed::all() {
            assert_eq!(feed.name().parse::<StandardFeed>().unwrap(), *feed);
        }
    }

    #[test]
    fn unknown_feed_name_lists_legal_values() {
        let err = "hottest".parse::<StandardFeed>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FEED_TYPE");
        let message = err.to_string();
        for feed in StandardFeed::all() {
            assert!(message.contains(feed.name()), "missing {feed} in {message}");
        }
    }

    #[test]
    fn order_by_uses_camel_case_view_count() {
        assert_eq!(OrderBy::ViewCount.name(), "viewCount");
        assert_eq!(OrderBy::Relevance.to_string(), "relevance");
    }

    #[test]
    fn wire_names_match_api_vocabulary() {
        assert_eq!(ResponseFormat::Json.name(), "json");
        assert_eq!(RacyPolicy::Exclude.name(), "exclude");
        assert_eq!(TimeRange::ThisWeek.name(), "this_week");
    }
}
