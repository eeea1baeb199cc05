//! Search request variants and URL construction.
//!
//! A [`SearchRequest`] captures one search intent;
//! [`SearchRequest::build`] lays out the fixed path segments for the
//! variant, appends the filter segment and query string where the
//! variant allows them, and joins everything once into a
//! [`BuiltRequest`]. Construction is pure: no I/O, no shared state,
//! the URL string is the sole output.

use std::fmt;

use gdata_core::query::encode_pairs;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::filter::FilterKind;
use crate::options::{StandardFeedOptions, VideoQueryOptions};
use crate::types::StandardFeed;
use crate::{Error, Result};

/// Base URL of the GData YouTube API.
pub const BASE_URL: &str = "http://gdata.youtube.com/feeds/api/";

/// A search intent, one variant per feed kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchRequest {
    /// A single video looked up by its id.
    VideoById {
        /// The video id.
        id: String,
    },
    /// Videos uploaded by a user.
    UserUploads {
        /// The user name.
        user: String,
    },
    /// Videos a user marked as favorites.
    UserFavorites {
        /// The user name.
        user: String,
    },
    /// One of the predefined standard feeds.
    StandardFeed {
        /// Which feed to request.
        feed: StandardFeed,
        /// Paging, ordering, and time-window options.
        options: StandardFeedOptions,
    },
    /// The general video search feed.
    VideoQuery(VideoQueryOptions),
}

impl SearchRequest {
    /// Standard-feed request from a feed name string.
    ///
    /// This is the one validated entry point: a name outside the
    /// closed feed set fails with [`Error::InvalidFeedType`] listing
    /// the legal values.
    pub fn standard_feed_named(name: &str, options: StandardFeedOptions) -> Result<Self> {
        let feed = name.parse::<StandardFeed>()?;
        Ok(Self::StandardFeed { feed, options })
    }

    /// Build the request URL for this search intent.
    #[must_use]
    pub fn build(&self) -> BuiltRequest {
        let parts = match self {
            Self::VideoById { id } => video_by_id_parts(id),
            Self::UserUploads { user } => {
                vec![BASE_URL.to_string(), format!("users/{user}/uploads")]
            }
            Self::UserFavorites { user } => {
                vec![BASE_URL.to_string(), format!("users/{user}/favorites")]
            }
            Self::StandardFeed { feed, options } => vec![
                BASE_URL.to_string(),
                format!("standardfeeds/{}", feed.name()),
                encode_pairs(&options.to_pairs()),
            ],
            Self::VideoQuery(options) => video_query_parts(options),
        };

        let built = BuiltRequest(parts.concat());
        debug!(url = %built, "built search request");
        built
    }
}

// A video id short-circuits everything else: no filters, no query.
fn video_by_id_parts(id: &str) -> Vec<String> {
    vec![BASE_URL.to_string(), format!("videos/{id}")]
}

fn video_query_parts(options: &VideoQueryOptions) -> Vec<String> {
    if let Some(id) = &options.video_id {
        return video_by_id_parts(id);
    }

    let mut parts = vec![BASE_URL.to_string(), "videos".to_string()];

    let categories = options.categories.as_ref().filter(|f| !f.is_empty());
    let tags = options.tags.as_ref().filter(|f| !f.is_empty());
    if categories.is_some() || tags.is_some() {
        // Categories render before tags under the single `/-/` marker.
        parts.push("/-/".to_string());
        if let Some(filter) = categories {
            parts.push(filter.encode(FilterKind::Categories));
        }
        if let Some(filter) = tags {
            parts.push(filter.encode(FilterKind::Tags));
        }
    }

    parts.push(encode_pairs(&options.to_pairs()));
    parts
}

/// The final immutable request URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuiltRequest(String);

impl BuiltRequest {
    /// The URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the URL for handing to an HTTP client.
    pub fn into_url(self) -> Result<Url> {
        Url::parse(&self.0).map_err(Error::from)
    }
}

impl fmt::Display for BuiltRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<BuiltRequest> for String {
    fn from(request: BuiltRequest) -> Self {
        request.0
    }
}
