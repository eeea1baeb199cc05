//! Option records for the search request variants.
//!
//! Each record enumerates exactly the parameters its feed accepts.
//! Every field is optional; `None` means "use the API default" and is
//! omitted from the produced query string. `to_pairs` fixes the wire
//! key order, so identical inputs always render identical URLs.

use gdata_core::query::QueryParams;
use serde::{Deserialize, Serialize};

use crate::filter::Filter;
use crate::types::{OrderBy, RacyPolicy, ResponseFormat, TimeRange, ONLY_EMBEDDABLE};

/// Parameters accepted by the `standardfeeds/` endpoints.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardFeedOptions {
    /// Maximum number of results per page (`max-results`).
    pub max_results: Option<u32>,
    /// Result ordering (`orderby`).
    pub order_by: Option<OrderBy>,
    /// One-based index of the first result (`start-index`).
    pub offset: Option<u32>,
    /// Time window of the feed (`time`).
    pub time: Option<TimeRange>,
}

impl StandardFeedOptions {
    /// Convert the options into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("max-results", self.max_results);
        params.push_opt("orderby", self.order_by.map(|o| o.name()));
        params.push_opt("start-index", self.offset);
        params.push_opt("time", self.time.map(|t| t.name()));
        params.into_pairs()
    }
}

/// Parameters accepted by the general `videos` search feed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoQueryOptions {
    /// Fetch a single video by id; when set, every other option is
    /// ignored and no query string is produced.
    pub video_id: Option<String>,
    /// Maximum number of results per page (`max-results`).
    pub max_results: Option<u32>,
    /// Result ordering (`orderby`).
    pub order_by: Option<OrderBy>,
    /// One-based index of the first result (`start-index`).
    pub offset: Option<u32>,
    /// Free-text search query (`vq`).
    pub query: Option<String>,
    /// Response body format (`alt`).
    pub response_format: Option<ResponseFormat>,
    /// Numeric video format code (`format`).
    pub video_format: Option<u8>,
    /// Restricted-content policy (`racy`).
    pub racy: Option<RacyPolicy>,
    /// Filter by uploading author (`author`).
    pub author: Option<String>,
    /// Restrict results to embeddable videos; forces `format` to the
    /// [`ONLY_EMBEDDABLE`] sentinel and is itself never emitted.
    pub only_embeddable: bool,
    /// Keyword tag filter, rendered into the request path.
    pub tags: Option<Filter>,
    /// Category filter, rendered into the request path.
    pub categories: Option<Filter>,
}

impl VideoQueryOptions {
    /// Convert the options into URL query pairs.
    ///
    /// The filter fields and `video_id` do not appear here; they
    /// shape the request path instead.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        // The sentinel wins over an explicit format code.
        let format = if self.only_embeddable {
            Some(ONLY_EMBEDDABLE)
        } else {
            self.video_format
        };

        let mut params = QueryParams::new();
        params.push_opt("max-results", self.max_results);
        params.push_opt("orderby", self.order_by.map(|o| o.name()));
        params.push_opt("start-index", self.offset);
        params.push_opt("vq", self.query.as_deref());
        params.push_opt("alt", self.response_format.map(|f| f.name()));
        params.push_opt("format", format);
        params.push_opt("racy", self.racy.map(|r| r.name()));
        params.push_opt("author", self.author.as_deref());
        params.into_pairs()
    }
}
