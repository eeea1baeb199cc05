//! Request URL construction for the GData YouTube API.
//!
//! Provides strongly typed search intents and the builders that turn
//! them into the exact URLs the API expects. The produced URL string
//! is the only output; issuing the HTTP request and parsing its
//! response belong to separate collaborators.

#![deny(missing_docs)]

pub mod filter;
pub mod options;
pub mod request;
pub mod types;

pub use filter::{Filter, FilterGroups, FilterKind};
pub use options::{StandardFeedOptions, VideoQueryOptions};
pub use request::{BuiltRequest, SearchRequest, BASE_URL};
pub use types::{OrderBy, RacyPolicy, ResponseFormat, StandardFeed, TimeRange, ONLY_EMBEDDABLE};

pub use gdata_core::{Error, Result};
