#![allow(clippy::module_name_repetitions)]
//! Pagination envelopes for list-returning APIs.
//!
//! Given a page of already-fetched rows, the requested limit/offset (or
//! page/page-size aliases), and the total row count across all pages, this
//! crate computes the uniform response envelope: the rows plus a `pageInfo`
//! block carrying the derived pagination facts (current page, page size,
//! first/last-page flags, total rows). Fetching rows, building queries and
//! mapping errors to HTTP responses stay with the embedding framework.
//!
//! ```
//! use paged_rs::prelude::*;
//!
//! let query: PaginationQuery = serde_json::from_str(r#"{"limit":"10","offset":"10"}"#)?;
//! let envelope = PagedResponse::new(vec!["row"; 10], query.normalize(), 25)?;
//!
//! let info = envelope.page_info.unwrap();
//! assert_eq!(info.page(), Some(2));
//! assert!(!info.is_last_page);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Available Features
//!
//! | Feature   | Default | Description                                 |
//! |-----------|---------|---------------------------------------------|
//! | `openapi` | false   | `utoipa` schema derives on the public types. |
pub use self::errors::Error;

pub mod count;
pub mod errors;
pub mod params;
pub mod prelude;
pub mod response;

/// Envelope construction results
pub type Result<T> = std::result::Result<T, Error>;
