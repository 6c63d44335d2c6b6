//! The paged response envelope and its derived metadata.
//!
//! [`PagedResponse`] is the wire shape every list endpoint returns: the rows
//! for the current slice plus, when the total row count is known, a
//! [`PageInfo`] block with the derived pagination facts. Construction is a
//! pure computation over already-fetched inputs; fetching the rows and
//! counting the total stay with the caller.

use serde::{Deserialize, Serialize};

use crate::{count::TotalCount, params::PageRequest, Error, Result};

/// Where the current slice sits: exactly one of a 1-based page number or a
/// raw row offset, never both.
///
/// A slice whose offset is an exact multiple of the limit has a well-defined
/// page number. When it is not (the caller asked for a sub-page-aligned
/// slice, say offset 15 with limit 10), no honest page number exists and the
/// raw offset goes on the wire instead.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PagePosition {
    /// 1-based page number; offset 0 is page 1.
    Page(u64),
    /// Zero-based row offset of a slice that does not start on a page
    /// boundary.
    Offset(u64),
}

/// Derived pagination facts, attached to the envelope only when the total
/// row count is known.
///
/// Serializes to the camelCase wire contract: `totalRows`, `pageSize`,
/// `isFirstPage`, `isLastPage`, and exactly one of `page`/`offset` (the
/// flattened [`PagePosition`]).
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_rows: u64,
    #[serde(flatten)]
    pub position: PagePosition,
    pub page_size: u64,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

impl PageInfo {
    /// The 1-based page number, when the slice is page-aligned.
    #[must_use]
    pub const fn page(&self) -> Option<u64> {
        match self.position {
            PagePosition::Page(page) => Some(page),
            PagePosition::Offset(_) => None,
        }
    }

    /// The raw row offset, when the slice is not page-aligned.
    #[must_use]
    pub const fn offset(&self) -> Option<u64> {
        match self.position {
            PagePosition::Page(_) => None,
            PagePosition::Offset(offset) => Some(offset),
        }
    }

    /// Number of pages the total spans at this page size. A zero total still
    /// counts as one page, and a hand-built zero page size divides as 1.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        let page_size = if self.page_size == 0 {
            1
        } else {
            self.page_size
        };
        let pages = self.total_rows.div_ceil(page_size);
        if pages == 0 {
            1
        } else {
            pages
        }
    }
}

/// The uniform envelope for a list-returning endpoint.
///
/// Serializes as `{ "list": [...], "pageInfo": {...}, "errors": [...] }`,
/// with `pageInfo` present only when the total was known and `errors` only
/// when attached. Built once per request/response cycle and immediately
/// serialized.
///
/// # Example
///
/// ```
/// use paged_rs::prelude::*;
///
/// let envelope = PagedResponse::new(
///     vec!["a", "b", "c"],
///     PageRequest::new(10, 0),
///     3,
/// )?;
///
/// let info = envelope.page_info.unwrap();
/// assert_eq!(info.page(), Some(1));
/// assert!(info.is_first_page && info.is_last_page);
/// # Ok::<(), Error>(())
/// ```
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub list: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<serde_json::Value>>,
}

impl<T> PagedResponse<T> {
    /// Build an envelope with no overrides.
    ///
    /// Passing `TotalCount::Unknown` (or `None`) suppresses the metadata
    /// block entirely and skips offset validation.
    ///
    /// # Errors
    ///
    /// [`Error::OffsetBeyondTotal`] when a non-zero offset is at or past a
    /// known total, and [`Error::ZeroPageSize`] for a hand-built zero-limit
    /// request.
    pub fn new(list: Vec<T>, params: PageRequest, total: impl Into<TotalCount>) -> Result<Self> {
        Self::builder(list, params).total(total).build()
    }

    /// Start a builder, for callers that need to override a derived field
    /// or attach row-level errors.
    #[must_use]
    pub fn builder(list: Vec<T>, params: PageRequest) -> PagedBuilder<T> {
        PagedBuilder {
            list,
            params,
            total: TotalCount::Unknown,
            page: None,
            is_first_page: None,
            is_last_page: None,
            page_info: None,
            errors: None,
        }
    }
}

/// Builder for [`PagedResponse`], carrying the bounded set of overrides a
/// caller may apply on top of the derived metadata.
///
/// Overrides land after derivation, so a supplied value always wins over the
/// computed default; the per-field ones are no-ops when no metadata block was
/// derived (unknown total).
///
/// # Example
///
/// ```
/// use paged_rs::prelude::*;
///
/// let envelope = PagedResponse::builder(vec![1, 2, 3], PageRequest::new(10, 0))
///     .total(30)
///     .is_last_page(true)
///     .build()?;
///
/// assert!(envelope.page_info.unwrap().is_last_page);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug)]
pub struct PagedBuilder<T> {
    list: Vec<T>,
    params: PageRequest,
    total: TotalCount,
    page: Option<u64>,
    is_first_page: Option<bool>,
    is_last_page: Option<bool>,
    page_info: Option<PageInfo>,
    errors: Option<Vec<serde_json::Value>>,
}

impl<T> PagedBuilder<T> {
    /// Total row count across all pages; defaults to unknown.
    #[must_use]
    pub fn total(mut self, total: impl Into<TotalCount>) -> Self {
        self.total = total.into();
        self
    }

    /// Force the page number, regardless of the offset arithmetic.
    #[must_use]
    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Override the derived first-page flag.
    #[must_use]
    pub fn is_first_page(mut self, is_first_page: bool) -> Self {
        self.is_first_page = Some(is_first_page);
        self
    }

    /// Override the derived last-page flag.
    #[must_use]
    pub fn is_last_page(mut self, is_last_page: bool) -> Self {
        self.is_last_page = Some(is_last_page);
        self
    }

    /// Replace the metadata block wholesale. Wins over every per-field
    /// override and over the derivation, known total or not.
    #[must_use]
    pub fn page_info(mut self, page_info: PageInfo) -> Self {
        self.page_info = Some(page_info);
        self
    }

    /// Attach row-level errors to the envelope.
    #[must_use]
    pub fn errors(mut self, errors: Vec<serde_json::Value>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Derive the metadata, apply the overrides, and validate the offset.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroPageSize`] when the request carries a zero limit (only
    /// reachable with a hand-built [`PageRequest`]), and
    /// [`Error::OffsetBeyondTotal`] when a non-zero offset is at or past a
    /// known total. Validation uses the raw request and raw total; overrides
    /// cannot mask an out-of-range offset.
    pub fn build(self) -> Result<PagedResponse<T>> {
        let PageRequest { limit, offset } = self.params;
        if limit == 0 {
            return Err(Error::ZeroPageSize);
        }

        let mut page_info = self.total.as_known().map(|total_rows| {
            let total_pages = total_rows.div_ceil(limit).max(1);
            let position = if offset % limit == 0 {
                PagePosition::Page((offset / limit).saturating_add(1))
            } else {
                PagePosition::Offset(offset)
            };
            PageInfo {
                total_rows,
                position,
                page_size: limit,
                is_first_page: offset == 0,
                is_last_page: offset >= (total_pages - 1) * limit,
            }
        });

        if let Some(info) = &mut page_info {
            if let Some(page) = self.page {
                info.position = PagePosition::Page(page);
            }
            if let Some(is_first_page) = self.is_first_page {
                info.is_first_page = is_first_page;
            }
            if let Some(is_last_page) = self.is_last_page {
                info.is_last_page = is_last_page;
            }
        }
        if self.page_info.is_some() {
            page_info = self.page_info;
        }

        if let Some(total_rows) = self.total.as_known() {
            if offset > 0 && offset >= total_rows {
                return Err(Error::OffsetBeyondTotal { offset, total_rows });
            }
        }

        Ok(PagedResponse {
            list: self.list,
            page_info,
            errors: self.errors,
        })
    }
}
