//! Pagination parameter extraction and normalization.
//!
//! Callers express the slice they want either as a `limit`/`offset` pair
//! (with `l`/`o` short forms) or as the page-oriented `page`/`page_size`
//! family. [`PaginationQuery`] captures the raw bag as it arrives;
//! [`PaginationQuery::normalize`] resolves aliases, defaults and clamping
//! into the [`PageRequest`] every envelope constructor consumes.

use serde::{Deserialize, Deserializer, Serialize};

/// Set the default pagination page size.
const fn default_limit() -> u64 {
    25
}

/// Smallest page size a caller may request.
const fn min_limit() -> u64 {
    1
}

/// Largest page size a caller may request.
const fn max_limit() -> u64 {
    1000
}

/// Bounds applied to the requested page size during normalization.
///
/// Serde-embeddable so applications can carry it inside their own
/// configuration files; omitted fields keep the built-in values.
///
/// # Example
///
/// ```
/// use paged_rs::prelude::*;
///
/// let limits: LimitConfig = serde_json::from_value(serde_json::json!({
///     "max_limit": 100,
/// })).unwrap();
///
/// assert_eq!(limits.default_limit, 25);
/// assert_eq!(limits.max_limit, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LimitConfig {
    #[serde(default = "default_limit")]
    pub default_limit: u64,
    #[serde(default = "min_limit")]
    pub min_limit: u64,
    #[serde(default = "max_limit")]
    pub max_limit: u64,
}

/// Default implementation for `LimitConfig`.
impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            min_limit: min_limit(),
            max_limit: max_limit(),
        }
    }
}

/// Pagination parameters exactly as a caller supplies them.
///
/// Every field is optional and tolerates numeric strings, since query-string
/// values arrive stringly typed. Flatten it into a larger query-parameter
/// struct:
///
/// ```
/// use serde::Deserialize;
/// use paged_rs::prelude::*;
///
/// #[derive(Debug, Deserialize)]
/// pub struct ListQueryParams {
///     pub title: Option<String>,
///     #[serde(flatten)]
///     pub pagination: PaginationQuery,
/// }
/// ```
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PaginationQuery {
    /// Page size; `l` is accepted as a short form.
    #[serde(
        default,
        alias = "l",
        deserialize_with = "deserialize_maybe_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<u64>,
    /// Zero-based row offset; `o` is accepted as a short form.
    #[serde(
        default,
        alias = "o",
        deserialize_with = "deserialize_maybe_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub offset: Option<u64>,
    /// 1-based page number, used when no offset is given.
    #[serde(
        default,
        deserialize_with = "deserialize_maybe_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub page: Option<u64>,
    /// Page size spelled the page-oriented way; `pageSize` is accepted too.
    #[serde(
        default,
        alias = "pageSize",
        deserialize_with = "deserialize_maybe_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_size: Option<u64>,
}

impl PaginationQuery {
    /// Normalize under the default [`LimitConfig`].
    ///
    /// # Example
    ///
    /// ```
    /// use paged_rs::prelude::*;
    ///
    /// let query = PaginationQuery {
    ///     limit: Some(5000),
    ///     ..Default::default()
    /// };
    ///
    /// assert_eq!(query.normalize(), PageRequest::new(1000, 0));
    /// ```
    #[must_use]
    pub fn normalize(&self) -> PageRequest {
        self.normalize_with(&LimitConfig::default())
    }

    /// Resolve aliases, defaults and clamping into a [`PageRequest`].
    ///
    /// A zero or absent size falls back to the next source in order:
    /// `limit`, `page_size`, then `default_limit`; anything non-zero is
    /// clamped into the configured bounds. A missing offset is derived from
    /// `page` when present (pages 0 and 1 both mean the first page),
    /// otherwise 0. The returned `limit` is positive under every
    /// configuration.
    #[must_use]
    pub fn normalize_with(&self, limits: &LimitConfig) -> PageRequest {
        let floor = limits.min_limit.max(1);
        let ceiling = limits.max_limit.max(floor);

        let requested = self
            .limit
            .filter(|&limit| limit > 0)
            .or(self.page_size.filter(|&size| size > 0));
        let limit = match requested {
            None => limits.default_limit.clamp(floor, ceiling),
            Some(requested) => {
                let limit = requested.clamp(floor, ceiling);
                if limit != requested {
                    tracing::debug!(requested, limit, "clamping requested page size");
                }
                limit
            }
        };

        let offset = match self.offset {
            Some(offset) => offset,
            None => self
                .page
                .map_or(0, |page| page.saturating_sub(1).saturating_mul(limit)),
        };

        PageRequest { limit, offset }
    }
}

/// Normalized pagination parameters: the contract every envelope builder
/// consumes. `limit` is always positive after normalization; hand-built
/// values with a zero `limit` are rejected at envelope construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

impl PageRequest {
    #[must_use]
    pub const fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Request a 1-based page of `page_size` rows. Pages 0 and 1 both mean
    /// the first page.
    #[must_use]
    pub const fn from_page(page: u64, page_size: u64) -> Self {
        Self {
            limit: page_size,
            offset: page.saturating_sub(1).saturating_mul(page_size),
        }
    }
}

/// Default implementation for `PageRequest`.
impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}

/// Deserialize an optional numeric parameter from either a number or a
/// numeric string, mirroring how query strings deliver every value as a
/// string through `serde_urlencoded`.
fn deserialize_maybe_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct MaybeNumber;

    impl<'de> serde::de::Visitor<'de> for MaybeNumber {
        type Value = Option<u64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a non-negative integer or a numeric string")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            u64::try_from(value)
                .map(Some)
                .map_err(|_| E::custom(format!("negative value: {value}")))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            value.parse().map(Some).map_err(serde::de::Error::custom)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(MaybeNumber)
        }
    }

    deserializer.deserialize_any(MaybeNumber)
}
