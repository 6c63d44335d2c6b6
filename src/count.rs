//! Total row counts, which may be unknown.

use std::str::FromStr;

use crate::{Error, Result};

/// Count of rows matching a query across all pages, independent of the
/// current slice.
///
/// An unknown total suppresses pagination metadata entirely: the envelope
/// then carries only the rows, and no offset validation is performed. Counts
/// that arrive as strings (some database drivers return `COUNT(*)` that way)
/// go through [`FromStr`], which rejects anything that is not a non-negative
/// integer instead of letting a bad value poison the derived metadata.
///
/// # Example
///
/// ```
/// use paged_rs::prelude::*;
///
/// let total: TotalCount = "25".parse()?;
/// assert_eq!(total.as_known(), Some(25));
/// assert!("not-a-count".parse::<TotalCount>().is_err());
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TotalCount {
    Known(u64),
    #[default]
    Unknown,
}

impl TotalCount {
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// The count as a plain number, if known.
    #[must_use]
    pub const fn as_known(&self) -> Option<u64> {
        match self {
            Self::Known(count) => Some(*count),
            Self::Unknown => None,
        }
    }
}

impl From<u64> for TotalCount {
    fn from(count: u64) -> Self {
        Self::Known(count)
    }
}

impl From<Option<u64>> for TotalCount {
    fn from(count: Option<u64>) -> Self {
        count.map_or(Self::Unknown, Self::Known)
    }
}

impl FromStr for TotalCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(Self::Known)
            .map_err(|_| Error::InvalidTotalCount(s.to_string()))
    }
}
