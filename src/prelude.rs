//! One-stop import for the crate's surface.

pub use crate::{
    count::TotalCount,
    params::{LimitConfig, PageRequest, PaginationQuery},
    response::{PageInfo, PagePosition, PagedBuilder, PagedResponse},
    Error, Result,
};
