//! # Pagination Error Handling

#[derive(thiserror::Error, Debug)]
pub enum Error {
    // The Display message is the client-facing wire contract; embedding
    // frameworks are expected to map this variant to a 400-class response.
    #[error("Offset is beyond the total number of records")]
    OffsetBeyondTotal { offset: u64, total_rows: u64 },

    #[error("invalid total count: '{0}'")]
    InvalidTotalCount(String),

    #[error("page size must be greater than zero")]
    ZeroPageSize,
}
