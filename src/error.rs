//! Error types surfaced by the recovery validator and the container
//! constructor.
//!
//! `prepare`'s capacity refusal is not an error at all — it is modeled as
//! `Option::None`, since the buffer remains perfectly usable for smaller
//! requests. Only the failure kinds that actually prevent a `PrBuf` from
//! existing at all get an error type here.

use thiserror::Error;

/// Returned by [`crate::create`] when the backing slice cannot hold a valid,
/// empty `PrBuf`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CreateError {
    /// `mem.len()` is not in `(HEADER_SIZE, PRBUF_SIZE_MAX)`.
    #[error(
        "backing slice has length {len}, which is outside the valid range ({min}, {max})"
    )]
    InvalidSize { len: usize, min: usize, max: u32 },
}

/// Returned by [`crate::open`] when the backing slice does not hold a valid
/// `PrBuf`.
///
/// `open` is all-or-nothing: every variant here means the same thing to a
/// caller ("treat these bytes as garbage, `create` fresh"). The variants
/// exist only to make test failures and debug logs legible — they are not
/// different recovery paths.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OpenError {
    /// `mem.len()` is not in `(HEADER_SIZE, PRBUF_SIZE_MAX)`.
    #[error(
        "backing slice has length {len}, which is outside the valid range ({min}, {max})"
    )]
    InvalidSize { len: usize, min: usize, max: u32 },

    /// The header's `version` field does not match the version this crate
    /// understands.
    #[error("unsupported layout version {found} (expected {expected})")]
    VersionMismatch { found: u32, expected: u32 },

    /// The header's `size` field does not match the backing slice's actual
    /// length.
    #[error("header size field {header_size} does not match backing slice length {actual_len}")]
    SizeMismatch { header_size: u32, actual_len: usize },

    /// `begin` or `end` is outside `[BASE_OFFSET, N)`.
    #[error("offset {offset} ({which}) is outside the valid range [{base_offset}, {len})")]
    OffsetOutOfRange {
        which: &'static str,
        offset: u32,
        base_offset: u32,
        len: usize,
    },

    /// Walking records from `begin` did not land on `end` exactly.
    #[error("record walk from `begin` did not terminate at `end` ({reason})")]
    InconsistentRecordWalk { reason: &'static str },
}
