//! Error taxonomy shared by every distribution operation.
//!
//! Operations return `Result<(), Error>`. The numeric status codes are kept so
//! results can be reported across boundaries that only carry an integer.

/// Status code reported for a successful operation.
pub const STATUS_OK: u8 = 0;

/// Why an operation refused to produce a distribution.
///
/// On error the output buffer has not been written and must not be sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// A buffer's declared end precedes its declared start (or lies past its storage).
    #[error("bad range: buffer end precedes its start")]
    BadRange,
    /// There are no actions to build a distribution over.
    #[error("empty pdf: no actions to distribute over")]
    EmptyPdf,
}

impl Error {
    /// Numeric status code (`1` = bad range, `2` = empty pdf).
    pub const fn code(self) -> u8 {
        match self {
            Error::BadRange => 1,
            Error::EmptyPdf => 2,
        }
    }

    /// Inverse of [`Error::code`]. Returns `None` for [`STATUS_OK`] and unknown codes.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Error::BadRange),
            2 => Some(Error::EmptyPdf),
            _ => None,
        }
    }
}

/// Collapse an operation result into its numeric status code.
pub fn status_code(result: &Result<(), Error>) -> u8 {
    match result {
        Ok(()) => STATUS_OK,
        Err(e) => e.code(),
    }
}
