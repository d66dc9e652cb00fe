use derive_more::derive::{Display, Error};

/// Result type returned by the fallible list operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The offending position of a rejected access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Bounds {
    /// A single slot index.
    #[display("Index {_0}")]
    Index(isize),

    /// A half-open `[from, to)` range.
    #[display("Range [{_0}, {_1})")]
    Range(isize, isize),
}

/// Errors produced by [`ArrayBackedList`](crate::ArrayBackedList) and
/// [`LinkedNodeList`](crate::LinkedNodeList).
///
/// Every error is raised before the list is touched, so a failed call leaves
/// the list exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[non_exhaustive]
pub enum Error {
    /// A negative capacity hint was passed to a constructor.
    #[display("Illegal capacity: {capacity}")]
    InvalidArgument { capacity: isize },

    /// An index or range fell outside `0..len`.
    #[display("{bounds} out of bounds for length {len}")]
    IndexOutOfRange { bounds: Bounds, len: usize },
}
