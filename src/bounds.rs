use std::ops::Range;

use crate::error::{Bounds, Error, Result};

/// Validates `index` against `0..len`, returning it as a slot offset.
pub(crate) fn check_index(index: isize, len: usize) -> Result<usize> {
    match usize::try_from(index) {
        Ok(offset) if offset < len => Ok(offset),
        _ => Err(Error::IndexOutOfRange {
            bounds: Bounds::Index(index),
            len,
        }),
    }
}

/// Validates the half-open range `[from, to)` against `0..=len`.
///
/// An empty range (`from == to`) is valid anywhere up to and including `len`.
pub(crate) fn check_from_to_index(from: isize, to: isize, len: usize) -> Result<Range<usize>> {
    match (usize::try_from(from), usize::try_from(to)) {
        (Ok(start), Ok(end)) if start <= end && end <= len => Ok(start..end),
        _ => Err(Error::IndexOutOfRange {
            bounds: Bounds::Range(from, to),
            len,
        }),
    }
}
