//! Cell address codec
//!
//! Maps a (row, column) pair in a tabular dataset to a single integer and
//! back, given the visible column count. The flat form fits into a
//! single-valued navigation token (a URL query parameter, for instance),
//! which is how a host UI remembers which cell the inspector is open on.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single integer identifying a (row, column) pair under a fixed column
/// count.
///
/// The encoding is `row * column_count + column`, so the same address means
/// a different cell under a different column count. An address taken from
/// one dataset snapshot must not be reinterpreted against another; decode it
/// against the snapshot it was produced from, or discard it.
///
/// "No cell" is represented by the absence of an address (`Option`), never
/// by a sentinel value: address 0 is the real cell (0, 0).
///
/// # Example
///
/// ```
/// use visor::CellAddress;
///
/// let addr = CellAddress::encode(2, 3, 4)?;
/// assert_eq!(addr.value(), 11);
/// assert_eq!(addr.decode(4)?, (2, 3));
/// # Ok::<(), visor::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellAddress(u64);

impl CellAddress {
    /// Wrap a raw address value, typically parsed from a navigation token.
    ///
    /// No validation happens here; validity depends on the column count and
    /// row count the address is later decoded against.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw address value.
    #[inline]
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Encode a (row, column) pair as a cell address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `column_count` is zero or
    /// `col >= column_count`, and [`Error::AddressOverflow`] when
    /// `row * column_count + col` does not fit in a `u64`.
    pub fn encode(row: usize, col: usize, column_count: usize) -> Result<Self> {
        if column_count == 0 {
            return Err(Error::invalid_argument(
                "cell address requires a positive column count",
            ));
        }
        if col >= column_count {
            return Err(Error::ColumnOutOfBounds {
                requested: col,
                total: column_count,
            });
        }

        let address = (row as u64)
            .checked_mul(column_count as u64)
            .and_then(|base| base.checked_add(col as u64))
            .ok_or(Error::AddressOverflow { row, column_count })?;

        Ok(Self(address))
    }

    /// Decode the address back into a (row, column) pair.
    ///
    /// Uses floor division and non-negative remainder, so the codec laws
    /// `decode(encode(r, c, n), n) == (r, c)` and
    /// `encode(decode(a, n).., n) == a` hold for every valid input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `column_count` is zero.
    pub fn decode(self, column_count: usize) -> Result<(usize, usize)> {
        if column_count == 0 {
            return Err(Error::invalid_argument(
                "cell address requires a positive column count",
            ));
        }

        let cols = column_count as u64;
        let row = usize::try_from(self.0 / cols).map_err(|_| Error::AddressOverflow {
            row: usize::MAX,
            column_count,
        })?;
        // Remainder is < column_count, which already fits in usize.
        let col = (self.0 % cols) as usize;

        Ok((row, col))
    }

    /// Decode only the row index.
    ///
    /// The inspector shows an entire record, so most consumers only care
    /// which row an address lands on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `column_count` is zero.
    pub fn row(self, column_count: usize) -> Result<usize> {
        self.decode(column_count).map(|(row, _)| row)
    }
}

impl From<CellAddress> for u64 {
    fn from(addr: CellAddress) -> Self {
        addr.0
    }
}

impl From<u64> for CellAddress {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for CellAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
