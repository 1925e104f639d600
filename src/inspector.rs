//! Inspector visibility state machine
//!
//! The inspector is the overlay showing one full record. Its visibility is
//! driven entirely by the presence or absence of a cell address in the
//! host's navigation state: no address means closed. Transitions are pure;
//! every operation returns the next state and leaves the input untouched,
//! so the host can keep the state wherever it keeps the rest of its
//! navigation data.

use serde::{Deserialize, Serialize};

use crate::address::CellAddress;
use crate::error::Result;

/// Whether the record inspector is closed or open on some cell.
///
/// Navigation between records always jumps to column 0 of the adjacent row.
/// That is deliberate: the inspector shows an entire record, not a single
/// field, so the column component only matters for the cell the user
/// originally clicked.
///
/// # Example
///
/// ```
/// use visor::InspectorState;
///
/// let state = InspectorState::Closed.open(2, 3, 4)?;
/// assert_eq!(state.token(), Some(11));
///
/// // "next" moves to row 3, column 0.
/// let state = state.next(5, 4)?;
/// assert_eq!(state.selected_row(4)?, Some(3));
/// # Ok::<(), visor::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "address", rename_all = "lowercase")]
pub enum InspectorState {
    /// No record is being inspected.
    #[default]
    Closed,
    /// The inspector is open on the cell at the given address.
    Open(CellAddress),
}

impl InspectorState {
    /// Reconstruct the state from an optional navigation token.
    ///
    /// Absence of the token means closed; any present value is taken as an
    /// address and validated later against the current snapshot (see
    /// [`InspectorState::sanitize`]).
    #[must_use]
    pub fn from_token(token: Option<u64>) -> Self {
        match token {
            Some(value) => Self::Open(CellAddress::new(value)),
            None => Self::Closed,
        }
    }

    /// The navigation token for this state: the address when open, absent
    /// when closed.
    #[must_use]
    pub fn token(&self) -> Option<u64> {
        match self {
            Self::Open(addr) => Some(addr.value()),
            Self::Closed => None,
        }
    }

    /// Whether the inspector is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// The open address, if any.
    #[must_use]
    pub fn address(&self) -> Option<CellAddress> {
        match self {
            Self::Open(addr) => Some(*addr),
            Self::Closed => None,
        }
    }

    /// Open the inspector on a cell.
    ///
    /// # Errors
    ///
    /// Propagates codec errors for a zero column count or an out-of-range
    /// column index.
    pub fn open(self, row: usize, col: usize, column_count: usize) -> Result<Self> {
        Ok(Self::Open(CellAddress::encode(row, col, column_count)?))
    }

    /// Close the inspector.
    #[must_use]
    pub fn close(self) -> Self {
        Self::Closed
    }

    /// Move to the next record: column 0 of the row below.
    ///
    /// A no-op when closed or already on the last row.
    ///
    /// # Errors
    ///
    /// Propagates codec errors for a zero column count.
    pub fn next(self, row_count: usize, column_count: usize) -> Result<Self> {
        let Self::Open(addr) = self else {
            return Ok(self);
        };
        let row = addr.row(column_count)?;
        if row + 1 >= row_count {
            return Ok(self);
        }
        Ok(Self::Open(CellAddress::encode(row + 1, 0, column_count)?))
    }

    /// Move to the previous record: column 0 of the row above.
    ///
    /// A no-op when closed or already on row 0.
    ///
    /// # Errors
    ///
    /// Propagates codec errors for a zero column count.
    pub fn prev(self, column_count: usize) -> Result<Self> {
        let Self::Open(addr) = self else {
            return Ok(self);
        };
        let row = addr.row(column_count)?;
        if row == 0 {
            return Ok(self);
        }
        Ok(Self::Open(CellAddress::encode(row - 1, 0, column_count)?))
    }

    /// The row the inspector is open on, or `None` when closed.
    ///
    /// # Errors
    ///
    /// Propagates codec errors for a zero column count.
    pub fn selected_row(&self, column_count: usize) -> Result<Option<usize>> {
        match self {
            Self::Open(addr) => Ok(Some(addr.row(column_count)?)),
            Self::Closed => Ok(None),
        }
    }

    /// Collapse invalid or stale state to closed.
    ///
    /// An address carried over from a previous snapshot (a token in the
    /// host's navigation state after a refresh, say) may point past the new
    /// snapshot or be undecodable because there are no columns. Such state
    /// means "no valid selection", which is closed.
    #[must_use]
    pub fn sanitize(self, row_count: usize, column_count: usize) -> Self {
        let Self::Open(addr) = self else {
            return Self::Closed;
        };
        match addr.row(column_count) {
            Ok(row) if row < row_count => self,
            _ => Self::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn f_inspector_initial_state_is_closed() {
        assert_eq!(InspectorState::default(), InspectorState::Closed);
        assert!(!InspectorState::Closed.is_open());
    }

    #[test]
    fn f_inspector_open() {
        let state = InspectorState::Closed.open(2, 3, 4).unwrap();
        assert!(state.is_open());
        assert_eq!(state.address().map(CellAddress::value), Some(11));
    }

    #[test]
    fn f_inspector_open_zero_columns() {
        let result = InspectorState::Closed.open(2, 0, 0);
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn f_inspector_close() {
        let state = InspectorState::Closed.open(1, 0, 4).unwrap();
        assert_eq!(state.close(), InspectorState::Closed);
    }

    #[test]
    fn f_inspector_next_jumps_to_column_zero() {
        // Open on (2, 3) with 5 rows and 4 columns.
        let state = InspectorState::Closed.open(2, 3, 4).unwrap();
        let state = state.next(5, 4).unwrap();
        let addr = state.address().unwrap();
        assert_eq!(addr.decode(4).unwrap(), (3, 0));
    }

    #[test]
    fn f_inspector_next_at_last_row_is_noop() {
        let state = InspectorState::Closed.open(4, 0, 4).unwrap();
        let after = state.next(5, 4).unwrap();
        assert_eq!(after, state, "FALSIFIED: next past last row must not move");
    }

    #[test]
    fn f_inspector_prev() {
        let state = InspectorState::Closed.open(3, 2, 4).unwrap();
        let state = state.prev(4).unwrap();
        assert_eq!(state.address().unwrap().decode(4).unwrap(), (2, 0));
    }

    #[test]
    fn f_inspector_prev_at_first_row_is_noop() {
        let state = InspectorState::Closed.open(0, 2, 4).unwrap();
        let after = state.prev(4).unwrap();
        assert_eq!(after, state);
    }

    #[test]
    fn f_inspector_navigation_while_closed_is_noop() {
        assert_eq!(
            InspectorState::Closed.next(5, 4).unwrap(),
            InspectorState::Closed
        );
        assert_eq!(
            InspectorState::Closed.prev(4).unwrap(),
            InspectorState::Closed
        );
    }

    #[test]
    fn f_inspector_spec_navigation_scenario() {
        // 5 rows, 4 columns; open on row 2, col 0.
        let state = InspectorState::Closed.open(2, 0, 4).unwrap();

        let state = state.next(5, 4).unwrap();
        assert_eq!(state.selected_row(4).unwrap(), Some(3));

        let state = state.next(5, 4).unwrap();
        assert_eq!(state.selected_row(4).unwrap(), Some(4));

        // next from the last row is a no-op
        let state = state.next(5, 4).unwrap();
        assert_eq!(state.selected_row(4).unwrap(), Some(4));

        // walk back to row 0; prev there is a no-op
        let mut state = state;
        for _ in 0..4 {
            state = state.prev(4).unwrap();
        }
        assert_eq!(state.selected_row(4).unwrap(), Some(0));
        let state = state.prev(4).unwrap();
        assert_eq!(state.selected_row(4).unwrap(), Some(0));
    }

    #[test]
    fn f_inspector_token_round_trip() {
        let state = InspectorState::from_token(Some(11));
        assert_eq!(state.token(), Some(11));
        assert_eq!(InspectorState::from_token(None), InspectorState::Closed);
        assert_eq!(InspectorState::Closed.token(), None);
    }

    #[test]
    fn f_inspector_token_zero_is_a_cell() {
        // Token 0 means cell (0, 0) is open, not "closed".
        let state = InspectorState::from_token(Some(0));
        assert!(state.is_open());
        assert_eq!(state.selected_row(4).unwrap(), Some(0));
    }

    #[test]
    fn f_inspector_selected_row_closed() {
        assert_eq!(InspectorState::Closed.selected_row(4).unwrap(), None);
    }

    #[test]
    fn f_inspector_sanitize_valid() {
        let state = InspectorState::Closed.open(2, 1, 4).unwrap();
        assert_eq!(state.sanitize(5, 4), state);
    }

    #[test]
    fn f_inspector_sanitize_stale_row() {
        // Address taken against a 10-row snapshot, checked against 4 rows.
        let state = InspectorState::Closed.open(8, 0, 4).unwrap();
        assert_eq!(state.sanitize(4, 4), InspectorState::Closed);
    }

    #[test]
    fn f_inspector_sanitize_zero_columns() {
        let state = InspectorState::from_token(Some(11));
        assert_eq!(state.sanitize(5, 0), InspectorState::Closed);
    }

    #[test]
    fn f_inspector_sanitize_closed_stays_closed() {
        assert_eq!(
            InspectorState::Closed.sanitize(5, 4),
            InspectorState::Closed
        );
    }

    #[test]
    fn f_inspector_serde_round_trip() {
        let state = InspectorState::Closed.open(2, 3, 4).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: InspectorState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
