//! Position resolution: where a clicked card sits in its row and how many
//! order slots the inline panel needs to land after that row.

use serde::Serialize;

use crate::types::{CardsPerRow, RowPosition};

/// Outcome of resolving a clicked card's order index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub position: RowPosition,
    /// Order delta from the clicked card to the panel
    pub change_amount: u32,
}

/// Resolve the row position of `order` for `per_row` columns.
///
/// The column is `order mod per_row`: the last column is `Last`, column zero
/// is `First`, anything between is `Middle`. The change amount is the number
/// of slots to the end of the row, so `per_row - column`.
pub fn resolve(order: u32, per_row: CardsPerRow) -> Resolution {
    let columns = per_row.count() as u32;
    let column = order % columns;

    let position = if column == columns - 1 {
        RowPosition::Last
    } else if column == 0 {
        RowPosition::First
    } else {
        RowPosition::Middle
    };

    Resolution {
        position,
        change_amount: columns - column,
    }
}
