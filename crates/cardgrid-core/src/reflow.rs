//! Order reflow: making room for the inline panel and collapsing back
//!
//! Placement works on a collapsed grid (card orders equal DOM indices). The
//! panel takes the order slot at the end of the clicked card's row and every
//! card from that slot on is pushed past it.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::grid::{Grid, PanelSlot};
use crate::position::{resolve, Resolution};
use crate::types::{CardId, CardsPerRow, RowPosition};

/// Layout bookkeeping for the current interaction.
///
/// All fields are set together when a card is activated and cleared together
/// when the grid collapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LayoutState {
    pub clicked_order: Option<u32>,
    pub clicked_position: Option<RowPosition>,
    pub change_amount: Option<u32>,
}

impl LayoutState {
    pub fn resolved(clicked_order: u32, resolution: Resolution) -> Self {
        Self {
            clicked_order: Some(clicked_order),
            clicked_position: Some(resolution.position),
            change_amount: Some(resolution.change_amount),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.clicked_order.is_none()
            && self.clicked_position.is_none()
            && self.change_amount.is_none()
    }

    /// Order index the panel takes, when the state is set
    pub fn panel_order(&self) -> Option<u32> {
        Some(self.clicked_order? + self.change_amount?)
    }
}

/// DOM sibling after which the panel is inserted.
///
/// `First` looks `per_row - 1` siblings ahead, `Middle` one ahead and `Last`
/// returns the card itself. A short final row clamps to the last card.
pub fn insertion_point(
    grid: &Grid,
    card: CardId,
    position: RowPosition,
    per_row: CardsPerRow,
) -> Result<CardId> {
    grid.require(card)?;

    let ahead = match position {
        RowPosition::First => per_row.count() - 1,
        RowPosition::Middle => 1,
        RowPosition::Last => 0,
    };

    let last = grid.len() - 1;
    Ok(CardId((card.index() + ahead).min(last)))
}

/// Shift card orders to open a gap for the panel and return the panel order.
///
/// The panel order is `clicked_order + change_amount`; every card at or past
/// it moves up by `change_amount + 1`.
pub fn apply_offsets(grid: &mut Grid, state: &LayoutState) -> Result<u32> {
    let (Some(clicked), Some(change)) = (state.clicked_order, state.change_amount) else {
        return Err(Error::invariant(
            "apply_offsets called without a resolved layout state",
        ));
    };

    let insert_at = clicked + change;
    for card in grid.cards_mut() {
        if card.order >= insert_at {
            card.order += change + 1;
        }
    }

    tracing::debug!(insert_at, change, "Applied order offsets");
    Ok(insert_at)
}

/// Reset every card order to its DOM index and return an unset layout state
pub fn collapse_order(grid: &mut Grid) -> LayoutState {
    for (index, card) in grid.cards_mut().iter_mut().enumerate() {
        card.order = index as u32;
    }
    LayoutState::default()
}

/// Resolve, reflow and insert the panel for `card` on a collapsed grid
pub fn place_panel(grid: &mut Grid, card: CardId, per_row: CardsPerRow) -> Result<LayoutState> {
    if grid.has_panel() {
        return Err(Error::invariant(
            "cannot place a panel while another panel exists",
        ));
    }

    let order = grid.require(card)?.order;
    let resolution = resolve(order, per_row);
    let state = LayoutState::resolved(order, resolution);

    let after = insertion_point(grid, card, resolution.position, per_row)?;
    let panel_order = apply_offsets(grid, &state)?;
    grid.insert_panel(PanelSlot {
        anchor: card,
        after,
        order: panel_order,
    });

    tracing::info!(
        "Panel for {} placed after {} at order {} ({} of {} per row)",
        card,
        after,
        panel_order,
        resolution.position,
        per_row
    );
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{GridRow, DEFAULT_CARD_COUNT};
    use std::collections::HashSet;

    fn all_orders(grid: &Grid) -> Vec<u32> {
        let mut orders = grid.orders();
        if let Some(panel) = grid.panel() {
            orders.push(panel.order);
        }
        orders
    }

    #[test]
    fn test_insertion_point_three_per_row() {
        let grid = Grid::build(DEFAULT_CARD_COUNT);
        let p = |id, pos| insertion_point(&grid, CardId(id), pos, CardsPerRow::Three).unwrap();
        assert_eq!(p(0, RowPosition::First), CardId(2));
        assert_eq!(p(4, RowPosition::Middle), CardId(5));
        assert_eq!(p(8, RowPosition::Last), CardId(8));
    }

    #[test]
    fn test_insertion_point_two_per_row() {
        let grid = Grid::build(DEFAULT_CARD_COUNT);
        let p = insertion_point(&grid, CardId(6), RowPosition::First, CardsPerRow::Two).unwrap();
        assert_eq!(p, CardId(7));
    }

    #[test]
    fn test_insertion_point_clamps_short_last_row() {
        let grid = Grid::build(10);
        let p = insertion_point(&grid, CardId(9), RowPosition::First, CardsPerRow::Three).unwrap();
        assert_eq!(p, CardId(9));
    }

    #[test]
    fn test_insertion_point_missing_card() {
        let grid = Grid::build(3);
        let err = insertion_point(&grid, CardId(3), RowPosition::Last, CardsPerRow::One);
        assert!(matches!(err, Err(Error::ElementMissing { .. })));
    }

    #[test]
    fn test_apply_offsets_requires_resolved_state() {
        let mut grid = Grid::build(3);
        let err = apply_offsets(&mut grid, &LayoutState::default());
        assert!(matches!(err, Err(Error::InvariantViolation { .. })));
        assert_eq!(grid.orders(), vec![0, 1, 2]);
    }

    #[test]
    fn test_apply_offsets_first_card_three_per_row() {
        let mut grid = Grid::build(DEFAULT_CARD_COUNT);
        let state = LayoutState::resolved(0, resolve(0, CardsPerRow::Three));
        let panel_order = apply_offsets(&mut grid, &state).unwrap();

        assert_eq!(panel_order, 3);
        let orders = grid.orders();
        assert_eq!(&orders[..3], &[0, 1, 2]);
        for (i, order) in orders.iter().enumerate().skip(3) {
            assert_eq!(*order, i as u32 + 4);
        }
    }

    #[test]
    fn test_orders_stay_distinct_and_ordered() {
        for per_row in [CardsPerRow::One, CardsPerRow::Two, CardsPerRow::Three] {
            for clicked in 0..DEFAULT_CARD_COUNT {
                let mut grid = Grid::build(DEFAULT_CARD_COUNT);
                place_panel(&mut grid, CardId(clicked), per_row).unwrap();

                let orders = all_orders(&grid);
                let unique: HashSet<u32> = orders.iter().copied().collect();
                assert_eq!(unique.len(), orders.len(), "duplicate order for {clicked}");

                let cards = grid.orders();
                assert!(cards.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_place_panel_sets_layout_state() {
        let mut grid = Grid::build(DEFAULT_CARD_COUNT);
        let state = place_panel(&mut grid, CardId(4), CardsPerRow::Three).unwrap();

        assert_eq!(state.clicked_order, Some(4));
        assert_eq!(state.clicked_position, Some(RowPosition::Middle));
        assert_eq!(state.change_amount, Some(2));
        assert_eq!(state.panel_order(), Some(6));

        let panel = grid.panel().unwrap();
        assert_eq!(panel.anchor, CardId(4));
        assert_eq!(panel.after, CardId(5));
        assert_eq!(panel.order, 6);
    }

    #[test]
    fn test_place_panel_lands_after_clicked_row() {
        for clicked in 0..DEFAULT_CARD_COUNT {
            let mut grid = Grid::build(DEFAULT_CARD_COUNT);
            place_panel(&mut grid, CardId(clicked), CardsPerRow::Three).unwrap();

            let rows = grid.rows(CardsPerRow::Three);
            let panel_row = rows.iter().position(|r| *r == GridRow::Panel).unwrap();
            let GridRow::Cards(above) = &rows[panel_row - 1] else {
                panic!("panel must follow a card row");
            };
            assert!(above.contains(&CardId(clicked)));
            assert_eq!(above.len(), 3);
        }
    }

    #[test]
    fn test_place_panel_rejects_second_panel() {
        let mut grid = Grid::build(DEFAULT_CARD_COUNT);
        place_panel(&mut grid, CardId(0), CardsPerRow::Three).unwrap();
        let err = place_panel(&mut grid, CardId(1), CardsPerRow::Three);
        assert!(matches!(err, Err(Error::InvariantViolation { .. })));
    }

    #[test]
    fn test_collapse_restores_dom_order() {
        let mut grid = Grid::build(DEFAULT_CARD_COUNT);
        place_panel(&mut grid, CardId(7), CardsPerRow::Two).unwrap();
        grid.remove_panel();

        let state = collapse_order(&mut grid);
        assert!(state.is_unset());
        assert_eq!(grid.orders(), (0..12).collect::<Vec<u32>>());
    }

    #[test]
    fn test_layout_state_panel_order_unset() {
        assert_eq!(LayoutState::default().panel_order(), None);
        assert!(LayoutState::default().is_unset());
    }
}
