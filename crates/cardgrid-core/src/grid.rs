//! The card grid model
//!
//! Cards are held in an explicit sequence in creation (DOM) order. Each card
//! also carries an order index that decides where it is drawn; the visual
//! sequence is derived from those indices when the grid is laid out.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::{CardId, CardVisual, CardsPerRow};

/// Number of cards created at startup when nothing else is configured
pub const DEFAULT_CARD_COUNT: usize = 12;

/// A single card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: CardId,
    pub order: u32,
    pub visual: CardVisual,
}

/// The inline panel's place in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelSlot {
    /// Card whose details the panel shows
    pub anchor: CardId,
    /// Sibling the panel is inserted after in DOM order
    pub after: CardId,
    /// Visual order index of the panel
    pub order: u32,
}

/// One element of the visual sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridItem {
    Card(CardId),
    Panel,
}

/// One visual row after wrapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridRow {
    Cards(Vec<CardId>),
    /// The panel always spans a full row
    Panel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cards: Vec<Card>,
    panel: Option<PanelSlot>,
}

impl Grid {
    /// Build a grid of `count` cards with orders `0..count` in creation order
    pub fn build(count: usize) -> Self {
        let cards = (0..count)
            .map(|i| Card {
                id: CardId(i),
                order: i as u32,
                visual: CardVisual::Neutral,
            })
            .collect();
        tracing::debug!("Built grid with {} cards", count);
        Self { cards, panel: None }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Look up a card, failing with a descriptive error when it does not exist
    pub fn require(&self, id: CardId) -> Result<&Card> {
        self.card(id)
            .ok_or_else(|| Error::element_missing(format!("{id} (grid has {})", self.len())))
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Card order indices in DOM order
    pub fn orders(&self) -> Vec<u32> {
        self.cards.iter().map(|c| c.order).collect()
    }

    pub fn panel(&self) -> Option<&PanelSlot> {
        self.panel.as_ref()
    }

    pub fn has_panel(&self) -> bool {
        self.panel.is_some()
    }

    /// Insert the panel. Any previous panel is replaced.
    pub fn insert_panel(&mut self, slot: PanelSlot) {
        if let Some(old) = self.panel.replace(slot) {
            tracing::warn!("Replacing existing panel anchored at {}", old.anchor);
        }
    }

    pub fn remove_panel(&mut self) -> Option<PanelSlot> {
        self.panel.take()
    }

    /// Mark `id` active and every other card inactive
    pub fn activate(&mut self, id: CardId) -> Result<()> {
        self.require(id)?;
        for card in &mut self.cards {
            card.visual = if card.id == id {
                CardVisual::Active
            } else {
                CardVisual::Inactive
            };
        }
        Ok(())
    }

    /// Drop both active and inactive highlights
    pub fn clear_visuals(&mut self) {
        for card in &mut self.cards {
            card.visual = CardVisual::Neutral;
        }
    }

    pub fn active_card(&self) -> Option<CardId> {
        self.cards
            .iter()
            .find(|c| c.visual == CardVisual::Active)
            .map(|c| c.id)
    }

    /// Items sorted by order index; DOM position breaks ties
    pub fn visual_sequence(&self) -> Vec<GridItem> {
        let mut keyed: Vec<((u32, usize), GridItem)> = self
            .cards
            .iter()
            .map(|c| ((c.order, c.id.index() * 2), GridItem::Card(c.id)))
            .collect();

        if let Some(panel) = &self.panel {
            keyed.push(((panel.order, panel.after.index() * 2 + 1), GridItem::Panel));
        }

        keyed.sort_by_key(|(key, _)| *key);
        keyed.into_iter().map(|(_, item)| item).collect()
    }

    /// Wrap the visual sequence into rows of `per_row` cards.
    ///
    /// The panel breaks the current row and takes a row of its own, the way a
    /// full-width item behaves in a wrapping flex container.
    pub fn rows(&self, per_row: CardsPerRow) -> Vec<GridRow> {
        let width = per_row.count();
        let mut rows = Vec::new();
        let mut current: Vec<CardId> = Vec::with_capacity(width);

        for item in self.visual_sequence() {
            match item {
                GridItem::Card(id) => {
                    current.push(id);
                    if current.len() == width {
                        rows.push(GridRow::Cards(std::mem::take(&mut current)));
                    }
                }
                GridItem::Panel => {
                    if !current.is_empty() {
                        rows.push(GridRow::Cards(std::mem::take(&mut current)));
                    }
                    rows.push(GridRow::Panel);
                }
            }
        }

        if !current.is_empty() {
            rows.push(GridRow::Cards(current));
        }
        rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::build(DEFAULT_CARD_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(row: &GridRow) -> Vec<usize> {
        match row {
            GridRow::Cards(cards) => cards.iter().map(|c| c.index()).collect(),
            GridRow::Panel => vec![],
        }
    }

    #[test]
    fn test_build_assigns_sequential_orders() {
        let grid = Grid::build(DEFAULT_CARD_COUNT);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.orders(), (0..12).collect::<Vec<u32>>());
        assert!(grid.cards().iter().all(|c| c.visual == CardVisual::Neutral));
        assert!(!grid.has_panel());
    }

    #[test]
    fn test_require_missing_card_is_descriptive() {
        let grid = Grid::build(3);
        let err = grid.require(CardId(5)).unwrap_err();
        assert!(matches!(err, Error::ElementMissing { .. }));
        assert!(err.to_string().contains("card 5"));
    }

    #[test]
    fn test_activate_marks_exactly_one_active() {
        let mut grid = Grid::build(6);
        grid.activate(CardId(2)).unwrap();

        assert_eq!(grid.active_card(), Some(CardId(2)));
        let inactive = grid
            .cards()
            .iter()
            .filter(|c| c.visual == CardVisual::Inactive)
            .count();
        assert_eq!(inactive, 5);

        grid.activate(CardId(4)).unwrap();
        assert_eq!(grid.active_card(), Some(CardId(4)));
        assert_eq!(grid.card(CardId(2)).unwrap().visual, CardVisual::Inactive);
    }

    #[test]
    fn test_activate_unknown_card_leaves_visuals_alone() {
        let mut grid = Grid::build(3);
        assert!(grid.activate(CardId(9)).is_err());
        assert!(grid.cards().iter().all(|c| c.visual == CardVisual::Neutral));
    }

    #[test]
    fn test_clear_visuals() {
        let mut grid = Grid::build(3);
        grid.activate(CardId(0)).unwrap();
        grid.clear_visuals();
        assert_eq!(grid.active_card(), None);
        assert!(grid.cards().iter().all(|c| c.visual == CardVisual::Neutral));
    }

    #[test]
    fn test_rows_without_panel() {
        let grid = Grid::build(7);
        let rows = grid.rows(CardsPerRow::Three);
        assert_eq!(rows.len(), 3);
        assert_eq!(ids(&rows[0]), vec![0, 1, 2]);
        assert_eq!(ids(&rows[2]), vec![6]);
    }

    #[test]
    fn test_panel_takes_its_own_row() {
        let mut grid = Grid::build(6);
        // Panel after card 1 at order 2, later cards shifted out of the way
        for card in grid.cards_mut().iter_mut().skip(2) {
            card.order += 3;
        }
        grid.insert_panel(PanelSlot {
            anchor: CardId(0),
            after: CardId(1),
            order: 2,
        });

        let rows = grid.rows(CardsPerRow::Two);
        assert_eq!(rows.len(), 4);
        assert_eq!(ids(&rows[0]), vec![0, 1]);
        assert_eq!(rows[1], GridRow::Panel);
        assert_eq!(ids(&rows[2]), vec![2, 3]);
        assert_eq!(ids(&rows[3]), vec![4, 5]);
    }

    #[test]
    fn test_panel_breaks_partial_row() {
        let mut grid = Grid::build(4);
        for card in grid.cards_mut().iter_mut().skip(1) {
            card.order += 10;
        }
        grid.insert_panel(PanelSlot {
            anchor: CardId(0),
            after: CardId(0),
            order: 1,
        });

        let rows = grid.rows(CardsPerRow::Three);
        assert_eq!(ids(&rows[0]), vec![0]);
        assert_eq!(rows[1], GridRow::Panel);
        assert_eq!(ids(&rows[2]), vec![1, 2, 3]);
    }

    #[test]
    fn test_visual_sequence_follows_order_not_dom() {
        let mut grid = Grid::build(3);
        grid.cards_mut()[0].order = 5;
        let seq = grid.visual_sequence();
        assert_eq!(
            seq,
            vec![
                GridItem::Card(CardId(1)),
                GridItem::Card(CardId(2)),
                GridItem::Card(CardId(0)),
            ]
        );
    }

    #[test]
    fn test_remove_panel() {
        let mut grid = Grid::build(3);
        grid.insert_panel(PanelSlot {
            anchor: CardId(0),
            after: CardId(2),
            order: 3,
        });
        assert!(grid.remove_panel().is_some());
        assert!(grid.remove_panel().is_none());
    }
}
