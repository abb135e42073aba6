//! Core domain types for the card grid

use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};

/// Identity of a card: its index in creation (DOM) order.
///
/// Card ids never change once the grid is built; the visual position of a
/// card is carried separately by its order index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CardId(pub usize);

impl CardId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card {}", self.0)
    }
}

/// Visual highlight state of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVisual {
    /// No panel open; the card is drawn normally
    #[default]
    Neutral,
    /// The card whose inline panel is open
    Active,
    /// Any other card while a panel is open
    Inactive,
}

/// Where a card sits within its visual row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowPosition {
    First,
    Middle,
    Last,
}

impl fmt::Display for RowPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowPosition::First => write!(f, "first"),
            RowPosition::Middle => write!(f, "middle"),
            RowPosition::Last => write!(f, "last"),
        }
    }
}

/// Number of cards that fit in one visual row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "usize")]
pub enum CardsPerRow {
    One,
    Two,
    Three,
}

impl CardsPerRow {
    pub fn count(self) -> usize {
        match self {
            CardsPerRow::One => 1,
            CardsPerRow::Two => 2,
            CardsPerRow::Three => 3,
        }
    }
}

impl From<CardsPerRow> for usize {
    fn from(value: CardsPerRow) -> Self {
        value.count()
    }
}

impl TryFrom<usize> for CardsPerRow {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            1 => Ok(CardsPerRow::One),
            2 => Ok(CardsPerRow::Two),
            3 => Ok(CardsPerRow::Three),
            other => Err(Error::invariant(format!(
                "cards per row must be 1, 2 or 3, got {other}"
            ))),
        }
    }
}

impl fmt::Display for CardsPerRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_per_row_try_from_accepts_valid_counts() {
        assert_eq!(CardsPerRow::try_from(1).unwrap(), CardsPerRow::One);
        assert_eq!(CardsPerRow::try_from(2).unwrap(), CardsPerRow::Two);
        assert_eq!(CardsPerRow::try_from(3).unwrap(), CardsPerRow::Three);
    }

    #[test]
    fn test_cards_per_row_try_from_rejects_out_of_range() {
        assert!(matches!(
            CardsPerRow::try_from(0),
            Err(Error::InvariantViolation { .. })
        ));
        assert!(matches!(
            CardsPerRow::try_from(4),
            Err(Error::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_cards_per_row_serializes_as_number() {
        let json = serde_json::to_string(&CardsPerRow::Two).unwrap();
        assert_eq!(json, "2");
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(CardId(7).to_string(), "card 7");
    }
}
