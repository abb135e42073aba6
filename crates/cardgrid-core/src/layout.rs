//! Layout inspection: how many cards fit on one row
//!
//! The measurement is taken fresh for every insertion decision because the
//! terminal may have been resized since the last one.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::CardsPerRow;

/// Measured dimensions of the container and a representative card, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutMetrics {
    /// Total width of the container including padding
    pub container_width: u32,
    /// Padding applied on each side of the container
    pub container_padding: u32,
    /// Width of one card without margins
    pub card_width: u32,
    /// Margin applied on each side of a card
    pub card_margin: u32,
}

impl LayoutMetrics {
    /// Width left for cards once the container padding is removed
    pub fn available_width(&self) -> u32 {
        self.container_width
            .saturating_sub(self.container_padding.saturating_mul(2))
    }

    /// Horizontal space one card occupies, margins included
    pub fn card_footprint(&self) -> u32 {
        self.card_width
            .saturating_add(self.card_margin.saturating_mul(2))
    }
}

/// Derive the current number of cards per row (1, 2 or 3).
///
/// Three when three footprints fit in the available width, else two when two
/// fit, else one. A single card is assumed to always fit.
pub fn cards_per_row(metrics: &LayoutMetrics) -> Result<CardsPerRow> {
    let footprint = metrics.card_footprint();
    if footprint == 0 {
        return Err(Error::layout(
            "card footprint is zero; card width and margin cannot both be 0",
        ));
    }

    let available = u64::from(metrics.available_width());
    let footprint = u64::from(footprint);

    let per_row = if available >= 3 * footprint {
        CardsPerRow::Three
    } else if available >= 2 * footprint {
        CardsPerRow::Two
    } else {
        CardsPerRow::One
    };

    tracing::trace!(
        available,
        footprint,
        per_row = per_row.count(),
        "cards per row measured"
    );
    Ok(per_row)
}
