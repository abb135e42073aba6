//! Semantic style builders for the card grid.

use cardgrid_app::PanelPhase;
use cardgrid_core::CardVisual;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Cards ---

/// Border and text styles for a card.
///
/// Returns `(border_style, text_style)`. Keyboard focus only changes the
/// border type, see [`card_block`].
pub fn card_styles(visual: CardVisual) -> (Style, Style) {
    match visual {
        CardVisual::Neutral => (border_inactive(), text_primary()),
        CardVisual::Active => (accent_bold(), accent_bold()),
        CardVisual::Inactive => (border_inactive(), text_muted()),
    }
}

pub fn card_block(visual: CardVisual, focused: bool) -> Block<'static> {
    let (border, _) = card_styles(visual);
    let border_type = if focused {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border)
        .style(Style::default().bg(palette::CARD_BG))
}

/// Text style for the inline panel at a given expansion progress.
///
/// Terminals have no opacity, so the fade steps through dimmer colors.
pub fn panel_fade(progress: f32) -> Style {
    let fg = if progress < 0.34 {
        palette::TEXT_MUTED
    } else if progress < 0.67 {
        palette::TEXT_SECONDARY
    } else {
        palette::TEXT_BRIGHT
    };
    Style::default().fg(fg).bg(palette::PANEL_BG)
}

// --- Phase indicator mapping ---

/// Phase indicator for the status bar.
///
/// Returns `(icon_char, label, Style)` for the given panel phase.
pub fn phase_indicator(phase: PanelPhase) -> (&'static str, &'static str, Style) {
    match phase {
        PanelPhase::Closed => ("○", "Closed", text_muted()),
        PanelPhase::Opening => (
            "◐",
            "Opening",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        ),
        PanelPhase::Open => (
            "●",
            "Open",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        PanelPhase::Closing => ("◑", "Closing", Style::default().fg(palette::STATUS_BLUE)),
    }
}
