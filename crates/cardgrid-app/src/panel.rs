//! Inline panel controller state machine
//!
//! Tracks the lifecycle of the single inline panel:
//!
//! ```text
//! Closed ──activate──▶ Opening ──timer──▶ Open
//!    ▲                    │                 │
//!    │                    └──click──┐ ┌─────┘
//!    │                              ▼ ▼
//!    └──────────timer──────────── Closing
//! ```
//!
//! Every transition that waits on a timer gets a fresh generation number.
//! Timer completions carrying an older generation are stale and ignored.

use std::time::{Duration, Instant};

use cardgrid_core::CardId;
use serde::Serialize;

use crate::config::PanelSettings;

/// Lifecycle phase of the inline panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl PanelPhase {
    /// True while a panel element exists in the grid
    pub fn is_present(self) -> bool {
        !matches!(self, PanelPhase::Closed)
    }
}

/// Transition durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTiming {
    pub open: Duration,
    pub close: Duration,
    /// Pause after the collapse so the next expand does not overlap it
    pub settle: Duration,
}

impl PanelTiming {
    /// Total wait before a closing panel is removed
    pub fn close_delay(&self) -> Duration {
        self.close + self.settle
    }
}

impl Default for PanelTiming {
    fn default() -> Self {
        Self::from(&PanelSettings::default())
    }
}

impl From<&PanelSettings> for PanelTiming {
    fn from(settings: &PanelSettings) -> Self {
        Self {
            open: settings.open_duration(),
            close: settings.close_duration(),
            settle: settings.settle_duration(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanelController {
    phase: PanelPhase,
    anchor: Option<CardId>,
    started_at: Option<Instant>,
    generation: u64,
    pending_activation: Option<CardId>,
    timing: PanelTiming,
}

impl PanelController {
    pub fn new(timing: PanelTiming) -> Self {
        Self {
            phase: PanelPhase::Closed,
            anchor: None,
            started_at: None,
            generation: 0,
            pending_activation: None,
            timing,
        }
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Card the current panel belongs to
    pub fn anchor(&self) -> Option<CardId> {
        self.anchor
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn timing(&self) -> PanelTiming {
        self.timing
    }

    pub fn pending_activation(&self) -> Option<CardId> {
        self.pending_activation
    }

    /// Queue a card to open once the current close finishes
    pub fn set_pending_activation(&mut self, card: Option<CardId>) {
        self.pending_activation = card;
    }

    pub fn take_pending_activation(&mut self) -> Option<CardId> {
        self.pending_activation.take()
    }

    /// Closed → Opening. Returns the generation the open timer must carry.
    pub fn begin_open(&mut self, anchor: CardId, now: Instant) -> u64 {
        debug_assert_eq!(self.phase, PanelPhase::Closed);
        self.generation += 1;
        self.phase = PanelPhase::Opening;
        self.anchor = Some(anchor);
        self.started_at = Some(now);
        self.generation
    }

    /// Opening → Open when the matching open timer elapses
    pub fn finish_open(&mut self, generation: u64) -> bool {
        if self.phase == PanelPhase::Opening && generation == self.generation {
            self.phase = PanelPhase::Open;
            self.started_at = None;
            true
        } else {
            false
        }
    }

    /// Opening/Open → Closing. Returns the generation for the close timer,
    /// or `None` when there is nothing to close or a close is already running.
    pub fn begin_close(&mut self, now: Instant) -> Option<u64> {
        match self.phase {
            PanelPhase::Opening | PanelPhase::Open => {
                // A half-open panel collapses from its current height
                let progress = self.progress(now);
                let close = self.timing.close.as_secs_f32();
                let already_closed = Duration::from_secs_f32(close * (1.0 - progress));

                self.generation += 1;
                self.phase = PanelPhase::Closing;
                self.started_at = Some(now.checked_sub(already_closed).unwrap_or(now));
                Some(self.generation)
            }
            PanelPhase::Closing | PanelPhase::Closed => None,
        }
    }

    /// Closing → Closed when the matching close timer elapses
    pub fn finish_close(&mut self, generation: u64) -> bool {
        if self.phase == PanelPhase::Closing && generation == self.generation {
            self.phase = PanelPhase::Closed;
            self.anchor = None;
            self.started_at = None;
            true
        } else {
            false
        }
    }

    /// Visual expansion of the panel in `0.0..=1.0`.
    ///
    /// Drives both the drawn height and the fade of the panel.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed_fraction = |duration: Duration| -> f32 {
            let Some(started) = self.started_at else {
                return 1.0;
            };
            if duration.is_zero() {
                return 1.0;
            }
            let elapsed = now.saturating_duration_since(started).as_secs_f32();
            (elapsed / duration.as_secs_f32()).clamp(0.0, 1.0)
        };

        match self.phase {
            PanelPhase::Closed => 0.0,
            PanelPhase::Opening => elapsed_fraction(self.timing.open),
            PanelPhase::Open => 1.0,
            PanelPhase::Closing => 1.0 - elapsed_fraction(self.timing.close),
        }
    }
}

impl Default for PanelController {
    fn default() -> Self {
        Self::new(PanelTiming::default())
    }
}
