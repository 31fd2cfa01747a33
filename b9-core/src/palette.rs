//! Farbpaletten für Brust-Panel, Heartbeat und Voice-Light
//!
//! Alle drei Familien werden über einen gemeinsamen Index (0-3) gewählt,
//! der per Taster weitergeschaltet wird.

use crate::config::PALETTE_COUNT;
use crate::types::{BLUE, CYAN, Color, GREEN, ORANGE, PINK, PURPLE, RED, WHITE, YELLOW};

/// Brust-Panel: jede Palette ist eine Farbliste, pro Blink wird zufällig gewählt
pub const CHEST_PALETTES: [&[Color]; PALETTE_COUNT] = [
    &[YELLOW, BLUE, GREEN, WHITE, RED],
    &[PURPLE, BLUE, CYAN, GREEN],
    &[RED, ORANGE, YELLOW, WHITE],
    &[RED, ORANGE, YELLOW, GREEN, BLUE],
];

/// Heartbeat: eine Farbe pro Palette
pub const HEARTBEAT_PALETTE: [Color; PALETTE_COUNT] = [WHITE, BLUE, ORANGE, PURPLE];

/// Voice-Light: eine Farbe pro Palette
pub const VOICE_PALETTE: [Color; PALETTE_COUNT] = [RED, CYAN, YELLOW, PINK];

pub fn chest_colors(index: usize) -> &'static [Color] {
    CHEST_PALETTES[index % PALETTE_COUNT]
}

pub fn heartbeat_color(index: usize) -> Color {
    HEARTBEAT_PALETTE[index % PALETTE_COUNT]
}

pub fn voice_color(index: usize) -> Color {
    VOICE_PALETTE[index % PALETTE_COUNT]
}

/// Aktueller Paletten-Index
///
/// Invariante: `index < PALETTE_COUNT`. Änderbar nur über `advance()`
/// (Taster) und `reset()` (Crisis-Modus).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PaletteStore {
    index: usize,
}

impl PaletteStore {
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Nächste Palette, 3 → 0
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % PALETTE_COUNT;
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn chest_colors(&self) -> &'static [Color] {
        chest_colors(self.index)
    }

    pub fn heartbeat_color(&self) -> Color {
        heartbeat_color(self.index)
    }

    pub fn voice_color(&self) -> Color {
        voice_color(self.index)
    }
}
