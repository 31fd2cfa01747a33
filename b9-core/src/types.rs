//! Core Types für den B9-Controller
//!
//! Datenstrukturen ohne Hardware-Dependencies

use embassy_time::Instant;
use rgb::RGB8;

/// Farbe als 8-Bit-RGB-Tripel
pub type Color = RGB8;

// ============================================================================
// Farben
// ============================================================================

/// "Aus" - wird zum Löschen einzelner Pixel genutzt
pub const BLACK: Color = RGB8 { r: 0, g: 0, b: 0 };
pub const RED: Color = RGB8 { r: 255, g: 0, b: 0 };
pub const ORANGE: Color = RGB8 { r: 255, g: 140, b: 0 };
pub const YELLOW: Color = RGB8 { r: 255, g: 150, b: 0 };
pub const GREEN: Color = RGB8 { r: 0, g: 255, b: 0 };
pub const CYAN: Color = RGB8 { r: 0, g: 255, b: 255 };
pub const BLUE: Color = RGB8 { r: 0, g: 0, b: 255 };
pub const PURPLE: Color = RGB8 { r: 180, g: 0, b: 255 };
pub const PINK: Color = RGB8 { r: 255, g: 0, b: 213 };
pub const WHITE: Color = RGB8 { r: 255, g: 255, b: 255 };

// ============================================================================
// LED Strips
// ============================================================================

/// Die beiden adressierbaren LED-Busse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripId {
    /// 12 Blink-LEDs im unteren Brust-Panel
    Chest,
    /// 2 "Heartbeat"-LEDs oben im Brust-Panel
    Heartbeat,
}

// ============================================================================
// Audio Clips
// ============================================================================

/// Sprach-Clips des B9 (Reihenfolge = Track-Nummer - 1)
pub const VOICE_CLIPS: [&str; 12] = [
    "affirmitive.mp3",
    "common.mp3",
    "danger3.mp3",
    "doesnotcompute.mp3",
    "icomputeyouwell.mp3",
    "ihaveonlyou.mp3",
    "important.mp3",
    "nofear.mp3",
    "primedirective.mp3",
    "thank_you.mp3",
    "wastingtime.mp3",
    "watch_it.mp3",
];

/// Warn-Clips für den Crisis-Modus, werden nacheinander abgespielt
pub const POWER_CLIPS: [&str; 2] = ["alarm.mp3", "energy_gone.mp3"];

/// Clip-Gruppe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClipSet {
    Voice,
    Power,
}

/// Referenz auf einen Clip im festen Asset-Katalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClipId {
    pub set: ClipSet,
    pub index: u8,
}

impl ClipId {
    pub const fn voice(index: u8) -> Self {
        Self {
            set: ClipSet::Voice,
            index,
        }
    }

    pub const fn power(index: u8) -> Self {
        Self {
            set: ClipSet::Power,
            index,
        }
    }

    /// Dateiname des Clips, `None` wenn der Index außerhalb des Katalogs liegt
    pub fn file_name(&self) -> Option<&'static str> {
        let catalog: &[&'static str] = match self.set {
            ClipSet::Voice => &VOICE_CLIPS,
            ClipSet::Power => &POWER_CLIPS,
        };
        catalog.get(self.index as usize).copied()
    }
}

/// Aktive Wiedergabe (höchstens eine gleichzeitig)
///
/// Existiert genau so lange, wie der Player `is_playing() == true` meldet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlaybackSession {
    pub clip: ClipId,
    pub started_at: Instant,
}

// ============================================================================
// Zustandsautomaten
// ============================================================================

/// Zustand des Voice Triggers: Idle → Triggered → Playing → Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VoiceState {
    Idle,
    /// Tap bestätigt, Clip wird gerade ausgewählt
    Triggered,
    Playing,
}

/// Phase des Power Managers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerPhase {
    Active,
    /// 120 s Leerlauf-Timer läuft
    IdleTimeout,
    /// Rail aus, Batterie ausreichend
    RailOff,
    /// Warn-Clips laufen
    CrisisAlert,
    /// 600 s Schlaf nach der Warnung
    LongSleep,
}

/// Ergebnis eines Power-Checks
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerOutcome {
    /// Audio lief noch, Check auf den nächsten Zyklus verschoben
    Deferred,
    /// Rail abgeschaltet, Spannung über der Schwelle
    RailOff { voltage: f32 },
    /// Crisis-Sequenz wurde komplett durchlaufen
    Crisis { voltage: f32 },
}

/// Zusammenfassung eines Hauptzyklus
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Per Tap gestarteter Clip (falls vorhanden)
    pub clip: Option<ClipId>,
    pub palette_advanced: bool,
    pub power: PowerOutcome,
}
