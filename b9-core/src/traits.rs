//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** `EspRobotHardware`, `EmbassyClock`, `HardwareRandom` (b9-firmware)
//! - **Testing:** `MockHardware`, `MockClock`, `ScriptedRandom` (b9-tests)

use embassy_time::{Duration, Instant};

use crate::types::{ClipId, Color, StripId};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
    PixelOutOfRange,
}

/// Fehler-Typ für Audio-Wiedergabe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioError {
    /// Clip nicht im Katalog oder nicht auf dem Speicher
    ClipUnavailable,
    /// Kommunikation mit dem Audio-Modul fehlgeschlagen
    Bus,
}

/// Fehler-Typ für Sensor-Initialisierung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Kein (passendes) Gerät unter der Adresse
    NotFound,
    Bus,
}

/// Trait für SmartLED-Strips (WS2812/Neopixel)
///
/// Schreibt einen kompletten, bereits helligkeitsskalierten Frame.
pub trait SmartLedWriter {
    /// Schreibt alle Pixel des Strips
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, pixels: &[Color]) -> Result<(), LedError>;
}

/// Rohe Hardware-Fähigkeiten des Roboters
///
/// Absichtlich "dumm": Helligkeit, Duty-Umrechnung, Active-Low-Logik und
/// Spannungsberechnung passieren in [`crate::Facade`].
pub trait RobotHardware {
    /// Schreibt einen Frame auf den gewählten LED-Bus
    fn write_strip(&mut self, strip: StripId, frame: &[Color]) -> Result<(), LedError>;

    /// Setzt die drei PWM-Kanäle des Voice-Lights (16-Bit Duty)
    fn set_voice_duty(&mut self, duty: [u16; 3]);

    /// Double-Tap-Flag des Beschleunigungssensors (nicht latchend)
    fn tap_detected(&mut self) -> bool;

    /// Pegel des Paletten-Tasters (`true` = High, Pull-Up)
    fn button_level(&mut self) -> bool;

    /// Startet einen Clip, ersetzt eine laufende Wiedergabe
    fn play(&mut self, clip: ClipId) -> Result<(), AudioError>;

    fn is_playing(&mut self) -> bool;

    /// RMS-Pegel der aktuellen Wiedergabe (0.0 - 1.0)
    fn current_amplitude(&mut self) -> f32;

    /// Rohes 16-Bit-Sample des Batterie-Pins
    fn read_battery_raw(&mut self) -> u16;

    /// Schaltet die gemeinsame Versorgung von LEDs und Verstärker
    fn set_power_rail(&mut self, enabled: bool);
}

/// Monotone Uhr mit kooperativem Warten
///
/// `sleep` ist der einzige Suspend-Point des Controllers. Auf dem ESP32 ist
/// das ein Embassy-Timer, in Tests eine virtuelle Uhr ohne echte Wartezeit.
#[allow(async_fn_in_trait)]
pub trait Clock {
    fn now(&self) -> Instant;

    async fn sleep(&mut self, duration: Duration);
}

/// Zufallsquelle für Pixel-, Farb- und Clip-Auswahl
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Gleichverteilter Index in `[0, len)`
    ///
    /// Multiply-Shift statt Modulo: `(x * len) >> 32`. Für `len == 0` wird 0 geliefert.
    fn pick(&mut self, len: usize) -> usize {
        ((u64::from(self.next_u32()) * len as u64) >> 32) as usize
    }
}
