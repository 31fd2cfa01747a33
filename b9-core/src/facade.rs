//! Peripheral Facade
//!
//! Setzt die Capability-Schnittstelle des Controllers (Pixel, Helligkeit,
//! Voice-Light, Sensoren, Audio, Batterie, Power-Rail) auf den rohen
//! [`RobotHardware`]-Trait um.

use embassy_time::Instant;

use crate::config::{
    CHEST_INITIAL_BRIGHTNESS, CHEST_PIXELS, HEARTBEAT_INITIAL_BRIGHTNESS, HEARTBEAT_PIXELS,
};
use crate::logic::{channel_to_duty, raw_to_voltage};
use crate::pixels::PixelBuffer;
use crate::traits::{AudioError, LedError, RobotHardware};
use crate::types::{ClipId, Color, PlaybackSession, StripId};

/// Besitzt die Hardware, beide Pixel-Buffer und die laufende Wiedergabe
pub struct Facade<H: RobotHardware> {
    hardware: H,
    chest: PixelBuffer<CHEST_PIXELS>,
    heartbeat: PixelBuffer<HEARTBEAT_PIXELS>,
    session: Option<PlaybackSession>,
}

impl<H: RobotHardware> Facade<H> {
    /// Buffer starten schwarz mit der Einschalt-Helligkeit
    pub fn new(hardware: H) -> Self {
        Self {
            hardware,
            chest: PixelBuffer::new(CHEST_INITIAL_BRIGHTNESS),
            heartbeat: PixelBuffer::new(HEARTBEAT_INITIAL_BRIGHTNESS),
            session: None,
        }
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hardware
    }

    // ------------------------------------------------------------------------
    // LED Strips
    // ------------------------------------------------------------------------

    pub fn set_pixel(&mut self, strip: StripId, index: usize, color: Color) -> Result<(), LedError> {
        match strip {
            StripId::Chest => self.chest.set(index, color),
            StripId::Heartbeat => self.heartbeat.set(index, color),
        }
    }

    pub fn pixel(&self, strip: StripId, index: usize) -> Option<Color> {
        match strip {
            StripId::Chest => self.chest.get(index),
            StripId::Heartbeat => self.heartbeat.get(index),
        }
    }

    pub fn fill_strip(&mut self, strip: StripId, color: Color) {
        match strip {
            StripId::Chest => self.chest.fill(color),
            StripId::Heartbeat => self.heartbeat.fill(color),
        }
    }

    pub fn set_brightness(&mut self, strip: StripId, brightness: f32) {
        match strip {
            StripId::Chest => self.chest.set_brightness(brightness),
            StripId::Heartbeat => self.heartbeat.set_brightness(brightness),
        }
    }

    pub fn brightness(&self, strip: StripId) -> f32 {
        match strip {
            StripId::Chest => self.chest.brightness(),
            StripId::Heartbeat => self.heartbeat.brightness(),
        }
    }

    /// Rendert den Buffer (mit Helligkeit) auf den LED-Bus
    pub fn show_strip(&mut self, strip: StripId) -> Result<(), LedError> {
        match strip {
            StripId::Chest => self.hardware.write_strip(strip, &self.chest.frame()),
            StripId::Heartbeat => self.hardware.write_strip(strip, &self.heartbeat.frame()),
        }
    }

    // ------------------------------------------------------------------------
    // Voice Light & Eingänge
    // ------------------------------------------------------------------------

    /// Jeder 8-Bit-Kanal wird auf den 16-Bit-Duty-Bereich skaliert
    pub fn set_voice_light(&mut self, color: Color) {
        self.hardware.set_voice_duty([
            channel_to_duty(color.r),
            channel_to_duty(color.g),
            channel_to_duty(color.b),
        ]);
    }

    pub fn tap_detected(&mut self) -> bool {
        self.hardware.tap_detected()
    }

    /// Taster ist Active-Low (Pull-Up): gedrückt = Pegel Low
    pub fn button_pressed(&mut self) -> bool {
        !self.hardware.button_level()
    }

    // ------------------------------------------------------------------------
    // Audio
    // ------------------------------------------------------------------------

    /// Startet einen Clip und ersetzt eine eventuell laufende Session
    pub fn play(&mut self, clip: ClipId, now: Instant) -> Result<(), AudioError> {
        if clip.file_name().is_none() {
            return Err(AudioError::ClipUnavailable);
        }
        self.hardware.play(clip)?;
        self.session = Some(PlaybackSession {
            clip,
            started_at: now,
        });
        Ok(())
    }

    /// Beendet die Session, sobald der Player nicht mehr spielt
    pub fn is_playing(&mut self) -> bool {
        let playing = self.hardware.is_playing();
        if !playing {
            self.session = None;
        }
        playing
    }

    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    pub fn current_amplitude(&mut self) -> f32 {
        self.hardware.current_amplitude()
    }

    // ------------------------------------------------------------------------
    // Power
    // ------------------------------------------------------------------------

    pub fn read_battery_voltage(&mut self) -> f32 {
        raw_to_voltage(self.hardware.read_battery_raw())
    }

    pub fn set_power_rail(&mut self, enabled: bool) {
        self.hardware.set_power_rail(enabled);
    }
}
