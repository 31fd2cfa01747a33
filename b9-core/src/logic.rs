//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::config::{
    ADC_FULL_SCALE, ADC_REFERENCE_VOLTS, BATTERY_DIVIDER, RAMP_DIVISIONS, RAMP_DOWN_STEPS,
    RAMP_UP_STEPS,
};
use crate::types::Color;

/// Rechnet ein rohes 16-Bit-ADC-Sample in die echte Batteriespannung um
///
/// `voltage = raw * 3.3 / 65536 * 2` (Referenz 3.3 V, Spannungsteiler 1:2)
///
/// # Beispiele
///
/// ```
/// # use b9_core::raw_to_voltage;
/// let volts = raw_to_voltage(32768); // halber Messbereich
/// assert!((volts - 3.3).abs() < 1e-4);
/// ```
pub fn raw_to_voltage(raw: u16) -> f32 {
    f32::from(raw) * ADC_REFERENCE_VOLTS / ADC_FULL_SCALE * BATTERY_DIVIDER
}

/// Helligkeit der Stufe `step` (`step / 5`, auf [0, 1] begrenzt)
pub fn brightness_level(step: u8) -> f32 {
    (f32::from(step) / RAMP_DIVISIONS).clamp(0.0, 1.0)
}

/// Aufhellen: 0.2, 0.4, 0.6, 0.8
pub fn ramp_up_levels() -> impl Iterator<Item = f32> {
    (1..=RAMP_UP_STEPS).map(brightness_level)
}

/// Abdunkeln: 1.0, 0.8, 0.6, 0.4, 0.2
pub fn ramp_down_levels() -> impl Iterator<Item = f32> {
    (1..=RAMP_DOWN_STEPS).rev().map(brightness_level)
}

/// Skaliert eine Farbe mit der Strip-Helligkeit (abgeschnitten, nicht gerundet)
pub fn scale_color(color: Color, brightness: f32) -> Color {
    let b = brightness.clamp(0.0, 1.0);
    let scale = |c: u8| (f32::from(c) * b) as u8;
    Color {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// 8-Bit-Kanal → 16-Bit-PWM-Duty (`c * 65536 / 256`)
pub fn channel_to_duty(channel: u8) -> u16 {
    // 255 * 256 = 65280 passt in u16
    (u32::from(channel) * 65536 / 256) as u16
}

/// 16-Bit-Duty → Duty mit `bits` Bit Auflösung (1..=16)
pub fn duty_to_resolution(duty: u16, bits: u32) -> u32 {
    u32::from(duty) >> (16 - bits.clamp(1, 16))
}

/// Klassisches Farbrad: Position 0-255 läuft Rot → Grün → Blau → Rot
pub fn color_wheel(pos: u8) -> Color {
    let pos = pos as u16;
    if pos < 85 {
        Color {
            r: (255 - pos * 3) as u8,
            g: (pos * 3) as u8,
            b: 0,
        }
    } else if pos < 170 {
        let pos = pos - 85;
        Color {
            r: 0,
            g: (255 - pos * 3) as u8,
            b: (pos * 3) as u8,
        }
    } else {
        let pos = pos - 170;
        Color {
            r: (pos * 3) as u8,
            g: 0,
            b: (255 - pos * 3) as u8,
        }
    }
}

/// Position einer Farbe auf dem Farbrad, abgeleitet aus dem HSV-Farbton
///
/// Unbunte Farben (Weiß, Grau, Schwarz) landen auf Position 0.
pub fn hue_position(color: Color) -> u8 {
    let (r, g, b) = (i32::from(color.r), i32::from(color.g), i32::from(color.b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta == 0 {
        return 0;
    }

    let hue = if max == r {
        60 * (g - b) / delta
    } else if max == g {
        60 * (b - r) / delta + 120
    } else {
        60 * (r - g) / delta + 240
    };

    (hue.rem_euclid(360) * 255 / 360) as u8
}

/// Farbe des Voice-Lights für eine Paletten-Farbe
pub fn voice_flash_color(palette_color: Color) -> Color {
    color_wheel(hue_position(palette_color))
}

/// Initialisiert ein Gerät unter `primary`, bei Fehler unter `fallback`
///
/// Der Fehler der primären Adresse wird verworfen; nur wenn auch die
/// Ausweich-Adresse scheitert, kommt deren Fehler zurück.
/// Liefert die Adresse, unter der das Gerät geantwortet hat.
pub fn probe_with_fallback<E>(
    primary: u8,
    fallback: u8,
    mut init: impl FnMut(u8) -> Result<(), E>,
) -> Result<u8, E> {
    match init(primary) {
        Ok(()) => Ok(primary),
        Err(_) => init(fallback).map(|()| fallback),
    }
}
