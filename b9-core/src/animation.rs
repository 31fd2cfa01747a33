//! Animation Engine
//!
//! Zwei nicht-blockierende Blink-Animationen. Jede Wartezeit ist ein
//! `Clock::sleep().await`, der Orchestrator bleibt damit kooperativ.

use embassy_time::Duration;

use crate::config::{CHEST_PIXELS, HEARTBEAT_PIXELS, HEARTBEAT_REPEATS};
use crate::facade::Facade;
use crate::logic::{ramp_down_levels, ramp_up_levels};
use crate::palette;
use crate::traits::{Clock, RandomSource, RobotHardware};
use crate::types::{BLACK, Color, StripId};

/// Lässt zufällige Pixel im Brust-Panel auf- und abblenden
///
/// `repeat_count` mal: zufällige Farbe aus der aktiven Brust-Palette,
/// zufälliges Pixel in `[0, 12)`, 4 Stufen hoch (0.2 - 0.8) und 5 Stufen
/// runter (1.0 - 0.2). Nach jedem Rendern wird `wait` gewartet.
///
/// Ein bereits leuchtendes Pixel kann erneut gewählt werden (kein De-Dup).
pub async fn blinky_step<H, C, R>(
    io: &mut Facade<H>,
    clock: &mut C,
    rng: &mut R,
    wait: Duration,
    repeat_count: usize,
    palette_index: usize,
) where
    H: RobotHardware,
    C: Clock,
    R: RandomSource,
{
    let colors = palette::chest_colors(palette_index);
    for _ in 0..repeat_count {
        let color = colors[rng.pick(colors.len())];
        let pixel = rng.pick(CHEST_PIXELS);
        blink_pixel(io, clock, StripId::Chest, pixel, color, wait).await;
    }
}

/// Heartbeat: gleiche Rampe, genau 2 Wiederholungen auf einem der 2 Pixel
pub async fn heartbeat_step<H, C, R>(
    io: &mut Facade<H>,
    clock: &mut C,
    rng: &mut R,
    wait: Duration,
    palette_index: usize,
) where
    H: RobotHardware,
    C: Clock,
    R: RandomSource,
{
    let color = palette::heartbeat_color(palette_index);
    for _ in 0..HEARTBEAT_REPEATS {
        let pixel = rng.pick(HEARTBEAT_PIXELS);
        blink_pixel(io, clock, StripId::Heartbeat, pixel, color, wait).await;
    }
}

async fn blink_pixel<H: RobotHardware, C: Clock>(
    io: &mut Facade<H>,
    clock: &mut C,
    strip: StripId,
    pixel: usize,
    color: Color,
    wait: Duration,
) {
    if let Err(e) = io.set_pixel(strip, pixel, color) {
        warn!("Animation: Pixel {} auf {} nicht setzbar: {}", pixel, strip, e);
        return;
    }

    for level in ramp_up_levels() {
        io.set_brightness(strip, level);
        render(io, strip);
        clock.sleep(wait).await;
    }

    // Beim Abblenden wird das Pixel schon in der ersten Stufe schwarz
    for level in ramp_down_levels() {
        io.set_brightness(strip, level);
        if let Err(e) = io.set_pixel(strip, pixel, BLACK) {
            warn!("Animation: Pixel {} auf {} nicht löschbar: {}", pixel, strip, e);
        }
        render(io, strip);
        clock.sleep(wait).await;
    }
}

fn render<H: RobotHardware>(io: &mut Facade<H>, strip: StripId) {
    if let Err(e) = io.show_strip(strip) {
        warn!("Animation: Rendern von {} fehlgeschlagen: {}", strip, e);
    }
}
