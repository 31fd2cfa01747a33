//! B9 Core - Platform-agnostic Logic, Traits und Zustandsautomaten
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Hardware wird über die Traits in [`traits`] angebunden:
//! ESP32-C6 im Firmware-Crate, Mocks in den Host-Tests.

#![no_std]

// Muss als erstes Modul stehen, damit die Log-Makros überall sichtbar sind
#[macro_use]
mod fmt;

pub mod animation;
pub mod config;
pub mod controller;
pub mod facade;
pub mod logic;
pub mod palette;
pub mod pixels;
pub mod power;
pub mod protocol;
pub mod traits;
pub mod types;
pub mod voice;

// Re-exports für einfachen Zugriff
pub use animation::{blinky_step, heartbeat_step};
pub use controller::RobotController;
pub use facade::Facade;
pub use logic::{
    channel_to_duty, color_wheel, duty_to_resolution, hue_position, probe_with_fallback,
    ramp_down_levels, ramp_up_levels, raw_to_voltage, scale_color, voice_flash_color,
};
pub use palette::PaletteStore;
pub use pixels::PixelBuffer;
pub use power::{PowerManager, PowerState};
pub use traits::{
    AudioError, Clock, LedError, RandomSource, RobotHardware, SensorError, SmartLedWriter,
};
pub use types::{
    ClipId, ClipSet, Color, CycleReport, PlaybackSession, PowerOutcome, PowerPhase, StripId,
    VoiceState,
};
pub use voice::VoiceTrigger;
pub use embassy_time::{Duration, Instant};
