// Voice-Light: RGB-LED an drei LEDC-Kanälen (Low Speed, 20 kHz)
//
// Die Facade liefert 16-Bit Duty-Werte, LEDC arbeitet mit `VOICE_PWM_BITS`.

use b9_core::duty_to_resolution;
use esp_hal::gpio::DriveMode;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::ledc::channel::{self, Channel, ChannelHW, ChannelIFace};
use esp_hal::ledc::timer::{self, Timer, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;
use static_cell::StaticCell;

use crate::config::{VOICE_PWM_BITS, VOICE_PWM_KHZ};

/// Fehler bei der LEDC-Konfiguration
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum VoiceLightError {
    Timer,
    Channel,
}

/// Die Kanäle referenzieren den Timer, beide müssen 'static sein
static LEDC: StaticCell<Ledc<'static>> = StaticCell::new();
static TIMER: StaticCell<Timer<'static, LowSpeed>> = StaticCell::new();

/// Drei PWM-Kanäle (R, G, B) an einem gemeinsamen Timer
pub struct VoiceLight {
    channels: [Channel<'static, LowSpeed>; 3],
}

impl VoiceLight {
    /// Konfiguriert Timer 0 und Kanal 0-2, alle Kanäle starten mit Duty 0
    ///
    /// Darf nur einmal aufgerufen werden (StaticCell).
    pub fn new(
        ledc: esp_hal::peripherals::LEDC<'static>,
        red: impl PeripheralOutput<'static>,
        green: impl PeripheralOutput<'static>,
        blue: impl PeripheralOutput<'static>,
    ) -> Result<Self, VoiceLightError> {
        let mut ledc = Ledc::new(ledc);
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
        let ledc = LEDC.init(ledc);

        let timer = TIMER.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));
        timer
            .configure(timer::config::Config {
                duty: timer::config::Duty::Duty10Bit,
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_khz(VOICE_PWM_KHZ),
            })
            .map_err(|_| VoiceLightError::Timer)?;
        let timer: &'static Timer<'static, LowSpeed> = timer;

        let mut channels = [
            ledc.channel(channel::Number::Channel0, red),
            ledc.channel(channel::Number::Channel1, green),
            ledc.channel(channel::Number::Channel2, blue),
        ];
        for ch in channels.iter_mut() {
            ch.configure(channel::config::Config {
                timer,
                duty_pct: 0,
                drive_mode: DriveMode::PushPull,
            })
            .map_err(|_| VoiceLightError::Channel)?;
        }

        Ok(Self { channels })
    }

    /// Setzt alle drei Kanäle (16-Bit Duty pro Kanal)
    pub fn set(&mut self, duty: [u16; 3]) {
        for (ch, d) in self.channels.iter_mut().zip(duty) {
            ch.set_duty_hw(duty_to_resolution(d, VOICE_PWM_BITS));
        }
    }
}
