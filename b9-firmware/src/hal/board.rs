// ESP32-C6 Board: bündelt alle Peripherie hinter `RobotHardware`

use b9_core::{AudioError, ClipId, Color, LedError, RobotHardware, SmartLedWriter, StripId};
use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcPin};
use esp_hal::gpio::{Input, Level, Output};
use esp_hal::peripherals::{ADC1, GPIO2, GPIO3};

use crate::config::{ADC_MAX, ADC_TO_U16_SHIFT, CHEST_BUFFER_SIZE, HEARTBEAT_BUFFER_SIZE};
use crate::hal::{AudioPlayer, RmtLedWriter, TapSensor, VoiceLight};

/// ADC1 mit Batterie- und Hüllkurven-Pin
pub struct AnalogInputs<'a> {
    pub adc: Adc<'a, ADC1<'a>, Blocking>,
    pub battery: AdcPin<GPIO2<'a>, ADC1<'a>>,
    pub envelope: AdcPin<GPIO3<'a>, ADC1<'a>>,
}

pub struct EspRobotHardware<'a> {
    chest: RmtLedWriter<'a, CHEST_BUFFER_SIZE>,
    heartbeat: RmtLedWriter<'a, HEARTBEAT_BUFFER_SIZE>,
    voice_light: VoiceLight,
    tap: TapSensor<'a>,
    audio: AudioPlayer<'a>,
    analog: AnalogInputs<'a>,
    button: Input<'a>,
    power_enable: Output<'a>,
}

impl<'a> EspRobotHardware<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        chest: RmtLedWriter<'a, CHEST_BUFFER_SIZE>,
        heartbeat: RmtLedWriter<'a, HEARTBEAT_BUFFER_SIZE>,
        voice_light: VoiceLight,
        tap: TapSensor<'a>,
        audio: AudioPlayer<'a>,
        analog: AnalogInputs<'a>,
        button: Input<'a>,
        power_enable: Output<'a>,
    ) -> Self {
        Self {
            chest,
            heartbeat,
            voice_light,
            tap,
            audio,
            analog,
            button,
            power_enable,
        }
    }
}

impl RobotHardware for EspRobotHardware<'_> {
    fn write_strip(&mut self, strip: StripId, frame: &[Color]) -> Result<(), LedError> {
        match strip {
            StripId::Chest => self.chest.write(frame),
            StripId::Heartbeat => self.heartbeat.write(frame),
        }
    }

    fn set_voice_duty(&mut self, duty: [u16; 3]) {
        self.voice_light.set(duty);
    }

    fn tap_detected(&mut self) -> bool {
        self.tap.tapped()
    }

    fn button_level(&mut self) -> bool {
        self.button.is_high()
    }

    fn play(&mut self, clip: ClipId) -> Result<(), AudioError> {
        self.audio.play(clip)
    }

    fn is_playing(&mut self) -> bool {
        self.audio.is_playing()
    }

    fn current_amplitude(&mut self) -> f32 {
        let raw = self.analog.adc.read_blocking(&mut self.analog.envelope);
        f32::from(raw.min(ADC_MAX)) / f32::from(ADC_MAX)
    }

    fn read_battery_raw(&mut self) -> u16 {
        let raw = self.analog.adc.read_blocking(&mut self.analog.battery);
        raw.min(ADC_MAX) << ADC_TO_U16_SHIFT
    }

    fn set_power_rail(&mut self, enabled: bool) {
        self.power_enable.set_level(Level::from(enabled));
    }
}
