// Robot Task - Hardware-Initialisierung und Hauptschleife des B9
use b9_core::{Clock, RandomSource, RobotController, RobotHardware};
use defmt::{error, info};
use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, Attenuation};
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::peripherals::{
    ADC1, GPIO2, GPIO3, GPIO4, GPIO5, GPIO6, GPIO7, GPIO9, GPIO11, GPIO18, GPIO19, GPIO20, GPIO21,
    GPIO22, GPIO23, I2C0, LEDC, RMT, UART1,
};
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal::uart::{Config as UartConfig, Uart};
use esp_hal_smartled::{SmartLedsAdapter, smart_led_buffer};

use b9_core::config::{CHEST_PIXELS, HEARTBEAT_PIXELS};

use crate::config::{AUDIO_BAUDRATE, I2C_FREQUENCY_KHZ, RMT_CLOCK_MHZ};
use crate::hal::{
    AnalogInputs, AudioPlayer, EmbassyClock, EspRobotHardware, HardwareRandom, RmtLedWriter,
    TapSensor, VoiceLight,
};

/// Alle Peripherals, die der Roboter belegt (Zuordnung siehe `config.rs`)
pub struct RobotPeripherals {
    pub rmt: RMT<'static>,
    pub chest_pin: GPIO18<'static>,
    pub heartbeat_pin: GPIO19<'static>,
    pub ledc: LEDC<'static>,
    pub voice_red: GPIO20<'static>,
    pub voice_green: GPIO21<'static>,
    pub voice_blue: GPIO22<'static>,
    pub i2c: I2C0<'static>,
    pub sda: GPIO6<'static>,
    pub scl: GPIO7<'static>,
    pub uart: UART1<'static>,
    pub audio_tx: GPIO4<'static>,
    pub audio_rx: GPIO5<'static>,
    pub audio_busy: GPIO11<'static>,
    pub adc: ADC1<'static>,
    pub battery: GPIO2<'static>,
    pub envelope: GPIO3<'static>,
    pub power_enable: GPIO23<'static>,
    pub button: GPIO9<'static>,
}

/// Robot Logic - Testbare Hauptschleife ohne Hardware-Abhängigkeit
///
/// Die generischen Parameter erlauben echte Hardware (`EspRobotHardware`,
/// `EmbassyClock`, `HardwareRandom`) oder Mocks. Kehrt nie zurück.
pub async fn robot_logic<H, C, R>(mut controller: RobotController<H, C, R>) -> !
where
    H: RobotHardware,
    C: Clock,
    R: RandomSource,
{
    controller.start();
    controller.run().await
}

/// Robot Task - Embassy Task für den B9-Controller
///
/// Übernimmt die Hardware-Initialisierung und ruft dann `robot_logic()` auf.
#[embassy_executor::task]
pub async fn robot_task(p: RobotPeripherals) {
    // Puls-Buffer für beide Strips, leben so lange wie der Task
    let mut chest_buffer = smart_led_buffer!(CHEST_PIXELS);
    let mut heartbeat_buffer = smart_led_buffer!(HEARTBEAT_PIXELS);

    // Init-Fehler sind fatal (Panic → esp-backtrace), nur der Tap-Sensor
    // hat eine Ausweich-Adresse
    // RMT: Kanal 0 = Brust, Kanal 1 = Heartbeat
    let rmt: Rmt<'static, Blocking> =
        Rmt::new(p.rmt, Rate::from_mhz(RMT_CLOCK_MHZ)).expect("RMT Init fehlgeschlagen");
    let chest = RmtLedWriter::new(SmartLedsAdapter::new(
        rmt.channel0,
        p.chest_pin,
        &mut chest_buffer,
    ));
    let heartbeat = RmtLedWriter::new(SmartLedsAdapter::new(
        rmt.channel1,
        p.heartbeat_pin,
        &mut heartbeat_buffer,
    ));

    let voice_light = VoiceLight::new(p.ledc, p.voice_red, p.voice_green, p.voice_blue)
        .expect("LEDC Init fehlgeschlagen");

    let i2c = I2c::new(
        p.i2c,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ)),
    )
    .expect("I2C Init fehlgeschlagen")
    .with_sda(p.sda)
    .with_scl(p.scl);
    let tap = match TapSensor::new(i2c) {
        Ok(tap) => tap,
        Err(e) => {
            error!("Tap-Sensor weder an 0x18 noch an 0x19: {}", e);
            panic!("Tap-Sensor nicht gefunden");
        }
    };

    let uart = Uart::new(p.uart, UartConfig::default().with_baudrate(AUDIO_BAUDRATE))
        .expect("UART Init fehlgeschlagen")
        .with_tx(p.audio_tx)
        .with_rx(p.audio_rx);
    let busy = Input::new(p.audio_busy, InputConfig::default().with_pull(Pull::Up));
    let audio = AudioPlayer::new(uart, busy);

    let mut adc_config = AdcConfig::new();
    let battery = adc_config.enable_pin(p.battery, Attenuation::_11dB);
    let envelope = adc_config.enable_pin(p.envelope, Attenuation::_11dB);
    let analog = AnalogInputs {
        adc: Adc::new(p.adc, adc_config),
        battery,
        envelope,
    };

    let button = Input::new(p.button, InputConfig::default().with_pull(Pull::Up));
    let power_enable = Output::new(p.power_enable, Level::High, OutputConfig::default());

    let hardware = EspRobotHardware::new(
        chest,
        heartbeat,
        voice_light,
        tap,
        audio,
        analog,
        button,
        power_enable,
    );

    info!("Robot: Hardware bereit");

    // Business Logic aufrufen (testbar über b9-core)
    let controller = RobotController::new(hardware, EmbassyClock, HardwareRandom::default());
    robot_logic(controller).await
}
