// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use b9_robot::config::{
    AUDIO_BUSY_GPIO_PIN, BUTTON_GPIO_PIN, CHEST_GPIO_PIN, HEARTBEAT_GPIO_PIN,
    POWER_ENABLE_GPIO_PIN,
};
use b9_robot::tasks::{RobotPeripherals, robot_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt den Robot-Task.
/// Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    defmt::info!(
        "B9: Brust GPIO{}, Heartbeat GPIO{}, Taster GPIO{}, Power GPIO{}, BUSY GPIO{}",
        CHEST_GPIO_PIN,
        HEARTBEAT_GPIO_PIN,
        BUTTON_GPIO_PIN,
        POWER_ENABLE_GPIO_PIN,
        AUDIO_BUSY_GPIO_PIN
    );

    let robot = RobotPeripherals {
        rmt: peripherals.RMT,
        chest_pin: peripherals.GPIO18,
        heartbeat_pin: peripherals.GPIO19,
        ledc: peripherals.LEDC,
        voice_red: peripherals.GPIO20,
        voice_green: peripherals.GPIO21,
        voice_blue: peripherals.GPIO22,
        i2c: peripherals.I2C0,
        sda: peripherals.GPIO6,
        scl: peripherals.GPIO7,
        uart: peripherals.UART1,
        audio_tx: peripherals.GPIO4,
        audio_rx: peripherals.GPIO5,
        audio_busy: peripherals.GPIO11,
        adc: peripherals.ADC1,
        battery: peripherals.GPIO2,
        envelope: peripherals.GPIO3,
        power_enable: peripherals.GPIO23,
        button: peripherals.GPIO9,
    };

    // Spawn Robot Task
    spawner.spawn(robot_task(robot)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
