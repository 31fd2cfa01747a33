// Firmware-Konfiguration: Pin-Zuordnung und Peripherie-Takte
//
// Verhaltens-Parameter (Wartezeiten, Schwellen, Timeouts) liegen in
// `b9_core::config`, hier steht nur was an der Platine hängt.
// Die Pin-Nummern dokumentieren die Verdrahtung, die Peripherals selbst
// werden in `bin/main.rs` typisiert zugeordnet.

use b9_core::config::{CHEST_PIXELS, HEARTBEAT_PIXELS};

// ============================================================================
// LED Strips (RMT)
// ============================================================================

/// GPIO-Pin für das Brust-Panel (12× WS2812, GRB)
pub const CHEST_GPIO_PIN: u8 = 18;

/// GPIO-Pin für die Heartbeat-LEDs (2× WS2812, GRB)
pub const HEARTBEAT_GPIO_PIN: u8 = 19;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// RMT-Puls-Buffer: 24 Bits pro LED + 1 Reset
pub const fn rmt_buffer_size(leds: usize) -> usize {
    leds * 24 + 1
}

/// Buffer-Größen der beiden Strips (müssen zu `smart_led_buffer!` passen)
pub const CHEST_BUFFER_SIZE: usize = rmt_buffer_size(CHEST_PIXELS);
pub const HEARTBEAT_BUFFER_SIZE: usize = rmt_buffer_size(HEARTBEAT_PIXELS);

// ============================================================================
// Voice-Light (LEDC PWM)
// ============================================================================

/// GPIO-Pins der RGB-Voice-LED (R, G, B)
pub const VOICE_GPIO_PINS: [u8; 3] = [20, 21, 22];

/// PWM-Frequenz in kHz
pub const VOICE_PWM_KHZ: u32 = 20;

/// PWM-Auflösung in Bit (bei 20 kHz aus 80 MHz APB maximal 11 Bit)
pub const VOICE_PWM_BITS: u32 = 10;

// ============================================================================
// Tap-Sensor (LIS3DH über I2C)
// ============================================================================

/// I2C-Pins (SDA, SCL)
pub const I2C_SDA_GPIO_PIN: u8 = 6;
pub const I2C_SCL_GPIO_PIN: u8 = 7;

/// I2C-Busfrequenz in kHz
pub const I2C_FREQUENCY_KHZ: u32 = 400;

// ============================================================================
// Audio-Modul (serieller MP3-Player)
// ============================================================================

/// UART1 Pins (TX zum Modul, RX vom Modul)
pub const AUDIO_TX_GPIO_PIN: u8 = 4;
pub const AUDIO_RX_GPIO_PIN: u8 = 5;

/// Baudrate des MP3-Moduls
pub const AUDIO_BAUDRATE: u32 = 9600;

/// BUSY-Ausgang des Moduls (Low = spielt)
pub const AUDIO_BUSY_GPIO_PIN: u8 = 11;

/// Lautstärke 0-30
pub const AUDIO_VOLUME: u8 = 25;

/// Nach einem Play-Kommando braucht BUSY bis zu ~100 ms bis es auf Low geht.
/// So lange gilt der Clip als laufend.
pub const AUDIO_BUSY_SETTLE_MS: u64 = 200;

// ============================================================================
// ADC
// ============================================================================

/// Batterie-Spannungsteiler
pub const BATTERY_GPIO_PIN: u8 = 2;

/// Hüllkurve des Verstärker-Ausgangs (Lautstärke)
pub const ENVELOPE_GPIO_PIN: u8 = 3;

/// Vollausschlag des 12-Bit ADC
pub const ADC_MAX: u16 = 4095;

/// Verschiebung 12 Bit → 16 Bit Sample-Breite
pub const ADC_TO_U16_SHIFT: u32 = 4;

// ============================================================================
// Power & Taster
// ============================================================================

/// Power-Enable für LEDs und Verstärker (High = an)
pub const POWER_ENABLE_GPIO_PIN: u8 = 23;

/// Paletten-Taster (Pull-Up, gedrückt = Low)
pub const BUTTON_GPIO_PIN: u8 = 9;
