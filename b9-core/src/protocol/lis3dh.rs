//! LIS3DH Beschleunigungssensor als Tap-Sensor
//!
//! Konfiguration: 400 Hz, alle Achsen, ±4 g, Double-Click auf X/Y/Z.
//! Das Interrupt-Bit in CLICK_SRC ist nicht latchend.

use crate::config::{TAP_SENSOR_FALLBACK_ADDRESS, TAP_SENSOR_PRIMARY_ADDRESS, TAP_THRESHOLD};
use crate::logic::probe_with_fallback;
use crate::traits::SensorError;

/// Register-Adressen (Auszug)
pub mod reg {
    pub const WHO_AM_I: u8 = 0x0F;
    pub const CTRL_REG1: u8 = 0x20;
    pub const CTRL_REG3: u8 = 0x22;
    pub const CTRL_REG4: u8 = 0x23;
    pub const CLICK_CFG: u8 = 0x38;
    pub const CLICK_SRC: u8 = 0x39;
    pub const CLICK_THS: u8 = 0x3A;
    pub const TIME_LIMIT: u8 = 0x3B;
    pub const TIME_LATENCY: u8 = 0x3C;
    pub const TIME_WINDOW: u8 = 0x3D;
}

/// Erwarteter Inhalt von WHO_AM_I
pub const DEVICE_ID: u8 = 0x33;

const CLICK_SRC_DCLICK: u8 = 0x20;
const CLICK_SRC_IA: u8 = 0x40;

/// Register-Schreibfolge für Double-Tap-Erkennung
pub fn init_sequence(threshold: u8) -> [(u8, u8); 8] {
    [
        // 400 Hz, Normal Mode, X/Y/Z an
        (reg::CTRL_REG1, 0x77),
        // Block Data Update, ±4 g, High Resolution
        (reg::CTRL_REG4, 0x98),
        // Click-Interrupt auf INT1
        (reg::CTRL_REG3, 0x80),
        // Double-Click auf allen Achsen
        (reg::CLICK_CFG, 0x2A),
        (reg::CLICK_THS, threshold & 0x7F),
        (reg::TIME_LIMIT, 10),
        (reg::TIME_LATENCY, 20),
        (reg::TIME_WINDOW, 255),
    ]
}

/// Double-Tap im CLICK_SRC-Wert
pub fn is_double_tap(click_src: u8) -> bool {
    click_src & CLICK_SRC_IA != 0 && click_src & CLICK_SRC_DCLICK != 0
}

/// Register-Zugriff auf einen I2C-Bus
pub trait RegisterBus {
    fn write_reg(&mut self, address: u8, reg: u8, value: u8) -> Result<(), SensorError>;
    fn read_reg(&mut self, address: u8, reg: u8) -> Result<u8, SensorError>;
}

/// Prüft die Geräte-ID unter `address` und schreibt die Tap-Konfiguration
pub fn configure<B: RegisterBus>(bus: &mut B, address: u8) -> Result<(), SensorError> {
    if bus.read_reg(address, reg::WHO_AM_I)? != DEVICE_ID {
        return Err(SensorError::NotFound);
    }
    for (register, value) in init_sequence(TAP_THRESHOLD) {
        bus.write_reg(address, register, value)?;
    }
    Ok(())
}

/// Sucht den Sensor unter der primären und danach der Ausweich-Adresse
///
/// Gibt die Adresse zurück, unter der der Sensor konfiguriert wurde.
pub fn detect<B: RegisterBus>(bus: &mut B) -> Result<u8, SensorError> {
    probe_with_fallback(
        TAP_SENSOR_PRIMARY_ADDRESS,
        TAP_SENSOR_FALLBACK_ADDRESS,
        |address| configure(bus, address),
    )
}

/// Liest CLICK_SRC und wertet den Double-Tap aus
pub fn read_tap<B: RegisterBus>(bus: &mut B, address: u8) -> Result<bool, SensorError> {
    bus.read_reg(address, reg::CLICK_SRC).map(is_double_tap)
}
