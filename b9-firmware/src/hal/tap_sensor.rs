// Tap-Sensor: LIS3DH an I2C0
//
// Register-Folge und Adress-Fallback kommen aus `b9_core::protocol::lis3dh`.

use b9_core::SensorError;
use b9_core::protocol::lis3dh::{RegisterBus, detect, read_tap};
use defmt::{info, warn};
use esp_hal::Blocking;
use esp_hal::i2c::master::I2c;

/// `RegisterBus` über den esp-hal I2C-Master
struct I2cBus<'a>(I2c<'a, Blocking>);

impl RegisterBus for I2cBus<'_> {
    fn write_reg(&mut self, address: u8, reg: u8, value: u8) -> Result<(), SensorError> {
        self.0
            .write(address, &[reg, value])
            .map_err(|_| SensorError::Bus)
    }

    fn read_reg(&mut self, address: u8, reg: u8) -> Result<u8, SensorError> {
        let mut buf = [0u8; 1];
        self.0
            .write_read(address, &[reg], &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(buf[0])
    }
}

/// LIS3DH an einem konfigurierten I2C-Bus
pub struct TapSensor<'a> {
    bus: I2cBus<'a>,
    address: u8,
}

impl<'a> TapSensor<'a> {
    /// Sucht und konfiguriert den Sensor (0x18, sonst 0x19)
    pub fn new(i2c: I2c<'a, Blocking>) -> Result<Self, SensorError> {
        let mut bus = I2cBus(i2c);
        let address = detect(&mut bus)?;
        info!("Tap: LIS3DH an {:#x}", address);
        Ok(Self { bus, address })
    }

    /// Liest CLICK_SRC, Busfehler zählen als "kein Tap"
    pub fn tapped(&mut self) -> bool {
        match read_tap(&mut self.bus, self.address) {
            Ok(tapped) => tapped,
            Err(e) => {
                warn!("Tap: CLICK_SRC nicht lesbar: {}", e);
                false
            }
        }
    }
}
