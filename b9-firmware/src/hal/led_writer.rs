// SmartLED Writer für die beiden WS2812-Strips
//
// Der Trait kommt aus b9-core, hier steht nur die RMT-Implementierung.

use b9_core::{Color, LedError, SmartLedWriter};
use esp_hal_smartled::SmartLedsAdapter;
use smart_leds_trait::SmartLedsWrite;

/// Real Hardware LED Writer
///
/// Nutzt einen RMT-Kanal um einen WS2812-Strip anzusteuern.
/// `BUFFER_SIZE` = 24 Pulse pro LED + 1 Reset (siehe `rmt_buffer_size`).
///
/// Hinweis: Der Puls-Buffer muss so lange leben wie der Writer, daher
/// wird er im Task erstellt und mit dem Adapter hereingereicht.
pub struct RmtLedWriter<'a, const BUFFER_SIZE: usize> {
    led: SmartLedsAdapter<'a, BUFFER_SIZE>,
}

impl<'a, const BUFFER_SIZE: usize> RmtLedWriter<'a, BUFFER_SIZE> {
    /// Übernimmt einen fertig konfigurierten Adapter (RMT-Kanal + Pin + Buffer)
    pub fn new(led: SmartLedsAdapter<'a, BUFFER_SIZE>) -> Self {
        Self { led }
    }
}

impl<'a, const BUFFER_SIZE: usize> SmartLedWriter for RmtLedWriter<'a, BUFFER_SIZE> {
    fn write(&mut self, pixels: &[Color]) -> Result<(), LedError> {
        // Der Adapter sendet in GRB-Reihenfolge
        self.led
            .write(pixels.iter().copied())
            .map_err(|_| LedError::WriteFailed)
    }
}
