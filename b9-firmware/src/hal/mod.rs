// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus b9-core für das ESP32-C6 Board.
// Protokoll-Logik (Frames, Register-Folgen, Duty-Umrechnung) liegt in
// `b9_core::protocol` bzw. `b9_core::logic` und wird dort getestet.

pub mod audio_player;
pub mod board;
pub mod clock;
pub mod led_writer;
pub mod tap_sensor;
pub mod voice_light;

pub use audio_player::AudioPlayer;
pub use board::{AnalogInputs, EspRobotHardware};
pub use clock::{EmbassyClock, HardwareRandom};
pub use led_writer::RmtLedWriter;
pub use tap_sensor::TapSensor;
pub use voice_light::{VoiceLight, VoiceLightError};
