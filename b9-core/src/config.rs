//! Verhaltens-Konstanten des Controllers
//!
//! Alle Tunables sind Compile-Time-Konstanten (keine Config-Datei, keine ENV).
//! Pin-Zuordnungen stehen im Firmware-Crate (`config.rs`).

use embassy_time::Duration;

// ============================================================================
// LED Strips
// ============================================================================

/// Anzahl der Blink-LEDs im unteren Brust-Panel
pub const CHEST_PIXELS: usize = 12;

/// Anzahl der "Heartbeat"-LEDs oben im Brust-Panel
pub const HEARTBEAT_PIXELS: usize = 2;

/// Helligkeit des Brust-Panels nach dem Einschalten
pub const CHEST_INITIAL_BRIGHTNESS: f32 = 0.4;

/// Helligkeit der Heartbeat-LEDs nach dem Einschalten
pub const HEARTBEAT_INITIAL_BRIGHTNESS: f32 = 0.5;

// ============================================================================
// Animationen
// ============================================================================

/// Wartezeit zwischen zwei Helligkeitsstufen beim Brust-Blinken
pub const BLINKY_WAIT: Duration = Duration::from_millis(300);

/// Anzahl Blinks pro `blinky_step`-Aufruf im Hauptzyklus
pub const BLINKY_REPEATS: usize = 2;

/// Wartezeit zwischen zwei Helligkeitsstufen beim Heartbeat
pub const HEARTBEAT_WAIT: Duration = Duration::from_millis(100);

/// Heartbeat blinkt immer genau zweimal
pub const HEARTBEAT_REPEATS: usize = 2;

/// Wie oft (Blinky, Heartbeat) pro Zyklus hintereinander läuft
pub const ANIMATION_ROUNDS: usize = 3;

/// Helligkeitsstufen sind `i / RAMP_DIVISIONS`
pub const RAMP_DIVISIONS: f32 = 5.0;

/// Stufen beim Aufhellen: 0.2, 0.4, 0.6, 0.8
pub const RAMP_UP_STEPS: u8 = 4;

/// Stufen beim Abdunkeln: 1.0, 0.8, 0.6, 0.4, 0.2
pub const RAMP_DOWN_STEPS: u8 = 5;

// ============================================================================
// Voice Trigger & Sync
// ============================================================================

/// Wartezeit pro Iteration der Tap-Bestätigungsschleife
pub const TAP_CONFIRM_DELAY: Duration = Duration::from_millis(10);

/// Pause zwischen zwei Voice-Light-Sync-Durchläufen
pub const VOICE_SYNC_INTERVAL: Duration = Duration::from_millis(10);

/// RMS-Schwelle, ab der das Voice-Light gesetzt wird
pub const AUDIO_THRESHOLD: f32 = 0.25;

// ============================================================================
// Power Management
// ============================================================================

/// Leerlaufzeit ohne Wiedergabe bis die Power-Rail abgeschaltet wird
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(120);

/// Schlafzeit nach der Low-Battery-Warnung
pub const CRISIS_SLEEP: Duration = Duration::from_secs(600);

/// Unterhalb dieser Spannung (Volt) startet der Crisis-Modus
pub const CRISIS_VOLTAGE: f32 = 3.31;

/// Poll-Intervall beim Warten auf das Ende eines Warn-Clips
pub const PLAYBACK_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// ADC-Referenzspannung in Volt
pub const ADC_REFERENCE_VOLTS: f32 = 3.3;

/// Wertebereich eines 16-Bit-Samples
pub const ADC_FULL_SCALE: f32 = 65536.0;

/// Spannungsteiler vor dem Batterie-Pin (1:2)
pub const BATTERY_DIVIDER: f32 = 2.0;

// ============================================================================
// Sensoren & Paletten
// ============================================================================

/// I2C-Adresse des Tap-Sensors (LIS3DH, SDO auf GND)
pub const TAP_SENSOR_PRIMARY_ADDRESS: u8 = 0x18;

/// Alternative I2C-Adresse (SDO auf VCC)
pub const TAP_SENSOR_FALLBACK_ADDRESS: u8 = 0x19;

/// Double-Tap Schwelle (Rohwert im 4g-Bereich)
pub const TAP_THRESHOLD: u8 = 40;

/// SD-Karten-Ordner des Audio-Moduls für Sprach- und Power-Clips
pub const VOICE_FOLDER: u8 = 1;
pub const POWER_FOLDER: u8 = 2;

/// Anzahl Paletten pro Familie
pub const PALETTE_COUNT: usize = 4;
