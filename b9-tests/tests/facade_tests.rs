//! Integration Tests für die Peripheral Facade
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockHardware

mod common;

use b9_core::types::{BLACK, RED, WHITE};
use b9_core::{AudioError, ClipId, Color, Facade, Instant, LedError, StripId};
use common::{Event, MockHardware, events, journal, strip_frames};
use rgb::RGB8;

// ============================================================================
// Tests: Batteriespannung
// ============================================================================

#[test]
fn test_battery_voltage_mid_scale() {
    let j = journal();
    let mut hw = MockHardware::new(&j);
    hw.battery_raw = 32768;
    let mut io = Facade::new(hw);

    let volts = io.read_battery_voltage();
    assert!((volts - 3.3).abs() < 1e-4, "got {}", volts);
    assert_eq!(events(&j), vec![Event::BatteryRead]);
}

#[test]
fn test_battery_voltage_monotonic_in_raw() {
    let j = journal();
    let mut io = Facade::new(MockHardware::new(&j));

    let mut last = f32::MIN;
    for raw in [0u16, 1, 100, 20_000, 29_789, 32_768, 34_757, 50_000, u16::MAX] {
        io.hardware_mut().battery_raw = raw;
        let v = io.read_battery_voltage();
        assert!(v >= last);
        last = v;
    }
}

// ============================================================================
// Tests: Voice Light & Taster
// ============================================================================

#[test]
fn test_voice_light_duty_scaling() {
    let j = journal();
    let mut io = Facade::new(MockHardware::new(&j));

    io.set_voice_light(Color { r: 255, g: 1, b: 0 });

    assert_eq!(events(&j), vec![Event::VoiceDuty([65280, 256, 0])]);
}

#[test]
fn test_button_is_active_low() {
    let j = journal();
    let mut hw = MockHardware::new(&j);
    hw.button_presses = [true, false].into_iter().collect();
    let mut io = Facade::new(hw);

    assert!(io.button_pressed());
    assert!(!io.button_pressed());
    // Skript leer → Pull-Up → nicht gedrückt
    assert!(!io.button_pressed());
}

// ============================================================================
// Tests: LED Strips
// ============================================================================

#[test]
fn test_initial_brightness() {
    let j = journal();
    let io = Facade::new(MockHardware::new(&j));
    assert!((io.brightness(StripId::Chest) - 0.4).abs() < 1e-6);
    assert!((io.brightness(StripId::Heartbeat) - 0.5).abs() < 1e-6);
}

#[test]
fn test_show_strip_writes_scaled_frame() {
    let j = journal();
    let mut io = Facade::new(MockHardware::new(&j));

    io.set_brightness(StripId::Heartbeat, 1.0);
    io.set_pixel(StripId::Heartbeat, 1, WHITE).unwrap();
    io.show_strip(StripId::Heartbeat).unwrap();

    io.set_brightness(StripId::Heartbeat, 0.0);
    io.show_strip(StripId::Heartbeat).unwrap();

    assert_eq!(
        events(&j),
        vec![
            Event::Strip {
                strip: StripId::Heartbeat,
                frame: vec![BLACK, WHITE],
            },
            Event::Strip {
                strip: StripId::Heartbeat,
                frame: vec![BLACK, BLACK],
            },
        ]
    );
}

#[test]
fn test_half_brightness_truncates_channels() {
    let j = journal();
    let mut io = Facade::new(MockHardware::new(&j));

    io.set_brightness(StripId::Chest, 0.5);
    io.set_pixel(StripId::Chest, 0, RGB8::new(200, 100, 51)).unwrap();
    io.show_strip(StripId::Chest).unwrap();

    let frames = strip_frames(&j, StripId::Chest);
    assert_eq!(frames[0][0], RGB8::new(100, 50, 25));
    // Buffer behält die unskalierte Farbe
    assert_eq!(io.pixel(StripId::Chest, 0), Some(RGB8::new(200, 100, 51)));
}

#[test]
fn test_fill_strip_covers_all_pixels() {
    let j = journal();
    let mut io = Facade::new(MockHardware::new(&j));

    io.set_brightness(StripId::Chest, 1.0);
    io.fill_strip(StripId::Chest, RED);
    io.show_strip(StripId::Chest).unwrap();

    assert_eq!(
        events(&j),
        vec![Event::Strip {
            strip: StripId::Chest,
            frame: vec![RED; 12],
        }]
    );
}

#[test]
fn test_set_pixel_out_of_range() {
    let j = journal();
    let mut io = Facade::new(MockHardware::new(&j));

    assert_eq!(
        io.set_pixel(StripId::Heartbeat, 2, RED),
        Err(LedError::PixelOutOfRange)
    );
    assert_eq!(
        io.set_pixel(StripId::Chest, 12, RED),
        Err(LedError::PixelOutOfRange)
    );
    assert_eq!(io.set_pixel(StripId::Chest, 11, RED), Ok(()));
    assert_eq!(io.pixel(StripId::Chest, 11), Some(RED));
}

#[test]
fn test_show_strip_propagates_write_failure() {
    let j = journal();
    let mut hw = MockHardware::new(&j);
    hw.fail_strip_writes = true;
    let mut io = Facade::new(hw);

    assert_eq!(io.show_strip(StripId::Chest), Err(LedError::WriteFailed));
    assert!(events(&j).is_empty());
}

// ============================================================================
// Tests: Playback Session
// ============================================================================

#[test]
fn test_session_lifecycle() {
    let j = journal();
    let mut hw = MockHardware::new(&j);
    hw.playback_polls = 2;
    let mut io = Facade::new(hw);

    let started = Instant::from_millis(1_500);
    io.play(ClipId::voice(4), started).unwrap();

    let session = io.session().copied().unwrap();
    assert_eq!(session.clip, ClipId::voice(4));
    assert_eq!(session.started_at, started);

    assert!(io.is_playing());
    assert!(io.is_playing());
    assert!(io.session().is_some());

    assert!(!io.is_playing());
    assert!(io.session().is_none());
}

#[test]
fn test_new_play_supersedes_session() {
    let j = journal();
    let mut hw = MockHardware::new(&j);
    hw.playback_polls = 5;
    let mut io = Facade::new(hw);

    io.play(ClipId::voice(0), Instant::from_millis(0)).unwrap();
    io.play(ClipId::voice(7), Instant::from_millis(20)).unwrap();

    assert_eq!(io.session().map(|s| s.clip), Some(ClipId::voice(7)));
}

#[test]
fn test_play_unknown_clip() {
    let j = journal();
    let mut io = Facade::new(MockHardware::new(&j));

    let result = io.play(ClipId::voice(12), Instant::from_millis(0));
    assert_eq!(result, Err(AudioError::ClipUnavailable));
    assert!(io.session().is_none());
    // Hardware wurde gar nicht angesprochen
    assert!(events(&j).is_empty());
}

#[test]
fn test_power_rail_passthrough() {
    let j = journal();
    let mut io = Facade::new(MockHardware::new(&j));

    io.set_power_rail(false);
    io.set_power_rail(true);

    assert_eq!(events(&j), vec![Event::Rail(false), Event::Rail(true)]);
}
