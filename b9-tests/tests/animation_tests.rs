//! Integration Tests für die Animation Engine

mod common;

use b9_core::types::{BLACK, BLUE, WHITE};
use b9_core::{Duration, Facade, StripId, blinky_step, heartbeat_step};
use common::{Event, MockClock, MockHardware, ScriptedRandom, events, journal, strip_frames};
use embassy_futures::block_on;

const WAIT: Duration = Duration::from_millis(300);

#[test]
fn test_blinky_single_ramp() {
    let j = journal();
    let mut io = Facade::new(MockHardware::new(&j));
    let mut clock = MockClock::new(&j);
    // Palette 0 = [YELLOW, BLUE, GREEN, WHITE, RED] → WHITE, Pixel 7
    let mut rng = ScriptedRandom::new().then_pick(3, 5).then_pick(7, 12);

    block_on(blinky_step(&mut io, &mut clock, &mut rng, WAIT, 1, 0));

    let frames = strip_frames(&j, StripId::Chest);
    assert_eq!(frames.len(), 9);

    // Aufhellen: nur Pixel 7 leuchtet, Helligkeit steigt strikt
    let mut last = 0u8;
    for frame in &frames[..4] {
        assert_eq!(frame.len(), 12);
        let lit = frame[7];
        assert_eq!(lit.r, lit.g);
        assert_eq!(lit.g, lit.b);
        assert!(lit.r > last, "{} <= {}", lit.r, last);
        last = lit.r;
        assert!(frame.iter().enumerate().all(|(i, c)| i == 7 || *c == BLACK));
    }
    assert!(last < WHITE.r);

    // Abblenden: Pixel ist schwarz
    for frame in &frames[4..] {
        assert!(frame.iter().all(|c| *c == BLACK));
    }

    assert_eq!(clock.elapsed(), Duration::from_millis(9 * 300));
    assert!((io.brightness(StripId::Chest) - 0.2).abs() < 1e-6);
}

#[test]
fn test_blinky_yields_after_every_render() {
    let j = journal();
    let mut io = Facade::new(MockHardware::new(&j));
    let mut clock = MockClock::new(&j);
    let mut rng = ScriptedRandom::new();

    block_on(blinky_step(&mut io, &mut clock, &mut rng, WAIT, 2, 2));

    let log = events(&j);
    assert_eq!(log.len(), 2 * 2 * 9);
    for pair in log.chunks(2) {
        assert!(matches!(pair[0], Event::Strip { strip: StripId::Chest, .. }));
        assert_eq!(pair[1], Event::Sleep(WAIT));
    }
}

#[test]
fn test_blinky_allows_same_pixel_twice() {
    let j = journal();
    let mut io = Facade::new(MockHardware::new(&j));
    let mut clock = MockClock::new(&j);
    let mut rng = ScriptedRandom::new()
        .then_pick(0, 5)
        .then_pick(4, 12)
        .then_pick(1, 5)
        .then_pick(4, 12);

    block_on(blinky_step(&mut io, &mut clock, &mut rng, WAIT, 2, 0));

    let frames = strip_frames(&j, StripId::Chest);
    assert_eq!(frames.len(), 18);
    assert_ne!(frames[0][4], BLACK);
    assert_ne!(frames[9][4], BLACK);
    // Zweiter Blink nutzt BLUE
    assert_eq!(frames[9][4].r, 0);
    assert!(frames[9][4].b > 0);
}

#[test]
fn test_blinky_survives_render_failure() {
    let j = journal();
    let mut hw = MockHardware::new(&j);
    hw.fail_strip_writes = true;
    let mut io = Facade::new(hw);
    let mut clock = MockClock::new(&j);
    let mut rng = ScriptedRandom::new();

    block_on(blinky_step(&mut io, &mut clock, &mut rng, WAIT, 1, 0));

    assert!(strip_frames(&j, StripId::Chest).is_empty());
    assert_eq!(clock.elapsed(), Duration::from_millis(9 * 300));
}

#[test]
fn test_heartbeat_two_repeats() {
    let j = journal();
    let mut io = Facade::new(MockHardware::new(&j));
    let mut clock = MockClock::new(&j);
    let mut rng = ScriptedRandom::new().then_pick(1, 2).then_pick(0, 2);
    let wait = Duration::from_millis(100);

    // Palette 1 → Heartbeat BLUE
    block_on(heartbeat_step(&mut io, &mut clock, &mut rng, wait, 1));

    let frames = strip_frames(&j, StripId::Heartbeat);
    assert_eq!(frames.len(), 18);
    assert!(strip_frames(&j, StripId::Chest).is_empty());

    let mut last = 0u8;
    for frame in &frames[..4] {
        assert_eq!(frame[0], BLACK);
        assert_eq!((frame[1].r, frame[1].g), (0, 0));
        assert!(frame[1].b > last);
        last = frame[1].b;
    }
    assert!(last < BLUE.b);

    for frame in &frames[9..13] {
        assert_eq!(frame[1], BLACK);
        assert!(frame[0].b > 0);
    }
    assert!(frames[13..].iter().all(|f| f.iter().all(|c| *c == BLACK)));

    assert_eq!(clock.elapsed(), Duration::from_millis(18 * 100));
}

#[test]
fn test_blink_clears_pixel_in_buffer() {
    let j = journal();
    let mut hw = MockHardware::new(&j);
    // Auch ohne erfolgreiches Rendern wird der Buffer gelöscht
    hw.fail_strip_writes = true;
    let mut io = Facade::new(hw);
    let mut clock = MockClock::new(&j);
    let mut rng = ScriptedRandom::new().then_pick(1, 2).then_pick(0, 2);

    block_on(heartbeat_step(&mut io, &mut clock, &mut rng, WAIT, 0));

    assert_eq!(io.pixel(StripId::Heartbeat, 0), Some(BLACK));
    assert_eq!(io.pixel(StripId::Heartbeat, 1), Some(BLACK));
    assert_eq!(clock.elapsed(), Duration::from_millis(2 * 9 * 300));
}
