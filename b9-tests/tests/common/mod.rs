//! Gemeinsame Test-Infrastruktur: Mock-Hardware, virtuelle Uhr, Zufall
//!
//! Hardware und Uhr schreiben in dasselbe Journal, damit Tests die
//! Reihenfolge über Komponenten hinweg prüfen können.

#![allow(dead_code)] // Jede Test-Datei nutzt nur einen Teil der Mocks

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use b9_core::{
    AudioError, ClipId, Clock, Color, Duration, Instant, LedError, RandomSource, RobotHardware,
    StripId,
};

// ============================================================================
// Journal
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Strip { strip: StripId, frame: Vec<Color> },
    VoiceDuty([u16; 3]),
    Rail(bool),
    Play(ClipId),
    BatteryRead,
    Sleep(Duration),
}

pub type Journal = Rc<RefCell<Vec<Event>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

/// Rohwert, der (nach `raw * 3.3 / 65536 * 2`) ungefähr `volts` ergibt
pub fn raw_for_volts(volts: f32) -> u16 {
    (volts * 65536.0 / 6.6).round() as u16
}

// ============================================================================
// Mock Hardware
// ============================================================================

pub struct MockHardware {
    journal: Journal,
    /// Antworten für `tap_detected()`, danach `false`
    pub taps: VecDeque<bool>,
    /// `true` = gedrückt, danach nicht gedrückt
    pub button_presses: VecDeque<bool>,
    /// Antworten für `current_amplitude()`, danach 0.0
    pub amplitudes: VecDeque<f32>,
    pub battery_raw: u16,
    /// Wie viele `is_playing()`-Polls nach einem `play()` noch `true` liefern
    pub playback_polls: usize,
    remaining_polls: usize,
    /// Clips, die beim Abspielen fehlschlagen
    pub unavailable: Vec<ClipId>,
    pub fail_strip_writes: bool,
}

impl MockHardware {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            taps: VecDeque::new(),
            button_presses: VecDeque::new(),
            amplitudes: VecDeque::new(),
            battery_raw: raw_for_volts(3.9),
            playback_polls: 0,
            remaining_polls: 0,
            unavailable: Vec::new(),
            fail_strip_writes: false,
        }
    }

    pub fn with_battery(mut self, volts: f32) -> Self {
        self.battery_raw = raw_for_volts(volts);
        self
    }

    pub fn with_taps(mut self, taps: &[bool]) -> Self {
        self.taps = taps.iter().copied().collect();
        self
    }

    fn log(&self, event: Event) {
        self.journal.borrow_mut().push(event);
    }
}

impl RobotHardware for MockHardware {
    fn write_strip(&mut self, strip: StripId, frame: &[Color]) -> Result<(), LedError> {
        if self.fail_strip_writes {
            return Err(LedError::WriteFailed);
        }
        self.log(Event::Strip {
            strip,
            frame: frame.to_vec(),
        });
        Ok(())
    }

    fn set_voice_duty(&mut self, duty: [u16; 3]) {
        self.log(Event::VoiceDuty(duty));
    }

    fn tap_detected(&mut self) -> bool {
        self.taps.pop_front().unwrap_or(false)
    }

    fn button_level(&mut self) -> bool {
        // Active-Low: gedrückt = Low
        !self.button_presses.pop_front().unwrap_or(false)
    }

    fn play(&mut self, clip: ClipId) -> Result<(), AudioError> {
        if self.unavailable.contains(&clip) {
            return Err(AudioError::ClipUnavailable);
        }
        self.log(Event::Play(clip));
        self.remaining_polls = self.playback_polls;
        Ok(())
    }

    fn is_playing(&mut self) -> bool {
        if self.remaining_polls > 0 {
            self.remaining_polls -= 1;
            true
        } else {
            false
        }
    }

    fn current_amplitude(&mut self) -> f32 {
        self.amplitudes.pop_front().unwrap_or(0.0)
    }

    fn read_battery_raw(&mut self) -> u16 {
        self.log(Event::BatteryRead);
        self.battery_raw
    }

    fn set_power_rail(&mut self, enabled: bool) {
        self.log(Event::Rail(enabled));
    }
}

// ============================================================================
// Mock Clock
// ============================================================================

/// Virtuelle Uhr: `sleep` kehrt sofort zurück und stellt die Zeit vor
pub struct MockClock {
    journal: Journal,
    now_ms: u64,
}

impl MockClock {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            now_ms: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.now_ms)
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.now_ms)
    }

    async fn sleep(&mut self, duration: Duration) {
        self.now_ms += duration.as_millis();
        self.journal.borrow_mut().push(Event::Sleep(duration));
    }
}

// ============================================================================
// Zufall
// ============================================================================

/// Liefert vorgegebene Werte, danach immer 0 (→ Index 0)
#[derive(Default)]
pub struct ScriptedRandom {
    values: VecDeque<u32>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nächster `pick(len)` liefert genau `index`
    pub fn then_pick(mut self, index: usize, len: usize) -> Self {
        self.values.push_back(Self::value_for(index, len));
        self
    }

    /// Kleinster Rohwert x mit `(x * len) >> 32 == index`
    pub fn value_for(index: usize, len: usize) -> u32 {
        let len = len as u64;
        (((index as u64) << 32).div_ceil(len)) as u32
    }
}

impl RandomSource for ScriptedRandom {
    fn next_u32(&mut self) -> u32 {
        self.values.pop_front().unwrap_or(0)
    }
}

// ============================================================================
// Helfer
// ============================================================================

pub fn events(journal: &Journal) -> Vec<Event> {
    journal.borrow().clone()
}

pub fn plays(journal: &Journal) -> Vec<ClipId> {
    journal
        .borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Play(clip) => Some(*clip),
            _ => None,
        })
        .collect()
}

pub fn strip_frames(journal: &Journal, strip: StripId) -> Vec<Vec<Color>> {
    journal
        .borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Strip { strip: s, frame } if *s == strip => Some(frame.clone()),
            _ => None,
        })
        .collect()
}

pub fn position(events: &[Event], wanted: &Event) -> usize {
    events
        .iter()
        .position(|e| e == wanted)
        .unwrap_or_else(|| panic!("{:?} nicht im Journal", wanted))
}
