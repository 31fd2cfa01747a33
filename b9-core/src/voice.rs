//! Voice Trigger & Sync
//!
//! Double-Tap → zufälliger Sprach-Clip, Voice-Light blinkt im Takt der
//! Lautstärke.

use crate::config::{AUDIO_THRESHOLD, TAP_CONFIRM_DELAY};
use crate::facade::Facade;
use crate::logic::voice_flash_color;
use crate::palette;
use crate::power::PowerManager;
use crate::traits::{Clock, RandomSource, RobotHardware};
use crate::types::{ClipId, VOICE_CLIPS, VoiceState};

/// Zustandsautomat Idle → Triggered → Playing → Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceTrigger {
    state: VoiceState,
}

impl Default for VoiceTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl VoiceTrigger {
    pub const fn new() -> Self {
        Self {
            state: VoiceState::Idle,
        }
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    /// Pollt den Tap-Sensor solange das Tap-Flag gesetzt ist
    ///
    /// Jede Iteration schaltet die Power-Rail ein und wartet 10 ms.
    /// Pro zusammenhängendem Tap-Intervall wird genau ein Clip gestartet
    /// (in der ersten Iteration), weitere Iterationen halten nur die Rail an.
    pub async fn poll_tap<H, C, R>(
        &mut self,
        io: &mut Facade<H>,
        clock: &mut C,
        rng: &mut R,
        power: &mut PowerManager,
    ) -> Option<ClipId>
    where
        H: RobotHardware,
        C: Clock,
        R: RandomSource,
    {
        let mut started = None;
        let mut hold_handled = false;

        while io.tap_detected() {
            power.wake(io);
            clock.sleep(TAP_CONFIRM_DELAY).await;

            if !hold_handled {
                hold_handled = true;
                self.state = VoiceState::Triggered;
                started = self.dispatch(io, clock, rng);
            }
        }

        started
    }

    /// Wählt einen zufälligen Sprach-Clip und startet ihn
    ///
    /// Ein fehlender Clip wird nicht wiederholt: Warnung, zurück auf Idle.
    pub fn dispatch<H, C, R>(&mut self, io: &mut Facade<H>, clock: &C, rng: &mut R) -> Option<ClipId>
    where
        H: RobotHardware,
        C: Clock,
        R: RandomSource,
    {
        let clip = ClipId::voice(rng.pick(VOICE_CLIPS.len()) as u8);

        match io.play(clip, clock.now()) {
            Ok(()) => {
                info!("Voice: spiele {}", clip.file_name().unwrap_or("?"));
                self.state = VoiceState::Playing;
                Some(clip)
            }
            Err(e) => {
                warn!("Voice: Clip {} nicht abspielbar: {}", clip, e);
                self.state = VoiceState::Idle;
                None
            }
        }
    }

    /// Ein Sync-Durchlauf während der Wiedergabe (`voice_flash`)
    ///
    /// Liegt die Lautstärke über der Schwelle, wird das Voice-Light auf die
    /// Farbrad-Farbe der aktiven Palette gesetzt. Darunter bleibt das Licht
    /// wie zuletzt gesetzt, es gibt kein explizites Ausschalten.
    /// Gibt `true` zurück, wenn das Licht gesetzt wurde.
    pub fn sync<H: RobotHardware>(&mut self, io: &mut Facade<H>, palette_index: usize) -> bool {
        let color = voice_flash_color(palette::voice_color(palette_index));
        if io.current_amplitude() > AUDIO_THRESHOLD {
            io.set_voice_light(color);
            true
        } else {
            false
        }
    }

    /// Wiedergabe beendet
    pub fn finish(&mut self) {
        if self.state != VoiceState::Idle {
            debug!("Voice: Wiedergabe beendet");
        }
        self.state = VoiceState::Idle;
    }
}
