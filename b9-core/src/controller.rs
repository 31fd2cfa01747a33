//! Main Loop Orchestrator
//!
//! Feste Reihenfolge pro Zyklus - kein generischer Scheduler:
//!
//! 1. 3× (Blinky, Heartbeat)
//! 2. Tap pollen, ggf. Sprach-Clip starten
//! 3. Voice-Light synchronisieren solange Audio läuft
//! 4. Paletten-Taster prüfen
//! 5. Power-Check

use crate::animation::{blinky_step, heartbeat_step};
use crate::config::{
    ANIMATION_ROUNDS, BLINKY_REPEATS, BLINKY_WAIT, CHEST_INITIAL_BRIGHTNESS,
    HEARTBEAT_INITIAL_BRIGHTNESS, HEARTBEAT_WAIT, VOICE_SYNC_INTERVAL,
};
use crate::facade::Facade;
use crate::palette::PaletteStore;
use crate::power::PowerManager;
use crate::traits::{Clock, RandomSource, RobotHardware};
use crate::types::{BLACK, CycleReport, StripId};
use crate::voice::VoiceTrigger;

/// Einziger Besitzer des gesamten Laufzeit-Zustands
pub struct RobotController<H: RobotHardware, C: Clock, R: RandomSource> {
    io: Facade<H>,
    clock: C,
    rng: R,
    palette: PaletteStore,
    voice: VoiceTrigger,
    power: PowerManager,
}

impl<H, C, R> RobotController<H, C, R>
where
    H: RobotHardware,
    C: Clock,
    R: RandomSource,
{
    pub fn new(hardware: H, clock: C, rng: R) -> Self {
        Self {
            io: Facade::new(hardware),
            clock,
            rng,
            palette: PaletteStore::new(),
            voice: VoiceTrigger::new(),
            power: PowerManager::new(),
        }
    }

    /// Einschalt-Sequenz: Rail an, Strips schwarz mit Start-Helligkeit, Voice-Light aus
    pub fn start(&mut self) {
        info!("B9: Start");
        self.power.wake(&mut self.io);

        self.io.set_brightness(StripId::Chest, CHEST_INITIAL_BRIGHTNESS);
        self.io.set_brightness(StripId::Heartbeat, HEARTBEAT_INITIAL_BRIGHTNESS);
        for strip in [StripId::Chest, StripId::Heartbeat] {
            self.io.fill_strip(strip, BLACK);
            if let Err(e) = self.io.show_strip(strip) {
                warn!("B9: {} beim Start nicht gelöscht: {}", strip, e);
            }
        }
        self.io.set_voice_light(BLACK);
    }

    /// Ein kompletter Hauptzyklus
    pub async fn run_cycle(&mut self) -> CycleReport {
        self.animate().await;

        let clip = self
            .voice
            .poll_tap(&mut self.io, &mut self.clock, &mut self.rng, &mut self.power)
            .await;

        self.sync_voice_light().await;

        let palette_advanced = self.check_button();

        let power = self
            .power
            .check(&mut self.io, &mut self.clock, &mut self.palette)
            .await;

        CycleReport {
            clip,
            palette_advanced,
            power,
        }
    }

    /// Endlosschleife - es gibt keinen Exit
    pub async fn run(&mut self) -> ! {
        loop {
            let report = self.run_cycle().await;
            debug!("B9: Zyklus beendet {}", report);
        }
    }

    async fn animate(&mut self) {
        for _ in 0..ANIMATION_ROUNDS {
            let index = self.palette.current_index();
            blinky_step(
                &mut self.io,
                &mut self.clock,
                &mut self.rng,
                BLINKY_WAIT,
                BLINKY_REPEATS,
                index,
            )
            .await;
            heartbeat_step(&mut self.io, &mut self.clock, &mut self.rng, HEARTBEAT_WAIT, index).await;
        }
    }

    async fn sync_voice_light(&mut self) {
        while self.io.is_playing() {
            self.voice.sync(&mut self.io, self.palette.current_index());
            self.clock.sleep(VOICE_SYNC_INTERVAL).await;
        }
        self.voice.finish();
    }

    fn check_button(&mut self) -> bool {
        if !self.io.button_pressed() {
            return false;
        }
        self.palette.advance();
        info!("B9: Palette {}", self.palette.current_index());
        true
    }

    // ------------------------------------------------------------------------
    // Zugriff für Tests und Firmware
    // ------------------------------------------------------------------------

    pub fn io(&self) -> &Facade<H> {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut Facade<H> {
        &mut self.io
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn palette(&self) -> &PaletteStore {
        &self.palette
    }

    pub fn voice(&self) -> &VoiceTrigger {
        &self.voice
    }

    pub fn power(&self) -> &PowerManager {
        &self.power
    }
}
