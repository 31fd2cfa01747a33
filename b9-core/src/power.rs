//! Power Manager
//!
//! Active → IdleTimeout → RailOff → (Crisis-Check) → CrisisAlert → LongSleep → Active
//!
//! Der Check läuft einmal pro Hauptzyklus. Alle Wartezeiten sind
//! kooperativ (`Clock::sleep`) und laufen immer vollständig durch.

use embassy_time::Instant;

use crate::config::{CRISIS_SLEEP, CRISIS_VOLTAGE, IDLE_TIMEOUT, PLAYBACK_POLL_INTERVAL};
use crate::facade::Facade;
use crate::palette::PaletteStore;
use crate::traits::{Clock, RobotHardware};
use crate::types::{BLACK, ClipId, POWER_CLIPS, PowerOutcome, PowerPhase, StripId};

/// Zustand der Stromversorgung
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerState {
    /// Power-Rail für LEDs und Verstärker
    pub rail_enabled: bool,
    /// Zuletzt gemessene Batteriespannung in Volt
    pub battery_voltage: f32,
    /// Start des laufenden Leerlauf-Timers
    pub idle_since: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerManager {
    phase: PowerPhase,
    state: PowerState,
    crisis_count: u32,
}

impl Default for PowerManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerManager {
    /// Die Rail gilt beim Start als eingeschaltet (siehe `RobotController::start`)
    pub const fn new() -> Self {
        Self {
            phase: PowerPhase::Active,
            state: PowerState {
                rail_enabled: true,
                battery_voltage: 0.0,
                idle_since: None,
            },
            crisis_count: 0,
        }
    }

    pub fn phase(&self) -> PowerPhase {
        self.phase
    }

    pub fn state(&self) -> &PowerState {
        &self.state
    }

    /// Anzahl komplett durchlaufener Crisis-Sequenzen
    pub fn crisis_count(&self) -> u32 {
        self.crisis_count
    }

    /// Tap oder Systemstart: Rail an, Leerlauf-Timer zurücksetzen
    ///
    /// Schreibt die Rail bei jedem Aufruf, geloggt wird nur der Wechsel.
    pub fn wake<H: RobotHardware>(&mut self, io: &mut Facade<H>) {
        if !self.state.rail_enabled {
            info!("Power: Rail an (Wake)");
        }
        io.set_power_rail(true);
        self.state.rail_enabled = true;
        self.state.idle_since = None;
        self.phase = PowerPhase::Active;
    }

    /// Power-Check am Ende des Hauptzyklus
    ///
    /// Läuft gerade Audio, passiert nichts. Sonst: 120 s warten, Rail aus,
    /// Batterie messen und unter 3.31 V die Crisis-Sequenz ausführen.
    pub async fn check<H, C>(
        &mut self,
        io: &mut Facade<H>,
        clock: &mut C,
        palette: &mut PaletteStore,
    ) -> PowerOutcome
    where
        H: RobotHardware,
        C: Clock,
    {
        if io.is_playing() {
            return PowerOutcome::Deferred;
        }

        self.phase = PowerPhase::IdleTimeout;
        self.state.idle_since = Some(clock.now());
        debug!("Power: Leerlauf, Rail-Abschaltung in {} s", IDLE_TIMEOUT.as_secs());
        clock.sleep(IDLE_TIMEOUT).await;

        self.set_rail(io, false);
        self.phase = PowerPhase::RailOff;

        let voltage = io.read_battery_voltage();
        self.state.battery_voltage = voltage;

        if voltage >= CRISIS_VOLTAGE {
            info!("Power: Rail aus, Batterie {} V", voltage);
            return PowerOutcome::RailOff { voltage };
        }

        self.crisis_alert(io, clock, palette, voltage).await;
        PowerOutcome::Crisis { voltage }
    }

    async fn crisis_alert<H, C>(
        &mut self,
        io: &mut Facade<H>,
        clock: &mut C,
        palette: &mut PaletteStore,
        voltage: f32,
    ) where
        H: RobotHardware,
        C: Clock,
    {
        warn!("Power: Batterie kritisch ({} V), starte Warnsequenz", voltage);
        self.phase = PowerPhase::CrisisAlert;
        self.set_rail(io, true);

        io.fill_strip(StripId::Chest, BLACK);
        io.fill_strip(StripId::Heartbeat, BLACK);
        for strip in [StripId::Chest, StripId::Heartbeat] {
            if let Err(e) = io.show_strip(strip) {
                warn!("Power: {} nicht gelöscht: {}", strip, e);
            }
        }
        palette.reset();

        for index in 0..POWER_CLIPS.len() {
            let clip = ClipId::power(index as u8);
            match io.play(clip, clock.now()) {
                Ok(()) => {
                    while io.is_playing() {
                        clock.sleep(PLAYBACK_POLL_INTERVAL).await;
                    }
                }
                Err(e) => warn!("Power: Warn-Clip {} übersprungen: {}", clip, e),
            }
        }

        self.set_rail(io, false);
        self.crisis_count += 1;

        self.phase = PowerPhase::LongSleep;
        info!("Power: Schlafe {} s", CRISIS_SLEEP.as_secs());
        clock.sleep(CRISIS_SLEEP).await;

        self.phase = PowerPhase::Active;
    }

    fn set_rail<H: RobotHardware>(&mut self, io: &mut Facade<H>, enabled: bool) {
        io.set_power_rail(enabled);
        self.state.rail_enabled = enabled;
    }
}
