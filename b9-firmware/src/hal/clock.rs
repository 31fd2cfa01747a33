// Embassy-Uhr und Hardware-Zufall für den Controller

use b9_core::{Clock, RandomSource};
use embassy_time::{Duration, Instant, Timer};
use esp_hal::rng::Rng;

/// `Clock` auf dem Embassy-Zeittreiber (esp-rtos)
///
/// `sleep` gibt die CPU an andere Tasks ab.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&mut self, duration: Duration) {
        Timer::after(duration).await;
    }
}

/// `RandomSource` auf dem Hardware-RNG
pub struct HardwareRandom {
    rng: Rng,
}

impl Default for HardwareRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareRandom {
    pub fn new() -> Self {
        Self { rng: Rng::new() }
    }
}

impl RandomSource for HardwareRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.random()
    }
}
