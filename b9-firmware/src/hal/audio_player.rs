// Audio-Modul: serieller MP3-Player an UART1 mit BUSY-Pin
//
// Frames und Clip → Ordner/Track kommen aus `b9_core::protocol::dfplayer`.

use b9_core::protocol::dfplayer::{Command, FRAME_LEN, command_frame, play_frame};
use b9_core::{AudioError, ClipId};
use defmt::warn;
use embassy_time::{Duration, Instant};
use esp_hal::Blocking;
use esp_hal::gpio::Input;
use esp_hal::uart::Uart;

use crate::config::{AUDIO_BUSY_SETTLE_MS, AUDIO_VOLUME};

/// UART-Kommandos + BUSY-Pin
pub struct AudioPlayer<'a> {
    uart: Uart<'a, Blocking>,
    busy: Input<'a>,
    /// Zeitpunkt des letzten Play-Kommandos (für die BUSY-Anlaufzeit)
    started_at: Option<Instant>,
}

impl<'a> AudioPlayer<'a> {
    /// Übernimmt konfigurierte UART und BUSY-Eingang, setzt die Lautstärke
    pub fn new(uart: Uart<'a, Blocking>, busy: Input<'a>) -> Self {
        let mut player = Self {
            uart,
            busy,
            started_at: None,
        };
        if player
            .send(command_frame(Command::SetVolume, u16::from(AUDIO_VOLUME)))
            .is_err()
        {
            warn!("Audio: Lautstärke nicht gesetzt");
        }
        player
    }

    pub fn play(&mut self, clip: ClipId) -> Result<(), AudioError> {
        let frame = play_frame(clip)?;
        self.send(frame)?;
        self.started_at = Some(Instant::now());
        Ok(())
    }

    /// BUSY ist Active-Low. Direkt nach dem Start zählt der Clip auch
    /// dann als laufend, wenn BUSY noch High ist.
    pub fn is_playing(&mut self) -> bool {
        if self.busy.is_low() {
            return true;
        }
        match self.started_at {
            Some(t) if t.elapsed() < Duration::from_millis(AUDIO_BUSY_SETTLE_MS) => true,
            _ => {
                self.started_at = None;
                false
            }
        }
    }

    fn send(&mut self, frame: [u8; FRAME_LEN]) -> Result<(), AudioError> {
        let written = self.uart.write(&frame).map_err(|_| AudioError::Bus)?;
        if written != FRAME_LEN {
            return Err(AudioError::Bus);
        }
        self.uart.flush().map_err(|_| AudioError::Bus)
    }
}
