//! Serieller MP3-Player (DFPlayer-Protokoll)
//!
//! Clips liegen auf der SD-Karte als Ordner/Track:
//! - `01/001.mp3` .. `01/012.mp3`: Sprach-Clips (Reihenfolge wie `VOICE_CLIPS`)
//! - `02/001.mp3`, `02/002.mp3`: Power-Clips (alarm, energy_gone)
//!
//! Frame: `7E FF 06 CMD 00 P_HI P_LO CHK_HI CHK_LO EF`,
//! Checksumme `0 - Summe(Byte 1..=6)` in 16 Bit.

use crate::config::{POWER_FOLDER, VOICE_FOLDER};
use crate::traits::AudioError;
use crate::types::{ClipId, ClipSet};

/// Länge eines Kommando-Frames in Bytes
pub const FRAME_LEN: usize = 10;

const START: u8 = 0x7E;
const VERSION: u8 = 0xFF;
const LENGTH: u8 = 0x06;
const NO_FEEDBACK: u8 = 0x00;
const END: u8 = 0xEF;

/// Kommandos des Moduls (Auszug)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    SetVolume = 0x06,
    PlayFolderTrack = 0x0F,
}

/// Baut einen vollständigen Kommando-Frame
pub fn command_frame(command: Command, param: u16) -> [u8; FRAME_LEN] {
    let [p_hi, p_lo] = param.to_be_bytes();
    let mut frame = [
        START,
        VERSION,
        LENGTH,
        command as u8,
        NO_FEEDBACK,
        p_hi,
        p_lo,
        0,
        0,
        END,
    ];

    let [c_hi, c_lo] = checksum(&frame[1..7]).to_be_bytes();
    frame[7] = c_hi;
    frame[8] = c_lo;
    frame
}

fn checksum(payload: &[u8]) -> u16 {
    let sum = payload
        .iter()
        .fold(0u16, |acc, b| acc.wrapping_add(u16::from(*b)));
    0u16.wrapping_sub(sum)
}

/// Ordner und Track (1-basiert) eines Clips, `None` außerhalb des Katalogs
pub fn clip_location(clip: ClipId) -> Option<(u8, u8)> {
    clip.file_name()?;
    let folder = match clip.set {
        ClipSet::Voice => VOICE_FOLDER,
        ClipSet::Power => POWER_FOLDER,
    };
    Some((folder, clip.index + 1))
}

/// Play-Frame für einen Clip
pub fn play_frame(clip: ClipId) -> Result<[u8; FRAME_LEN], AudioError> {
    let (folder, track) = clip_location(clip).ok_or(AudioError::ClipUnavailable)?;
    Ok(command_frame(
        Command::PlayFolderTrack,
        u16::from_be_bytes([folder, track]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_frame_first_voice_clip() {
        let frame = play_frame(ClipId::voice(0)).unwrap();
        assert_eq!(
            frame,
            [0x7E, 0xFF, 0x06, 0x0F, 0x00, 0x01, 0x01, 0xFE, 0xEA, 0xEF]
        );
    }

    #[test]
    fn test_power_clips_in_second_folder() {
        assert_eq!(clip_location(ClipId::power(0)), Some((2, 1)));
        assert_eq!(clip_location(ClipId::power(1)), Some((2, 2)));
        assert_eq!(clip_location(ClipId::voice(11)), Some((1, 12)));
    }

    #[test]
    fn test_unknown_clip_rejected() {
        assert_eq!(clip_location(ClipId::power(2)), None);
        assert_eq!(play_frame(ClipId::voice(12)), Err(AudioError::ClipUnavailable));
    }

    #[test]
    fn test_volume_frame() {
        let frame = command_frame(Command::SetVolume, 25);
        assert_eq!(frame[3], 0x06);
        assert_eq!(frame[6], 25);
        assert_eq!(&frame[7..9], &[0xFE, 0xDC]);
    }

    #[test]
    fn test_checksum_cancels_payload() {
        let frame = command_frame(Command::PlayFolderTrack, 0x020C);
        let payload = frame[1..7]
            .iter()
            .fold(0u16, |acc, b| acc.wrapping_add(u16::from(*b)));
        let checksum = u16::from_be_bytes([frame[7], frame[8]]);
        assert_eq!(payload.wrapping_add(checksum), 0);
        assert_eq!((frame[0], frame[9]), (0x7E, 0xEF));
    }
}
