//! Pixel-Buffer mit globaler Helligkeit

use crate::logic::scale_color;
use crate::traits::LedError;
use crate::types::{BLACK, Color};

/// Feste Anzahl Pixel plus Helligkeit, die erst beim Rendern angewendet wird
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Color; N],
    brightness: f32,
}

impl<const N: usize> PixelBuffer<N> {
    pub fn new(brightness: f32) -> Self {
        Self {
            pixels: [BLACK; N],
            brightness: brightness.clamp(0.0, 1.0),
        }
    }

    pub fn set(&mut self, index: usize, color: Color) -> Result<(), LedError> {
        let pixel = self.pixels.get_mut(index).ok_or(LedError::PixelOutOfRange)?;
        *pixel = color;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.pixels.get(index).copied()
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels = [color; N];
    }

    /// Setzt die Helligkeit, begrenzt auf [0, 1]
    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness.clamp(0.0, 1.0);
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Frame wie er auf den Bus geht (Helligkeit eingerechnet)
    pub fn frame(&self) -> [Color; N] {
        self.pixels.map(|c| scale_color(c, self.brightness))
    }
}
