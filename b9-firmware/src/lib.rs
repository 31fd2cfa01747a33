// Library-Root: Hardware-Bindung und Tasks des B9-Roboters
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von b9-core
pub use b9_core::{
    ClipId, Color, LedError, RobotController, RobotHardware, SmartLedWriter, StripId,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Dieses Crate baut nur für riscv32imac-unknown-none-elf und hat keine
// Host-Tests. Alles Testbare liegt in b9-core:
// - Steuerlogik (Animation, Voice, Power, Orchestrator): b9-tests gegen Mocks
// - Audio-Frames und Clip → Ordner/Track: `b9_core::protocol::dfplayer`
// - LIS3DH-Register und Adress-Fallback: `b9_core::protocol::lis3dh`
// - 16-Bit → 10-Bit Duty: `b9_core::logic::duty_to_resolution`
