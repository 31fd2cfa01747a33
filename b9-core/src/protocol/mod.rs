//! Hardware-freie Protokolle der Peripherie
//!
//! Frames und Register-Folgen werden hier gebaut und getestet, die
//! Firmware schickt sie nur noch über UART bzw. I2C.

pub mod dfplayer;
pub mod lis3dh;
