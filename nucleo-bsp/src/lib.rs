#![cfg_attr(not(test), no_std)]

pub use cortex_m;
pub use stm32ral;

pub mod blinky;
pub mod board;
pub mod delay;
pub mod gpio;
pub mod rcc;
