//! RP2040-specific HAL for the Metron firmware
//!
//! This crate provides RP2040 implementations of the shared `metron-hal`
//! traits on top of embassy-rp:
//!
//! - GPIO output pins (indicator LED, chip select)
//! - One-shot ADC sampling
//! - Transmit-only SPI with 16-bit frames
//! - Cycle delay via the embassy time driver

#![no_std]

pub mod adc;
pub mod delay;
pub mod gpio;
pub mod spi;

// Re-export shared traits and bus parameters from metron-hal for convenience
pub use metron_hal::spi::{Phase, Polarity, SpiConfig};
pub use metron_hal::{AnalogIn, SpiBus};
