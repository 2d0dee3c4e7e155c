//! Metron Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs (RP2040, etc.). This enables the same sampling
//! logic to run on different hardware platforms and, just as importantly,
//! on the host under test with mock peripherals.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (metron-firmware, etc.)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  metron-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │           metron-hal-rp2040             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (indicator LED, chip select)
//! - [`adc::AnalogIn`] - One-shot analog sampling
//! - [`spi::SpiBus`] - Transmit-only SPI with 16-bit frames

#![no_std]
#![deny(unsafe_code)]
#![allow(async_fn_in_trait)]

pub mod adc;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use adc::AnalogIn;
pub use gpio::OutputPin;
pub use spi::SpiBus;
