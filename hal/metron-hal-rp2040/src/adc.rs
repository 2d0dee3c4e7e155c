//! One-shot ADC sampling
//!
//! RP2040 has a single ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor
//!
//! The converter is 12-bit; results come back right-aligned in 16 bits.

use embassy_rp::adc::{Adc, Async, Channel};
use metron_core::traits::SourceError;

/// An ADC channel that runs one conversion per read
///
/// Owns the converter and the channel together; this device only samples
/// a single channel, so there is nothing to arbitrate.
pub struct AdcInput {
    adc: Adc<'static, Async>,
    channel: Channel<'static>,
}

impl AdcInput {
    /// Bind the converter to one channel
    pub fn new(adc: Adc<'static, Async>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl metron_hal::AnalogIn for AdcInput {
    type Error = SourceError;

    async fn read(&mut self) -> Result<u16, SourceError> {
        self.adc
            .read(&mut self.channel)
            .await
            .map_err(|_| SourceError::Fault)
    }
}
