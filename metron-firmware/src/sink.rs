//! Observation sink for sampled values

use defmt::info;
use metron_core::traits::SampleSink;

/// Prints each sampled value on the debug console
///
/// One decimal integer per cycle, the raw value before any scaling.
pub struct LogSink;

impl SampleSink for LogSink {
    fn record(&mut self, value: u16) {
        info!("{}", value);
    }
}
