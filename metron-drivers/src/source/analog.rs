//! ADC-backed sample source

use metron_core::traits::{SampleSource, SourceError};
use metron_hal::AnalogIn;

/// Sample source backed by one analog input channel
///
/// Readings pass through unscaled; the converter's raw result is exactly
/// what reaches the transport.
pub struct AnalogSource<A> {
    input: A,
}

impl<A> AnalogSource<A>
where
    A: AnalogIn,
    A::Error: Into<SourceError>,
{
    /// Create a sample source over the given analog input
    pub fn new(input: A) -> Self {
        Self { input }
    }
}

impl<A> SampleSource for AnalogSource<A>
where
    A: AnalogIn,
    A::Error: Into<SourceError>,
{
    async fn sample(&mut self) -> Result<u16, SourceError> {
        self.input.read().await.map_err(Into::into)
    }
}
