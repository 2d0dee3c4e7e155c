//! Bounded-timeout wrappers for peripheral operations
//!
//! The raw analog conversion and the raw bus write both block until the
//! hardware completes. Wrapping them in a deadline turns a wedged
//! peripheral into an error the sampler surfaces, instead of an
//! unrecoverable hang. The bus wrapper sits inside the chip-select gate,
//! so a missed deadline still deselects the device.

use embassy_time::{with_timeout, Duration};
use metron_core::traits::{SourceError, TransportError};
use metron_hal_rp2040::{AnalogIn, SpiBus};

/// Analog input with an upper bound on conversion time
pub struct TimedAnalog<A> {
    inner: A,
    deadline: Duration,
}

impl<A> TimedAnalog<A>
where
    A: AnalogIn,
    A::Error: Into<SourceError>,
{
    pub fn new(inner: A, deadline: Duration) -> Self {
        Self { inner, deadline }
    }
}

impl<A> AnalogIn for TimedAnalog<A>
where
    A: AnalogIn,
    A::Error: Into<SourceError>,
{
    type Error = SourceError;

    async fn read(&mut self) -> Result<u16, SourceError> {
        match with_timeout(self.deadline, self.inner.read()).await {
            Ok(result) => result.map_err(Into::into),
            Err(_) => Err(SourceError::Timeout),
        }
    }
}

/// SPI bus with an upper bound on transfer time
pub struct TimedBus<B> {
    inner: B,
    deadline: Duration,
}

impl<B> TimedBus<B>
where
    B: SpiBus,
    B::Error: Into<TransportError>,
{
    pub fn new(inner: B, deadline: Duration) -> Self {
        Self { inner, deadline }
    }
}

impl<B> SpiBus for TimedBus<B>
where
    B: SpiBus,
    B::Error: Into<TransportError>,
{
    type Error = TransportError;

    async fn write(&mut self, words: &[u16]) -> Result<(), TransportError> {
        match with_timeout(self.deadline, self.inner.write(words)).await {
            Ok(result) => result.map_err(Into::into),
            Err(_) => Err(TransportError::Timeout),
        }
    }
}
