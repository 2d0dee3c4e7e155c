//! Chip-select gated SPI transport
//!
//! Wraps a transmit-only SPI bus together with the chip-select line of the
//! far device. The select line is driven low immediately before each
//! transfer and back high immediately after it completes — on bus errors
//! too — so the device is never left selected between cycles.

use metron_core::traits::{SampleTransport, TransportError};
use metron_hal::{OutputPin, SpiBus};

/// SPI transport with a dedicated chip-select line
pub struct CsGatedSpi<B, P> {
    bus: B,
    cs: P,
}

impl<B, P> CsGatedSpi<B, P>
where
    B: SpiBus,
    B::Error: Into<TransportError>,
    P: OutputPin,
{
    /// Create a new transport, deselecting the device
    pub fn new(bus: B, mut cs: P) -> Self {
        cs.set_high();
        Self { bus, cs }
    }
}

impl<B, P> SampleTransport for CsGatedSpi<B, P>
where
    B: SpiBus,
    B::Error: Into<TransportError>,
    P: OutputPin,
{
    async fn send(&mut self, value: u16) -> Result<(), TransportError> {
        self.cs.set_low();
        let result = self.bus.write(&[value]).await;
        self.cs.set_high();
        result.map_err(Into::into)
    }
}
