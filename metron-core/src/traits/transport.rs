//! Sample transport trait

/// Errors that can occur while shipping a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// The transfer did not complete within the allowed window
    Timeout,
    /// The underlying bus rejected the transfer
    Bus,
}

/// Trait for shipping one sample to the companion device
///
/// Implementations transmit the value as a single 16-bit word and handle
/// any per-transfer device selection themselves. One call, one word on the
/// wire; there is no batching.
pub trait SampleTransport {
    /// Transmit one 16-bit word, blocking until it has been clocked out
    async fn send(&mut self, value: u16) -> Result<(), TransportError>;
}
