//! Analog input abstractions
//!
//! Provides a trait for one-shot analog sampling that can be implemented
//! by chip-specific HALs.

/// Single analog input channel
///
/// Implementations own the converter (or one channel of it) and run one
/// conversion per call, blocking until the sample-and-hold completes.
pub trait AnalogIn {
    /// Error type for conversion failures
    type Error;

    /// Sample the channel once
    ///
    /// Returns the raw conversion result, right-aligned and zero-extended
    /// to 16 bits. No scaling is applied.
    async fn read(&mut self) -> Result<u16, Self::Error>;
}
