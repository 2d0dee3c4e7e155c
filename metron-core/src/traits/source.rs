//! Sample acquisition trait

/// Errors that can occur while acquiring a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceError {
    /// The conversion did not complete within the allowed window
    Timeout,
    /// The converter reported a hardware fault
    Fault,
}

/// Trait for one-shot sample acquisition
///
/// Implementations block until the conversion completes and return the raw
/// result zero-extended to 16 bits. No scaling or filtering is applied;
/// the value goes onto the wire exactly as read.
///
/// Takes `&mut self` because starting a conversion requires mutable access
/// to the converter.
pub trait SampleSource {
    /// Acquire one sample
    async fn sample(&mut self) -> Result<u16, SourceError>;
}
