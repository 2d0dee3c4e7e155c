//! Cycle delay trait

/// Trait for suspending the cycle between transmissions
///
/// Implementations yield to the platform's timer; resolution is whatever
/// the platform provides, so the pause is a lower bound.
pub trait Delay {
    /// Suspend for at least `ms` milliseconds
    async fn delay_ms(&mut self, ms: u32);
}
