//! Status indicator trait

/// Trait for the board's status indicator
///
/// Implementations drive an LED, directly or through a transistor.
/// Nothing reads the indicator back except the indicator itself; it exists
/// so a passer-by can see the cycle is alive.
pub trait Indicator {
    /// Turn the indicator on or off
    fn set_on(&mut self, on: bool);

    /// Flip the indicator state
    fn toggle(&mut self);

    /// Check if the indicator is currently on
    fn is_on(&self) -> bool;
}
