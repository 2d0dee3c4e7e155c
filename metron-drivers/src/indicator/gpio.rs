//! GPIO status indicator
//!
//! Drives an LED through a GPIO pin, directly or via a transistor.

use metron_core::traits::Indicator;
use metron_hal::OutputPin;

/// GPIO-driven indicator
///
/// The pin can be configured as active-high (default) or active-low for
/// boards that sink the LED current.
pub struct GpioIndicator<P> {
    pin: P,
    /// If true, indicator ON = pin LOW
    inverted: bool,
    /// Current logical state (true = indicator on)
    on: bool,
}

impl<P: OutputPin> GpioIndicator<P> {
    /// Create a new GPIO indicator, initially off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the indicator is ON when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut indicator = Self {
            pin,
            inverted,
            on: false,
        };
        indicator.set_on(false);
        indicator
    }

    /// Create a new GPIO indicator with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new GPIO indicator with active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> Indicator for GpioIndicator<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;

        if on != self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn toggle(&mut self) {
        let next = !self.on;
        self.set_on(next);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
