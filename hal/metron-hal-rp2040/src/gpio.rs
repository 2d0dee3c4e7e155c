//! GPIO output pins backed by embassy-rp

use embassy_rp::gpio::Output;

/// Push-pull output pin (implements `metron_hal::OutputPin`)
pub struct OutputPin {
    inner: Output<'static>,
}

impl OutputPin {
    /// Wrap an embassy-rp output pin
    pub fn new(inner: Output<'static>) -> Self {
        Self { inner }
    }
}

impl metron_hal::OutputPin for OutputPin {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn toggle(&mut self) {
        self.inner.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }
}
