//! Status indicator drivers

pub mod gpio;

pub use gpio::GpioIndicator;
