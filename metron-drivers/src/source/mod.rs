//! Sample source drivers

pub mod analog;

pub use analog::AnalogSource;
