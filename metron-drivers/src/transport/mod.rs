//! Sample transport drivers

pub mod cs_gated;

pub use cs_gated::CsGatedSpi;
