//! Hardware abstraction traits
//!
//! These traits define the interface between the sampling cycle
//! and hardware-specific implementations.

pub mod delay;
pub mod indicator;
pub mod sink;
pub mod source;
pub mod transport;

pub use delay::Delay;
pub use indicator::Indicator;
pub use sink::SampleSink;
pub use source::{SampleSource, SourceError};
pub use transport::{SampleTransport, TransportError};
