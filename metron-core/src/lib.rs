//! Board-agnostic core logic for the Metron telemetry firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Peripheral abstraction traits (sample source, transport, indicator,
//!   observation sink, cycle delay)
//! - The poll/transmit cycle that paces the whole device
//! - Run modes for unbounded operation and bounded test runs

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![allow(async_fn_in_trait)]

pub mod sampler;
pub mod traits;
