//! Sampler task
//!
//! Owns the four peripherals and runs the poll/transmit cycle until a
//! peripheral fails. There is no retry path: a failure stops the task and
//! the device goes quiet until the next reset.

use defmt::*;
use embassy_rp::adc::{Adc, Async as AdcAsync, Channel};
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Async as SpiAsync, Spi};
use embassy_time::Duration;

use metron_core::sampler::{RunMode, Sampler, SamplerConfig};
use metron_drivers::indicator::GpioIndicator;
use metron_drivers::source::AnalogSource;
use metron_drivers::transport::CsGatedSpi;
use metron_hal_rp2040::adc::AdcInput;
use metron_hal_rp2040::delay::TimerDelay;
use metron_hal_rp2040::gpio::OutputPin;
use metron_hal_rp2040::spi::SpiTx;

use crate::sink::LogSink;
use crate::timeout::{TimedAnalog, TimedBus};

/// Pause between cycles
const CYCLE_PERIOD_MS: u32 = 1000;

/// Upper bound on one analog conversion
const SAMPLE_TIMEOUT: Duration = Duration::from_millis(50);

/// Upper bound on one 16-bit transfer
const TRANSFER_TIMEOUT: Duration = Duration::from_millis(50);

/// Sampler task - one sample, one transfer, one blink per second
#[embassy_executor::task]
pub async fn sampler_task(
    adc: Adc<'static, AdcAsync>,
    channel: Channel<'static>,
    led: Output<'static>,
    cs: Output<'static>,
    spi: Spi<'static, SPI1, SpiAsync>,
) {
    info!("Sampler task started");

    let source = AnalogSource::new(TimedAnalog::new(
        AdcInput::new(adc, channel),
        SAMPLE_TIMEOUT,
    ));
    let transport = CsGatedSpi::new(
        TimedBus::new(SpiTx::new(spi), TRANSFER_TIMEOUT),
        OutputPin::new(cs),
    );
    let indicator = GpioIndicator::new_active_high(OutputPin::new(led));

    let config = SamplerConfig {
        period_ms: CYCLE_PERIOD_MS,
    };
    let mut sampler = Sampler::new(source, transport, indicator, LogSink, TimerDelay, config);

    // Forever only returns on peripheral failure
    if let Err(e) = sampler.run(RunMode::Forever).await {
        error!("Sampler stopped: {}", e);
    }
}
