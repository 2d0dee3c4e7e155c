//! Metron - Analog telemetry smoke-test firmware
//!
//! Main firmware binary for RP2040-based boards. Samples one analog
//! channel once a second, clocks each raw reading out over a
//! chip-select-gated SPI link to a companion logger, and toggles the
//! on-board LED once per cycle.
//!
//! Named after the Greek "metron" (μέτρον) meaning "measure" - one
//! measurement per heartbeat, straight onto the wire.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::spi::Spi;
use {defmt_rtt as _, panic_probe as _};

use metron_hal_rp2040::spi as rp_spi;
use metron_hal_rp2040::{Phase, Polarity, SpiConfig};

mod sink;
mod tasks;
mod timeout;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Clock rate of the logger link
const SPI_FREQUENCY_HZ: u32 = 400_000;

/// CRC-8 polynomial advertised to the logger's bus hardware
///
/// The RP2040 SSP cannot compute it; the far side may. Nothing on this
/// board checks it.
const SPI_CRC_POLY: u8 = 0x07;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Metron firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // On-board LED; the sampler switches it on before the first cycle
    let led = Output::new(p.PIN_25, Level::Low);

    // Analog input on ADC0 (GPIO26)
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let analog_channel = Channel::new_pin(p.PIN_26, Pull::None);

    // Chip select for the logger, idle deselected
    let cs = Output::new(p.PIN_5, Level::High);

    // Transmit-only SPI to the logger (SPI1: SCK=GPIO10, MOSI=GPIO11).
    // Mode 2 at 400 kHz, 16-bit frames MSB first.
    let bus_config = SpiConfig {
        frequency: SPI_FREQUENCY_HZ,
        polarity: Polarity::IdleHigh,
        phase: Phase::CaptureOnFirstTransition,
        crc_poly: Some(SPI_CRC_POLY),
    };
    let spi = Spi::new_txonly(
        p.SPI1,
        p.PIN_10,
        p.PIN_11,
        p.DMA_CH0,
        rp_spi::config(&bus_config),
    );

    info!("ADC and SPI initialized");

    // Spawn tasks
    spawner
        .spawn(tasks::sampler_task(adc, analog_channel, led, cs, spi))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in the sampler
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
