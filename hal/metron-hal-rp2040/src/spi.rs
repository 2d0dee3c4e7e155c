//! Transmit-only SPI with 16-bit frames
//!
//! The RP2040 SSP clocks out whatever byte stream it is given, so 16-bit
//! words are serialized most-significant byte first and leave the wire
//! MSB first. The SSP has no CRC unit; `SpiConfig::crc_poly` is accepted
//! and ignored here.

use embassy_rp::spi::{Async, Config, Instance, Phase, Polarity, Spi};
use heapless::Vec;
use metron_core::traits::TransportError;
use metron_hal::spi::SpiConfig;

/// Words serialized per DMA transfer
const CHUNK_WORDS: usize = 32;

/// Map the shared bus parameters onto the embassy-rp SPI config
pub fn config(cfg: &SpiConfig) -> Config {
    let mut out = Config::default();
    out.frequency = cfg.frequency;
    out.polarity = match cfg.polarity {
        metron_hal::spi::Polarity::IdleLow => Polarity::IdleLow,
        metron_hal::spi::Polarity::IdleHigh => Polarity::IdleHigh,
    };
    out.phase = match cfg.phase {
        metron_hal::spi::Phase::CaptureOnFirstTransition => Phase::CaptureOnFirstTransition,
        metron_hal::spi::Phase::CaptureOnSecondTransition => Phase::CaptureOnSecondTransition,
    };
    out
}

/// Transmit-only SPI master (implements `metron_hal::SpiBus`)
pub struct SpiTx<T: Instance + 'static> {
    spi: Spi<'static, T, Async>,
}

impl<T: Instance> SpiTx<T> {
    /// Wrap an embassy-rp SPI peripheral
    pub fn new(spi: Spi<'static, T, Async>) -> Self {
        Self { spi }
    }
}

impl<T: Instance> metron_hal::SpiBus for SpiTx<T> {
    type Error = TransportError;

    async fn write(&mut self, words: &[u16]) -> Result<(), TransportError> {
        for chunk in words.chunks(CHUNK_WORDS) {
            let mut buf: Vec<u8, { CHUNK_WORDS * 2 }> = Vec::new();
            for word in chunk {
                // Capacity matches the chunk size, so the push cannot fail
                let _ = buf.extend_from_slice(&word.to_be_bytes());
            }
            self.spi
                .write(&buf)
                .await
                .map_err(|_| TransportError::Bus)?;
        }
        Ok(())
    }
}
