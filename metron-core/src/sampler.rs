//! The poll/transmit cycle
//!
//! Pairs one analog sample with one bus transfer, forever. Each cycle:
//!
//! 1. Toggle the status indicator
//! 2. Acquire one sample
//! 3. Record it on the observation sink
//! 4. Ship it over the transport
//! 5. Suspend for the configured period
//!
//! There is no retry path: the first acquisition or transport failure
//! aborts the run and surfaces to the caller. Peripherals are injected at
//! construction so host tests can substitute mocks for all of them.

use crate::traits::{
    Delay, Indicator, SampleSink, SampleSource, SampleTransport, SourceError, TransportError,
};

/// Default pause between cycles in milliseconds
pub const DEFAULT_PERIOD_MS: u32 = 1000;

/// How long the cycle should run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunMode {
    /// Run until a peripheral fails (normal operation)
    Forever,
    /// Run a fixed number of cycles, then stop
    Cycles(u32),
}

/// Cycle configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplerConfig {
    /// Pause between cycles in milliseconds
    pub period_ms: u32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
        }
    }
}

/// Errors that abort the cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SamplerError {
    /// Sample acquisition failed
    Source(SourceError),
    /// Sample transmission failed
    Transport(TransportError),
}

impl From<SourceError> for SamplerError {
    fn from(e: SourceError) -> Self {
        SamplerError::Source(e)
    }
}

impl From<TransportError> for SamplerError {
    fn from(e: TransportError) -> Self {
        SamplerError::Transport(e)
    }
}

/// The poll/transmit cycle
///
/// Owns the peripheral handles for the lifetime of the device and
/// sequences them in a fixed order. Exactly one sample is read and one
/// word transmitted per cycle; the transmitted value is always the value
/// just read.
pub struct Sampler<SRC, TX, IND, SNK, DLY> {
    source: SRC,
    transport: TX,
    indicator: IND,
    sink: SNK,
    delay: DLY,
    config: SamplerConfig,
}

impl<SRC, TX, IND, SNK, DLY> Sampler<SRC, TX, IND, SNK, DLY>
where
    SRC: SampleSource,
    TX: SampleTransport,
    IND: Indicator,
    SNK: SampleSink,
    DLY: Delay,
{
    /// Create a new sampler over the given peripherals
    pub fn new(
        source: SRC,
        transport: TX,
        indicator: IND,
        sink: SNK,
        delay: DLY,
        config: SamplerConfig,
    ) -> Self {
        Self {
            source,
            transport,
            indicator,
            sink,
            delay,
            config,
        }
    }

    /// Run the cycle
    ///
    /// Switches the indicator on, then repeats the cycle according to
    /// `mode`. Returns `Ok` only for bounded runs; `RunMode::Forever`
    /// returns only on peripheral failure.
    pub async fn run(&mut self, mode: RunMode) -> Result<(), SamplerError> {
        self.indicator.set_on(true);

        match mode {
            RunMode::Forever => loop {
                self.cycle().await?;
            },
            RunMode::Cycles(count) => {
                for _ in 0..count {
                    self.cycle().await?;
                }
                Ok(())
            }
        }
    }

    /// One poll/transmit cycle
    async fn cycle(&mut self) -> Result<(), SamplerError> {
        self.indicator.toggle();

        let value = self.source.sample().await?;
        self.sink.record(value);
        self.transport.send(value).await?;

        self.delay.delay_ms(self.config.period_ms).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use proptest::prelude::*;

    /// Mock source that replays a fixed sequence of readings
    struct ScriptedSource {
        values: Vec<u16>,
        next: usize,
        fail_at: Option<usize>,
    }

    impl ScriptedSource {
        fn new(values: &[u16]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
                fail_at: None,
            }
        }

        fn failing_at(values: &[u16], cycle: usize) -> Self {
            let mut source = Self::new(values);
            source.fail_at = Some(cycle);
            source
        }
    }

    impl SampleSource for ScriptedSource {
        async fn sample(&mut self) -> Result<u16, SourceError> {
            if self.fail_at == Some(self.next) {
                return Err(SourceError::Fault);
            }
            let value = self.values[self.next];
            self.next += 1;
            Ok(value)
        }
    }

    /// Mock transport that records every transmitted word
    #[derive(Default)]
    struct RecordingTransport {
        sent: Vec<u16>,
        fail_at: Option<usize>,
    }

    impl SampleTransport for RecordingTransport {
        async fn send(&mut self, value: u16) -> Result<(), TransportError> {
            if self.fail_at == Some(self.sent.len()) {
                return Err(TransportError::Bus);
            }
            self.sent.push(value);
            Ok(())
        }
    }

    /// Mock indicator that records the state after every toggle
    #[derive(Default)]
    struct MockIndicator {
        on: bool,
        history: Vec<bool>,
    }

    impl Indicator for MockIndicator {
        fn set_on(&mut self, on: bool) {
            self.on = on;
        }

        fn toggle(&mut self) {
            self.on = !self.on;
            self.history.push(self.on);
        }

        fn is_on(&self) -> bool {
            self.on
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        seen: Vec<u16>,
    }

    impl SampleSink for RecordingSink {
        fn record(&mut self, value: u16) {
            self.seen.push(value);
        }
    }

    /// Mock delay that records every requested pause without sleeping
    #[derive(Default)]
    struct RecordingDelay {
        requests: Vec<u32>,
    }

    impl Delay for RecordingDelay {
        async fn delay_ms(&mut self, ms: u32) {
            self.requests.push(ms);
        }
    }

    fn sampler_over(
        source: ScriptedSource,
        transport: RecordingTransport,
        config: SamplerConfig,
    ) -> Sampler<ScriptedSource, RecordingTransport, MockIndicator, RecordingSink, RecordingDelay>
    {
        Sampler::new(
            source,
            transport,
            MockIndicator::default(),
            RecordingSink::default(),
            RecordingDelay::default(),
            config,
        )
    }

    #[test]
    fn transmits_each_reading_in_order() {
        let mut sampler = sampler_over(
            ScriptedSource::new(&[10, 2047, 0]),
            RecordingTransport::default(),
            SamplerConfig::default(),
        );

        block_on(sampler.run(RunMode::Cycles(3))).unwrap();

        assert_eq!(sampler.transport.sent, vec![10, 2047, 0]);
        // The value on the wire is always the value just read
        assert_eq!(sampler.sink.seen, sampler.transport.sent);
    }

    #[test]
    fn indicator_alternates_every_cycle() {
        let mut sampler = sampler_over(
            ScriptedSource::new(&[1, 2, 3]),
            RecordingTransport::default(),
            SamplerConfig::default(),
        );

        block_on(sampler.run(RunMode::Cycles(3))).unwrap();

        // Starts on, so the first toggle goes off
        assert_eq!(sampler.indicator.history, vec![false, true, false]);
    }

    #[test]
    fn one_transfer_per_sample() {
        let mut sampler = sampler_over(
            ScriptedSource::new(&[7; 5]),
            RecordingTransport::default(),
            SamplerConfig::default(),
        );

        block_on(sampler.run(RunMode::Cycles(5))).unwrap();

        assert_eq!(sampler.source.next, 5);
        assert_eq!(sampler.transport.sent.len(), 5);
        assert_eq!(sampler.sink.seen.len(), 5);
    }

    #[test]
    fn pauses_for_the_configured_period_each_cycle() {
        let mut sampler = sampler_over(
            ScriptedSource::new(&[1, 2, 3]),
            RecordingTransport::default(),
            SamplerConfig::default(),
        );

        block_on(sampler.run(RunMode::Cycles(3))).unwrap();

        assert_eq!(sampler.delay.requests, vec![1000, 1000, 1000]);
    }

    #[test]
    fn period_is_configurable() {
        let mut sampler = sampler_over(
            ScriptedSource::new(&[1]),
            RecordingTransport::default(),
            SamplerConfig { period_ms: 250 },
        );

        block_on(sampler.run(RunMode::Cycles(1))).unwrap();

        assert_eq!(sampler.delay.requests, vec![250]);
    }

    #[test]
    fn zero_cycles_touches_no_peripheral() {
        let mut sampler = sampler_over(
            ScriptedSource::new(&[]),
            RecordingTransport::default(),
            SamplerConfig::default(),
        );

        block_on(sampler.run(RunMode::Cycles(0))).unwrap();

        assert!(sampler.transport.sent.is_empty());
        assert!(sampler.sink.seen.is_empty());
        assert!(sampler.indicator.history.is_empty());
        // Initialization still switches the indicator on
        assert!(sampler.indicator.is_on());
    }

    #[test]
    fn source_failure_aborts_the_run() {
        let mut sampler = sampler_over(
            ScriptedSource::failing_at(&[5, 6], 2),
            RecordingTransport::default(),
            SamplerConfig::default(),
        );

        let result = block_on(sampler.run(RunMode::Cycles(5)));

        assert_eq!(result, Err(SamplerError::Source(SourceError::Fault)));
        // Two good cycles went out before the fault
        assert_eq!(sampler.transport.sent, vec![5, 6]);
        // The failed cycle had already toggled the indicator
        assert_eq!(sampler.indicator.history.len(), 3);
    }

    #[test]
    fn transport_failure_aborts_the_run() {
        let transport = RecordingTransport {
            sent: Vec::new(),
            fail_at: Some(1),
        };
        let mut sampler = sampler_over(
            ScriptedSource::new(&[10, 20, 30]),
            transport,
            SamplerConfig::default(),
        );

        let result = block_on(sampler.run(RunMode::Cycles(3)));

        assert_eq!(result, Err(SamplerError::Transport(TransportError::Bus)));
        assert_eq!(sampler.transport.sent, vec![10]);
        // The sink saw the value even though the transfer failed; the
        // observation stream is not part of the functional contract
        assert_eq!(sampler.sink.seen, vec![10, 20]);
    }

    proptest! {
        #[test]
        fn any_sequence_round_trips_unchanged(values in prop::collection::vec(any::<u16>(), 0..32)) {
            let mut sampler = sampler_over(
                ScriptedSource::new(&values),
                RecordingTransport::default(),
                SamplerConfig::default(),
            );

            block_on(sampler.run(RunMode::Cycles(values.len() as u32))).unwrap();

            prop_assert_eq!(&sampler.transport.sent, &values);
            prop_assert_eq!(sampler.delay.requests.len(), values.len());
            // One toggle per cycle from "on": ends on iff the count is even
            prop_assert_eq!(sampler.indicator.is_on(), values.len() % 2 == 0);
        }
    }
}
