//! Fluent builder for constructing a [`Sim`].

use mms_core::SimConfig;

use crate::sim::Samples;
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs
///
/// | Method                   | Default                                  |
/// |--------------------------|------------------------------------------|
/// | `.samples(gaps, svc)`    | Exponential variates from `config.seed`  |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(SimConfig { server_count: 15, ..SimConfig::reference() })
///     .build()?;
/// let run = sim.run(&mut NoopObserver)?;
/// println!("{}", run.report);
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    samples: Option<Samples>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, samples: None }
    }

    /// Supply pre-drawn gaps and service durations, in ticks.
    ///
    /// Both must have length `config.entity_count`.  The rates in the config
    /// are then only carried through to the report.
    pub fn samples(mut self, gaps: Vec<u64>, services: Vec<u64>) -> Self {
        self.samples = Some(Samples { gaps, services });
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    ///
    /// Fails before any event processing on an invalid config or on sample
    /// vectors of the wrong length.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        if let Some(s) = &self.samples {
            let expected = self.config.entity_count as usize;
            for (what, got) in [("interarrival gaps", s.gaps.len()), ("service durations", s.services.len())] {
                if got != expected {
                    return Err(SimError::SampleCountMismatch { expected, got, what });
                }
            }
        }

        Ok(Sim {
            config:  self.config,
            samples: self.samples,
        })
    }
}
