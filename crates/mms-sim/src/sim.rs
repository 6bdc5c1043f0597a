//! The `Sim` struct and its run pipeline.

use mms_core::{EntityId, ExpVariates, Rounding, SimConfig, VariateSource};
use tracing::{debug, trace};

use crate::{
    Entity, NoopObserver, OccupancyTimeline, Report, ServerPool, SimBuilder, SimObserver,
    SimResult, integrate, schedule_arrivals,
};

/// Pre-drawn durations in ticks, one pair per entity.
#[derive(Debug, Clone)]
pub(crate) struct Samples {
    pub(crate) gaps:     Vec<u64>,
    pub(crate) services: Vec<u64>,
}

/// Everything a run produces.
#[derive(Debug, Clone)]
pub struct Run {
    pub report:   Report,
    /// Placed entities in arrival order.
    pub entities: Vec<Entity>,
}

/// One M/M/s experiment.
///
/// A run is a single sequential pass:
///
/// 1. **Draw** `N` interarrival gaps and `N` service durations, quantized to
///    ticks.
/// 2. **Schedule** absolute arrival ticks (cumulative sum of gaps).
/// 3. **Allocate** each entity, in arrival order, to a server.
/// 4. **Timeline**: `+1` at each arrival, `-1` at each completion.
/// 5. **Integrate** the timeline into occupancy and count violations.
///
/// Create via [`SimBuilder`][crate::SimBuilder].  Runs share nothing, so
/// several `Sim`s may execute on different threads.
#[derive(Debug, Clone)]
pub struct Sim {
    pub(crate) config:  SimConfig,
    pub(crate) samples: Option<Samples>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// The validated configuration this run uses.
    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run with the injected samples if any, otherwise with exponential
    /// variates seeded from `config.seed`.
    pub fn run<O: SimObserver>(&self, observer: &mut O) -> SimResult<Run> {
        observer.on_run_start(&self.config);

        let (gaps, services) = match &self.samples {
            Some(s) => (s.gaps.clone(), s.services.clone()),
            None => {
                let cfg = &self.config;
                let mut source = ExpVariates::new(cfg.seed, cfg.arrival_rate, cfg.service_rate)?;
                draw(&mut source, cfg.entity_count as usize, cfg.rounding)
            }
        };

        Ok(self.simulate(&gaps, &services, observer))
    }

    /// Run with durations drawn from `source`, ignoring any injected samples.
    pub fn run_with_source<V: VariateSource, O: SimObserver>(
        &self,
        source:   &mut V,
        observer: &mut O,
    ) -> SimResult<Run> {
        observer.on_run_start(&self.config);
        let (gaps, services) = draw(source, self.config.entity_count as usize, self.config.rounding);
        Ok(self.simulate(&gaps, &services, observer))
    }

    // ── Pipeline ──────────────────────────────────────────────────────────

    fn simulate<O: SimObserver>(&self, gaps: &[u64], services: &[u64], observer: &mut O) -> Run {
        let cfg = &self.config;
        debug!(
            servers  = cfg.server_count,
            entities = gaps.len(),
            seed     = cfg.seed,
            "run started"
        );

        let arrivals = schedule_arrivals(gaps);
        let mut pool = ServerPool::new(cfg.server_count);
        let mut entities = Vec::with_capacity(gaps.len());
        let mut waited = 0u64;

        for (i, ((&gap, &service), &arrival)) in
            gaps.iter().zip(services).zip(&arrivals).enumerate()
        {
            let placed = pool.assign(arrival, service);
            trace!(
                entity = i,
                server = %placed.server,
                start  = placed.start.0,
                waited = placed.waited,
                "assigned"
            );
            waited += placed.waited as u64;

            let entity = Entity {
                id: EntityId(i as u32),
                gap,
                service,
                arrival,
                start: placed.start,
                end: placed.end,
                server: placed.server,
            };
            observer.on_entity(&entity);
            entities.push(entity);
        }

        let timeline = OccupancyTimeline::build(&entities);
        let occupancy = integrate(&timeline, cfg.threshold());
        let violation_fraction = occupancy.violation_fraction();

        let report = Report {
            arrival_rate:       cfg.arrival_rate,
            service_rate:       cfg.service_rate,
            server_count:       cfg.server_count,
            seed:               cfg.seed,
            threshold:          occupancy.threshold,
            violation_tally:    occupancy.violations,
            violation_fraction,
            target_probability: cfg.target_probability,
            meets_spec:         violation_fraction <= cfg.target_probability,
            simulated_duration: occupancy.series.len() as u64,
            peak_occupancy:     occupancy.peak(),
            waited,
            occupancy_series:   occupancy.series,
        };

        debug!(
            servers  = report.server_count,
            duration = report.simulated_duration,
            fraction = report.violation_fraction,
            meets    = report.meets_spec,
            "run finished"
        );
        observer.on_run_end(&report);

        Run { report, entities }
    }
}

/// Draw `n` gaps, then `n` service durations, quantized with `rounding`.
fn draw<V: VariateSource>(source: &mut V, n: usize, rounding: Rounding) -> (Vec<u64>, Vec<u64>) {
    let gaps = (0..n).map(|_| rounding.quantize(source.interarrival_secs())).collect();
    let services = (0..n).map(|_| rounding.quantize(source.service_secs())).collect();
    (gaps, services)
}

/// Validate `config`, run it once with its own seed, and return the report.
pub fn run_simulation(config: &SimConfig) -> SimResult<Report> {
    let sim = SimBuilder::new(config.clone()).build()?;
    Ok(sim.run(&mut NoopObserver)?.report)
}
