//! mms-verify — checks the closed-form server count for the M/M/s reference
//! scenario by simulation.
//!
//! A bank branch sees 4 customers a minute; each teller serves 0.25 a minute.
//! The branch wants no more than 50 people inside for 95 % of the time.  The
//! geometric-tail bound says 17 tellers suffice.  This binary runs the
//! simulator for 17 and for 15 tellers (or any list given with `--servers`),
//! prints each verdict, and writes traces for plotting.
//!
//! ```text
//! mms-verify                               # s = 17 and s = 15, seed 0
//! mms-verify --servers 14,16,17,18 --trials 50
//! mms-verify --config scenario.json --output out/
//! RUST_LOG=mms_sim=trace mms-verify --servers 3
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use mms_core::SimConfig;
use mms_output::{CsvWriter, RunOutputObserver};
use mms_sim::{NoopObserver, Report, SimBuilder, SimObserver, analytic, sweep_seeds};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Scenario JSON file.  Missing fields take the reference values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Server counts to simulate, comma separated.
    #[arg(long, value_delimiter = ',', default_value = "17,15")]
    servers: Vec<u32>,

    /// Random seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Extra seeded trials per server count for a compliance tally.
    #[arg(long, default_value_t = 0)]
    trials: u64,

    /// Directory for CSV traces and `reports.json`.
    #[arg(long, default_value = "output/verify")]
    output: PathBuf,

    /// Print reports only; write no files.
    #[arg(long)]
    no_output: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig::reference(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

/// Closed-form bound and server count, or `None` where the tail formula is
/// undefined (limit 0, target 0).  Simulation still runs in that case.
fn closed_form(config: &SimConfig) -> Option<(f64, u32)> {
    let bound = analytic::server_bound(
        config.arrival_rate,
        config.service_rate,
        config.queue_length_limit,
        config.target_probability,
    );
    match (bound, analytic::min_servers_for(config)) {
        (Ok(bound), Ok(needed)) => Some((bound, needed)),
        (Err(e), _) | (_, Err(e)) => {
            warn!(error = %e, "no closed-form bound for this config");
            None
        }
    }
}

/// Run one traced simulation per server count.
fn run_all<O: SimObserver>(
    base:     &SimConfig,
    servers:  &[u32],
    observer: &mut O,
) -> Result<Vec<Report>> {
    let mut reports = Vec::with_capacity(servers.len());
    for &server_count in servers {
        let sim = SimBuilder::new(SimConfig { server_count, ..base.clone() }).build()?;
        reports.push(sim.run(observer)?.report);
    }
    Ok(reports)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let base = load_config(&args)?;
    println!("=== mms-verify — M/M/s occupancy check ===");
    println!(
        "λ = {:.4}/min  |  ν = {:.4}/min  |  λ/ν = {:.2}  |  N = {}  |  limit = {}  |  seed = {}",
        base.arrival_rate * 60.0,
        base.service_rate * 60.0,
        base.offered_load(),
        base.entity_count,
        base.queue_length_limit,
        base.seed,
    );
    match closed_form(&base) {
        Some((bound, needed)) => println!(
            "Closed form: s ≥ {bound:.4} → {needed} servers keep P(N ≥ {}) ≤ {:.2} %",
            base.threshold(),
            base.target_probability * 100.0,
        ),
        None => println!("Closed form: n/a"),
    }
    println!();

    // 1. One traced run per server count.
    let mut obs = if args.no_output {
        None
    } else {
        fs::create_dir_all(&args.output)
            .with_context(|| format!("creating {}", args.output.display()))?;
        Some(RunOutputObserver::new(CsvWriter::new(&args.output)?))
    };

    let t0 = Instant::now();
    let reports = match obs.as_mut() {
        Some(o) => run_all(&base, &args.servers, o)?,
        None => run_all(&base, &args.servers, &mut NoopObserver)?,
    };
    for report in &reports {
        println!("{report}");
        println!();
    }
    info!(runs = reports.len(), elapsed_ms = t0.elapsed().as_millis() as u64, "runs complete");

    if let Some(mut o) = obs {
        o.finish()?;
        let path = args.output.join("reports.json");
        fs::write(&path, serde_json::to_vec_pretty(&reports)?)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Traces written to {}", args.output.display());
        println!();
    }

    // 2. Optional compliance tally over independent seeds.
    if args.trials > 0 {
        let seeds: Vec<u64> = (0..args.trials).map(|k| base.seed.wrapping_add(k + 1)).collect();

        println!("{:<8} {:>8} {:>12} {:>14}", "Servers", "Trials", "Met target", "Mean fraction");
        println!("{}", "-".repeat(45));
        for &server_count in &args.servers {
            let trial = sweep_seeds(&SimConfig { server_count, ..base.clone() }, &seeds)?;
            let met = trial.iter().filter(|r| r.meets_spec).count();
            let mean = trial.iter().map(|r| r.violation_fraction).sum::<f64>() / trial.len() as f64;
            println!(
                "{:<8} {:>8} {:>12} {:>13.2}%",
                server_count,
                trial.len(),
                met,
                mean * 100.0,
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_has_closed_form() {
        let (bound, needed) = closed_form(&SimConfig::reference()).unwrap();
        assert!(bound > 16.0 && bound <= 17.0);
        assert_eq!(needed, 17);
    }

    #[test]
    fn zero_limit_skips_closed_form_but_runs() {
        let base = SimConfig { queue_length_limit: 0, entity_count: 100, ..SimConfig::reference() };
        base.validate().unwrap();
        assert!(closed_form(&base).is_none());

        let reports = run_all(&base, &[17, 15], &mut NoopObserver).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.threshold == 1));
    }

    #[test]
    fn zero_target_skips_closed_form_but_runs() {
        let base = SimConfig { target_probability: 0.0, entity_count: 100, ..SimConfig::reference() };
        assert!(closed_form(&base).is_none());
        assert_eq!(run_all(&base, &[17], &mut NoopObserver).unwrap().len(), 1);
    }
}
