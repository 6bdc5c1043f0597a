//! Independent runs over several server counts.
//!
//! Every run gets a clone of `base` with only `server_count` changed, so all
//! runs see the same arrival and service samples.  Runs share no state; with
//! the `parallel` feature they execute on Rayon's pool.  A single run is
//! never split.

use mms_core::SimConfig;

use crate::{Report, SimResult, run_simulation};

/// One report per entry of `counts`, in the same order.
///
/// Fails on the first invalid count (e.g. 0).
pub fn sweep_servers(base: &SimConfig, counts: &[u32]) -> SimResult<Vec<Report>> {
    let configs: Vec<SimConfig> = counts
        .iter()
        .map(|&server_count| SimConfig { server_count, ..base.clone() })
        .collect();

    #[cfg(not(feature = "parallel"))]
    {
        configs.iter().map(run_simulation).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        configs.par_iter().map(run_simulation).collect()
    }
}

/// Run `base` once per seed in `seeds`.
pub fn sweep_seeds(base: &SimConfig, seeds: &[u64]) -> SimResult<Vec<Report>> {
    let configs: Vec<SimConfig> = seeds
        .iter()
        .map(|&seed| SimConfig { seed, ..base.clone() })
        .collect();

    #[cfg(not(feature = "parallel"))]
    {
        configs.iter().map(run_simulation).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        configs.par_iter().map(run_simulation).collect()
    }
}
