//! Independent replications of the same experiment.
//!
//! A single run of a stochastic simulation says little about a policy; the
//! usual practice is to repeat it under different seeds and compare the
//! spread.  Replications share nothing, so with the `parallel` feature they
//! run on Rayon's thread pool.  Results come back in seed order either way.

use tsc_control::ControlPolicy;
use tsc_core::SimRng;
use tsc_traffic::ArrivalModel;

use crate::{NoopObserver, RunSummary, Sim, SimResult};

/// The outcome of one replication.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReplicationSummary {
    pub seed:    u64,
    pub summary: RunSummary,
}

/// Derive `count` replication seeds deterministically from `root_seed`.
pub fn replication_seeds(root_seed: u64, count: usize) -> Vec<u64> {
    let mut root = SimRng::new(root_seed);
    (0..count).map(|i| root.child(i as u64).random()).collect()
}

/// Build one simulation per seed with `build`, run each to its
/// `config.end_tick()`, and collect the summaries.
///
/// `build` is called on the worker that runs the replication, so the
/// simulation itself never crosses threads.  The first build error aborts
/// the batch.
pub fn run_replications<P, A, F>(seeds: &[u64], build: F) -> SimResult<Vec<ReplicationSummary>>
where
    P: ControlPolicy,
    A: ArrivalModel,
    F: Fn(u64) -> SimResult<Sim<P, A>> + Sync,
{
    let run_one = |seed: u64| -> SimResult<ReplicationSummary> {
        let mut sim = build(seed)?;
        let summary = sim.run(&mut NoopObserver);
        Ok(ReplicationSummary { seed, summary })
    };

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run_one(seed)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| run_one(seed)).collect()
    }
}
