//! intersection — evaluate a signal control policy on one intersection.
//!
//! Runs the tick loop for a configured number of ticks and prints how many
//! vehicles passed, how many are still queued, and their average delay.
//! With `--replications N` it repeats the run under N derived seeds and
//! reports the spread instead.
//!
//! ```text
//! intersection --ticks 2000 --arrival-rate 0.4 --policy rule-based --threshold 5
//! intersection --config experiment.json --replications 20 --output out/
//! ```

mod experiment;


use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tsc_core::SimConfig;
use tsc_output::{CsvWriter, SimOutputObserver, write_replications};
use tsc_sim::{NoopObserver, ReplicationSummary, RunSummary, SimBuilder, replication_seeds, run_replications};
use tsc_traffic::BernoulliArrivals;

use experiment::{Cli, Experiment};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let experiment = Experiment::resolve(&cli)?;
    info!("experiment: {:?}", experiment);

    if let Some(dir) = &cli.output {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    if cli.replications > 1 {
        run_batch(&experiment, cli.replications as usize, cli.output.as_deref())
    } else {
        run_single(&experiment, cli.output.as_deref())
    }
}

fn run_single(experiment: &Experiment, output: Option<&Path>) -> Result<()> {
    let config = experiment.sim.clone();
    let arrivals = BernoulliArrivals::from_config(&config)?;
    let mut sim = SimBuilder::new(config.clone(), experiment.policy.build()?, arrivals).build()?;

    let t0 = Instant::now();
    let summary = match output {
        Some(dir) => {
            let mut obs = SimOutputObserver::new(CsvWriter::new(dir)?, &config);
            let summary = sim.run(&mut obs);
            if let Some(e) = obs.take_error() {
                eprintln!("output error: {e}");
            }
            summary
        }
        None => sim.run(&mut NoopObserver),
    };

    println!("Simulation complete in {:.3} s", t0.elapsed().as_secs_f64());
    print_summary(&config, &summary);
    Ok(())
}

fn run_batch(experiment: &Experiment, count: usize, output: Option<&Path>) -> Result<()> {
    let seeds = replication_seeds(experiment.sim.seed, count);
    let t0 = Instant::now();
    let results = run_replications(&seeds, |seed| {
        let config = SimConfig { seed, ..experiment.sim.clone() };
        let arrivals = BernoulliArrivals::from_config(&config)?;
        SimBuilder::new(config, experiment.policy.build()?, arrivals).build()
    })?;
    println!("{count} replications complete in {:.3} s", t0.elapsed().as_secs_f64());

    println!("{:<22} {:>9} {:>9} {:>11} {:>9}", "Seed", "Passed", "Queued", "Avg delay", "Switches");
    println!("{}", "-".repeat(64));
    for r in &results {
        println!(
            "{:<22} {:>9} {:>9} {:>11.2} {:>9}",
            r.seed, r.summary.delay.count, r.summary.remaining, r.summary.delay.average, r.summary.switches,
        );
    }
    let (mean, sd) = mean_and_sd(&results);
    println!();
    println!("Average delay across replications: {mean:.2} ± {sd:.2} ticks");

    if let Some(dir) = output {
        write_replications(dir, &results)?;
        println!("Wrote {}", dir.join("replications.csv").display());
    }
    Ok(())
}

fn print_summary(config: &SimConfig, summary: &RunSummary) {
    println!("  Ticks             : {}", summary.ticks);
    println!("  Arrival rate      : {}", config.arrival_rate);
    println!("  Vehicles arrived  : {}", summary.spawned);
    println!("  Vehicles passed   : {}", summary.delay.count);
    println!("  Vehicles queued   : {}", summary.remaining);
    println!("  Average delay     : {:.2} ticks", summary.delay.average);
    println!("  Max delay         : {} ticks", summary.delay.max);
    println!(
        "  Phase switches    : {} ({} forced at max green)",
        summary.switches, summary.forced_switches
    );
}

/// Sample mean and standard deviation of per-replication average delay.
fn mean_and_sd(results: &[ReplicationSummary]) -> (f64, f64) {
    let n = results.len() as f64;
    if results.is_empty() {
        return (0.0, 0.0);
    }
    let mean = results.iter().map(|r| r.summary.delay.average).sum::<f64>() / n;
    if results.len() < 2 {
        return (mean, 0.0);
    }
    let var = results
        .iter()
        .map(|r| (r.summary.delay.average - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    (mean, var.sqrt())
}
