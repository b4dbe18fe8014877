//! Experiment definition: JSON file plus command-line overrides.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tsc_control::PolicyConfig;
use tsc_core::SimConfig;

/// Queue threshold used when `--policy rule-based` is given without `--threshold`.
const DEFAULT_THRESHOLD: usize = 5;
/// Green split used when `--policy fixed-time` is given without `--green-ticks`.
const DEFAULT_GREEN_TICKS: u64 = 15;
/// Hysteresis used when `--policy max-pressure` is given without `--margin`.
const DEFAULT_MARGIN: usize = 0;

#[derive(Parser, Debug)]
#[command(name = "intersection")]
#[command(about = "Simulate one signalized intersection and report vehicle delay")]
pub struct Cli {
    /// JSON experiment file with optional `sim` and `policy` sections
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Master RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Arrival probability per approach per tick, in [0, 1]
    #[arg(long)]
    pub arrival_rate: Option<f64>,

    /// Vehicles released per green tick
    #[arg(long)]
    pub capacity: Option<u32>,

    #[arg(long)]
    pub min_green: Option<u64>,

    #[arg(long)]
    pub max_green: Option<u64>,

    /// Control policy; replaces the experiment file's `policy` section
    /// unless it names the same kind
    #[arg(long, value_enum)]
    pub policy: Option<PolicyKind>,

    /// Red-queue threshold for the rule-based policy
    #[arg(long)]
    pub threshold: Option<usize>,

    /// Green duration for the fixed-time policy
    #[arg(long)]
    pub green_ticks: Option<u64>,

    /// Queue-difference margin for the max-pressure policy
    #[arg(long)]
    pub margin: Option<usize>,

    /// Directory for CSV output; nothing is written when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Run this many independent replications instead of a single run
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub replications: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    RuleBased,
    FixedTime,
    MaxPressure,
    Hold,
}

impl PolicyKind {
    fn of(policy: &PolicyConfig) -> Self {
        match policy {
            PolicyConfig::RuleBased { .. } => PolicyKind::RuleBased,
            PolicyConfig::FixedTime { .. } => PolicyKind::FixedTime,
            PolicyConfig::MaxPressure { .. } => PolicyKind::MaxPressure,
            PolicyConfig::Hold => PolicyKind::Hold,
        }
    }

    fn label(self) -> &'static str {
        match self {
            PolicyKind::RuleBased   => "rule-based",
            PolicyKind::FixedTime   => "fixed-time",
            PolicyKind::MaxPressure => "max-pressure",
            PolicyKind::Hold        => "hold",
        }
    }

    /// The policy of this kind with every tunable at its CLI default.
    fn default_config(self) -> PolicyConfig {
        match self {
            PolicyKind::RuleBased   => PolicyConfig::RuleBased { threshold: DEFAULT_THRESHOLD },
            PolicyKind::FixedTime   => PolicyConfig::FixedTime { green_ticks: DEFAULT_GREEN_TICKS },
            PolicyKind::MaxPressure => PolicyConfig::MaxPressure { margin: DEFAULT_MARGIN },
            PolicyKind::Hold        => PolicyConfig::Hold,
        }
    }
}

/// Contents of an experiment file.  Both sections are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExperimentFile {
    pub sim:    SimConfig,
    pub policy: Option<PolicyConfig>,
}

impl ExperimentFile {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing experiment file {}", path.display()))
    }
}

/// A fully resolved experiment.
#[derive(Debug)]
pub struct Experiment {
    pub sim:    SimConfig,
    pub policy: PolicyConfig,
}

impl Experiment {
    /// Start from the experiment file (or defaults) and apply CLI overrides.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => ExperimentFile::load(path)?,
            None => ExperimentFile::default(),
        };
        Self::from_parts(file, cli)
    }

    /// Merge an already-parsed experiment file with CLI overrides.
    pub fn from_parts(file: ExperimentFile, cli: &Cli) -> Result<Self> {
        let mut sim = file.sim;
        if let Some(v) = cli.ticks        { sim.total_ticks = v; }
        if let Some(v) = cli.seed         { sim.seed = v; }
        if let Some(v) = cli.arrival_rate { sim.arrival_rate = v; }
        if let Some(v) = cli.capacity     { sim.discharge_capacity = v; }
        if let Some(v) = cli.min_green    { sim.timing.min_green = v; }
        if let Some(v) = cli.max_green    { sim.timing.max_green = v; }
        sim.validate().context("invalid simulation configuration")?;

        let policy = resolve_policy(cli, file.policy)?;
        Ok(Self { sim, policy })
    }
}

/// Pick the policy kind, then apply whichever tunable flags belong to it.
///
/// `--policy` wins over the file; a file policy of the same kind still
/// supplies its tunables.  A tunable flag for a different kind is an error.
fn resolve_policy(cli: &Cli, file: Option<PolicyConfig>) -> Result<PolicyConfig> {
    let base = match (cli.policy, file) {
        (Some(kind), Some(policy)) if PolicyKind::of(&policy) == kind => policy,
        (Some(kind), _) => kind.default_config(),
        (None, Some(policy)) => policy,
        (None, None) => PolicyKind::RuleBased.default_config(),
    };
    let kind = PolicyKind::of(&base);

    let flags = [
        ("--threshold", cli.threshold.is_some(), PolicyKind::RuleBased),
        ("--green-ticks", cli.green_ticks.is_some(), PolicyKind::FixedTime),
        ("--margin", cli.margin.is_some(), PolicyKind::MaxPressure),
    ];
    for (flag, given, owner) in flags {
        if given && owner != kind {
            bail!("{flag} only applies to the {} policy, but the {} policy is selected", owner.label(), kind.label());
        }
    }

    Ok(match base {
        PolicyConfig::RuleBased { threshold } => PolicyConfig::RuleBased {
            threshold: cli.threshold.unwrap_or(threshold),
        },
        PolicyConfig::FixedTime { green_ticks } => PolicyConfig::FixedTime {
            green_ticks: cli.green_ticks.unwrap_or(green_ticks),
        },
        PolicyConfig::MaxPressure { margin } => PolicyConfig::MaxPressure {
            margin: cli.margin.unwrap_or(margin),
        },
        PolicyConfig::Hold => PolicyConfig::Hold,
    })
}
