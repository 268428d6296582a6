use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use salesman::api::{
    cross_check, extract_locations, format_elapsed, random_coords, random_matrix,
    solve_brute_force, solve_tour, solve_with_stats, CostMatrix, LocationBounds, RandomCfg,
    ReplayToken, Solution,
};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing_subscriber::fmt::SubscriberBuilder;

mod load;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "salesman")]
#[command(about = "Exact shortest paths and tours through a handful of locations")]
struct Cmd {
    /// Log level for stderr output (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve an instance read from a .json or .csv file
    Solve {
        #[arg(long)]
        input: String,
        /// Treat a bare JSON list of lists as a cost matrix instead of coordinates
        #[arg(long)]
        matrix: bool,
        /// Start location (default 0)
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// End location (default: same as start, i.e. a closed tour)
        #[arg(long)]
        end: Option<usize>,
        /// Enumerate every ordering instead of the exact decomposition
        #[arg(long)]
        brute_force: bool,
        /// Write the solution JSON here (plus a provenance sidecar)
        #[arg(long)]
        out: Option<String>,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// Extract `[x, y]` locations from a message and solve the closed tour
    Text {
        #[arg(long)]
        message: String,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// Write a seeded random instance
    Random {
        #[arg(long, default_value_t = 8)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 100.0)]
        side: f64,
        /// Write a general cost matrix instead of coordinates
        #[arg(long)]
        matrix: bool,
        /// Only with --matrix: draw both directions independently
        #[arg(long)]
        asymmetric: bool,
        #[arg(long)]
        out: String,
    },
    /// Cross-check the exact solver against brute force on random instances
    Check(CheckCfg),
    /// Print a small provenance JSON block
    Report,
}

/// Location-count guard applied before solving.
#[derive(Args, Clone, Copy)]
struct BoundsArgs {
    #[arg(long, default_value_t = LocationBounds::default().min)]
    min_locations: usize,
    #[arg(long, default_value_t = LocationBounds::default().max)]
    max_locations: usize,
}

impl From<BoundsArgs> for LocationBounds {
    fn from(b: BoundsArgs) -> Self {
        LocationBounds::new(b.min_locations, b.max_locations)
    }
}

/// The oracle scores `(n - 1)!` orderings per trial.
const MAX_CHECK_N: usize = 10;

#[derive(Args, Clone, Copy, Debug)]
struct CheckCfg {
    /// Largest instance size (at most 10); sizes 3..=max_n are checked
    #[arg(long, default_value_t = 8)]
    max_n: usize,
    /// Random instances per size
    #[arg(long, default_value_t = 20)]
    trials: u64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Absolute length tolerance
    #[arg(long, default_value_t = 1e-6)]
    tol: f64,
    /// Use asymmetric random matrices instead of Euclidean coordinates
    #[arg(long)]
    asymmetric: bool,
}

impl Default for CheckCfg {
    fn default() -> Self {
        Self {
            max_n: 8,
            trials: 20,
            seed: 0,
            tol: 1e-6,
            asymmetric: false,
        }
    }
}

/// Solution plus how it was obtained, as written to stdout and `--out`.
#[derive(Serialize)]
struct SolveReport<'a> {
    #[serde(flatten)]
    solution: &'a Solution,
    engine: &'static str,
    elapsed_secs: f64,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            input,
            matrix,
            start,
            end,
            brute_force,
            out,
            bounds,
        } => solve(
            &input,
            matrix,
            start,
            end.unwrap_or(start),
            brute_force,
            out,
            bounds.into(),
        ),
        Action::Text { message, bounds } => text(&message, bounds.into()),
        Action::Random {
            n,
            seed,
            index,
            side,
            matrix,
            asymmetric,
            out,
        } => random(
            RandomCfg {
                n,
                side,
                asymmetric,
            },
            ReplayToken::new(seed, index),
            matrix,
            out,
        ),
        Action::Check(cfg) => check(cfg),
        Action::Report => report(),
    }
}

/// Run one engine and time it; timing stays outside the library.
fn timed_solve(
    cost: &CostMatrix,
    start: usize,
    end: usize,
    brute_force: bool,
) -> Result<(Solution, Duration)> {
    let remaining: Vec<usize> = (0..cost.len())
        .filter(|&i| i != start && i != end)
        .collect();
    let t0 = Instant::now();
    let sol = if brute_force {
        solve_brute_force(cost, start, end, &remaining)?
    } else {
        let (sol, stats) = solve_with_stats(cost, start, end, &remaining)?;
        tracing::debug!(
            routes_solved = stats.routes_solved,
            cache_hits = stats.cache_hits,
            "cache"
        );
        sol
    };
    Ok((sol, t0.elapsed()))
}

fn solve(
    input: &str,
    as_matrix: bool,
    start: usize,
    end: usize,
    brute_force: bool,
    out: Option<String>,
    bounds: LocationBounds,
) -> Result<()> {
    tracing::info!(input, start, end, brute_force, "solve");
    let (rows, is_matrix) = load::read_rows(Path::new(input), as_matrix)?;
    if !is_matrix {
        bounds.check(rows.len())?;
    }
    let inst = load::build(rows, is_matrix)?;
    let (sol, elapsed) = timed_solve(&inst.cost, start, end, brute_force)?;
    tracing::info!(
        n = inst.len(),
        dim = ?inst.dimension(),
        length = sol.length,
        elapsed = %format_elapsed(elapsed),
        "solved"
    );

    let engine = if brute_force { "brute_force" } else { "exact" };
    let report = SolveReport {
        solution: &sol,
        engine,
        elapsed_secs: elapsed.as_secs_f64(),
    };
    let body = serde_json::to_string_pretty(&report)?;
    println!("{body}");

    if let Some(out) = out {
        write_output(&out, body.as_bytes())?;
        write_sidecar(
            &out,
            Payload::new(
                "solve",
                json!({
                    "input": input,
                    "matrix": is_matrix,
                    "start": start,
                    "end": end,
                    "engine": engine,
                    "n": inst.len()
                }),
            ),
        )?;
    }
    Ok(())
}

fn text(message: &str, bounds: LocationBounds) -> Result<()> {
    let locs = extract_locations(message);
    tracing::info!(found = locs.len(), "text");
    bounds.check(locs.len())?;
    let cost = CostMatrix::from_coords(&locs)?;
    let t0 = Instant::now();
    let sol = solve_tour(&cost, 0)?;
    let elapsed = t0.elapsed();
    println!(
        "The length of the shortest path through {} locations equals {:.3} and it took {} seconds to compute it.",
        locs.len(),
        sol.length,
        format_elapsed(elapsed)
    );
    println!("{}", serde_json::to_string(&sol)?);
    Ok(())
}

fn random(cfg: RandomCfg, tok: ReplayToken, as_matrix: bool, out: String) -> Result<()> {
    tracing::info!(n = cfg.n, seed = tok.seed, index = tok.index, as_matrix, out, "random");
    let doc = if as_matrix {
        json!({ "matrix": random_matrix(cfg, tok)?.to_rows() })
    } else {
        if cfg.asymmetric {
            bail!("--asymmetric only applies to --matrix instances");
        }
        json!({ "coords": random_coords(cfg, tok) })
    };
    write_output(&out, &serde_json::to_vec_pretty(&doc)?)?;
    write_sidecar(
        &out,
        Payload::new(
            "random",
            json!({
                "n": cfg.n,
                "side": cfg.side,
                "asymmetric": cfg.asymmetric,
                "matrix": as_matrix,
                "seed": tok.seed,
                "index": tok.index
            }),
        ),
    )?;
    Ok(())
}

fn check(cfg: CheckCfg) -> Result<()> {
    tracing::info!(?cfg, "check");
    if !(salesman::MIN_LOCATIONS..=MAX_CHECK_N).contains(&cfg.max_n) {
        bail!(
            "--max-n must be between {} and {MAX_CHECK_N}",
            salesman::MIN_LOCATIONS
        );
    }
    let mut failures = 0usize;
    for n in salesman::MIN_LOCATIONS..=cfg.max_n {
        let rcfg = RandomCfg {
            n,
            asymmetric: cfg.asymmetric,
            ..Default::default()
        };
        for t in 0..cfg.trials {
            let tok = ReplayToken::new(cfg.seed, ((n as u64) << 32) | t);
            let cost = if cfg.asymmetric {
                random_matrix(rcfg, tok)?
            } else {
                CostMatrix::from_coords(&random_coords(rcfg, tok))?
            };
            let remaining: Vec<usize> = (1..n).collect();
            let cc = cross_check(&cost, 0, 0, &remaining, cfg.tol)?;
            if !cc.agree {
                failures += 1;
                tracing::error!(
                    n,
                    trial = t,
                    exact = cc.exact.length,
                    oracle = cc.oracle.length,
                    "mismatch"
                );
            }
        }
        tracing::info!(n, trials = cfg.trials, "checked");
    }
    if failures > 0 {
        bail!("{failures} instance(s) disagreed with brute force");
    }
    println!(
        "exact solver matched brute force on {} instances",
        (cfg.max_n + 1 - salesman::MIN_LOCATIONS) as u64 * cfg.trials
    );
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::block("report", json!({}), Vec::new());
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_output(out: &str, bytes: &[u8]) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, bytes)?;
    Ok(())
}
