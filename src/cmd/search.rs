use crate::reports;
use circlepack::config::Config;
use circlepack::error::PackResult;
use circlepack::optimizer::{OptimizationOptions, Optimizer};
use circlepack::snapshot::{self, PlacementSnapshot};
use clap::Args;
use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,

    /// Wall-clock limit per attempt, in seconds
    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    /// Independent runs (in parallel); the best one is reported
    #[arg(short = 'a', long, default_value_t = 1)]
    pub attempts: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Write the accepted-states table of the best run as CSV
    #[arg(long)]
    pub history_csv: Option<PathBuf>,

    /// Write the best placement as JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Rows of the accepted-states table to print
    #[arg(long, default_value_t = 20)]
    pub show_history: usize,
}

pub fn run(args: SearchArgs, config: Config) -> PackResult<()> {
    let packing = &config.packing;
    info!(
        "🔵 Packing {} circles in a {} square | placement = {} | epsilon = {} | perturb = {}",
        packing.circles,
        packing.size,
        packing.placement,
        packing.epsilon,
        packing.updatable_count()
    );

    let mut options = OptimizationOptions::from(&config);
    options.max_time = args.time.map(Duration::from_secs);

    let optimizer = Optimizer::new(config.packing.clone(), options)?;

    let start = Instant::now();
    let progress = |attempt: usize, iteration: usize, objective: f64, ips: f32| -> bool {
        info!(
            "Attempt {:2} | It {:8} | Objective: {:.4} | {:.0} it/s",
            attempt, iteration, objective, ips
        );
        true
    };

    let result = optimizer.run_attempts(args.seed, args.attempts, &progress)?;
    let size = config.packing.size;

    info!(
        "Finished in {:.2}s | best attempt {} | {} iterations | {} accepted",
        start.elapsed().as_secs_f32(),
        result.attempt,
        result.iterations,
        result.accepted
    );

    reports::print_history_table(&result.history.rows(), args.show_history);
    reports::print_placement_table("OPTIMIZED", &result.placement);

    if let Some(path) = &args.history_csv {
        let file = File::create(path)?;
        snapshot::write_history_csv(&result.history, file)?;
        info!("📝 History written to {}", path.display());
    }

    if let Some(path) = &args.output {
        PlacementSnapshot::from_state(&result.state, size).save(path)?;
        info!("💾 Placement written to {}", path.display());
    }

    println!("\n=== 🏆 FINAL RESULT ===");
    println!("Radius: {:.4}", result.state.radius);
    println!("Scaled Radius: {:.4}", result.state.scaled_radius);
    println!("Objective: {:.4}", result.state.objective);
    Ok(())
}
