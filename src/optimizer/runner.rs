use crate::config::{Config, PackingParams};
use crate::error::{PackError, PackResult};
use crate::geometry::Placement;
use crate::optimizer::{History, OptimizerSession, State, TickOutcome};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

pub struct OptimizationOptions {
    pub max_iterations: usize,
    pub patience: usize,
    pub report_interval: usize,
    pub max_time: Option<Duration>,
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            max_iterations: cfg.search.max_iterations,
            patience: cfg.search.patience,
            report_interval: cfg.search.report_interval,
            max_time: None, // Set manually if needed
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub attempt: usize,
    pub placement: Placement,
    pub state: State,
    pub history: History,
    pub iterations: usize,
    pub accepted: usize,
}

/// A trait for receiving updates during optimization.
/// Boolean return value indicates if the search should continue (true) or abort (false).
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, attempt: usize, iteration: usize, objective: f64, ips: f32) -> bool;
}

impl<F> ProgressCallback for F
where
    F: Fn(usize, usize, f64, f32) -> bool + Send + Sync,
{
    fn on_progress(&self, attempt: usize, iteration: usize, objective: f64, ips: f32) -> bool {
        self(attempt, iteration, objective, ips)
    }
}

pub struct Optimizer {
    params: PackingParams,
    options: OptimizationOptions,
}

impl Optimizer {
    pub fn new(params: PackingParams, options: OptimizationOptions) -> PackResult<Self> {
        params.validate()?;
        Ok(Self { params, options })
    }

    /// Drives `session` from Running back to Idle.
    ///
    /// The session must have been built with the same packing parameters as the
    /// optimizer.
    ///
    /// Stops on the iteration cap, the time limit, patience, or when the callback
    /// asks to abort. A session that is already running is continued, not re-seeded.
    pub fn run<CB: ProgressCallback>(
        &self,
        session: &mut OptimizerSession,
        attempt: usize,
        callback: &CB,
    ) -> PackResult<OptimizationResult> {
        let opts = &self.options;
        if session.params() != &self.params {
            return Err(PackError::Config(
                "session parameters differ from the optimizer's".to_string(),
            ));
        }
        session.start();

        let start_time = Instant::now();
        let mut last_report = Instant::now();
        let mut ticks_since_report = 0usize;
        let mut best_objective = session.history().last()?.objective;
        let mut patience_counter = 0usize;

        while session.is_running() {
            if session.iterations() >= opts.max_iterations {
                break;
            }
            if let Some(limit) = opts.max_time {
                if start_time.elapsed() >= limit {
                    break;
                }
            }

            let Some(outcome) = session.tick() else {
                break;
            };
            ticks_since_report += 1;

            let improved = match outcome {
                TickOutcome::Accepted(row) if row.objective < best_objective => {
                    best_objective = row.objective;
                    true
                }
                _ => false,
            };

            if improved {
                patience_counter = 0;
            } else {
                patience_counter += 1;
            }

            if opts.patience > 0 && patience_counter >= opts.patience {
                info!(
                    "Attempt {} converged at {:.4} after {} iterations",
                    attempt,
                    best_objective,
                    session.iterations()
                );
                break;
            }

            if opts.report_interval > 0 && session.iterations() % opts.report_interval == 0 {
                let elapsed = last_report.elapsed().as_secs_f32().max(f32::EPSILON);
                let ips = ticks_since_report as f32 / elapsed;

                if !callback.on_progress(attempt, session.iterations(), best_objective, ips) {
                    break;
                }
                last_report = Instant::now();
                ticks_since_report = 0;
            }
        }

        session.stop();

        let placement = session
            .current()
            .cloned()
            .ok_or(PackError::EmptyHistory)?;
        let state = session.current_state().ok_or(PackError::EmptyHistory)?;

        Ok(OptimizationResult {
            attempt,
            placement,
            state,
            history: session.history().clone(),
            iterations: session.iterations(),
            accepted: session.accepted(),
        })
    }

    /// Independent sessions in parallel, one per attempt, seeded `seed + attempt`.
    ///
    /// Returns the lowest objective; ties go to the lowest attempt index, so a fixed
    /// seed gives the same answer regardless of thread scheduling.
    pub fn run_attempts<CB: ProgressCallback>(
        &self,
        seed: Option<u64>,
        attempts: usize,
        callback: &CB,
    ) -> PackResult<OptimizationResult> {
        if attempts == 0 {
            return Err(PackError::InvalidCount(
                "attempts must be at least 1".to_string(),
            ));
        }

        let results: Vec<OptimizationResult> = (0..attempts)
            .into_par_iter()
            .map(|attempt| {
                let attempt_seed = seed.map(|s| s.wrapping_add(attempt as u64));
                let mut session = OptimizerSession::new(self.params.clone(), attempt_seed)?;
                self.run(&mut session, attempt, callback)
            })
            .collect::<PackResult<_>>()?;

        let mut results = results.into_iter();
        let mut best = results.next().ok_or(PackError::EmptyHistory)?;
        for r in results {
            if r.state.objective < best.state.objective {
                best = r;
            }
        }
        Ok(best)
    }
}
