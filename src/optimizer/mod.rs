pub mod history;
pub mod initialization;
pub mod mutation;
pub mod runner;

pub use self::history::{History, HistoryEntry, HistoryRow, State};
pub use self::initialization::PlacementKind;
pub use self::runner::{OptimizationOptions, OptimizationResult, Optimizer, ProgressCallback};

use crate::config::PackingParams;
use crate::error::{PackError, PackResult};
use crate::geometry::{self, Placement, Point};
use crate::scorer;
use fastrand::Rng;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    Accepted(HistoryRow),
    Rejected { iteration: usize, objective: f64 },
}

impl TickOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, TickOutcome::Accepted(_))
    }
}

/// One optimization run: the current placement, its history and the random source.
///
/// `seed`, `start`, `tick` and `stop` are the only mutators. The session is Idle
/// until `start`; `tick` also works while Idle once the session has been seeded,
/// which is how a single manual step is taken.
pub struct OptimizerSession {
    params: PackingParams,
    updatable_count: usize,
    rng: Rng,
    current: Option<Placement>,
    history: History,
    iterations: usize,
    accepted: usize,
    running: bool,
}

impl OptimizerSession {
    pub fn new(params: PackingParams, seed: Option<u64>) -> PackResult<Self> {
        let rng = if let Some(s) = seed {
            Rng::with_seed(s)
        } else {
            Rng::new()
        };
        Self::with_rng(params, rng)
    }

    pub fn with_rng(params: PackingParams, rng: Rng) -> PackResult<Self> {
        params.validate()?;
        let updatable_count = params.updatable_count();

        Ok(Self {
            params,
            updatable_count,
            rng,
            current: None,
            history: History::new(),
            iterations: 0,
            accepted: 0,
            running: false,
        })
    }

    /// Generates a fresh placement and restarts the history from it.
    pub fn seed(&mut self) -> &Placement {
        let centers = initialization::generate_placement(
            &mut self.rng,
            self.params.placement,
            self.params.circles,
            self.params.size,
        );
        self.install_seed(centers)
    }

    /// Seeds from explicit centers instead of a generator.
    pub fn seed_with(&mut self, centers: Vec<Point>) -> PackResult<&Placement> {
        if centers.len() != self.params.circles {
            return Err(PackError::InvalidCount(format!(
                "expected {} centers, got {}",
                self.params.circles,
                centers.len()
            )));
        }
        geometry::check_inside(&centers, self.params.size)?;
        Ok(self.install_seed(centers))
    }

    fn install_seed(&mut self, centers: Vec<Point>) -> &Placement {
        let size = self.params.size;
        let radius = scorer::resolve_radius(&centers, size);
        let placement = Placement::with_radius(&centers, radius);

        self.history.reset();
        self.iterations = 0;
        self.accepted = 0;
        self.history.remember(
            State::new(placement.clone(), radius, size),
            self.updatable_count,
            0,
        );

        if radius <= 0.0 {
            warn!("Seed placement is degenerate (radius {})", radius);
        }
        info!(
            "Seeded {} circles ({}) | r = {:.4} | objective = {:.4}",
            placement.len(),
            self.params.placement,
            radius,
            scorer::objective(radius, size)
        );

        self.current.insert(placement)
    }

    /// Seeds and enters Running. Returns false (and does nothing) if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.seed();
        self.running = true;
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One perturb-and-accept step. `None` until the session has been seeded.
    ///
    /// A candidate is accepted when its objective is not worse than the last
    /// recorded one. The recorded entry pairs the placement *before* the move with
    /// the radius *after* it; the candidate then becomes the current placement.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        let size = self.params.size;
        let current = self.current.as_ref()?;
        let old_objective = self.history.last().ok()?.objective;

        let candidate = mutation::perturb(
            &mut self.rng,
            current,
            size,
            self.params.epsilon,
            self.updatable_count,
        );
        self.iterations += 1;

        let new_objective = scorer::objective(candidate.radius, size);
        if new_objective > old_objective || new_objective.is_nan() {
            return Some(TickOutcome::Rejected {
                iteration: self.iterations,
                objective: new_objective,
            });
        }

        let previous = self.current.replace(candidate.placement)?;
        let state = State::new(previous, candidate.radius, size);
        let index = self
            .history
            .remember(state, self.updatable_count, self.iterations)
            - 1;
        self.accepted += 1;

        let row = HistoryRow::from_entry(index, &self.history.entries()[index]);
        debug!(
            "Accepted #{} at iteration {} | r = {:.4} | objective = {:.4}",
            index, self.iterations, row.scaled_radius, row.objective
        );
        Some(TickOutcome::Accepted(row))
    }

    pub fn current(&self) -> Option<&Placement> {
        self.current.as_ref()
    }

    /// The current placement scored on its own radius.
    pub fn current_state(&self) -> Option<State> {
        self.current
            .as_ref()
            .map(|p| State::new(p.clone(), p.radius(), self.params.size))
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn params(&self) -> &PackingParams {
        &self.params
    }

    pub fn updatable_count(&self) -> usize {
        self.updatable_count
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }
}
