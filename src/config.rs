use crate::error::{PackError, PackResult};
use crate::geometry::{icbrt, isqrt};
use crate::optimizer::initialization::PlacementKind;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub packing: PackingParams,
    #[command(flatten)]
    pub search: SearchParams,
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackingParams {
    /// Number of circles (N)
    #[arg(short = 'N', long, default_value_t = 20)]
    pub circles: usize,

    /// Side length of the square
    #[arg(long, default_value_t = 1000.0)]
    pub size: f64,

    /// Half-width of the per-coordinate move window
    #[arg(short, long, default_value_t = 10.0)]
    pub epsilon: f64,

    /// Circles moved per tick (default: floor(sqrt(N)), or floor(cbrt(N)) above 100)
    #[arg(short = 'p', long)]
    pub perturb_count: Option<usize>,

    #[arg(long, default_value = "uniform")]
    pub placement: PlacementKind,
}

impl Default for PackingParams {
    fn default() -> Self {
        Self {
            circles: 20,
            size: 1000.0,
            epsilon: 10.0,
            perturb_count: None,
            placement: PlacementKind::Uniform,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    #[arg(short = 'i', long, default_value_t = 100_000)]
    pub max_iterations: usize,

    /// Iterations without a strict improvement before converging (0 = never)
    #[arg(long, default_value_t = 0)]
    pub patience: usize,

    #[arg(long, default_value_t = 10_000)]
    pub report_interval: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
            patience: 0,
            report_interval: 10_000,
        }
    }
}

impl PackingParams {
    pub fn updatable_count(&self) -> usize {
        self.perturb_count
            .unwrap_or_else(|| default_updatable_count(self.circles))
    }

    /// Rejects configurations no session can run with.
    pub fn validate(&self) -> PackResult<()> {
        if self.circles == 0 {
            return Err(PackError::InvalidCount(
                "circle count must be at least 1".to_string(),
            ));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(PackError::InvalidSize(self.size));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(PackError::InvalidEpsilon(self.epsilon));
        }

        let count = self.updatable_count();
        if count == 0 || count > self.circles {
            return Err(PackError::InvalidCount(format!(
                "perturb count {} must be within 1..={}",
                count, self.circles
            )));
        }
        Ok(())
    }
}

/// floor(sqrt(n)) for up to 100 circles, floor(cbrt(n)) beyond, never below 1.
pub fn default_updatable_count(n: usize) -> usize {
    let root = if n <= 100 { isqrt(n) } else { icbrt(n) };
    root.max(1)
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PackResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PackError::Config(format!("failed to read '{}': {}", path.display(), e))
        })?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Overlays only the arguments explicitly given on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(packing.circles);
        update_if_present!(packing.size);
        update_if_present!(packing.epsilon);
        update_if_present!(packing.perturb_count);
        update_if_present!(packing.placement);

        update_if_present!(search.max_iterations);
        update_if_present!(search.patience);
        update_if_present!(search.report_interval);
    }
}
