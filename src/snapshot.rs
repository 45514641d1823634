use crate::error::{PackError, PackResult};
use crate::geometry::{self, Circle, Placement};
use crate::optimizer::{History, State};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

/// A placement on disk: the square it lives in plus its scored circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementSnapshot {
    pub size: f64,
    pub radius: f64,
    /// Absent for degenerate placements, whose objective is infinite.
    pub objective: Option<f64>,
    pub circles: Vec<Circle>,
}

impl PlacementSnapshot {
    pub fn from_state(state: &State, size: f64) -> Self {
        Self {
            size,
            radius: state.radius,
            objective: Some(state.objective).filter(|o| o.is_finite()),
            circles: state.circles.circles.clone(),
        }
    }

    pub fn placement(&self) -> Placement {
        Placement {
            circles: self.circles.clone(),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> PackResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> PackResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&content)?;

        if !snapshot.size.is_finite() || snapshot.size <= 0.0 {
            return Err(PackError::InvalidSize(snapshot.size));
        }
        geometry::check_inside(&snapshot.placement().centers(), snapshot.size)?;
        Ok(snapshot)
    }
}

/// Writes the accepted-states table as CSV, percentages with two decimals.
pub fn write_history_csv<W: Write>(history: &History, writer: W) -> PackResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "history_index",
        "iteration",
        "scaled_radius",
        "objective",
        "filled_pct",
        "empty_pct",
    ])?;

    for row in history.rows() {
        wtr.write_record([
            row.history_index.to_string(),
            row.iteration.to_string(),
            format!("{:.4}", row.scaled_radius),
            format!("{:.4}", row.objective),
            format!("{:.2}", row.filled_fraction * 100.0),
            format!("{:.2}", row.empty_fraction * 100.0),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
