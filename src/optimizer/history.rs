use crate::error::{PackError, PackResult};
use crate::geometry::Placement;
use crate::scorer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub circles: Placement,
    pub radius: f64,
    pub scaled_radius: f64,
    pub objective: f64,
}

impl State {
    pub fn new(circles: Placement, radius: f64, size: f64) -> Self {
        Self {
            circles,
            radius,
            scaled_radius: scorer::scaled_radius(radius, size),
            objective: scorer::objective(radius, size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub state: State,
    /// Circles perturbed per tick when this entry was recorded.
    pub label: usize,
    /// Tick counter at acceptance (0 for the seed).
    pub iteration: usize,
}

/// One line of the accepted-states table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub history_index: usize,
    pub iteration: usize,
    pub scaled_radius: f64,
    pub objective: f64,
    pub filled_fraction: f64,
    pub empty_fraction: f64,
}

impl HistoryRow {
    pub fn from_entry(history_index: usize, entry: &HistoryEntry) -> Self {
        let n = entry.state.circles.len();
        let filled = scorer::filled_area_fraction(n, entry.state.scaled_radius);
        Self {
            history_index,
            iteration: entry.iteration,
            scaled_radius: entry.state.scaled_radius,
            objective: entry.state.objective,
            filled_fraction: filled,
            empty_fraction: 1.0 - filled,
        }
    }
}

/// Append-only log of accepted states. Only `reset` removes entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends and returns the new length.
    pub fn remember(&mut self, state: State, label: usize, iteration: usize) -> usize {
        self.entries.push(HistoryEntry {
            state,
            label,
            iteration,
        });
        self.entries.len()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn last(&self) -> PackResult<&State> {
        self.last_entry()
            .map(|e| &e.state)
            .ok_or(PackError::EmptyHistory)
    }

    pub fn last_entry(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn rows(&self) -> Vec<HistoryRow> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| HistoryRow::from_entry(i, e))
            .collect()
    }
}
