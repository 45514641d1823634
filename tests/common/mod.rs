#![allow(dead_code)]

use circlepack::config::PackingParams;
use circlepack::geometry::Point;
use circlepack::optimizer::{OptimizerSession, PlacementKind};

/// Builder for PackingParams to keep the tests short
pub struct ParamsBuilder {
    params: PackingParams,
}

impl ParamsBuilder {
    pub fn new(circles: usize, size: f64) -> Self {
        Self {
            params: PackingParams {
                circles,
                size,
                ..Default::default()
            },
        }
    }

    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.params.epsilon = epsilon;
        self
    }

    pub fn perturb(mut self, count: usize) -> Self {
        self.params.perturb_count = Some(count);
        self
    }

    pub fn placement(mut self, kind: PlacementKind) -> Self {
        self.params.placement = kind;
        self
    }

    pub fn build(self) -> PackingParams {
        self.params
    }

    pub fn session(self, seed: u64) -> OptimizerSession {
        OptimizerSession::new(self.params, Some(seed)).expect("valid test params")
    }
}

pub fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}
