use crate::geometry::{distance, Point};

/// Full symmetric N x N matrix of pairwise center distances.
///
/// Stored flat and row-major (`i * n + j`). Both triangles are filled even though
/// the solver only reads `i < j`, so callers may index either order.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    pub fn build(centers: &[Point]) -> Self {
        let n = centers.len();
        let mut data = vec![0.0; n * n];

        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance(&centers[i], &centers[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        Self { n, data }
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Smallest distance over all pairs `i < j`, with the pair that attains it.
    /// `None` when there are fewer than two centers.
    pub fn min_pair(&self) -> Option<(f64, usize, usize)> {
        let mut best: Option<(f64, usize, usize)> = None;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                let d = self.get(i, j);
                if best.map_or(true, |(b, _, _)| d < b) {
                    best = Some((d, i, j));
                }
            }
        }
        best
    }

    /// Smallest pairwise distance, `f64::INFINITY` when N < 2.
    pub fn min_pair_distance(&self) -> f64 {
        self.min_pair().map_or(f64::INFINITY, |(d, _, _)| d)
    }
}
