use crate::error::{PackError, PackResult};
use serde::{Deserialize, Serialize};

/// A circle center inside the square `[0, size] x [0, size]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[inline(always)]
pub fn distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Every center must be finite and lie inside `[0, size] x [0, size]`.
pub fn check_inside(centers: &[Point], size: f64) -> PackResult<()> {
    let inside = |v: f64| v.is_finite() && (0.0..=size).contains(&v);
    match centers.iter().position(|p| !inside(p.x) || !inside(p.y)) {
        Some(i) => Err(PackError::InvalidPlacement(format!(
            "center {} at ({}, {}) is outside the {} square",
            i, centers[i].x, centers[i].y, size
        ))),
        None => Ok(()),
    }
}

/// floor(sqrt(n)), exact for every `usize`.
pub fn isqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    while r * r > n {
        r -= 1;
    }
    r
}

/// floor(cbrt(n)), exact for every `usize`.
pub fn icbrt(n: usize) -> usize {
    let mut r = (n as f64).cbrt() as usize;
    while (r + 1).pow(3) <= n {
        r += 1;
    }
    while r.pow(3) > n {
        r -= 1;
    }
    r
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    #[serde(flatten)]
    pub point: Point,
    pub r: f64,
}

impl Circle {
    pub fn new(point: Point, r: f64) -> Self {
        Self { point, r }
    }

    #[inline(always)]
    pub fn x(&self) -> f64 {
        self.point.x
    }

    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.point.y
    }
}

/// Ordered circles sharing one radius. The index of a circle is its identity:
/// it labels the circle in reports and is the index space for perturbation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    pub circles: Vec<Circle>,
}

impl Placement {
    /// Attaches the shared radius `r` to every center.
    pub fn with_radius(centers: &[Point], r: f64) -> Self {
        Self {
            circles: centers.iter().map(|&p| Circle::new(p, r)).collect(),
        }
    }

    pub fn centers(&self) -> Vec<Point> {
        self.circles.iter().map(|c| c.point).collect()
    }

    /// Shared radius, 0 for an empty placement.
    pub fn radius(&self) -> f64 {
        self.circles.first().map(|c| c.r).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Circle> {
        self.circles.iter()
    }
}
