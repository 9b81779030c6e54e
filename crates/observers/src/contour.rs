//! Level curves of a function of two variables.
//!
//! [`Contour`] samples a function on a rectangular grid and traces evenly
//! spaced level sets with marching squares. The result is plain polylines,
//! ready to draw under a path in the plane.
//!
//! # Example
//!
//! ```
//! use descent_observers::contour::Contour;
//!
//! let curves = Contour::new([-2.0, 2.0], [-2.0, 2.0])
//!     .levels(2)
//!     .trace(|x| x[0].hypot(x[1]));
//!
//! assert_eq!(curves.len(), 2);
//! assert!(curves.iter().all(|curve| curve.is_closed()));
//! ```

use std::collections::BTreeMap;

/// Grid and level settings for tracing level curves.
///
/// Construct with [`Contour::new`] and chain builder methods as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    x_range: [f64; 2],
    y_range: [f64; 2],
    resolution: usize,
    levels: usize,
}

/// One traced polyline at a fixed function value.
///
/// A single level may produce several curves, for example when the level set
/// has more than one component or leaves the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelCurve {
    pub level: f64,
    pub points: Vec<[f64; 2]>,
}

impl LevelCurve {
    /// Returns `true` if the curve ends where it started.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.points.len() > 2 && self.points.first() == self.points.last()
    }
}

/// A crossing point on a grid edge.
///
/// `Horizontal(i, j)` joins nodes `(i, j)` and `(i + 1, j)`;
/// `Vertical(i, j)` joins nodes `(i, j)` and `(i, j + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Edge {
    Horizontal(usize, usize),
    Vertical(usize, usize),
}

impl Contour {
    /// Creates a contour over `x_range × y_range` with a 100 × 100 grid and
    /// 10 levels.
    #[must_use]
    pub fn new(x_range: [f64; 2], y_range: [f64; 2]) -> Self {
        Self {
            x_range,
            y_range,
            resolution: 100,
            levels: 10,
        }
    }

    /// Sets the number of grid nodes along each axis (at least 2).
    #[must_use]
    pub fn resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution.max(2);
        self
    }

    /// Sets the number of levels to trace.
    ///
    /// Levels are spaced evenly between the smallest and largest finite
    /// sampled values, excluding both extremes.
    #[must_use]
    pub fn levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    /// Samples `f` on the grid and traces the level curves.
    ///
    /// Cells with a non-finite corner value are skipped.
    pub fn trace(&self, f: impl Fn(&[f64; 2]) -> f64) -> Vec<LevelCurve> {
        let n = self.resolution;
        let values: Vec<Vec<f64>> = (0..n)
            .map(|j| (0..n).map(|i| f(&self.node(i, j))).collect())
            .collect();

        let (lo, hi) = values
            .iter()
            .flatten()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if !lo.is_finite() || lo >= hi {
            return Vec::new();
        }

        #[allow(clippy::cast_precision_loss)]
        let spacing = (hi - lo) / (self.levels + 1) as f64;
        (1..=self.levels)
            .flat_map(|k| {
                #[allow(clippy::cast_precision_loss)]
                let level = lo + spacing * k as f64;
                self.trace_level(&values, level)
            })
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn node(&self, i: usize, j: usize) -> [f64; 2] {
        let step = |[start, end]: [f64; 2], k: usize| {
            start + (end - start) * k as f64 / (self.resolution - 1) as f64
        };
        [step(self.x_range, i), step(self.y_range, j)]
    }

    fn trace_level(&self, values: &[Vec<f64>], level: f64) -> Vec<LevelCurve> {
        let segments = cell_segments(values, level);

        let mut adjacent: BTreeMap<Edge, Vec<usize>> = BTreeMap::new();
        for (index, &(a, b)) in segments.iter().enumerate() {
            adjacent.entry(a).or_default().push(index);
            adjacent.entry(b).or_default().push(index);
        }

        // Open curves start at an edge used once; closed loops start anywhere.
        let open_ends = adjacent
            .iter()
            .filter(|(_, indices)| indices.len() == 1)
            .map(|(&edge, _)| edge);
        let loop_starts = segments.iter().map(|&(a, _)| a);

        let mut used = vec![false; segments.len()];
        let mut curves = Vec::new();
        for start in open_ends.chain(loop_starts) {
            let mut chain = vec![start];
            let mut at = start;
            loop {
                let Some(next) = adjacent[&at].iter().copied().find(|&index| !used[index]) else {
                    break;
                };
                used[next] = true;
                let (a, b) = segments[next];
                at = if a == at { b } else { a };
                chain.push(at);
            }
            if chain.len() > 1 {
                let points = chain
                    .into_iter()
                    .map(|edge| self.crossing(values, edge, level))
                    .collect();
                curves.push(LevelCurve { level, points });
            }
        }
        curves
    }

    /// Interpolates where `level` crosses `edge`.
    fn crossing(&self, values: &[Vec<f64>], edge: Edge, level: f64) -> [f64; 2] {
        let ((i0, j0), (i1, j1)) = match edge {
            Edge::Horizontal(i, j) => ((i, j), (i + 1, j)),
            Edge::Vertical(i, j) => ((i, j), (i, j + 1)),
        };
        let (z0, z1) = (values[j0][i0], values[j1][i1]);
        let t = (level - z0) / (z1 - z0);
        let (p0, p1) = (self.node(i0, j0), self.node(i1, j1));
        [p0[0] + t * (p1[0] - p0[0]), p0[1] + t * (p1[1] - p0[1])]
    }
}

/// Returns the level-set segments of every grid cell as pairs of crossed edges.
fn cell_segments(values: &[Vec<f64>], level: f64) -> Vec<(Edge, Edge)> {
    let rows = values.len();
    let cols = values.first().map_or(0, Vec::len);
    let mut segments = Vec::new();

    for j in 0..rows.saturating_sub(1) {
        for i in 0..cols.saturating_sub(1) {
            let corners = [
                values[j][i],
                values[j][i + 1],
                values[j + 1][i + 1],
                values[j + 1][i],
            ];
            if corners.iter().any(|v| !v.is_finite()) {
                continue;
            }
            let above = corners.map(|v| v >= level);

            // Edges in order: bottom, right, top, left.
            let sides = [
                (Edge::Horizontal(i, j), above[0] != above[1]),
                (Edge::Vertical(i + 1, j), above[1] != above[2]),
                (Edge::Horizontal(i, j + 1), above[3] != above[2]),
                (Edge::Vertical(i, j), above[0] != above[3]),
            ];
            let crossed: Vec<Edge> = sides
                .into_iter()
                .filter_map(|(edge, crosses)| crosses.then_some(edge))
                .collect();

            match crossed[..] {
                [a, b] => segments.push((a, b)),
                [bottom, right, top, left] => {
                    // Saddle: the cell center decides which corners connect.
                    let center = corners.iter().sum::<f64>() / 4.0 >= level;
                    if center == above[0] {
                        segments.push((bottom, right));
                        segments.push((top, left));
                    } else {
                        segments.push((bottom, left));
                        segments.push((right, top));
                    }
                }
                _ => {}
            }
        }
    }
    segments
}
