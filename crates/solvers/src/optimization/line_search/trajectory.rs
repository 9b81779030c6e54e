/// A point accepted by the minimizer, with its objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<const N: usize> {
    /// Iteration at which the point was accepted (`0` for the start).
    pub iter: usize,

    /// The point.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub value: f64,
}

/// The ordered history of accepted points for one minimization run.
///
/// The first record is always the starting point. Each accepted step appends
/// one record, so the length is the number of accepted steps plus one.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<const N: usize> {
    records: Vec<Record<N>>,
}

impl<const N: usize> Trajectory<N> {
    pub(super) fn new(start: Record<N>) -> Self {
        Self {
            records: vec![start],
        }
    }

    pub(super) fn push(&mut self, record: Record<N>) {
        self.records.push(record);
    }

    /// Returns the number of recorded points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`, since a trajectory holds at least the starting point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns all records in acceptance order.
    #[must_use]
    pub fn records(&self) -> &[Record<N>] {
        &self.records
    }

    /// Returns the most recently accepted record.
    #[must_use]
    pub fn last(&self) -> Option<&Record<N>> {
        self.records.last()
    }

    /// Iterates over the recorded points.
    pub fn points(&self) -> impl Iterator<Item = &[f64; N]> {
        self.records.iter().map(|record| &record.x)
    }

    /// Iterates over the recorded objective values.
    pub fn values(&self) -> impl Iterator<Item = f64> {
        self.records.iter().map(|record| record.value)
    }
}

impl<'a, const N: usize> IntoIterator for &'a Trajectory<N> {
    type Item = &'a Record<N>;
    type IntoIter = std::slice::Iter<'a, Record<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(iter: usize, x: f64, value: f64) -> Record<1> {
        Record {
            iter,
            x: [x],
            value,
        }
    }

    #[test]
    fn starts_with_initial_point() {
        let trajectory = Trajectory::new(record(0, 3.0, 9.0));

        assert_eq!(trajectory.len(), 1);
        assert!(!trajectory.is_empty());
        assert_eq!(trajectory.last(), Some(&record(0, 3.0, 9.0)));
    }

    #[test]
    fn points_and_values_stay_aligned() {
        let mut trajectory = Trajectory::new(record(0, 3.0, 9.0));
        trajectory.push(record(1, 1.0, 1.0));
        trajectory.push(record(2, 0.5, 0.25));

        let points: Vec<_> = trajectory.points().map(|x| x[0]).collect();
        let values: Vec<_> = trajectory.values().collect();
        let iters: Vec<_> = (&trajectory).into_iter().map(|r| r.iter).collect();

        assert_eq!(points, [3.0, 1.0, 0.5]);
        assert_eq!(values, [9.0, 1.0, 0.25]);
        assert_eq!(iters, [0, 1, 2]);
    }
}
