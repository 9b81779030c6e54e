//! Progress logging through `tracing`.

use descent_core::Observer;
use tracing::info;

use crate::traits::{HasIteration, HasObjective, HasPoint};

/// An observer that logs one `tracing` event per solver event.
///
/// Each line reads `Iteration #k; xk = [..]; f(xk) = v;`, and the iteration,
/// objective, and optional label are also attached as structured fields.
/// Install a subscriber (for example `tracing_subscriber::fmt`) to see output.
///
/// # Example
///
/// ```ignore
/// let log = ProgressLog::with_label("Newton");
/// line_search::minimize(&objective, x0, &config, log)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProgressLog {
    label: Option<String>,
}

impl ProgressLog {
    /// Creates an unlabeled progress log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a progress log whose events carry `label`, such as a method name.
    #[must_use]
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

impl<E, A> Observer<E, A> for ProgressLog
where
    E: HasIteration + HasPoint + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let iter = event.iteration();
        let objective = event.objective();
        let line = progress_line(iter, event.point(), objective);

        match &self.label {
            Some(label) => info!(label = %label, iter, objective, "{line}"),
            None => info!(iter, objective, "{line}"),
        }
        None
    }
}

/// Allows `&mut ProgressLog` to be passed to solvers that take an observer by value.
impl<E, A> Observer<E, A> for &mut ProgressLog
where
    E: HasIteration + HasPoint + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// Formats a single progress line.
#[must_use]
pub fn progress_line(iter: usize, x: &[f64], value: f64) -> String {
    let coords = x.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    format!("Iteration #{iter}; x{iter} = [{coords}]; f(x{iter}) = {value};")
}
