use descent_core::{Objective, Observer};
use tracing::debug;

use crate::optimization::evaluate::evaluate;

use super::{
    Action, Config, Error, Event, Record, Solution, Status, linalg, method::Step, state::State,
};

/// Core line-search loop shared by every [`Method`](super::Method).
///
/// Each iteration computes a direction, backtracks to an acceptable step
/// size, evaluates the candidate point, and runs the method's convergence
/// test. A converged run returns the point the final step started from.
pub(super) fn search<O, Obs, const N: usize>(
    objective: &O,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    let method = config.method();
    let need_hessian = method.needs_hessian();

    let eval = evaluate(objective, &x0, need_hessian).map_err(|e| Error::from_eval(e, 0))?;
    let mut state = State::new(x0, eval);

    let event = Event::Started {
        record: *state.current(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(state.into_solution(Status::StoppedByObserver));
    }

    while state.iters() < config.max_iters() {
        let iter = state.iters() + 1;
        let x = state.current().x;
        let value = state.current().value;

        let direction = method.direction(state.eval(), iter)?;

        // The slope term is ⟨−d, d⟩ for every method.
        let slope = -linalg::dot(&direction, &direction);
        let step_size = config.backtracking().step_size(iter, value, slope, |step_size| {
            let trial = linalg::advance(&x, &direction, step_size);
            objective
                .evaluate(&trial, false)
                .map(|eval| eval.value)
                .map_err(|source| Error::Objective {
                    iter,
                    source: Box::new(source),
                })
        })?;

        let candidate = linalg::advance(&x, &direction, step_size);
        let candidate_eval =
            evaluate(objective, &candidate, need_hessian).map_err(|e| Error::from_eval(e, iter))?;
        state.tick();

        let step = Step {
            from: &x,
            from_eval: state.eval(),
            to: &candidate,
            to_value: candidate_eval.value,
            direction: &direction,
        };
        if method.is_converged(&step, config) {
            debug!(method = %method, iter, value, "converged");
            let event = Event::Converged {
                record: *state.current(),
                candidate: Record {
                    iter,
                    x: candidate,
                    value: candidate_eval.value,
                },
            };
            // The run is over, so any action is ignored.
            let _ = observer.observe(&event);
            return Ok(state.into_solution(Status::Converged));
        }

        let record = state.accept(candidate, candidate_eval);
        let event = Event::Accepted {
            record,
            direction: &direction,
            step_size,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(state.into_solution(Status::StoppedByObserver));
        }
    }

    Ok(state.into_solution(Status::MaxIters))
}
