use crate::convergence::Stopping;
use crate::report::{IterationRecord, Method, RunResult};
use crate::solver::RootError;

/// Outcome of a single solver pass.
pub(crate) struct Step {
    pub record: IterationRecord,
    /// Candidate root the run returns if it stops at this pass.
    pub estimate: f64,
    /// Residual the run reports if it stops at this pass.
    pub residual: f64,
    /// Whether the method's convergence test passed.
    pub converged: bool,
}

/// Driver for iterative root finders.
///
/// Owns the iteration loop and the trace accumulator.  The per-method
/// `step` closure evaluates one pass: it produces the trace record, the
/// candidate the run would return if it stopped there, and the result
/// of the method's convergence test.  An error from `step` aborts the
/// run with no partial result.
///
/// Exhausting the iteration cap is not an error: the last candidate is
/// returned and the iteration count equals the cap.  The trace always
/// ends up with exactly one record per pass taken.
pub(crate) fn iterative_root_find<S>(
    method: Method,
    stopping: &Stopping,
    mut step: S,
) -> Result<RunResult, RootError>
where
    S: FnMut(usize) -> Result<Step, RootError>,
{
    let mut trace = Vec::new();
    let mut last_estimate = f64::NAN;
    let mut last_residual = f64::NAN;

    // stay inside the iteration cap
    for i in 1..=stopping.max_iter() {
        let pass = step(i)?;
        let converged = pass.converged;
        last_estimate = pass.estimate;
        last_residual = pass.residual;
        trace.push(pass.record);

        if converged {
            return Ok(RunResult {
                method,
                root: last_estimate,
                residual: last_residual,
                iterations: i,
                trace,
            });
        }
    }

    Ok(RunResult {
        method,
        root: last_estimate,
        residual: last_residual,
        iterations: stopping.max_iter(),
        trace,
    })
}
