//! Root finding algorithms.
//!
//! Functions are supplied through the traits in the `wrap` module.
//! Termination is controlled by a [`Stopping`] configuration, and every
//! solver returns a [`RunResult`] carrying the root estimate, the final
//! residual, the iteration count, and the full per-iteration trace.
//!
//! The residual fast paths and denominator checks compare against zero
//! exactly; the near-zero cases are the tolerance tests' job.
//!
//! # Examples
//! Using Newton-Raphson:
//!
//! ```
//! use zerofind::convergence::Stopping;
//! use zerofind::solver::newton_raphson;
//! use zerofind::wrap::RealFnAndFirst;
//!
//! // function and its derivative
//! let in_f = |x: f64| x * x * x - 2.0 * x - 5.0;
//! let in_df = |x: f64| 3.0 * x * x - 2.0;
//! let f = RealFnAndFirst::new(&in_f, &in_df);
//!
//! let stopping = Stopping::new(50, 1e-9).expect("stopping");
//! let result = newton_raphson(&f, 2.0, &stopping).expect("root");
//!
//! assert!((result.root - 2.0945514815423265).abs() < 1e-9);
//! assert_eq!(result.trace.len(), result.iterations);
//! ```
//!
//! Using the Bisection Method:
//!
//! ```
//! use zerofind::bracket::Bounds;
//! use zerofind::convergence::Stopping;
//! use zerofind::solver::bisection;
//! use zerofind::wrap::RealFn;
//!
//! // function... no derivative needed!
//! let in_f = |x: f64| x * x * x - 2.0 * x - 5.0;
//! let f = RealFn::new(&in_f);
//!
//! let stopping = Stopping::new(50, 1e-6).expect("stopping");
//! let result = bisection(&f, &Bounds::new(2.0, 3.0), &stopping).expect("root");
//!
//! assert!((result.root - 2.094551).abs() < 1e-4);
//! ```

mod driver;

use thiserror::Error;

use crate::bracket::{straddles_root, Bounds};
use crate::convergence::Stopping;
use crate::report::{IterationRecord, Method, RunResult};
use crate::solver::driver::{iterative_root_find, Step};
use crate::wrap::{RealDfEval, RealFn, RealFnAndFirst, RealFnEval};

/// Root finding error conditions.
///
/// To help with diagnostics, these errors carry the relevant values:
/// the endpoint residuals for a rejected bracket, the last x position
/// otherwise.  Every error aborts the run with no partial result.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RootError {
    /// Bracket endpoints do not straddle a sign change.
    #[error("f(a) and f(b) must have opposite signs: f(a)={f_a}, f(b)={f_b}")]
    InvalidBracket { f_a: f64, f_b: f64 },

    /// A required denominator evaluated to exactly zero.
    #[error("zero denominator at x={x}")]
    DegenerateStep { x: f64 },

    /// Derivative went to zero for a method that depends on it to
    /// determine the next step.
    #[error("zero derivative at x={x}")]
    ZeroDerivative { x: f64 },

    /// Rejected termination configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Root finding via the Bisection Method.
///
/// Requires a bracket whose endpoints straddle a sign change; an exact
/// zero at either endpoint is accepted.  Convergence is linear but the
/// bracket width halves every pass, so a valid bracket always
/// converges given enough iterations.
///
/// Stops on an exact zero residual, on a candidate delta below `tol`
/// (from the second iteration on), or on a half-bracket-width below
/// `tol`.
pub fn bisection<F>(f: &F, bracket: &Bounds, stopping: &Stopping) -> Result<RunResult, RootError>
where
    F: RealFnEval,
{
    let mut a = bracket.a;
    let mut b = bracket.b;
    let mut f_a = f.eval_f(a);
    let f_b = f.eval_f(b);
    if !straddles_root(f_a, f_b) {
        return Err(RootError::InvalidBracket { f_a, f_b });
    }

    let mut c_old: Option<f64> = None;
    iterative_root_find(Method::Bisection, stopping, move |i| {
        let c = 0.5 * (a + b);
        let f_c = f.eval_f(c);
        let err = c_old.map(|prev| (c - prev).abs());

        let record = IterationRecord::Bracket {
            iteration: i,
            a,
            b,
            c,
            f_c,
            err,
        };
        let converged = f_c == 0.0
            || err.map_or(false, |e| e < stopping.tol())
            || (b - a).abs() / 2.0 < stopping.tol();

        // narrow to the half holding the sign change
        if f_a * f_c < 0.0 {
            b = c;
        } else {
            a = c;
            f_a = f_c;
        }
        c_old = Some(c);

        Ok(Step {
            record,
            estimate: c,
            residual: f_c.abs(),
            converged,
        })
    })
}

/// Root finding via Regula Falsi (false position).
///
/// Same bracket precondition and narrowing as bisection, but the
/// candidate is the secant through the bracket endpoints.  Convergence
/// is tested on the candidate delta only; one endpoint may stagnate,
/// so the bracket width never shrinks below a method-dependent floor
/// and is not consulted.
pub fn regula_falsi<F>(
    f: &F,
    bracket: &Bounds,
    stopping: &Stopping,
) -> Result<RunResult, RootError>
where
    F: RealFnEval,
{
    let mut a = bracket.a;
    let mut b = bracket.b;
    let mut f_a = f.eval_f(a);
    let mut f_b = f.eval_f(b);
    if !straddles_root(f_a, f_b) {
        return Err(RootError::InvalidBracket { f_a, f_b });
    }

    let mut c_old: Option<f64> = None;
    iterative_root_find(Method::RegulaFalsi, stopping, move |i| {
        if f_b - f_a == 0.0 {
            return Err(RootError::DegenerateStep { x: a });
        }
        let c = (a * f_b - b * f_a) / (f_b - f_a);
        let f_c = f.eval_f(c);
        let err = c_old.map(|prev| (c - prev).abs());

        let record = IterationRecord::Bracket {
            iteration: i,
            a,
            b,
            c,
            f_c,
            err,
        };
        let converged = f_c == 0.0 || err.map_or(false, |e| e < stopping.tol());

        if f_a * f_c < 0.0 {
            b = c;
            f_b = f_c;
        } else {
            a = c;
            f_a = f_c;
        }
        c_old = Some(c);

        Ok(Step {
            record,
            estimate: c,
            residual: f_c.abs(),
            converged,
        })
    })
}

/// Root finding via the Secant Method.
///
/// Needs two starting points but no bracket and no derivative.  Each
/// pass slides the point pair forward: (x0, x1) <- (x1, x2).
pub fn secant<F>(f: &F, x0: f64, x1: f64, stopping: &Stopping) -> Result<RunResult, RootError>
where
    F: RealFnEval,
{
    assert!(x0.is_finite() && x1.is_finite());

    let mut x0 = x0;
    let mut x1 = x1;
    iterative_root_find(Method::Secant, stopping, move |i| {
        let f0 = f.eval_f(x0);
        let f1 = f.eval_f(x1);
        if f1 - f0 == 0.0 {
            return Err(RootError::DegenerateStep { x: x1 });
        }
        let x2 = x1 - f1 * (x1 - x0) / (f1 - f0);
        let f2 = f.eval_f(x2);
        let err = (x2 - x1).abs();

        let record = IterationRecord::Secant {
            iteration: i,
            x0,
            x1,
            x2,
            f_x2: f2,
            err,
        };
        let converged = f2 == 0.0 || err < stopping.tol();

        x0 = x1;
        x1 = x2;

        Ok(Step {
            record,
            estimate: x2,
            residual: f2.abs(),
            converged,
        })
    })
}

/// Root finding using Newton-Raphson.
///
/// The `start` indicates the initial guess.  For guesses sufficiently
/// close to the root this algorithm has quadratic convergence.  This
/// algorithm requires the first derivative of f(x); if an analytic
/// derivative is not available, consider [`secant`] or
/// [`modified_secant`].
///
/// The zero-residual fast path tests f at the pre-step point x_n, not
/// at x_{n+1}; callers relying on documented iteration counts depend
/// on that ordering.
pub fn newton_raphson<F>(f: &F, start: f64, stopping: &Stopping) -> Result<RunResult, RootError>
where
    F: RealFnEval + RealDfEval,
{
    assert!(start.is_finite());

    let mut x = start;
    iterative_root_find(Method::NewtonRaphson, stopping, move |i| {
        let f_x = f.eval_f(x);
        let df_x = f.eval_df(x);
        if df_x == 0.0 {
            return Err(RootError::ZeroDerivative { x });
        }
        let x_next = x - f_x / df_x;
        let err = (x_next - x).abs();

        let record = IterationRecord::Newton {
            iteration: i,
            x,
            f_x,
            df_x,
            x_next,
            err,
        };
        let converged = f_x == 0.0 || err < stopping.tol();

        x = x_next;

        Ok(Step {
            record,
            estimate: x_next,
            residual: f.eval_f(x_next).abs(),
            converged,
        })
    })
}

/// Fixed-point iteration on x = g(x).
///
/// The caller supplies the iteration function g whose fixed point is
/// the desired root.  There is no f to evaluate, so convergence is
/// judged on the step delta alone and the reported residual is the
/// final |g(x) - x| step error rather than a function value.
pub fn fixed_point<G>(g: &G, start: f64, stopping: &Stopping) -> Result<RunResult, RootError>
where
    G: RealFnEval,
{
    assert!(start.is_finite());

    let mut x = start;
    iterative_root_find(Method::FixedPoint, stopping, move |i| {
        let g_x = g.eval_f(x);
        let err = (g_x - x).abs();

        let record = IterationRecord::FixedPoint {
            iteration: i,
            x,
            g_x,
            err,
        };
        let converged = err < stopping.tol();

        x = g_x;

        Ok(Step {
            record,
            estimate: g_x,
            residual: err,
            converged,
        })
    })
}

/// Root finding via the Modified Secant Method.
///
/// Approximates the derivative by perturbing the current iterate by the
/// fraction `delta`, so only one starting point is needed.  A `start`
/// of exactly zero makes the perturbation vanish and fails the first
/// step as degenerate.
pub fn modified_secant<F>(
    f: &F,
    start: f64,
    delta: f64,
    stopping: &Stopping,
) -> Result<RunResult, RootError>
where
    F: RealFnEval,
{
    assert!(start.is_finite() && delta.is_finite());

    let mut x = start;
    iterative_root_find(Method::ModifiedSecant, stopping, move |i| {
        let f_x = f.eval_f(x);
        let denom = f.eval_f(x + delta * x) - f_x;
        if denom == 0.0 {
            return Err(RootError::DegenerateStep { x });
        }
        let x_next = x - (delta * x * f_x) / denom;
        let err = (x_next - x).abs();

        let record = IterationRecord::ModifiedSecant {
            iteration: i,
            x,
            f_x,
            x_next,
            err,
        };
        let converged = err < stopping.tol();

        x = x_next;

        Ok(Step {
            record,
            estimate: x_next,
            residual: f.eval_f(x_next).abs(),
            converged,
        })
    })
}

/// Bundles a method's evaluators and initial data for the dispatching
/// [`run`] entry point.
///
/// Useful when the method is picked at runtime (a menu choice, a form
/// field); code that knows the method statically can call the solver
/// functions directly.
#[derive(Clone)]
pub enum Problem<'a> {
    Bisection {
        f: &'a dyn Fn(f64) -> f64,
        bracket: Bounds,
    },
    RegulaFalsi {
        f: &'a dyn Fn(f64) -> f64,
        bracket: Bounds,
    },
    Secant {
        f: &'a dyn Fn(f64) -> f64,
        x0: f64,
        x1: f64,
    },
    NewtonRaphson {
        f: &'a dyn Fn(f64) -> f64,
        df: &'a dyn Fn(f64) -> f64,
        x0: f64,
    },
    FixedPoint {
        g: &'a dyn Fn(f64) -> f64,
        x0: f64,
    },
    ModifiedSecant {
        f: &'a dyn Fn(f64) -> f64,
        x0: f64,
        delta: f64,
    },
}

impl Problem<'_> {
    pub fn method(&self) -> Method {
        match self {
            Problem::Bisection { .. } => Method::Bisection,
            Problem::RegulaFalsi { .. } => Method::RegulaFalsi,
            Problem::Secant { .. } => Method::Secant,
            Problem::NewtonRaphson { .. } => Method::NewtonRaphson,
            Problem::FixedPoint { .. } => Method::FixedPoint,
            Problem::ModifiedSecant { .. } => Method::ModifiedSecant,
        }
    }
}

/// Single entry point over all six methods.
///
/// Wraps the problem's evaluators and dispatches to the matching solver
/// function.  Each invocation owns its loop state exclusively, so
/// concurrent runs need no coordination.
pub fn run(problem: Problem<'_>, stopping: &Stopping) -> Result<RunResult, RootError> {
    match problem {
        Problem::Bisection { f, bracket } => bisection(&RealFn::new(&f), &bracket, stopping),
        Problem::RegulaFalsi { f, bracket } => regula_falsi(&RealFn::new(&f), &bracket, stopping),
        Problem::Secant { f, x0, x1 } => secant(&RealFn::new(&f), x0, x1, stopping),
        Problem::NewtonRaphson { f, df, x0 } => {
            newton_raphson(&RealFnAndFirst::new(&f, &df), x0, stopping)
        }
        Problem::FixedPoint { g, x0 } => fixed_point(&RealFn::new(&g), x0, stopping),
        Problem::ModifiedSecant { f, x0, delta } => {
            modified_secant(&RealFn::new(&f), x0, delta, stopping)
        }
    }
}
