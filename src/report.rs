//! Data returned by the solvers: method identifiers, per-iteration
//! trace records, and the final run result.

use std::fmt;

/// Identifies which algorithm produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    Bisection,
    RegulaFalsi,
    Secant,
    NewtonRaphson,
    FixedPoint,
    ModifiedSecant,
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Method::Bisection => "bisection",
            Method::RegulaFalsi => "regula_falsi",
            Method::Secant => "secant",
            Method::NewtonRaphson => "newton_raphson",
            Method::FixedPoint => "fixed_point",
            Method::ModifiedSecant => "modified_secant",
        }
    }

    /// Column headers matching this method's [`IterationRecord`]
    /// variant, for callers rendering the trace as a table.
    pub fn trace_headers(&self) -> &'static [&'static str] {
        match self {
            Method::Bisection | Method::RegulaFalsi => {
                &["Iter", "a", "b", "c", "f(c)", "Error"]
            }
            Method::Secant => &["Iter", "x0", "x1", "x2", "f(x2)", "Error"],
            Method::NewtonRaphson => &["Iter", "x", "f(x)", "f'(x)", "x_new", "Error"],
            Method::FixedPoint => &["Iter", "x_old", "x_new", "Error"],
            Method::ModifiedSecant => &["Iter", "x", "f(x)", "x_new", "Error"],
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One row of the iteration trace.  Variants mirror the columns each
/// method exposes.  `iteration` is 1-based and records are immutable
/// once appended.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IterationRecord {
    /// Bracketing methods (bisection, regula falsi).  The endpoints are
    /// those in effect when the candidate was computed.  `err` is None
    /// on the first iteration, where no previous candidate exists.
    Bracket {
        iteration: usize,
        a: f64,
        b: f64,
        c: f64,
        f_c: f64,
        err: Option<f64>,
    },
    Secant {
        iteration: usize,
        x0: f64,
        x1: f64,
        x2: f64,
        f_x2: f64,
        err: f64,
    },
    Newton {
        iteration: usize,
        x: f64,
        f_x: f64,
        df_x: f64,
        x_next: f64,
        err: f64,
    },
    FixedPoint {
        iteration: usize,
        x: f64,
        g_x: f64,
        err: f64,
    },
    ModifiedSecant {
        iteration: usize,
        x: f64,
        f_x: f64,
        x_next: f64,
        err: f64,
    },
}

impl IterationRecord {
    /// 1-based loop pass that produced this record.
    pub fn iteration(&self) -> usize {
        match self {
            IterationRecord::Bracket { iteration, .. }
            | IterationRecord::Secant { iteration, .. }
            | IterationRecord::Newton { iteration, .. }
            | IterationRecord::FixedPoint { iteration, .. }
            | IterationRecord::ModifiedSecant { iteration, .. } => *iteration,
        }
    }

    /// The candidate root produced by this pass.  The final record's
    /// estimate always equals the run's returned root.
    pub fn estimate(&self) -> f64 {
        match self {
            IterationRecord::Bracket { c, .. } => *c,
            IterationRecord::Secant { x2, .. } => *x2,
            IterationRecord::Newton { x_next, .. } => *x_next,
            IterationRecord::FixedPoint { g_x, .. } => *g_x,
            IterationRecord::ModifiedSecant { x_next, .. } => *x_next,
        }
    }

    /// Distance to the previous candidate, or None when no previous
    /// candidate exists.
    pub fn step_error(&self) -> Option<f64> {
        match self {
            IterationRecord::Bracket { err, .. } => *err,
            IterationRecord::Secant { err, .. }
            | IterationRecord::Newton { err, .. }
            | IterationRecord::FixedPoint { err, .. }
            | IterationRecord::ModifiedSecant { err, .. } => Some(*err),
        }
    }
}

/// Final outcome of a solver run, constructed once at termination.
///
/// The trace always holds exactly `iterations` records.  A run that
/// exhausts its iteration cap still yields a RunResult: compare
/// `iterations` against the cap (and look at `residual`) to judge
/// convergence quality.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    pub method: Method,
    pub root: f64,
    /// |f(root)|, except fixed-point iteration, which has no f and
    /// reports the final |g(x) - x| step error instead.
    pub residual: f64,
    pub iterations: usize,
    pub trace: Vec<IterationRecord>,
}
