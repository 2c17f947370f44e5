//! Zero-of-function solvers: classical iterative root-finding for real
//! scalar functions.
//!
//! Six methods share one iteration contract: Bisection, Regula Falsi,
//! Secant, Newton-Raphson, Fixed-Point Iteration, and Modified Secant.
//! Every run is a pure, bounded loop over a caller-supplied evaluator;
//! it returns the root estimate, the final residual, the iteration
//! count, and an ordered per-iteration trace suitable for rendering as
//! a table.
//!
//! Functions are wrapped before use — see the `wrap` module.  Pick a
//! solver from the `solver` module directly, or dispatch a runtime
//! method choice through [`solver::run`].
//!
//! ```
//! use zerofind::bracket::Bounds;
//! use zerofind::convergence::Stopping;
//! use zerofind::solver::{run, Problem};
//!
//! let f = |x: f64| x * x - 2.0;
//! let stopping = Stopping::new(50, 1e-9).expect("stopping");
//!
//! let result = run(
//!     Problem::Secant { f: &f, x0: 1.0, x1: 2.0 },
//!     &stopping,
//! )
//! .expect("root");
//!
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
//! assert_eq!(result.trace.len(), result.iterations);
//! ```

pub mod bracket;
pub mod convergence;
pub mod report;
pub mod solver;
pub mod wrap;
