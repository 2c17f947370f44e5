/// Trait evaluating f(x) with x in R^1.
///
/// Evaluators must be deterministic and side-effect free; a solver may
/// invoke them many times per run.
pub trait RealFnEval {
    fn eval_f(&self, x: f64) -> f64;
}

/// Trait evaluating the first derivative df(x) with x in R^1.
pub trait RealDfEval {
    fn eval_df(&self, x: f64) -> f64;
}

/// Wraps a function to implement RealFnEval.
pub struct RealFn<'a, F>
where
    F: Fn(f64) -> f64,
{
    pub f: &'a F,
}

impl<'a, F> RealFn<'a, F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(f: &'a F) -> RealFn<'a, F> {
        RealFn { f }
    }
}

impl<F> RealFnEval for RealFn<'_, F>
where
    F: Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

/// Wraps functions to implement RealFnEval and RealDfEval.
pub struct RealFnAndFirst<'a, F1, F2>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
{
    pub f: &'a F1,
    pub df: &'a F2,
}

impl<'a, F1, F2> RealFnAndFirst<'a, F1, F2>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
{
    pub fn new(f: &'a F1, df: &'a F2) -> RealFnAndFirst<'a, F1, F2> {
        RealFnAndFirst { f, df }
    }
}

impl<F1, F2> RealFnEval for RealFnAndFirst<'_, F1, F2>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<F1, F2> RealDfEval for RealFnAndFirst<'_, F1, F2>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
{
    fn eval_df(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}
