/// A validated, immutable mapping from input to output.
pub trait Interpolator {
    /// evaluates single point
    /// never fails: configuration is checked when the interpolant is built
    fn eval(&self, x: f64) -> f64;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// first and last breakpoint
    fn domain(&self) -> (f64, f64);
}
