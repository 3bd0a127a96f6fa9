/// A smooth cumulative percent-passing function of sieve size (mm).
pub trait Curve {
    fn value(&self, sieve_size: f64) -> f64;

    /// Sieve size at which the curve reaches `percent`, if it ever does.
    fn inverse(&self, percent: f64) -> Option<f64>;
}
