// src/escape.rs

//! The escape-time iteration at the heart of the pipeline.
//!
//! `z ← z² + c` from `z₀ = 0`, stopping as soon as `|z|² > 4` (escape radius
//! 2, compared on the squared magnitude to avoid a square root per step) or
//! the iteration budget runs out.

use num_complex::Complex64;

/// Outcome of iterating a single complex constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeResult {
    /// Step count at which the iterate first exceeded the escape radius, or
    /// the full budget if it never did.
    pub iterations: u32,
    /// The last computed iterate, consumed by the smoothed color scheme.
    pub z: Complex64,
}

impl EscapeResult {
    /// True when the point exhausted the budget without escaping, i.e. it is
    /// in the set or indistinguishable from it at this budget.
    #[inline]
    pub fn converged(&self, max_iterations: u32) -> bool {
        self.iterations == max_iterations
    }
}

/// Runs the escape-time iteration for `c`.
///
/// Deterministic and side-effect free; safe to call concurrently for
/// different `c` with no synchronization. Total for all finite inputs.
#[inline]
pub fn evaluate(c: Complex64, max_iterations: u32) -> EscapeResult {
    let mut z = Complex64::new(0.0, 0.0);
    let mut iterations = 0;
    while iterations < max_iterations && z.norm_sqr() <= 4.0 {
        z = z * z + c;
        iterations += 1;
    }
    EscapeResult { iterations, z }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        for budget in [1, 10, 1000] {
            let result = evaluate(Complex64::new(0.0, 0.0), budget);
            assert_eq!(result.iterations, budget);
            assert!(result.converged(budget));
        }
    }

    #[test]
    fn two_escapes_at_iteration_two() {
        // z₁ = 2 sits exactly on the escape radius (|z|² = 4, not > 4), so
        // one more step is taken: z₂ = 6, which escapes.
        let result = evaluate(Complex64::new(2.0, 0.0), 100);
        assert_eq!(result.iterations, 2);
        assert!(!result.converged(100));
        assert_eq!(result.z, Complex64::new(6.0, 0.0));
    }

    #[test]
    fn far_exterior_point_escapes_immediately() {
        let result = evaluate(Complex64::new(10.0, 10.0), 100);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let c = Complex64::new(-0.7436, 0.1318);
        let a = evaluate(c, 500);
        let b = evaluate(c, 500);
        assert_eq!(a.iterations, b.iterations);
        assert_eq!(a.z, b.z);
    }
}
