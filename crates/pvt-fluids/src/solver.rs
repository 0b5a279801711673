//! Bounded scalar Newton-Raphson root finding.
//!
//! Correlation subcalculations (De Ghetto implicit compressibility, and the
//! bespoke loops in `gas` and `oil`) need small root solves with a fixed
//! iteration budget. The solver never fails by itself: it always returns a
//! value plus an explicit convergence status, and the caller decides whether
//! to fall back, warn, or propagate an error.

/// Scalar Newton solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct RootConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the residual
    pub abs_tol: f64,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            max_iterations: 25,
            abs_tol: 1e-8,
        }
    }
}

/// Scalar Newton iteration result.
#[derive(Clone, Copy, Debug)]
pub struct RootResult {
    /// Last iterate
    pub value: f64,
    /// Residual at the last iterate
    pub residual: f64,
    /// Number of iterations taken
    pub iterations: usize,
    /// Converged flag
    pub converged: bool,
}

/// Newton-Raphson on a scalar residual, converging on `|f(x)| <= abs_tol`.
///
/// A derivative that vanishes or goes non-finite stops the iteration early
/// with `converged: false` and the last valid iterate.
pub fn newton_scalar<F, D>(x0: f64, config: &RootConfig, f: F, df: D) -> RootResult
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut x = x0;
    let mut residual = f(x);

    for iter in 0..config.max_iterations {
        if residual.abs() <= config.abs_tol {
            return RootResult {
                value: x,
                residual,
                iterations: iter,
                converged: true,
            };
        }

        let slope = df(x);
        if slope == 0.0 || !slope.is_finite() {
            return RootResult {
                value: x,
                residual,
                iterations: iter,
                converged: false,
            };
        }

        x -= residual / slope;
        residual = f(x);
    }

    RootResult {
        value: x,
        residual,
        iterations: config.max_iterations,
        converged: residual.abs() <= config.abs_tol,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_quadratic() {
        // Solve x^2 - 4 = 0, starting above the positive root
        let result = newton_scalar(
            3.0,
            &RootConfig::default(),
            |x| x * x - 4.0,
            |x| 2.0 * x,
        );
        assert!(result.converged);
        assert!((result.value - 2.0).abs() < 1e-6);
    }

    #[test]
    fn reports_non_convergence_on_flat_derivative() {
        let result = newton_scalar(0.0, &RootConfig::default(), |_| 1.0, |_| 0.0);
        assert!(!result.converged);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn iteration_budget_is_respected() {
        let config = RootConfig {
            max_iterations: 3,
            abs_tol: 1e-300,
        };
        // Slowly-converging residual; must stop at the budget.
        let result = newton_scalar(10.0, &config, |x| x.powi(3), |x| 3.0 * x * x);
        assert!(result.iterations <= 3);
        assert!(!result.converged);
    }
}
