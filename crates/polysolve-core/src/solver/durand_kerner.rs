//! Durand–Kerner simultaneous root approximation.
//!
//! Approximates all `n = degree` roots at once with a Newton-like update
//! that divides the polynomial value at each estimate by the product of
//! its pairwise differences with every other estimate. The method is
//! general: it is also correct (if less efficient) for degree 1–2, but the
//! dispatcher only routes degree ≥ 3 here.

use num_complex::Complex64;
use tracing::trace;

use super::SolveError;
use crate::numeric::{checked_div, evaluate};

/// Iteration cap. A polynomial that has not converged by then returns the
/// best available approximation with no error.
pub const MAX_ITERATIONS: usize = 100;

/// Absolute per-root movement below which the sweep counts as converged.
pub const CONVERGENCE_TOL: f64 = 1e-8;

/// Finds all roots of a real-coefficient polynomial of degree ≥ 1.
///
/// The polynomial is first normalized to monic form (every coefficient
/// divided by the leading one). Roots are unchanged by the scaling, and
/// the Durand–Kerner correction `p(z)/Π(z−zⱼ)` only contracts toward the
/// roots when `p` is monic; without the normalization a leading
/// coefficient of magnitude ≥ 2 makes the sweep oscillate or diverge.
///
/// Initial estimates are spread uniformly on the unit circle
/// (`exp(2πi·k/n)` for `k` in `0..n`), which makes the iteration fully
/// deterministic. Each sweep is a simultaneous (Jacobi-style) update: all
/// `n` new estimates are computed from the previous sweep's complete
/// vector, never from partially-updated values. That ordering is part of
/// the algorithm's contract and is why each sweep builds a fresh vector
/// instead of mutating in place.
///
/// Iteration stops early once every estimate moved by at most
/// [`CONVERGENCE_TOL`], or after [`MAX_ITERATIONS`] sweeps.
///
/// # Errors
///
/// Returns [`SolveError::NumericalSingularity`] when two estimates
/// coincide and the correction denominator becomes exactly zero, and
/// [`SolveError`] input variants for a degenerate coefficient vector.
pub fn solve_durand_kerner(coefficients: &[f64]) -> Result<Vec<Complex64>, SolveError> {
    if coefficients.len() < 2 {
        return Err(SolveError::TooFewCoefficients {
            count: coefficients.len(),
        });
    }
    let leading = coefficients[0];
    if leading == 0.0 {
        return Err(SolveError::DegenerateLeadingCoefficient);
    }
    let monic: Vec<f64> = coefficients.iter().map(|c| c / leading).collect();

    let n = monic.len() - 1;

    let mut guesses: Vec<Complex64> = (0..n)
        .map(|k| {
            let angle = 2.0 * std::f64::consts::PI * k as f64 / n as f64;
            Complex64::new(angle.cos(), angle.sin())
        })
        .collect();

    for iteration in 0..MAX_ITERATIONS {
        let mut next = Vec::with_capacity(n);
        let mut converged = true;

        for i in 0..n {
            let numerator = evaluate(&monic, guesses[i]);
            let mut denominator = Complex64::new(1.0, 0.0);
            for j in 0..n {
                if i != j {
                    denominator *= guesses[i] - guesses[j];
                }
            }

            let correction = checked_div(numerator, denominator)
                .ok_or(SolveError::NumericalSingularity { iteration })?;
            let updated = guesses[i] - correction;

            if (guesses[i] - updated).norm() > CONVERGENCE_TOL {
                converged = false;
            }
            next.push(updated);
        }

        guesses = next;
        if converged {
            trace!("converged after {} iteration(s)", iteration + 1);
            break;
        }
    }

    Ok(guesses)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
