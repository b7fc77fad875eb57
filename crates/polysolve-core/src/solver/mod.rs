//! Root-finding engine: closed-form solvers for degree 1–2 and the
//! Durand–Kerner simultaneous iteration for degree ≥ 3.

pub mod closed_form;
pub mod durand_kerner;

use num_complex::Complex64;
use thiserror::Error;

/// Errors surfaced by the solver instead of silently returning
/// non-finite "roots".
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The coefficient vector is shorter than two entries (degree < 1).
    #[error("polynomial needs at least 2 coefficients, got {count}")]
    TooFewCoefficients { count: usize },

    /// The leading coefficient is zero, so the polynomial's effective
    /// degree is lower than its coefficient count claims.
    #[error("leading coefficient is zero (degenerate polynomial)")]
    DegenerateLeadingCoefficient,

    /// Two root estimates coincided during iteration, making the
    /// Durand–Kerner denominator product zero.
    #[error("root estimates coincided at iteration {iteration} (numerical singularity)")]
    NumericalSingularity { iteration: usize },
}

/// Finds all complex roots of a real-coefficient polynomial.
///
/// `coefficients` are ordered leading-to-constant; the degree is
/// `coefficients.len() - 1`. Degree 1 and 2 use the exact closed-form
/// formulas; degree ≥ 3 uses Durand–Kerner. Returns exactly `degree` roots
/// counted with multiplicity, in solver-internal order (formula order for
/// the closed forms, final iterate order for Durand–Kerner).
///
/// Pure function of the coefficient vector: no side effects, no shared
/// state, deterministic for a given input.
///
/// # Errors
///
/// Returns [`SolveError`] for a too-short coefficient vector, a zero
/// leading coefficient, or a singular Durand–Kerner denominator.
pub fn solve(coefficients: &[f64]) -> Result<Vec<Complex64>, SolveError> {
    if coefficients.len() < 2 {
        return Err(SolveError::TooFewCoefficients {
            count: coefficients.len(),
        });
    }
    if coefficients[0] == 0.0 {
        return Err(SolveError::DegenerateLeadingCoefficient);
    }
    match coefficients.len() - 1 {
        1 => closed_form::solve_linear(coefficients[0], coefficients[1]),
        2 => closed_form::solve_quadratic(coefficients[0], coefficients[1], coefficients[2]),
        _ => durand_kerner::solve_durand_kerner(coefficients),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
