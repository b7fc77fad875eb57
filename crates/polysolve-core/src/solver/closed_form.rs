//! Exact closed-form solvers for degree 1 and degree 2.

use num_complex::Complex64;

use super::SolveError;

/// Discriminants closer to zero than this are treated as exactly zero, so
/// floating error cannot turn a repeated real root into a spurious
/// conjugate pair.
pub const DISCRIMINANT_EPS: f64 = 1e-10;

/// Solves `a·x + b = 0`.
///
/// # Errors
///
/// Returns [`SolveError::DegenerateLeadingCoefficient`] when `a == 0`.
pub fn solve_linear(a: f64, b: f64) -> Result<Vec<Complex64>, SolveError> {
    if a == 0.0 {
        return Err(SolveError::DegenerateLeadingCoefficient);
    }
    Ok(vec![Complex64::new(-b / a, 0.0)])
}

/// Solves `a·x² + b·x + c = 0` via the quadratic formula.
///
/// Always returns two roots counted with multiplicity, in formula order:
/// the `+√d` root first for a positive discriminant, the `+i` root first
/// for a negative one. A discriminant within [`DISCRIMINANT_EPS`] of zero
/// yields the repeated real root `-b/2a` twice.
///
/// # Errors
///
/// Returns [`SolveError::DegenerateLeadingCoefficient`] when `a == 0`.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<Vec<Complex64>, SolveError> {
    if a == 0.0 {
        return Err(SolveError::DegenerateLeadingCoefficient);
    }

    let disc = b * b - 4.0 * a * c;

    if disc.abs() < DISCRIMINANT_EPS {
        let root = Complex64::new(-b / (2.0 * a), 0.0);
        return Ok(vec![root, root]);
    }

    if disc > 0.0 {
        let sqrt_disc = disc.sqrt();
        Ok(vec![
            Complex64::new((-b + sqrt_disc) / (2.0 * a), 0.0),
            Complex64::new((-b - sqrt_disc) / (2.0 * a), 0.0),
        ])
    } else {
        let re = -b / (2.0 * a);
        let im = (-disc).sqrt() / (2.0 * a);
        Ok(vec![Complex64::new(re, im), Complex64::new(re, -im)])
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
