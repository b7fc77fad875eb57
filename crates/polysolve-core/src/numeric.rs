//! Complex-arithmetic helpers shared by all solver paths.
//!
//! The base type is [`num_complex::Complex64`]: an immutable pair of `f64`
//! components whose arithmetic always produces a new value, and whose
//! [`norm`](num_complex::Complex::norm) is the hypot-based Euclidean
//! magnitude (no premature overflow of the squared terms).
//!
//! The one thing `Complex64` does *not* give us is a division that refuses
//! a singular denominator: `a / b` with `b == 0` silently yields
//! infinite/NaN components. Every solver-side division with a
//! data-dependent denominator goes through [`checked_div`] instead.

use num_complex::Complex64;

/// Divides `num` by `den`, returning `None` when the denominator is
/// exactly zero.
///
/// The singularity test is `den.norm_sqr() == 0.0`, which is true iff both
/// components are zero (or a component is NaN-free zero after underflow).
/// No tolerance is applied: a tiny-but-nonzero denominator divides
/// normally and the caller sees the resulting large value.
#[inline]
pub fn checked_div(num: Complex64, den: Complex64) -> Option<Complex64> {
    if den.norm_sqr() == 0.0 {
        None
    } else {
        Some(num / den)
    }
}

/// Evaluates a polynomial at a complex point using Horner's method.
///
/// `coefficients` are ordered leading-to-constant (`coefficients[0]` is the
/// highest-degree term). The accumulator starts at zero and folds
/// `acc = acc * x + c` over the coefficients, costing one multiplication
/// per coefficient.
pub fn evaluate(coefficients: &[f64], x: Complex64) -> Complex64 {
    let mut acc = Complex64::new(0.0, 0.0);
    for &c in coefficients {
        acc = acc * x + Complex64::new(c, 0.0);
    }
    acc
}

// ── Tests ─────────────────────────────────────────────────────────────────────
