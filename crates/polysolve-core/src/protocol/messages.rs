//! Solve request and response message types.
//!
//! A connection carries exactly one request and one response. The request
//! is the polynomial (degree + coefficients); the response is a status
//! code and the root set. Byte layout lives in [`super::codec`].

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::solver::SolveError;

/// Default TCP port the solver listens on.
pub const DEFAULT_PORT: u16 = 5000;

/// A polynomial to solve.
///
/// `coefficients` are ordered leading-to-constant and must hold at least
/// two entries (degree ≥ 1). The degree is implied by the length; the wire
/// format carries it explicitly only so the receiver knows how many
/// coefficients to expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub coefficients: Vec<f64>,
}

impl SolveRequest {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// The polynomial degree: one less than the coefficient count.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

/// Response status carried in the first field of the default wire frame.
///
/// `Ok` is the only status the legacy (compat) frame can express; the
/// other variants map solver-side failures that the reference protocol
/// signalled only by dropping the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum SolveStatus {
    Ok = 0,
    DegenerateInput = 1,
    NumericalSingularity = 2,
    InvalidRequest = 3,
}

impl TryFrom<i32> for SolveStatus {
    type Error = ();

    fn try_from(value: i32) -> Result<Self, ()> {
        match value {
            0 => Ok(SolveStatus::Ok),
            1 => Ok(SolveStatus::DegenerateInput),
            2 => Ok(SolveStatus::NumericalSingularity),
            3 => Ok(SolveStatus::InvalidRequest),
            _ => Err(()),
        }
    }
}

impl From<&SolveError> for SolveStatus {
    fn from(err: &SolveError) -> Self {
        match err {
            SolveError::DegenerateLeadingCoefficient => SolveStatus::DegenerateInput,
            SolveError::NumericalSingularity { .. } => SolveStatus::NumericalSingularity,
            SolveError::TooFewCoefficients { .. } => SolveStatus::InvalidRequest,
        }
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SolveStatus::Ok => "ok",
            SolveStatus::DegenerateInput => "degenerate input (zero leading coefficient)",
            SolveStatus::NumericalSingularity => "numerical singularity during iteration",
            SolveStatus::InvalidRequest => "invalid request",
        };
        f.write_str(text)
    }
}

/// The solver's answer: a status and, on success, one root per degree
/// counted with multiplicity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResponse {
    pub status: SolveStatus,
    pub roots: Vec<Complex64>,
}

impl SolveResponse {
    /// A successful response carrying the root set.
    pub fn success(roots: Vec<Complex64>) -> Self {
        Self {
            status: SolveStatus::Ok,
            roots,
        }
    }

    /// A failed response with no roots.
    pub fn failed(status: SolveStatus) -> Self {
        Self {
            status,
            roots: Vec::new(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
