//! Maps a decoded solve request to a response.
//!
//! This is the whole application layer: one pure function from request to
//! response. Keeping it free of sockets and async makes the solver-fault
//! mapping unit-testable without a listener, and means the same function
//! serves any number of concurrent connection tasks.

use tracing::{debug, warn};

use polysolve_core::{solve, SolveRequest, SolveResponse, SolveStatus};

/// Solves the request's polynomial and wraps the outcome in a response.
///
/// Solver faults never escape as errors here: each [`polysolve_core::SolveError`]
/// kind becomes the corresponding [`SolveStatus`], so a degenerate or
/// singular request produces a well-formed failure frame instead of
/// tearing down anything beyond its own connection.
pub fn respond(request: &SolveRequest) -> SolveResponse {
    match solve(&request.coefficients) {
        Ok(roots) => {
            debug!(
                "solved degree-{} polynomial ({} roots)",
                request.degree(),
                roots.len()
            );
            SolveResponse::success(roots)
        }
        Err(e) => {
            warn!("solve failed for degree-{} request: {e}", request.degree());
            SolveResponse::failed(SolveStatus::from(&e))
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
