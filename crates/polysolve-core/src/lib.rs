//! # polysolve-core
//!
//! Shared library for PolySolve containing the root-finding engine and the
//! binary wire protocol codec.
//!
//! This crate is used by both the server and client applications.
//! It has zero dependencies on sockets or the async runtime.
//!
//! The two top-level modules:
//!
//! - **`solver`** – Finds all complex roots of a real-coefficient polynomial.
//!   Degree 1 and 2 use closed-form formulas; degree ≥ 3 uses the
//!   Durand–Kerner simultaneous iteration. `solver::solve` dispatches by
//!   degree and is a pure function, safely callable from any task.
//!
//! - **`protocol`** – How bytes travel over the network. A solve request is
//!   the polynomial's degree followed by its coefficients; a solve response
//!   is a status code followed by the roots. All fields are big-endian.

pub mod numeric;
pub mod protocol;
pub mod solver;

// Re-export the most-used items at the crate root so callers can write
// `polysolve_core::solve` instead of `polysolve_core::solver::solve`.
pub use protocol::codec::{
    decode_request, decode_response, encode_request, encode_response, ProtocolError,
};
pub use protocol::messages::{SolveRequest, SolveResponse, SolveStatus};
pub use solver::{solve, SolveError};
