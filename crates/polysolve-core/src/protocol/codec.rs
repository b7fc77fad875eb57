//! Binary codec for solve requests and responses.
//!
//! Request wire format (client → server), all fields big-endian:
//! ```text
//! [degree:i32][coeff[0]:f64]...[coeff[degree]:f64]
//! ```
//! Total request size: `4 + 8·(degree+1)` bytes. `coeff[0]` is the leading
//! coefficient, `coeff[degree]` the constant term.
//!
//! Response wire format (server → client), default framing:
//! ```text
//! [status:i32][root_count:i32][re[0]:f64][im[0]:f64]...
//! ```
//! Total response size: `8 + 16·root_count` bytes. `root_count` equals the
//! request degree on success and 0 on failure.
//!
//! The *compat* framing drops the status field and matches the original
//! protocol byte-for-byte (`[root_count:i32]` + pairs, no error path). It
//! exists for strict compatibility testing against legacy callers only.
//!
//! Decoders follow the streaming contract used throughout this workspace:
//! they take the front of a receive buffer and return the decoded value
//! together with the number of bytes consumed, or
//! [`ProtocolError::InsufficientData`] when the buffer does not yet hold a
//! complete frame (the caller reads more and retries).

use num_complex::Complex64;
use thiserror::Error;

use crate::protocol::messages::{SolveRequest, SolveResponse, SolveStatus};

/// Errors that can occur during message encoding or decoding.
#[derive(Debug, Error, PartialEq)]
pub enum ProtocolError {
    /// The byte slice is shorter than the complete frame. Not fatal for a
    /// streaming reader: buffer more bytes and retry.
    #[error("insufficient data: need at least {needed} bytes, got {available}")]
    InsufficientData { needed: usize, available: usize },

    /// The degree field is below the protocol minimum of 1.
    #[error("invalid polynomial degree: {0}")]
    InvalidDegree(i32),

    /// The status field is not a recognized [`SolveStatus`] value.
    #[error("unknown response status: {0}")]
    UnknownStatus(i32),

    /// The root-count field is negative.
    #[error("invalid root count: {0}")]
    InvalidRootCount(i32),
}

// ── Request ───────────────────────────────────────────────────────────────────

/// Encodes a [`SolveRequest`] into its wire frame.
pub fn encode_request(request: &SolveRequest) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + 8 * request.coefficients.len());
    buf.extend_from_slice(&(request.degree() as i32).to_be_bytes());
    for &c in &request.coefficients {
        buf.extend_from_slice(&c.to_be_bytes());
    }
    buf
}

/// Decodes one [`SolveRequest`] from the beginning of `bytes`.
///
/// Returns the request and the total number of bytes consumed so the
/// caller can advance its read cursor. Coefficient bits pass through
/// untouched: an encode→decode round trip is bit-identical.
///
/// # Errors
///
/// [`ProtocolError::InsufficientData`] until the full frame is buffered;
/// [`ProtocolError::InvalidDegree`] for a degree below 1.
pub fn decode_request(bytes: &[u8]) -> Result<(SolveRequest, usize), ProtocolError> {
    let degree = read_i32(bytes, 0)?;
    if degree < 1 {
        return Err(ProtocolError::InvalidDegree(degree));
    }

    let count = degree as usize + 1;
    let total = 4 + 8 * count;
    if bytes.len() < total {
        return Err(ProtocolError::InsufficientData {
            needed: total,
            available: bytes.len(),
        });
    }

    let mut coefficients = Vec::with_capacity(count);
    let mut off = 4;
    for _ in 0..count {
        coefficients.push(read_f64(bytes, off)?);
        off += 8;
    }
    Ok((SolveRequest { coefficients }, total))
}

// ── Response (default framing) ────────────────────────────────────────────────

/// Encodes a [`SolveResponse`] with the explicit status field.
pub fn encode_response(response: &SolveResponse) -> Vec<u8> {
    let mut buf = Vec::with_capacity(8 + 16 * response.roots.len());
    buf.extend_from_slice(&(response.status as i32).to_be_bytes());
    buf.extend_from_slice(&(response.roots.len() as i32).to_be_bytes());
    for root in &response.roots {
        buf.extend_from_slice(&root.re.to_be_bytes());
        buf.extend_from_slice(&root.im.to_be_bytes());
    }
    buf
}

/// Decodes one status-bearing [`SolveResponse`] from the beginning of
/// `bytes`, returning the response and the bytes consumed.
///
/// # Errors
///
/// [`ProtocolError::InsufficientData`] until the full frame is buffered;
/// [`ProtocolError::UnknownStatus`] / [`ProtocolError::InvalidRootCount`]
/// for out-of-range header fields.
pub fn decode_response(bytes: &[u8]) -> Result<(SolveResponse, usize), ProtocolError> {
    let status_raw = read_i32(bytes, 0)?;
    let status = SolveStatus::try_from(status_raw)
        .map_err(|_| ProtocolError::UnknownStatus(status_raw))?;

    let (roots, consumed) = decode_root_list(bytes, 4)?;
    Ok((SolveResponse { status, roots }, consumed))
}

// ── Response (compat framing) ─────────────────────────────────────────────────

/// Encodes a response in the legacy frame: root count + pairs, no status.
///
/// Only [`SolveStatus::Ok`] responses are representable; the legacy
/// protocol's failure signal is the absence of any response.
pub fn encode_response_compat(response: &SolveResponse) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + 16 * response.roots.len());
    buf.extend_from_slice(&(response.roots.len() as i32).to_be_bytes());
    for root in &response.roots {
        buf.extend_from_slice(&root.re.to_be_bytes());
        buf.extend_from_slice(&root.im.to_be_bytes());
    }
    buf
}

/// Decodes one legacy response frame. The status is always
/// [`SolveStatus::Ok`].
pub fn decode_response_compat(bytes: &[u8]) -> Result<(SolveResponse, usize), ProtocolError> {
    let (roots, consumed) = decode_root_list(bytes, 0)?;
    Ok((SolveResponse::success(roots), consumed))
}

// ── Utility helpers ───────────────────────────────────────────────────────────

/// Reads `[count:i32]` at `offset` followed by `count` (re, im) pairs.
/// Returns the roots and the total bytes consumed from the start of `bytes`.
fn decode_root_list(bytes: &[u8], offset: usize) -> Result<(Vec<Complex64>, usize), ProtocolError> {
    let count_raw = read_i32(bytes, offset)?;
    if count_raw < 0 {
        return Err(ProtocolError::InvalidRootCount(count_raw));
    }
    let count = count_raw as usize;

    let total = offset + 4 + 16 * count;
    if bytes.len() < total {
        return Err(ProtocolError::InsufficientData {
            needed: total,
            available: bytes.len(),
        });
    }

    let mut roots = Vec::with_capacity(count);
    let mut off = offset + 4;
    for _ in 0..count {
        let re = read_f64(bytes, off)?;
        let im = read_f64(bytes, off + 8)?;
        roots.push(Complex64::new(re, im));
        off += 16;
    }
    Ok((roots, total))
}

fn read_i32(buf: &[u8], offset: usize) -> Result<i32, ProtocolError> {
    if buf.len() < offset + 4 {
        return Err(ProtocolError::InsufficientData {
            needed: offset + 4,
            available: buf.len(),
        });
    }
    Ok(i32::from_be_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ]))
}

fn read_f64(buf: &[u8], offset: usize) -> Result<f64, ProtocolError> {
    if buf.len() < offset + 8 {
        return Err(ProtocolError::InsufficientData {
            needed: offset + 8,
            available: buf.len(),
        });
    }
    Ok(f64::from_be_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
        buf[offset + 4],
        buf[offset + 5],
        buf[offset + 6],
        buf[offset + 7],
    ]))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
