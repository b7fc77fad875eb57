//! Protocol module containing message types and the binary codec.

pub mod codec;
pub mod messages;

pub use codec::{
    decode_request, decode_response, decode_response_compat, encode_request, encode_response,
    encode_response_compat, ProtocolError,
};
pub use messages::*;
