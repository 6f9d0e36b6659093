//! Record types for the roaming-message history protocol.
//!
//! This crate defines the request/response/envelope records exchanged with
//! the history service, plus the field-semantics helpers that must hold
//! bit-exactly on the wire:
//!
//! * `time_start = 0` is the wire's "unset" sentinel and is clamped to 1
//!   before a request is handed to the transport;
//! * a response without a `messages` field (not an *empty* one) is the sole
//!   end-of-history signal;
//! * the envelope's 32-bit timestamp is an unsigned bit pattern and must be
//!   widened without sign extension.
//!
//! Actual packet encoding/decoding lives with the transport; everything here
//! is plain data.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod envelope;
pub mod request;
pub mod response;

pub use envelope::{MessageEnvelope, MessageHead, widen_unsigned};
pub use request::RoamingRequest;
pub use response::RoamingResponse;
