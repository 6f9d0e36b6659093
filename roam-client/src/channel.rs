//! Collaborator seams: the transport that carries one request/response pair
//! and the codec that turns a raw envelope into a decoded message chain.
//!
//! Both are supplied by the embedding client; this crate only drives them.

use std::future::Future;

use roam_wire::{MessageEnvelope, RoamingRequest, RoamingResponse};

use crate::errors::{ChannelError, DecodeError};

// ─── PacketChannel ────────────────────────────────────────────────────────────

/// Sends one roaming-history request over an established session.
///
/// The channel owns everything below the pagination layer: framing,
/// encryption, serialization, and whatever timeout policy it wants. This
/// crate imposes none and never aborts a send that is already in flight.
pub trait PacketChannel {
    /// Send `request` and wait for the server's reply.
    fn send(
        &self,
        request: &RoamingRequest,
    ) -> impl Future<Output = Result<RoamingResponse, ChannelError>> + Send;
}

// ─── EnvelopeCodec ────────────────────────────────────────────────────────────

/// Decodes one raw envelope into a structured message chain.
///
/// Decoding may itself talk to the network (e.g. to fetch referenced media),
/// hence the async contract. A failure aborts the whole retrieval; pages are
/// never partially delivered around a bad envelope.
pub trait EnvelopeCodec {
    /// The decoded message type handed to the caller. Ownership transfers on
    /// emission; the retrieval machinery keeps no copy.
    type Chain: Send;

    /// Decode a single envelope.
    fn decode(
        &self,
        envelope: &MessageEnvelope,
    ) -> impl Future<Output = Result<Self::Chain, DecodeError>> + Send;
}
