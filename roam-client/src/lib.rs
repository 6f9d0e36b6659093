//! # roam-client
//!
//! Client-side retrieval of roaming (server-stored historical) messages.
//!
//! The server never pushes full history; it answers explicit paged requests,
//! each reply carrying the cursor for the next one. This crate owns that
//! pagination state machine and exposes it two ways:
//!
//! - [`RoamingStream`], a lazy, cancellable async sequence for callers
//!   running inside a runtime
//! - [`BlockingMessageIter`], a pull-style blocking iterator for callers
//!   outside one
//!
//! Both drive the same engine, so cursor seeding, `time_start` clamping and
//! the page-size hint cannot diverge between them. Transport, session and
//! payload decoding stay behind the [`PacketChannel`] and [`EnvelopeCodec`]
//! traits; this crate performs no retries, imposes no timeouts and caches
//! nothing.
//!
//! ## Example
//! ```rust,no_run
//! use roam_client::{PacketChannel, EnvelopeCodec, RoamingContact, RoamingFilter, RoamingMessages};
//!
//! # async fn f(channel: impl PacketChannel, codec: impl EnvelopeCodec) -> Result<(), roam_client::RoamingError> {
//! let roaming = RoamingMessages::new(&channel, &codec, RoamingContact::Friend { uin: 123_456 });
//!
//! // Everything the friend sent us, newest page first.
//! let mut stream = roaming.messages_in(0, i64::MAX, Some(RoamingFilter::Received));
//! while let Some(chain) = stream.next().await? {
//!     // each `chain` is one decoded historical message
//! }
//! # Ok(()) }
//! ```

#![deny(unsafe_code)]

mod blocking;
mod engine;
mod errors;
mod stream;
pub mod channel;
pub mod contact;
pub mod filter;

pub use blocking::BlockingMessageIter;
pub use channel::{EnvelopeCodec, PacketChannel};
pub use contact::RoamingContact;
pub use engine::{PageCursor, RoamEngine};
pub use errors::{ChannelError, DecodeError, ProtocolError, RoamingError};
pub use filter::{FilterView, RoamingFilter};
pub use stream::RoamingStream;

use tokio::runtime::Handle;

// ─── RoamingConfig ────────────────────────────────────────────────────────────

/// Tunables threaded into every page request.
#[derive(Debug, Clone)]
pub struct RoamingConfig {
    /// Page-size hint sent as the request's `max_count` (default: 1000).
    pub page_size_hint: i32,
    /// Session signature attached to friend-history requests (default: empty).
    pub signature:      Vec<u8>,
    /// Password block attached to friend-history requests (default: empty).
    pub password:       Vec<u8>,
}

impl Default for RoamingConfig {
    fn default() -> Self {
        Self {
            page_size_hint: 1000,
            signature:      Vec::new(),
            password:       Vec::new(),
        }
    }
}

// ─── RoamingMessages ──────────────────────────────────────────────────────────

/// Entry point for retrieving one contact's roaming messages.
///
/// Borrows the channel and codec collaborators; each retrieval started from
/// here is independent, holds its own call-local cursor, and may run
/// concurrently with any other. Serialization below that, if the session
/// needs it, is the channel's concern.
pub struct RoamingMessages<'a, C, D>
where
    C: PacketChannel,
    D: EnvelopeCodec,
{
    channel: &'a C,
    codec:   &'a D,
    contact: RoamingContact,
    config:  RoamingConfig,
}

impl<'a, C, D> RoamingMessages<'a, C, D>
where
    C: PacketChannel,
    D: EnvelopeCodec,
{
    /// Bind the retrieval surface to one contact with default tunables.
    pub fn new(channel: &'a C, codec: &'a D, contact: RoamingContact) -> Self {
        Self::with_config(channel, codec, contact, RoamingConfig::default())
    }

    /// Same as [`new`](Self::new) with explicit tunables.
    pub fn with_config(
        channel: &'a C,
        codec: &'a D,
        contact: RoamingContact,
        config: RoamingConfig,
    ) -> Self {
        Self { channel, codec, contact, config }
    }

    /// Retrieve messages in `[time_start, time_end]` as a lazy async sequence.
    ///
    /// `time_start` and `time_end` are wire timestamps in seconds; no unit
    /// conversion happens here. Passing `None` or `Some(RoamingFilter::Any)`
    /// as `filter` skips header projection entirely.
    pub fn messages_in(
        &self,
        time_start: i64,
        time_end: i64,
        filter: Option<RoamingFilter>,
    ) -> RoamingStream<'a, C, D> {
        RoamingStream::new(self.engine(time_start, time_end, filter))
    }

    /// Retrieve the same range as a blocking [`Iterator`], for callers
    /// outside an async runtime.
    ///
    /// `handle` must belong to a runtime driven elsewhere; each page fetch
    /// blocks the calling thread until the round-trip completes.
    pub fn blocking_iter(
        &self,
        time_start: i64,
        time_end: i64,
        filter: Option<RoamingFilter>,
        handle: Handle,
    ) -> BlockingMessageIter<'a, C, D> {
        BlockingMessageIter::new(self.messages_in(time_start, time_end, filter), handle)
    }

    /// Locate one historical message by its per-conversation id near an
    /// approximate `time`, or report absence.
    ///
    /// The wire offers no dedicated lookup, so this pages through history
    /// bounded above by `time` and matches exactly on the envelope's id
    /// field. `internal_id` is the message's correlation nonce; the wire
    /// provides no way to match on it, so it does not participate in the
    /// search.
    pub async fn find_message(
        &self,
        msg_id: i32,
        _internal_id: i64,
        time: i64,
    ) -> Result<Option<D::Chain>, RoamingError> {
        let mut engine = self.engine(1, time, None);
        while let Some(envelopes) = engine.fetch_page().await? {
            if let Some(envelope) = envelopes.iter().find(|e| e.head.msg_id == msg_id) {
                let chain = self.codec.decode(envelope).await?;
                return Ok(Some(chain));
            }
        }
        Ok(None)
    }

    fn engine(
        &self,
        time_start: i64,
        time_end: i64,
        filter: Option<RoamingFilter>,
    ) -> RoamEngine<'a, C, D> {
        RoamEngine::new(
            self.channel,
            self.codec,
            self.contact,
            self.config.clone(),
            time_start,
            time_end,
            filter,
        )
    }
}
