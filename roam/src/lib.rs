//! # roam — roaming-message history retrieval
//!
//! `roam` is a modular Rust library for pulling a peer's server-stored
//! message history over a paginated request/response protocol. It consists of
//! two focused sub-crates wired together here for convenience:
//!
//! | Sub-crate     | Role                                                  |
//! |---------------|-------------------------------------------------------|
//! | `roam-wire`   | Wire-facing record types and field-semantics helpers  |
//! | `roam-client` | Pagination engine, filters, consumption adapters      |
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use roam::client::{RoamingContact, RoamingFilter, RoamingMessages};
//!
//! # async fn f(channel: impl roam::client::PacketChannel, codec: impl roam::client::EnvelopeCodec) -> Result<(), roam::client::RoamingError> {
//! let roaming = RoamingMessages::new(&channel, &codec, RoamingContact::Friend { uin: 123_456 });
//!
//! let mut stream = roaming.messages_in(0, i64::MAX, Some(RoamingFilter::Received));
//! while let Some(chain) = stream.next().await? {
//!     // each `chain` is one decoded historical message
//! }
//! # Ok(()) }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Re-export of [`roam_wire`] — request/response/envelope records.
pub use roam_wire as wire;

/// Re-export of [`roam_client`] — engine, filters, stream and iterator.
pub use roam_client as client;
