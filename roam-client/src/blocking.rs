//! Blocking pull-style consumption for callers outside an async runtime.

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::channel::{EnvelopeCodec, PacketChannel};
use crate::errors::RoamingError;
use crate::stream::RoamingStream;

// ─── BlockingMessageIter ──────────────────────────────────────────────────────

/// Blocking iterator over a roaming-history retrieval. Created by
/// [`RoamingMessages::blocking_iter`](crate::RoamingMessages::blocking_iter).
///
/// Wraps the exact same state machine as [`RoamingStream`] (same cursor
/// seeding, same clamping, same page-size hint) and drives each step to
/// completion on the calling thread via [`Handle::block_on`]. No thread is
/// spawned per call.
///
/// The handle must belong to a runtime that is being driven elsewhere (e.g.
/// a multi-threaded runtime's worker pool); calling [`Iterator::next`] from
/// inside that runtime's async context panics, which is tokio's standard
/// guard against blocking a scheduler thread.
pub struct BlockingMessageIter<'a, C, D>
where
    C: PacketChannel,
    D: EnvelopeCodec,
{
    stream:   RoamingStream<'a, C, D>,
    handle:   Handle,
    finished: bool,
}

impl<'a, C, D> BlockingMessageIter<'a, C, D>
where
    C: PacketChannel,
    D: EnvelopeCodec,
{
    pub(crate) fn new(stream: RoamingStream<'a, C, D>, handle: Handle) -> Self {
        Self { stream, handle, finished: false }
    }

    /// Token for cancelling this retrieval, observed at page boundaries.
    pub fn cancel_token(&self) -> CancellationToken {
        self.stream.cancel_token()
    }
}

impl<'a, C, D> Iterator for BlockingMessageIter<'a, C, D>
where
    C: PacketChannel,
    D: EnvelopeCodec,
{
    type Item = Result<D::Chain, RoamingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.handle.block_on(self.stream.next()) {
            Ok(Some(chain)) => Some(Ok(chain)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                // Errors are terminal; surface once, then fuse.
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
