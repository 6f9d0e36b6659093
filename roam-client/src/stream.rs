//! Lazy async sequence over a roaming-history retrieval.

use std::collections::VecDeque;

use tokio_util::sync::CancellationToken;

use crate::channel::{EnvelopeCodec, PacketChannel};
use crate::engine::RoamEngine;
use crate::errors::RoamingError;

// ─── RoamingStream ────────────────────────────────────────────────────────────

/// Cursor-based async sequence of decoded message chains. Created by
/// [`RoamingMessages::messages_in`](crate::RoamingMessages::messages_in).
///
/// Messages are produced lazily: nothing is requested until [`next`] is
/// awaited, each page fetch is a suspension point, and the sequence is not
/// restartable (retrieving the same range again takes a fresh stream).
///
/// # Example
/// ```rust,no_run
/// # async fn f(mut stream: roam_client::RoamingStream<'_, impl roam_client::PacketChannel, impl roam_client::EnvelopeCodec>) -> Result<(), roam_client::RoamingError> {
/// while let Some(chain) = stream.next().await? {
///     // handle one historical message
/// }
/// # Ok(()) }
/// ```
///
/// [`next`]: Self::next
pub struct RoamingStream<'a, C, D>
where
    C: PacketChannel,
    D: EnvelopeCodec,
{
    engine: RoamEngine<'a, C, D>,
    buffer: VecDeque<D::Chain>,
    done:   bool,
}

impl<'a, C, D> RoamingStream<'a, C, D>
where
    C: PacketChannel,
    D: EnvelopeCodec,
{
    pub(crate) fn new(engine: RoamEngine<'a, C, D>) -> Self {
        Self { engine, buffer: VecDeque::new(), done: false }
    }

    /// Token for cancelling this retrieval.
    ///
    /// Cancellation is cooperative: it is observed once per page boundary,
    /// never mid-page, so a request already in flight completes and chains
    /// already decoded are still delivered before the stream ends.
    pub fn cancel_token(&self) -> CancellationToken {
        self.engine.cancel_token()
    }

    /// Fetch the next message chain. Returns `None` once the server has
    /// signalled end-of-history or the retrieval was cancelled.
    ///
    /// Any error is terminal: after `Err` the stream only yields `None`.
    pub async fn next(&mut self) -> Result<Option<D::Chain>, RoamingError> {
        loop {
            if let Some(chain) = self.buffer.pop_front() {
                return Ok(Some(chain));
            }
            if self.done {
                return Ok(None);
            }
            // Pages rejected wholesale by the filter come back empty; keep
            // paging until something is accepted or the server runs dry.
            match self.engine.next_page().await {
                Ok(Some(chains)) => self.buffer.extend(chains),
                Ok(None) => {
                    self.done = true;
                    return Ok(None);
                }
                Err(e) => {
                    self.done = true;
                    return Err(e);
                }
            }
        }
    }
}
