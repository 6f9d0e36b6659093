//! The pagination engine: one request/response round-trip per step.
//!
//! A roaming-history retrieval is a strictly sequential loop: the cursor for
//! page *N+1* only exists once the response for page *N* has arrived, so
//! pages are never fetched concurrently. The engine owns that loop; the
//! adapters in [`stream`](crate::stream) and [`blocking`](crate::blocking)
//! only decide how callers consume it.

use roam_wire::MessageEnvelope;
use tokio_util::sync::CancellationToken;

use crate::channel::{EnvelopeCodec, PacketChannel};
use crate::contact::RoamingContact;
use crate::errors::RoamingError;
use crate::filter::{FilterView, RoamingFilter};
use crate::RoamingConfig;

// ─── PageCursor ───────────────────────────────────────────────────────────────

/// The `(last_message_time, random)` pair that lets the server resume
/// pagination where the previous response left off.
///
/// Call-local: seeded once per retrieval, advanced only from values echoed by
/// the server, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    /// Upper time bound for the next page.
    pub last_message_time: i64,
    /// Correlation nonce echoed by the server.
    pub random:            i64,
}

impl PageCursor {
    /// Seed for the first request of a retrieval over `[time_start, time_end]`.
    pub fn seed(time_start: i64, time_end: i64) -> Self {
        Self {
            last_message_time: time_end.max(time_start).max(1),
            random:            0,
        }
    }
}

// ─── RoamEngine ───────────────────────────────────────────────────────────────

/// Drives paged history requests for one contact until the server signals
/// exhaustion, the caller cancels, or an error aborts the retrieval.
///
/// Each [`next_page`](Self::next_page) call performs at most one round-trip.
/// Cancellation is polled once per call, before the request goes out; a
/// request already in flight always runs to completion. Errors are
/// terminal: the engine never retries and imposes no page-count ceiling of
/// its own.
pub struct RoamEngine<'a, C, D>
where
    C: PacketChannel,
    D: EnvelopeCodec,
{
    channel:    &'a C,
    codec:      &'a D,
    contact:    RoamingContact,
    config:     RoamingConfig,
    time_start: i64,
    filter:     Option<RoamingFilter>,
    cursor:     PageCursor,
    exhausted:  bool,
    cancel:     CancellationToken,
}

impl<'a, C, D> RoamEngine<'a, C, D>
where
    C: PacketChannel,
    D: EnvelopeCodec,
{
    /// Set up a retrieval over `[time_start, time_end]`.
    ///
    /// The cursor seeds to `max(time_end, time_start, 1)` with a zero nonce;
    /// both bounds are wire timestamps, no unit conversion happens here.
    pub fn new(
        channel: &'a C,
        codec: &'a D,
        contact: RoamingContact,
        config: RoamingConfig,
        time_start: i64,
        time_end: i64,
        filter: Option<RoamingFilter>,
    ) -> Self {
        Self {
            channel,
            codec,
            contact,
            config,
            time_start,
            filter,
            cursor: PageCursor::seed(time_start, time_end),
            exhausted: false,
            cancel: CancellationToken::new(),
        }
    }

    /// Token polled at each page boundary. Cancelling it ends the retrieval
    /// cleanly before the next request; it never aborts one in flight.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// The cursor that the *next* request will carry.
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Fetch one raw page. `Ok(None)` means the retrieval is over (server
    /// exhaustion or observed cancellation) and stays `None` from then on.
    ///
    /// On a delivered page the cursor advances to the response's
    /// `(last_message_time, random)` pair verbatim, even when the page
    /// carried zero envelopes: the server, not the content, decides whether
    /// more pages remain.
    pub(crate) async fn fetch_page(&mut self) -> Result<Option<Vec<MessageEnvelope>>, RoamingError> {
        if self.exhausted {
            return Ok(None);
        }
        if self.cancel.is_cancelled() {
            tracing::debug!("[roam] retrieval cancelled for peer {}", self.contact.id());
            self.exhausted = true;
            return Ok(None);
        }

        let request = self.contact.history_request(
            self.time_start,
            self.cursor.last_message_time,
            self.cursor.random,
            &self.config,
        );
        let response = self.channel.send(&request).await?;

        let Some(envelopes) = response.messages else {
            tracing::debug!("[roam] history exhausted for peer {}", self.contact.id());
            self.exhausted = true;
            return Ok(None);
        };

        tracing::trace!(
            "[roam] page for peer {}: {} envelopes, cursor -> ({}, {})",
            self.contact.id(),
            envelopes.len(),
            response.last_message_time,
            response.random,
        );
        self.cursor = PageCursor {
            last_message_time: response.last_message_time,
            random:            response.random,
        };
        Ok(Some(envelopes))
    }

    /// Fetch and decode one page, applying the filter.
    ///
    /// Envelopes decode in arrival order. With no filter (or the accept-all
    /// sentinel) every envelope goes straight to the codec and no
    /// [`FilterView`] is built; otherwise each envelope's header is projected
    /// once, judged, and decoded only on acceptance. A decode failure aborts
    /// the whole retrieval.
    pub async fn next_page(&mut self) -> Result<Option<Vec<D::Chain>>, RoamingError> {
        let Some(envelopes) = self.fetch_page().await? else {
            return Ok(None);
        };

        let mut chains = Vec::with_capacity(envelopes.len());
        for envelope in &envelopes {
            if let Some(filter) = self.filter.as_ref().filter(|f| !f.is_trivial()) {
                let view = FilterView::new(&self.contact, &envelope.head);
                if !filter.accept(&view) {
                    continue;
                }
            }
            chains.push(self.codec.decode(envelope).await?);
        }
        Ok(Some(chains))
    }
}
