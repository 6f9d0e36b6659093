//! Header-level filtering of roaming messages.
//!
//! Filtering happens *before* decoding: a rejected envelope is never handed
//! to the codec. The filter only sees the routing header, projected into a
//! short-lived [`FilterView`].

use roam_wire::{MessageHead, widen_unsigned};

use crate::contact::RoamingContact;

// ─── FilterView ───────────────────────────────────────────────────────────────

/// Ephemeral projection of one envelope's header, borrowed for the duration
/// of a single predicate call.
///
/// Built only when a non-trivial filter is in effect; with no filter (or
/// [`RoamingFilter::Any`]) no view is ever constructed. `target` is the raw
/// receiver number from the header and is not resolved to any higher-level
/// peer.
#[derive(Debug, Clone, Copy)]
pub struct FilterView<'a> {
    /// The contact whose history is being retrieved.
    pub contact: &'a RoamingContact,
    /// Sender account number.
    pub sender:  i64,
    /// Receiver number, verbatim from the header.
    pub target:  i64,
    /// Send time, unsigned-widened from the header's 32-bit slot.
    pub time:    i64,
}

impl<'a> FilterView<'a> {
    pub(crate) fn new(contact: &'a RoamingContact, head: &MessageHead) -> Self {
        #[cfg(test)]
        instrument::VIEWS_BUILT.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Self {
            contact,
            sender: head.from_uin,
            target: head.to_uin,
            time:   widen_unsigned(head.msg_time),
        }
    }
}

// ─── RoamingFilter ────────────────────────────────────────────────────────────

/// Predicate applied to each envelope header before decoding.
///
/// Passing `None` as the filter argument and passing `Some(RoamingFilter::Any)`
/// are the same thing: both take the fast path that skips [`FilterView`]
/// construction entirely.
///
/// A panic inside a [`Custom`](RoamingFilter::Custom) predicate propagates to
/// the caller; it is never caught or skipped.
pub enum RoamingFilter {
    /// Accept every message. Equivalent to no filter at all.
    Any,
    /// Only messages the contact sent.
    Received,
    /// Only messages sent to the contact.
    Sent,
    /// Arbitrary predicate over the header view.
    Custom(Box<dyn Fn(&FilterView<'_>) -> bool + Send + Sync>),
}

impl RoamingFilter {
    /// Wrap a closure as a custom filter.
    pub fn custom(f: impl Fn(&FilterView<'_>) -> bool + Send + Sync + 'static) -> Self {
        Self::Custom(Box::new(f))
    }

    /// `true` for the accept-all sentinel, which short-circuits view
    /// construction.
    pub fn is_trivial(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Evaluate the predicate against one header view.
    pub fn accept(&self, view: &FilterView<'_>) -> bool {
        match self {
            Self::Any      => true,
            Self::Received => view.sender == view.contact.id(),
            Self::Sent     => view.target == view.contact.id(),
            Self::Custom(f) => f(view),
        }
    }
}

impl std::fmt::Debug for RoamingFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any       => f.write_str("Any"),
            Self::Received  => f.write_str("Received"),
            Self::Sent      => f.write_str("Sent"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

// ─── Test instrumentation ─────────────────────────────────────────────────────


#[cfg(test)]
mod tests {
    use super::*;

    fn head(from: i64, to: i64, time: i32) -> MessageHead {
        MessageHead { from_uin: from, to_uin: to, msg_time: time, ..Default::default() }
    }

    #[test]
    fn received_matches_messages_from_the_contact() {
        let _g = instrument::COUNTER_LOCK.lock().unwrap();
        let contact = RoamingContact::Friend { uin: 42 };
        let incoming = FilterView::new(&contact, &head(42, 1000, 1));
        let outgoing = FilterView::new(&contact, &head(1000, 42, 1));
        assert!(RoamingFilter::Received.accept(&incoming));
        assert!(!RoamingFilter::Received.accept(&outgoing));
    }

    #[test]
    fn sent_matches_messages_to_the_contact() {
        let _g = instrument::COUNTER_LOCK.lock().unwrap();
        let contact = RoamingContact::Friend { uin: 42 };
        let incoming = FilterView::new(&contact, &head(42, 1000, 1));
        let outgoing = FilterView::new(&contact, &head(1000, 42, 1));
        assert!(!RoamingFilter::Sent.accept(&incoming));
        assert!(RoamingFilter::Sent.accept(&outgoing));
    }

    #[test]
    fn view_time_is_unsigned_widened() {
        let _g = instrument::COUNTER_LOCK.lock().unwrap();
        let contact = RoamingContact::Friend { uin: 42 };
        // Top bit set: a post-2038 timestamp, not a negative one.
        let view = FilterView::new(&contact, &head(42, 1000, i32::MIN));
        assert_eq!(view.time, 1i64 << 31);
        assert!(view.time > 0);
    }

    #[test]
    fn only_any_is_trivial() {
        assert!(RoamingFilter::Any.is_trivial());
        assert!(!RoamingFilter::Received.is_trivial());
        assert!(!RoamingFilter::Sent.is_trivial());
        assert!(!RoamingFilter::custom(|_| true).is_trivial());
    }
}
