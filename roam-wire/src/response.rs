//! The paged history response record.

use crate::envelope::MessageEnvelope;

// ─── RoamingResponse ──────────────────────────────────────────────────────────

/// One page of roaming messages plus the cursor for the next request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoamingResponse {
    /// Raw envelopes in server order. `None` means the range is exhausted;
    /// `Some` with an empty list is a valid page and pagination continues.
    pub messages:          Option<Vec<MessageEnvelope>>,
    /// `last_msg_time` for the next request, verbatim.
    pub last_message_time: i64,
    /// `random` for the next request, verbatim.
    pub random:            i64,
}

impl RoamingResponse {
    /// `true` once the server has signalled end-of-history for this range.
    ///
    /// Absence of the messages field is the only exhaustion signal; an empty
    /// page is not one.
    pub fn is_exhausted(&self) -> bool {
        self.messages.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_is_not_exhaustion() {
        let page = RoamingResponse { messages: Some(Vec::new()), last_message_time: 9, random: 7 };
        assert!(!page.is_exhausted());

        let end = RoamingResponse { messages: None, ..Default::default() };
        assert!(end.is_exhausted());
    }
}
