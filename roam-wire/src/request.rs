//! The paged history request record.

// ─── RoamingRequest ───────────────────────────────────────────────────────────

/// One paged request for roaming messages.
///
/// `last_msg_time` / `random` form the pagination cursor: the first request
/// of a retrieval seeds them, every later request copies them verbatim from
/// the previous response.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoamingRequest {
    /// Account number of the peer whose history is requested.
    pub peer_uin:      i64,
    /// Lower time bound in seconds. Never 0 on the wire; see [`Self::new`].
    pub time_start:    i64,
    /// Upper cursor bound; may be `i64::MAX` for "start from most recent".
    pub last_msg_time: i64,
    /// Cursor correlation nonce, echoed and advanced by the server.
    pub random:        i64,
    /// Opaque session signature. Empty by default.
    pub signature:     Vec<u8>,
    /// Opaque password block. Empty by default.
    pub password:      Vec<u8>,
    /// Page-size hint. `None` leaves the page size to the server.
    pub max_count:     Option<i32>,
}

impl RoamingRequest {
    /// Build a request with `time_start` clamped to at least 1.
    ///
    /// 0 is the wire encoder's "field unset" default and would be
    /// indistinguishable from an absent field, so it must never be sent.
    pub fn new(peer_uin: i64, time_start: i64, last_msg_time: i64, random: i64) -> Self {
        Self {
            peer_uin,
            time_start: time_start.max(1),
            last_msg_time,
            random,
            signature: Vec::new(),
            password:  Vec::new(),
            max_count: None,
        }
    }

    /// Set the page-size hint.
    pub fn with_max_count(mut self, max_count: i32) -> Self {
        self.max_count = Some(max_count);
        self
    }

    /// Attach a session signature and password block.
    pub fn with_auth(mut self, signature: Vec<u8>, password: Vec<u8>) -> Self {
        self.signature = signature;
        self.password = password;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_start_floor_is_one() {
        for given in [i64::MIN, -5, 0, 1] {
            let req = RoamingRequest::new(10, given, i64::MAX, 0);
            assert!(req.time_start >= 1, "time_start {given} must clamp to >= 1");
        }
        // Values above the floor pass through untouched.
        assert_eq!(RoamingRequest::new(10, 1_700_000_000, i64::MAX, 0).time_start, 1_700_000_000);
    }

    #[test]
    fn cursor_fields_pass_through_verbatim() {
        let req = RoamingRequest::new(10, 1, 987_654, 321);
        assert_eq!(req.last_msg_time, 987_654);
        assert_eq!(req.random, 321);
    }
}
