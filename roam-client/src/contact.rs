//! Contact kinds and their request-construction strategies.

use roam_wire::RoamingRequest;

use crate::RoamingConfig;

// ─── RoamingContact ───────────────────────────────────────────────────────────

/// The peer whose history is being retrieved.
///
/// Each kind supplies its own request construction; the pagination loop
/// itself exists exactly once and is shared by all kinds. Identifiers are
/// the raw wire numbers; resolving them to higher-level peer objects is the
/// embedding client's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoamingContact {
    /// A direct correspondent.
    Friend {
        /// The friend's account number.
        uin: i64,
    },
    /// A group conversation.
    Group {
        /// Raw group code as it appears in envelope headers.
        code: i64,
    },
}

impl RoamingContact {
    /// The raw numeric identifier of this contact.
    pub fn id(&self) -> i64 {
        match self {
            Self::Friend { uin }  => *uin,
            Self::Group { code } => *code,
        }
    }

    /// Build the page request for this contact kind.
    ///
    /// `time_start` is clamped to at least 1 by [`RoamingRequest::new`];
    /// `last_msg_time` / `random` are the cursor fields, passed through
    /// verbatim.
    pub fn history_request(
        &self,
        time_start: i64,
        last_msg_time: i64,
        random: i64,
        config: &RoamingConfig,
    ) -> RoamingRequest {
        match self {
            Self::Friend { uin } => {
                RoamingRequest::new(*uin, time_start, last_msg_time, random)
                    .with_max_count(config.page_size_hint)
                    .with_auth(config.signature.clone(), config.password.clone())
            }
            Self::Group { code } => {
                // Group history is addressed by the raw group code; the server
                // ignores the signature block for group pages.
                RoamingRequest::new(*code, time_start, last_msg_time, random)
                    .with_max_count(config.page_size_hint)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friend_request_carries_uin_and_auth() {
        let config = RoamingConfig { signature: vec![1, 2], ..Default::default() };
        let contact = RoamingContact::Friend { uin: 123 };
        let req = contact.history_request(0, i64::MAX, 0, &config);
        assert_eq!(req.peer_uin, 123);
        assert_eq!(req.time_start, 1, "unset time_start must clamp to 1");
        assert_eq!(req.signature, vec![1, 2]);
        assert_eq!(req.max_count, Some(config.page_size_hint));
    }

    #[test]
    fn group_request_uses_group_code_and_same_clamp() {
        let config = RoamingConfig::default();
        let contact = RoamingContact::Group { code: 987 };
        let req = contact.history_request(-3, 55, 7, &config);
        assert_eq!(req.peer_uin, 987);
        assert_eq!(req.time_start, 1);
        assert_eq!(req.last_msg_time, 55);
        assert_eq!(req.random, 7);
        assert_eq!(req.max_count, Some(config.page_size_hint));
    }
}
