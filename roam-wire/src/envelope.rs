//! Raw historical message envelopes as returned by the server.

// ─── MessageHead ──────────────────────────────────────────────────────────────

/// Routing header of one raw historical message.
///
/// Only the fields inspected by history filters are modeled; everything else
/// the server sends rides inside [`MessageEnvelope::payload`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageHead {
    /// Sender account number.
    pub from_uin: i64,
    /// Receiver account number (raw, never resolved to a higher-level peer).
    pub to_uin:   i64,
    /// Send time in seconds. The wire carries an unsigned 32-bit pattern in
    /// this signed slot; widen it with [`widen_unsigned`], never with `as i64`.
    pub msg_time: i32,
    /// Per-conversation message id.
    pub msg_id:   i32,
    /// Server-assigned unique id.
    pub msg_uid:  i64,
}

// ─── MessageEnvelope ──────────────────────────────────────────────────────────

/// One raw historical message record: routing header plus an opaque payload.
///
/// The payload is consumed only by an `EnvelopeCodec` implementation; this
/// crate never looks inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageEnvelope {
    /// Routing header.
    pub head:    MessageHead,
    /// Opaque encoded message body.
    pub payload: Vec<u8>,
}

// ─── Unsigned widening ────────────────────────────────────────────────────────

/// Widen a 32-bit wire timestamp to `i64`, treating the bit pattern as unsigned.
///
/// Timestamps past `i32::MAX` (year 2038 onwards) arrive with the top bit set;
/// sign-extending them would produce negative times.
///
/// ```
/// use roam_wire::widen_unsigned;
///
/// assert_eq!(widen_unsigned(0x7fff_ffff), 0x7fff_ffff);
/// assert_eq!(widen_unsigned(-1), 0xffff_ffff); // not -1
/// ```
#[inline]
pub fn widen_unsigned(raw: i32) -> i64 {
    i64::from(raw as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widen_keeps_positive_values() {
        for v in [0i32, 1, 42, i32::MAX] {
            assert_eq!(widen_unsigned(v), v as i64);
        }
    }

    #[test]
    fn widen_reinterprets_top_bit() {
        // 0x8000_0000 as a signed i32 is i32::MIN; on the wire it means 2^31.
        assert_eq!(widen_unsigned(i32::MIN), 1i64 << 31);
        assert_eq!(widen_unsigned(-1), u32::MAX as i64);
    }
}
