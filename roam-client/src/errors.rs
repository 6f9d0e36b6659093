//! Error types for roam-client.
//!
//! Every retrieval surfaces errors unmodified: there is no retry, backoff or
//! per-item suppression inside this crate. Clean end-of-history is *not* an
//! error and is reported as the end of the sequence instead.

use std::{fmt, io};

// ─── ProtocolError ────────────────────────────────────────────────────────────

/// The server rejected a history request, or the channel's response
/// validation failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolError {
    /// Result code reported by the server (0 is success and never appears here).
    pub code:    i32,
    /// Human-readable rejection message, e.g. `"MSG_SIG_INVALID"`.
    pub message: String,
}

impl ProtocolError {
    /// Match on the error message, with optional wildcard prefix/suffix `'*'`.
    ///
    /// # Examples
    /// - `err.is("MSG_SIG_INVALID")` — exact match
    /// - `err.is("MSG_*")` — starts-with match
    pub fn is(&self, pattern: &str) -> bool {
        if let Some(prefix) = pattern.strip_suffix('*') {
            self.message.starts_with(prefix)
        } else if let Some(suffix) = pattern.strip_prefix('*') {
            self.message.ends_with(suffix)
        } else {
            self.message == pattern
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "server error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ProtocolError {}

// ─── DecodeError ──────────────────────────────────────────────────────────────

/// An envelope's payload could not be decoded into a message chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeError {
    /// What went wrong.
    pub message: String,
}

impl DecodeError {
    /// Build a decode error from anything printable.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decode error: {}", self.message)
    }
}

impl std::error::Error for DecodeError {}

// ─── ChannelError ─────────────────────────────────────────────────────────────

/// What a [`PacketChannel`](crate::PacketChannel) send may fail with.
#[derive(Debug)]
pub enum ChannelError {
    /// Transport-level failure while the request was in flight.
    Network(io::Error),
    /// The server rejected the request, or the reply failed validation.
    Protocol(ProtocolError),
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e)  => write!(f, "network error: {e}"),
            Self::Protocol(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ChannelError {}

impl From<io::Error> for ChannelError {
    fn from(e: io::Error) -> Self { Self::Network(e) }
}

impl From<ProtocolError> for ChannelError {
    fn from(e: ProtocolError) -> Self { Self::Protocol(e) }
}

// ─── RoamingError ─────────────────────────────────────────────────────────────

/// The error type returned by every history retrieval surface.
///
/// Any of these aborts the whole retrieval; a failed envelope is never
/// skipped in favour of the rest of its page.
#[derive(Debug)]
pub enum RoamingError {
    /// Transport failure during a page fetch.
    Network(io::Error),
    /// The server rejected a page request.
    Protocol(ProtocolError),
    /// One envelope's payload could not be decoded.
    Decode(DecodeError),
}

impl fmt::Display for RoamingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e)  => write!(f, "network error: {e}"),
            Self::Protocol(e) => write!(f, "{e}"),
            Self::Decode(e)   => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RoamingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e)  => Some(e),
            Self::Protocol(e) => Some(e),
            Self::Decode(e)   => Some(e),
        }
    }
}

impl From<ChannelError> for RoamingError {
    fn from(e: ChannelError) -> Self {
        match e {
            ChannelError::Network(e)  => Self::Network(e),
            ChannelError::Protocol(e) => Self::Protocol(e),
        }
    }
}

impl From<DecodeError> for RoamingError {
    fn from(e: DecodeError) -> Self { Self::Decode(e) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_pattern_match() {
        let err = ProtocolError { code: 59, message: "MSG_SIG_INVALID".into() };
        assert!(err.is("MSG_SIG_INVALID"));
        assert!(err.is("MSG_*"));
        assert!(err.is("*_INVALID"));
        assert!(!err.is("FLOOD_WAIT"));
    }

    #[test]
    fn channel_error_flattens_into_roaming_error() {
        let net: RoamingError = ChannelError::Network(io::Error::other("reset")).into();
        assert!(matches!(net, RoamingError::Network(_)));

        let proto: RoamingError =
            ChannelError::Protocol(ProtocolError { code: 1, message: "BAD".into() }).into();
        assert!(matches!(proto, RoamingError::Protocol(_)));
    }
}
