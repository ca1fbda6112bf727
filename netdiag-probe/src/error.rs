//! 统一错误类型定义

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Probe failure.
///
/// Every variant carries a human-readable message. Nothing is retried or
/// recovered inside the probe layer; the caller decides what to show.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ProbeError {
    /// The resolver address could not be parsed.
    #[error("Invalid resolver address: {0}")]
    InvalidResolver(String),

    /// The resolver did not answer (unreachable, refused or timed out).
    #[error("Resolver unavailable: {0}")]
    ResolverUnavailable(String),

    /// Authoritative NXDOMAIN.
    #[error("Name not found: {0}")]
    NameNotFound(String),

    /// Any other DNS failure.
    #[error("Lookup failed: {0}")]
    LookupFailed(String),

    /// Any failure of the HTTPS probe (URL, DNS, TCP, TLS, timeout).
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Category of a [`ProbeError`], without its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProbeErrorKind {
    InvalidResolver,
    ResolverUnavailable,
    NameNotFound,
    LookupFailed,
    ConnectionFailed,
}

impl fmt::Display for ProbeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolver => write!(f, "InvalidResolver"),
            Self::ResolverUnavailable => write!(f, "ResolverUnavailable"),
            Self::NameNotFound => write!(f, "NameNotFound"),
            Self::LookupFailed => write!(f, "LookupFailed"),
            Self::ConnectionFailed => write!(f, "ConnectionFailed"),
        }
    }
}

impl ProbeError {
    pub fn kind(&self) -> ProbeErrorKind {
        match self {
            Self::InvalidResolver(_) => ProbeErrorKind::InvalidResolver,
            Self::ResolverUnavailable(_) => ProbeErrorKind::ResolverUnavailable,
            Self::NameNotFound(_) => ProbeErrorKind::NameNotFound,
            Self::LookupFailed(_) => ProbeErrorKind::LookupFailed,
            Self::ConnectionFailed(_) => ProbeErrorKind::ConnectionFailed,
        }
    }

    /// The underlying message, without the kind prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidResolver(msg)
            | Self::ResolverUnavailable(msg)
            | Self::NameNotFound(msg)
            | Self::LookupFailed(msg)
            | Self::ConnectionFailed(msg) => msg,
        }
    }
}

/// Probe Result 类型别名
pub type ProbeResult<T> = std::result::Result<T, ProbeError>;
