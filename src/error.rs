//! Error type shared by every module of the crate.

use thiserror::Error;

/// Errors raised while configuring or driving a MAC.
///
/// Only construction and negotiation can fail on well-formed input. Once a
/// [`Mac`](crate::mac::Mac) exists, computing a tag is total; the remaining
/// variants report caller misuse (short output buffers) or a tag that does
/// not verify.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MacError {
    /// The algorithm name is not one of the supported wire tokens.
    #[error("unsupported MAC algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The requested tag length is zero or longer than the digest output.
    #[error("invalid tag length: requested {requested}, digest produces at most {max}")]
    InvalidTagLength {
        /// Requested tag length in bytes
        requested: usize,
        /// Natural output length of the digest in bytes
        max: usize,
    },

    /// The caller's output buffer cannot hold the tag.
    #[error("output buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall {
        /// Tag length in bytes
        needed: usize,
        /// Length of the buffer that was provided
        actual: usize,
    },

    /// A received tag did not match the locally computed one.
    #[error("MAC verification failed for packet {sequence}")]
    TagMismatch {
        /// Sequence number of the rejected packet
        sequence: u32,
    },

    /// An SSH name-list contained an empty or non-ASCII entry.
    #[error("malformed name-list: {0:?}")]
    MalformedNameList(String),

    /// Client and server share no supported MAC algorithm.
    #[error("no common MAC algorithm")]
    NoCommonAlgorithm,

    /// A [`MacConfig`](crate::mac::MacConfig) failed validation.
    #[error("invalid MAC configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, MacError>;
