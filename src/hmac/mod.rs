//! HMAC keyed message authentication (RFC 2104).
//!
//! The construction wraps any 64-byte-block [`Digest`](crate::hash::Digest):
//!
//! ```text
//! HMAC(K, m) = H((K' ^ opad) || H((K' ^ ipad) || m))
//! ```
//!
//! where `K'` is the key zero-padded to the block size, after hashing it
//! first if it is longer than one block. The result may be truncated to a
//! prefix of the natural digest length (RFC 2104 §5).
//!
//! This module is split into two layers:
//!
//! - `core`: the reusable [`Hmac`] state
//! - the constants below, which are fixed for every supported digest

/// Reusable HMAC state.
///
/// Holds the derived pads for the lifetime of the key and re-primes itself
/// after every tag, so one instance authenticates any number of messages.
pub mod core;

pub use self::core::Hmac;

/// Block size assumed by the padding construction.
pub const BLOCK_SIZE: usize = 64;

/// Inner pad byte.
pub const IPAD: u8 = 0x36;

/// Outer pad byte.
pub const OPAD: u8 = 0x5C;
