//! SHA-1 (FIPS 180-4).
//!
//! SHA-1 is no longer collision resistant, but HMAC-SHA1 remains sound as a
//! MAC and is still widely negotiated by SSH peers.

pub mod core;

/// Initial hash value H(0).
pub(crate) const H160_INIT: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants, one per group of 20 rounds.
pub(crate) const K160: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];
