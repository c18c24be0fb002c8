//! Hash algorithms exposed by the crate.
//!
//! Every digest here is a Merkle–Damgård construction over 64-byte blocks
//! and implements the incremental [`Digest`] trait, which is what the HMAC
//! layer consumes. One-shot convenience functions are re-exported for
//! callers that hash a complete buffer.

pub(crate) mod block;
mod digest;

pub mod md5;
pub mod sha1;
pub mod sha256;

pub use self::digest::Digest;

pub use self::md5::core::{Md5, md5};
pub use self::sha1::core::{Sha1, sha1};
pub use self::sha256::core::{Sha256, sha256};
