use core::fmt;

use zeroize::{Zeroize, Zeroizing};

use super::{BLOCK_SIZE, IPAD, OPAD};
use crate::error::{MacError, Result};
use crate::hash::Digest;

/// HMAC over the digest `D`.
///
/// The digest is primed with `K' ^ ipad` at construction and again after
/// every [`digest_into`](Hmac::digest_into) or [`reset`](Hmac::reset), so
/// there is no state in which the instance cannot accept a new message.
///
/// # Security
///
/// - The derived pads and the scratch buffer are zeroized on drop, and the
///   digest state primed from the inner pad is reset.
/// - An instance holds per-message state; it must not be shared between
///   concurrent computations. Give each connection direction its own.
#[derive(Clone)]
pub struct Hmac<D: Digest> {
    /// Underlying digest, always primed with the inner pad between messages.
    digest: D,

    /// `K' ^ ipad`
    k_ipad: [u8; BLOCK_SIZE],

    /// `K' ^ opad`
    k_opad: [u8; BLOCK_SIZE],

    /// Holds the inner hash, then the outer hash, of the current message.
    /// Exactly `D::OUTPUT_SIZE` bytes.
    scratch: Vec<u8>,

    /// Tag length in bytes, at most `D::OUTPUT_SIZE`.
    size: usize,
}

impl<D: Digest> Hmac<D> {
    /// Creates an HMAC keyed with `key` that emits `size`-byte tags.
    ///
    /// # Key handling
    ///
    /// - `key.len() > 64`: the key is hashed with `digest` first and the
    ///   `D::OUTPUT_SIZE`-byte result is used instead.
    /// - `key.len() <= 64`: the key is used verbatim. A key of exactly one
    ///   block is not hashed.
    ///
    /// # Errors
    ///
    /// [`MacError::InvalidTagLength`] if `size` is zero or exceeds
    /// `D::OUTPUT_SIZE`. Truncation is allowed, extension is not.
    pub fn new(digest: D, key: &[u8], size: usize) -> Result<Self> {
        if size == 0 || size > D::OUTPUT_SIZE {
            return Err(MacError::InvalidTagLength {
                requested: size,
                max: D::OUTPUT_SIZE,
            });
        }

        let mut hmac = Self::unkeyed(digest, size);
        hmac.rekey(key);

        Ok(hmac)
    }

    /// Creates an HMAC that emits full-length tags.
    pub fn with_full_output(digest: D, key: &[u8]) -> Self {
        let mut hmac = Self::unkeyed(digest, D::OUTPUT_SIZE);
        hmac.rekey(key);
        hmac
    }

    fn unkeyed(digest: D, size: usize) -> Self {
        const {
            assert!(D::BLOCK_SIZE == BLOCK_SIZE);
            assert!(D::OUTPUT_SIZE <= BLOCK_SIZE);
        }

        Self {
            digest,
            k_ipad: [0; BLOCK_SIZE],
            k_opad: [0; BLOCK_SIZE],
            scratch: vec![0; D::OUTPUT_SIZE],
            size,
        }
    }

    /// Tag length in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Output length of the underlying digest in bytes.
    pub fn natural_size(&self) -> usize {
        D::OUTPUT_SIZE
    }

    /// Discards the current message and re-primes with the inner pad.
    ///
    /// The key schedule is left untouched.
    pub fn reset(&mut self) {
        self.digest.reset();
        self.digest.update(&self.k_ipad);
    }

    /// Absorbs message bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
    }

    /// Absorbs a single message byte.
    pub fn update_byte(&mut self, byte: u8) {
        self.digest.update_byte(byte);
    }

    /// Writes the tag of the current message into the front of `out`.
    ///
    /// The instance is re-primed afterwards and ready for the next message.
    ///
    /// # Errors
    ///
    /// [`MacError::BufferTooSmall`] if `out` is shorter than
    /// [`size`](Hmac::size). The pending message is kept in that case.
    pub fn digest_into(&mut self, out: &mut [u8]) -> Result<()> {
        if out.len() < self.size {
            return Err(MacError::BufferTooSmall {
                needed: self.size,
                actual: out.len(),
            });
        }

        self.write_tag(&mut out[..self.size]);
        Ok(())
    }

    /// Returns the tag of the current message as an owned buffer.
    pub fn finalize(&mut self) -> Vec<u8> {
        let mut tag = vec![0u8; self.size];
        self.write_tag(&mut tag);
        tag
    }

    /// Finishes the current message into `tag` and re-primes.
    ///
    /// `tag` must be exactly `size` bytes long.
    fn write_tag(&mut self, tag: &mut [u8]) {
        // inner hash, then outer pass over it
        self.digest.finalize_into(&mut self.scratch);
        self.digest.update(&self.k_opad);
        self.digest.update(&self.scratch);
        self.digest.finalize_into(&mut self.scratch);

        tag.copy_from_slice(&self.scratch[..self.size]);
        self.scratch.as_mut_slice().zeroize();

        self.digest.update(&self.k_ipad);
    }

    fn rekey(&mut self, key: &[u8]) {
        let mut padded = Zeroizing::new([0u8; BLOCK_SIZE]);

        if key.len() > BLOCK_SIZE {
            self.digest.reset();
            self.digest.update(key);
            self.digest.finalize_into(&mut padded[..D::OUTPUT_SIZE]);
        } else {
            padded[..key.len()].copy_from_slice(key);
        }

        for ((i, o), k) in self
            .k_ipad
            .iter_mut()
            .zip(self.k_opad.iter_mut())
            .zip(padded.iter())
        {
            *i = k ^ IPAD;
            *o = k ^ OPAD;
        }

        self.reset();
    }
}

impl<D: Digest> Drop for Hmac<D> {
    fn drop(&mut self) {
        self.k_ipad.zeroize();
        self.k_opad.zeroize();
        self.scratch.zeroize();
        // chaining state is derived from `K' ^ ipad`
        self.digest.reset();
    }
}

impl<D: Digest> fmt::Debug for Hmac<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hmac")
            .field("size", &self.size)
            .field("natural_size", &D::OUTPUT_SIZE)
            .finish_non_exhaustive()
    }
}
