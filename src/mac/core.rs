use tracing::{debug, warn};

use super::algorithm::{MAX_TAG_LEN, MacAlgorithm};
use super::sequence::PacketSequence;
use crate::error::{MacError, Result};
use crate::hash::{Md5, Sha1};
use crate::hmac::Hmac;
use crate::utils::ct::ct_eq;

/// HMAC instance for the digest an algorithm is built on.
#[derive(Clone, Debug)]
enum Keyed {
    Sha1(Hmac<Sha1>),
    Md5(Hmac<Md5>),
}

impl Keyed {
    fn new(algorithm: MacAlgorithm, key: &[u8]) -> Result<Self> {
        let size = algorithm.tag_len();
        Ok(match algorithm {
            MacAlgorithm::HmacSha1 | MacAlgorithm::HmacSha1_96 => {
                Self::Sha1(Hmac::new(Sha1::new(), key, size)?)
            }
            MacAlgorithm::HmacMd5 | MacAlgorithm::HmacMd5_96 => {
                Self::Md5(Hmac::new(Md5::new(), key, size)?)
            }
        })
    }

    fn reset(&mut self) {
        match self {
            Self::Sha1(h) => h.reset(),
            Self::Md5(h) => h.reset(),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Sha1(h) => h.update(data),
            Self::Md5(h) => h.update(data),
        }
    }

    fn digest_into(&mut self, out: &mut [u8]) -> Result<()> {
        match self {
            Self::Sha1(h) => h.digest_into(out),
            Self::Md5(h) => h.digest_into(out),
        }
    }

    fn finalize(&mut self) -> Vec<u8> {
        match self {
            Self::Sha1(h) => h.finalize(),
            Self::Md5(h) => h.finalize(),
        }
    }
}

/// Per-direction packet authenticator.
///
/// Drive it once per packet:
///
/// ```text
/// init_mac(seq) -> update(packet)... -> get_mac(out)
/// ```
///
/// One instance serves one direction of one connection for its whole
/// lifetime. It is `Send`, but every operation takes `&mut self`, so the
/// sender and receiver each need their own.
#[derive(Clone, Debug)]
pub struct Mac {
    algorithm: MacAlgorithm,
    hmac: Keyed,
}

impl Mac {
    /// Creates the MAC named `name` keyed with `key`.
    ///
    /// # Errors
    ///
    /// [`MacError::UnsupportedAlgorithm`] if `name` is not a supported wire
    /// name.
    pub fn new(name: &str, key: &[u8]) -> Result<Self> {
        Self::with_algorithm(name.parse()?, key)
    }

    /// Creates a MAC for `algorithm` keyed with `key`.
    ///
    /// Key material derived during key exchange is usually longer than the
    /// algorithm needs; only the first [`MacAlgorithm::key_len`] bytes are
    /// used. Shorter keys are used as they are.
    pub fn with_algorithm(algorithm: MacAlgorithm, key: &[u8]) -> Result<Self> {
        let key = &key[..key.len().min(algorithm.key_len())];
        let hmac = Keyed::new(algorithm, key)?;

        debug!(%algorithm, tag_len = algorithm.tag_len(), "MAC initialised");

        Ok(Self { algorithm, hmac })
    }

    /// Algorithm this instance implements.
    pub fn algorithm(&self) -> MacAlgorithm {
        self.algorithm
    }

    /// Tag length in bytes.
    pub fn size(&self) -> usize {
        self.algorithm.tag_len()
    }

    /// Starts a packet: discards any pending input and absorbs `seq` as four
    /// big-endian bytes.
    pub fn init_mac(&mut self, seq: u32) {
        self.hmac.reset();
        self.hmac.update(&seq.to_be_bytes());
    }

    /// Absorbs packet bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.hmac.update(data);
    }

    /// Writes the tag of the current packet into the front of `out`.
    ///
    /// # Errors
    ///
    /// [`MacError::BufferTooSmall`] if `out` is shorter than [`size`](Self::size).
    pub fn get_mac(&mut self, out: &mut [u8]) -> Result<()> {
        self.hmac.digest_into(out)
    }

    /// Computes the tag of a complete packet.
    pub fn sign(&mut self, seq: u32, packet: &[u8]) -> Vec<u8> {
        self.init_mac(seq);
        self.update(packet);
        self.hmac.finalize()
    }

    /// Computes the tag for the next packet of `sequence` and advances it.
    pub fn sign_next(&mut self, sequence: &mut PacketSequence, packet: &[u8]) -> Vec<u8> {
        self.sign(sequence.advance(), packet)
    }

    /// Checks a received tag in constant time.
    ///
    /// # Errors
    ///
    /// [`MacError::TagMismatch`] if `tag` has the wrong length or does not
    /// match.
    pub fn verify(&mut self, seq: u32, packet: &[u8], tag: &[u8]) -> Result<()> {
        let mut expected = [0u8; MAX_TAG_LEN];
        let size = self.size();

        self.init_mac(seq);
        self.update(packet);
        self.get_mac(&mut expected[..size])?;

        if ct_eq(&expected[..size], tag) {
            Ok(())
        } else {
            warn!(sequence = seq, algorithm = %self.algorithm, "MAC verification failed");
            Err(MacError::TagMismatch { sequence: seq })
        }
    }
}
