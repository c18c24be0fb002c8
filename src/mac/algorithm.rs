use core::fmt;
use core::str::FromStr;

use crate::error::{MacError, Result};

/// A MAC algorithm negotiable on an SSH connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MacAlgorithm {
    /// HMAC-SHA1 truncated to 96 bits.
    #[cfg_attr(feature = "serde", serde(rename = "hmac-sha1-96"))]
    HmacSha1_96,
    /// HMAC-SHA1, full 160-bit tag.
    #[cfg_attr(feature = "serde", serde(rename = "hmac-sha1"))]
    HmacSha1,
    /// HMAC-MD5 truncated to 96 bits.
    #[cfg_attr(feature = "serde", serde(rename = "hmac-md5-96"))]
    HmacMd5_96,
    /// HMAC-MD5, full 128-bit tag.
    #[cfg_attr(feature = "serde", serde(rename = "hmac-md5"))]
    HmacMd5,
}

/// Supported algorithms, most preferred first.
///
/// SHA-1 is preferred over MD5, and the 96-bit truncations over the full
/// tags. Peers negotiate against this order, so it must not change.
pub const MAC_ALGORITHMS: [MacAlgorithm; 4] = [
    MacAlgorithm::HmacSha1_96,
    MacAlgorithm::HmacSha1,
    MacAlgorithm::HmacMd5_96,
    MacAlgorithm::HmacMd5,
];

static MAC_NAMES: [&str; 4] = [
    MAC_ALGORITHMS[0].name(),
    MAC_ALGORITHMS[1].name(),
    MAC_ALGORITHMS[2].name(),
    MAC_ALGORITHMS[3].name(),
];

/// Longest tag produced by any supported algorithm.
pub const MAX_TAG_LEN: usize = 20;

impl MacAlgorithm {
    /// Wire name, as exchanged in `SSH_MSG_KEXINIT`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::HmacSha1_96 => "hmac-sha1-96",
            Self::HmacSha1 => "hmac-sha1",
            Self::HmacMd5_96 => "hmac-md5-96",
            Self::HmacMd5 => "hmac-md5",
        }
    }

    /// Required key length in bytes (the natural digest length).
    pub const fn key_len(self) -> usize {
        match self {
            Self::HmacSha1_96 | Self::HmacSha1 => 20,
            Self::HmacMd5_96 | Self::HmacMd5 => 16,
        }
    }

    /// Length of the tag appended to each packet, in bytes.
    pub const fn tag_len(self) -> usize {
        match self {
            Self::HmacSha1 => 20,
            Self::HmacMd5 => 16,
            Self::HmacSha1_96 | Self::HmacMd5_96 => 12,
        }
    }
}

impl FromStr for MacAlgorithm {
    type Err = MacError;

    fn from_str(name: &str) -> Result<Self> {
        MAC_ALGORITHMS
            .into_iter()
            .find(|alg| alg.name() == name)
            .ok_or_else(|| MacError::UnsupportedAlgorithm(name.to_owned()))
    }
}

impl fmt::Display for MacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names of the supported algorithms, most preferred first.
pub fn mac_list() -> &'static [&'static str] {
    &MAC_NAMES
}

/// Key length in bytes required by the algorithm called `name`.
///
/// # Errors
///
/// [`MacError::UnsupportedAlgorithm`] for any name not in [`mac_list`].
pub fn key_len(name: &str) -> Result<usize> {
    name.parse::<MacAlgorithm>().map(MacAlgorithm::key_len)
}

/// Checks that every name in `names` is supported.
///
/// Returns the error for the first unsupported name; the caller should treat
/// it as a negotiation failure.
pub fn check_mac_list<'a, I>(names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for name in names {
        key_len(name)?;
    }
    Ok(())
}
