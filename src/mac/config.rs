//! Local MAC preferences.

use super::algorithm::{MAC_ALGORITHMS, MacAlgorithm};
use super::negotiate::{negotiate, parse_name_list};
use crate::error::{MacError, Result};

/// Ordered list of MAC algorithms this side is willing to use.
///
/// The order is the preference advertised in `SSH_MSG_KEXINIT`. The
/// default is every supported algorithm in [`MAC_ALGORITHMS`] order.
///
/// Deserialized configurations go through [`validate`](MacConfig::validate)
/// and are rejected if it fails.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMacConfig"))]
pub struct MacConfig {
    /// Algorithms in preference order, most preferred first.
    pub preferred: Vec<MacAlgorithm>,
}

impl MacConfig {
    /// Builds a configuration from an SSH name-list such as
    /// `"hmac-sha1,hmac-md5"`.
    ///
    /// # Errors
    ///
    /// - [`MacError::MalformedNameList`] for a syntactically broken list
    /// - [`MacError::UnsupportedAlgorithm`] for an unknown name
    /// - [`MacError::InvalidConfig`] if the result fails [`validate`](Self::validate)
    pub fn from_name_list(list: &str) -> Result<Self> {
        let preferred = parse_name_list(list)?
            .into_iter()
            .map(|name| name.parse::<MacAlgorithm>())
            .collect::<Result<Vec<MacAlgorithm>>>()?;

        let config = Self { preferred };
        config.validate()?;
        Ok(config)
    }

    /// Rejects empty lists and lists naming an algorithm twice.
    pub fn validate(&self) -> Result<()> {
        if self.preferred.is_empty() {
            return Err(MacError::InvalidConfig(
                "no MAC algorithms configured".to_owned(),
            ));
        }

        for (i, algorithm) in self.preferred.iter().enumerate() {
            if self.preferred[..i].contains(algorithm) {
                return Err(MacError::InvalidConfig(format!(
                    "duplicate MAC algorithm {algorithm}"
                )));
            }
        }

        Ok(())
    }

    /// Renders the preferences as an SSH name-list.
    pub fn name_list(&self) -> String {
        self.preferred
            .iter()
            .map(|alg| alg.name())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Negotiates against the peer's list, with this side as the client.
    ///
    /// # Errors
    ///
    /// [`MacError::InvalidConfig`] if this configuration fails
    /// [`validate`](Self::validate), otherwise as [`negotiate`].
    pub fn negotiate_with(&self, server: &[&str]) -> Result<MacAlgorithm> {
        self.validate()?;
        let client: Vec<&str> = self.preferred.iter().map(|alg| alg.name()).collect();
        negotiate(&client, server)
    }
}

impl Default for MacConfig {
    fn default() -> Self {
        Self {
            preferred: MAC_ALGORITHMS.to_vec(),
        }
    }
}

/// Unchecked shape of [`MacConfig`] as it appears in configuration files.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMacConfig {
    preferred: Vec<MacAlgorithm>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMacConfig> for MacConfig {
    type Error = MacError;

    fn try_from(raw: RawMacConfig) -> Result<Self> {
        let config = Self {
            preferred: raw.preferred,
        };
        config.validate()?;
        Ok(config)
    }
}
