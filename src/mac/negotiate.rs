//! SSH name-lists and MAC algorithm negotiation.

use tracing::trace;

use super::algorithm::MacAlgorithm;
use crate::error::{MacError, Result};

/// Splits an SSH `name-list` (RFC 4251 §5) into its entries.
///
/// An empty string is the empty list. Entries must be non-empty, printable
/// US-ASCII without commas.
///
/// # Errors
///
/// [`MacError::MalformedNameList`] if any entry is empty or contains
/// non-printable or non-ASCII characters.
pub fn parse_name_list(list: &str) -> Result<Vec<&str>> {
    if list.is_empty() {
        return Ok(Vec::new());
    }

    list.split(',')
        .map(|name| {
            let valid = !name.is_empty() && name.bytes().all(|b| b.is_ascii_graphic());
            if valid {
                Ok(name)
            } else {
                Err(MacError::MalformedNameList(list.to_owned()))
            }
        })
        .collect()
}

/// Picks the MAC algorithm for one direction of a connection.
///
/// Following RFC 4253 §7.1, the chosen algorithm is the first one on the
/// client's list that is also on the server's list. Names this crate does
/// not implement are skipped.
///
/// # Errors
///
/// [`MacError::NoCommonAlgorithm`] if no acceptable algorithm remains.
pub fn negotiate(client: &[&str], server: &[&str]) -> Result<MacAlgorithm> {
    for &name in client {
        if !server.contains(&name) {
            trace!(algorithm = name, "MAC not offered by server");
            continue;
        }

        match name.parse::<MacAlgorithm>() {
            Ok(algorithm) => {
                trace!(%algorithm, "MAC negotiated");
                return Ok(algorithm);
            }
            Err(_) => trace!(algorithm = name, "MAC shared but unsupported"),
        }
    }

    Err(MacError::NoCommonAlgorithm)
}
