//! Non-cryptographic helpers used by the rest of the crate.

pub(crate) mod ct;
