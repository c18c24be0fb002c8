//! SSH transport-layer MAC algorithms (RFC 4253 §6.4).
//!
//! For every packet the sender computes
//!
//! ```text
//! mac = MAC(key, sequence_number || unencrypted_packet)
//! ```
//!
//! where `sequence_number` is the implicit 32-bit packet counter, encoded
//! big-endian and never sent on the wire. Binding the counter into the tag
//! stops an attacker from replaying, dropping or reordering single packets.
//!
//! # Layout
//!
//! - `algorithm`: the four supported wire names, their key and tag lengths,
//!   and name validation
//! - `negotiate`: SSH name-list parsing and client/server selection
//! - `config`: local algorithm preferences
//! - `sequence`: the wrapping packet counter
//! - `core`: the per-direction [`Mac`] driver

pub mod algorithm;
pub mod config;
pub mod core;
pub mod negotiate;
pub mod sequence;

pub use self::algorithm::{MAC_ALGORITHMS, MAX_TAG_LEN, MacAlgorithm, check_mac_list, key_len, mac_list};
pub use self::config::MacConfig;
pub use self::core::Mac;
pub use self::negotiate::{negotiate, parse_name_list};
pub use self::sequence::PacketSequence;
