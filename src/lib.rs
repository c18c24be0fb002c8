//! Keyed packet authentication for the SSH transport layer
//!
//! This crate implements the `hmac-sha1`, `hmac-sha1-96`, `hmac-md5` and
//! `hmac-md5-96` MAC algorithms negotiated by SSH (RFC 4253 §6.4), built on
//! a generic RFC 2104 HMAC over pure-Rust digest primitives.
//!
//! # Module overview
//!
//! - `hash`
//!   Incremental, reusable hash primitives (MD5, SHA-1, SHA-256) behind a
//!   common [`hash::Digest`] trait. Every primitive uses a 64-byte block.
//!
//! - `hmac`
//!   The RFC 2104 construction over any [`hash::Digest`], with optional
//!   output truncation. An instance is re-primed after every tag, so it can
//!   be reused for the lifetime of a connection.
//!
//! - `mac`
//!   The protocol-facing layer: algorithm names and key lengths, name-list
//!   validation and negotiation, and the per-packet [`mac::Mac`] driver that
//!   binds every tag to the packet sequence number.
//!
//! - `error`
//!   The crate-wide [`error::MacError`].
//!
//! # Concurrency
//!
//! Everything here is synchronous and allocation-free on the packet path.
//! A [`mac::Mac`] is exclusively owned by one direction of one connection;
//! use one instance for sending and another for receiving.

mod utils;

pub mod error;
pub mod hash;
pub mod hmac;
pub mod mac;

pub use crate::error::{MacError, Result};
pub use crate::hmac::Hmac;
pub use crate::mac::{Mac, MacAlgorithm, MacConfig, PacketSequence};
