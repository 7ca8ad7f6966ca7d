//! A minimal DNS client library.
//!
//! This crate provides the building blocks for sending DNS queries for A,
//! NS, and MX records over UDP and interpreting the answers. It is split
//! into a codec for DNS messages, which is always available, and the
//! transport on top of it, which is enabled via a feature flag.
//!
//! # Modules
//!
//! * [base] contains the types to deal with DNS data in wire format:
//!   domain names, questions, records, and complete messages, and
//! * [rdata] contains the record data for the supported record types.
//!
//! The codec performs no I/O and never logs. Every parse function either
//! returns a complete value or a [`ParseError`][base::ParseError].
//!
#![cfg_attr(feature = "net", doc = "* [net]:")]
#![cfg_attr(not(feature = "net"), doc = "* net:")]
//!   Sending queries over UDP using the [Tokio](https://tokio.rs/)
//!   async runtime, plus reading the system resolver configuration.
#![cfg_attr(feature = "cli", doc = "* [logging]:")]
#![cfg_attr(not(feature = "cli"), doc = "* logging:")]
//!   Setting up log output for the command line client.
//!
//!
//! # Reference of Feature Flags
//!
//! * `bytes`: Enables using `BytesMut` from the
//!   [bytes](https://github.com/tokio-rs/bytes) crate as a target for
//!   composing messages.
//! * `cli`: Builds the `dnsclient` binary. Enables `net`.
//! * `net`: Enables the UDP transport. Enables `rand`.
//! * `rand`: Enables creating messages with random IDs. This feature is
//!   enabled by default.
//! * `serde`: Enables serde serialization for a number of basic types.

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
#[cfg(feature = "cli")]
pub mod logging;
#[cfg(feature = "net")]
pub mod net;
pub mod rdata;
