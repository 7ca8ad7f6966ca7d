//! Basics.
//!
//! This module provides types and traits for working with DNS data.
//! Crucially, the module provides means to extract the data from
//! wire-format DNS messages and assemble such messages.
//!
//!
//! ## Parsing and Composing Messages
//!
//! In order to easily distinguish the process of creating and dissecting
//! wire-format messages from other forms of representation conversion, we
//! use the term *parsing* for extracting data from a wire-format
//! representation and *composing* for producing such a representation.
//!
//! Parsing happens on buffers holding a complete DNS message. Domain names
//! in a message may be compressed by referencing other parts of the
//! message, so each parse function receives an [octseq] parser over the
//! complete message positioned where the value starts. Compressed names
//! are fully resolved while parsing: all types here own their data.
//!
//! Composing never compresses names. Any octets builder can be used as a
//! target for individual values while complete messages are composed into
//! a [`Composer`][wire::Composer].
//!
//! The type [`Message`] is the entry point for both directions.
//!
//!
//! # Types for DNS Data
//!
//! The module contains a number of types for DNS data, both fundamental
//! and composed. They are arranged in submodules:
//!
//! * [header] for the header of DNS messages,
//! * [iana] for the IANA-defined values used in messages,
//! * [name] for domain names,
//! * [question] for questions,
//! * [rdata] for the trait shared by all record data, and
//! * [record] for DNS resource records.
//!
//! [octseq]: https://docs.rs/octseq

//--- Re-exports

pub use self::header::{Flags, Header, HeaderCounts, HeaderSection};
pub use self::iana::{Class, Opcode, Rcode, Rtype};
pub use self::message::Message;
pub use self::name::Name;
pub use self::question::Question;
pub use self::rdata::ComposeRecordData;
pub use self::record::{Record, RecordHeader};
pub use self::wire::{ComposeError, ParseError};

//--- Modules

pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod question;
pub mod rdata;
pub mod record;
pub mod wire;
