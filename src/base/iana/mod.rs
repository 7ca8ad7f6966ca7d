//! IANA Definitions for DNS.
//!
//! This module contains types for the parameters defined in IANA registries
//! that show up in the messages this crate handles.
//!
//! [`Class`], [`Opcode`], and [`Rcode`] wrap their raw integer and have an
//! associated constant for every well-defined value, so values without a
//! constant survive a round trip. [`Rtype`] is different: it is a closed
//! enum of the record types this crate can interpret.

pub use self::class::Class;
pub use self::opcode::Opcode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod opcode;
pub mod rcode;
pub mod rtype;
