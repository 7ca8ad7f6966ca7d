//! Domain names.
//!
//! Domain names are a sequence of *labels* which are in turn a sequence of
//! up to 63 octets. In their wire-format representation labels are prefixed
//! with an octet containing the number of octets in the label. The last
//! label of a name is the empty *root label.* Names are limited to 255
//! octets in total.
//!
//! In order to save space in DNS messages, a name can end in a pointer to
//! another name stored elsewhere in the message. Because of this, parsing a
//! name needs access to the complete message and not just the octets the
//! name occupies. [`Name::parse`] takes care of this and always produces a
//! self-contained, uncompressed [`Name`]. Names are never compressed when
//! composing messages.
//!
//! Main types: [`Name`], [`Label`], [`NameBuilder`].

pub use self::absolute::{Name, NameIter};
pub use self::builder::{FromStrError, NameBuilder, PushError};
pub use self::label::{Label, LongLabelError};

mod absolute;
mod builder;
mod label;
