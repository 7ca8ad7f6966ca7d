//! Building a domain name.
//!
//! This is a private module for tidiness. `NameBuilder`, `PushError`, and
//! `FromStrError` are re-exported by the parent module.

use super::absolute::Name;
use super::label::Label;
use crate::base::wire::ParseError;
use core::fmt;
use std::vec::Vec;

//------------ NameBuilder ---------------------------------------------------

/// An incremental builder for domain names.
///
/// Names can be built either from whole labels via [`append_label`] or
/// octet by octet via [`push`] with [`end_label`] closing the current
/// label. The root label is added by [`into_name`], so it must not be
/// appended explicitly.
///
/// The builder enforces both the 63 octet limit for labels and the 255
/// octet limit for the complete name, including the root label.
///
/// [`append_label`]: Self::append_label
/// [`push`]: Self::push
/// [`end_label`]: Self::end_label
/// [`into_name`]: Self::into_name
#[derive(Clone, Debug, Default)]
pub struct NameBuilder {
    /// The name in wire format so far, without the root label.
    octets: Vec<u8>,

    /// The position of the length octet of the label being built, if any.
    head: Option<usize>,
}

impl NameBuilder {
    /// Creates a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the length of the name built so far in wire format.
    ///
    /// This does not include the root label.
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether the builder is empty.
    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    /// Returns whether there currently is a label being built.
    pub fn in_label(&self) -> bool {
        self.head.is_some()
    }

    /// Pushes an octet to the end of the current label.
    ///
    /// Starts a new label if necessary.
    pub fn push(&mut self, ch: u8) -> Result<(), PushError> {
        match self.head {
            Some(head) => {
                if self.octets.len() - head > Label::MAX_LEN {
                    return Err(PushError::LongLabel);
                }
                self.check_room(1)?;
                self.octets.push(ch);
            }
            None => {
                self.check_room(2)?;
                self.head = Some(self.octets.len());
                self.octets.extend_from_slice(&[0, ch]);
            }
        }
        Ok(())
    }

    /// Ends the current label.
    ///
    /// If there isn’t a current label, does nothing.
    pub fn end_label(&mut self) {
        if let Some(head) = self.head.take() {
            // `push` keeps this at or below 63.
            self.octets[head] = (self.octets.len() - head - 1) as u8;
        }
    }

    /// Appends a complete label.
    ///
    /// Ends the current label first. An empty `label` is rejected as that
    /// would be the root label.
    pub fn append_label(&mut self, label: &[u8]) -> Result<(), PushError> {
        if label.is_empty() {
            return Err(PushError::EmptyLabel);
        }
        let label =
            Label::from_slice(label).map_err(|_| PushError::LongLabel)?;
        self.end_label();
        self.check_room(usize::from(label.compose_len()))?;
        self.octets.push(label.len() as u8);
        self.octets.extend_from_slice(label.as_slice());
        Ok(())
    }

    /// Finishes the name by ending the current label and adding the root.
    pub fn into_name(mut self) -> Name {
        self.end_label();
        self.octets.push(0);
        Name::from_octets_unchecked(self.octets)
    }

    /// Checks that `len` more octets still leave room for the root label.
    fn check_room(&self, len: usize) -> Result<(), PushError> {
        if self.octets.len() + len + 1 > Name::MAX_LEN {
            Err(PushError::LongName)
        } else {
            Ok(())
        }
    }
}

//============ Error Types ===================================================

//------------ PushError -----------------------------------------------------

/// An error happened while adding to a name builder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PushError {
    /// An empty label was appended.
    EmptyLabel,

    /// The current label would exceed the limit of 63 octets.
    LongLabel,

    /// The name would exceed the limit of 255 octets.
    LongName,
}

impl fmt::Display for PushError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PushError::EmptyLabel => f.write_str("empty label"),
            PushError::LongLabel => f.write_str("long label"),
            PushError::LongName => f.write_str("long domain name"),
        }
    }
}

impl std::error::Error for PushError {}

impl From<PushError> for ParseError {
    fn from(err: PushError) -> Self {
        match err {
            PushError::LongName => ParseError::NameTooLong,
            PushError::EmptyLabel | PushError::LongLabel => {
                ParseError::LabelTooLong
            }
        }
    }
}

//------------ FromStrError --------------------------------------------------

/// An error happened when converting a string into a domain name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FromStrError {
    /// The string contained an empty label, e.g. `foo..bar`.
    EmptyLabel,

    /// A label was longer than 63 octets.
    LongLabel,

    /// The name was longer than 255 octets.
    LongName,

    /// An escape sequence was broken.
    BadEscape,

    /// The string contained a character that needs escaping.
    BadSymbol(char),
}

impl From<PushError> for FromStrError {
    fn from(err: PushError) -> Self {
        match err {
            PushError::EmptyLabel => FromStrError::EmptyLabel,
            PushError::LongLabel => FromStrError::LongLabel,
            PushError::LongName => FromStrError::LongName,
        }
    }
}

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FromStrError::EmptyLabel => f.write_str("empty label"),
            FromStrError::LongLabel => f.write_str("long label"),
            FromStrError::LongName => f.write_str("long domain name"),
            FromStrError::BadEscape => f.write_str("illegal escape sequence"),
            FromStrError::BadSymbol(ch) => {
                write!(f, "illegal character '{}'", ch)
            }
        }
    }
}

impl std::error::Error for FromStrError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn build() {
        let mut builder = NameBuilder::new();
        builder.push(b'w').unwrap();
        builder.push(b'w').unwrap();
        builder.push(b'w').unwrap();
        builder.end_label();
        builder.append_label(b"example").unwrap();
        builder.push(b'c').unwrap();
        builder.push(b'o').unwrap();
        builder.push(b'm').unwrap();
        assert_eq!(
            builder.into_name().as_slice(),
            b"\x03www\x07example\x03com\0"
        );
    }

    #[test]
    fn empty_builder_is_root() {
        assert!(NameBuilder::new().into_name().is_root());
    }

    #[test]
    fn long_label() {
        let mut builder = NameBuilder::new();
        for _ in 0..63 {
            builder.push(b'x').unwrap();
        }
        assert_eq!(builder.push(b'x'), Err(PushError::LongLabel));
        assert_eq!(
            builder.append_label(&[b'x'; 64]),
            Err(PushError::LongLabel)
        );
        assert_eq!(builder.append_label(b""), Err(PushError::EmptyLabel));
    }

    #[test]
    fn long_name() {
        // 25 labels of 9 octets plus one of 3 make 254 wire octets, the
        // root label then makes it 255.
        let mut builder = NameBuilder::new();
        for _ in 0..25 {
            builder.append_label(b"123456789").unwrap();
        }
        builder.append_label(&[b'x'; 3]).unwrap();
        assert_eq!(builder.len(), 254);
        assert_eq!(builder.push(b'x'), Err(PushError::LongName));
        assert_eq!(builder.clone().into_name().compose_len(), 255);
    }
}
