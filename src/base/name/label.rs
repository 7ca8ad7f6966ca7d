//! Domain name labels.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use crate::base::wire::ParseError;
use core::{fmt, hash, mem};
use octseq::parse::Parser;

//------------ Label ---------------------------------------------------------

/// An octets slice with the content of a domain name label.
///
/// This is an unsized type wrapping the content of a label, i.e., without
/// the leading length octet. It is guaranteed to be at most 63 octets long.
/// Comparisons ignore ASCII case, as DNS does.
#[repr(transparent)]
pub struct Label([u8]);

impl Label {
    /// Domain name labels have a maximum length of 63 octets.
    pub const MAX_LEN: usize = 63;

    /// Creates a label from the underlying slice without any checking.
    ///
    /// # Safety
    ///
    /// The `slice` must be at most 63 octets long.
    pub(super) unsafe fn from_slice_unchecked(slice: &[u8]) -> &Self {
        // SAFETY: Label has repr(transparent)
        mem::transmute(slice)
    }

    /// Converts an octets slice into a label.
    pub fn from_slice(slice: &[u8]) -> Result<&Self, LongLabelError> {
        if slice.len() > Label::MAX_LEN {
            Err(LongLabelError(()))
        } else {
            Ok(unsafe { Self::from_slice_unchecked(slice) })
        }
    }

    /// Returns a reference to the underlying octets slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the label’s content.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the length of the label in wire format.
    ///
    /// This includes the length octet.
    pub fn compose_len(&self) -> u16 {
        // Guaranteed to be at most 63.
        self.0.len() as u16 + 1
    }
}

//--- PartialEq, Eq, and Hash

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Label {}

impl hash::Hash for Label {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_u8(self.0.len() as u8);
        for ch in self.0.iter() {
            state.write_u8(ch.to_ascii_lowercase())
        }
    }
}

//--- Display and Debug

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &ch in self.0.iter() {
            if ch == b' ' || ch == b'.' || ch == b'\\' {
                write!(f, "\\{}", ch as char)?;
            } else if !(0x20..0x7F).contains(&ch) {
                write!(f, "\\{:03}", ch)?;
            } else {
                write!(f, "{}", (ch as char))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Label(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

//------------ LabelType -----------------------------------------------------

/// The type of a label header octet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum LabelType {
    /// A normal label with its size in octets.
    Normal(usize),

    /// A compression pointer with the message offset to continue at.
    Compressed(usize),
}

impl LabelType {
    /// Attempts to take a label header from the beginning of `parser`.
    ///
    /// The two label types with a leading `01` or `10` bit pattern would
    /// mean a label longer than 63 octets and are rejected.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        let ltype = parser.parse_u8()?;
        match ltype {
            0..=0x3F => Ok(LabelType::Normal(ltype.into())),
            0xC0..=0xFF => {
                let res = usize::from(parser.parse_u8()?);
                let res = res | ((usize::from(ltype) & 0x3F) << 8);
                Ok(LabelType::Compressed(res))
            }
            _ => Err(ParseError::LabelTooLong),
        }
    }
}

//------------ LongLabelError ------------------------------------------------

/// A label was longer than the allowed 63 octets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongLabelError(());

impl fmt::Display for LongLabelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("long label")
    }
}

impl std::error::Error for LongLabelError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_slice() {
        let x = [0u8; 64];
        assert!(Label::from_slice(&x[..63]).is_ok());
        assert!(Label::from_slice(&x[..64]).is_err());
    }

    #[test]
    fn eq_ignores_case() {
        assert_eq!(
            Label::from_slice(b"ExAmPlE").unwrap(),
            Label::from_slice(b"example").unwrap()
        );
        assert_ne!(
            Label::from_slice(b"example").unwrap(),
            Label::from_slice(b"exmple").unwrap()
        );
    }

    #[test]
    fn display_escapes() {
        let label = Label::from_slice(b"a.b\\c d\x07").unwrap();
        assert_eq!(format!("{}", label), "a\\.b\\\\c\\ d\\007");
    }

    #[test]
    fn label_type() {
        let buf: &[u8] = b"\x05\xc0\x0c\x40";
        let mut parser = Parser::from_ref(buf);
        assert_eq!(LabelType::parse(&mut parser), Ok(LabelType::Normal(5)));
        assert_eq!(
            LabelType::parse(&mut parser),
            Ok(LabelType::Compressed(12))
        );
        assert_eq!(
            LabelType::parse(&mut parser),
            Err(ParseError::LabelTooLong)
        );
        assert_eq!(
            LabelType::parse(&mut parser),
            Err(ParseError::BufferTooShort)
        );
    }
}
