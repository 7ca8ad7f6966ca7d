//! Creating and consuming data in wire format.

use core::fmt;
use octseq::builder::{OctetsBuilder, ShortBuf, Truncate};
use octseq::parse::{Parser, ShortInput};
use std::net::Ipv4Addr;

//------------ Composer ------------------------------------------------------

/// A buffer a complete DNS message can be composed into.
///
/// Names are always appended uncompressed, so any octets builder that
/// allows looking at and truncating what has been written so far will do.
pub trait Composer: OctetsBuilder + AsRef<[u8]> + AsMut<[u8]> + Truncate {}

impl Composer for std::vec::Vec<u8> {}

impl<const N: usize> Composer for octseq::array::Array<N> {}

#[cfg(feature = "bytes")]
impl Composer for bytes::BytesMut {}

//------------ SliceTarget ---------------------------------------------------

/// A composer writing into a caller-provided, fixed-size slice.
///
/// Appending beyond the end of the slice fails with [`ShortBuf`] and leaves
/// the already written part untouched.
#[derive(Debug)]
pub struct SliceTarget<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceTarget<'a> {
    /// Creates a new, empty target atop `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        SliceTarget { buf, len: 0 }
    }

    /// Returns the number of octets written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a> OctetsBuilder for SliceTarget<'a> {
    type AppendError = ShortBuf;

    fn append_slice(&mut self, slice: &[u8]) -> Result<(), Self::AppendError> {
        let end = self.len.checked_add(slice.len()).ok_or(ShortBuf)?;
        let dest = self.buf.get_mut(self.len..end).ok_or(ShortBuf)?;
        dest.copy_from_slice(slice);
        self.len = end;
        Ok(())
    }
}

impl<'a> Truncate for SliceTarget<'a> {
    fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len
        }
    }
}

impl<'a> AsRef<[u8]> for SliceTarget<'a> {
    fn as_ref(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl<'a> AsMut<[u8]> for SliceTarget<'a> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.buf[..self.len]
    }
}

impl<'a> Composer for SliceTarget<'a> {}

//------------ Compose -------------------------------------------------------

/// A type that knows how to append its wire format to an octets builder.
pub trait Compose {
    /// The length in octets of the wire format of every value of the type.
    ///
    /// Types with a variable length leave this at zero.
    const COMPOSE_LEN: u16 = 0;

    /// Appends the wire format of the value to `target`.
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

impl Compose for u8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&[*self])
    }
}

macro_rules! compose_to_be_bytes {
    ( $type:ident ) => {
        impl Compose for $type {
            const COMPOSE_LEN: u16 = ($type::BITS >> 3) as u16;

            fn compose<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                target.append_slice(&self.to_be_bytes())
            }
        }
    };
}

compose_to_be_bytes!(u16);
compose_to_be_bytes!(u32);

impl Compose for Ipv4Addr {
    const COMPOSE_LEN: u16 = 4;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.octets())
    }
}

//------------ Parse ---------------------------------------------------------

/// A type that can extract a value from a parser.
///
/// The parser always covers the complete message, or a range of it, so
/// that positions are offsets from the start of the message. This is what
/// allows domain names to resolve compression pointers.
///
/// If parsing fails and an error is returned, the parser’s position
/// should be considered to be undefined.
pub trait Parse<'a, Octs: ?Sized>: Sized {
    /// Extracts a value from the beginning of `parser`.
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError>;
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for u8 {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        parser.parse_u8().map_err(Into::into)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for u16 {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        parser.parse_u16_be().map_err(Into::into)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for u32 {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        parser.parse_u32_be().map_err(Into::into)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for Ipv4Addr {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        let mut buf = [0u8; 4];
        parser.parse_buf(&mut buf)?;
        Ok(buf.into())
    }
}

//============ Error Types ===================================================

//------------ ComposeError --------------------------------------------------

/// An error happened while composing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposeError {
    /// The target buffer is too small for the data.
    ShortBuf,
}

impl From<ShortBuf> for ComposeError {
    fn from(_: ShortBuf) -> Self {
        ComposeError::ShortBuf
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComposeError::ShortBuf => f.write_str("buffer size exceeded"),
        }
    }
}

impl std::error::Error for ComposeError {}

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing wire-format data.
///
/// Every parse function either returns a complete value or exactly one of
/// these.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A read would have gone beyond the end of the buffer.
    BufferTooShort,

    /// The record data didn’t occupy exactly the declared length.
    RdataLengthMismatch,

    /// The record type is not one of A, NS, or MX.
    UnsupportedRRType(u16),

    /// The class is not IN.
    InvalidClass(u16),

    /// A label header announced a label longer than 63 octets.
    LabelTooLong,

    /// A domain name is longer than 255 octets.
    NameTooLong,

    /// A compression pointer points beyond the end of the message.
    CompressionPointerOutOfRange(usize),

    /// A compression pointer doesn’t point backwards or there are too many.
    CompressionLoop,

    /// Octets are left after all the sections announced in the header.
    SectionCountMismatch,
}

//--- From

impl From<ShortInput> for ParseError {
    fn from(_: ShortInput) -> Self {
        ParseError::BufferTooShort
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::BufferTooShort => {
                f.write_str("unexpected end of input")
            }
            ParseError::RdataLengthMismatch => {
                f.write_str("record data length mismatch")
            }
            ParseError::UnsupportedRRType(rtype) => {
                write!(f, "unsupported record type {}", rtype)
            }
            ParseError::InvalidClass(class) => {
                write!(f, "invalid class {}", class)
            }
            ParseError::LabelTooLong => f.write_str("long label"),
            ParseError::NameTooLong => f.write_str("long domain name"),
            ParseError::CompressionPointerOutOfRange(pos) => {
                write!(f, "compression pointer to {} out of range", pos)
            }
            ParseError::CompressionLoop => {
                f.write_str("compression pointer loop")
            }
            ParseError::SectionCountMismatch => {
                f.write_str("trailing data after last section")
            }
        }
    }
}

impl std::error::Error for ParseError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slice_target_short_buf() {
        let mut buf = [0u8; 3];
        let mut target = SliceTarget::new(&mut buf);
        assert_eq!(2u16.compose(&mut target), Ok(()));
        assert_eq!(7u16.compose(&mut target), Err(ShortBuf));
        assert_eq!(target.as_ref(), b"\0\x02");
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn compose_len() {
        assert_eq!(u8::COMPOSE_LEN, 1);
        assert_eq!(u16::COMPOSE_LEN, 2);
        assert_eq!(u32::COMPOSE_LEN, 4);
        assert_eq!(Ipv4Addr::COMPOSE_LEN, 4);
    }

    #[test]
    fn parse_ints() {
        let buf: &[u8] = b"\x01\x02\x03\x04\x05\x06\x07";
        let mut parser = Parser::from_ref(buf);
        assert_eq!(u8::parse(&mut parser), Ok(1));
        assert_eq!(u16::parse(&mut parser), Ok(0x0203));
        assert_eq!(
            u32::parse(&mut parser),
            Err(ParseError::BufferTooShort)
        );
    }
}
