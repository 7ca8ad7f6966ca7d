//! Uncompressed, absolute domain names.
//!
//! This is a private module. Its public types are re-exported by the parent.

use super::builder::{FromStrError, NameBuilder, PushError};
use super::label::{Label, LabelType};
use crate::base::wire::ParseError;
use core::{fmt, hash, str};
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;
use std::vec::Vec;

//------------ Name ----------------------------------------------------------

/// An uncompressed, absolute domain name.
///
/// The name is kept in its wire format: a sequence of labels, each preceded
/// by a length octet, ending in the empty root label. It is never longer
/// than 255 octets.
///
/// A name is created from a wire-format message via [`parse`], which
/// resolves compression pointers, from its presentation format via
/// [`FromStr`], or from a sequence of labels via [`from_labels`]. Once
/// created it can’t be changed.
///
/// Comparison and hashing ignore ASCII case.
///
/// [`parse`]: Name::parse
/// [`from_labels`]: Name::from_labels
/// [`FromStr`]: core::str::FromStr
#[derive(Clone)]
pub struct Name {
    octets: Vec<u8>,
}

/// # Creation and Conversion
///
impl Name {
    /// Domain names have a maximum length of 255 octets.
    pub const MAX_LEN: usize = 255;

    /// Creates a name from wire-format octets without checking.
    ///
    /// Only the builder uses this. It guarantees the octets are valid.
    pub(super) fn from_octets_unchecked(octets: Vec<u8>) -> Self {
        Name { octets }
    }

    /// Returns the root name.
    #[must_use]
    pub fn root() -> Self {
        Name { octets: vec![0] }
    }

    /// Creates a name from a sequence of non-root labels.
    ///
    /// The root label is added automatically.
    pub fn from_labels<I, L>(labels: I) -> Result<Self, PushError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut builder = NameBuilder::new();
        for label in labels {
            builder.append_label(label.as_ref())?;
        }
        Ok(builder.into_name())
    }

    /// Returns a reference to the wire-format octets of the name.
    pub fn as_slice(&self) -> &[u8] {
        &self.octets
    }

}

/// # Properties
///
impl Name {
    /// Returns whether the name is the root name.
    pub fn is_root(&self) -> bool {
        self.octets.len() == 1
    }

    /// Returns an iterator over the labels of the name.
    ///
    /// The root label is not included.
    pub fn iter_labels(&self) -> NameIter<'_> {
        NameIter { slice: &self.octets }
    }

    /// Returns the number of labels in the name, not counting the root.
    pub fn label_count(&self) -> usize {
        self.iter_labels().count()
    }

    /// Returns the length of the name in wire format.
    pub fn compose_len(&self) -> u16 {
        // Never longer than 255.
        self.octets.len() as u16
    }
}

/// # Parsing and Composing
///
impl Name {
    /// Parses a possibly compressed name from the beginning of `parser`.
    ///
    /// The parser needs to be positioned within a parser over the complete
    /// message, as compression pointers are offsets from the start of the
    /// message. It may be limited to a range of the message, such as the
    /// record data, which only restricts the octets the name itself
    /// occupies.
    ///
    /// After success, the parser has advanced over the labels of the name
    /// up to and including either the root label or the first compression
    /// pointer. Labels reached through a pointer are read but not skipped.
    ///
    /// Every pointer has to point to a position before the start of the
    /// part of the name it was found in. This guarantees progress and,
    /// together with the limit on the number of pointers, that parsing
    /// terminates.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        Self::parse_with_short(parser, ParseError::BufferTooShort)
    }

    /// Parses a name that has to be contained in record data.
    ///
    /// Like [`parse`][Self::parse] but running out of the octets of
    /// `parser` is reported as [`ParseError::RdataLengthMismatch`]. Labels
    /// reached through compression pointers are read from the complete
    /// message, so running out of those is still
    /// [`ParseError::BufferTooShort`].
    pub(crate) fn parse_rdata<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        Self::parse_with_short(parser, ParseError::RdataLengthMismatch)
    }

    fn parse_with_short<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
        short: ParseError,
    ) -> Result<Self, ParseError> {
        let mut builder = NameBuilder::new();
        let local = |err: ParseError| match err {
            ParseError::BufferTooShort => short,
            err => err,
        };

        // Phase One: No compression pointers have been found yet. Labels
        // are consumed from the local stream.
        let start = parser.pos();
        let mut ptr = loop {
            match LabelType::parse(parser).map_err(local)? {
                LabelType::Normal(0) => return Ok(builder.into_name()),
                LabelType::Normal(len) => {
                    let label = parser.peek(len).map_err(|_| short)?;
                    builder.append_label(label)?;
                    parser.advance(len).map_err(|_| short)?;
                }
                LabelType::Compressed(ptr) => break ptr,
            }
        };

        // Phase Two: Compression has occured.
        //
        // Pointers are resolved on a fresh parser over the whole message
        // since the original one may be limited to the record data.
        let octets = parser.octets_ref();
        let msg_len = octets.as_ref().len();
        let mut parser = Parser::from_ref(octets);
        let mut limit = start;
        let mut hops = 0;
        loop {
            if ptr >= msg_len {
                return Err(ParseError::CompressionPointerOutOfRange(ptr));
            }
            if ptr >= limit {
                return Err(ParseError::CompressionLoop);
            }
            hops += 1;
            if hops > msg_len {
                return Err(ParseError::CompressionLoop);
            }
            limit = ptr;
            parser.seek(ptr)?;
            ptr = loop {
                match LabelType::parse(&mut parser)? {
                    LabelType::Normal(0) => return Ok(builder.into_name()),
                    LabelType::Normal(len) => {
                        builder.append_label(parser.peek(len)?)?;
                        parser.advance(len)?;
                    }
                    LabelType::Compressed(ptr) => break ptr,
                }
            };
        }
    }

    /// Appends the uncompressed wire format of the name to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.octets)
    }
}

//--- FromStr

impl str::FromStr for Name {
    type Err = FromStrError;

    /// Parses a name in presentation format.
    ///
    /// Labels are separated by dots, a final dot is optional. Dots,
    /// backslashes, and spaces within a label are escaped by a backslash,
    /// any other octet can be given as a backslash followed by its three
    /// digit decimal value. A single dot is the root name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "." {
            return Ok(Name::root());
        }
        let mut builder = NameBuilder::new();
        let mut chars = s.chars();
        while let Some(ch) = chars.next() {
            match ch {
                '.' => {
                    if !builder.in_label() {
                        return Err(FromStrError::EmptyLabel);
                    }
                    builder.end_label();
                }
                '\\' => builder.push(parse_escape(&mut chars)?)?,
                '!'..='~' => builder.push(ch as u8)?,
                _ => return Err(FromStrError::BadSymbol(ch)),
            }
        }
        if builder.is_empty() {
            return Err(FromStrError::EmptyLabel);
        }
        Ok(builder.into_name())
    }
}

/// Parses the remainder of an escape sequence after the backslash.
fn parse_escape(chars: &mut str::Chars) -> Result<u8, FromStrError> {
    let ch = chars.next().ok_or(FromStrError::BadEscape)?;
    if let Some(first) = ch.to_digit(10) {
        let mut value = first;
        for _ in 0..2 {
            let digit = chars
                .next()
                .and_then(|ch| ch.to_digit(10))
                .ok_or(FromStrError::BadEscape)?;
            value = value * 10 + digit;
        }
        u8::try_from(value).map_err(|_| FromStrError::BadEscape)
    } else if (' '..='~').contains(&ch) {
        Ok(ch as u8)
    } else {
        Err(FromStrError::BadEscape)
    }
}

//--- PartialEq, Eq, and Hash

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        // Length octets are at most 63 and thus never ASCII letters.
        self.octets.eq_ignore_ascii_case(&other.octets)
    }
}

impl Eq for Name {}

impl hash::Hash for Name {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for ch in self.octets.iter() {
            state.write_u8(ch.to_ascii_lowercase())
        }
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        let mut labels = self.iter_labels();
        if let Some(label) = labels.next() {
            write!(f, "{}", label)?;
        }
        for label in labels {
            write!(f, ".{}", label)?
        }
        Ok(())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self)
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for Name {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Name {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde::de::Error;

        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

//------------ NameIter ------------------------------------------------------

/// An iterator over the non-root labels of a [`Name`].
#[derive(Clone, Debug)]
pub struct NameIter<'a> {
    slice: &'a [u8],
}

impl<'a> Iterator for NameIter<'a> {
    type Item = &'a Label;

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, tail) = self.slice.split_first()?;
        let len = usize::from(len);
        if len == 0 {
            self.slice = tail;
            return None;
        }
        let (label, tail) = tail.split_at(len);
        self.slice = tail;
        // SAFETY: A name’s length octets are never larger than 63.
        Some(unsafe { Label::from_slice_unchecked(label) })
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;
    use rstest::rstest;

    fn p(slice: &[u8], pos: usize) -> Parser<'_, [u8]> {
        let mut res = Parser::from_ref(slice);
        res.advance(pos).unwrap();
        res
    }

    #[rstest]
    #[case::root(b"\0".as_slice(), 0, ".", 1)]
    #[case::flat(
        b"\x03www\x07example\x03com\0\xc0\0".as_slice(),
        0,
        "www.example.com",
        17
    )]
    #[case::copy(
        b"\x03www\x07example\x03com\0\xc0\0".as_slice(),
        17,
        "www.example.com",
        2
    )]
    #[case::once(
        b"\x03com\0\x03www\x07example\xc0\0".as_slice(),
        5,
        "www.example.com",
        14
    )]
    #[case::twice(
        b"\x03com\0\x07example\xc0\0\x03www\xc0\x05".as_slice(),
        15,
        "www.example.com",
        6
    )]
    fn parse_good(
        #[case] buf: &[u8],
        #[case] start: usize,
        #[case] name: &str,
        #[case] consumed: usize,
    ) {
        let mut parser = p(buf, start);
        let parsed = Name::parse(&mut parser).unwrap();
        assert_eq!(parsed, Name::from_str(name).unwrap());
        assert_eq!(parser.pos(), start + consumed);
    }

    #[test]
    fn parse_short_input() {
        assert_eq!(
            Name::parse(&mut p(b"\x03www\x07exam", 0)),
            Err(ParseError::BufferTooShort)
        );
        assert_eq!(
            Name::parse(&mut p(b"\x03www\x07example", 0)),
            Err(ParseError::BufferTooShort)
        );
        assert_eq!(
            Name::parse(&mut p(b"\x03www\xc0", 0)),
            Err(ParseError::BufferTooShort)
        );
    }

    #[test]
    fn parse_bad_pointers() {
        // Beyond the end of the buffer.
        assert_eq!(
            Name::parse(&mut p(b"\x03www\xc0\xee12", 0)),
            Err(ParseError::CompressionPointerOutOfRange(0xee))
        );

        // To itself.
        assert_eq!(
            Name::parse(&mut p(b"\x03www\xc0\x0412", 4)),
            Err(ParseError::CompressionLoop)
        );

        // Forward.
        assert_eq!(
            Name::parse(&mut p(b"\x03www\xc0\x0612", 4)),
            Err(ParseError::CompressionLoop)
        );

        // Back into the middle of the name containing the pointer.
        assert_eq!(
            Name::parse(&mut p(b"\x03www\x03foo\xc0\x04", 0)),
            Err(ParseError::CompressionLoop)
        );

        // Two names pointing at each other.
        assert_eq!(
            Name::parse(&mut p(b"\x01a\xc0\x04\x01b\xc0\x00", 4)),
            Err(ParseError::CompressionLoop)
        );
    }

    #[test]
    fn parse_bad_label() {
        assert_eq!(
            Name::parse(&mut p(b"\x03www\x07example\xbffoo", 0)),
            Err(ParseError::LabelTooLong)
        );
    }

    #[test]
    fn parse_long_name() {
        // Long name: 255 octets is fine.
        let mut buf = Vec::from(&b"\x03123\0"[..]);
        for _ in 0..25 {
            buf.extend_from_slice(b"\x09123456789");
        }
        buf.extend_from_slice(b"\xc0\x0012");
        let mut parser = p(&buf, 5);
        let name = Name::parse(&mut parser).unwrap();
        assert_eq!(name.compose_len(), 255);
        assert_eq!(parser.remaining(), 2);

        // Long name: 256 octets are not.
        let mut buf = Vec::from(&b"\x041234\0"[..]);
        for _ in 0..25 {
            buf.extend_from_slice(b"\x09123456789");
        }
        buf.extend_from_slice(b"\xc0\x0012");
        assert_eq!(
            Name::parse(&mut p(&buf, 6)),
            Err(ParseError::NameTooLong)
        );
    }

    #[test]
    fn parse_within_limited_parser() {
        // A name in a range of the message pointing before the range.
        let buf: &[u8] = b"\x03com\0\x07example\xc0\0tail";
        let mut parser = p(buf, 5);
        let mut rdata = parser.parse_parser(10).unwrap();
        assert_eq!(
            Name::parse(&mut rdata).unwrap(),
            Name::from_str("example.com").unwrap()
        );
        assert_eq!(rdata.remaining(), 0);
    }

    #[test]
    fn compose() {
        let name = Name::from_str("www.example.com.").unwrap();
        let mut buf = Vec::new();
        name.compose(&mut buf).unwrap();
        assert_eq!(buf, b"\x03www\x07example\x03com\0");
        assert_eq!(usize::from(name.compose_len()), buf.len());
    }

    #[test]
    fn from_str() {
        assert_eq!(Name::from_str(".").unwrap().as_slice(), b"\0");
        assert_eq!(
            Name::from_str("redhat.com").unwrap().as_slice(),
            b"\x06redhat\x03com\0"
        );
        assert_eq!(
            Name::from_str("a\\.b.c").unwrap().as_slice(),
            b"\x03a.b\x01c\0"
        );
        assert_eq!(
            Name::from_str("\\065\\\\.c").unwrap().as_slice(),
            b"\x02A\\\x01c\0"
        );
        assert_eq!(Name::from_str(""), Err(FromStrError::EmptyLabel));
        assert_eq!(Name::from_str("a..b"), Err(FromStrError::EmptyLabel));
        assert_eq!(Name::from_str(".a"), Err(FromStrError::EmptyLabel));
        assert_eq!(Name::from_str("a\\25"), Err(FromStrError::BadEscape));
        assert_eq!(Name::from_str("a\\256"), Err(FromStrError::BadEscape));
        assert_eq!(
            Name::from_str("a b"),
            Err(FromStrError::BadSymbol(' '))
        );
        let long = "x".repeat(64);
        assert_eq!(Name::from_str(&long), Err(FromStrError::LongLabel));
    }

    #[test]
    fn display() {
        assert_eq!(Name::root().to_string(), ".");
        assert_eq!(
            Name::from_str("www.Example.com.").unwrap().to_string(),
            "www.Example.com"
        );
        assert_eq!(
            Name::from_labels([&b"a.b"[..], &b"c"[..]]).unwrap().to_string(),
            "a\\.b.c"
        );
    }

    #[test]
    fn eq_and_labels() {
        let name = Name::from_str("WWW.example.COM").unwrap();
        assert_eq!(name, Name::from_str("www.example.com").unwrap());
        assert_ne!(name, Name::from_str("www.example.org").unwrap());
        assert_eq!(name.label_count(), 3);
        assert_eq!(Name::root().label_count(), 0);
        let labels: Vec<_> =
            name.iter_labels().map(|l| l.as_slice().to_vec()).collect();
        assert_eq!(
            labels,
            [b"WWW".to_vec(), b"example".to_vec(), b"COM".to_vec()]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Name::from_str("www.example.com").unwrap(),
            &[Token::Str("www.example.com")],
        );
        assert_tokens(&Name::root(), &[Token::Str(".")]);
    }
}
