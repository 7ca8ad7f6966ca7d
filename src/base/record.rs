//! Resource Records.
//!
//! This module defines types related to DNS resource records. The complete
//! type is [`Record`] which contains a record with its data. [`RecordHeader`]
//! contains the data from a record’s header, the first couple of octets
//! common to all records.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::rdata::ComposeRecordData;
use super::wire::{Compose, Parse, ParseError};
use crate::rdata::RecordData;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// A record consists of its owner name, the record type, the class, the
/// TTL, and the record data. The class is always IN and the record type
/// follows from the data, so only the owner, TTL, and data are kept.
///
/// The TTL, or time to live, says for how many seconds the record may be
/// cached before it should be refreshed from its original source.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// The owner of the record.
    owner: Name,

    /// The time-to-live value of the record.
    ttl: u32,

    /// The record data. The value also specifies the record’s type.
    data: RecordData,
}

/// # Creation and Element Access
///
impl Record {
    /// Creates a new record from its parts.
    pub fn new(owner: Name, ttl: u32, data: impl Into<RecordData>) -> Self {
        Record {
            owner,
            ttl,
            data: data.into(),
        }
    }

    /// Returns a reference to the owner domain name.
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the record type of the record.
    pub fn rtype(&self) -> Rtype {
        self.data.rtype()
    }

    /// Returns the class of the record.
    pub fn class(&self) -> Class {
        Class::IN
    }

    /// Returns the record’s time-to-live in seconds.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Return a reference to the record data.
    pub fn data(&self) -> &RecordData {
        &self.data
    }
}

/// # Parsing and Composing
///
impl Record {
    /// Parses a record from the beginning of `parser`.
    ///
    /// The record data is handed to its type’s decoder limited to exactly
    /// the octets announced in the record header. The decoder has to
    /// consume all of them.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        let header = RecordHeader::parse(parser)?;
        let mut rdata = parser.parse_parser(usize::from(header.rdlen()))?;
        let data = RecordData::parse(header.rtype(), &mut rdata)?;
        if rdata.remaining() != 0 {
            return Err(ParseError::RdataLengthMismatch);
        }
        Ok(Record {
            owner: header.owner,
            ttl: header.ttl,
            data,
        })
    }

    /// Returns the length of the record in wire format.
    pub fn compose_len(&self) -> u16 {
        self.owner.compose_len()
            + RecordHeader::FIXED_LEN
            + self.data.rdlen()
    }

    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.owner.compose(target)?;
        self.rtype().compose(target)?;
        Class::IN.compose(target)?;
        self.ttl.compose(target)?;
        self.data.compose_len_rdata(target)
    }
}

//--- Display

impl fmt::Display for Record {
    /// Formats the record as its type, TTL, and data.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.rtype(), self.ttl, self.data)
    }
}

//------------ RecordHeader --------------------------------------------------

/// The header of a resource record.
///
/// This type contains the part of a record preceding the record data: the
/// owner, record type, class, TTL, and the length of the record data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RecordHeader {
    owner: Name,
    rtype: Rtype,
    ttl: u32,
    rdlen: u16,
}

impl RecordHeader {
    /// The length of the part following the owner name.
    const FIXED_LEN: u16 = Rtype::COMPOSE_LEN
        + Class::COMPOSE_LEN
        + u32::COMPOSE_LEN
        + u16::COMPOSE_LEN;

    /// Parses a record header from the beginning of `parser`.
    ///
    /// Fails for record types other than A, NS, and MX and for classes
    /// other than IN.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        let owner = Name::parse(parser)?;
        let rtype = Rtype::parse(parser)?;
        Class::parse_in(parser)?;
        Ok(RecordHeader {
            owner,
            rtype,
            ttl: u32::parse(parser)?,
            rdlen: u16::parse(parser)?,
        })
    }

    /// Returns a reference to the owner of the record.
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the record type of the record.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the TTL of the record.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Returns the data length of the record.
    pub fn rdlen(&self) -> u16 {
        self.rdlen
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::rdata::{Mx, A};
    use core::str::FromStr;
    use rstest::rstest;

    fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    #[test]
    fn parse_a() {
        let buf: &[u8] = b"\x06redhat\x03com\x00\
                           \x00\x01\x00\x01\x00\x00\x01\x2c\x00\x04\
                           \xd1\x84\xb7\x51";
        let mut parser = Parser::from_ref(buf);
        let record = Record::parse(&mut parser).unwrap();
        assert_eq!(parser.remaining(), 0);
        assert_eq!(record.owner(), &name("redhat.com"));
        assert_eq!(record.ttl(), 300);
        assert_eq!(
            record.data(),
            &RecordData::from(A::from_octets(209, 132, 183, 81))
        );
        assert_eq!(record.to_string(), "A 300 209.132.183.81");
        assert_eq!(usize::from(record.compose_len()), buf.len());

        let mut composed = Vec::new();
        record.compose(&mut composed).unwrap();
        assert_eq!(composed, buf);
    }

    #[rstest]
    #[case::a_long_rdlen(
        b"\x00\x00\x01\x00\x01\x00\x00\x00\x05\x00\x05\x01\x02\x03\x04\x05"
    )]
    #[case::a_short_rdlen(
        b"\x00\x00\x01\x00\x01\x00\x00\x00\x05\x00\x03\x01\x02\x03\x04"
    )]
    #[case::ns_name_past_rdata(
        b"\x00\x00\x02\x00\x01\x00\x00\x00\x05\x00\x02\x03ns1\x00"
    )]
    #[case::ns_short_name(
        b"\x00\x00\x02\x00\x01\x00\x00\x00\x05\x00\x06\x03ns1\x00\x00"
    )]
    fn length_mismatch(#[case] buf: &[u8]) {
        assert_eq!(
            Record::parse(&mut Parser::from_ref(buf)),
            Err(ParseError::RdataLengthMismatch)
        );
    }

    #[test]
    fn header_errors() {
        let buf: &[u8] = b"\x00\x00\x1c\x00\x01\x00\x00\x00\x05\x00\x00";
        assert_eq!(
            Record::parse(&mut Parser::from_ref(buf)),
            Err(ParseError::UnsupportedRRType(28))
        );
        let buf: &[u8] = b"\x00\x00\x01\x00\x03\x00\x00\x00\x05\x00\x04";
        assert_eq!(
            Record::parse(&mut Parser::from_ref(buf)),
            Err(ParseError::InvalidClass(3))
        );
        let buf: &[u8] = b"\x00\x00\x01\x00\x01\x00\x00\x00\x05\x00\x04\x01";
        assert_eq!(
            Record::parse(&mut Parser::from_ref(buf)),
            Err(ParseError::BufferTooShort)
        );
    }

    #[test]
    fn display_mx() {
        let record = Record::new(
            name("redhat.com"),
            5,
            Mx::new(10, name("mx1.redhat.com")),
        );
        assert_eq!(record.rtype(), Rtype::Mx);
        assert_eq!(record.to_string(), "MX 5 10 mx1.redhat.com");
    }
}
