//! Record data types from RFC 1035 that consist of a single domain name.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::rdata::ComposeRecordData;
use crate::base::wire::ParseError;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Ns -----------------------------------------------------------

/// NS record data.
///
/// NS records specify hosts that are authoritative for a class and domain.
///
/// The NS record type is defined in [RFC 1035, section 3.3.11][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.11
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ns {
    nsdname: Name,
}

impl Ns {
    /// The rtype of this record data type.
    pub(crate) const RTYPE: Rtype = Rtype::Ns;
}

impl Ns {
    pub fn new(nsdname: Name) -> Self {
        Ns { nsdname }
    }

    pub fn nsdname(&self) -> &Name {
        &self.nsdname
    }

    /// Parses the record data.
    ///
    /// The parser must be limited to the record data but cover the complete
    /// message so that compression pointers can be followed.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        parse_name_rdata(parser).map(Self::new)
    }
}

//--- From

impl From<Name> for Ns {
    fn from(nsdname: Name) -> Self {
        Self::new(nsdname)
    }
}

//--- ComposeRecordData

impl ComposeRecordData for Ns {
    fn rtype(&self) -> Rtype {
        Ns::RTYPE
    }

    fn rdlen(&self) -> u16 {
        self.nsdname.compose_len()
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.nsdname.compose(target)
    }
}

//--- Display

impl fmt::Display for Ns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.nsdname.fmt(f)
    }
}

//------------ parse_name_rdata ----------------------------------------------

/// Parses a domain name that has to fill the rest of the record data.
///
/// Running out of record data while reading the name and leaving octets
/// behind are both reported as a length mismatch.
pub(super) fn parse_name_rdata<Octs: AsRef<[u8]> + ?Sized>(
    parser: &mut Parser<'_, Octs>,
) -> Result<Name, ParseError> {
    let name = Name::parse_rdata(parser)?;
    if parser.remaining() != 0 {
        return Err(ParseError::RdataLengthMismatch);
    }
    Ok(name)
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn parse_compressed() {
        // The name in the record data at 12 points to "google.com" at 0.
        let buf: &[u8] = b"\x06google\x03com\x00\x03ns1\xc0\x00";
        let mut parser = Parser::from_ref(buf);
        parser.advance(12).unwrap();
        let mut rdata = parser.parse_parser(6).unwrap();
        let ns = Ns::parse(&mut rdata).unwrap();
        assert_eq!(ns.nsdname(), &Name::from_str("ns1.google.com").unwrap());
        assert_eq!(ns.to_string(), "ns1.google.com");
        assert_eq!(ns.rdlen(), 16);
    }

    #[test]
    fn length_mismatch() {
        let buf: &[u8] = b"\x03ns1\x00\x00";
        let mut parser = Parser::from_ref(buf);
        assert_eq!(
            Ns::parse(&mut parser),
            Err(ParseError::RdataLengthMismatch)
        );

        let buf: &[u8] = b"\x03ns1\x00";
        let mut parser = Parser::from_ref(buf);
        let mut rdata = parser.parse_parser(3).unwrap();
        assert_eq!(
            Ns::parse(&mut rdata),
            Err(ParseError::RdataLengthMismatch)
        );
    }

    #[test]
    fn short_pointer_target() {
        // The pointer in the record data at 1 leads to a label at 0 that
        // runs past the end of the message.
        let buf: &[u8] = b"\x3f\xc0\x00";
        let mut parser = Parser::from_ref(buf);
        parser.advance(1).unwrap();
        let mut rdata = parser.parse_parser(2).unwrap();
        assert_eq!(Ns::parse(&mut rdata), Err(ParseError::BufferTooShort));
    }

    #[test]
    fn compose() {
        let ns = Ns::new(Name::from_str("a.example").unwrap());
        let mut composed = Vec::new();
        ns.compose_len_rdata(&mut composed).unwrap();
        assert_eq!(composed, b"\0\x0b\x01a\x07example\x00");
    }
}
