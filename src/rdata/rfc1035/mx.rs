//! Record data for the MX record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use super::name::parse_name_rdata;
use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::rdata::ComposeRecordData;
use crate::base::wire::{Compose, Parse, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Mx -----------------------------------------------------------

/// Mx record data.
///
/// The Mx record specifies a host willing to serve as a mail exchange for
/// the owner name.
///
/// The Mx record type is defined in [RFC 1035, section 3.3.9][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.9
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mx {
    preference: u16,
    exchange: Name,
}

impl Mx {
    /// The rtype of this record data type.
    pub(crate) const RTYPE: Rtype = Rtype::Mx;
}

impl Mx {
    /// Creates a new Mx record data from the components.
    pub fn new(preference: u16, exchange: Name) -> Self {
        Mx {
            preference,
            exchange,
        }
    }

    /// The preference for this record.
    ///
    /// Defines an order if there are several Mx records for the same owner.
    /// Lower values are preferred.
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The name of the host that is the exchange.
    pub fn exchange(&self) -> &Name {
        &self.exchange
    }

    /// Parses the record data.
    ///
    /// After the preference, the exchange has to fill the remaining record
    /// data exactly, just like the name of an NS record.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        if parser.remaining() < usize::from(u16::COMPOSE_LEN) {
            return Err(ParseError::RdataLengthMismatch);
        }
        let preference = u16::parse(parser)?;
        Ok(Self::new(preference, parse_name_rdata(parser)?))
    }
}

//--- ComposeRecordData

impl ComposeRecordData for Mx {
    fn rtype(&self) -> Rtype {
        Mx::RTYPE
    }

    fn rdlen(&self) -> u16 {
        u16::COMPOSE_LEN + self.exchange.compose_len()
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.preference.compose(target)?;
        self.exchange.compose(target)
    }
}

//--- Display

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;
    use rstest::rstest;

    #[rstest]
    #[case::uncompressed(
        b"\x06redhat\x03com\x00\x00\x0a\x03mx1\x06redhat\x03com\x00",
        18
    )]
    #[case::compressed(b"\x06redhat\x03com\x00\x00\x0a\x03mx1\xc0\x00", 8)]
    fn parse(#[case] buf: &[u8], #[case] rdlen: usize) {
        let mut parser = Parser::from_ref(buf);
        parser.advance(12).unwrap();
        let mut rdata = parser.parse_parser(rdlen).unwrap();
        let mx = Mx::parse(&mut rdata).unwrap();
        assert_eq!(mx.preference(), 10);
        assert_eq!(mx.exchange(), &Name::from_str("mx1.redhat.com").unwrap());
        assert_eq!(mx.to_string(), "10 mx1.redhat.com");
        assert_eq!(mx.rdlen(), 18);
    }

    #[rstest]
    #[case::empty(b"")]
    #[case::only_preference(b"\x00\x0a")]
    #[case::half_preference(b"\x00")]
    #[case::trailing(b"\x00\x0a\x00\x00")]
    fn length_mismatch(#[case] buf: &[u8]) {
        assert_eq!(
            Mx::parse(&mut Parser::from_ref(buf)),
            Err(ParseError::RdataLengthMismatch)
        );
    }

    #[test]
    fn compose() {
        let mx = Mx::new(5, Name::from_str("mx.a").unwrap());
        let mut composed = Vec::new();
        mx.compose_len_rdata(&mut composed).unwrap();
        assert_eq!(composed, b"\0\x08\0\x05\x02mx\x01a\x00");
    }
}
