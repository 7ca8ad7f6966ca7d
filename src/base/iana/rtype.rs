//! Resource Record (RR) TYPEs

use crate::base::wire::{Compose, Parse, ParseError};
use core::{fmt, str};
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Rtype ---------------------------------------------------------

/// Resource Record Types.
///
/// Unlike the other IANA types, this one is closed: only the record types
/// whose data this crate knows how to interpret have a value. Any other
/// type found on the wire is a parse error rather than opaque data.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rtype {
    /// A host address (A, 1).
    A,

    /// An authoritative name server (NS, 2).
    Ns,

    /// Mail exchange (MX, 15).
    Mx,
}

impl Rtype {
    pub const COMPOSE_LEN: u16 = u16::COMPOSE_LEN;

    /// Returns the record type for a raw integer value.
    pub fn from_int(value: u16) -> Result<Self, ParseError> {
        match value {
            1 => Ok(Rtype::A),
            2 => Ok(Rtype::Ns),
            15 => Ok(Rtype::Mx),
            _ => Err(ParseError::UnsupportedRRType(value)),
        }
    }

    /// Returns the raw integer value of the record type.
    #[must_use]
    pub const fn to_int(self) -> u16 {
        match self {
            Rtype::A => 1,
            Rtype::Ns => 2,
            Rtype::Mx => 15,
        }
    }

    /// Returns a record type from its mnemonic, ignoring case.
    #[must_use]
    pub fn from_mnemonic(m: &[u8]) -> Option<Self> {
        if m.eq_ignore_ascii_case(b"A") {
            Some(Rtype::A)
        } else if m.eq_ignore_ascii_case(b"NS") {
            Some(Rtype::Ns)
        } else if m.eq_ignore_ascii_case(b"MX") {
            Some(Rtype::Mx)
        } else {
            None
        }
    }

    /// Returns the mnemonic of the record type.
    #[must_use]
    pub const fn to_mnemonic_str(self) -> &'static str {
        match self {
            Rtype::A => "A",
            Rtype::Ns => "NS",
            Rtype::Mx => "MX",
        }
    }

    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        Self::from_int(u16::parse(parser)?)
    }

    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.to_int().compose(target)
    }
}

//--- TryFrom and From

impl TryFrom<u16> for Rtype {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Rtype::from_int(value)
    }
}

impl From<Rtype> for u16 {
    fn from(value: Rtype) -> Self {
        value.to_int()
    }
}

//--- FromStr and Display

impl str::FromStr for Rtype {
    type Err = FromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rtype::from_mnemonic(s.as_bytes()).ok_or(FromStrError)
    }
}

impl fmt::Display for Rtype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_mnemonic_str())
    }
}

//------------ FromStrError --------------------------------------------------

/// A string wasn’t one of the supported record type mnemonics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FromStrError;

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("unknown record type")
    }
}

impl std::error::Error for FromStrError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn wire_values() {
        assert_eq!(Rtype::A.to_int(), 1);
        assert_eq!(Rtype::Ns.to_int(), 2);
        assert_eq!(Rtype::Mx.to_int(), 15);
        assert_eq!(Rtype::from_int(15), Ok(Rtype::Mx));
        assert_eq!(
            Rtype::from_int(28),
            Err(ParseError::UnsupportedRRType(28))
        );
    }

    #[test]
    fn from_str() {
        assert_eq!(Rtype::from_str("mx"), Ok(Rtype::Mx));
        assert_eq!(Rtype::from_str("Ns"), Ok(Rtype::Ns));
        assert_eq!(Rtype::from_str("AAAA"), Err(FromStrError));
        assert_eq!(Rtype::A.to_string(), "A");
    }
}
