//! Resource data implementations.
//!
//! The types are named identically to the [`Rtype`] variant they implement.
//! They are grouped into submodules for the RFCs they are defined in. All
//! types are also re-exported at the top level here.
//!
//! The [`RecordData`] enum is the closed sum over all supported types. It
//! is what records carry and what parsing dispatches into.

pub use self::rfc1035::{Mx, Ns, A};

pub mod rfc1035;

use crate::base::iana::Rtype;
use crate::base::rdata::ComposeRecordData;
use crate::base::wire::ParseError;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ RecordData ----------------------------------------------------

/// Record data for all supported record types.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordData {
    A(A),
    Ns(Ns),
    Mx(Mx),
}

impl RecordData {
    /// Parses record data of the given type.
    ///
    /// The parser has to be limited to exactly the record data. It is the
    /// caller’s job to check that all of it has been consumed.
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        rtype: Rtype,
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        match rtype {
            Rtype::A => A::parse(parser).map(RecordData::A),
            Rtype::Ns => Ns::parse(parser).map(RecordData::Ns),
            Rtype::Mx => Mx::parse(parser).map(RecordData::Mx),
        }
    }
}

//--- From

impl From<A> for RecordData {
    fn from(value: A) -> Self {
        RecordData::A(value)
    }
}

impl From<Ns> for RecordData {
    fn from(value: Ns) -> Self {
        RecordData::Ns(value)
    }
}

impl From<Mx> for RecordData {
    fn from(value: Mx) -> Self {
        RecordData::Mx(value)
    }
}

//--- ComposeRecordData

impl ComposeRecordData for RecordData {
    fn rtype(&self) -> Rtype {
        match *self {
            RecordData::A(ref inner) => inner.rtype(),
            RecordData::Ns(ref inner) => inner.rtype(),
            RecordData::Mx(ref inner) => inner.rtype(),
        }
    }

    fn rdlen(&self) -> u16 {
        match *self {
            RecordData::A(ref inner) => inner.rdlen(),
            RecordData::Ns(ref inner) => inner.rdlen(),
            RecordData::Mx(ref inner) => inner.rdlen(),
        }
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        match *self {
            RecordData::A(ref inner) => inner.compose_rdata(target),
            RecordData::Ns(ref inner) => inner.compose_rdata(target),
            RecordData::Mx(ref inner) => inner.compose_rdata(target),
        }
    }
}

//--- Display

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecordData::A(ref inner) => inner.fmt(f),
            RecordData::Ns(ref inner) => inner.fmt(f),
            RecordData::Mx(ref inner) => inner.fmt(f),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dispatch() {
        let buf: &[u8] = b"\x00\x05\x02mx\x00";
        let data = RecordData::parse(Rtype::Mx, &mut Parser::from_ref(buf))
            .unwrap();
        assert_eq!(data.rtype(), Rtype::Mx);
        assert_eq!(data.rdlen(), 6);
        assert_eq!(data.to_string(), "5 mx");

        let data = RecordData::parse(Rtype::Ns, &mut Parser::from_ref(buf));
        assert_eq!(data, Err(ParseError::RdataLengthMismatch));
    }
}
