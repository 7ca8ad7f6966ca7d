//! DNS CLASSes.

use crate::base::wire::{Compose, Parse, ParseError};
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// Only the Internet class is ever accepted on the wire. Questions and
    /// records of any other class are rejected while parsing.
    =>
    Class, u16;

    /// Internet (IN).
    ///
    /// This class is defined in RFC 1035 and really the only one relevant
    /// at all.
    (IN => 1, "IN")
}

impl Class {
    pub const COMPOSE_LEN: u16 = u16::COMPOSE_LEN;

    /// Parses a class value and checks that it is [`Class::IN`].
    pub fn parse_in<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        match u16::parse(parser)? {
            1 => Ok(Class::IN),
            other => Err(ParseError::InvalidClass(other)),
        }
    }

    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.to_int().compose(target)
    }
}

//============ Testing =======================================================
