//! A single question in a DNS message.
//!
//! This module defines the type [`Question`] which represents an entry in
//! the question section of a DNS message.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::ParseError;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// In DNS, a question describes what is requested in a query. It consists
/// of three elements: a domain name, a record type, and a class. Since the
/// class is always IN, only the first two are kept.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// The domain name of the question.
    qname: Name,

    /// The record type of the question.
    qtype: Rtype,
}

/// # Creation and Conversion
///
impl Question {
    /// Creates a new question for class IN.
    pub fn new(qname: Name, qtype: Rtype) -> Self {
        Question { qname, qtype }
    }
}

/// # Field Access
///
impl Question {
    /// Returns a reference to the domain name in the question.
    pub fn qname(&self) -> &Name {
        &self.qname
    }

    /// Returns the record type of the question.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    pub fn qclass(&self) -> Class {
        Class::IN
    }
}

/// # Parsing and Composing
///
impl Question {
    pub fn parse<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, ParseError> {
        let qname = Name::parse(parser)?;
        let qtype = Rtype::parse(parser)?;
        Class::parse_in(parser)?;
        Ok(Question::new(qname, qtype))
    }

    /// Returns the length of the question in wire format.
    pub fn compose_len(&self) -> u16 {
        self.qname.compose_len() + Rtype::COMPOSE_LEN + Class::COMPOSE_LEN
    }

    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.qname.compose(target)?;
        self.qtype.compose(target)?;
        Class::IN.compose(target)
    }
}

//--- From

impl From<(Name, Rtype)> for Question {
    fn from((qname, qtype): (Name, Rtype)) -> Self {
        Question::new(qname, qtype)
    }
}

//--- Display

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} IN {}", self.qname, self.qtype)
    }
}

//============ Testing =======================================================
