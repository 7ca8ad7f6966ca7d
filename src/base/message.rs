//! Accessing and building DNS messages.
//!
//! A DNS message consists of a header section followed by four sections:
//! the question section listing what is asked for, the answer section with
//! records answering the question, the authority section with records
//! pointing towards authoritative name servers, and the additional section
//! with records that may be helpful in processing the others.
//!
//! The [`Message`] type owns all of that in decoded form. It is built from
//! a complete message in wire format via [`Message::from_octets`] and turned
//! back into wire format via [`Message::compose`] and friends. The section
//! counts of the header are never stored: they always follow from the
//! sections themselves.

use super::header::{Header, HeaderCounts, HeaderSection};
use super::iana::{Rcode, Rtype};
use super::name::Name;
use super::question::Question;
use super::record::Record;
use super::wire::{Compose, ComposeError, Composer, ParseError, SliceTarget};
use octseq::parse::Parser;

//------------ Message -------------------------------------------------------

/// A DNS message.
///
/// The message owns its question and records. Parsing resolves all
/// compressed names, so the message doesn’t keep a reference to the octets
/// it was parsed from.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Message {
    header: Header,
    questions: Vec<Question>,
    answer: Vec<Record>,
    authority: Vec<Record>,
    additional: Vec<Record>,
}

/// # Creation
///
impl Message {
    /// Creates a new, empty message.
    ///
    /// All header fields are zero, so the message is a query with ID 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query for the given name and record type.
    ///
    /// The query has a random ID and asks for recursion.
    #[cfg(feature = "rand")]
    pub fn query(qname: Name, qtype: Rtype) -> Self {
        let mut res = Self::new();
        res.header.set_random_id();
        res.header.set_rd(true);
        res.set_question(qname, qtype);
        res
    }

    /// Parses a message from its complete wire format.
    ///
    /// Compression pointers are resolved relative to the start of
    /// `octets`. Exactly as many questions and records as announced by the
    /// header are parsed. Octets left over after that are an error.
    pub fn from_octets<Octs: AsRef<[u8]> + ?Sized>(
        octets: &Octs,
    ) -> Result<Self, ParseError> {
        let mut parser = Parser::from_ref(octets);
        let section = HeaderSection::parse(&mut parser)?;
        let counts = section.counts();
        let res = Message {
            header: section.header(),
            questions: parse_section(
                &mut parser,
                counts.qdcount(),
                Question::parse,
            )?,
            answer: parse_section(
                &mut parser,
                counts.ancount(),
                Record::parse,
            )?,
            authority: parse_section(
                &mut parser,
                counts.nscount(),
                Record::parse,
            )?,
            additional: parse_section(
                &mut parser,
                counts.arcount(),
                Record::parse,
            )?,
        };
        if parser.remaining() != 0 {
            return Err(ParseError::SectionCountMismatch);
        }
        Ok(res)
    }
}

/// # Header Access
///
impl Message {
    /// Returns the message header.
    pub fn header(&self) -> Header {
        self.header
    }

    /// Returns a mutable reference to the message header.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns the message ID.
    pub fn id(&self) -> u16 {
        self.header.id()
    }

    /// Sets the recursion desired flag.
    pub fn set_rd(&mut self, set: bool) {
        self.header.set_rd(set)
    }

    /// Returns the response code of the message.
    pub fn rcode(&self) -> Rcode {
        self.header.rcode()
    }

    /// Returns whether this is a response to `query`.
    ///
    /// This is the case if the QR bit is set and the IDs match.
    pub fn is_answer(&self, query: &Message) -> bool {
        self.header.qr() && self.header.id() == query.header.id()
    }

    /// Returns the header counts as they would appear in wire format.
    pub fn counts(&self) -> HeaderCounts {
        let mut res = HeaderCounts::new();
        res.set_qdcount(self.qdcount());
        res.set_ancount(self.ancount());
        res.set_nscount(self.nscount());
        res.set_arcount(self.arcount());
        res
    }

    // Sections can only grow through parsing or `set_question`, so their
    // lengths always fit.

    /// Returns the number of questions.
    pub fn qdcount(&self) -> u16 {
        self.questions.len() as u16
    }

    /// Returns the number of records in the answer section.
    pub fn ancount(&self) -> u16 {
        self.answer.len() as u16
    }

    /// Returns the number of records in the authority section.
    pub fn nscount(&self) -> u16 {
        self.authority.len() as u16
    }

    /// Returns the number of records in the additional section.
    pub fn arcount(&self) -> u16 {
        self.additional.len() as u16
    }
}

/// # Section Access
///
impl Message {
    /// Returns the first question if there is one.
    pub fn question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Returns all questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Replaces the question section with a single question.
    pub fn set_question(&mut self, qname: Name, qtype: Rtype) {
        self.questions.clear();
        self.questions.push(Question::new(qname, qtype));
    }

    /// Returns the records of the answer section.
    pub fn answer(&self) -> &[Record] {
        &self.answer
    }

    /// Returns the records of the authority section.
    pub fn authority(&self) -> &[Record] {
        &self.authority
    }

    /// Returns the records of the additional section.
    pub fn additional(&self) -> &[Record] {
        &self.additional
    }
}

/// # Composing
///
impl Message {
    /// Returns the length of the message in wire format.
    pub fn compose_len(&self) -> usize {
        usize::from(HeaderSection::COMPOSE_LEN)
            + self
                .questions
                .iter()
                .map(|q| usize::from(q.compose_len()))
                .sum::<usize>()
            + self
                .answer
                .iter()
                .chain(&self.authority)
                .chain(&self.additional)
                .map(|r| usize::from(r.compose_len()))
                .sum::<usize>()
    }

    /// Appends the wire format of the message to `target`.
    ///
    /// The header counts are taken from the sections.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        HeaderSection::new(self.header, self.counts()).compose(target)?;
        for question in &self.questions {
            question.compose(target)?;
        }
        for record in self
            .answer
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            record.compose(target)?;
        }
        Ok(())
    }

    /// Returns the wire format of the message in a new vec.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.compose_len());
        self.compose(&mut res).unwrap_or_else(|err| match err {});
        res
    }

    /// Writes the wire format of the message to the beginning of `buf`.
    ///
    /// Returns the number of octets written.
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, ComposeError> {
        let mut target = SliceTarget::new(buf);
        self.compose(&mut target)?;
        Ok(target.len())
    }
}

//------------ Helper Functions ----------------------------------------------

fn parse_section<'a, Octs: AsRef<[u8]> + ?Sized, T>(
    parser: &mut Parser<'a, Octs>,
    count: u16,
    op: fn(&mut Parser<'a, Octs>) -> Result<T, ParseError>,
) -> Result<Vec<T>, ParseError> {
    (0..count).map(|_| op(parser)).collect()
}

//============ Testing =======================================================
