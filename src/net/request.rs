//! Requests in text form.
//!
//! The command line client reads one request per line. A request consists
//! of a record type mnemonic followed by a domain name, separated by white
//! space, for instance `MX redhat.com`.

use crate::base::iana::Rtype;
use crate::base::name::{self, Name};
use crate::base::Message;
use core::{fmt, str};

//------------ Request -------------------------------------------------------

/// A single request for records of a type at a name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    qtype: Rtype,
    qname: Name,
}

impl Request {
    pub fn new(qtype: Rtype, qname: Name) -> Self {
        Request { qtype, qname }
    }

    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    pub fn qname(&self) -> &Name {
        &self.qname
    }

    /// Creates the query message for the request.
    pub fn to_query(&self) -> Message {
        Message::query(self.qname.clone(), self.qtype)
    }
}

//--- FromStr and Display

impl str::FromStr for Request {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let (qtype, qname) = match (words.next(), words.next(), words.next())
        {
            (Some(qtype), Some(qname), None) => (qtype, qname),
            _ => return Err(RequestError::Format),
        };
        Ok(Request::new(
            Rtype::from_str(qtype).map_err(|_| RequestError::Rtype)?,
            Name::from_str(qname).map_err(RequestError::Name)?,
        ))
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.qtype, self.qname)
    }
}

//------------ RequestError --------------------------------------------------

/// A line didn’t contain a valid request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestError {
    /// The line didn’t consist of exactly two words.
    Format,

    /// The record type isn’t supported.
    Rtype,

    /// The domain name is invalid.
    Name(name::FromStrError),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RequestError::Format => {
                f.write_str("expected record type and domain name")
            }
            RequestError::Rtype => f.write_str("unsupported record type"),
            RequestError::Name(ref err) => {
                write!(f, "invalid domain name: {}", err)
            }
        }
    }
}

impl std::error::Error for RequestError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;
    use rstest::rstest;

    #[rstest]
    #[case("A redhat.com", Rtype::A, "redhat.com")]
    #[case("  mx\tgoogle.com.  ", Rtype::Mx, "google.com")]
    #[case("NS .", Rtype::Ns, ".")]
    fn parse_good(
        #[case] line: &str,
        #[case] qtype: Rtype,
        #[case] qname: &str,
    ) {
        let request = Request::from_str(line).unwrap();
        assert_eq!(request.qtype(), qtype);
        assert_eq!(request.qname(), &Name::from_str(qname).unwrap());
    }

    #[rstest]
    #[case("", RequestError::Format)]
    #[case("A", RequestError::Format)]
    #[case("A redhat.com extra", RequestError::Format)]
    #[case("AAAA redhat.com", RequestError::Rtype)]
    #[case("A red..hat", RequestError::Name(name::FromStrError::EmptyLabel))]
    fn parse_bad(#[case] line: &str, #[case] err: RequestError) {
        assert_eq!(Request::from_str(line), Err(err));
    }

    #[test]
    fn to_query() {
        let request = Request::from_str("MX redhat.com").unwrap();
        let query = request.to_query();
        assert!(query.header().rd());
        assert!(!query.header().qr());
        assert_eq!(query.question().map(|q| q.qtype()), Some(Rtype::Mx));
        assert_eq!(request.to_string(), "MX redhat.com");
    }
}
