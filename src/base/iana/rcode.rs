//! DNS response codes.
//!
//! Only the four bit response code carried in the message header is
//! supported. Extended response codes live in the OPT record, which is not
//! part of what this crate deals with.

use core::fmt;

//------------ Rcode ---------------------------------------------------------

int_enum! {
    /// DNS Response Codes.
    ///
    /// The response code of a response indicates what happend on the server
    /// when trying to answer the query. The code is a 4 bit value and part of
    /// the header of a DNS message.
    =>
    Rcode, u8;

    /// No error condition.
    (NOERROR => 0, "NOERROR")

    /// Format error.
    ///
    /// The name server was unable to interpret the query.
    (FORMERR => 1, "FORMERR")

    /// Server failure.
    (SERVFAIL => 2, "SERVFAIL")

    /// Name error.
    ///
    /// The domain name given in the query does not exist at the name server.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// Not implemented.
    ///
    /// The name server does not support the requested kind of query.
    (NOTIMP => 4, "NOTIMP")

    /// Query refused.
    ///
    /// The name server refuses to perform the operation requested by the
    /// query for policy reasons.
    (REFUSED => 5, "REFUSED")
}

impl Rcode {
    /// Returns whether this is the no-error condition.
    pub fn is_noerror(self) -> bool {
        self == Rcode::NOERROR
    }
}

impl Default for Rcode {
    fn default() -> Self {
        Rcode::NOERROR
    }
}

//--- Display

impl fmt::Display for Rcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Rcode::NOERROR => f.write_str("No error"),
            Rcode::FORMERR => f.write_str("Format error"),
            Rcode::SERVFAIL => f.write_str("Server failure"),
            Rcode::NXDOMAIN => f.write_str("Name Error"),
            Rcode::NOTIMP => f.write_str("Not Implemented"),
            Rcode::REFUSED => f.write_str("Refused"),
            _ => write!(f, "RCODE{}", self.to_int()),
        }
    }
}

//============ Testing =======================================================
