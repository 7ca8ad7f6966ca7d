//! DNS OpCodes

use core::fmt;

//------------ Opcode --------------------------------------------------------

int_enum! {
    /// DNS OpCodes.
    ///
    /// The opcode specifies the kind of query to be performed. It is a four
    /// bit field in the message header, so any value between 0 and 15 is
    /// structurally valid. Values without an associated constant are kept
    /// as they are.
    ///
    /// The IANA registry for these values is at
    /// <https://www.iana.org/assignments/dns-parameters>.
    =>
    Opcode, u8;

    /// A standard query (0).
    (QUERY => 0, "QUERY")

    /// An inverse query (1, obsolete).
    (IQUERY => 1, "IQUERY")

    /// A server status request (2).
    (STATUS => 2, "STATUS")

    /// A NOTIFY query (4).
    (NOTIFY => 4, "NOTIFY")

    /// An UPDATE query (5).
    (UPDATE => 5, "UPDATE")
}

impl Default for Opcode {
    fn default() -> Self {
        Opcode::QUERY
    }
}

//--- Display

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_mnemonic_str() {
            Some(m) => f.write_str(m),
            None => write!(f, "OPCODE{}", self.to_int()),
        }
    }
}
