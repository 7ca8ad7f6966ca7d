//! Resolver configuration.
//!
//! Only the name servers are taken from the configuration. The format is
//! that of the `/etc/resolv.conf` file.

use core::fmt;
use std::io::{self, BufRead, Read};
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;
use std::str::SplitWhitespace;
use std::{error, fs};

//------------ ResolvConf ----------------------------------------------------

/// The name servers of a resolver configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResolvConf {
    /// Addresses of servers to query.
    ///
    /// IPv6 servers are skipped since queries are only sent via IPv4.
    pub servers: Vec<Ipv4Addr>,
}

impl ResolvConf {
    /// Creates a new, empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configuration of the system.
    pub fn system() -> Result<Self, Error> {
        let mut res = Self::new();
        res.parse_file("/etc/resolv.conf")?;
        Ok(res)
    }

    /// Parses the configuration from a file.
    pub fn parse_file<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<(), Error> {
        let mut file = fs::File::open(path)?;
        self.parse(&mut file)
    }

    /// Parses the configuration from a reader.
    ///
    /// Comments, empty lines, and all directives other than `nameserver`
    /// are ignored.
    pub fn parse<R: Read>(&mut self, reader: &mut R) -> Result<(), Error> {
        for line in io::BufReader::new(reader).lines() {
            let line = line?;
            let line = line.trim_end();

            if line.is_empty()
                || line.starts_with(';')
                || line.starts_with('#')
            {
                continue;
            }

            let mut words = line.split_whitespace();
            if words.next() == Some("nameserver") {
                self.parse_nameserver(words)?
            }
        }
        Ok(())
    }

    fn parse_nameserver(
        &mut self,
        mut words: SplitWhitespace,
    ) -> Result<(), Error> {
        let addr = words.next().ok_or(Error::Parse)?;
        match addr.parse::<IpAddr>().map_err(|_| Error::Parse)? {
            IpAddr::V4(addr) => self.servers.push(addr),
            IpAddr::V6(_) => {}
        }
        if words.next().is_some() {
            return Err(Error::Parse);
        }
        Ok(())
    }
}

//------------ Error ---------------------------------------------------------

/// The error that can happen when parsing `resolv.conf`.
#[derive(Debug)]
pub enum Error {
    /// The file is not a proper file.
    Parse,

    /// Something happend while reading.
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::Io(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Parse => f.write_str("error parsing configuration"),
            Error::Io(ref err) => err.fmt(f),
        }
    }
}

impl error::Error for Error {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_resolv_conf() {
        let mut conf = ResolvConf::new();
        let data = "# generated\n\
                    nameserver 192.0.2.0\n\
                    nameserver 2001:db8::1\n\
                    ; old one\n\
                    \n\
                    nameserver 192.0.2.1\n\
                    search example.com\n\
                    options use-vc ndots:122\n";
        assert!(conf.parse(&mut io::Cursor::new(data)).is_ok());
        assert_eq!(
            conf.servers,
            [Ipv4Addr::new(192, 0, 2, 0), Ipv4Addr::new(192, 0, 2, 1)]
        );
    }

    #[test]
    fn bad_nameserver() {
        for data in [
            "nameserver\n",
            "nameserver foo\n",
            "nameserver 1.2.3.4 x\n",
        ] {
            assert!(matches!(
                ResolvConf::new().parse(&mut io::Cursor::new(data)),
                Err(Error::Parse)
            ));
        }
    }
}
