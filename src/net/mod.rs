//! Sending queries over the network.
//!
//! This module contains the transport on top of the codec in
//! [`base`][crate::base]: it sends a query to a name server via UDP and
//! waits for the matching answer. It uses the [Tokio](https://tokio.rs/)
//! async runtime.
//!
//! The [`conf`] module reads the name servers of the system’s resolver
//! configuration and [`request`] parses the textual requests the command
//! line client reads.

pub use self::udp::{query, send_udp_request, UdpConfig};

pub mod conf;
pub mod request;
pub mod udp;

use crate::base::wire::{ComposeError, ParseError};
use core::fmt;
use std::io;

//------------ Error ---------------------------------------------------------

/// Error type for the UDP transport.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Binding the local socket failed.
    Bind(io::ErrorKind),

    /// Connecting the socket to the server failed.
    Connect(io::ErrorKind),

    /// Sending the request failed.
    Send(io::ErrorKind),

    /// Receiving a response failed.
    Receive(io::ErrorKind),

    /// No response arrived in time, including all retries.
    Timeout,

    /// The request has no question.
    NoQuestion,

    /// The request could not be composed.
    Compose(ComposeError),

    /// The response to the request could not be parsed.
    Parse(ParseError),
}

//--- From

impl From<ComposeError> for Error {
    fn from(err: ComposeError) -> Self {
        Error::Compose(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

//--- Display and Error

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Bind(kind) => write!(f, "cannot bind socket: {}", kind),
            Error::Connect(kind) => {
                write!(f, "cannot connect socket: {}", kind)
            }
            Error::Send(kind) => write!(f, "cannot send request: {}", kind),
            Error::Receive(kind) => {
                write!(f, "cannot receive response: {}", kind)
            }
            Error::Timeout => f.write_str("timeout"),
            Error::NoQuestion => f.write_str("request without question"),
            Error::Compose(ref err) => err.fmt(f),
            Error::Parse(ref err) => write!(f, "broken answer: {}", err),
        }
    }
}

impl std::error::Error for Error {}
