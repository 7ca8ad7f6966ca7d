//! UDP client
//!
//! This module implements the client side of DNS over UDP. A new socket is
//! created for every attempt of a query.
//!
//! # Relevant RFC excerpts
//!
//! RFC 5452, section 9.2:
//!
//! > Resolver implementations MUST:
//! >
//! > o  Use an unpredictable source port for outgoing queries from the
//! >    range of available ports (53, or 1024 and above) that is as large
//! >    as possible and practicable;

use core::time::Duration;
use std::io;
use std::net::{IpAddr, SocketAddr};

use tokio::net::UdpSocket;
use tracing::{debug, trace};

use crate::base::header::HeaderSection;
use crate::base::Message;
use octseq::parse::Parser;

use super::Error;

//------------ UdpConfig -----------------------------------------------------

/// Configuration of a query over UDP.
///
/// The [`Default`] implementation waits five seconds for each of up to
/// three attempts and queries port 53.
#[derive(Clone, Debug)]
pub struct UdpConfig {
    /// How long to wait for a response to each attempt.
    pub read_timeout: Duration,

    /// How often to try again after a timeout.
    pub max_retries: u8,

    /// The size of the receive buffer.
    pub recv_size: usize,

    /// The port of the server.
    pub port: u16,
}

impl Default for UdpConfig {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_secs(5),
            max_retries: 2,
            recv_size: 65536,
            port: 53,
        }
    }
}

//------------ query ---------------------------------------------------------

/// Sends `request` to `server` and returns the parsed answer.
///
/// Each attempt uses a fresh socket. Only timeouts lead to another
/// attempt, all other errors are returned right away. This includes an
/// answer that cannot be parsed.
pub async fn query(
    server: IpAddr,
    request: &Message,
    config: &UdpConfig,
) -> Result<Message, Error> {
    if request.question().is_none() {
        return Err(Error::NoQuestion);
    }

    let mut request_buf = vec![0u8; request.compose_len()];
    let len = request.encode(&mut request_buf)?;
    request_buf.truncate(len);

    let addr = SocketAddr::new(server, config.port);
    let mut response_buf = vec![0u8; config.recv_size];
    for attempt in 0..=config.max_retries {
        if attempt > 0 {
            debug!("Retrying query to {addr}, attempt {}", attempt + 1);
        }

        // A new socket for each attempt gives an unpredictable source port.
        match send_udp_request(
            &mut response_buf,
            &request_buf,
            request.id(),
            addr,
            config.read_timeout,
        )
        .await
        {
            Err(Error::Timeout) => {
                debug!("Query to {addr} timed out");
            }
            res => return res,
        }
    }
    Err(Error::Timeout)
}

//------------ send_udp_request ----------------------------------------------

/// Sends a composed request and waits for its response.
///
/// Datagrams that are not a response or carry a different ID are dropped
/// and receiving continues until `timeout` has passed. The first matching
/// datagram is parsed into the returned message.
pub async fn send_udp_request(
    buffer: &mut [u8],
    request: &[u8],
    id: u16,
    addr: SocketAddr,
    timeout: Duration,
) -> Result<Message, Error> {
    let sock_addr = if addr.is_ipv4() {
        SocketAddr::from(([0u8; 4], 0))
    } else {
        SocketAddr::from(([0u16; 8], 0))
    };

    let sock = UdpSocket::bind(sock_addr)
        .await
        .map_err(|e| Error::Bind(e.kind()))?;

    sock.connect(addr)
        .await
        .map_err(|e| Error::Connect(e.kind()))?;

    let sent = sock
        .send(request)
        .await
        .map_err(|e| Error::Send(e.kind()))?;

    if sent != request.len() {
        // Only part of the message could be written.
        return Err(Error::Send(io::ErrorKind::WriteZero));
    }

    tokio::time::timeout(timeout, async {
        loop {
            let len = sock
                .recv(buffer)
                .await
                .map_err(|e| Error::Receive(e.kind()))?;

            trace!("Received {len} bytes of message from {addr}");

            let message_buf = &buffer[..len];
            match HeaderSection::parse(&mut Parser::from_ref(message_buf)) {
                Ok(section)
                    if section.header().qr()
                        && section.header().id() == id =>
                {
                    return Message::from_octets(message_buf)
                        .map_err(Error::Parse);
                }
                Ok(_) => {
                    trace!(
                        "Received message is not the answer we were \
                         waiting for, reading more"
                    );
                }
                Err(_) => {
                    trace!("Received bytes were garbage, reading more");
                }
            }
        }
    })
    .await
    .unwrap_or(Err(Error::Timeout))
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::{Name, Rtype};

    #[test]
    fn default_config() {
        let config = UdpConfig::default();
        assert_eq!(config.read_timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.recv_size, 65536);
        assert_eq!(config.port, 53);
    }

    #[tokio::test]
    async fn no_question() {
        let request = Message::new();
        assert_eq!(
            query([127, 0, 0, 1].into(), &request, &UdpConfig::default())
                .await,
            Err(Error::NoQuestion)
        );
    }

    #[tokio::test]
    async fn timeout_after_retries() {
        // Bind a socket that never answers.
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let config = UdpConfig {
            read_timeout: Duration::from_millis(20),
            max_retries: 1,
            port: silent.local_addr().unwrap().port(),
            ..Default::default()
        };
        let request = Message::query(Name::root(), Rtype::Ns);
        assert_eq!(
            query([127, 0, 0, 1].into(), &request, &config).await,
            Err(Error::Timeout)
        );
    }
}
