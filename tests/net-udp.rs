#![cfg(feature = "net")]

use dnsclient::base::{Message, Name, ParseError, Rtype};
use dnsclient::net::{self, UdpConfig};
use dnsclient::rdata::{RecordData, A};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

/// An A record for the queried name with TTL 300, the owner pointing to
/// the question.
const ANSWER: &[u8] =
    b"\xc0\x0c\x00\x01\x00\x01\x00\x00\x01\x2c\x00\x04\xd1\x84\xb7\x51";

/// Turns a query into a response with the given answer records.
fn make_response(query: &[u8], ancount: u16, answer: &[u8]) -> Vec<u8> {
    let mut res = query.to_vec();
    res[2] |= 0x80;
    res[3] |= 0x80;
    res[6..8].copy_from_slice(&ancount.to_be_bytes());
    res.extend_from_slice(answer);
    res
}

/// Starts a server answering each query it receives via `respond`.
///
/// The closure gets the number of the query, starting at zero, and the
/// query and returns the datagrams to send back.
async fn start_server<F>(respond: F) -> (SocketAddr, JoinHandle<()>)
where
    F: Fn(usize, &[u8]) -> Vec<Vec<u8>> + Send + 'static,
{
    let sock = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = sock.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let mut buf = vec![0u8; 65536];
        let mut n = 0;
        loop {
            let (len, peer) = sock.recv_from(&mut buf).await.unwrap();
            for datagram in respond(n, &buf[..len]) {
                sock.send_to(&datagram, peer).await.unwrap();
            }
            n += 1;
        }
    });
    (addr, handle)
}

fn config(addr: SocketAddr) -> UdpConfig {
    UdpConfig {
        read_timeout: Duration::from_millis(500),
        max_retries: 0,
        port: addr.port(),
        ..Default::default()
    }
}

fn redhat_query() -> Message {
    Message::query(Name::from_str("redhat.com").unwrap(), Rtype::A)
}

#[tokio::test]
async fn answer() {
    let (addr, server) = start_server(|_, query| {
        vec![make_response(query, 1, ANSWER)]
    })
    .await;

    let query = redhat_query();
    let answer = net::query(addr.ip(), &query, &config(addr)).await.unwrap();
    assert!(answer.is_answer(&query));
    assert_eq!(answer.question(), query.question());
    assert_eq!(answer.ancount(), 1);
    assert_eq!(answer.answer()[0].ttl(), 300);
    assert_eq!(
        answer.answer()[0].data(),
        &RecordData::A(A::from_octets(209, 132, 183, 81))
    );
    server.abort();
}

#[tokio::test]
async fn skip_unrelated_datagrams() {
    let (addr, server) = start_server(|_, query| {
        let mut wrong_id = make_response(query, 1, ANSWER);
        wrong_id[0] ^= 0xff;
        let mut not_response = make_response(query, 1, ANSWER);
        not_response[2] &= 0x7f;
        vec![
            wrong_id,
            b"\x01\x02\x03".to_vec(),
            not_response,
            make_response(query, 1, ANSWER),
        ]
    })
    .await;

    let query = redhat_query();
    let answer = net::query(addr.ip(), &query, &config(addr)).await.unwrap();
    assert_eq!(answer.id(), query.id());
    assert_eq!(answer.ancount(), 1);
    server.abort();
}

#[tokio::test]
async fn broken_answer() {
    // Two answers announced but only one present.
    let (addr, server) = start_server(|_, query| {
        vec![make_response(query, 2, ANSWER)]
    })
    .await;

    let res = net::query(addr.ip(), &redhat_query(), &config(addr)).await;
    assert_eq!(res, Err(net::Error::Parse(ParseError::BufferTooShort)));
    server.abort();
}

#[tokio::test]
async fn retry_after_timeout() {
    // The first query is dropped, the second answered.
    let (addr, server) = start_server(|n, query| {
        if n == 0 {
            Vec::new()
        } else {
            vec![make_response(query, 1, ANSWER)]
        }
    })
    .await;

    let config = UdpConfig {
        read_timeout: Duration::from_millis(200),
        max_retries: 1,
        ..config(addr)
    };
    let answer = net::query(addr.ip(), &redhat_query(), &config)
        .await
        .unwrap();
    assert_eq!(answer.ancount(), 1);
    server.abort();
}

#[tokio::test]
async fn give_up_after_retries() {
    let (addr, server) = start_server(|_, _| Vec::new()).await;
    let config = UdpConfig {
        read_timeout: Duration::from_millis(50),
        max_retries: 2,
        ..config(addr)
    };
    let res = net::query(addr.ip(), &redhat_query(), &config).await;
    assert_eq!(res, Err(net::Error::Timeout));
    server.abort();
}
