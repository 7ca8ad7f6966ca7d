//! A command line client sending DNS queries read from stdin or a file.
//!
//! Each input line holds one request, a record type and a domain name such
//! as `MX redhat.com`. For every request, the query and the records of the
//! answer section are printed:
//!
//! ```text
//! Q: UDP 127.0.0.53 MX redhat.com
//! A: 127.0.0.53 MX 5 10 mx1.redhat.com
//! ```
use anyhow::{anyhow, Context};
use clap::Parser;
use dnsclient::base::Message;
use dnsclient::logging::init_logging;
use dnsclient::net::conf::ResolvConf;
use dnsclient::net::request::Request;
use dnsclient::net::{self, UdpConfig};
use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "dnsclient")]
#[command(version)]
#[command(about = "Simple DNS client for A, NS, and MX queries over UDP")]
struct Cli {
    /// Use TCP (not supported, UDP is used instead)
    #[arg(short = 't', conflicts_with = "udp")]
    tcp: bool,

    /// Use UDP
    #[arg(short = 'u')]
    udp: bool,

    /// IPv4 address of the name server [default: first from /etc/resolv.conf]
    server: Option<Ipv4Addr>,

    /// Read requests from this file instead of stdin
    #[arg(short = 'f', long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Seconds to wait for an answer
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Number of retries after a timeout
    #[arg(long)]
    retries: Option<u8>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if cli.tcp {
        warn!("TCP transport is not implemented, using UDP");
    } else if !cli.udp {
        println!("INFO: no transport chosen. Using UDP as default");
    }

    let server = match cli.server {
        Some(server) => server,
        None => ResolvConf::system()
            .context("cannot read /etc/resolv.conf")?
            .servers
            .first()
            .copied()
            .ok_or_else(|| anyhow!("no IPv4 name server configured"))?,
    };

    let mut config = UdpConfig::default();
    if let Some(secs) = cli.timeout {
        config.read_timeout = Duration::from_secs(secs);
    }
    if let Some(retries) = cli.retries {
        config.max_retries = retries;
    }

    match cli.file {
        Some(path) => {
            let file = tokio::fs::File::open(&path).await.with_context(|| {
                format!("cannot open requests file '{}'", path.display())
            })?;
            run(BufReader::new(file), server, &config).await
        }
        None => run(BufReader::new(tokio::io::stdin()), server, &config).await,
    }
}

/// Processes all requests from `reader`.
async fn run<R: AsyncBufRead + Unpin>(
    reader: R,
    server: Ipv4Addr,
    config: &UdpConfig,
) -> anyhow::Result<()> {
    let mut lines = reader.lines();
    let mut line_n = 0;
    while let Some(line) = lines.next_line().await? {
        line_n += 1;
        if line.trim().is_empty() {
            continue;
        }
        let request = match line.parse::<Request>() {
            Ok(request) => request,
            Err(err) => {
                debug!("line {line_n}: {err}");
                eprintln!("WARN: ignoring malformed line {line_n}: '{line}'");
                continue;
            }
        };

        println!("Q: UDP {server} {request}");
        match net::query(server.into(), &request.to_query(), config).await {
            Ok(answer) => print_answer(server, &answer),
            Err(net::Error::Parse(err)) => {
                eprintln!("ERR: broken answer: {err}");
            }
            Err(err) => {
                debug!("query for '{request}' failed: {err}");
                println!("INFO: could not get answer for query. Skipping");
            }
        }
    }
    Ok(())
}

fn print_answer(server: Ipv4Addr, answer: &Message) {
    if !answer.rcode().is_noerror() {
        eprintln!("ERR: answer has error condition '{}'", answer.rcode());
        return;
    }
    debug!(
        "answer with {} questions, {} answers, {} authority, {} additional",
        answer.qdcount(),
        answer.ancount(),
        answer.nscount(),
        answer.arcount()
    );
    for record in answer.answer() {
        println!("A: {server} {record}");
    }
}
