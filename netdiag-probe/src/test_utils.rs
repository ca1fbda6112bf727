//! 测试辅助模块
//!
//! Local stand-ins for the servers the probes talk to: a UDP DNS stub serving
//! a fixed zone, a UDP socket that never answers, and a raw HTTP/1.1
//! responder.

use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use hickory_resolver::proto::{
    op::{Message, MessageType, OpCode, ResponseCode},
    rr::{
        Name, RData, Record, RecordType,
        rdata::{A, AAAA, MX},
    },
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};

const STUB_TTL: u32 = 300;

/// Records served for one name in the stub zone.
#[derive(Debug, Clone, Default)]
pub struct StubRecords {
    pub ipv4: Vec<Ipv4Addr>,
    pub ipv6: Vec<Ipv6Addr>,
    pub mx: Vec<(u16, String)>,
}

/// In-memory zone keyed by lower-case name without the trailing dot.
/// Names not present are answered with NXDOMAIN.
pub type StubZone = HashMap<String, StubRecords>;

/// Spawn a UDP DNS server answering from `zone`. Returns its address.
pub async fn spawn_dns_stub(zone: StubZone) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    tokio::spawn(async move {
        let mut buf = [0u8; 4096];
        loop {
            let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                break;
            };
            let Ok(request) = Message::from_vec(&buf[..len]) else {
                continue;
            };
            let Ok(bytes) = answer(&zone, &request).to_vec() else {
                continue;
            };
            let _ = socket.send_to(&bytes, peer).await;
        }
    });

    addr
}

fn answer(zone: &StubZone, request: &Message) -> Message {
    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_authoritative(true)
        .set_recursion_desired(request.recursion_desired())
        .set_recursion_available(true);

    let Some(query) = request.queries().first() else {
        response.set_response_code(ResponseCode::FormErr);
        return response;
    };
    response.add_query(query.clone());

    let key = query
        .name()
        .to_ascii()
        .trim_end_matches('.')
        .to_ascii_lowercase();
    let Some(records) = zone.get(&key) else {
        response.set_response_code(ResponseCode::NXDomain);
        return response;
    };

    let name = query.name().clone();
    match query.query_type() {
        RecordType::A => {
            for ip in &records.ipv4 {
                response.add_answer(Record::from_rdata(name.clone(), STUB_TTL, RData::A(A::from(*ip))));
            }
        }
        RecordType::AAAA => {
            for ip in &records.ipv6 {
                response.add_answer(Record::from_rdata(
                    name.clone(),
                    STUB_TTL,
                    RData::AAAA(AAAA::from(*ip)),
                ));
            }
        }
        RecordType::MX => {
            for (preference, exchange) in &records.mx {
                let exchange = Name::from_ascii(exchange).unwrap();
                response.add_answer(Record::from_rdata(
                    name.clone(),
                    STUB_TTL,
                    RData::MX(MX::new(*preference, exchange)),
                ));
            }
        }
        _ => {}
    }

    response
}

/// Bind a UDP socket that reads queries and never replies.
///
/// The returned socket must be kept alive for the duration of the test.
pub async fn spawn_silent_resolver() -> (UdpSocket, SocketAddr) {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    (socket, addr)
}

/// Spawn an HTTP/1.1 server that answers every request with `head` and then
/// holds the connection open without sending a body.
pub async fn spawn_http_stub(head: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let mut request = Vec::new();
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                if stream.write_all(head.as_bytes()).await.is_err() {
                    return;
                }
                // Wait for the client to hang up.
                let _ = stream.read(&mut buf).await;
            });
        }
    });

    addr
}

/// An address on which nothing is listening (bound then released).
pub async fn closed_tcp_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
