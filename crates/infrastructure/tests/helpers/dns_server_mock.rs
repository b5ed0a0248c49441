#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// One answer record. Owner name is always a pointer to the question name.
#[derive(Debug, Clone)]
pub struct MockRecord {
    rtype: u16,
    ttl: u32,
    rdata: Vec<u8>,
}

/// Pointer to the question name at offset 12.
const QNAME_PTR: [u8; 2] = [0xc0, 0x0c];

impl MockRecord {
    pub fn a(octets: [u8; 4]) -> Self {
        Self {
            rtype: 1,
            ttl: 60,
            rdata: octets.to_vec(),
        }
    }

    /// CNAME whose target is the question name itself.
    pub fn cname_to_qname() -> Self {
        Self {
            rtype: 5,
            ttl: 60,
            rdata: QNAME_PTR.to_vec(),
        }
    }

    /// MX whose exchange is the question name.
    pub fn mx(preference: u16) -> Self {
        let mut rdata = preference.to_be_bytes().to_vec();
        rdata.extend_from_slice(&QNAME_PTR);
        Self {
            rtype: 15,
            ttl: 300,
            rdata,
        }
    }

    /// SOA with both mname and rname set to the question name.
    pub fn soa(serial: u32, minimum: u32) -> Self {
        let mut rdata = Vec::new();
        rdata.extend_from_slice(&QNAME_PTR);
        rdata.extend_from_slice(&QNAME_PTR);
        for value in [serial, 7200, 3600, 1_209_600, minimum] {
            rdata.extend_from_slice(&value.to_be_bytes());
        }
        Self {
            rtype: 6,
            ttl: 3600,
            rdata,
        }
    }

    pub fn txt(text: &str) -> Self {
        let mut rdata = vec![text.len() as u8];
        rdata.extend_from_slice(text.as_bytes());
        Self {
            rtype: 16,
            ttl: 300,
            rdata,
        }
    }
}

#[derive(Debug, Clone)]
pub enum MockReply {
    Answers(Vec<MockRecord>),
    Rcode(u8),
    /// UDP answer has TC set and no records; TCP on the same port answers in full.
    Truncated(Vec<MockRecord>),
    /// Response ID differs from the query ID.
    WrongId,
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(reply: MockReply) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;

        let tcp_listener = match &reply {
            MockReply::Truncated(_) => Some(TcpListener::bind(addr).await?),
            _ => None,
        };

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_udp_response(&reply, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = accept(&tcp_listener) => {
                        if let Ok((mut stream, _)) = accepted {
                            let reply = reply.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if let MockReply::Truncated(records) = reply {
                                    let response = Self::build_response(&query, 0, false, &records);
                                    let _ = stream.write_all(&(response.len() as u16).to_be_bytes()).await;
                                    let _ = stream.write_all(&response).await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    fn build_udp_response(reply: &MockReply, query: &[u8]) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        match reply {
            MockReply::Answers(records) => Some(Self::build_response(query, 0, false, records)),
            MockReply::Rcode(rcode) => Some(Self::build_response(query, *rcode, false, &[])),
            MockReply::Truncated(_) => Some(Self::build_response(query, 0, true, &[])),
            MockReply::WrongId => {
                let mut response = Self::build_response(query, 0, false, &[]);
                response[0] ^= 0xff;
                Some(response)
            }
            MockReply::Silent => None,
        }
    }

    pub fn build_response(query: &[u8], rcode: u8, truncated: bool, records: &[MockRecord]) -> Vec<u8> {
        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&query[0..2]);

        // QR, RD echoed, TC on request
        response.push(if truncated { 0x83 } else { 0x81 });
        // RA + RCODE
        response.push(0x80 | (rcode & 0x0f));

        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&(records.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        for record in records {
            response.extend_from_slice(&QNAME_PTR);
            response.extend_from_slice(&record.rtype.to_be_bytes());
            response.extend_from_slice(&[0x00, 0x01]);
            response.extend_from_slice(&record.ttl.to_be_bytes());
            response.extend_from_slice(&(record.rdata.len() as u16).to_be_bytes());
            response.extend_from_slice(&record.rdata);
        }

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn accept(
    listener: &Option<TcpListener>,
) -> std::io::Result<(tokio::net::TcpStream, SocketAddr)> {
    match listener {
        Some(listener) => listener.accept().await,
        None => std::future::pending().await,
    }
}
