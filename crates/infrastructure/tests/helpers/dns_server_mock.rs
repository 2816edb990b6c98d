#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// What the mock server answers to every query.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// NOERROR with one TXT record per entry, each holding the given strings
    Txt(Vec<Vec<String>>),
    /// NOERROR with a single A record and no TXT data
    A([u8; 4]),
    /// Empty answer section with the given RCODE
    Rcode(u8),
    /// Valid TXT answer under a different transaction ID
    WrongId(String),
}

impl MockReply {
    pub fn txt(value: &str) -> Self {
        Self::Txt(vec![vec![value.to_string()]])
    }
}

/// Minimal UDP DNS server answering every query with a fixed reply.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds an ephemeral port on localhost.
    pub async fn start(reply: MockReply) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let reply = Arc::new(reply);

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
                            let response = Self::build_response(&buf[..len], &reply);
                            let _ = socket.send_to(&response, peer).await;
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

    fn build_response(query: &[u8], reply: &MockReply) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let (rcode, answers): (u8, Vec<Vec<u8>>) = match reply {
            MockReply::Txt(records) => (
                0,
                records.iter().map(|strings| Self::txt_answer(strings)).collect(),
            ),
            MockReply::WrongId(value) => (0, vec![Self::txt_answer(&[value.clone()])]),
            MockReply::A(ip) => (0, vec![Self::a_answer(*ip)]),
            MockReply::Rcode(rcode) => (*rcode, vec![]),
        };

        let mut response = Vec::with_capacity(512);

        if let MockReply::WrongId(_) = reply {
            let id = u16::from_be_bytes([query[0], query[1]]).wrapping_add(1);
            response.extend_from_slice(&id.to_be_bytes());
        } else {
            response.extend_from_slice(&query[0..2]);
        }

        // QR=1, RD=1 / RA=1 plus RCODE
        response.push(0x81);
        response.push(0x80 | (rcode & 0x0f));

        // QDCOUNT copied from the query
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        // Question section
        response.extend_from_slice(&query[12..]);

        for answer in answers {
            response.extend_from_slice(&answer);
        }

        response
    }

    fn txt_answer(strings: &[String]) -> Vec<u8> {
        let mut rdata = Vec::new();
        for s in strings {
            rdata.push(s.len() as u8);
            rdata.extend_from_slice(s.as_bytes());
        }

        let mut answer = vec![
            0xc0, 0x0c, // Name pointer to question
            0x00, 0x10, // Type TXT
            0x00, 0x01, // Class IN
            0x00, 0x00, 0x00, 0x3c, // TTL: 60 seconds
        ];
        answer.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        answer.extend_from_slice(&rdata);
        answer
    }

    fn a_answer(ip: [u8; 4]) -> Vec<u8> {
        let mut answer = vec![
            0xc0, 0x0c, // Name pointer to question
            0x00, 0x01, // Type A
            0x00, 0x01, // Class IN
            0x00, 0x00, 0x00, 0x3c, // TTL: 60 seconds
            0x00, 0x04, // Data length: 4 bytes
        ];
        answer.extend_from_slice(&ip);
        answer
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
