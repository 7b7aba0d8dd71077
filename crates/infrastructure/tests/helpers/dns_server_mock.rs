#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock answers every query it receives.
#[derive(Clone)]
pub enum MockReply {
    /// NOERROR with the zone entries for the asked name, NXDOMAIN when absent.
    Zone,
    /// Fixed rcode and answer list regardless of the question.
    Fixed(ResponseCode, Vec<Record>),
    /// Zone answer with the transaction id flipped.
    WrongId,
    /// Bytes that are not a DNS message.
    Garbage,
    /// Never replies.
    Silent,
}

/// In-process UDP nameserver bound to an ephemeral loopback port.
pub struct MockDnsServer {
    addr: SocketAddr,
    zone: Arc<Mutex<HashMap<String, Vec<Record>>>>,
    questions: Arc<Mutex<Vec<(String, u16)>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(reply: MockReply) -> Self {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = socket.local_addr().unwrap();

        let zone: Arc<Mutex<HashMap<String, Vec<Record>>>> = Arc::new(Mutex::new(HashMap::new()));
        let questions = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let task_zone = zone.clone();
        let task_questions = questions.clone();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Ok(request) = Message::from_vec(&buf[..len]) else { continue };

                        for query in request.queries() {
                            task_questions.lock().unwrap().push((
                                query.name().to_string(),
                                u16::from(query.query_type()),
                            ));
                        }

                        let id = u16::from_be_bytes([buf[0], buf[1]]);
                        let response = match &reply {
                            MockReply::Silent => continue,
                            MockReply::Garbage => vec![0xde, 0xad, 0xbe, 0xef],
                            MockReply::Fixed(rcode, answers) => {
                                build_response(id, &request, *rcode, answers)
                            }
                            MockReply::Zone | MockReply::WrongId => {
                                let wire_id = match &reply {
                                    MockReply::WrongId => id.wrapping_add(1),
                                    _ => id,
                                };
                                let asked = request
                                    .queries()
                                    .first()
                                    .map(|q| q.name().to_string())
                                    .unwrap_or_default();
                                let answers = task_zone.lock().unwrap().get(&asked).cloned();
                                match answers {
                                    Some(answers) => {
                                        build_response(wire_id, &request, ResponseCode::NoError, &answers)
                                    }
                                    None => build_response(wire_id, &request, ResponseCode::NXDomain, &[]),
                                }
                            }
                        };

                        let _ = socket.send_to(&response, peer).await;
                    }
                }
            }
        });

        Self {
            addr,
            zone,
            questions,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn add_answers(&self, fqdn: &str, answers: Vec<Record>) {
        self.zone
            .lock()
            .unwrap()
            .insert(fqdn.to_string(), answers);
    }

    /// `(qname, qtype)` of every question received so far.
    pub fn questions(&self) -> Vec<(String, u16)> {
        self.questions.lock().unwrap().clone()
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

fn build_response(id: u16, request: &Message, rcode: ResponseCode, answers: &[Record]) -> Vec<u8> {
    let mut response = Message::new(id, MessageType::Response, OpCode::Query);
    response.set_recursion_desired(true);
    response.set_recursion_available(true);
    response.set_response_code(rcode);
    for query in request.queries() {
        response.add_query(query.clone());
    }
    for answer in answers {
        response.add_answer(answer.clone());
    }

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    response.emit(&mut encoder).unwrap();
    buf
}
