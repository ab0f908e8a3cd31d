//! In-process fake audit backend built on `tiny_http`.
//!
//! Serves a fixed list of canned responses, one per incoming request, and
//! records every request it saw.

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// A response the fake backend will send.
pub struct Canned {
    pub status: u16,
    pub body: Vec<u8>,
    pub content_type: &'static str,
}

impl Canned {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            content_type: "application/json",
        }
    }

    pub fn pdf(bytes: &[u8]) -> Self {
        Self {
            status: 200,
            body: bytes.to_vec(),
            content_type: "application/pdf",
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
            content_type: "text/plain",
        }
    }
}

/// A request as received by the fake backend.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: String,
    pub url: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Captured {
    /// Split a multipart/form-data body into `(name, file_name, value)` parts.
    pub fn multipart_parts(&self) -> Vec<(String, Option<String>, Vec<u8>)> {
        let content_type = self.content_type.as_deref().expect("content type");
        let boundary = content_type
            .split("boundary=")
            .nth(1)
            .expect("multipart boundary")
            .trim_matches('"');
        let delimiter = format!("--{boundary}");

        split_bytes(&self.body, delimiter.as_bytes())
            .into_iter()
            .filter_map(|chunk| {
                let chunk = chunk.strip_prefix(b"\r\n")?;
                let header_end = find(chunk, b"\r\n\r\n")?;
                let headers = String::from_utf8_lossy(&chunk[..header_end]).into_owned();
                let mut value = chunk[header_end + 4..].to_vec();
                if value.ends_with(b"\r\n") {
                    value.truncate(value.len() - 2);
                }
                let name = attr(&headers, "name")?;
                let file_name = attr(&headers, "filename");
                Some((name, file_name, value))
            })
            .collect()
    }

    /// Text value of a named part, if present.
    pub fn field(&self, name: &str) -> Option<String> {
        self.multipart_parts()
            .into_iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, _, v)| String::from_utf8(v).expect("utf-8 field"))
    }
}

fn attr(headers: &str, key: &str) -> Option<String> {
    let needle = format!("; {key}=\"");
    let start = headers.find(&needle)? + needle.len();
    let end = headers[start..].find('"')? + start;
    Some(headers[start..end].to_string())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn split_bytes<'a>(haystack: &'a [u8], delimiter: &[u8]) -> Vec<&'a [u8]> {
    let mut out = Vec::new();
    let mut rest = haystack;
    while let Some(pos) = find(rest, delimiter) {
        out.push(&rest[..pos]);
        rest = &rest[pos + delimiter.len()..];
    }
    out.push(rest);
    out
}

pub struct FakeBackend {
    pub url: String,
    captured: Arc<Mutex<Vec<Captured>>>,
    handle: Option<JoinHandle<()>>,
}

impl FakeBackend {
    pub fn start(responses: Vec<Canned>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind fake backend");
        let port = server
            .server_addr()
            .to_ip()
            .map(|a| a.port())
            .expect("ip listener");
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);

        let handle = std::thread::spawn(move || {
            for canned in responses {
                let Ok(mut request) = server.recv() else {
                    return;
                };
                let mut body = Vec::new();
                let _ = request.as_reader().read_to_end(&mut body);
                let content_type = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Content-Type"))
                    .map(|h| h.value.as_str().to_string());
                sink.lock().unwrap().push(Captured {
                    method: request.method().as_str().to_string(),
                    url: request.url().to_string(),
                    content_type,
                    body,
                });

                let response = tiny_http::Response::from_data(canned.body)
                    .with_status_code(canned.status)
                    .with_header(
                        tiny_http::Header::from_bytes("Content-Type", canned.content_type)
                            .unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            url: format!("http://127.0.0.1:{port}"),
            captured,
            handle: Some(handle),
        }
    }

    /// Wait for the server thread to serve all canned responses, then return
    /// what it received.
    pub fn finish(mut self) -> Vec<Captured> {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("fake backend thread");
        }
        self.captured.lock().unwrap().clone()
    }
}

pub const CONCORDANT_BODY: &str = r#"{
    "success": true,
    "audit_id": "a1",
    "classification": "CONCORDANT",
    "summary": "ok",
    "concordant_findings": ["f1"],
    "discrepancies": [],
    "has_critical_alert": false,
    "critical_alert_text": null,
    "technical_note": null,
    "report_url": "https://storage.example.com/relatorios/r1.pdf",
    "extracted_texts": {"official": "texto oficial", "auditor": "texto auditor"}
}"#;
