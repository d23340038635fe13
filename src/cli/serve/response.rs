//! HTTP replies and how they are written to the socket.

use crate::utils::mime::types::{HTML, JSON, PLAIN, XML};
use anyhow::Result;
use serde::Serialize;
use tiny_http::{Header, Request, Response, StatusCode};

/// A fully built response, independent of the connection it goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub location: Option<String>,
    pub allow: Option<&'static str>,
}

impl Reply {
    pub fn new(status: u16, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
            location: None,
            allow: None,
        }
    }

    pub fn html(body: String) -> Self {
        Self::new(200, HTML, body)
    }

    pub fn xml(body: String) -> Self {
        Self::new(200, XML, body)
    }

    pub fn text(body: String) -> Self {
        Self::new(200, PLAIN, body)
    }

    /// Serialize `value`; serialization failures become a 500.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self::new(200, JSON, body),
            Err(e) => Self::json_error(500, &format!("failed to serialize response: {e}")),
        }
    }

    pub fn json_error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        Self::new(status, JSON, body)
    }

    /// `307 Temporary Redirect`: method and body are kept by clients.
    pub fn redirect(target: String) -> Self {
        let mut reply = Self::new(307, PLAIN, format!("Redirecting to {target}"));
        reply.location = Some(target);
        reply
    }

    pub fn unavailable() -> Self {
        Self::new(503, PLAIN, "503 Service Unavailable")
    }

    pub fn method_not_allowed() -> Self {
        let mut reply = Self::new(405, PLAIN, "405 Method Not Allowed");
        reply.allow = Some("GET, HEAD");
        reply
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

/// Write `reply` to the client.
///
/// tiny_http drops the body for `HEAD` while keeping `Content-Length`.
pub fn send(request: Request, reply: Reply) -> Result<()> {
    let Reply {
        status,
        content_type,
        body,
        location,
        allow,
    } = reply;

    let mut headers = vec![make_header("Content-Type", content_type)?];
    if let Some(location) = location {
        headers.push(make_header("Location", &location)?);
    }
    if let Some(allow) = allow {
        headers.push(make_header("Allow", allow)?);
    }

    let length = body.len();
    let response = Response::new(StatusCode(status), headers, body.as_slice(), Some(length), None);

    request.respond(response)?;
    Ok(())
}

fn make_header(key: &str, value: &str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|()| anyhow::anyhow!("invalid header value for {key}: {value}"))
}
