//! HTTP response building module
//!
//! Provides builders for the backend's fixed acknowledgment responses,
//! decoupled from the verb dispatch. Bodies must match the reference
//! implementation byte for byte; harness assertions compare them literally.

use std::io;

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// A fixed response: status, reason phrase, and static body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub reason: &'static str,
    pub body: &'static str,
}

impl Response {
    /// Serialize the response and flush it to `writer`.
    ///
    /// `Connection: close` is always sent: the server speaks one request per
    /// connection, and the peer must not wait for another exchange.
    pub async fn write_to<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            self.reason,
            self.body.len()
        );
        writer.write_all(head.as_bytes()).await?;
        writer.write_all(self.body.as_bytes()).await?;
        writer.flush().await
    }
}

/// Build the fixed 200 acknowledgment for GET
pub fn build_get_response() -> Response {
    Response {
        status: 200,
        reason: "OK",
        body: "GET response from backend\n",
    }
}

/// Build the fixed 200 acknowledgment shared by POST and PUT
pub fn build_post_response() -> Response {
    Response {
        status: 200,
        reason: "OK",
        body: "POST response from backend\n",
    }
}

/// Build the default response for verbs without a handler
pub fn build_unsupported_response() -> Response {
    Response {
        status: 501,
        reason: "Not Implemented",
        body: "501 Not Implemented",
    }
}
