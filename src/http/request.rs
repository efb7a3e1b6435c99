//! HTTP request parsing module
//!
//! Reads one request from a buffered connection stream: the request line,
//! the headers, and for POST and PUT exactly the declared number of body
//! bytes.

use std::collections::HashMap;
use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

/// HTTP method of an incoming request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    /// Any verb without a registered handler
    Other(String),
}

impl Method {
    fn from_token(token: &str) -> Self {
        match token {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One parsed request; nothing here outlives the connection
#[derive(Debug)]
pub struct Request {
    pub method: Method,
    pub path: String,
    /// Header names are lowercased at parse time for case-insensitive lookup
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Request {
    /// Read and parse a single request from `reader`.
    ///
    /// Blocks until the full head and, for POST/PUT, the full declared body
    /// have arrived. No timeout is applied: a peer that under-sends its
    /// declared body hangs its own connection. A peer that closes mid-read
    /// surfaces the error and fails this request only.
    pub async fn read_from<R>(reader: &mut R) -> io::Result<Self>
    where
        R: AsyncBufRead + Unpin,
    {
        let line = read_line(reader).await?;
        let mut parts = line.split_whitespace();
        let method = parts
            .next()
            .map(Method::from_token)
            .ok_or_else(|| invalid("missing method in request line"))?;
        let path = parts
            .next()
            .ok_or_else(|| invalid("missing path in request line"))?
            .to_string();

        let headers = read_headers(reader).await?;

        let mut request = Self {
            method,
            path,
            headers,
            body: Vec::new(),
        };

        // Only POST/PUT carry a body; Content-Length decides how much to read
        if matches!(request.method, Method::Post | Method::Put) {
            request.body = vec![0u8; request.content_length()];
            reader.read_exact(&mut request.body).await?;
        }

        Ok(request)
    }

    /// Declared body length; a missing or unparseable value counts as zero
    pub fn content_length(&self) -> usize {
        self.headers
            .get("content-length")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0)
    }
}

async fn read_line<R>(reader: &mut R) -> io::Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let read = reader.read_until(b'\n', &mut buf).await?;
    if read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "connection closed while reading request head",
        ));
    }
    while matches!(buf.last(), Some(b'\r' | b'\n')) {
        buf.pop();
    }
    String::from_utf8(buf).map_err(|_| invalid("request head is not valid UTF-8"))
}

async fn read_headers<R>(reader: &mut R) -> io::Result<HashMap<String, String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut headers = HashMap::new();
    loop {
        let line = read_line(reader).await?;
        if line.is_empty() {
            break;
        }
        // Lines without a colon are ignored rather than rejected
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }
    Ok(headers)
}

fn invalid(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}
