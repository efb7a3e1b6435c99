//! Server module
//!
//! The accept-dispatch loop. Connections are served strictly one at a time:
//! harness assertions compare log-line order against request order, so
//! request handling must never overlap.

pub mod listener;

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncWriteExt, BufReader, BufWriter};
use tokio::net::{TcpListener, TcpStream};

use crate::handler;
use crate::http::Request;
use crate::logger::{self, LogSink};

// Re-export commonly used types
pub use listener::create_reusable_listener;

/// Accept connections forever, serving each to completion before the next.
///
/// A failing connection is logged and dropped without a response; it never
/// affects later connections or the listener itself.
pub async fn run(listener: TcpListener, sink: Arc<dyn LogSink>) -> io::Result<()> {
    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                if let Err(e) = serve_connection(stream, sink.as_ref()).await {
                    logger::log_connection_error(&e);
                }
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Serve exactly one request on `stream`, then let the connection close
async fn serve_connection(stream: TcpStream, sink: &dyn LogSink) -> io::Result<()> {
    let (read_half, write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    let req = Request::read_from(&mut reader).await?;
    let resp = handler::handle_request(&req, sink);

    let mut writer = BufWriter::new(write_half);
    resp.write_to(&mut writer).await?;
    writer.shutdown().await
}
