//! Logger module
//!
//! Per-request log lines go through an injected `LogSink` so tests can
//! capture them without reading stdout. Server lifecycle messages print
//! directly to the console.

use std::net::SocketAddr;

use chrono::Local;

/// Destination for per-request log lines
pub trait LogSink: Send + Sync {
    /// Write one complete log line
    fn write_line(&self, line: &str);
}

/// Sink that prints timestamped lines to stdout (the default)
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("[{}] {line}", Local::now().format("%d/%b/%Y:%H:%M:%S %z"));
    }
}

/// Sink that keeps lines in memory for test assertions
#[cfg(test)]
#[derive(Default)]
pub struct MemorySink {
    lines: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MemorySink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// Log the path of an incoming GET
pub fn log_get_request(sink: &dyn LogSink, path: &str) {
    sink.write_line(&format!("Received GET request: {path}"));
}

/// Log the raw body of an incoming POST or PUT.
///
/// PUT reuses the POST wording; existing harness assertions depend on the
/// exact text.
pub fn log_body_received(sink: &dyn LogSink, body: &[u8]) {
    sink.write_line(&format!(
        "Received POST with body: {}",
        String::from_utf8_lossy(body)
    ));
}

pub fn log_server_start(addr: &SocketAddr) {
    println!("======================================");
    println!("Test backend started");
    println!("Listening on: http://{addr}");
    println!("Serving one connection at a time");
    println!("======================================\n");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line_contains_literal_path() {
        let sink = MemorySink::default();
        log_get_request(&sink, "/health?probe=1");
        assert_eq!(
            sink.lines(),
            vec!["Received GET request: /health?probe=1".to_string()]
        );
    }

    #[test]
    fn test_body_line_uses_post_wording() {
        let sink = MemorySink::default();
        log_body_received(&sink, b"hello");
        assert_eq!(
            sink.lines(),
            vec!["Received POST with body: hello".to_string()]
        );
    }

    #[test]
    fn test_non_utf8_body_still_produces_a_line() {
        let sink = MemorySink::default();
        log_body_received(&sink, &[0xff, b'h', b'i']);
        assert!(sink.lines()[0].ends_with("hi"));
    }
}
