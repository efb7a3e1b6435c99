//! Request handler module
//!
//! One fixed acknowledgment per verb. The handler is stateless: the response
//! depends only on the request's method, and nothing carries over between
//! requests.

use crate::http::{response, Method, Request, Response};
use crate::logger::{self, LogSink};

/// Terminate one request: log its salient field, return the fixed response.
///
/// GET logs the request path; POST and PUT log the raw body bytes. PUT shares
/// the POST log wording and response body. Any other verb falls through to
/// the default 501 response without touching the sink.
pub fn handle_request(req: &Request, sink: &dyn LogSink) -> Response {
    match &req.method {
        Method::Get => {
            logger::log_get_request(sink, &req.path);
            response::build_get_response()
        }
        Method::Post | Method::Put => {
            logger::log_body_received(sink, &req.body);
            response::build_post_response()
        }
        Method::Other(name) => {
            logger::log_warning(&format!("Unsupported method: {name}"));
            response::build_unsupported_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::MemorySink;
    use std::collections::HashMap;

    fn request(method: Method, path: &str, body: &[u8]) -> Request {
        Request {
            method,
            path: path.to_string(),
            headers: HashMap::new(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_get_logs_path_and_acknowledges() {
        let sink = MemorySink::default();
        let resp = handle_request(&request(Method::Get, "/health", b""), &sink);
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, "GET response from backend\n");
        assert_eq!(
            sink.lines(),
            vec!["Received GET request: /health".to_string()]
        );
    }

    #[test]
    fn test_post_logs_raw_body() {
        let sink = MemorySink::default();
        let resp = handle_request(&request(Method::Post, "/ingest", b"hello"), &sink);
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, "POST response from backend\n");
        assert_eq!(
            sink.lines(),
            vec!["Received POST with body: hello".to_string()]
        );
    }

    #[test]
    fn test_put_matches_post_contract_exactly() {
        let sink = MemorySink::default();
        let resp = handle_request(&request(Method::Put, "/update", b"data"), &sink);
        assert_eq!(resp.body, "POST response from backend\n");
        assert_eq!(
            sink.lines(),
            vec!["Received POST with body: data".to_string()]
        );
    }

    #[test]
    fn test_unregistered_verb_gets_default_response() {
        let sink = MemorySink::default();
        let resp = handle_request(
            &request(Method::Other("DELETE".to_string()), "/", b""),
            &sink,
        );
        assert_eq!(resp.status, 501);
        assert!(sink.lines().is_empty());
    }
}
