//! Local HTTP service for `rxc serve`.
//!
//! A single-threaded `tiny_http` loop feeds requests to [`App`]. Run it on a
//! blocking thread; it returns only when the listener fails to bind.

mod routes;

use std::io::Read;
use std::net::SocketAddr;

pub use routes::{App, Method, Reply};

/// Largest request body accepted, in bytes.
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Bind `addr` and serve requests until the process exits.
pub fn run(addr: SocketAddr, mut app: App) -> anyhow::Result<()> {
    let server = tiny_http::Server::http(addr)
        .map_err(|error| anyhow::anyhow!("failed to bind {addr}: {error}"))?;

    tracing::info!(%addr, "rxcheck HTTP service listening");
    eprintln!("rxc serving on http://{addr}");

    for mut request in server.incoming_requests() {
        let method = match request.method() {
            tiny_http::Method::Get => Method::Get,
            tiny_http::Method::Post => Method::Post,
            _ => Method::Other,
        };
        let url = request.url().to_string();
        let authorization = request
            .headers()
            .iter()
            .find(|header| header.field.equiv("Authorization"))
            .map(|header| header.value.as_str().to_string());

        let declared_too_large = request
            .body_length()
            .is_some_and(|length| length > MAX_BODY_BYTES);
        let reply = if declared_too_large {
            Reply::error(413, "request body too large")
        } else {
            match read_body(request.as_reader(), MAX_BODY_BYTES) {
                Ok(Some(body)) => app.handle(method, &url, authorization.as_deref(), &body),
                Ok(None) => Reply::error(413, "request body too large"),
                Err(error) => {
                    tracing::debug!(%error, %url, "unreadable request body");
                    Reply::error(400, "request body is not UTF-8")
                }
            }
        };
        tracing::debug!(
            ?method,
            %url,
            status = reply.status,
            sessions = app.session_count(),
            "request handled"
        );

        if let Err(error) = request.respond(into_response(reply)) {
            tracing::warn!(%error, "failed to send response");
        }
    }

    Ok(())
}

/// Read at most `limit` bytes. `Ok(None)` means the body was longer.
fn read_body(reader: impl Read, limit: usize) -> std::io::Result<Option<String>> {
    let mut body = String::new();
    reader
        .take(limit as u64 + 1)
        .read_to_string(&mut body)?;
    Ok((body.len() <= limit).then_some(body))
}

fn into_response(reply: Reply) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let mut response = tiny_http::Response::from_string(reply.body).with_status_code(reply.status);
    if let Ok(header) = tiny_http::Header::from_bytes("Content-Type", reply.content_type) {
        response = response.with_header(header);
    }
    if let Some(name) = reply.attachment {
        let disposition = format!("attachment; filename=\"{name}\"");
        if let Ok(header) = tiny_http::Header::from_bytes("Content-Disposition", disposition) {
            response = response.with_header(header);
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::read_body;

    #[test]
    fn body_within_limit_is_returned() {
        let body = read_body(Cursor::new(r#"{"drugs":["warfarin"]}"#), 64).expect("readable");
        assert_eq!(body.as_deref(), Some(r#"{"drugs":["warfarin"]}"#));
    }

    #[test]
    fn body_at_limit_is_accepted() {
        let body = read_body(Cursor::new("x".repeat(16)), 16).expect("readable");
        assert_eq!(body.map(|b| b.len()), Some(16));
    }

    #[test]
    fn oversized_body_is_refused() {
        let body = read_body(Cursor::new("x".repeat(17)), 16).expect("readable");
        assert_eq!(body, None);
    }

    #[test]
    fn non_utf8_body_is_an_error() {
        assert!(read_body(Cursor::new(vec![0xff, 0xfe]), 16).is_err());
    }
}
