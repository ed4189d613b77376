//! Blocking page retrieval
//!
//! One GET per invocation over a deliberately certificate-tolerant agent.
//! The target sites are uncontrolled and the purpose is content retrieval,
//! so TLS verification is off and the body is decoded lossily.

use std::time::Duration;

use thiserror::Error;
use ureq::tls::TlsConfig;

/// Browser-like identity; some storefronts reject obvious non-browser clients.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Upper bound on the whole request, connect included.
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// A fetched page: decoded text plus the URL it came from.
///
/// Immutable once built, discarded after one extraction pass. Construct one
/// directly to run the extraction stages on canned markup.
#[derive(Debug, Clone)]
pub struct Document {
    pub url: String,
    pub html: String,
}

/// Terminal transport failures. No retry in either case; the caller reports
/// and moves on to the next URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connection, or timeout failure
    #[error("could not reach the URL or connection error: {detail}")]
    Unreachable { detail: String },
    /// Any other transport-level failure
    #[error("unexpected error during fetching: {detail}")]
    Unexpected { detail: String },
}

fn agent() -> ureq::Agent {
    ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .timeout_global(Some(FETCH_TIMEOUT))
            .user_agent(USER_AGENT)
            .tls_config(TlsConfig::builder().disable_verification(true).build())
            .build(),
    )
}

/// Fetch `url` and decode the body as text, replacing undecodable bytes.
///
/// Expects an absolute URL; scheme normalization is the pipeline's job
/// ([`crate::scrape::normalize_url`]), not this function's.
pub fn fetch(url: &str) -> Result<Document, FetchError> {
    let parsed = url::Url::parse(url).map_err(|e| FetchError::Unexpected {
        detail: format!("invalid URL: {e}"),
    })?;

    let response = agent().get(parsed.as_str()).call().map_err(classify)?;
    let bytes = response
        .into_body()
        .read_to_vec()
        .map_err(|e| FetchError::Unexpected { detail: e.to_string() })?;

    Ok(Document {
        url: url.to_string(),
        html: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

fn classify(err: ureq::Error) -> FetchError {
    let detail = err.to_string();
    match err {
        ureq::Error::Timeout(_)
        | ureq::Error::Io(_)
        | ureq::Error::ConnectionFailed
        | ureq::Error::HostNotFound => FetchError::Unreachable { detail },
        _ => FetchError::Unexpected { detail },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a loopback port, return its URL.
    fn serve_once(body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let header = format!(
                    "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                let _ = stream.write_all(header.as_bytes());
                let _ = stream.write_all(body);
            }
        });
        format!("http://{addr}/")
    }

    #[test]
    fn test_fetch_returns_document_with_source_url() {
        let url = serve_once(b"<html><title>ok</title></html>");
        let doc = fetch(&url).unwrap();
        assert_eq!(doc.url, url);
        assert!(doc.html.contains("<title>ok</title>"));
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let url = serve_once(b"<title>caf\xff</title>");
        let doc = fetch(&url).unwrap();
        assert!(doc.html.contains('\u{FFFD}'));
        assert!(doc.html.contains("<title>caf"));
    }

    #[test]
    fn test_refused_connection_is_unreachable() {
        // Port 1 on loopback is never listening
        match fetch("http://127.0.0.1:1/") {
            Err(FetchError::Unreachable { .. }) => {}
            other => panic!("expected Unreachable, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_url_is_unexpected() {
        match fetch("not a url at all") {
            Err(FetchError::Unexpected { .. }) => {}
            other => panic!("expected Unexpected, got {other:?}"),
        }
    }
}
