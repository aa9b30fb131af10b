//! YAML document loading from local files or remote URLs.
//!
//! The loader does no schema enforcement: it hands back a generic
//! [`serde_yaml::Value`] and leaves the shape to the view builders.

use serde_yaml::Value;
use std::fs;
use std::io::Read;
use std::path::Path;
use ureq::Agent;

use crate::error::{Error, Result};

/// Where a YAML document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlSource {
    /// Local path, or URL when `remote` is set
    pub location: String,
    pub remote: bool,
}

impl YamlSource {
    pub fn local(path: impl AsRef<Path>) -> Self {
        Self {
            location: path.as_ref().display().to_string(),
            remote: false,
        }
    }

    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            location: url.into(),
            remote: true,
        }
    }

    /// Read and parse the document.
    pub fn load(&self) -> Result<Value> {
        load(&self.location, self.remote)
    }
}

/// Fetch either a remote (HTTP GET) or a local YAML document and parse it.
pub fn load(path_or_url: &str, remote: bool) -> Result<Value> {
    let payload = if remote {
        fetch(path_or_url)?
    } else {
        fs::read_to_string(path_or_url).map_err(|e| Error::io(path_or_url, e))?
    };

    parse(&payload, path_or_url)
}

/// Parse YAML text. `origin` only labels errors.
pub fn parse(payload: &str, origin: &str) -> Result<Value> {
    serde_yaml::from_str(payload).map_err(|e| Error::Parse {
        origin: origin.to_string(),
        source: e,
    })
}

fn fetch(url: &str) -> Result<String> {
    if !is_http_url(url) {
        return Err(Error::Fetch {
            url: url.to_string(),
            message: "only http:// and https:// URLs are supported".to_string(),
        });
    }

    let agent = Agent::new();
    let response = agent.get(url).call().map_err(|e| Error::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let mut body = String::new();
    response
        .into_reader()
        .read_to_string(&mut body)
        .map_err(|e| Error::Fetch {
            url: url.to_string(),
            message: format!("failed to read response body: {}", e),
        })?;

    Ok(body)
}

pub(crate) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread;
    use tempfile::TempDir;

    /// Serve a single HTTP response on a local port and return its URL.
    fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            // Drain the request headers before answering
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: text/yaml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
            .unwrap();
        });

        format!("http://{}/companies.yml", addr)
    }

    #[test]
    fn test_load_local_yaml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.yml");
        fs::write(&path, "group:\n  - name: Acme\n    link: https://acme.test\n").unwrap();

        let value = YamlSource::local(&path).load().unwrap();
        let first = &value["group"][0];
        assert_eq!(first["name"].as_str(), Some("Acme"));
        assert_eq!(first["link"].as_str(), Some("https://acme.test"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.yml");

        let err = load(path.to_str().unwrap(), false).unwrap_err();
        match err {
            Error::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = parse("key: [unclosed", "inline").unwrap_err();
        assert!(matches!(err, Error::Parse { ref origin, .. } if origin == "inline"));
    }

    #[test]
    fn test_remote_rejects_non_http_url() {
        let err = YamlSource::remote("ftp://example.com/companies.yml")
            .load()
            .unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
    }

    #[test]
    fn test_remote_fetch_parses_body() {
        let url = serve_once("200 OK", "group:\n  - name: Remote\n    link: https://remote.test\n");

        let value = YamlSource::remote(url).load().unwrap();
        assert_eq!(value["group"][0]["name"].as_str(), Some("Remote"));
    }

    #[test]
    fn test_remote_error_status_is_fetch_error() {
        let url = serve_once("404 Not Found", "missing");

        let err = load(&url, true).unwrap_err();
        match err {
            Error::Fetch { url: failed, .. } => assert_eq!(failed, url),
            other => panic!("expected Fetch error, got {:?}", other),
        }
    }

    #[test]
    fn test_remote_invalid_yaml_is_parse_error() {
        let url = serve_once("200 OK", "group: [unclosed");

        let err = load(&url, true).unwrap_err();
        assert!(matches!(err, Error::Parse { ref origin, .. } if *origin == url));
    }
}
