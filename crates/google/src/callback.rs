use crate::error::CallbackError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::{Host, Url};

const CODE_PARAM: &str = "code";
const MAX_REQUEST_BYTES: usize = 8192;
const READ_TIMEOUT: Duration = Duration::from_secs(10);
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Returns the first non-empty `code` query value, percent-decoded.
pub fn code_from_location(location: &Url) -> Option<String> {
    location
        .query_pairs()
        .find(|(key, _)| key == CODE_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Same scheme, host and path with query and fragment removed.
pub fn strip_query(location: &Url) -> Url {
    let mut stripped = location.clone();
    stripped.set_query(None);
    stripped.set_fragment(None);
    stripped
}

fn loopback_addr(redirect: &Url) -> Option<SocketAddr> {
    if redirect.scheme() != "http" {
        return None;
    }
    let ip = match redirect.host()? {
        Host::Domain(domain) if domain.eq_ignore_ascii_case("localhost") => {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }
        Host::Domain(_) => return None,
        Host::Ipv4(ip) if ip.is_loopback() => IpAddr::V4(ip),
        Host::Ipv6(ip) if ip.is_loopback() => IpAddr::V6(ip),
        _ => return None,
    };
    Some(SocketAddr::new(ip, redirect.port_or_known_default()?))
}

/// Loopback HTTP listener standing in for the page the provider redirects to.
pub struct CallbackServer {
    listener: TcpListener,
    redirect: Url,
}

impl CallbackServer {
    pub async fn bind(redirect_uri: &str) -> Result<Self, CallbackError> {
        let redirect = Url::parse(redirect_uri)
            .map_err(|_| CallbackError::NotLoopback(redirect_uri.to_string()))?;
        let addr = loopback_addr(&redirect)
            .ok_or_else(|| CallbackError::NotLoopback(redirect_uri.to_string()))?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| CallbackError::Bind {
                addr: addr.to_string(),
                source,
            })?;
        info!("Callback listener bound on {}", addr);

        Ok(Self { listener, redirect })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, CallbackError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves callbacks until `cancel` fires. Each request carrying a query
    /// string is forwarded on `locations` as the full callback URL.
    /// Every connection is served on its own task under a read deadline.
    pub async fn run(self, locations: mpsc::UnboundedSender<Url>, cancel: CancellationToken) {
        let redirect = Arc::new(self.redirect);

        loop {
            let accepted = tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Callback listener shutting down");
                    return;
                }
                accepted = self.listener.accept() => accepted,
            };

            let (stream, peer) = match accepted {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Callback accept failed: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };

            debug!("Callback connection from {}", peer);
            let redirect = redirect.clone();
            let locations = locations.clone();
            let cancel = cancel.clone();
            tokio::spawn(async move {
                tokio::select! {
                    _ = cancel.cancelled() => {}
                    result = Self::handle_connection(stream, &redirect, &locations) => {
                        if let Err(e) = result {
                            warn!("Callback request from {} failed: {}", peer, e);
                        }
                    }
                }
            });
        }
    }

    async fn handle_connection(
        mut stream: TcpStream,
        redirect: &Url,
        locations: &mpsc::UnboundedSender<Url>,
    ) -> Result<(), CallbackError> {
        let buffer = tokio::time::timeout(READ_TIMEOUT, Self::read_request_line(&mut stream))
            .await
            .map_err(|_| CallbackError::Timeout)??;
        let request = String::from_utf8_lossy(&buffer);

        let response = match Self::request_target(&request) {
            Some((path, query)) if path == redirect.path() => match query {
                Some(query) => {
                    let mut location = redirect.clone();
                    location.set_query(Some(query));
                    location.set_fragment(None);
                    if locations.send(location).is_err() {
                        debug!("Callback received after the view went away");
                    }
                    Self::see_other_response(path)
                }
                None => Self::landing_response(),
            },
            _ => Self::not_found_response(),
        };

        stream.write_all(response.as_bytes()).await?;
        stream.shutdown().await?;
        Ok(())
    }

    // Reads until the request line is complete; headers are never needed.
    async fn read_request_line(stream: &mut TcpStream) -> Result<Vec<u8>, CallbackError> {
        let mut buffer = Vec::with_capacity(1024);
        let mut chunk = [0u8; 1024];

        while !buffer.windows(2).any(|w| w == b"\r\n") && buffer.len() < MAX_REQUEST_BYTES {
            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..n]);
        }
        buffer.truncate(MAX_REQUEST_BYTES);
        Ok(buffer)
    }

    // GET /path?query HTTP/1.1
    fn request_target(request: &str) -> Option<(&str, Option<&str>)> {
        let mut parts = request.lines().next()?.split_whitespace();
        if parts.next()? != "GET" {
            return None;
        }
        let target = parts.next()?;
        match target.split_once('?') {
            Some((path, query)) => Some((path, Some(query).filter(|q| !q.is_empty()))),
            None => Some((target, None)),
        }
    }

    fn see_other_response(path: &str) -> String {
        format!(
            "HTTP/1.1 303 See Other\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            path
        )
    }

    fn landing_response() -> String {
        let body = r#"<!DOCTYPE html>
<html>
<head><title>Authorization received</title></head>
<body style="font-family: system-ui; text-align: center; padding: 50px;">
<h1>Authorization received</h1>
<p>Return to the terminal to copy your authorization code.</p>
</body>
</html>"#;
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        )
    }

    fn not_found_response() -> String {
        "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string()
    }
}
