//! The HTTP round trip.
//!
//! [`Transport`] is the seam between the pipeline and the platform's HTTP
//! stack. [`ReqwestTransport`] is the default, built on `reqwest::blocking`.

use std::fmt;
use std::io::Read;

use tracing::debug;

use super::config::ClientConfig;
use super::request::PreparedRequest;
use crate::models::Method;
use crate::{Error, Result};

/// Status, declared length and body stream of a response.
///
/// The body is consumed by the response reader; dropping the value releases
/// the underlying connection resources.
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Length the server declared for the body, if any
    pub content_length: Option<u64>,
    /// Body byte stream
    pub body: Box<dyn Read + Send>,
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Performs one HTTP round trip.
///
/// Implementations must send every header and the body of the
/// [`PreparedRequest`] as given, and report a non-2xx status as data rather
/// than as an error. Errors are reserved for failures to complete the round
/// trip and should be [`Error::Transport`].
pub trait Transport: Send + Sync {
    /// Send the request and return the response head and body stream.
    fn execute(&self, request: &PreparedRequest) -> Result<TransportResponse>;
}

/// Blocking transport over `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a transport honouring the configured timeout and user agent.
    ///
    /// Redirects are never followed; a 3xx reaches the caller as its own
    /// response.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { http })
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: &PreparedRequest) -> Result<TransportResponse> {
        let mut builder = match request.method {
            Method::Get => self.http.get(&request.url),
            Method::Post => self.http.post(&request.url),
        };

        for (name, value) in &request.headers {
            // reqwest derives Content-Length from the body it is given.
            if name.eq_ignore_ascii_case("content-length") {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        } else if request.method == Method::Post {
            builder = builder.body(Vec::new());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let content_length = response.content_length();
        debug!(status, ?content_length, "Received response head");

        Ok(TransportResponse {
            status,
            content_length,
            body: Box::new(response),
        })
    }
}
