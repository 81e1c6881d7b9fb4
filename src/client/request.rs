//! Request and response values that flow through the pipeline.

use serde_json::Value;

use crate::models::{encode_parameters, Method, Placement, QueryParameter};
use crate::{Error, Result};

/// Media type of a POST body carrying parameters.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// One logical API call: verb, base URI and ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP verb
    pub method: Method,
    /// Endpoint URI without a query string
    pub base_uri: String,
    /// Unencoded parameters, in wire order
    pub params: Vec<QueryParameter>,
}

impl RequestDescriptor {
    /// Create a descriptor with no parameters.
    pub fn new(method: Method, base_uri: impl Into<String>) -> Self {
        Self {
            method,
            base_uri: base_uri.into(),
            params: Vec::new(),
        }
    }

    /// Replace the parameter list.
    pub fn with_params(mut self, params: Vec<QueryParameter>) -> Self {
        self.params = params;
        self
    }

    /// Append one parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(QueryParameter::new(key, value));
        self
    }

    /// Lay the parameters out according to the verb's placement and attach
    /// the authorization value.
    pub fn prepare(&self, authorization: String) -> PreparedRequest {
        let mut headers = vec![("Authorization".to_string(), authorization)];
        let mut url = self.base_uri.clone();
        let mut body = None;

        if !self.params.is_empty() {
            let encoded = encode_parameters(&self.params);
            match self.method.placement() {
                Placement::Query => {
                    url.push('?');
                    url.push_str(&encoded);
                }
                Placement::Body => {
                    headers.push(("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()));
                    headers.push(("Content-Length".to_string(), encoded.len().to_string()));
                    body = Some(encoded.into_bytes());
                }
            }
        } else if self.method == Method::Post {
            headers.push(("Content-Length".to_string(), "0".to_string()));
        }

        PreparedRequest {
            method: self.method,
            url,
            headers,
            body,
        }
    }
}

/// A request in wire form, ready for a [`Transport`](super::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP verb
    pub method: Method,
    /// Full URL, including the query string for GET
    pub url: String,
    /// Headers to send, in order
    pub headers: Vec<(String, String)>,
    /// Body bytes; never set for GET
    pub body: Option<Vec<u8>>,
}

impl PreparedRequest {
    /// Look up a header value, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body text of a completed round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    /// HTTP status code
    pub status: u16,
    /// Body decoded as UTF-8
    pub body: String,
}

impl ResponseEnvelope {
    /// Build an envelope from raw body bytes.
    ///
    /// Error bodies are kept even if they are not valid UTF-8 (invalid
    /// sequences are replaced); a success body must be valid UTF-8.
    pub fn from_bytes(status: u16, bytes: Vec<u8>) -> Result<Self> {
        let body = match String::from_utf8(bytes) {
            Ok(body) => body,
            Err(e) if !is_success(status) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
            Err(e) => return Err(Error::malformed(format!("response body is not UTF-8: {}", e))),
        };
        Ok(Self { status, body })
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        is_success(self.status)
    }

    /// Classify by status, then parse the body as JSON.
    ///
    /// # Errors
    ///
    /// [`Error::Api`] for any non-2xx status (the body is not parsed), or
    /// [`Error::MalformedEntity`] if a success body is not JSON.
    pub fn into_json(self) -> Result<Value> {
        if !self.is_success() {
            return Err(Error::Api {
                status: self.status,
                body: self.body,
            });
        }
        serde_json::from_str(&self.body)
            .map_err(|e| Error::malformed(format!("response body is not valid JSON: {}", e)))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
