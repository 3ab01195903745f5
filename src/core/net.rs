// src/core/net.rs
//
// Blocking HTTP GET. One client is shared by every worker thread.

use tracing::debug;

use crate::config::options::NetOptions;
use crate::error::{Error, Result};

/// Anything that can turn a URL into a response body.
/// Production code uses [`Client`]; tests substitute canned responses.
pub trait HttpGet: Send + Sync {
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct Client {
    inner: reqwest::blocking::Client,
}

impl Client {
    pub fn new(net: &NetOptions) -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(net.user_agent.as_str())
            .timeout(net.timeout)
            .build()
            .map_err(Error::ClientSetup)?;
        Ok(Self { inner })
    }
}

impl HttpGet for Client {
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {url}");
        let http = |e: reqwest::Error| Error::Http { url: url.to_string(), source: e.into() };

        let resp = self.inner.get(url).send().map_err(http)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url: url.to_string(), status: status.as_u16() });
        }
        let body = resp.bytes().map_err(http)?;
        Ok(body.to_vec())
    }
}
