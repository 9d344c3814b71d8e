//! HTTP access.
use std::time::Duration;

use log::debug;
use reqwest::Url;

use crate::error::Error;

/// Fetches the body of a resource.
///
/// The fetcher only ever needs whole bodies (listing pages and PDFs),
/// so this is the only operation.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<Vec<u8>, Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url) -> Result<Vec<u8>, Error> {
        (**self).get(url)
    }
}

/// Blocking [reqwest] client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a client that gives up on a request after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<Vec<u8>, Error> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                code: status.as_u16(),
            });
        }
        Ok(response.bytes()?.to_vec())
    }
}
