// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the my-PV local JSON API.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::{Error, ParseError, ProtocolError};
use crate::protocol::{DeviceApi, FieldMap};

/// Configuration for an HTTP connection to a my-PV device.
///
/// # Examples
///
/// ```
/// use mypv_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.50")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.port == Self::DEFAULT_PORT {
            format!("http://{}", self.host)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Creates an [`HttpClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }

        let base_url = self.base_url();
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            host: self.host,
            base_url,
            client,
            timeout: self.timeout,
        })
    }
}

/// HTTP client for the my-PV local JSON API.
///
/// # Examples
///
/// ```no_run
/// use mypv_lib::protocol::{DeviceApi, HttpClient};
///
/// # async fn example() -> mypv_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.50")?;
/// let data = client.fetch_data().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    host: String,
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a new client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the device host address.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_error(&self, err: reqwest::Error) -> ProtocolError {
        if err.is_timeout() {
            ProtocolError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
        } else {
            ProtocolError::Http(err)
        }
    }

    fn write_url(&self, field: &str, value: i64) -> String {
        format!(
            "{}/setup.jsn?{}={value}",
            self.base_url,
            urlencoding::encode(field)
        )
    }

    async fn get_object(&self, url: &str) -> Result<FieldMap, Error> {
        tracing::debug!(url = %url, "sending HTTP request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.request_error(err))?;

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            ))
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|err| self.request_error(err))?;

        tracing::debug!(body = %body, "received HTTP response");

        let value: Value = serde_json::from_str(&body).map_err(ParseError::Json)?;
        match value {
            Value::Object(map) => Ok(map),
            other => Err(ParseError::UnexpectedFormat(format!(
                "expected JSON object, got {other}"
            ))
            .into()),
        }
    }
}

impl DeviceApi for HttpClient {
    async fn fetch_data(&self) -> Result<FieldMap, Error> {
        self.get_object(&format!("{}/data.jsn", self.base_url)).await
    }

    async fn fetch_setup(&self) -> Result<FieldMap, Error> {
        self.get_object(&format!("{}/setup.jsn", self.base_url))
            .await
    }

    async fn write_setup(&self, field: &str, value: i64) -> Result<FieldMap, Error> {
        self.get_object(&self.write_url(field, value)).await
    }
}
