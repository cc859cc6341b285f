// Copyright 2026 powerdns-client authors
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{check_response, Error};
use crate::utils::request::{exchange, RawResponse};

/// PowerDNS API client configuration.
///
/// Built once from a base URL and immutable afterwards, so one value can be
/// shared freely across callers. Cloning is cheap (the HTTP handle is
/// reference-counted), which lets fetched resources carry their own copy for
/// follow-up calls.
#[derive(Debug, Clone)]
pub struct PowerDns {
    scheme: String,
    hostname: String,
    port: u16,
    vhost: String,
    headers: HeaderMap,
    http: Client,
}

impl PowerDns {
    /// Builds a client configuration from a base URL.
    ///
    /// The URL must carry a scheme and host; the port defaults to 443 for
    /// `https` and 80 otherwise. An empty `vhost` resolves to `"localhost"`.
    /// The headers are attached to every request the client makes. When no
    /// HTTP client is supplied, a default one is used.
    ///
    /// No network I/O happens here; an unparsable URL is reported as
    /// [`Error::InvalidBaseUrl`].
    pub fn new(
        base_url: &str,
        vhost: &str,
        headers: HeaderMap,
        http_client: Option<Client>,
    ) -> Result<Self, Error> {
        let (scheme, hostname, port) = parse_base_url(base_url)?;

        Ok(PowerDns {
            scheme,
            hostname,
            port,
            vhost: parse_vhost(vhost),
            headers,
            http: http_client.unwrap_or_default(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Virtual host name used to scope all API paths.
    pub fn vhost(&self) -> &str {
        &self.vhost
    }

    fn base_url(&self) -> String {
        format!("{}://{}:{}/api/v1/", self.scheme, self.hostname, self.port)
    }

    fn build_url(&self, path: &str, query: Option<&[(&str, &str)]>) -> Result<Url, Error> {
        let raw = format!("{}{}", self.base_url(), path);
        let mut url = Url::parse(&raw).map_err(|e| Error::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        if let Some(params) = query {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    /// Performs one API call and deserializes the response body into `T`.
    pub(crate) async fn api_request<T>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        payload: Option<&impl Serialize>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch(method, path, query, payload).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Performs one API call and discards the response body. For endpoints
    /// answering 204 or with a body the caller does not need.
    pub(crate) async fn api_call(
        &self,
        method: Method,
        path: &str,
        payload: Option<&impl Serialize>,
    ) -> Result<(), Error> {
        self.dispatch(method, path, None, payload).await?;
        Ok(())
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        payload: Option<&impl Serialize>,
    ) -> Result<RawResponse, Error> {
        let url = self.build_url(path, query)?;

        let mut headers = self.headers.clone();
        let body = match payload {
            Some(value) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(serde_json::to_string(value)?)
            }
            None => None,
        };

        let response = exchange(&self.http, method, url, headers, body).await?;
        check_response(response.status, &response.body)?;

        Ok(response)
    }
}

fn parse_base_url(base_url: &str) -> Result<(String, String, u16), Error> {
    let url = Url::parse(base_url).map_err(|e| Error::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    let scheme = url.scheme().to_string();
    let hostname = url
        .host_str()
        .ok_or_else(|| Error::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: "missing host".to_string(),
        })?
        .to_string();

    let port = match url.port() {
        Some(port) => port,
        None if scheme == "https" => 443,
        None => 80,
    };

    Ok((scheme, hostname, port))
}

fn parse_vhost(vhost: &str) -> String {
    if vhost.is_empty() {
        "localhost".to_string()
    } else {
        vhost.to_string()
    }
}
