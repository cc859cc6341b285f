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

use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode, Url};
use tracing::debug;

use crate::errors::Error;

/// Raw outcome of one HTTP exchange, before error mapping.
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: String,
}

/// Performs a single HTTP call with the given headers and optional body.
///
/// Transport failures surface as [`Error::Transport`] unchanged; status
/// classification is the caller's job.
pub(crate) async fn exchange(
    client: &Client,
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<String>,
) -> Result<RawResponse, Error> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url).headers(headers);
    if let Some(body) = body {
        request = request.body(body);
    }

    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    Ok(RawResponse { status, body })
}
