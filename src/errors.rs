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

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Body shape the server uses for failed requests.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Errors returned by client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The server answered with a status code of 400 or above. Carries the
    /// HTTP status line and the message from the JSON error body.
    #[error("{status}: {message}")]
    Api { status: String, message: String },

    /// Underlying HTTP client failure, propagated unchanged.
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The base URL handed to the constructor could not be parsed.
    #[error("{url} is not a valid base URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Instance method invoked on a resource value that was not obtained
    /// through a client.
    #[error("resource is not attached to a client")]
    Detached,
}

/// Classifies a completed HTTP exchange.
///
/// A status below 400 never produces an error, whatever the body holds. At
/// 400 and above the JSON body's `error` field becomes the message; a body
/// that is not the documented error object is carried through as-is.
pub(crate) fn check_response(status: StatusCode, body: &str) -> Result<(), Error> {
    if status.as_u16() < 400 {
        return Ok(());
    }

    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().to_string(),
    };

    Err(Error::Api {
        status: status_line(status),
        message,
    })
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
