//! Typed client for the PowerDNS Authoritative Server HTTP API
//!
//! Supported features:
//! - Zone management (list, get, create, change, delete)
//! - DNSSEC signing key management, including the GET-based activation toggle
//! - Record set changes (replace and delete) with canonical name handling
//!
//! # Example
//! ```
//! use reqwest::header::{HeaderMap, HeaderValue};
//! use powerdns_client::PowerDns;
//!
//! let mut headers = HeaderMap::new();
//! headers.insert("X-API-Key", HeaderValue::from_static("secret"));
//!
//! let client = PowerDns::new("http://localhost:8081", "localhost", headers, None).unwrap();
//! assert_eq!(client.port(), 8081);
//! ```

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

pub mod client;
pub mod cryptokeys;
pub mod errors;
pub mod records;
pub mod zones;
pub(crate) mod utils;

pub use client::PowerDns;
pub use cryptokeys::Cryptokey;
pub use errors::Error;
pub use records::{ChangeType, RRset, Record, RrType};
pub use zones::{Zone, ZoneKind};
