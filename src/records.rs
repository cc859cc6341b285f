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

use std::fmt;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::PowerDns;
use crate::errors::Error;
use crate::utils::name;

/// Resource record types accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RrType {
    A,
    Aaaa,
    Caa,
    Cname,
    Dnskey,
    Ds,
    Mx,
    Naptr,
    Ns,
    Ptr,
    Soa,
    Spf,
    Srv,
    Sshfp,
    Tlsa,
    Txt,
}

impl fmt::Display for RrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RrType::A => "A",
            RrType::Aaaa => "AAAA",
            RrType::Caa => "CAA",
            RrType::Cname => "CNAME",
            RrType::Dnskey => "DNSKEY",
            RrType::Ds => "DS",
            RrType::Mx => "MX",
            RrType::Naptr => "NAPTR",
            RrType::Ns => "NS",
            RrType::Ptr => "PTR",
            RrType::Soa => "SOA",
            RrType::Spf => "SPF",
            RrType::Srv => "SRV",
            RrType::Sshfp => "SSHFP",
            RrType::Tlsa => "TLSA",
            RrType::Txt => "TXT",
        };
        write!(f, "{}", name)
    }
}

/// Change directive attached to a submitted RRset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    Replace,
    Delete,
}

/// A single record value inside an RRset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(rename = "set-ptr", skip_serializing_if = "Option::is_none")]
    pub set_ptr: Option<bool>,
}

/// A named, typed set of records sharing a TTL, submitted as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RRset {
    pub name: String,
    #[serde(rename = "type")]
    pub rr_type: RrType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changetype: Option<ChangeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<Record>>,
}

impl RRset {
    /// Canonicalizes the name and fills unset per-record defaults, as the
    /// API expects them on submission.
    fn normalize(&mut self) {
        self.name = name::make_canonical(&self.name);

        if let Some(records) = self.records.as_mut() {
            for record in records {
                record.disabled.get_or_insert(false);
                record.set_ptr.get_or_insert(false);
            }
        }
    }
}

/// Batch envelope for the zone PATCH endpoint. The server accepts several
/// RRsets per call; this client always submits exactly one.
#[derive(Debug, Serialize)]
struct RrsetBatch {
    rrsets: Vec<RRset>,
}

fn replace_rrset(name: &str, rr_type: RrType, ttl: u32, content: &[&str]) -> RRset {
    let records = content
        .iter()
        .map(|value| Record {
            content: (*value).to_string(),
            disabled: Some(false),
            set_ptr: Some(false),
        })
        .collect();

    RRset {
        name: name.to_string(),
        rr_type,
        ttl: Some(ttl),
        changetype: Some(ChangeType::Replace),
        records: Some(records),
    }
}

fn delete_rrset(name: &str, rr_type: RrType) -> RRset {
    RRset {
        name: name.to_string(),
        rr_type,
        ttl: None,
        changetype: Some(ChangeType::Delete),
        records: None,
    }
}

impl PowerDns {
    /// Creates a new resource record set.
    ///
    /// The remote PATCH semantics make every submission a full replace, so
    /// this is an alias of [`change_record`](Self::change_record).
    pub async fn add_record(
        &self,
        zone: &str,
        name: &str,
        rr_type: RrType,
        ttl: u32,
        content: &[&str],
    ) -> Result<(), Error> {
        self.change_record(zone, name, rr_type, ttl, content).await
    }

    /// Replaces a resource record set with one record per content string.
    pub async fn change_record(
        &self,
        zone: &str,
        name: &str,
        rr_type: RrType,
        ttl: u32,
        content: &[&str],
    ) -> Result<(), Error> {
        self.patch_rrset(zone, replace_rrset(name, rr_type, ttl, content))
            .await?;
        info!("replaced {} record set {} in zone {}", rr_type, name, zone);
        Ok(())
    }

    /// Removes a resource record set.
    pub async fn delete_record(&self, zone: &str, name: &str, rr_type: RrType) -> Result<(), Error> {
        self.patch_rrset(zone, delete_rrset(name, rr_type)).await?;
        info!("deleted {} record set {} in zone {}", rr_type, name, zone);
        Ok(())
    }

    async fn patch_rrset(&self, zone: &str, mut rrset: RRset) -> Result<(), Error> {
        rrset.normalize();

        let payload = RrsetBatch {
            rrsets: vec![rrset],
        };
        let path = format!(
            "servers/{}/zones/{}",
            self.vhost(),
            name::trim_trailing_dot(zone)
        );

        self.api_call(Method::PATCH, &path, Some(&payload)).await
    }
}
